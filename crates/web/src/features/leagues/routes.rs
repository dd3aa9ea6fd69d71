use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    create_league, get_league_by_code, join_league, league_leaderboard, list_leagues_for_user,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_league))
        .route("/join", post(join_league))
        .route("/code/:code", get(get_league_by_code))
        .route("/user/:user_id", get(list_leagues_for_user))
        .route("/:id/leaderboard", get(league_leaderboard))
}
