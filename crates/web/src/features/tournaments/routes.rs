use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{add_matches, create_tournament, list_tournaments, season_leaderboard};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_tournament))
        .route("/:id/matches", post(add_matches))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_tournaments))
        .route("/:id/leaderboard", get(season_leaderboard))
        .merge(protected)
}
