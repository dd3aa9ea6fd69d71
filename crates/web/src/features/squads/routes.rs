use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_squad, get_squad_for_match_and_user, list_squads_for_user};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_squad))
        .route(
            "/match/:match_id/user/:user_id",
            get(get_squad_for_match_and_user),
        )
        .route("/user/:user_id", get(list_squads_for_user))
}
