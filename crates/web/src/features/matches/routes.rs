use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{
    create_match, get_match, list_match_performances, list_matches, match_leaderboard,
    run_match_scoring, update_match_status,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_match))
        .route("/:id/status", put(update_match_status))
        .route("/:id/scoring-runs", post(run_match_scoring))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_matches))
        .route("/:id", get(get_match))
        .route("/:id/leaderboard", get(match_leaderboard))
        .route("/:id/performances", get(list_match_performances))
        .merge(protected)
}
