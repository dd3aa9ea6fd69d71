use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        leaderboard::SeasonLeaderboardEntry,
        tournament::{AddMatchesRequest, CreateTournamentRequest},
    },
    models::Tournament,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/tournaments",
    responses(
        (status = 200, description = "List all tournaments", body = Vec<Tournament>)
    ),
    tag = "tournaments"
)]
pub async fn list_tournaments(
    State(db): State<Database>,
) -> Result<Json<Vec<Tournament>>, WebError> {
    let tournaments = services::list_tournaments(db.pool()).await?;

    Ok(Json(tournaments))
}

#[utoipa::path(
    post,
    path = "/api/tournaments",
    request_body = CreateTournamentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Tournament created", body = Tournament),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "tournaments"
)]
pub async fn create_tournament(
    State(db): State<Database>,
    Json(req): Json<CreateTournamentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let tournament = services::create_tournament(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(tournament)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournaments/{id}/matches",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    request_body = AddMatchesRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Matches attached to the tournament", body = Tournament),
        (status = 400, description = "Unknown match in request"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn add_matches(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddMatchesRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let tournament = services::add_matches(db.pool(), id, &req.match_ids).await?;

    Ok(Json(tournament).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{id}/leaderboard",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Season standings: squad totals summed per user across the tournament's matches, top 100", body = Vec<SeasonLeaderboardEntry>),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn season_leaderboard(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let entries = services::season_leaderboard(db.pool(), id).await?;

    Ok(Json(entries).into_response())
}
