use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        leaderboard::LeagueLeaderboardEntry,
        league::{CreateLeagueRequest, JoinLeagueRequest},
    },
    models::League,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/leagues",
    request_body = CreateLeagueRequest,
    responses(
        (status = 201, description = "League created with a fresh join code", body = League),
        (status = 400, description = "Validation error")
    ),
    tag = "leagues"
)]
pub async fn create_league(
    State(db): State<Database>,
    Json(req): Json<CreateLeagueRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let league = services::create_league(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(league)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/leagues/code/{code}",
    params(
        ("code" = String, Path, description = "League join code")
    ),
    responses(
        (status = 200, description = "League found", body = League),
        (status = 404, description = "Invalid league code")
    ),
    tag = "leagues"
)]
pub async fn get_league_by_code(
    State(db): State<Database>,
    Path(code): Path<String>,
) -> Result<Response, WebError> {
    let league = services::get_league_by_code(db.pool(), &code).await?;

    Ok(Json(league).into_response())
}

#[utoipa::path(
    post,
    path = "/api/leagues/join",
    request_body = JoinLeagueRequest,
    responses(
        (status = 200, description = "Joined the league", body = League),
        (status = 400, description = "Squad does not belong to the league's match"),
        (status = 404, description = "League or squad not found"),
        (status = 409, description = "Already joined this league")
    ),
    tag = "leagues"
)]
pub async fn join_league(
    State(db): State<Database>,
    Json(req): Json<JoinLeagueRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let league = services::join_league(db.pool(), &req).await?;

    Ok(Json(league).into_response())
}

#[utoipa::path(
    get,
    path = "/api/leagues/user/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Leagues the user participates in", body = Vec<League>)
    ),
    tag = "leagues"
)]
pub async fn list_leagues_for_user(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<League>>, WebError> {
    let leagues = services::list_leagues_for_user(db.pool(), user_id).await?;

    Ok(Json(leagues))
}

#[utoipa::path(
    get,
    path = "/api/leagues/{id}/leaderboard",
    params(
        ("id" = Uuid, Path, description = "League ID")
    ),
    responses(
        (status = 200, description = "League standings from cached squad totals", body = Vec<LeagueLeaderboardEntry>),
        (status = 404, description = "League not found")
    ),
    tag = "leagues"
)]
pub async fn league_leaderboard(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let entries = services::league_leaderboard(db.pool(), id).await?;

    Ok(Json(entries).into_response())
}
