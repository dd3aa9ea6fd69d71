use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        leaderboard::{MatchLeaderboardEntry, MatchLeaderboardQuery},
        matches::{
            CreateMatchRequest, ScoringRunRequest, ScoringRunSummary, UpdateMatchStatusRequest,
        },
    },
    models::{Match, MatchPerformance},
    scoring::ScoringRules,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/matches",
    responses(
        (status = 200, description = "List all matches", body = Vec<Match>)
    ),
    tag = "matches"
)]
pub async fn list_matches(State(db): State<Database>) -> Result<Json<Vec<Match>>, WebError> {
    let matches = services::list_matches(db.pool()).await?;

    Ok(Json(matches))
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match found", body = Match),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn get_match(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let m = services::get_match(db.pool(), id).await?;

    Ok(Json(m).into_response())
}

#[utoipa::path(
    post,
    path = "/api/matches",
    request_body = CreateMatchRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Match scheduled", body = Match),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "matches"
)]
pub async fn create_match(
    State(db): State<Database>,
    Json(req): Json<CreateMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let m = services::create_match(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(m)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/matches/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    request_body = UpdateMatchStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Match status updated", body = Match),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn update_match_status(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMatchStatusRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let m = services::update_match_status(db.pool(), id, &req).await?;

    Ok(Json(m).into_response())
}

#[utoipa::path(
    post,
    path = "/api/matches/{id}/scoring-runs",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    request_body = ScoringRunRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Scoring run committed", body = ScoringRunSummary),
        (status = 400, description = "Invalid stat lines"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match not found"),
        (status = 409, description = "A scoring run is already in progress for this match")
    ),
    tag = "matches"
)]
pub async fn run_match_scoring(
    State(db): State<Database>,
    Extension(rules): Extension<ScoringRules>,
    Path(id): Path<Uuid>,
    Json(req): Json<ScoringRunRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let summary = services::run_match_scoring(db.pool(), &rules, id, &req.performances).await?;

    Ok(Json(summary).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}/leaderboard",
    params(
        ("id" = Uuid, Path, description = "Match ID"),
        MatchLeaderboardQuery
    ),
    responses(
        (status = 200, description = "Top squads for the match", body = Vec<MatchLeaderboardEntry>),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn match_leaderboard(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Query(query): Query<MatchLeaderboardQuery>,
) -> Result<Response, WebError> {
    let entries = services::match_leaderboard(db.pool(), id, query.limit).await?;

    Ok(Json(entries).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}/performances",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Recorded player performances for the match", body = Vec<MatchPerformance>),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn list_match_performances(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let performances = services::list_match_performances(db.pool(), id).await?;

    Ok(Json(performances).into_response())
}
