use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::squad::CreateSquadRequest, models::Squad, scoring::ScoringRules};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/squads",
    request_body = CreateSquadRequest,
    responses(
        (status = 201, description = "Squad drafted", body = Squad),
        (status = 400, description = "Invalid roster (size, duplicates, captain designations, or credit budget)")
    ),
    tag = "squads"
)]
pub async fn create_squad(
    State(db): State<Database>,
    Extension(rules): Extension<ScoringRules>,
    Json(req): Json<CreateSquadRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let squad = services::create_squad(db.pool(), &rules, &req).await?;

    Ok((StatusCode::CREATED, Json(squad)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/squads/match/{match_id}/user/{user_id}",
    params(
        ("match_id" = Uuid, Path, description = "Match ID"),
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's squad for the match", body = Squad),
        (status = 404, description = "Squad not found")
    ),
    tag = "squads"
)]
pub async fn get_squad_for_match_and_user(
    State(db): State<Database>,
    Path((match_id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    let squad = services::get_squad_for_match_and_user(db.pool(), match_id, user_id).await?;

    Ok(Json(squad).into_response())
}

#[utoipa::path(
    get,
    path = "/api/squads/user/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "All squads drafted by the user", body = Vec<Squad>)
    ),
    tag = "squads"
)]
pub async fn list_squads_for_user(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Squad>>, WebError> {
    let squads = services::list_squads_for_user(db.pool(), user_id).await?;

    Ok(Json(squads))
}
