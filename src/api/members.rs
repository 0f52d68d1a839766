//! Member endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::member::{CreateMember, Member, UpdateMember},
    AppState,
};

use super::MessageResponse;

/// A member together with a confirmation message
#[derive(Serialize, ToSchema)]
pub struct MemberResponse {
    pub message: String,
    pub member: Member,
}

/// List all members
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All members", body = Vec<Member>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_members(State(state): State<AppState>) -> Json<Vec<Member>> {
    Json(state.services.members.list().await)
}

/// Register a member
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    security(("bearer_auth" = [])),
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member added", body = MemberResponse)
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateMember>, AppError>,
) -> (StatusCode, Json<MemberResponse>) {
    let member = state.services.members.create(data).await;
    (
        StatusCode::CREATED,
        Json(MemberResponse {
            message: "Member added successfully".to_string(),
            member,
        }),
    )
}

#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member details", body = Member),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Member>> {
    let member = state.services.members.get_by_id(&id).await?;
    Ok(Json(member))
}

#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Member ID")),
    request_body = UpdateMember,
    responses(
        (status = 200, description = "Member updated", body = MemberResponse),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateMember>, AppError>,
) -> AppResult<Json<MemberResponse>> {
    let member = state.services.members.update(&id, data).await?;
    Ok(Json(MemberResponse {
        message: "Member updated successfully".to_string(),
        member,
    }))
}

#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member deleted", body = MessageResponse),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.members.delete(&id).await?;
    Ok(Json(MessageResponse::new("Member deleted successfully")))
}
