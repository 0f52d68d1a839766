//! Login and logout endpoints

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::Session, AppState};

use super::MessageResponse;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    /// Bearer token for the `Authorization` header
    pub token: String,
}

/// Open a session with the built-in account
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    body: Option<Json<LoginRequest>>,
) -> AppResult<Json<LoginResponse>> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let session = state
        .services
        .auth
        .login(request.username.as_deref(), request.password.as_deref())
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: session.token,
    }))
}

/// Close the current session
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Json<MessageResponse> {
    state.services.auth.logout(&session.token).await;
    Json(MessageResponse::new("Logged out successfully"))
}
