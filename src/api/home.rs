//! Public landing endpoint

use axum::Json;

use super::MessageResponse;

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    )
)]
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the Library Management System!"))
}
