//! API handlers for the library REST endpoints

pub mod auth;
pub mod books;
pub mod home;
pub mod members;
pub mod openapi;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Plain `{"message": ...}` body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Token part of an `Authorization` header: everything after the first space.
///
/// The scheme word is not checked. A header with no space or nothing after
/// it yields `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (_, token) = value.split_once(' ')?;
    (!token.is_empty()).then_some(token)
}

/// Reject requests without a live session; otherwise attach the [`Session`]
/// to the request extensions.
///
/// [`Session`]: crate::models::Session
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let token = bearer_token(request.headers())
        .ok_or(AppError::Unauthorized)?
        .to_string();

    let session = state.services.auth.authenticate(&token).await?;
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Everything here, unknown paths included, sits behind the session check
    let protected = Router::new()
        .route("/logout", post(auth::logout))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Members
        .route("/members", get(members::list_members).post(members::create_member))
        .route(
            "/members/:id",
            get(members::get_member)
                .put(members::update_member)
                .delete(members::delete_member),
        )
        // OpenAPI documentation
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/", get(home::home))
        .route("/login", post(auth::login))
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .map_response(|res: axum::http::Response<_>| res.map(axum::body::Body::new))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn token_follows_first_space() {
        assert_eq!(bearer_token(&headers("Bearer abc")), Some("abc"));
        assert_eq!(bearer_token(&headers("Token abc")), Some("abc"));
        assert_eq!(bearer_token(&headers("Bearer a b")), Some("a b"));
    }

    #[test]
    fn missing_or_empty_token_is_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers("Bearer")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
    }
}
