//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
    AppState,
};

use super::MessageResponse;

/// A book together with a confirmation message
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub message: String,
    pub book: Book,
}

/// List books with search and pagination
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    params(BookQuery),
    responses(
        (status = 200, description = "One page of matching books", body = Vec<Book>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<BookQuery>, AppError>,
) -> Json<Vec<Book>> {
    Json(state.services.catalog.search_books(&query).await)
}

/// Add a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book added", body = BookResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateBook>, AppError>,
) -> (StatusCode, Json<BookResponse>) {
    let book = state.services.catalog.create_book(data).await;
    (
        StatusCode::CREATED,
        Json(BookResponse {
            message: "Book added successfully".to_string(),
            book,
        }),
    )
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&id).await?;
    Ok(Json(book))
}

/// Update the known fields of a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateBook>, AppError>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.update_book(&id, data).await?;
    Ok(Json(BookResponse {
        message: "Book updated successfully".to_string(),
        book,
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.delete_book(&id).await?;
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
