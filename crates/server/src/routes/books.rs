use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::MessageResponse;
use models::book::{Book, BookUpdate, NewBook};

use crate::errors::JsonApiError;
use crate::state::AppState;

/// 列出所有图书（按插入顺序）
#[utoipa::path(get, path = "/books", tag = "books", responses((status = 200, description = "All books", body = [crate::openapi::BookDoc])))]
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, JsonApiError> {
    let books = state.books.list().await?;
    Ok(Json(books))
}

#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "ISBN as submitted at creation")),
    responses(
        (status = 200, description = "The book", body = crate::openapi::BookDoc),
        (status = 404, description = "Book not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, JsonApiError> {
    let book = state.books.get(&isbn).await?;
    Ok(Json(book))
}

#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = crate::openapi::NewBookDoc,
    responses(
        (status = 201, description = "Book added", body = crate::openapi::BookMessageDoc),
        (status = 400, description = "Missing field or non-numeric ISBN", body = crate::openapi::MessageDoc),
        (status = 409, description = "ISBN already exists", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse<Book>>), JsonApiError> {
    let Json(input) = payload?;
    let book = state.books.create(input).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::with_book("Book added", book))))
}

#[utoipa::path(
    put,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "ISBN of the book to update")),
    request_body = crate::openapi::BookUpdateDoc,
    responses(
        (status = 200, description = "Book updated", body = crate::openapi::BookMessageDoc),
        (status = 400, description = "Missing field", body = crate::openapi::MessageDoc),
        (status = 404, description = "Book not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    payload: Result<Json<BookUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse<Book>>, JsonApiError> {
    let Json(input) = payload?;
    let book = state.books.update(&isbn, input).await?;
    Ok(Json(MessageResponse::with_book("Book updated", book)))
}

#[utoipa::path(
    delete,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "ISBN of the book to delete")),
    responses(
        (status = 200, description = "Book deleted", body = crate::openapi::BookMessageDoc),
        (status = 404, description = "Book not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<MessageResponse<Book>>, JsonApiError> {
    let book = state.books.delete(&isbn).await?;
    Ok(Json(MessageResponse::with_book("Book deleted", book)))
}
