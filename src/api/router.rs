use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, check_availability, create_book, delete_book, list_books, replace_book,
    search_books, update_book_status,
};

/// Creates the API router with all catalog endpoints
///
/// Command endpoints (Write operations):
/// - POST /books - Create a book
/// - PUT /books/:id - Replace a book
/// - PUT /books/:id/status - Update only the status
/// - DELETE /books/:id - Delete a book
///
/// Query endpoints (Read operations):
/// - GET /books - List all books
/// - GET /books/search - Search by title and/or author
/// - GET /books/availability - Find the next date two of the titles are free
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Catalog endpoints
        .route("/books", get(list_books).post(create_book))
        .route("/books/search", get(search_books))
        .route("/books/availability", get(check_availability))
        .route("/books/:id", put(replace_book).delete(delete_book))
        .route("/books/:id/status", put(update_book_status))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
