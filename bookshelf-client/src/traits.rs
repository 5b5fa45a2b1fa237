use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Acknowledgement, Book, BookDraft, BookId, SearchQuery};

/// Catalog API operations.
///
/// Every call resolves exactly once, either with the decoded body or an
/// [`ApiError`](crate::ApiError). Nothing is cached and nothing is retried.
#[async_trait]
pub trait BookApi: Send + Sync {
    /// `GET /books`
    async fn list_books(&self) -> Result<Vec<Book>>;

    /// `GET /books?query=<text>`
    async fn search_books(&self, query: &SearchQuery) -> Result<Vec<Book>>;

    /// `POST /books`
    async fn create_book(&self, draft: &BookDraft) -> Result<Acknowledgement>;

    /// `PUT /books/{id}`
    async fn update_book(&self, id: &BookId, draft: &BookDraft) -> Result<Acknowledgement>;

    /// `DELETE /books/{id}`
    async fn delete_book(&self, id: &BookId) -> Result<Acknowledgement>;
}
