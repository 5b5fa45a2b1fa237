//! # bookshelf-client
//!
//! Data model and HTTP client for the Bookshelf book-catalog API.
//!
//! ## Endpoints
//!
//! | Operation | Method | Path | Body |
//! |-----------|--------|------|------|
//! | List | `GET` | `/books` | none |
//! | Search | `GET` | `/books?query=<text>` | none |
//! | Create | `POST` | `/books` | `{name, author}` |
//! | Update | `PUT` | `/books/{id}` | `{name, author}` |
//! | Delete | `DELETE` | `/books/{id}` | none |
//!
//! A response is successful iff its status is 2xx. Otherwise the error text is
//! the body's JSON `message`, or `HTTP error! Status: <code> <status text>`
//! when there is none.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bookshelf_client::{BookApi, BookDraft, ClientConfig, HttpBookClient};
//!
//! # async fn run() -> bookshelf_client::Result<()> {
//! let client = HttpBookClient::new(ClientConfig::new("http://localhost:8080/api"))?;
//!
//! client.create_book(&BookDraft::new("Dune", "Frank Herbert")?).await?;
//! for book in client.list_books().await? {
//!     println!("{} {} by {}", book.label(), book.name, book.author);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod http_client;
mod traits;
mod types;

pub use client::{ClientConfig, DEFAULT_BASE_URL, HttpBookClient};
pub use error::{ApiError, Result};
pub use traits::BookApi;
pub use types::{
    Acknowledgement, Book, BookDraft, BookId, EMPTY_SEARCH_TERM, FILL_ALL_FIELDS, SearchQuery,
};
