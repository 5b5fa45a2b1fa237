//! `reqwest`-backed implementation of [`BookApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::http_client::{HttpResponse, HttpUtils};
use crate::traits::BookApi;
use crate::types::{Acknowledgement, Book, BookDraft, BookId, SearchQuery};

/// Default API root of the reference server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

const DEFAULT_USER_AGENT: &str = concat!("bookshelf-client/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`HttpBookClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Per-request timeout. Without one the client waits on the transport.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// HTTP client for the book catalog.
#[derive(Debug, Clone)]
pub struct HttpBookClient {
    client: Client,
    config: ClientConfig,
}

impl HttpBookClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ApiError::Network {
            detail: format!("Failed to create HTTP client: {e}"),
        })?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.config.base_url)
    }

    fn book_url(&self, id: &BookId) -> String {
        format!(
            "{}/books/{}",
            self.config.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}/books?query={}",
            self.config.base_url,
            urlencoding::encode(query.as_str())
        )
    }

    async fn send(request: RequestBuilder, method: &str, url: &str) -> Result<HttpResponse> {
        let response = HttpUtils::execute_request(request, method, url)
            .await
            .inspect_err(|e| log::error!("[bookshelf] {method} {url} failed: {e}"))?;
        HttpUtils::ensure_success(response)
    }

    fn with_json_body<B: Serialize>(request: RequestBuilder, body: &B) -> Result<RequestBuilder> {
        let bytes = serde_json::to_vec(body).map_err(|e| ApiError::Serialization {
            detail: e.to_string(),
        })?;
        Ok(request
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(bytes))
    }
}

#[async_trait]
impl BookApi for HttpBookClient {
    async fn list_books(&self) -> Result<Vec<Book>> {
        let url = self.books_url();
        let response = Self::send(self.client.get(&url), "GET", &url).await?;
        HttpUtils::parse_json(&response.body)
    }

    async fn search_books(&self, query: &SearchQuery) -> Result<Vec<Book>> {
        let url = self.search_url(query);
        let response = Self::send(self.client.get(&url), "GET", &url).await?;
        HttpUtils::parse_json(&response.body)
    }

    async fn create_book(&self, draft: &BookDraft) -> Result<Acknowledgement> {
        let url = self.books_url();
        let request = Self::with_json_body(self.client.post(&url), draft)?;
        let response = Self::send(request, "POST", &url).await?;
        Ok(Acknowledgement::from_body(&response.body))
    }

    async fn update_book(&self, id: &BookId, draft: &BookDraft) -> Result<Acknowledgement> {
        let url = self.book_url(id);
        let request = Self::with_json_body(self.client.put(&url), draft)?;
        let response = Self::send(request, "PUT", &url).await?;
        Ok(Acknowledgement::from_body(&response.body))
    }

    async fn delete_book(&self, id: &BookId) -> Result<Acknowledgement> {
        let url = self.book_url(id);
        let response = Self::send(self.client.delete(&url), "DELETE", &url).await?;
        Ok(Acknowledgement::from_body(&response.body))
    }
}
