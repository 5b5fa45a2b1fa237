use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

// ============ Book ============

/// Server-assigned book identifier.
///
/// The catalog API may send the id as a JSON number or a JSON string; either
/// way it is kept as opaque text and only ever echoed back in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawBookId", into = "String")]
pub struct BookId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBookId {
    Number(serde_json::Number),
    Text(String),
}

impl From<RawBookId> for BookId {
    fn from(raw: RawBookId) -> Self {
        match raw {
            RawBookId::Number(n) => Self(n.to_string()),
            RawBookId::Text(s) => Self(s),
        }
    }
}

impl From<BookId> for String {
    fn from(id: BookId) -> Self {
        id.0
    }
}

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A book record as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: String,
}

impl Book {
    /// 表格中显示的标签（`#<id>`，不补零）
    pub fn label(&self) -> String {
        format!("#{}", self.id)
    }
}

// ============ Request bodies ============

/// Message used when a draft is missing a field.
pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";

/// Message used when a search query is blank.
pub const EMPTY_SEARCH_TERM: &str = "Please enter a search term";

/// Body of a create or update request.
///
/// Both fields are trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDraft {
    name: String,
    author: String,
}

impl BookDraft {
    pub fn new(name: &str, author: &str) -> Result<Self> {
        let name = name.trim();
        let author = author.trim();
        if name.is_empty() || author.is_empty() {
            return Err(ApiError::Validation(FILL_ALL_FIELDS.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            author: author.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

/// Trimmed, non-empty search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApiError::Validation(EMPTY_SEARCH_TERM.to_string()));
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============ Responses ============

/// Status envelope returned by mutating endpoints.
///
/// Any JSON value (or an empty body) is accepted; only the optional
/// `status` / `message` string fields are picked out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub status: Option<String>,
    pub message: Option<String>,
}

impl Acknowledgement {
    pub(crate) fn from_body(body: &str) -> Self {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
            return Self::default();
        };
        let field = |key: &str| {
            value
                .get(key)
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        };
        Self {
            status: field("status"),
            message: field("message"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_id_from_number() {
        let book: Book =
            serde_json::from_str(r#"{"id":1,"name":"Dune","author":"Herbert"}"#).unwrap();
        assert_eq!(book.id.as_str(), "1");
        assert_eq!(book.label(), "#1");
    }

    #[test]
    fn book_id_from_string() {
        let book: Book =
            serde_json::from_str(r#"{"id":"abc-7","name":"Emma","author":"Austen"}"#).unwrap();
        assert_eq!(book.id, BookId::new("abc-7"));
        assert_eq!(book.label(), "#abc-7");
    }

    #[test]
    fn book_id_serializes_as_string() {
        let json = serde_json::to_string(&BookId::new("42")).unwrap();
        assert_eq!(json, r#""42""#);
    }

    #[test]
    fn label_has_no_zero_padding() {
        let book = Book {
            id: BookId::new("7"),
            name: "Dune".into(),
            author: "Herbert".into(),
        };
        assert_eq!(book.label(), "#7");
    }

    #[test]
    fn draft_trims_fields() {
        let draft = BookDraft::new("  Dune ", "\tHerbert").unwrap();
        assert_eq!(draft.name(), "Dune");
        assert_eq!(draft.author(), "Herbert");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Dune", "author": "Herbert"}));
    }

    #[test]
    fn draft_rejects_blank_name() {
        let err = BookDraft::new("", "Herbert").unwrap_err();
        assert_eq!(err, ApiError::Validation(FILL_ALL_FIELDS.to_string()));
    }

    #[test]
    fn draft_rejects_whitespace_author() {
        assert!(BookDraft::new("Dune", "   ").is_err());
    }

    #[test]
    fn search_query_rejects_blank() {
        let err = SearchQuery::new("  ").unwrap_err();
        assert_eq!(err.to_string(), EMPTY_SEARCH_TERM);
    }

    #[test]
    fn search_query_trims() {
        assert_eq!(SearchQuery::new(" dune ").unwrap().as_str(), "dune");
    }

    #[test]
    fn acknowledgement_reads_status_and_message() {
        let ack = Acknowledgement::from_body(r#"{"status":"success","message":"Book added"}"#);
        assert_eq!(ack.status.as_deref(), Some("success"));
        assert_eq!(ack.message.as_deref(), Some("Book added"));
    }

    #[test]
    fn acknowledgement_accepts_empty_or_foreign_body() {
        assert_eq!(Acknowledgement::from_body(""), Acknowledgement::default());
        assert_eq!(Acknowledgement::from_body("[1,2]"), Acknowledgement::default());
        assert_eq!(
            Acknowledgement::from_body(r#"{"id":3,"name":"x","author":"y"}"#),
            Acknowledgement::default()
        );
    }
}
