use serde::Serialize;
use thiserror::Error;

/// Unified error type for all catalog API operations.
///
/// The `Display` output of every variant is the human-readable text shown to
/// the user, so callers can prefix it with their own context
/// (`"Failed to update book: {err}"`) without further formatting.
///
/// # Taxonomy
///
/// - [`Validation`](Self::Validation): rejected locally, no request was sent
/// - [`Network`](Self::Network) / [`Timeout`](Self::Timeout): transport failures
/// - [`Http`](Self::Http): the server answered with a non-2xx status
/// - [`Parse`](Self::Parse) / [`Serialization`](Self::Serialization): body (de)coding
///
/// No variant is retried automatically; every failure is terminal for the
/// action that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ApiError {
    /// A required field or the search query was empty after trimming.
    #[error("{0}")]
    Validation(String),

    /// A network-level error occurred (connection refused, DNS failure, ...).
    #[error("{detail}")]
    Network {
        /// Transport error text.
        detail: String,
    },

    /// The request exceeded the configured timeout.
    #[error("{detail}")]
    Timeout {
        /// Transport error text.
        detail: String,
    },

    /// The server answered with a status outside the 2xx range.
    ///
    /// `message` is the server's JSON `message` field when present, otherwise
    /// `"HTTP error! Status: <code> <status text>"`.
    #[error("{message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message or the status line fallback.
        message: String,
    },

    /// A success response body could not be decoded.
    #[error("Invalid response: {detail}")]
    Parse {
        /// Decoder error details.
        detail: String,
    },

    /// A request body could not be encoded.
    #[error("Invalid request: {detail}")]
    Serialization {
        /// Encoder error details.
        detail: String,
    },
}

impl ApiError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Http { status, .. } => (400..500).contains(status),
            Self::Network { .. }
            | Self::Timeout { .. }
            | Self::Parse { .. }
            | Self::Serialization { .. } => false,
        }
    }

    /// HTTP status code, if the server produced this error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
