//! Shared HTTP plumbing for the catalog client.
//!
//! Sending, logging, status checking and body decoding live here so the
//! endpoint methods in [`crate::client`] only build requests.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

const TRUNCATE_LIMIT: usize = 1024;

/// Raw response: status code plus body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Sends a request and reads the whole body.
    ///
    /// Only transport failures are errors here; non-2xx statuses are returned
    /// as-is and checked by [`HttpUtils::ensure_success`].
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<HttpResponse> {
        log::debug!("[bookshelf] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("[bookshelf] Response Status: {status}");

        let body = response.text().await.map_err(|e| ApiError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("[bookshelf] Response Body: {}", truncate_for_log(&body));

        Ok(HttpResponse { status, body })
    }

    /// Turns a non-2xx response into [`ApiError::Http`].
    ///
    /// The error text is the body's JSON `message` string when there is one,
    /// otherwise `HTTP error! Status: <code> <reason>`.
    pub fn ensure_success(response: HttpResponse) -> Result<HttpResponse> {
        if response.is_success() {
            return Ok(response);
        }

        let message = server_message(&response.body)
            .unwrap_or_else(|| status_line_message(response.status));
        let err = ApiError::Http {
            status: response.status,
            message,
        };
        if err.is_expected() {
            log::warn!("[bookshelf] Request rejected: {err}");
        } else {
            log::error!("[bookshelf] Request failed: {err}");
        }
        Err(err)
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[bookshelf] JSON parse failed: {e}");
            log::error!(
                "[bookshelf] Raw response: {}",
                truncate_for_log(response_text)
            );
            ApiError::Parse {
                detail: e.to_string(),
            }
        })
    }
}

fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

fn status_line_message(status: u16) -> String {
    let reason = StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason());
    match reason {
        Some(reason) => format!("HTTP error! Status: {status} {reason}"),
        None => format!("HTTP error! Status: {status}"),
    }
}

fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let mut end = TRUNCATE_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn success_passes_through() {
        let resp = HttpUtils::ensure_success(response(201, "{}")).unwrap();
        assert_eq!(resp.status, 201);
    }

    #[test]
    fn error_uses_server_message() {
        let err =
            HttpUtils::ensure_success(response(404, r#"{"status":"error","message":"not found"}"#))
                .unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 404,
                message: "not found".into()
            }
        );
    }

    #[test]
    fn error_falls_back_to_status_line_for_non_json() {
        let err = HttpUtils::ensure_success(response(500, "<html>oops</html>")).unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! Status: 500 Internal Server Error");
    }

    #[test]
    fn error_falls_back_when_message_is_not_a_string() {
        let err = HttpUtils::ensure_success(response(400, r#"{"message":12}"#)).unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! Status: 400 Bad Request");
    }

    #[test]
    fn error_with_empty_body() {
        let err = HttpUtils::ensure_success(response(404, "")).unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! Status: 404 Not Found");
    }

    #[test]
    fn unknown_status_omits_reason() {
        assert_eq!(status_line_message(599), "HTTP error! Status: 599");
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<Vec<u8>> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(ApiError::Parse { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_for_log("short"), "short");
    }

    #[test]
    fn truncate_respects_char_boundary() {
        let s = "é".repeat(TRUNCATE_LIMIT);
        let out = truncate_for_log(&s);
        assert!(out.contains("[truncated, total"));
    }
}
