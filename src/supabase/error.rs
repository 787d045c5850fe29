use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Error reported by the remote query service, or by the transport in front of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupabaseError {
    pub message: String,
    pub details: Option<String>,
    pub hint: Option<String>,
    pub code: Option<String>,
    pub status: Option<u16>,
    pub status_text: Option<String>,
}

/// PostgREST error body.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
    code: Option<String>,
}

impl SupabaseError {
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let status_text = status.canonical_reason().map(str::to_string);

        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .message
            .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
            .or_else(|| status_text.clone())
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

        Self {
            message,
            details: parsed.details,
            hint: parsed.hint,
            code: parsed.code,
            status: Some(status.as_u16()),
            status_text,
        }
    }

    /// Failure that never produced a remote status (connection, TLS, decoding).
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self {
            message: err.to_string(),
            details: None,
            hint: None,
            code: None,
            status: None,
            status_text: None,
        }
    }

    /// Status to answer the client with. Anything that is not an error status falls back to 500.
    pub fn http_status(&self) -> StatusCode {
        self.status
            .and_then(|s| StatusCode::from_u16(s).ok())
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
