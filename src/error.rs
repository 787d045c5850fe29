use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::supabase::SupabaseError;

pub type Result<T> = core::result::Result<T, Error>;

pub const ROUTE_NOT_FOUND_BODY: &str = "404 Not Found: Unable to find the requested resource.";

#[derive(Clone, Debug, Serialize, strum_macros::AsRefStr)]
#[serde(tag = "type", content = "data")]
pub enum Error {
    // -- Startup errors.
    EnvVarError(String),
    ConfigError(String),
    IoError(String),

    // -- Request errors.
    InvalidParameter { name: String, value: String },
    NotFound { message: String },
    RouteNotFound,

    Supabase(SupabaseError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if let Self::RouteNotFound = self {
            return (StatusCode::NOT_FOUND, ROUTE_NOT_FOUND_BODY).into_response();
        }

        let (status_code, client_error) = self.client_status_and_error();

        let label: &str = client_error.as_ref();
        let mut response_body = serde_json::Map::new();
        response_body.insert(label.to_string(), self.client_message().into());

        (status_code, Json(response_body)).into_response()
    }
}

impl Error {
    pub fn client_status_and_error(&self) -> (StatusCode, ClientError) {
        match self {
            Self::InvalidParameter { .. } => {
                (StatusCode::BAD_REQUEST, ClientError::INVALID_PARAMETER)
            }

            Self::NotFound { .. } | Self::RouteNotFound => {
                (StatusCode::NOT_FOUND, ClientError::NOT_FOUND)
            }

            Self::Supabase(err) => (err.http_status(), ClientError::SUPABASE),

            Self::EnvVarError(_) | Self::ConfigError(_) | Self::IoError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ClientError::SERVICE_ERROR,
            ),
        }
    }

    /// Message shown to the client. Remote details, hints and codes stay in the logs.
    fn client_message(&self) -> String {
        match self {
            Self::InvalidParameter { name, value } => {
                format!("The parameter {name} must be an integer, got '{value}'")
            }
            Self::NotFound { message } => message.clone(),
            Self::RouteNotFound => ROUTE_NOT_FOUND_BODY.to_string(),
            Self::Supabase(err) => err.message.clone(),
            Self::EnvVarError(_) | Self::ConfigError(_) | Self::IoError(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

#[derive(Debug, strum_macros::AsRefStr)]
#[allow(non_camel_case_types)]
pub enum ClientError {
    #[strum(serialize = "Error (Invalid Parameter)")]
    INVALID_PARAMETER,
    #[strum(serialize = "Error (Not Found)")]
    NOT_FOUND,
    #[strum(serialize = "Error (Supabase)")]
    SUPABASE,
    #[strum(serialize = "Error (Service)")]
    SERVICE_ERROR,
}

impl From<SupabaseError> for Error {
    fn from(err: SupabaseError) -> Self {
        Error::Supabase(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}
