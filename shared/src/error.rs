use http::StatusCode;
use reqwest;
use serde_json;
use std::fmt;

#[derive(Debug)]
pub enum ApplicationError {
    InitError(String),
    ClientError(String),
    RemoteError(String),
    InternalError(String),
}

impl std::error::Error for ApplicationError {}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApplicationError::InitError(msg) => write!(f, "InitError: {}", msg),
            ApplicationError::ClientError(msg) => write!(f, "ClientError: {}", msg),
            ApplicationError::RemoteError(msg) => write!(f, "RemoteError: {}", msg),
            ApplicationError::InternalError(msg) => write!(f, "InternalError: {}", msg),
        }
    }
}

impl ApplicationError {
    /// Text returned to the caller inside `{"message": ...}`.
    pub fn message(&self) -> &str {
        match self {
            ApplicationError::InitError(msg)
            | ApplicationError::ClientError(msg)
            | ApplicationError::RemoteError(msg)
            | ApplicationError::InternalError(msg) => msg,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::ClientError(_) => StatusCode::BAD_REQUEST,
            ApplicationError::InitError(_)
            | ApplicationError::RemoteError(_)
            | ApplicationError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::error::Error> for ApplicationError {
    fn from(value: serde_json::error::Error) -> ApplicationError {
        ApplicationError::InternalError(format!("Cannot convert to string {}", value))
    }
}

impl From<Box<dyn std::error::Error + Sync + std::marker::Send>> for ApplicationError {
    fn from(value: Box<dyn std::error::Error + Sync + std::marker::Send>) -> Self {
        ApplicationError::InternalError(format!("{:?}", value))
    }
}

impl From<reqwest::Error> for ApplicationError {
    fn from(e: reqwest::Error) -> ApplicationError {
        if e.is_timeout() {
            return ApplicationError::RemoteError("timeout".to_string());
        }

        ApplicationError::RemoteError(e.to_string())
    }
}
