use crate::error::ApplicationError;
use http::StatusCode;
use serde::Serialize;
use serde_json::{json, Value};

/// What the handler hands back to the runtime.
///
/// A successful `body` is the raw payload, while every error `body` is a JSON
/// encoded `{"message": ...}` string. Callers rely on that difference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub body: Value,
}

impl ResponseEnvelope {
    pub fn is_success(&self) -> bool {
        self.status_code == StatusCode::OK.as_u16()
    }
}

pub struct ApiHelper;

impl ApiHelper {
    pub fn response(status_code: StatusCode, body: Value) -> ResponseEnvelope {
        ResponseEnvelope {
            status_code: status_code.as_u16(),
            body,
        }
    }

    pub fn message(status_code: StatusCode, message: &str) -> ResponseEnvelope {
        ResponseEnvelope {
            status_code: status_code.as_u16(),
            body: Value::String(json!({ "message": message }).to_string()),
        }
    }
}

impl From<ApplicationError> for ResponseEnvelope {
    fn from(error: ApplicationError) -> ResponseEnvelope {
        ApiHelper::message(error.status_code(), error.message())
    }
}
