use crate::error::ApplicationError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const FUNCTION_NAME_HEADER: &str = "x-function-name";
pub const MISSING_VARIABLES: &str = "Missing required variables";

/// The part of an API Gateway proxy event the handler reads. Other fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboundEvent {
    #[serde(default, deserialize_with = "deserialize_headers")]
    pub headers: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// API Gateway sends `"headers": null` for requests without headers.
fn deserialize_headers<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HashMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl InboundEvent {
    pub fn function_name(&self) -> Option<&str> {
        self.headers.get(FUNCTION_NAME_HEADER).map(String::as_str)
    }

    /// Body fields as a JSON object. An absent or empty body has no fields.
    pub fn parse_body(&self) -> Result<Value, ApplicationError> {
        let body = match self.body.as_deref() {
            Some(body) if !body.is_empty() => body,
            _ => return Ok(Value::Object(Map::new())),
        };

        match serde_json::from_str::<Value>(body) {
            Ok(value) if value.is_object() => Ok(value),
            Ok(_) => Ok(Value::Object(Map::new())),
            Err(_) => Err(ApplicationError::ClientError(MISSING_VARIABLES.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serde_api_gateway_event() -> Result<(), ApplicationError> {
        // ARRANGE
        let data = r#"
        {
  "resource": "/proxy",
  "path": "/proxy",
  "httpMethod": "POST",
  "headers": {
    "x-function-name": "getItem",
    "content-type": "application/json"
  },
  "requestContext": {
    "stage": "prod"
  },
  "body": "{\"itemId\":\"abc123\"}",
  "isBase64Encoded": false
}"#;

        // ACT
        let event: InboundEvent = serde_json::from_str(data)?;

        // ASSERT
        assert_eq!(Some("getItem"), event.function_name());
        assert_eq!(json!({ "itemId": "abc123" }), event.parse_body()?);

        Ok(())
    }

    #[test]
    fn missing_headers_and_body_default() -> Result<(), ApplicationError> {
        // ARRANGE
        let event: InboundEvent = serde_json::from_str("{}")?;

        // ACT
        let body = event.parse_body()?;

        // ASSERT
        assert_eq!(None, event.function_name());
        assert_eq!(json!({}), body);

        Ok(())
    }

    #[test]
    fn serde_null_headers() -> Result<(), ApplicationError> {
        // ARRANGE
        let data = r#"{"headers":null,"body":null,"multiValueHeaders":null}"#;

        // ACT
        let event: InboundEvent = serde_json::from_str(data)?;

        // ASSERT
        assert!(event.headers.is_empty());
        assert_eq!(None, event.function_name());
        assert_eq!(json!({}), event.parse_body()?);

        Ok(())
    }

    #[test]
    fn header_lookup_is_case_sensitive() {
        // ARRANGE
        let mut event = InboundEvent::default();
        event
            .headers
            .insert("X-Function-Name".to_string(), "getItem".to_string());

        // ACT
        let function_name = event.function_name();

        // ASSERT
        assert!(function_name.is_none());
    }

    #[test]
    fn empty_body_has_no_fields() -> Result<(), ApplicationError> {
        // ARRANGE
        let event = InboundEvent {
            body: Some(String::new()),
            ..Default::default()
        };

        // ACT
        let body = event.parse_body()?;

        // ASSERT
        assert_eq!(json!({}), body);

        Ok(())
    }

    #[test]
    fn non_object_body_has_no_fields() -> Result<(), ApplicationError> {
        // ARRANGE
        let event = InboundEvent {
            body: Some("[1, 2]".to_string()),
            ..Default::default()
        };

        // ACT
        let body = event.parse_body()?;

        // ASSERT
        assert_eq!(json!({}), body);

        Ok(())
    }

    #[test]
    fn invalid_json_body_is_a_client_error() {
        // ARRANGE
        let event = InboundEvent {
            body: Some("{itemId:".to_string()),
            ..Default::default()
        };

        // ACT
        let result = event.parse_body();

        // ASSERT
        match result {
            Err(ApplicationError::ClientError(msg)) => assert_eq!(MISSING_VARIABLES, msg),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
