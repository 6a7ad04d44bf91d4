use crate::models::event::{InboundEvent, FUNCTION_NAME_HEADER};
use lambda_runtime::{Context, LambdaEvent};
use std::collections::HashMap;

pub struct UnitTestHelper {}

impl UnitTestHelper {
    pub fn lambda_event(
        function_name: Option<&str>,
        body: Option<&str>,
    ) -> LambdaEvent<InboundEvent> {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        if let Some(function_name) = function_name {
            headers.insert(FUNCTION_NAME_HEADER.to_string(), function_name.to_string());
        }

        let request = InboundEvent {
            headers,
            body: body.map(str::to_string),
        };

        LambdaEvent::new(request, Context::default())
    }

    pub fn default_event() -> LambdaEvent<InboundEvent> {
        Self::lambda_event(Some("getItem"), Some(r#"{"itemId":"abc123"}"#))
    }
}
