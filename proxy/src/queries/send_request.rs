use crate::{queries::templates::GraphQLOperation, utils::real_items_client::RealItemsApi};
use http::StatusCode;
use serde_json::Value;
use shared::{
    error::ApplicationError,
    utils::api_helper::{ApiHelper, ResponseEnvelope},
};
use tracing::{error, info};

/// POSTs a GraphQL payload and returns `data.<operation>` as the response body.
pub async fn send_request(
    api: &dyn RealItemsApi,
    api_key: &str,
    operation: GraphQLOperation,
    payload: Value,
) -> ResponseEnvelope {
    let result = api
        .send_request(api_key, operation.endpoint(), payload)
        .await
        .and_then(|response| unwrap_envelope(response, operation.name()));

    match result {
        Ok(body) => {
            info!("{} response: {}", operation.name(), body);
            ApiHelper::response(StatusCode::OK, body)
        }
        Err(e) => {
            error!("{} error: {}", operation.name(), e);
            e.into()
        }
    }
}

fn unwrap_envelope(mut response: Value, operation: &str) -> Result<Value, ApplicationError> {
    match response.get_mut("data") {
        Some(Value::Object(data)) => Ok(data.remove(operation).unwrap_or(Value::Null)),
        _ => Err(ApplicationError::RemoteError(format!(
            "Cannot read '{}' from a response without data",
            operation
        ))),
    }
}
