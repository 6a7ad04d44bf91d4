use crate::{
    queries::{required_field, send_request::send_request, templates::GraphQLOperation},
    utils::real_items_client::RealItemsApi,
};
use serde_json::Value;
use shared::{
    error::ApplicationError, models::event::MISSING_VARIABLES,
    utils::api_helper::ResponseEnvelope,
};

pub async fn get_item(api: &dyn RealItemsApi, api_key: &str, data: &Value) -> ResponseEnvelope {
    graphql_item_query(api, api_key, GraphQLOperation::GetItem, data).await
}

/// Shared by every operation keyed on `itemId`.
pub(crate) async fn graphql_item_query(
    api: &dyn RealItemsApi,
    api_key: &str,
    operation: GraphQLOperation,
    data: &Value,
) -> ResponseEnvelope {
    let item_id = match required_field(data, "itemId") {
        Some(item_id) => item_id,
        None => return ApplicationError::ClientError(MISSING_VARIABLES.to_string()).into(),
    };

    let payload = match serde_json::to_value(operation.request(item_id)) {
        Ok(payload) => payload,
        Err(e) => return ApplicationError::from(e).into(),
    };

    send_request(api, api_key, operation, payload).await
}
