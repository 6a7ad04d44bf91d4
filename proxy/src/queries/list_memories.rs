use crate::{
    queries::{get_item::graphql_item_query, templates::GraphQLOperation},
    utils::real_items_client::RealItemsApi,
};
use serde_json::Value;
use shared::utils::api_helper::ResponseEnvelope;

pub async fn list_memories_by_item_id(
    api: &dyn RealItemsApi,
    api_key: &str,
    data: &Value,
) -> ResponseEnvelope {
    graphql_item_query(api, api_key, GraphQLOperation::ListMemoriesByItemId, data).await
}
