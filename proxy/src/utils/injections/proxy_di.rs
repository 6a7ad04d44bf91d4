use crate::{
    queries::{
        download_file::download_file, get_item::get_item,
        list_memories::list_memories_by_item_id,
    },
    utils::real_items_client::RealItemsClient,
};
use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use serde_json::Value;
use shared::utils::api_helper::ResponseEnvelope;
use typed_builder::TypedBuilder as Builder;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProxyInitialisation: Send + Sync {
    async fn get_item(&self, api_key: &str, data: &Value) -> ResponseEnvelope;
    async fn list_memories_by_item_id(&self, api_key: &str, data: &Value) -> ResponseEnvelope;
    async fn download_file(&self, api_key: &str, data: &Value) -> ResponseEnvelope;
}

#[derive(Debug, Clone, Builder)]
pub struct ProxyAppClient {
    #[builder(setter(into))]
    pub real_items_client: RealItemsClient,
}

#[async_trait]
impl ProxyInitialisation for ProxyAppClient {
    async fn get_item(&self, api_key: &str, data: &Value) -> ResponseEnvelope {
        get_item(&self.real_items_client, api_key, data).await
    }

    async fn list_memories_by_item_id(&self, api_key: &str, data: &Value) -> ResponseEnvelope {
        list_memories_by_item_id(&self.real_items_client, api_key, data).await
    }

    async fn download_file(&self, api_key: &str, data: &Value) -> ResponseEnvelope {
        download_file(&self.real_items_client, api_key, data).await
    }
}
