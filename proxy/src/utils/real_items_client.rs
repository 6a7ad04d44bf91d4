use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use reqwest;
use serde::Serialize;
use serde_json::Value;
use shared::error::ApplicationError;
use typed_builder::TypedBuilder as Builder;

pub const DOWNLOAD_ENDPOINT: &str = "file/download";
pub const DOWNLOAD_FORMAT: &str = "bytearray";

/// Calls against the Real Items API. One attempt per call, no retries.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RealItemsApi: Send + Sync {
    async fn send_request(
        &self,
        api_key: &str,
        endpoint: &str,
        payload: Value,
    ) -> Result<Value, ApplicationError>;
    async fn download_file(
        &self,
        api_key: &str,
        asset_id: &str,
    ) -> Result<DownloadedFile, ApplicationError>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadedFile {
    pub file: Vec<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Builder)]
pub struct RealItemsClient {
    #[builder(setter(into))]
    pub base_url: String,

    pub reqwest_client: reqwest::Client,
}

impl RealItemsClient {
    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

#[async_trait]
impl RealItemsApi for RealItemsClient {
    async fn send_request(
        &self,
        api_key: &str,
        endpoint: &str,
        payload: Value,
    ) -> Result<Value, ApplicationError> {
        let res = self
            .reqwest_client
            .post(self.url(endpoint))
            .header("x-api-key", api_key)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        Ok(res.json::<Value>().await?)
    }

    async fn download_file(
        &self,
        api_key: &str,
        asset_id: &str,
    ) -> Result<DownloadedFile, ApplicationError> {
        let res = self
            .reqwest_client
            .post(self.url(DOWNLOAD_ENDPOINT))
            .header("assetId", asset_id)
            .header("x-api-key", api_key)
            .header("format", DOWNLOAD_FORMAT)
            .send()
            .await?
            .error_for_status()?;

        let filename = res
            .headers()
            .get("filename")
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
        let file = res.bytes().await?.to_vec();

        Ok(DownloadedFile { file, filename })
    }
}
