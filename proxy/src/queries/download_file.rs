use crate::{queries::required_field, utils::real_items_client::RealItemsApi};
use http::StatusCode;
use serde_json::Value;
use shared::{
    error::ApplicationError,
    models::event::MISSING_VARIABLES,
    utils::api_helper::{ApiHelper, ResponseEnvelope},
};
use tracing::{error, info};

pub async fn download_file(
    api: &dyn RealItemsApi,
    api_key: &str,
    data: &Value,
) -> ResponseEnvelope {
    let asset_id = match required_field(data, "assetId") {
        Some(Value::String(asset_id)) => asset_id,
        Some(other) => other.to_string(),
        None => return ApplicationError::ClientError(MISSING_VARIABLES.to_string()).into(),
    };

    let result = api
        .download_file(api_key, &asset_id)
        .await
        .and_then(|downloaded| {
            info!(
                "downloadFile response: {} bytes, filename {:?}",
                downloaded.file.len(),
                downloaded.filename
            );
            Ok(serde_json::to_value(downloaded)?)
        });

    match result {
        Ok(body) => ApiHelper::response(StatusCode::OK, body),
        Err(e) => {
            error!("downloadFile error: {}", e);
            e.into()
        }
    }
}
