use lambda_runtime::{self, service_fn, Error, LambdaEvent};
use real_items_proxy::{
    config::ProxyConfig,
    functions::ApiFunction,
    utils::{
        injections::proxy_di::{ProxyAppClient, ProxyInitialisation},
        real_items_client::RealItemsClient,
    },
};
use shared::{
    error::ApplicationError, models::event::InboundEvent, utils::api_helper::ResponseEnvelope,
};
use tracing::{error, info};

const INVALID_FUNCTION: &str = "Invalid API function name";

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    let config = ProxyConfig::from_env();

    let app_client = ProxyAppClient::builder()
        .real_items_client(
            RealItemsClient::builder()
                .base_url(config.base_url.clone())
                .reqwest_client(reqwest::Client::new())
                .build(),
        )
        .build();

    lambda_runtime::run(service_fn(|event: LambdaEvent<InboundEvent>| {
        execute(&config, &app_client, event)
    }))
    .await?;
    Ok(())
}

pub async fn execute(
    config: &ProxyConfig,
    app_client: &dyn ProxyInitialisation,
    event: LambdaEvent<InboundEvent>,
) -> Result<ResponseEnvelope, Error> {
    info!("Event: {:?}", event.payload);

    let api_key = match config.api_key() {
        Ok(api_key) => api_key,
        Err(e) => {
            error!("{}", e);
            return Ok(e.into());
        }
    };

    let data = match event.payload.parse_body() {
        Ok(data) => data,
        Err(e) => {
            error!("{}", e);
            return Ok(e.into());
        }
    };

    let function = ApiFunction::from(event.payload.function_name());
    info!("Function name: {}", function.name());

    let response = match &function {
        ApiFunction::GetItem => app_client.get_item(api_key, &data).await,
        ApiFunction::ListMemoriesByItemId => {
            app_client.list_memories_by_item_id(api_key, &data).await
        }
        ApiFunction::DownloadFile => app_client.download_file(api_key, &data).await,
        ApiFunction::Unknown(_) => {
            ApplicationError::ClientError(INVALID_FUNCTION.to_string()).into()
        }
    };

    if !response.is_success() {
        error!("{} returned status {}", function.name(), response.status_code);
    }

    Ok(response)
}
