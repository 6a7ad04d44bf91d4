use shared::error::ApplicationError;
use typed_builder::TypedBuilder as Builder;

pub const DEFAULT_BASE_URL: &str = "https://api.realitems.io";
pub const MISSING_CONFIG: &str = "Missing API key or contract ID";

/// Secrets and endpoint read once per process and shared by every invocation.
#[derive(Debug, Clone, Builder)]
pub struct ProxyConfig {
    #[builder(default, setter(strip_option))]
    pub api_key: Option<String>,

    #[builder(default, setter(strip_option))]
    pub contract_id: Option<String>,

    #[builder(default = DEFAULT_BASE_URL.to_string(), setter(into))]
    pub base_url: String,
}

impl ProxyConfig {
    pub fn from_env() -> Self {
        ProxyConfig {
            api_key: std::env::var("API_KEY").ok(),
            contract_id: std::env::var("CONTRACT_ID").ok(),
            base_url: std::env::var("REAL_ITEMS_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// The API key, as long as the contract id is set too. Checked on every call.
    pub fn api_key(&self) -> Result<&str, ApplicationError> {
        match (non_empty(&self.api_key), non_empty(&self.contract_id)) {
            (Some(api_key), Some(_)) => Ok(api_key),
            _ => Err(ApplicationError::InitError(MISSING_CONFIG.to_string())),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
