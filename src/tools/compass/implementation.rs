use super::allowance::dto::{SetAllowanceInput, SetAllowanceOutput, SetAllowanceRequest};
use super::helpers::build_url;
use crate::config::CompassConfig;
use crate::error::{CompassError, Result};
use reqwest::header::CONTENT_TYPE;

#[derive(Clone)]
pub struct CompassTools {
    http: reqwest::Client,
    base_url: String,
    sender: String,
}

impl CompassTools {
    pub fn new(config: &CompassConfig) -> Result<Self> {
        if config.wallet.sender.trim().is_empty() {
            return Err(CompassError::config_error("wallet.sender must be set"));
        }
        let http = reqwest::Client::builder()
            .user_agent(config.api.user_agent.as_str())
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                reqwest::Client::new()
            });
        Ok(Self {
            http,
            base_url: config.api.base_url.clone(),
            sender: config.wallet.sender.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// One POST to `generic/allowance/set/{chain}`. Inputs are sent as given;
    /// a non-2xx status becomes [`CompassError::HttpStatus`].
    pub async fn set_allowance(&self, input: SetAllowanceInput) -> Result<SetAllowanceOutput> {
        let url = build_url(
            &self.base_url,
            &["generic", "allowance", "set", &input.chain],
        );
        let body = serde_json::to_vec(&SetAllowanceRequest::new(&self.sender, &input))?;
        tracing::debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(CompassError::NetworkError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompassError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let response = response
            .json::<serde_json::Value>()
            .await
            .map_err(CompassError::NetworkError)?;
        Ok(SetAllowanceOutput { response })
    }
}
