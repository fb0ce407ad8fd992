use super::types::Payload;
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends `payload` to the model endpoint and returns the decoded JSON body.
    async fn query(&self, payload: &Payload) -> Result<Value>;
}

pub struct HttpInferenceClient {
    client: reqwest::Client,
    endpoint: String,
    api_token: String,
}

impl HttpInferenceClient {
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let api_token = config
            .api_token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                Error::config("Missing API token: set inference.api_token or HF_API_TOKEN")
            })?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let endpoint = model_endpoint(&config.base_url, &config.model);
        debug!("Created inference client for: {}", endpoint);

        Ok(Self {
            client,
            endpoint,
            api_token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn query(&self, payload: &Payload) -> Result<Value> {
        debug!("POST {} with {} payload keys", self.endpoint, payload.as_map().len());

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_token))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!("Inference endpoint responded with {}", status);
        } else {
            warn!("Inference endpoint responded with {}", status);
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| Error::Decode {
            status: status.as_u16(),
            source,
        })
    }
}

fn model_endpoint(base_url: &str, model: &str) -> String {
    format!(
        "{}/models/{}",
        base_url.trim_end_matches('/'),
        model.trim_start_matches('/')
    )
}
