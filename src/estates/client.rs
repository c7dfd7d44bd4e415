// client.rs
use crate::estates::models::ResponseEnvelope;
use crate::estates::FetchError;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("estate_map/", env!("CARGO_PKG_VERSION"));

/// Where the view gets its listings from.
pub trait EstateSource: Send + Sync {
    fn fetch(&self) -> Result<ResponseEnvelope, FetchError>;
}

/// Plain GET against the configured data URL. No custom headers, no body,
/// no retries.
pub struct EstateClient {
    client: Client,
    data_url: String,
}

impl EstateClient {
    pub fn new(data_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            data_url: data_url.into(),
        })
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

impl EstateSource for EstateClient {
    fn fetch(&self) -> Result<ResponseEnvelope, FetchError> {
        let resp = self.client.get(&self.data_url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        resp.json::<ResponseEnvelope>()
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
