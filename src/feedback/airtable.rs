//! Airtable "create record" client.

use super::{FeedbackRecord, FeedbackSink, SinkError};
use crate::config::{FeedbackConfig, FeedbackCredentials};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

#[derive(Serialize)]
struct CreateRecord<'a> {
    fields: BTreeMap<&'a str, &'a str>,
}

pub struct AirtableSink {
    client: Client,
    endpoint: Url,
    api_key: String,
    field: String,
}

impl AirtableSink {
    pub fn new(config: &FeedbackConfig, credentials: FeedbackCredentials) -> Result<Self, SinkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| SinkError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint = table_endpoint(&config.api_url, &credentials.base_id, &credentials.table_name)?;

        Ok(Self {
            client,
            endpoint,
            api_key: credentials.api_key,
            field: config.field.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn build_request(&self, record: &FeedbackRecord) -> Result<reqwest::Request, SinkError> {
        let body = CreateRecord {
            fields: BTreeMap::from([(self.field.as_str(), record.text())]),
        };
        self.client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .build()
            .map_err(|e| SinkError::Transport(e.to_string()))
    }
}

/// `{api_url}/{base_id}/{table_name}`, with each segment percent-encoded.
fn table_endpoint(api_url: &str, base_id: &str, table_name: &str) -> Result<Url, SinkError> {
    let mut url = Url::parse(api_url)
        .map_err(|e| SinkError::Unconfigured(format!("invalid API url `{}`: {}", api_url, e)))?;
    url.path_segments_mut()
        .map_err(|_| SinkError::Unconfigured(format!("API url `{}` cannot hold a path", api_url)))?
        .pop_if_empty()
        .push(base_id)
        .push(table_name);
    Ok(url)
}

fn map_transport_error(e: reqwest::Error) -> SinkError {
    if e.is_timeout() {
        SinkError::Timeout
    } else if e.is_connect() {
        SinkError::Connect
    } else {
        SinkError::Transport(e.to_string())
    }
}

fn status_message(status: u16, body: &str) -> String {
    match status {
        401 => "Authentication failed - check your API key".to_string(),
        403 => "Access forbidden - insufficient permissions".to_string(),
        404 => "Base or table not found".to_string(),
        422 => format!("Record rejected: {}", body),
        429 => "Rate limit exceeded - too many requests".to_string(),
        500..=599 => format!("Server error: {}", body),
        _ => format!("HTTP error: {}", body),
    }
}

#[async_trait]
impl FeedbackSink for AirtableSink {
    async fn submit(&self, record: &FeedbackRecord) -> Result<(), SinkError> {
        let request = self.build_request(record)?;
        let response = self.client.execute(request).await.map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SinkError::Rejected {
                status: status.as_u16(),
                message: status_message(status.as_u16(), &body),
            });
        }
        Ok(())
    }
}
