//! REST implementation of [`EmployeeApi`].

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::cancel::CancelToken;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::traits::EmployeeApi;
use crate::types::{ApiEnvelope, EmployeeId, EmployeeRecord, Resource};

/// Employee service client over HTTP.
pub struct RestEmployeeClient {
    client: Client,
    config: ClientConfig,
}

impl RestEmployeeClient {
    /// Build a client with the timeouts from `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Configuration {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client, config })
    }

    /// GET `resource`, retrying 429 per the configured policy, and unwrap the envelope.
    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &Resource,
        cancel: &CancelToken,
    ) -> Result<Option<T>> {
        let path = resource.path();
        let url = self.config.url_for(&path);
        let label = format!("GET {path}");
        let label = label.as_str();

        self.config
            .retry
            .run(cancel, label, || {
                let request = self.client.get(&url);
                async move {
                    let raw = HttpUtils::execute_request(request, cancel, label).await?;
                    let body = HttpUtils::classify(resource, raw)?;
                    let envelope: ApiEnvelope<T> = HttpUtils::parse_json(&body, label)?;
                    Ok(envelope.data)
                }
            })
            .await
    }
}

#[async_trait]
impl EmployeeApi for RestEmployeeClient {
    async fn list_employees(&self, cancel: &CancelToken) -> Result<Vec<EmployeeRecord>> {
        let records: Option<Vec<EmployeeRecord>> =
            self.fetch(&Resource::AllEmployees, cancel).await?;
        let records = records.ok_or_else(|| ClientError::Parse {
            detail: "response is missing the data field".to_string(),
        })?;
        log::info!("Fetched {} employees", records.len());
        Ok(records)
    }

    async fn get_employee(&self, id: &EmployeeId, cancel: &CancelToken) -> Result<EmployeeRecord> {
        let resource = Resource::EmployeeById(id.clone());
        let record: Option<EmployeeRecord> = self.fetch(&resource, cancel).await?;
        record.ok_or_else(|| ClientError::NotFound { id: id.to_string() })
    }
}
