//! HTTP client for record lookups against the REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    response::{classify, single_record},
    types::QueryResult,
    ClientError,
};

/// API version used when none is given.
pub const DEFAULT_API_VERSION: &str = "v59.0";

/// Request timeout for API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the record REST API.
///
/// Failed lookups surface as [`ClientError::Rest`]: a 404 or an empty query
/// becomes a not-found, an error payload becomes a request error.
pub struct Client {
    client: reqwest::Client,
    instance_url: Url,
    api_version: String,
}

impl Client {
    /// Creates a client for the given instance using [`DEFAULT_API_VERSION`].
    pub fn new(instance_url: &str) -> Result<Self, ClientError> {
        Self::with_api_version(instance_url, DEFAULT_API_VERSION)
    }

    /// Creates a client pinned to a specific API version (e.g. `v58.0`).
    pub fn with_api_version(instance_url: &str, api_version: &str) -> Result<Self, ClientError> {
        let instance_url = Url::parse(instance_url).map_err(|e| {
            tracing::error!("Invalid instance URL {}: {}", instance_url, e);
            ClientError::InvalidUrl(format!("{}: {}", instance_url, e))
        })?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            instance_url,
            api_version: api_version.to_string(),
        })
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.instance_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                ClientError::InvalidUrl(format!("{} cannot be a base URL", self.instance_url))
            })?;
            path.pop_if_empty()
                .extend(["services", "data", self.api_version.as_str()])
                .extend(segments);
        }
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ClientError> {
        let resp = request
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request: {}", e);
                ClientError::Network(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            ClientError::Network(e)
        })?;

        classify(status.as_u16(), &body)?;
        Ok(body)
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
        serde_json::from_str(body).map_err(|e| {
            tracing::error!("Failed to parse record: {}", e);
            ClientError::Decode(e.to_string())
        })
    }

    /// Fetches a single record by type and ID.
    pub async fn find<T: DeserializeOwned>(&self, sobject: &str, id: &str) -> Result<T, ClientError> {
        let url = self.url(&["sobjects", sobject, id])?;
        tracing::debug!("GET {}", url);
        let body = self.send(self.client.get(url)).await?;
        Self::decode(&body)
    }

    /// Runs a query and returns its first record.
    ///
    /// An empty result is reported as not-found.
    pub async fn find_first<T: DeserializeOwned>(&self, soql: &str) -> Result<T, ClientError> {
        let mut url = self.url(&["query"])?;
        url.query_pairs_mut().append_pair("q", soql);
        tracing::debug!("GET {}", url);
        let body = self.send(self.client.get(url)).await?;
        let result: QueryResult<T> = Self::decode(&body)?;
        Ok(single_record(result.records)?)
    }

    /// Deletes a record by type and ID.
    pub async fn destroy(&self, sobject: &str, id: &str) -> Result<(), ClientError> {
        let url = self.url(&["sobjects", sobject, id])?;
        tracing::debug!("DELETE {}", url);
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}
