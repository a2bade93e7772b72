//! Blocking AddThis client.
//!
//! Same requests and errors as [`crate::AddthisClient`], but every call blocks
//! the current thread. Do not use it from inside an async runtime.

use std::time::Duration;

use crate::config::{AddthisConfig, ClientOptions};
use crate::endpoint::{ClientContext, MetricRequest, PendingRequest};
use crate::error::ClientError;
use crate::request::{merge_query, parse_body, request_url};
use crate::types::{Credentials, QueryParams};

/// Blocking AddThis Analytics API client.
#[derive(Debug, Clone)]
pub struct AddthisClient {
    client: reqwest::blocking::Client,
    credentials: Credentials,
    base_url: String,
}

impl AddthisClient {
    /// Create a new blocking client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        userid: impl Into<String>,
        password: impl Into<String>,
        pubid: Option<String>,
    ) -> Result<Self, ClientError> {
        Self::with_options(userid, password, pubid, ClientOptions::default())
    }

    /// Create a new blocking client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_options(
        userid: impl Into<String>,
        password: impl Into<String>,
        pubid: Option<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .user_agent(options.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            credentials: Credentials::new(userid, password, pubid),
            base_url: options.normalized_base_url(),
        })
    }

    /// Create a blocking client from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: AddthisConfig) -> Result<Self, ClientError> {
        Self::with_options(config.userid, config.password, config.pubid, config.options)
    }

    /// Create a blocking client from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_config(AddthisConfig::from_env()?)
    }

    /// The userid requests authenticate as.
    #[must_use]
    pub fn userid(&self) -> &str {
        self.credentials.userid()
    }

    /// The default publisher id.
    #[must_use]
    pub fn pubid(&self) -> Option<&str> {
        self.credentials.pubid()
    }

    /// Start a request for `metric`.
    pub fn metric(&self, metric: impl Into<String>) -> MetricRequest<'_, Self> {
        MetricRequest::new(self, metric)
    }

    /// Start a request whose path is assembled segment by segment.
    pub fn segment(&self, segment: impl Into<String>) -> PendingRequest<'_, Self> {
        PendingRequest::new(self, segment)
    }

    /// Query `metric`/`dimension` with the given parameters.
    ///
    /// # Errors
    ///
    /// Same as [`crate::AddthisClient::request`].
    pub fn request(
        &self,
        metric: &str,
        dimension: &str,
        params: QueryParams,
    ) -> Result<serde_json::Value, ClientError> {
        let url = request_url(&self.base_url, metric, dimension);
        let query = merge_query(params, self.credentials.pubid());

        tracing::debug!(
            metric = %metric,
            dimension = %dimension,
            url = %url,
            params = query.len(),
            "Sending AddThis API request"
        );

        let response = self
            .client
            .get(&url)
            .query(&query)
            .basic_auth(self.credentials.userid(), Some(self.credentials.password()))
            .send()?;

        let status = response.status();
        let body = response.bytes()?;
        parse_body(status.as_u16(), &body)
    }
}

impl ClientContext for AddthisClient {
    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
