//! AddThis HTTP client implementation.

use reqwest::Client;
use std::time::Duration;

use crate::config::{AddthisConfig, ClientOptions};
use crate::endpoint::{ClientContext, MetricRequest, PendingRequest};
use crate::error::ClientError;
use crate::request::{merge_query, parse_body, request_url};
use crate::types::{Credentials, QueryParams};

/// AddThis Analytics API client.
///
/// Holds credentials and the HTTP transport. Cloning is cheap and clones share
/// the connection pool; nothing in the client changes after construction.
#[derive(Debug, Clone)]
pub struct AddthisClient {
    client: Client,
    credentials: Credentials,
    base_url: String,
}

impl AddthisClient {
    /// Create a new AddThis client.
    ///
    /// # Arguments
    ///
    /// * `userid` - AddThis userid or email address
    /// * `password` - AddThis password
    /// * `pubid` - Publisher profile used by every request that does not name one
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

    /// Create a new AddThis client with custom options.
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
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .user_agent(options.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            credentials: Credentials::new(userid, password, pubid),
            base_url: options.normalized_base_url(),
        })
    }

    /// Create a client from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: AddthisConfig) -> Result<Self, ClientError> {
        Self::with_options(config.userid, config.password, config.pubid, config.options)
    }

    /// Create a client from the environment, see [`AddthisConfig::from_env`].
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

    /// Start a request for `metric`. Call `.dimension(..)` to complete the path.
    pub fn metric(&self, metric: impl Into<String>) -> MetricRequest<'_> {
        MetricRequest::new(self, metric)
    }

    /// Start a request whose path is assembled segment by segment.
    ///
    /// The number of segments is checked when the request is sent.
    pub fn segment(&self, segment: impl Into<String>) -> PendingRequest<'_> {
        PendingRequest::new(self, segment)
    }

    /// Query `metric`/`dimension` with the given parameters.
    ///
    /// The default publisher id is added unless `params` already has a `pubid`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the server answers with a status other
    /// than 200, [`ClientError::Http`] if the request fails and
    /// [`ClientError::Serialization`] if the body is not JSON.
    pub async fn request(
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
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<serde_json::Value, ClientError> {
        let status = response.status();
        let body = response.bytes().await?;
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
