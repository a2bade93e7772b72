//! Request builders.
//!
//! Two ways of naming an analytics endpoint:
//!
//! - [`MetricRequest`] / [`Endpoint`]: `client.metric("shares").dimension("day")`.
//!   Only an [`Endpoint`] can be sent, so the path always has two segments.
//! - [`PendingRequest`]: `client.segment("shares").segment("day")`. Segments are
//!   accumulated freely and counted when the request is sent.
//!
//! Builders borrow the client and own their path and query, so builders made
//! from the same client never share state. Sending consumes the builder.

use crate::request::{merge_query, request_url, split_path};
use crate::types::{Credentials, QueryParams};
use crate::{blocking, AddthisClient, ClientError};

/// What a builder needs from the client that created it.
pub trait ClientContext {
    /// Credentials and default publisher id.
    fn credentials(&self) -> &Credentials;

    /// Endpoint root, ending with `/`.
    fn base_url(&self) -> &str;
}

/// Request with only a metric chosen.
#[derive(Debug)]
#[must_use = "a metric request does nothing until a dimension is chosen and it is sent"]
pub struct MetricRequest<'a, C = AddthisClient> {
    client: &'a C,
    metric: String,
    params: QueryParams,
}

/// Request with metric and dimension chosen, ready to send.
#[derive(Debug)]
#[must_use = "an endpoint does nothing until it is sent"]
pub struct Endpoint<'a, C = AddthisClient> {
    client: &'a C,
    metric: String,
    dimension: String,
    params: QueryParams,
}

/// Request whose path segments are checked when it is sent.
#[derive(Debug)]
#[must_use = "a pending request does nothing until it is sent"]
pub struct PendingRequest<'a, C = AddthisClient> {
    client: &'a C,
    segments: Vec<String>,
    params: QueryParams,
}

impl<'a, C: ClientContext> MetricRequest<'a, C> {
    pub(crate) fn new(client: &'a C, metric: impl Into<String>) -> Self {
        Self {
            client,
            metric: metric.into(),
            params: QueryParams::new(),
        }
    }

    /// Choose the dimension.
    pub fn dimension(self, dimension: impl Into<String>) -> Endpoint<'a, C> {
        Endpoint {
            client: self.client,
            metric: self.metric,
            dimension: dimension.into(),
            params: self.params,
        }
    }

    /// Add a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// The metric segment.
    #[must_use]
    pub fn metric(&self) -> &str {
        &self.metric
    }
}

impl<'a, C: ClientContext> Endpoint<'a, C> {
    /// Add a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add several query parameters. Later values replace earlier ones.
    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Request a specific publisher profile instead of the client default.
    pub fn pubid(self, pubid: impl Into<String>) -> Self {
        self.param(crate::types::PUBID_PARAM, pubid)
    }

    /// The metric segment.
    #[must_use]
    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// The dimension segment.
    #[must_use]
    pub fn dimension(&self) -> &str {
        &self.dimension
    }

    /// The URL the request will be sent to.
    #[must_use]
    pub fn url(&self) -> String {
        request_url(self.client.base_url(), &self.metric, &self.dimension)
    }

    /// The query parameters the request will carry, default pubid included.
    #[must_use]
    pub fn query(&self) -> QueryParams {
        merge_query(self.params.clone(), self.client.credentials().pubid())
    }
}

impl<'a, C: ClientContext> PendingRequest<'a, C> {
    pub(crate) fn new(client: &'a C, segment: impl Into<String>) -> Self {
        Self {
            client,
            segments: vec![segment.into()],
            params: QueryParams::new(),
        }
    }

    /// Append a path segment.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Add a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add several query parameters. Later values replace earlier ones.
    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Segments accumulated so far.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Check the path and turn this into an [`Endpoint`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] unless exactly two segments were given.
    pub fn into_endpoint(self) -> Result<Endpoint<'a, C>, ClientError> {
        let (metric, dimension) = split_path(&self.segments)?;
        Ok(Endpoint {
            client: self.client,
            metric: metric.to_string(),
            dimension: dimension.to_string(),
            params: self.params,
        })
    }
}

impl Endpoint<'_, AddthisClient> {
    /// Send the request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] for a non-200 response, or the transport
    /// or JSON error if the request itself fails.
    pub async fn send(self) -> Result<serde_json::Value, ClientError> {
        self.client
            .request(&self.metric, &self.dimension, self.params)
            .await
    }
}

impl PendingRequest<'_, AddthisClient> {
    /// Check the path and send the request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] without sending anything unless
    /// exactly two segments were given; otherwise as [`Endpoint::send`].
    pub async fn send(self) -> Result<serde_json::Value, ClientError> {
        self.into_endpoint()?.send().await
    }
}

impl Endpoint<'_, blocking::AddthisClient> {
    /// Send the request, blocking the current thread.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] for a non-200 response, or the transport
    /// or JSON error if the request itself fails.
    pub fn send(self) -> Result<serde_json::Value, ClientError> {
        self.client
            .request(&self.metric, &self.dimension, self.params)
    }
}

impl PendingRequest<'_, blocking::AddthisClient> {
    /// Check the path and send the request, blocking the current thread.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] without sending anything unless
    /// exactly two segments were given; otherwise as [`Endpoint::send`].
    pub fn send(self) -> Result<serde_json::Value, ClientError> {
        self.into_endpoint()?.send()
    }
}
