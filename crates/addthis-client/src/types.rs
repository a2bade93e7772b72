//! Request and response types for the AddThis client.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ClientError;

// ============================================================================
// Constants
// ============================================================================

/// Version of the Analytics API this client talks to.
pub const API_VERSION: &str = "1.0";

/// Root of every analytics endpoint. Always ends with `/`.
pub const BASE_URL: &str = "https://api.addthis.com/analytics/1.0/pub/";

/// Number of path segments (metric, dimension) a request needs.
pub const EXPECTED_SEGMENTS: usize = 2;

/// Query parameter carrying the publisher profile id.
pub const PUBID_PARAM: &str = "pubid";

/// Query parameters sent with a request, ordered by key.
pub type QueryParams = BTreeMap<String, String>;

// ============================================================================
// Credentials
// ============================================================================

/// AddThis account credentials plus an optional default publisher id.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    userid: String,
    password: String,
    pubid: Option<String>,
}

impl Credentials {
    /// Create credentials.
    ///
    /// # Arguments
    ///
    /// * `userid` - AddThis userid or email address
    /// * `password` - AddThis password
    /// * `pubid` - Publisher profile used when a request does not name one
    #[must_use]
    pub fn new(userid: impl Into<String>, password: impl Into<String>, pubid: Option<String>) -> Self {
        Self {
            userid: userid.into(),
            password: password.into(),
            pubid,
        }
    }

    /// The userid used for Basic auth.
    #[must_use]
    pub fn userid(&self) -> &str {
        &self.userid
    }

    /// The password used for Basic auth.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The default publisher id, if any.
    #[must_use]
    pub fn pubid(&self) -> Option<&str> {
        self.pubid.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("userid", &self.userid)
            .field("password", &"<redacted>")
            .field("pubid", &self.pubid)
            .finish()
    }
}

// ============================================================================
// Error responses
// ============================================================================

/// API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiErrorBody,
}

/// API error body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Error code.
    pub code: i64,
    /// Error message.
    pub message: String,
    /// Additional details.
    #[serde(default)]
    pub attachment: serde_json::Value,
}

impl ApiErrorResponse {
    /// Convert into a [`ClientError::Api`] carrying the HTTP status.
    #[must_use]
    pub fn into_error(self, status: u16) -> ClientError {
        ClientError::Api {
            status,
            code: self.error.code,
            message: self.error.message,
            attachment: self.error.attachment,
        }
    }
}
