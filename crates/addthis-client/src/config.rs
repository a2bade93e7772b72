//! Client configuration.

use serde::Deserialize;
use std::path::Path;

use crate::error::ClientError;
use crate::types::BASE_URL;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Paths searched for a credentials file, in order.
const SECRET_PATHS: [&str; 2] = [".secrets/addthis.json", "../.secrets/addthis.json"];

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Endpoint root (default: [`BASE_URL`]).
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: concat!("addthis-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientOptions {
    /// Create options pointing at a different endpoint root.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Set the user agent.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The endpoint root with exactly one trailing `/`.
    #[must_use]
    pub fn normalized_base_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}

/// Credentials file structure.
#[derive(Debug, Deserialize)]
struct AddthisSecrets {
    userid: String,
    password: String,
    #[serde(default)]
    pubid: Option<String>,
}

/// Full client configuration, usually loaded from the environment.
#[derive(Clone)]
pub struct AddthisConfig {
    /// AddThis userid or email address.
    pub userid: String,
    /// AddThis password.
    pub password: String,
    /// Default publisher id.
    pub pubid: Option<String>,
    /// Transport options.
    pub options: ClientOptions,
}

impl std::fmt::Debug for AddthisConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddthisConfig")
            .field("userid", &self.userid)
            .field("password", &"<redacted>")
            .field("pubid", &self.pubid)
            .field("options", &self.options)
            .finish()
    }
}

impl AddthisConfig {
    /// Create a configuration with default options.
    #[must_use]
    pub fn new(userid: impl Into<String>, password: impl Into<String>, pubid: Option<String>) -> Self {
        Self {
            userid: userid.into(),
            password: password.into(),
            pubid,
            options: ClientOptions::default(),
        }
    }

    /// Load configuration from a secrets file or environment variables.
    ///
    /// Credentials come from `.secrets/addthis.json` when present, otherwise
    /// from `ADDTHIS_USERID`, `ADDTHIS_PASSWORD` and `ADDTHIS_PUBID`.
    /// `ADDTHIS_BASE_URL` and `ADDTHIS_TIMEOUT_SECONDS` override the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if no userid or password is found
    /// or an override cannot be parsed.
    pub fn from_env() -> Result<Self, ClientError> {
        for path in &SECRET_PATHS {
            if let Ok(secrets) = load_secrets_file(path) {
                tracing::info!(path = %path, "Loaded AddThis credentials from file");
                let mut config = Self::new(secrets.userid, secrets.password, secrets.pubid);
                config.options = options_from_lookup(|key| std::env::var(key).ok())?;
                return Ok(config);
            }
        }

        tracing::debug!("AddThis secrets file not found, using environment variables");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from a JSON secrets file.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the file is missing or malformed.
    pub fn from_secrets_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let secrets = load_secrets_file(path).map_err(|e| {
            ClientError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Ok(Self::new(secrets.userid, secrets.password, secrets.pubid))
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if a required variable is missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let userid = required(&lookup, "ADDTHIS_USERID")?;
        let password = required(&lookup, "ADDTHIS_PASSWORD")?;
        let pubid = lookup("ADDTHIS_PUBID").filter(|v| !v.is_empty());

        Ok(Self {
            userid,
            password,
            pubid,
            options: options_from_lookup(&lookup)?,
        })
    }

    /// Replace the transport options.
    #[must_use]
    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String, ClientError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ClientError::Configuration(format!("{key} is not set")))
}

fn options_from_lookup<F>(lookup: F) -> Result<ClientOptions, ClientError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut options = ClientOptions::default();
    if let Some(base_url) = lookup("ADDTHIS_BASE_URL").filter(|v| !v.is_empty()) {
        options.base_url = base_url;
    }
    if let Some(timeout) = lookup("ADDTHIS_TIMEOUT_SECONDS") {
        options.timeout_seconds = timeout.parse().map_err(|_| {
            ClientError::Configuration(format!("ADDTHIS_TIMEOUT_SECONDS is not a number: {timeout}"))
        })?;
    }
    Ok(options)
}

/// Load secrets from a JSON file.
fn load_secrets_file(path: impl AsRef<Path>) -> Result<AddthisSecrets, std::io::Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Secrets file not found",
        ));
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
