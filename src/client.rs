//! HTTP transport for EAS commands.
//!
//! Every command is a POST to the configured endpoint with the command name and the
//! device identity in the query string, basic auth, and the ActiveSync media type.

use std::fmt;

use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::config::Config;
use crate::error::{EasError, EasResult};

/// Device type reported to the server in every request.
pub const DEVICE_TYPE: &str = "SmartPhone";

/// Media type for ActiveSync request and response bodies.
pub const EAS_CONTENT_TYPE: &str = "application/vnd.ms-sync.wbxml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FolderSync,
    Sync,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::FolderSync => "FolderSync",
            Command::Sync => "Sync",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated connection to one EAS endpoint.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct EasClient {
    http: reqwest::Client,
    config: Config,
}

impl EasClient {
    pub fn new(config: Config) -> EasResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_http(http, config))
    }

    /// Use an already configured HTTP client (proxies, timeouts, test servers).
    pub fn with_http(http: reqwest::Client, config: Config) -> Self {
        EasClient { http, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn command_url(&self, command: Command) -> EasResult<Url> {
        let mut url = Url::parse(&self.config.exchange_url).map_err(|e| {
            EasError::Config(format!(
                "Invalid exchange_url {:?}: {}",
                self.config.exchange_url, e
            ))
        })?;

        url.query_pairs_mut()
            .append_pair("Cmd", command.as_str())
            .append_pair("User", &self.config.username)
            .append_pair("DeviceId", &self.config.device_id)
            .append_pair("DeviceType", DEVICE_TYPE);

        Ok(url)
    }

    /// POST `body` as `command` and return the raw response body.
    pub async fn post(&self, command: Command, body: String) -> EasResult<Vec<u8>> {
        let url = self.command_url(command)?;
        let (username, password) = self.config.credentials();

        tracing::debug!(%command, %url, bytes = body.len(), "sending request");

        let response = self
            .http
            .post(url)
            .basic_auth(username, Some(password))
            .header(CONTENT_TYPE, EAS_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| EasError::Network(format!("{} request failed: {}", command, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EasError::Network(format!(
                "{} request failed (status {})",
                command, status
            )));
        }

        let bytes = response.bytes().await?;
        tracing::debug!(%command, %status, bytes = bytes.len(), "received response");

        Ok(bytes.to_vec())
    }
}
