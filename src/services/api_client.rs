//! Upstream data fetch for verdash.
//!
//! Fetches the version/count listing over HTTP and maps it into
//! [`ClientData`]. The canonical contract is the enveloped response
//! (`{code, msg, data: {list, count}}`); a bare `{version: count}` object
//! is accepted as a legacy fallback. Parsing is split out of the network
//! call so it can be tested without a server.

use serde::Deserialize;

use crate::types::client_data::ClientData;
use crate::types::errors::FetchError;

/// Default endpoint; override with the `VERDASH_API_URL` environment variable.
const DEFAULT_API_URL: &str = "https://stats.example.com/registration/pure_num.php";
const API_URL_ENV: &str = "VERDASH_API_URL";

/// Application-level success code in the response envelope.
const API_OK: i64 = 200;

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    code: i64,
    #[serde(default)]
    msg: String,
    #[serde(default)]
    data: ApiData,
}

#[derive(Debug, Default, Deserialize)]
struct ApiData {
    #[serde(default)]
    list: Vec<ApiItem>,
}

#[derive(Debug, Deserialize)]
struct ApiItem {
    ver: String,
    group_count: String,
}

/// HTTP client for the client-count endpoint.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    url: String,
}

impl ApiClient {
    /// Creates a client against the configured endpoint.
    pub fn new() -> Self {
        let url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_url(url)
    }

    /// Creates a client against an explicit endpoint (used by tests).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issues one GET and maps the response into [`ClientData`].
    ///
    /// A non-2xx status is a transport error; an envelope with
    /// `code != 200` is an application error carrying the upstream
    /// message. Neither is retried automatically.
    pub async fn fetch(&self) -> Result<ClientData, FetchError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport(format!(
                "request failed with status {}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        parse_body(&body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a response body into [`ClientData`].
///
/// An object with a numeric `code` member is treated as the envelope;
/// anything else must be a bare `{version: count}` object. List entries
/// carry counts as strings and are parsed base-10; an unparsable count
/// rejects the whole body rather than silently dropping the entry.
pub fn parse_body(body: &str) -> Result<ClientData, FetchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if value.get("code").map(|c| c.is_i64() || c.is_u64()) == Some(true) {
        parse_envelope(value)
    } else {
        parse_bare_map(value)
    }
}

fn parse_envelope(value: serde_json::Value) -> Result<ClientData, FetchError> {
    let envelope: ApiEnvelope =
        serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))?;

    if envelope.code != API_OK {
        let msg = if envelope.msg.is_empty() {
            format!("service returned code {}", envelope.code)
        } else {
            envelope.msg
        };
        return Err(FetchError::Api(msg));
    }

    let mut data = ClientData::new();
    for item in envelope.data.list {
        let count: u64 = item.group_count.trim().parse().map_err(|_| {
            FetchError::Decode(format!(
                "invalid count '{}' for version '{}'",
                item.group_count, item.ver
            ))
        })?;
        data.insert(&item.ver, count);
    }
    Ok(data)
}

fn parse_bare_map(value: serde_json::Value) -> Result<ClientData, FetchError> {
    let map = value
        .as_object()
        .ok_or_else(|| FetchError::Decode("expected a JSON object".to_string()))?;

    let mut data = ClientData::new();
    for (version, count) in map {
        let count = count
            .as_u64()
            .ok_or_else(|| {
                FetchError::Decode(format!("non-integer count for version '{}'", version))
            })?;
        data.insert(version, count);
    }
    Ok(data)
}
