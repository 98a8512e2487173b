//! Upstream data providers: the openFDA label service and the optional
//! local name list, plus shared HTTP plumbing.

use std::borrow::Cow;
use std::sync::OnceLock;
use std::time::Duration;

use crate::error::MedGuideError;

pub(crate) mod local_names;
pub(crate) mod openfda;

const ERROR_BODY_MAX_BYTES: usize = 2048;

/// The pipeline issues one request per user action and blocks on it, so
/// this timeout is the only latency bound.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

pub(crate) fn env_base(default: &'static str, env_var: &str) -> Cow<'static, str> {
    std::env::var(env_var)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(Cow::Owned)
        .unwrap_or_else(|| Cow::Borrowed(default))
}

/// Returns the shared HTTP client: 5-second request timeout, versioned
/// user agent, no retry or transport-level caching.
pub(crate) fn shared_client() -> Result<reqwest::Client, MedGuideError> {
    if let Some(client) = HTTP_CLIENT.get() {
        return Ok(client.clone());
    }

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("medguide/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(MedGuideError::HttpClientInit)?;

    match HTTP_CLIENT.set(client.clone()) {
        Ok(()) => Ok(client),
        Err(_) => HTTP_CLIENT.get().cloned().ok_or_else(|| MedGuideError::Api {
            api: "http-client".into(),
            message: "Shared HTTP client initialization race".into(),
        }),
    }
}

pub(crate) fn body_excerpt(bytes: &[u8]) -> String {
    let full = String::from_utf8_lossy(bytes);

    let truncated: &str = if full.len() > ERROR_BODY_MAX_BYTES {
        let mut end = ERROR_BODY_MAX_BYTES;
        while end > 0 && !full.is_char_boundary(end) {
            end -= 1;
        }
        &full[..end]
    } else {
        full.as_ref()
    };

    let mut s = truncated.trim().replace(['\n', '\r', '\t'], " ");
    if full.len() > ERROR_BODY_MAX_BYTES {
        s.push_str(" …");
    }
    s
}
