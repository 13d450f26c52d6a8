use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::{LinkProbe, LinkStatus};

const PROBE_TIMEOUT_SECS: u64 = 10;

/// HTTP-backed link probe: one `HEAD` per URL, with a `GET` fallback for
/// servers that reject `HEAD`.
#[derive(Debug, Clone)]
pub struct HttpLinkProbe {
    client: Client,
}

impl HttpLinkProbe {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .user_agent(concat!("masthead/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("Failed to create HTTP client: {}", e))
            })?;
        Ok(Self { client })
    }

    fn status_of(&self, url: &Url) -> Result<reqwest::StatusCode, reqwest::Error> {
        let head = self.client.head(url.clone()).send()?.status();
        if head == reqwest::StatusCode::METHOD_NOT_ALLOWED {
            return Ok(self.client.get(url.clone()).send()?.status());
        }
        Ok(head)
    }
}

impl LinkProbe for HttpLinkProbe {
    fn probe(&self, url: &Url) -> LinkStatus {
        match self.status_of(url) {
            Ok(status) if status.is_success() => LinkStatus::Reachable,
            Ok(status) => LinkStatus::Unreachable(format!("HTTP {}", status)),
            Err(e) => LinkStatus::Unreachable(e.to_string()),
        }
    }
}
