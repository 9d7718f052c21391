//! Network reachability check used before any package download.

use std::time::Duration;
use ureq::Agent;

use crate::config::ConnectivityConfig;

/// Answers "can we reach the internet right now?".
pub trait Reachability {
    fn is_reachable(&self) -> bool;
}

/// One bounded HTTP GET against a fixed endpoint.
#[derive(Debug, Clone)]
pub struct ConnectivityProbe {
    endpoint: String,
    timeout: Duration,
}

impl ConnectivityProbe {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn from_config(config: &ConnectivityConfig) -> Self {
        Self::new(config.endpoint.clone(), config.timeout())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn agent(&self) -> Agent {
        Agent::config_builder()
            .timeout_global(Some(self.timeout))
            .http_status_as_error(false)
            .build()
            .into()
    }
}

impl Reachability for ConnectivityProbe {
    /// Any HTTP response counts, whatever its status. Transport errors map to `false`.
    fn is_reachable(&self) -> bool {
        match self.agent().get(self.endpoint.as_str()).call() {
            Ok(resp) => {
                log::debug!("{} answered with {}", self.endpoint, resp.status());
                true
            }
            Err(e) => {
                log::info!("{} unreachable: {}", self.endpoint, e);
                false
            }
        }
    }
}
