use gloo_net::http::{Request, Response};
use thiserror::Error;

use super::stats::TrafficStats;
use crate::config;

/// Everything that can go wrong talking to the counting service. None of it is
/// fatal; callers log and move on.
#[derive(Debug, Error)]
pub enum CounterError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: gloo_net::Error,
    },
    #[error("{endpoint} answered with HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Visit,
    Check,
    Download,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Visit => "/",
            Endpoint::Check => "/check",
            Endpoint::Download => "/download",
        }
    }
}

/// The three calls the page makes against the counting service.
#[allow(async_fn_in_trait)]
pub trait CounterService {
    async fn register_visit(&self) -> Result<(), CounterError>;
    async fn fetch_stats(&self) -> Result<Vec<TrafficStats>, CounterError>;
    async fn register_download(&self) -> Result<(), CounterError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterClient {
    base_url: String,
}

impl Default for CounterClient {
    fn default() -> Self {
        Self::new(config::get_counter_url())
    }
}

impl CounterClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }

    async fn get(&self, endpoint: Endpoint) -> Result<Response, CounterError> {
        let url = self.url(endpoint);
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|source| CounterError::Transport {
                endpoint: endpoint.path(),
                source,
            })?;

        if !response.ok() {
            return Err(CounterError::Status {
                endpoint: endpoint.path(),
                status: response.status(),
            });
        }
        Ok(response)
    }
}

impl CounterService for CounterClient {
    async fn register_visit(&self) -> Result<(), CounterError> {
        self.get(Endpoint::Visit).await.map(|_| ())
    }

    async fn fetch_stats(&self) -> Result<Vec<TrafficStats>, CounterError> {
        let response = self.get(Endpoint::Check).await?;
        response
            .json::<Vec<TrafficStats>>()
            .await
            .map_err(|source| CounterError::Transport {
                endpoint: Endpoint::Check.path(),
                source,
            })
    }

    async fn register_download(&self) -> Result<(), CounterError> {
        self.get(Endpoint::Download).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slash() {
        let client = CounterClient::new("https://count.example.com/");
        assert_eq!(client.url(Endpoint::Visit), "https://count.example.com/");
        assert_eq!(client.url(Endpoint::Check), "https://count.example.com/check");
        assert_eq!(
            client.url(Endpoint::Download),
            "https://count.example.com/download"
        );
    }

    #[test]
    fn same_origin_base_gives_relative_paths() {
        let client = CounterClient::new("");
        assert_eq!(client.url(Endpoint::Visit), "/");
        assert_eq!(client.url(Endpoint::Check), "/check");
    }

    #[test]
    fn status_error_names_endpoint() {
        let err = CounterError::Status {
            endpoint: Endpoint::Download.path(),
            status: 503,
        };
        assert_eq!(err.to_string(), "/download answered with HTTP 503");
    }
}
