use std::future::Future;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
}

pub trait PageFetcher {
    fn fetch_page(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}

impl PageFetcher for reqwest::Client {
    #[tracing::instrument(skip(self))]
    fn fetch_page(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<String, FetchError>> + Send {
        async move {
            let url = url.to_string();
            tracing::info!("Requesting page");
            let response = match self.get(&url).send().await {
                Ok(response) => response,
                Err(err) => {
                    tracing::error!("{}", err.to_string());
                    return Err(FetchError::Transport(err.to_string()));
                }
            };
            let status = response.status();
            if status.is_client_error() || status.is_server_error() {
                tracing::error!("Request failed with status {}", status);
                return Err(FetchError::Status(status.as_u16()));
            }
            tracing::info!("Page received");
            match response.text().await {
                Ok(body) => Ok(body),
                Err(err) => {
                    tracing::error!("{}", err.to_string());
                    Err(FetchError::Transport(err.to_string()))
                }
            }
        }
    }
}
