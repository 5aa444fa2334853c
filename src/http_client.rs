use std::time::Duration;

use log::debug;
use reqwest::Client;
use tokio_util::sync::CancellationToken;

use crate::errors::{DeckQuizError, Result};

pub fn build_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(DeckQuizError::Client)
}

/// GETs `url` and returns the body, giving up as soon as `cancel` fires.
pub async fn fetch_bytes(
    client: &Client,
    url: &str,
    cancel: &CancellationToken,
) -> Result<Vec<u8>> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!("Fetch of {} cancelled", url);
            Err(DeckQuizError::Cancelled)
        }
        result = get_body(client, url) => result,
    }
}

pub async fn fetch_text(client: &Client, url: &str, cancel: &CancellationToken) -> Result<String> {
    let body = fetch_bytes(client, url, cancel).await?;
    Ok(String::from_utf8_lossy(&body).into_owned())
}

async fn get_body(client: &Client, url: &str) -> Result<Vec<u8>> {
    let to_fetch_error = |source| DeckQuizError::Fetch {
        url: url.to_string(),
        source,
    };
    let response = client.get(url).send().await.map_err(to_fetch_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(DeckQuizError::FetchStatus {
            url: url.to_string(),
            status,
        });
    }
    let body = response.bytes().await.map_err(to_fetch_error)?;
    debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}
