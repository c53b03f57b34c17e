pub use reqwest::Client as HttpClient;

use crate::error::{Result, SpiderError};
use serde::de::DeserializeOwned;
use tracing::trace;

/// GET `url` and deserialize the body as JSON.
///
/// Non-success statuses are errors; the body is only read once the status is
/// known to be good.
pub(crate) async fn get_json<T: DeserializeOwned>(http_client: &HttpClient, url: &str) -> Result<T> {
    trace!("GET {url}");
    let response = http_client
        .get(url)
        .send()
        .await
        .map_err(|source| SpiderError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SpiderError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.bytes().await.map_err(|source| SpiderError::Network {
        url: url.to_string(),
        source,
    })?;
    trace!("{url} returned {} bytes; deserializing ...", body.len());

    serde_json::from_slice(&body).map_err(|source| SpiderError::Parse {
        url: url.to_string(),
        source,
    })
}
