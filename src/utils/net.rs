use crate::utils::constants::USER_AGENT;
use serde::de::DeserializeOwned;

/// Create a reqwest client that has the User-Agent
/// header applied so the fabric services can tell
/// these requests apart from browsers.
pub fn create_reqwest() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
}

/// Requests the provided url and parses the response body
/// as JSON. Non success statuses are treated as errors.
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, reqwest::Error> {
    client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<T>()
        .await
}

/// Requests the provided url and returns the response body
/// as text. Non success statuses are treated as errors.
pub async fn get_text(client: &reqwest::Client, url: &str) -> Result<String, reqwest::Error> {
    client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}
