use anyhow::Context;
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Decode a JSON body, turning any non-2xx response into an error that
/// carries the status and whatever the service said.
pub async fn json_or_error<T: DeserializeOwned>(res: Response) -> anyhow::Result<T> {
    let status = res.status();

    if !status.is_success() {
        let text = res.text().await.with_context(|| "Could not get response")?;
        return Err(anyhow::anyhow!("GoogleAPIError {} {}", status, text));
    }

    res.json::<T>()
        .await
        .with_context(|| "Could not decode response")
}
