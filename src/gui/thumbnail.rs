//! Thumbnail download for the info card

use tracing::debug;

/// Fetch the raw image bytes behind a thumbnail URL.
pub async fn fetch_thumbnail(client: reqwest::Client, url: String) -> Result<Vec<u8>, String> {
    debug!("Fetching thumbnail {}", url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("Thumbnail request failed: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("Thumbnail request returned {}", response.status()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| format!("Failed to read thumbnail: {}", e))?;
    Ok(bytes.to_vec())
}
