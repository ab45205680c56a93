//! HTTP client for the Art Institute of Chicago public API.
//!
//! The application performs exactly one catalog fetch at startup plus one
//! image download per displayed artwork. There is no retry and no
//! user-facing error surface: failures are reported to the caller, logged
//! there, and the UI keeps rendering whatever state it already has.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::state::data::Artwork;

/// Artworks listing endpoint
const API_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// How many records the startup fetch asks for
const PAGE_SIZE: u32 = 20;

/// Field projection requested from the API, matching the `Artwork` struct
const FIELDS: &str = "id,title,image_id,artist_title,place_of_origin,dimensions";

/// Per-request timeout for both the catalog fetch and image downloads
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from talking to the museum API.
///
/// Variants carry strings rather than source errors so values stay `Clone`
/// and can travel inside UI messages.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Connection, DNS, or timeout failure.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Envelope of the artworks listing response.
#[derive(Debug, Deserialize)]
struct ArtworksResponse {
    data: Vec<Artwork>,
}

/// Build the artworks listing URL with the page size and field projection.
fn artworks_url() -> Url {
    let mut url = Url::parse(API_URL).expect("artworks endpoint URL is valid");
    url.query_pairs_mut()
        .append_pair("limit", &PAGE_SIZE.to_string())
        .append_pair("fields", FIELDS);
    url
}

fn http_client() -> ApiResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(ApiError::from)
}

async fn checked_get(client: &reqwest::Client, url: Url) -> ApiResult<reqwest::Response> {
    let response = client.get(url.as_str()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::RequestFailed {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response)
}

/// Fetch the startup batch of artwork records.
///
/// Returns the records in the order the API listed them; the caller
/// replaces its catalog wholesale with the result.
pub async fn fetch_artworks() -> ApiResult<Vec<Artwork>> {
    let client = http_client()?;
    let response = checked_get(&client, artworks_url()).await?;
    let body: ArtworksResponse = response.json().await?;
    Ok(body.data)
}

/// Download image bytes from a IIIF URL.
///
/// The caller hands the bytes to the image widget for decoding; no
/// processing happens here.
pub async fn fetch_image(url: String) -> ApiResult<Vec<u8>> {
    let parsed = Url::parse(&url).map_err(|e| ApiError::Decode(e.to_string()))?;
    let client = http_client()?;
    let response = checked_get(&client, parsed).await?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artworks_url_query_parameters() {
        let url = artworks_url();
        assert_eq!(url.host_str(), Some("api.artic.edu"));
        assert_eq!(url.path(), "/api/v1/artworks");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert!(pairs.contains(&("limit".to_string(), "20".to_string())));
        assert!(pairs.contains(&(
            "fields".to_string(),
            "id,title,image_id,artist_title,place_of_origin,dimensions".to_string()
        )));
    }

    #[test]
    fn test_response_envelope_deserialization() {
        let json = r#"{
            "pagination": {"total": 126335, "limit": 2},
            "data": [
                {"id": 1, "title": "Starry Night", "image_id": "aaa"},
                {"id": 2, "title": "Mona Lisa"}
            ],
            "info": {"license_text": "..."}
        }"#;
        let response: ArtworksResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].id, 1);
        assert_eq!(response.data[1].title, "Mona Lisa");
        assert!(response.data[1].image_id.is_none());
    }

    #[test]
    fn test_request_failed_error_message() {
        let error = ApiError::RequestFailed {
            status: 503,
            url: "https://api.artic.edu/api/v1/artworks".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("api.artic.edu"));
    }

    #[tokio::test]
    async fn test_fetch_image_rejects_invalid_url() {
        // Fails at URL parsing, before any network traffic.
        let result = fetch_image("not a url".to_string()).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
