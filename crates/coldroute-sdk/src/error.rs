use thiserror::Error;

/// Failure of a single directions fetch.
///
/// The batch layer never sees these: `DirectionsProvider::fetch_path` absorbs
/// them into an empty path. They exist for the `try_fetch_path` seam and for
/// client construction.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("directions request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("directions endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode directions response: {0}")]
    Decode(#[from] serde_json::Error),
}
