//! Sequential batch fetching with a self-imposed rate limit.

use std::time::Duration;

use coldroute_core::{Path, RoutePair};

/// Source of driving paths for single legs.
///
/// Implementations absorb their own failures: a leg that cannot be fetched
/// comes back as an empty path, never an error. This keeps the batch loop
/// total — one bad leg must not stop the ones after it.
#[allow(async_fn_in_trait)]
pub trait DirectionsProvider {
    async fn fetch_path(&self, pair: &RoutePair) -> Path;
}

/// Fetch a path for every pair, strictly one request at a time.
///
/// Request `i + 1` is not issued until request `i` has completed and `delay`
/// has elapsed, a deliberate throttle for third-party API quota. Total
/// latency therefore scales linearly with the number of pairs.
///
/// The result has exactly one path per input pair, in input order, with
/// failed or routeless legs present as empty paths.
pub async fn fetch_batch_paths<P: DirectionsProvider>(
    provider: &P,
    pairs: &[RoutePair],
    delay: Duration,
) -> Vec<Path> {
    let mut results = Vec::with_capacity(pairs.len());
    for (i, pair) in pairs.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        tracing::debug!(leg = i, total = pairs.len(), "fetching driving path");
        results.push(provider.fetch_path(pair).await);
    }
    results
}
