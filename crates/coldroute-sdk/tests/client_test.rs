//! Failure absorption at the single-fetch boundary.

use std::time::Duration;

use coldroute_core::{Coordinate, RoutePair};
use coldroute_sdk::{AmapClient, DirectionsConfig, DirectionsProvider, FetchError};

fn unreachable_config() -> DirectionsConfig {
    // Discard port on loopback: connection is refused immediately, no
    // external network involved.
    let mut config = DirectionsConfig::new("test-key");
    config.base_url = "http://127.0.0.1:9/v5/direction/driving".to_string();
    config.http_timeout = Duration::from_secs(2);
    config
}

fn leg() -> RoutePair {
    RoutePair {
        origin: Coordinate::new(121.636, 29.92),
        destination: Coordinate::new(121.636, 29.909),
    }
}

#[tokio::test]
async fn network_failure_surfaces_on_the_result_seam() {
    let client = AmapClient::new(unreachable_config()).unwrap();
    let err = client.try_fetch_path(&leg()).await.unwrap_err();
    assert!(matches!(err, FetchError::Http(_)), "got {err}");
}

#[tokio::test]
async fn network_failure_is_absorbed_into_an_empty_path() {
    let client = AmapClient::new(unreachable_config()).unwrap();
    let path = client.fetch_path(&leg()).await;
    assert!(path.is_empty());
}

#[tokio::test]
async fn batch_survives_every_leg_failing() {
    let client = AmapClient::new(unreachable_config()).unwrap();
    let pairs = vec![leg(), leg(), leg()];
    let paths = coldroute_sdk::fetch_batch_paths(&client, &pairs, Duration::ZERO).await;
    assert_eq!(paths.len(), 3);
    assert!(paths.iter().all(|p| p.is_empty()));
}
