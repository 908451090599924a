//! HTTP client for the directions provider.

use coldroute_core::polyline::decode_steps;
use coldroute_core::{Path, RoutePair};
use serde::Deserialize;

use crate::batch::{fetch_batch_paths, DirectionsProvider};
use crate::config::DirectionsConfig;
use crate::error::FetchError;

/// Client for an AMap-style driving-directions endpoint.
pub struct AmapClient {
    http: reqwest::Client,
    config: DirectionsConfig,
}

#[derive(Debug, Default, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    route: RouteBody,
}

#[derive(Debug, Default, Deserialize)]
struct RouteBody {
    #[serde(default)]
    paths: Vec<RoutePlan>,
}

#[derive(Debug, Default, Deserialize)]
struct RoutePlan {
    #[serde(default)]
    steps: Vec<RouteStep>,
}

#[derive(Debug, Default, Deserialize)]
struct RouteStep {
    #[serde(default)]
    polyline: String,
}

impl AmapClient {
    pub fn new(config: DirectionsConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// Fetch the driving path for one leg, surfacing failures.
    ///
    /// Empty or partially empty step lists are not failures: the provider
    /// legitimately returns no route for some pairs, and the result is an
    /// empty path.
    pub async fn try_fetch_path(&self, pair: &RoutePair) -> Result<Path, FetchError> {
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("origin", format_coordinate(pair.origin.lng, pair.origin.lat)),
                (
                    "destination",
                    format_coordinate(pair.destination.lng, pair.destination.lat),
                ),
                ("key", self.config.api_key.clone()),
                ("strategy", self.config.strategy.clone()),
                ("output", "json".to_string()),
                ("show_fields", "polyline".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body: DirectionsResponse = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(error = %e, body = %text, "unparseable directions response");
            e
        })?;

        let path = collect_path(&body);
        if path.is_empty() {
            tracing::warn!(
                origin = %format_coordinate(pair.origin.lng, pair.origin.lat),
                destination = %format_coordinate(pair.destination.lng, pair.destination.lat),
                "provider returned no route steps"
            );
        }
        Ok(path)
    }

    /// Fetch all legs sequentially with the configured inter-request delay.
    pub async fn fetch_batch(&self, pairs: &[RoutePair]) -> Vec<Path> {
        fetch_batch_paths(self, pairs, self.config.request_delay).await
    }
}

impl DirectionsProvider for AmapClient {
    async fn fetch_path(&self, pair: &RoutePair) -> Path {
        match self.try_fetch_path(pair).await {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(error = %e, "directions fetch failed, leg will not be drawn");
                Path::new()
            }
        }
    }
}

fn format_coordinate(lng: f64, lat: f64) -> String {
    format!("{lng:.6},{lat:.6}")
}

/// Concatenate the step polylines of the first returned route.
fn collect_path(body: &DirectionsResponse) -> Path {
    let Some(plan) = body.route.paths.first() else {
        return Path::new();
    };
    decode_steps(plan.steps.iter().map(|s| s.polyline.as_str()))
}
