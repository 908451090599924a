//! Core data model for cold-chain route rendering.

use serde::{Deserialize, Serialize};

/// A point on the map in decimal degrees.
///
/// Serialized as a `[lng, lat]` pair, the shape both the directions provider
/// and the map front-end use on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self { lng, lat }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.lng, c.lat)
    }
}

/// One leg of a vehicle trajectory: where a driving route starts and ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePair {
    pub origin: Coordinate,
    pub destination: Coordinate,
}

/// An ordered driving route between a pair's endpoints.
///
/// Empty when the provider returned no usable data for the leg; the renderer
/// skips empty paths instead of drawing them.
pub type Path = Vec<Coordinate>;

/// Role of a stop in a delivery trajectory.
///
/// Wire values match the front-end's marker data (0 depot, 1 pickup,
/// 2 delivery).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StopKind {
    Depot,
    Pickup,
    Delivery,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown stop kind {0}, expected 0, 1 or 2")]
pub struct UnknownStopKind(pub u8);

impl TryFrom<u8> for StopKind {
    type Error = UnknownStopKind;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(StopKind::Depot),
            1 => Ok(StopKind::Pickup),
            2 => Ok(StopKind::Delivery),
            other => Err(UnknownStopKind(other)),
        }
    }
}

impl From<StopKind> for u8 {
    fn from(kind: StopKind) -> Self {
        match kind {
            StopKind::Depot => 0,
            StopKind::Pickup => 1,
            StopKind::Delivery => 2,
        }
    }
}

/// A planned stop on the map: position plus the marker metadata the UI
/// renders next to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub position: Coordinate,
    #[serde(rename = "nodeType")]
    pub kind: StopKind,
    pub order_id: u32,
}

impl Stop {
    /// Marker label shown beside the stop. Order ids are zero-based on the
    /// wire and displayed one-based.
    pub fn label(&self) -> String {
        match self.kind {
            StopKind::Depot => "depot".to_string(),
            StopKind::Pickup => format!("pickup {}", self.order_id + 1),
            StopKind::Delivery => format!("delivery {}", self.order_id + 1),
        }
    }
}

/// Expand waypoint-index trajectories into the flat list of legs to fetch.
///
/// Each trajectory contributes one `RoutePair` per consecutive index pair.
/// Legs referencing an index outside `stops` are skipped, so a truncated or
/// inconsistent stop list degrades to fewer legs rather than an error.
pub fn expand_trajectories(stops: &[Stop], trajectories: &[Vec<usize>]) -> Vec<RoutePair> {
    let mut pairs = Vec::new();
    for trajectory in trajectories {
        for leg in trajectory.windows(2) {
            let (Some(origin), Some(destination)) = (stops.get(leg[0]), stops.get(leg[1])) else {
                continue;
            };
            pairs.push(RoutePair {
                origin: origin.position,
                destination: destination.position,
            });
        }
    }
    pairs
}
