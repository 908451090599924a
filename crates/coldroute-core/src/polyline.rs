//! Decoding of provider step polylines.
//!
//! The directions provider returns each route step as a delimited string:
//! coordinates separated by `;`, longitude and latitude within a coordinate
//! separated by `,`. A full driving route is the concatenation of its steps.

use crate::models::{Coordinate, Path};

/// Decode a single step polyline such as `"121.636,29.92;121.636,29.909"`.
///
/// Malformed entries (missing comma, non-numeric parts) are skipped so one
/// bad token does not discard the rest of the step.
pub fn decode_step(polyline: &str) -> Path {
    polyline
        .split(';')
        .filter_map(|token| {
            let (lng, lat) = token.split_once(',')?;
            let lng: f64 = lng.trim().parse().ok()?;
            let lat: f64 = lat.trim().parse().ok()?;
            Some(Coordinate::new(lng, lat))
        })
        .collect()
}

/// Decode and concatenate step polylines in order into one flat path.
pub fn decode_steps<'a, I>(polylines: I) -> Path
where
    I: IntoIterator<Item = &'a str>,
{
    let mut path = Path::new();
    for polyline in polylines {
        path.extend(decode_step(polyline));
    }
    path
}
