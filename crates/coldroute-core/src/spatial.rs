//! Great-circle distance math for route tooltips and summaries.

use crate::models::{Coordinate, RoutePair};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers, standard
/// haversine formula. NaN inputs propagate to a NaN result.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lng - a.lng).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Total length of a path in kilometers, summed over consecutive points.
/// Paths with fewer than two points have length 0.
pub fn path_length_km(path: &[Coordinate]) -> f64 {
    path.windows(2).map(|w| haversine_km(w[0], w[1])).sum()
}

/// Hover text for a rendered leg: straight-line distance between the
/// endpoints plus the road length actually driven.
pub fn leg_summary(pair: &RoutePair, path: &[Coordinate]) -> String {
    let direct = haversine_km(pair.origin, pair.destination);
    if path.len() < 2 {
        format!("direct {:.2} km, no road path", direct)
    } else {
        format!(
            "direct {:.2} km, road {:.2} km",
            direct,
            path_length_km(path)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_same_point_is_zero() {
        let p = Coordinate::new(121.636, 29.92);
        assert!(haversine_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn haversine_known_distance() {
        // One degree of latitude is ~111.19 km on the mean-radius sphere.
        let dist = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert!((dist - 111.194).abs() / 111.194 < 0.005);
    }

    #[test]
    fn haversine_reference_city_pair() {
        // Paris (2.3522E, 48.8566N) to Berlin (13.4050E, 52.5200N), ~877.46 km.
        let paris = Coordinate::new(2.3522, 48.8566);
        let berlin = Coordinate::new(13.4050, 52.5200);
        let dist = haversine_km(paris, berlin);
        assert!((dist - 877.46).abs() / 877.46 < 0.005, "got {dist}");
    }

    #[test]
    fn haversine_propagates_nan() {
        let dist = haversine_km(Coordinate::new(f64::NAN, 0.0), Coordinate::new(0.0, 0.0));
        assert!(dist.is_nan());
    }

    #[test]
    fn path_length_sums_segments() {
        let path = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(0.0, 2.0),
        ];
        let len = path_length_km(&path);
        assert!((len - 2.0 * 111.194).abs() < 0.5);

        assert_eq!(path_length_km(&[]), 0.0);
        assert_eq!(path_length_km(&path[..1]), 0.0);
    }

    #[test]
    fn leg_summary_mentions_road_length_only_when_present() {
        let pair = RoutePair {
            origin: Coordinate::new(0.0, 0.0),
            destination: Coordinate::new(0.0, 1.0),
        };
        assert!(leg_summary(&pair, &[]).contains("no road path"));

        let path = vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
        let text = leg_summary(&pair, &path);
        assert!(text.contains("road"), "got {text}");
    }
}
