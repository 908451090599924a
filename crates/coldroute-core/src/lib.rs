pub mod models;
pub mod polyline;
pub mod spatial;

pub use models::{expand_trajectories, Coordinate, Path, RoutePair, Stop, StopKind};
pub use polyline::{decode_step, decode_steps};
pub use spatial::haversine_km;
