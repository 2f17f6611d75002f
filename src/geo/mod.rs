mod ellipsoid;
mod error;
mod geodesic;
mod point;

pub use ellipsoid::{geodetic_to_ecef, Ecef};
pub use error::GeoError;
pub use geodesic::Geodesic;
pub use point::GeoPoint;
