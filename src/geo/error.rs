use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeoError {
    #[error("invalid {field}: {value:?} is not a finite number")]
    InvalidCoordinate { field: &'static str, value: String },
    #[error("invalid coordinate pair: {0:?} (expected \"lon,lat\")")]
    InvalidCoordinatePair(String),
    #[error("launch and impact points coincide")]
    CoincidentEndpoints,
    #[error("launch and impact points are antipodal, path is indeterminate")]
    AntipodalEndpoints,
}
