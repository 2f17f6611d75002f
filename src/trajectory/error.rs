use thiserror::Error;

use crate::geo::GeoError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TrajectoryError {
    #[error(transparent)]
    Geo(#[from] GeoError),
    #[error("invalid {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
}
