use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::geo::Ecef;

/// One point of a sampled trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TrajectorySample {
    pub timestamp: DateTime<Utc>,
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub height_m: f64,
    pub position: Ecef,
}
