use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::trajectory::{ProfileEntry, TrajectoryRequest, TrajectoryResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::trajectory::generate,
        super::api::trajectory::list_profiles,
        super::api::trajectory::list_scenarios,
    ),
    components(
        schemas(
            TrajectoryRequest,
            TrajectoryResponse,
            ProfileEntry,
            ErrorResponse,
            crate::geo::GeoPoint,
            crate::geo::Ecef,
            crate::trajectory::ScenarioRequest,
            crate::trajectory::TargetClass,
            crate::trajectory::TrajectoryProfile,
            crate::trajectory::ProfileShape,
            crate::trajectory::ScenarioPreset,
            crate::trajectory::ScenarioPresets,
            crate::trajectory::TrajectorySample,
        )
    ),
    info(
        title = "Arcsim Trajectory API",
        description = "Ballistic trajectory sampling for globe visualization clients",
        version = "0.1.0"
    ),
    tags(
        (name = "trajectory", description = "Trajectory sampling")
    )
)]
pub struct ApiDoc;
