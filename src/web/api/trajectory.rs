use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::geo::GeoPoint;
use crate::trajectory::{
    sample_trajectory, ProfileShape, ScenarioPresets, ScenarioRequest, TargetClass,
    TrajectoryProfile, TrajectorySample,
};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct TrajectoryRequest {
    #[serde(flatten)]
    pub scenario: ScenarioRequest,
    /// Start epoch (RFC3339). Defaults to the current time.
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrajectoryResponse {
    pub target_class: TargetClass,
    pub profile: TrajectoryProfile,
    pub launch: GeoPoint,
    pub impact: GeoPoint,
    pub start: DateTime<Utc>,
    pub duration_s: f64,
    pub sample_count: u32,
    pub samples: Vec<TrajectorySample>,
}

#[utoipa::path(
    post,
    path = "/api/trajectory",
    request_body = TrajectoryRequest,
    responses(
        (status = 200, description = "Sampled trajectory", body = TrajectoryResponse),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "trajectory"
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<TrajectoryRequest>,
) -> ApiResult<Json<TrajectoryResponse>> {
    let scenario = request.scenario.resolve(&state.config.scenarios)?;
    let start = request.start.unwrap_or_else(Utc::now);
    let samples = sample_trajectory(scenario.launch, scenario.impact, &scenario.params, start)?;

    log::info!(
        "sampled {} trajectory: ({}, {}) -> ({}, {}), {} points",
        scenario.params.profile,
        scenario.launch.longitude_deg,
        scenario.launch.latitude_deg,
        scenario.impact.longitude_deg,
        scenario.impact.latitude_deg,
        samples.len()
    );

    Ok(Json(TrajectoryResponse {
        target_class: request.scenario.target_class,
        profile: scenario.params.profile,
        launch: scenario.launch,
        impact: scenario.impact,
        start,
        duration_s: scenario.params.total_duration_s,
        sample_count: scenario.params.sample_count,
        samples,
    }))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileEntry {
    pub profile: TrajectoryProfile,
    pub shape: ProfileShape,
    pub reentry_frac: f64,
}

#[utoipa::path(
    get,
    path = "/api/profiles",
    responses(
        (status = 200, description = "Profile constant table", body = Vec<ProfileEntry>)
    ),
    tag = "trajectory"
)]
pub async fn list_profiles() -> Json<Vec<ProfileEntry>> {
    let entries = TrajectoryProfile::all()
        .into_iter()
        .map(|profile| {
            let shape = profile.shape();
            ProfileEntry {
                profile,
                shape,
                reentry_frac: shape.reentry_frac(),
            }
        })
        .collect();
    Json(entries)
}

#[utoipa::path(
    get,
    path = "/api/scenarios",
    responses(
        (status = 200, description = "Active target-class presets", body = ScenarioPresets)
    ),
    tag = "trajectory"
)]
pub async fn list_scenarios(State(state): State<AppState>) -> Json<ScenarioPresets> {
    Json(state.config.scenarios)
}
