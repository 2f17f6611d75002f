use serde::Deserialize;

use crate::geo::GeoPoint;

use super::{SampleParameters, ScenarioPresets, TargetClass, TrajectoryError, TrajectoryProfile};

/// Form-shaped trajectory request. Coordinates arrive as raw strings, the way
/// the launch form submits them.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ScenarioRequest {
    pub target_class: TargetClass,
    pub profile: TrajectoryProfile,
    pub launch_lon: String,
    pub launch_lat: String,
    pub impact_lon: String,
    pub impact_lat: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ResolvedScenario {
    pub launch: GeoPoint,
    pub impact: GeoPoint,
    pub params: SampleParameters,
}

impl ScenarioRequest {
    /// Validates the raw form input against the given preset table.
    pub fn resolve(&self, presets: &ScenarioPresets) -> Result<ResolvedScenario, TrajectoryError> {
        let launch = GeoPoint::parse(&self.launch_lon, &self.launch_lat)?;
        let impact = GeoPoint::parse(&self.impact_lon, &self.impact_lat)?;
        let params =
            SampleParameters::from_preset(presets.for_class(self.target_class), self.profile)?;
        Ok(ResolvedScenario {
            launch,
            impact,
            params,
        })
    }
}
