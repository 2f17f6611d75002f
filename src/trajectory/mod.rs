mod error;
mod params;
mod profile;
mod sample;
mod sampler;
mod scenario;

pub use error::TrajectoryError;
pub use params::{SampleParameters, ScenarioPreset, ScenarioPresets, TargetClass};
pub use profile::{ProfileShape, TrajectoryProfile};
pub use sample::TrajectorySample;
pub use sampler::sample_trajectory;
pub use scenario::{ResolvedScenario, ScenarioRequest};
