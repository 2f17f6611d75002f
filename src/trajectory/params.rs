use serde::{Deserialize, Serialize};

use super::{TrajectoryError, TrajectoryProfile};

/// Target class selecting a preset flight envelope.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::Display,
    utoipa::ToSchema,
)]
pub enum TargetClass {
    #[value(name = "A")]
    A,
    #[value(name = "B")]
    B,
}

/// Flight envelope preset for one target class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScenarioPreset {
    pub duration_s: f64,
    pub peak_height_m: f64,
    pub sample_count: u32,
}

/// Per-class preset table. The defaults mirror the two built-in flight
/// envelopes; the config file may override either entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScenarioPresets {
    #[serde(default = "preset_class_a")]
    pub class_a: ScenarioPreset,
    #[serde(default = "preset_class_b")]
    pub class_b: ScenarioPreset,
}

fn preset_class_a() -> ScenarioPreset {
    ScenarioPreset {
        duration_s: 420.0,
        peak_height_m: 1_200_000.0,
        sample_count: 360,
    }
}

fn preset_class_b() -> ScenarioPreset {
    ScenarioPreset {
        duration_s: 520.0,
        peak_height_m: 1_600_000.0,
        sample_count: 420,
    }
}

impl Default for ScenarioPresets {
    fn default() -> Self {
        Self {
            class_a: preset_class_a(),
            class_b: preset_class_b(),
        }
    }
}

impl ScenarioPresets {
    pub fn for_class(&self, class: TargetClass) -> ScenarioPreset {
        match class {
            TargetClass::A => self.class_a,
            TargetClass::B => self.class_b,
        }
    }
}

/// Validated inputs for one sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, utoipa::ToSchema)]
pub struct SampleParameters {
    pub total_duration_s: f64,
    pub peak_height_m: f64,
    pub sample_count: u32,
    pub profile: TrajectoryProfile,
}

impl SampleParameters {
    pub fn new(
        total_duration_s: f64,
        peak_height_m: f64,
        sample_count: u32,
        profile: TrajectoryProfile,
    ) -> Result<Self, TrajectoryError> {
        if !(total_duration_s.is_finite() && total_duration_s > 0.0) {
            return Err(TrajectoryError::InvalidParameter {
                name: "total_duration_s",
                reason: format!("must be a positive number, got {total_duration_s}"),
            });
        }
        if !(peak_height_m.is_finite() && peak_height_m > 0.0) {
            return Err(TrajectoryError::InvalidParameter {
                name: "peak_height_m",
                reason: format!("must be a positive number, got {peak_height_m}"),
            });
        }
        if sample_count == 0 {
            return Err(TrajectoryError::InvalidParameter {
                name: "sample_count",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self {
            total_duration_s,
            peak_height_m,
            sample_count,
            profile,
        })
    }

    pub fn from_preset(
        preset: ScenarioPreset,
        profile: TrajectoryProfile,
    ) -> Result<Self, TrajectoryError> {
        Self::new(
            preset.duration_s,
            preset.peak_height_m,
            preset.sample_count,
            profile,
        )
    }
}
