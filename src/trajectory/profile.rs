use serde::{Deserialize, Serialize};

/// Named set of timing/shape constants governing a trajectory's phase
/// fractions and easing curves.
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
pub enum TrajectoryProfile {
    #[serde(rename = "traj_a")]
    #[value(name = "traj_a")]
    #[strum(serialize = "traj_a")]
    A,
    #[serde(rename = "traj_b")]
    #[value(name = "traj_b")]
    #[strum(serialize = "traj_b")]
    B,
}

impl TrajectoryProfile {
    pub fn shape(&self) -> ProfileShape {
        match self {
            TrajectoryProfile::A => PROFILE_A,
            TrajectoryProfile::B => PROFILE_B,
        }
    }

    pub fn all() -> [TrajectoryProfile; 2] {
        [TrajectoryProfile::A, TrajectoryProfile::B]
    }
}

/// Shape constants for one profile.
///
/// Only the boost and midcourse fractions are stored; reentry takes whatever
/// fraction of the path they leave over, so the three phases sum to exactly
/// 1.0 in floating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, utoipa::ToSchema)]
pub struct ProfileShape {
    /// Fraction of the path spent in the boost phase.
    pub boost_frac: f64,
    /// Fraction of the path spent in the midcourse phase.
    pub mid_frac: f64,
    /// Easing exponent applied to normalized progress within boost.
    pub boost_ease: f64,
    /// Easing exponent within midcourse; values above 1 concentrate samples
    /// there, slowing the visual middle segment.
    pub mid_ease: f64,
    /// Easing exponent within reentry.
    pub reentry_ease: f64,
    /// Exponent of the midcourse dome `1 - (2t - 1)^k`; 2 is a round dome,
    /// 4 a flat plateau.
    pub dome_exponent: i32,
}

impl ProfileShape {
    /// Path progress at which reentry begins.
    pub fn reentry_start(&self) -> f64 {
        self.boost_frac + self.mid_frac
    }

    /// Fraction of the path spent in reentry.
    pub fn reentry_frac(&self) -> f64 {
        1.0 - self.reentry_start()
    }
}

const PROFILE_A: ProfileShape = ProfileShape {
    boost_frac: 0.18,
    mid_frac: 0.64,
    boost_ease: 0.8,
    mid_ease: 1.35,
    reentry_ease: 0.85,
    dome_exponent: 2,
};

const PROFILE_B: ProfileShape = ProfileShape {
    boost_frac: 0.15,
    mid_frac: 0.72,
    boost_ease: 0.9,
    mid_ease: 1.55,
    reentry_ease: 0.95,
    dome_exponent: 4,
};
