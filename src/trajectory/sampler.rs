use chrono::{DateTime, Duration, Utc};

use crate::geo::{geodetic_to_ecef, GeoPoint, Geodesic};

use super::profile::ProfileShape;
use super::{SampleParameters, TrajectoryError, TrajectorySample};

/// Samples a ballistic arc from `launch` to `impact`.
///
/// Produces `sample_count + 1` points (endpoints inclusive) along the
/// great-circle path. Sample i is timestamped `start_epoch + (i/n) * duration`
/// regardless of easing, so timestamps are uniform while path progress is not.
/// The computation is pure; identical inputs yield identical output.
pub fn sample_trajectory(
    launch: GeoPoint,
    impact: GeoPoint,
    params: &SampleParameters,
    start_epoch: DateTime<Utc>,
) -> Result<Vec<TrajectorySample>, TrajectoryError> {
    let geodesic = Geodesic::new(launch, impact)?;
    let shape = params.profile.shape();
    let count = params.sample_count;

    let mut samples = Vec::with_capacity(count as usize + 1);
    for i in 0..=count {
        let u = path_progress(&shape, i, count);
        let ground = geodesic.interpolate(u);
        let height_m = height_at(&shape, params.peak_height_m, u);
        let elapsed_s = f64::from(i) / f64::from(count) * params.total_duration_s;
        samples.push(TrajectorySample {
            timestamp: start_epoch + Duration::microseconds((elapsed_s * 1e6).round() as i64),
            longitude_deg: ground.longitude_deg,
            latitude_deg: ground.latitude_deg,
            height_m,
            position: geodetic_to_ecef(&ground, height_m),
        });
    }
    Ok(samples)
}

fn smoothstep(x: f64) -> f64 {
    x * x * (3.0 - 2.0 * x)
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Remaps linear sample progress `i/n` into path progress, bending time
/// within each phase by the profile's easing exponent.
fn path_progress(shape: &ProfileShape, index: u32, count: u32) -> f64 {
    if index == 0 {
        return 0.0;
    }
    if index >= count {
        return 1.0;
    }
    let p = f64::from(index) / f64::from(count);
    if p < shape.boost_frac {
        let t = p / shape.boost_frac;
        return shape.boost_frac * clamp01(t.powf(shape.boost_ease));
    }
    if p < shape.reentry_start() {
        let t = (p - shape.boost_frac) / shape.mid_frac;
        return shape.boost_frac + shape.mid_frac * clamp01(t.powf(shape.mid_ease));
    }
    let t = (p - shape.reentry_start()) / shape.reentry_frac();
    shape.reentry_start() + shape.reentry_frac() * clamp01(t.powf(shape.reentry_ease))
}

/// Height above the ellipsoid at path progress `u`.
///
/// Boost rises to 90% of the peak via smoothstep, midcourse holds a dome
/// around the peak, reentry mirrors boost back down to zero.
fn height_at(shape: &ProfileShape, peak_height_m: f64, u: f64) -> f64 {
    if u < shape.boost_frac {
        let t = smoothstep(clamp01(u / shape.boost_frac));
        return peak_height_m * 0.9 * t;
    }
    if u < shape.reentry_start() {
        let t = (u - shape.boost_frac) / shape.mid_frac;
        let dome = 1.0 - (2.0 * t - 1.0).powi(shape.dome_exponent);
        return peak_height_m * (0.9 + 0.1 * dome);
    }
    let t = smoothstep(clamp01((u - shape.reentry_start()) / shape.reentry_frac()));
    peak_height_m * 0.9 * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::TrajectoryProfile;
    use chrono::TimeZone;

    fn example_params() -> SampleParameters {
        SampleParameters::new(420.0, 1_200_000.0, 360, TrajectoryProfile::A).unwrap()
    }

    fn example_epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn example_trajectory() -> Vec<TrajectorySample> {
        sample_trajectory(
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(10.0, 0.0),
            &example_params(),
            example_epoch(),
        )
        .unwrap()
    }

    #[test]
    fn returns_sample_count_plus_one_points() {
        assert_eq!(example_trajectory().len(), 361);
    }

    #[test]
    fn timestamps_are_increasing_and_span_the_duration() {
        let samples = example_trajectory();
        let start = example_epoch();
        assert_eq!(samples[0].timestamp, start);
        assert_eq!(
            samples.last().unwrap().timestamp,
            start + Duration::seconds(420)
        );
        for pair in samples.windows(2) {
            assert!(pair[1].timestamp > pair[0].timestamp);
        }
    }

    #[test]
    fn height_is_zero_only_at_the_endpoints() {
        let samples = example_trajectory();
        assert_eq!(samples[0].height_m, 0.0);
        assert_eq!(samples.last().unwrap().height_m, 0.0);
        for sample in &samples[1..samples.len() - 1] {
            assert!(sample.height_m > 0.0);
        }
    }

    #[test]
    fn ground_track_starts_and_ends_at_the_given_points() {
        let samples = example_trajectory();
        let first = &samples[0];
        assert!((first.longitude_deg - 0.0).abs() < 1e-6);
        assert!((first.latitude_deg - 0.0).abs() < 1e-6);
        let last = samples.last().unwrap();
        assert!((last.longitude_deg - 10.0).abs() < 1e-6);
        assert!((last.latitude_deg - 0.0).abs() < 1e-6);
    }

    #[test]
    fn boost_ends_near_ninety_percent_of_peak() {
        // Profile A spends 18% of the path in boost; with 360 samples that is
        // roughly index 65.
        let samples = example_trajectory();
        let boost_end = &samples[65];
        let expected = 0.9 * 1_200_000.0;
        assert!(
            (boost_end.height_m - expected).abs() < 0.02 * expected,
            "height at boost end was {}",
            boost_end.height_m
        );
    }

    #[test]
    fn midcourse_peaks_at_the_requested_height() {
        let peak = example_trajectory()
            .iter()
            .map(|s| s.height_m)
            .fold(0.0_f64, f64::max);
        assert!((peak - 1_200_000.0).abs() < 1_000.0);
        assert!(peak <= 1_200_000.0 + 1e-6);
    }

    #[test]
    fn resampling_is_bit_identical() {
        let first = example_trajectory();
        let second = example_trajectory();
        assert_eq!(first, second);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.height_m.to_bits(), b.height_m.to_bits());
            assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
        }
    }

    #[test]
    fn profile_b_lingers_longer_in_midcourse() {
        let params_a = example_params();
        let params_b =
            SampleParameters::new(420.0, 1_200_000.0, 360, TrajectoryProfile::B).unwrap();
        let launch = GeoPoint::new(0.0, 0.0);
        let impact = GeoPoint::new(10.0, 0.0);
        let epoch = example_epoch();

        let count = |samples: &[TrajectorySample]| {
            samples
                .iter()
                .filter(|s| s.height_m > 0.9 * 1_200_000.0)
                .count()
        };
        let a = sample_trajectory(launch, impact, &params_a, epoch).unwrap();
        let b = sample_trajectory(launch, impact, &params_b, epoch).unwrap();
        assert!(count(&b) > count(&a));
    }

    #[test]
    fn coincident_endpoints_fail() {
        let p = GeoPoint::new(10.0, 20.0);
        let err = sample_trajectory(p, p, &example_params(), example_epoch()).unwrap_err();
        assert_eq!(
            err,
            TrajectoryError::Geo(crate::geo::GeoError::CoincidentEndpoints)
        );
    }

    #[test]
    fn ecef_positions_sit_above_the_surface() {
        for sample in example_trajectory() {
            let radius = (sample.position.x * sample.position.x
                + sample.position.y * sample.position.y
                + sample.position.z * sample.position.z)
                .sqrt();
            // Equatorial arc: radius must equal semi-major axis plus height.
            assert!((radius - (6_378_137.0 + sample.height_m)).abs() < 1e-3);
        }
    }
}
