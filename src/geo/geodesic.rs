use super::{GeoError, GeoPoint};

/// Separation below which two endpoints are treated as the same point (or as
/// exactly antipodal), roughly a centimeter on the surface.
const MIN_SEPARATION_RAD: f64 = 1e-9;

/// Great-circle path between two distinct surface points.
///
/// Interpolation uses spherical linear interpolation of the endpoint unit
/// vectors, so intermediate points follow the shortest path. Fractions 0 and
/// 1 return the endpoints exactly.
#[derive(Debug, Clone)]
pub struct Geodesic {
    start: GeoPoint,
    end: GeoPoint,
    start_vec: [f64; 3],
    end_vec: [f64; 3],
    central_angle_rad: f64,
}

impl Geodesic {
    pub fn new(start: GeoPoint, end: GeoPoint) -> Result<Self, GeoError> {
        let start_vec = unit_vector(&start);
        let end_vec = unit_vector(&end);
        let dot = (start_vec[0] * end_vec[0]
            + start_vec[1] * end_vec[1]
            + start_vec[2] * end_vec[2])
            .clamp(-1.0, 1.0);
        let central_angle_rad = dot.acos();

        if central_angle_rad < MIN_SEPARATION_RAD {
            return Err(GeoError::CoincidentEndpoints);
        }
        if std::f64::consts::PI - central_angle_rad < MIN_SEPARATION_RAD {
            return Err(GeoError::AntipodalEndpoints);
        }

        Ok(Self {
            start,
            end,
            start_vec,
            end_vec,
            central_angle_rad,
        })
    }

    pub fn central_angle_rad(&self) -> f64 {
        self.central_angle_rad
    }

    /// Surface point at the given fraction of the path, in [0, 1].
    pub fn interpolate(&self, fraction: f64) -> GeoPoint {
        if fraction <= 0.0 {
            return self.start;
        }
        if fraction >= 1.0 {
            return self.end;
        }

        let sin_total = self.central_angle_rad.sin();
        let wa = ((1.0 - fraction) * self.central_angle_rad).sin() / sin_total;
        let wb = (fraction * self.central_angle_rad).sin() / sin_total;

        let x = wa * self.start_vec[0] + wb * self.end_vec[0];
        let y = wa * self.start_vec[1] + wb * self.end_vec[1];
        let z = wa * self.start_vec[2] + wb * self.end_vec[2];

        let lat = z.atan2((x * x + y * y).sqrt());
        let lon = y.atan2(x);
        GeoPoint::new(lon.to_degrees(), lat.to_degrees())
    }
}

fn unit_vector(point: &GeoPoint) -> [f64; 3] {
    let lat = point.lat_rad();
    let lon = point.lon_rad();
    [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
}
