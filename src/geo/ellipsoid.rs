use serde::Serialize;

use super::GeoPoint;

// WGS-84 constants
pub const WGS84_SEMI_MAJOR_M: f64 = 6_378_137.0;
pub const WGS84_E2: f64 = 0.00669437999014;

/// Earth-centered earth-fixed Cartesian position, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, utoipa::ToSchema)]
pub struct Ecef {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Converts a geodetic position at the given height above the ellipsoid to
/// ECEF coordinates.
pub fn geodetic_to_ecef(point: &GeoPoint, height_m: f64) -> Ecef {
    let lat = point.lat_rad();
    let lon = point.lon_rad();
    let sin_lat = lat.sin();
    let cos_lat = lat.cos();
    let sin_lon = lon.sin();
    let cos_lon = lon.cos();
    let n = WGS84_SEMI_MAJOR_M / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
    Ecef {
        x: (n + height_m) * cos_lat * cos_lon,
        y: (n + height_m) * cos_lat * sin_lon,
        z: (n * (1.0 - WGS84_E2) + height_m) * sin_lat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_prime_meridian_maps_to_x_axis() {
        let pos = geodetic_to_ecef(&GeoPoint::new(0.0, 0.0), 0.0);
        assert!((pos.x - WGS84_SEMI_MAJOR_M).abs() < 1e-6);
        assert!(pos.y.abs() < 1e-6);
        assert!(pos.z.abs() < 1e-6);
    }

    #[test]
    fn height_adds_radially_at_equator() {
        let pos = geodetic_to_ecef(&GeoPoint::new(0.0, 0.0), 1_000.0);
        assert!((pos.x - (WGS84_SEMI_MAJOR_M + 1_000.0)).abs() < 1e-6);
    }

    #[test]
    fn north_pole_maps_to_semi_minor_axis() {
        let pos = geodetic_to_ecef(&GeoPoint::new(0.0, 90.0), 0.0);
        let semi_minor = WGS84_SEMI_MAJOR_M * (1.0 - WGS84_E2).sqrt();
        assert!(pos.x.abs() < 1e-3);
        assert!(pos.y.abs() < 1e-3);
        assert!((pos.z - semi_minor).abs() < 1.0);
    }

    #[test]
    fn east_longitude_maps_to_y_axis() {
        let pos = geodetic_to_ecef(&GeoPoint::new(90.0, 0.0), 0.0);
        assert!(pos.x.abs() < 1e-6);
        assert!((pos.y - WGS84_SEMI_MAJOR_M).abs() < 1e-6);
    }
}
