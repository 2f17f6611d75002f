use serde::Serialize;

use super::GeoError;

/// Geographic surface point in degrees. Coordinates are clamped to valid
/// ranges on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, utoipa::ToSchema)]
pub struct GeoPoint {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
}

impl GeoPoint {
    pub fn new(longitude_deg: f64, latitude_deg: f64) -> Self {
        Self {
            longitude_deg: longitude_deg.clamp(-180.0, 180.0),
            latitude_deg: latitude_deg.clamp(-90.0, 90.0),
        }
    }

    /// Builds a point from form-style string input.
    pub fn parse(longitude: &str, latitude: &str) -> Result<Self, GeoError> {
        let lon = parse_coordinate("longitude", longitude)?;
        let lat = parse_coordinate("latitude", latitude)?;
        Ok(Self::new(lon, lat))
    }

    /// Parses a `"lon,lat"` pair, as taken on the command line.
    pub fn parse_pair(pair: &str) -> Result<Self, GeoError> {
        let parts: Vec<_> = pair.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return Err(GeoError::InvalidCoordinatePair(pair.to_string()));
        }
        Self::parse(parts[0], parts[1])
    }

    pub fn lon_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    pub fn lat_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<f64, GeoError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeoError::InvalidCoordinate {
            field,
            value: value.to_string(),
        })
}
