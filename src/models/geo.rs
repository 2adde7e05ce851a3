use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// GPS fix as exchanged with the backend (`{ "lat": .., "long": .. }`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub long: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, long: f64) -> AppResult<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::InvalidCoordinates(format!(
                "latitude {lat} out of range [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&long) {
            return Err(AppError::InvalidCoordinates(format!(
                "longitude {long} out of range [-180, 180]"
            )));
        }
        Ok(Self { lat, long })
    }

    /// Parse the `lat,long` form accepted on the command line.
    pub fn parse(s: &str) -> AppResult<Self> {
        let (lat, long) = s
            .split_once(',')
            .ok_or_else(|| AppError::InvalidCoordinates(s.to_string()))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::InvalidCoordinates(s.to_string()))?;
        let long = long
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::InvalidCoordinates(s.to_string()))?;
        Self::new(lat, long)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lat: {:.5} | Long: {:.5}", self.lat, self.long)
    }
}
