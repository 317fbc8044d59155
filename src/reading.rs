//! A single wind measurement

use serde::{Deserialize, Serialize};

/// One wind-direction/wind-speed measurement to be spoken
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Bearing the wind blows from, in degrees (0..360]
    pub wind_direction: f64,
    /// Average wind speed in m/s
    pub wind_speed: f64,
}

impl Reading {
    pub fn new(wind_direction: f64, wind_speed: f64) -> Self {
        Self {
            wind_direction,
            wind_speed,
        }
    }
}
