//! Model input value object and vegetation categories

use crate::EtCoolError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Land cover at the evaluated surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VegetationType {
    /// Short, well-watered grass (the reference surface)
    Grass,
    /// Closed tree canopy
    Forest,
    /// Field crops in mid-season
    Cropland,
    /// Sparse woody cover
    Shrubland,
    /// Unvegetated soil, evaporation only
    BareSoil,
}

impl VegetationType {
    /// All recognized categories
    pub const ALL: [VegetationType; 5] = [
        VegetationType::Grass,
        VegetationType::Forest,
        VegetationType::Cropland,
        VegetationType::Shrubland,
        VegetationType::BareSoil,
    ];

    /// Multiplier applied to the reference (grass) evapotranspiration rate
    #[must_use]
    pub fn coefficient(self) -> f64 {
        match self {
            VegetationType::Grass => 1.0,
            VegetationType::Forest => 1.1,
            VegetationType::Cropland => 1.15,
            VegetationType::Shrubland => 0.75,
            VegetationType::BareSoil => 0.35,
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VegetationType::Grass => "grass",
            VegetationType::Forest => "forest",
            VegetationType::Cropland => "cropland",
            VegetationType::Shrubland => "shrubland",
            VegetationType::BareSoil => "bare-soil",
        }
    }
}

impl fmt::Display for VegetationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VegetationType {
    type Err = EtCoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        VegetationType::ALL
            .into_iter()
            .find(|v| v.as_str() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = VegetationType::ALL.iter().map(|v| v.as_str()).collect();
                EtCoolError::invalid_parameter(
                    "vegetation",
                    format!("unrecognized type '{s}', expected one of: {}", known.join(", ")),
                )
            })
    }
}

/// Weather and surface conditions for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelInputs {
    /// Air temperature in Celsius
    pub temperature_c: f64,
    /// Relative humidity in percent (0-100)
    pub relative_humidity: f64,
    /// Wind speed at 2 m in m/s
    pub wind_speed_ms: f64,
    /// Land cover category
    pub vegetation: VegetationType,
    /// Volumetric soil moisture fraction (0-1)
    #[serde(default)]
    pub soil_moisture: Option<f64>,
    /// Global horizontal irradiance in W/m², daily mean
    #[serde(default)]
    pub solar_radiation_w_m2: Option<f64>,
}

impl ModelInputs {
    #[must_use]
    pub fn new(
        temperature_c: f64,
        relative_humidity: f64,
        wind_speed_ms: f64,
        vegetation: VegetationType,
    ) -> Self {
        Self {
            temperature_c,
            relative_humidity,
            wind_speed_ms,
            vegetation,
            soil_moisture: None,
            solar_radiation_w_m2: None,
        }
    }

    #[must_use]
    pub fn with_soil_moisture(self, soil_moisture: f64) -> Self {
        Self {
            soil_moisture: Some(soil_moisture),
            ..self
        }
    }

    #[must_use]
    pub fn with_solar_radiation(self, solar_radiation_w_m2: f64) -> Self {
        Self {
            solar_radiation_w_m2: Some(solar_radiation_w_m2),
            ..self
        }
    }
}
