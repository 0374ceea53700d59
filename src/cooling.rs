//! Conversion of an evapotranspiration rate into a temperature reduction
//!
//! The evaporated water carries latent heat `LE = ET · λ` away from the
//! surface. Treating that flux as heat withheld from the air, the cooling is
//! `ΔT = LE / h` where `h` is a bulk surface heat transfer coefficient.

use crate::config::ModelConfig;
use crate::{EtCoolError, Result};
use serde::{Deserialize, Serialize};

/// Latent heat of vaporization of water near 20°C, MJ/kg
pub const LATENT_HEAT_MJ_KG: f64 = 2.45;

/// Assumed bulk heat exchange between surface and air, W/m²/K
pub const DEFAULT_HEAT_TRANSFER_COEFFICIENT: f64 = 50.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Latent heat flux and the cooling it implies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoolingEstimate {
    pub latent_heat_flux_w_m2: f64,
    pub cooling_effect_c: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoolingConverter {
    latent_heat_mj_kg: f64,
    heat_transfer_coefficient: f64,
}

impl CoolingConverter {
    /// # Errors
    /// Returns [`EtCoolError::Config`] when `config` fails validation.
    pub fn new(config: &ModelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    pub(crate) fn from_validated(config: &ModelConfig) -> Self {
        Self {
            latent_heat_mj_kg: config.latent_heat_mj_kg,
            heat_transfer_coefficient: config.heat_transfer_coefficient_w_m2_k,
        }
    }

    /// Latent heat flux for `rate_mm_day` (1 mm of water over 1 m² is 1 kg), W/m²
    #[must_use]
    pub fn latent_heat_flux(&self, rate_mm_day: f64) -> f64 {
        rate_mm_day * self.latent_heat_mj_kg * 1.0e6 / SECONDS_PER_DAY
    }

    /// Convert an evapotranspiration rate in mm/day to a cooling estimate.
    ///
    /// # Errors
    /// Returns [`EtCoolError::InvalidValue`] for a negative or non-finite rate.
    pub fn convert(&self, rate_mm_day: f64) -> Result<CoolingEstimate> {
        if !rate_mm_day.is_finite() {
            return Err(EtCoolError::invalid_value(format!(
                "evapotranspiration rate {rate_mm_day} is not a finite number"
            )));
        }
        if rate_mm_day < 0.0 {
            return Err(EtCoolError::invalid_value(format!(
                "evapotranspiration rate {rate_mm_day} mm/day is negative"
            )));
        }

        let latent_heat_flux_w_m2 = self.latent_heat_flux(rate_mm_day);
        Ok(CoolingEstimate {
            latent_heat_flux_w_m2,
            cooling_effect_c: latent_heat_flux_w_m2 / self.heat_transfer_coefficient,
        })
    }
}

impl Default for CoolingConverter {
    fn default() -> Self {
        Self::from_validated(&ModelConfig::default())
    }
}
