//! Cooling model runner
//!
//! Wires validation, evapotranspiration estimation and cooling conversion
//! into a single pure evaluation.

use crate::Result;
use crate::config::ModelConfig;
use crate::cooling::CoolingConverter;
use crate::evapotranspiration::EvapotranspirationEstimator;
use crate::models::{ModelInputs, ModelResult};
use crate::validation::validate;
use tracing::debug;

/// Evaluates model inputs against a fixed set of site constants
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingModel {
    estimator: EvapotranspirationEstimator,
    converter: CoolingConverter,
}

impl CoolingModel {
    /// Build a model for the site described by `config`.
    ///
    /// # Errors
    /// Returns [`crate::EtCoolError::Config`] when `config` fails validation.
    pub fn new(config: &ModelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            estimator: EvapotranspirationEstimator::from_validated(config),
            converter: CoolingConverter::from_validated(config),
        })
    }

    /// Validate `inputs`, estimate evapotranspiration and convert it to cooling.
    ///
    /// # Errors
    /// Returns [`crate::EtCoolError::InvalidParameter`] for implausible inputs.
    #[tracing::instrument(name = "run_model", level = "debug", skip(self))]
    pub fn run(&self, inputs: &ModelInputs) -> Result<ModelResult> {
        let inputs = validate(inputs)?;

        let et = self.estimator.estimate(inputs);
        debug!(
            reference = et.reference_mm_day,
            actual = et.actual_mm_day,
            vegetation_coefficient = et.vegetation_coefficient,
            soil_coefficient = et.soil_coefficient,
            "estimated evapotranspiration"
        );

        let cooling = self.converter.convert(et.actual_mm_day)?;
        debug!(
            latent_heat_flux = cooling.latent_heat_flux_w_m2,
            cooling_effect = cooling.cooling_effect_c,
            "converted to cooling effect"
        );

        Ok(ModelResult {
            cooling_effect_c: cooling.cooling_effect_c,
            evapotranspiration_mm_day: et.actual_mm_day,
            reference_et_mm_day: et.reference_mm_day,
            latent_heat_flux_w_m2: cooling.latent_heat_flux_w_m2,
        })
    }

    /// Evaluate a sequence of observations, stopping at the first invalid one
    pub fn run_series(&self, series: &[ModelInputs]) -> Result<Vec<ModelResult>> {
        series.iter().map(|inputs| self.run(inputs)).collect()
    }
}

impl Default for CoolingModel {
    fn default() -> Self {
        Self {
            estimator: EvapotranspirationEstimator::default(),
            converter: CoolingConverter::default(),
        }
    }
}

/// Evaluate `inputs` with the default site constants
pub fn run(inputs: &ModelInputs) -> Result<ModelResult> {
    CoolingModel::default().run(inputs)
}
