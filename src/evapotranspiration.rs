//! Evapotranspiration estimation
//!
//! Reference evapotranspiration follows the Penman (1963) combination
//! equation with the FAO-56 vapour pressure relations:
//!
//! ```text
//! ET0 = Δ/(Δ+γ) · 0.408 · Rn  +  γ/(Δ+γ) · 2.6 · (1 + 0.54 u) · (es − ea)
//! ```
//!
//! The radiation term depends on temperature only through `Δ`, and the
//! aerodynamic term uses a linear wind function with a wind-independent
//! denominator, so the rate never falls when temperature or wind speed rise
//! and never rises with humidity.
//!
//! The reference rate is then scaled by the vegetation coefficient and a
//! soil moisture stress factor.

use crate::Result;
use crate::config::ModelConfig;
use crate::models::ModelInputs;
use serde::{Deserialize, Serialize};

/// Sea-level standard pressure, kPa
pub const STANDARD_PRESSURE_KPA: f64 = 101.3;

/// Converts MJ/m²/day of radiant energy to mm/day of evaporated water (1/λ)
const RADIATION_TO_EVAPORATION: f64 = 0.408;

/// W/m² averaged over a day to MJ/m²/day
const W_M2_TO_MJ_M2_DAY: f64 = 0.0864;

/// Saturation vapour pressure at `temperature_c`, kPa
#[must_use]
pub fn saturation_vapour_pressure(temperature_c: f64) -> f64 {
    0.6108 * ((17.27 * temperature_c) / (temperature_c + 237.3)).exp()
}

/// Slope of the saturation vapour pressure curve at `temperature_c`, kPa/°C
#[must_use]
pub fn delta_vapour_pressure(temperature_c: f64) -> f64 {
    let es = saturation_vapour_pressure(temperature_c);
    4098.0 * es / (temperature_c + 237.3).powi(2)
}

/// Actual vapour pressure from relative humidity in percent, kPa
#[must_use]
pub fn actual_vapour_pressure(temperature_c: f64, relative_humidity: f64) -> f64 {
    saturation_vapour_pressure(temperature_c) * (relative_humidity / 100.0)
}

/// Mean atmospheric pressure at `elevation_m` above sea level, kPa
#[must_use]
pub fn atmospheric_pressure(elevation_m: f64) -> f64 {
    STANDARD_PRESSURE_KPA * ((293.0 - 0.0065 * elevation_m) / 293.0).powf(5.26)
}

/// Psychrometric constant for `pressure_kpa`, kPa/°C
#[must_use]
pub fn psychrometric_constant(pressure_kpa: f64) -> f64 {
    0.000_665 * pressure_kpa
}

/// Net radiation from daily mean global horizontal irradiance, MJ/m²/day.
///
/// Only the shortwave balance is kept; soil heat flux is negligible on a
/// daily step.
#[must_use]
pub fn net_radiation(solar_radiation_w_m2: f64, albedo: f64) -> f64 {
    (1.0 - albedo) * solar_radiation_w_m2 * W_M2_TO_MJ_M2_DAY
}

/// Evapotranspiration rate and the coefficients that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EtEstimate {
    /// Grass reference rate, mm/day
    pub reference_mm_day: f64,
    /// Rate after vegetation and soil adjustment, mm/day
    pub actual_mm_day: f64,
    pub vegetation_coefficient: f64,
    pub soil_coefficient: f64,
}

/// Penman estimator parameterized by site constants
#[derive(Debug, Clone, PartialEq)]
pub struct EvapotranspirationEstimator {
    psychrometric_constant: f64,
    albedo: f64,
    default_solar_radiation_w_m2: f64,
    soil_stress_threshold: f64,
}

impl EvapotranspirationEstimator {
    /// Build an estimator for the site described by `config`.
    ///
    /// # Errors
    /// Returns [`crate::EtCoolError::Config`] when `config` fails validation.
    pub fn new(config: &ModelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    pub(crate) fn from_validated(config: &ModelConfig) -> Self {
        Self {
            psychrometric_constant: psychrometric_constant(atmospheric_pressure(
                config.elevation_m,
            )),
            albedo: config.albedo,
            default_solar_radiation_w_m2: config.default_solar_radiation_w_m2,
            soil_stress_threshold: config.soil_stress_threshold,
        }
    }

    /// Estimate evapotranspiration for already validated inputs
    #[must_use]
    pub fn estimate(&self, inputs: &ModelInputs) -> EtEstimate {
        let reference_mm_day = self.reference_rate(inputs);
        let vegetation_coefficient = inputs.vegetation.coefficient();
        let soil_coefficient = self.soil_coefficient(inputs.soil_moisture);

        EtEstimate {
            reference_mm_day,
            actual_mm_day: reference_mm_day * vegetation_coefficient * soil_coefficient,
            vegetation_coefficient,
            soil_coefficient,
        }
    }

    /// Grass reference evapotranspiration, mm/day
    #[must_use]
    pub fn reference_rate(&self, inputs: &ModelInputs) -> f64 {
        let t = inputs.temperature_c;
        let gamma = self.psychrometric_constant;
        let delta = delta_vapour_pressure(t);

        let es = saturation_vapour_pressure(t);
        let ea = actual_vapour_pressure(t, inputs.relative_humidity);
        let vapour_deficit = (es - ea).max(0.0);

        let radiation = inputs
            .solar_radiation_w_m2
            .unwrap_or(self.default_solar_radiation_w_m2);
        let rn = net_radiation(radiation, self.albedo);

        let radiation_term = delta / (delta + gamma) * RADIATION_TO_EVAPORATION * rn;
        let wind_function = 2.6 * (1.0 + 0.54 * inputs.wind_speed_ms);
        let aerodynamic_term = gamma / (delta + gamma) * wind_function * vapour_deficit;

        tracing::trace!(delta, gamma, es, ea, rn, radiation_term, aerodynamic_term);

        (radiation_term + aerodynamic_term).max(0.0)
    }

    /// Water stress factor: linear below the threshold, 1 above it or when unknown
    #[must_use]
    pub fn soil_coefficient(&self, soil_moisture: Option<f64>) -> f64 {
        soil_moisture.map_or(1.0, |theta| {
            (theta / self.soil_stress_threshold).clamp(0.0, 1.0)
        })
    }
}

impl Default for EvapotranspirationEstimator {
    fn default() -> Self {
        Self::from_validated(&ModelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VegetationType;
    use rstest::rstest;

    fn inputs(temperature_c: f64, relative_humidity: f64, wind_speed_ms: f64) -> ModelInputs {
        ModelInputs::new(
            temperature_c,
            relative_humidity,
            wind_speed_ms,
            VegetationType::Grass,
        )
    }

    #[test]
    fn test_saturation_vapour_pressure() {
        // Known value: at 20°C, es ≈ 2.338 kPa
        assert!((saturation_vapour_pressure(20.0) - 2.338).abs() < 1e-3);
        assert!((saturation_vapour_pressure(0.0) - 0.6108).abs() < 1e-9);
    }

    #[test]
    fn test_delta_vapour_pressure() {
        // At 20°C, Δ ≈ 0.1447 kPa/°C
        assert!((delta_vapour_pressure(20.0) - 0.1447).abs() < 1e-3);
    }

    #[test]
    fn test_atmospheric_pressure() {
        assert!((atmospheric_pressure(0.0) - STANDARD_PRESSURE_KPA).abs() < 1e-9);
        // FAO-56 example 2: 1800 m gives 81.8 kPa
        assert!((atmospheric_pressure(1800.0) - 81.8).abs() < 0.1);
    }

    #[test]
    fn test_psychrometric_constant() {
        assert!((psychrometric_constant(81.8) - 0.054).abs() < 1e-3);
    }

    #[test]
    fn test_net_radiation() {
        assert_eq!(net_radiation(0.0, 0.23), 0.0);
        assert!((net_radiation(200.0, 0.23) - 13.3056).abs() < 1e-9);
    }

    #[test]
    fn test_typical_rate() {
        // Warm, moderately humid day with the default 200 W/m² irradiance
        let rate = EvapotranspirationEstimator::default().reference_rate(&inputs(30.0, 60.0, 2.0));
        assert!((rate - 6.24).abs() < 0.05, "rate was {rate}");
    }

    #[test]
    fn test_zero_humidity_non_negative() {
        let estimator = EvapotranspirationEstimator::default();
        let estimate = estimator.estimate(&inputs(25.0, 0.0, 2.0).with_solar_radiation(500.0));
        assert!(estimate.actual_mm_day >= 0.0);
        assert!(estimate.actual_mm_day.is_finite());
    }

    #[test]
    fn test_saturated_still_dark_air_has_no_evaporation() {
        let estimator = EvapotranspirationEstimator::default();
        let rate = estimator.reference_rate(&inputs(15.0, 100.0, 0.0).with_solar_radiation(0.0));
        assert_eq!(rate, 0.0);
    }

    #[rstest]
    #[case(None, 1.0)]
    #[case(Some(0.0), 0.0)]
    #[case(Some(0.25), 0.5)]
    #[case(Some(0.5), 1.0)]
    #[case(Some(0.9), 1.0)]
    fn test_soil_coefficient(#[case] soil_moisture: Option<f64>, #[case] expected: f64) {
        let estimator = EvapotranspirationEstimator::default();
        assert!((estimator.soil_coefficient(soil_moisture) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_coefficients_multiply_reference() {
        let estimator = EvapotranspirationEstimator::default();
        let forest = ModelInputs {
            vegetation: VegetationType::Forest,
            ..inputs(28.0, 50.0, 3.0)
        }
        .with_soil_moisture(0.2);

        let estimate = estimator.estimate(&forest);
        let expected = estimate.reference_mm_day * 1.1 * 0.4;
        assert!((estimate.actual_mm_day - expected).abs() < 1e-12);
        assert_eq!(estimate.vegetation_coefficient, 1.1);
    }

    #[test]
    fn test_monotonic_in_temperature() {
        let estimator = EvapotranspirationEstimator::default();
        for humidity in [0.0, 40.0, 80.0, 100.0] {
            for wind in [0.0, 2.0, 8.0] {
                let mut previous = f64::MIN;
                for step in 0..=30 {
                    let t = -30.0 + f64::from(step) * 3.0;
                    let rate = estimator.reference_rate(&inputs(t, humidity, wind));
                    assert!(rate >= previous, "rate fell at T={t}, RH={humidity}, u={wind}");
                    previous = rate;
                }
            }
        }
    }

    #[test]
    fn test_monotonic_in_humidity() {
        let estimator = EvapotranspirationEstimator::default();
        for t in [-10.0, 10.0, 30.0, 45.0] {
            let mut previous = f64::MAX;
            for humidity in (0..=100).step_by(5) {
                let rate = estimator.reference_rate(&inputs(t, f64::from(humidity), 2.0));
                assert!(rate <= previous, "rate rose at RH={humidity}, T={t}");
                previous = rate;
            }
        }
    }

    #[test]
    fn test_monotonic_in_wind_speed() {
        let estimator = EvapotranspirationEstimator::default();
        for humidity in [0.0, 60.0, 100.0] {
            let mut previous = f64::MIN;
            for step in 0..=20 {
                let wind = f64::from(step) * 0.5;
                let rate = estimator.reference_rate(&inputs(30.0, humidity, wind));
                assert!(rate >= previous, "rate fell at u={wind}, RH={humidity}");
                previous = rate;
            }
        }
    }

    #[test]
    fn test_higher_site_lowers_psychrometric_constant() {
        let low = EvapotranspirationEstimator::default();
        let high = EvapotranspirationEstimator::new(&ModelConfig {
            elevation_m: 2000.0,
            ..ModelConfig::default()
        })
        .unwrap();
        assert!(high.psychrometric_constant < low.psychrometric_constant);
    }

    #[test]
    fn test_out_of_range_elevation_rejected() {
        let result = EvapotranspirationEstimator::new(&ModelConfig {
            elevation_m: 60_000.0,
            ..ModelConfig::default()
        });
        assert!(matches!(result, Err(crate::EtCoolError::Config { .. })));
    }
}
