//! Model output and display helpers

use serde::{Deserialize, Serialize};

/// Outcome of one evaluation, with the intermediate rates kept for transparency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    /// Estimated ambient temperature reduction in Celsius
    pub cooling_effect_c: f64,
    /// Evapotranspiration after vegetation and soil adjustment, mm/day
    pub evapotranspiration_mm_day: f64,
    /// Reference (grass, unstressed) evapotranspiration, mm/day
    pub reference_et_mm_day: f64,
    /// Latent heat flux carried away by the evaporated water, W/m²
    pub latent_heat_flux_w_m2: f64,
}

impl ModelResult {
    /// Format cooling effect with unit
    #[must_use]
    pub fn format_cooling(&self) -> String {
        format!("{:.2}°C", self.cooling_effect_c)
    }

    /// Format evapotranspiration rates
    #[must_use]
    pub fn format_evapotranspiration(&self) -> String {
        format!(
            "{:.2} mm/day (reference {:.2} mm/day)",
            self.evapotranspiration_mm_day, self.reference_et_mm_day
        )
    }
}
