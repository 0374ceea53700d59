//! `etcool` - Evapotranspiration cooling-effect calculator
//!
//! Estimates how much a vegetated (or bare) surface cools the air around it
//! from temperature, humidity, wind speed, vegetation type and optional soil
//! moisture and irradiance.
//!
//! ```
//! use etcool::{ModelInputs, VegetationType};
//!
//! let inputs = ModelInputs::new(30.0, 60.0, 2.0, VegetationType::Grass);
//! let result = etcool::run(&inputs).unwrap();
//! assert!(result.cooling_effect_c > 0.0);
//! ```

pub mod config;
pub mod cooling;
pub mod error;
pub mod evapotranspiration;
pub mod model;
pub mod models;
pub mod telemetry;
pub mod validation;

// Re-export core types for public API
pub use config::{EtCoolConfig, ModelConfig};
pub use cooling::{CoolingConverter, CoolingEstimate};
pub use error::EtCoolError;
pub use evapotranspiration::{EtEstimate, EvapotranspirationEstimator};
pub use model::{CoolingModel, run};
pub use models::{ModelInputs, ModelResult, VegetationType};
pub use validation::validate;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, EtCoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
