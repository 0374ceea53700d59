//! Configuration management for `etcool`
//!
//! Handles loading configuration from a TOML file and `ETCOOL_*`
//! environment variables, and validates every setting before use.

use crate::EtCoolError;
use crate::models::{ModelInputs, VegetationType};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "ETCOOL_CONFIG";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EtCoolConfig {
    /// Physical constants of the evaluated site
    #[serde(default)]
    pub model: ModelConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Conditions evaluated by the `etcool` binary
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

/// Site constants and energy-balance assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Site elevation above sea level in meters
    #[serde(default)]
    pub elevation_m: f64,
    /// Shortwave reflectance of the surface
    #[serde(default = "default_albedo")]
    pub albedo: f64,
    /// Irradiance assumed when an input carries none, W/m²
    #[serde(default = "default_solar_radiation")]
    pub default_solar_radiation_w_m2: f64,
    /// Soil moisture fraction above which plants transpire freely
    #[serde(default = "default_soil_stress_threshold")]
    pub soil_stress_threshold: f64,
    /// Latent heat of vaporization, MJ/kg
    #[serde(default = "default_latent_heat")]
    pub latent_heat_mj_kg: f64,
    /// Bulk surface-air heat transfer coefficient, W/m²/K
    #[serde(default = "default_heat_transfer_coefficient")]
    pub heat_transfer_coefficient_w_m2_k: f64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// A single set of conditions to evaluate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default = "default_temperature")]
    pub temperature_c: f64,
    #[serde(default = "default_humidity")]
    pub relative_humidity: f64,
    #[serde(default = "default_wind_speed")]
    pub wind_speed_ms: f64,
    /// Vegetation name, parsed when the scenario is turned into inputs
    #[serde(default = "default_vegetation")]
    pub vegetation: String,
    pub soil_moisture: Option<f64>,
    pub solar_radiation_w_m2: Option<f64>,
}

// Default value functions
fn default_albedo() -> f64 {
    0.23
}

fn default_solar_radiation() -> f64 {
    200.0
}

fn default_soil_stress_threshold() -> f64 {
    0.5
}

fn default_latent_heat() -> f64 {
    crate::cooling::LATENT_HEAT_MJ_KG
}

fn default_heat_transfer_coefficient() -> f64 {
    crate::cooling::DEFAULT_HEAT_TRANSFER_COEFFICIENT
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_temperature() -> f64 {
    30.0
}

fn default_humidity() -> f64 {
    60.0
}

fn default_wind_speed() -> f64 {
    2.0
}

fn default_vegetation() -> String {
    VegetationType::Grass.to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            elevation_m: 0.0,
            albedo: default_albedo(),
            default_solar_radiation_w_m2: default_solar_radiation(),
            soil_stress_threshold: default_soil_stress_threshold(),
            latent_heat_mj_kg: default_latent_heat(),
            heat_transfer_coefficient_w_m2_k: default_heat_transfer_coefficient(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            temperature_c: default_temperature(),
            relative_humidity: default_humidity(),
            wind_speed_ms: default_wind_speed(),
            vegetation: default_vegetation(),
            soil_moisture: None,
            solar_radiation_w_m2: None,
        }
    }
}

impl ScenarioConfig {
    /// Build model inputs, rejecting an unrecognized vegetation name
    pub fn to_inputs(&self) -> crate::Result<ModelInputs> {
        let vegetation: VegetationType = self.vegetation.parse()?;
        Ok(ModelInputs {
            temperature_c: self.temperature_c,
            relative_humidity: self.relative_humidity,
            wind_speed_ms: self.wind_speed_ms,
            vegetation,
            soil_moisture: self.soil_moisture,
            solar_radiation_w_m2: self.solar_radiation_w_m2,
        })
    }
}

impl EtCoolConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(Self::resolve_config_path);

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // ETCOOL_MODEL__ELEVATION_M=350 overrides model.elevation_m
        builder = builder.add_source(
            Environment::with_prefix("ETCOOL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: EtCoolConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Explicit path from `ETCOOL_CONFIG`, then the per-user location, then `config.toml`
    #[must_use]
    pub fn resolve_config_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(Self::get_config_path)
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("etcool").join("config.toml"))
    }

    /// Apply default values to empty string fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.scenario.vegetation.is_empty() {
            self.scenario.vegetation = default_vegetation();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.model.validate()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(EtCoolError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(EtCoolError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

impl ModelConfig {
    /// Validate numeric configuration ranges
    pub fn validate(&self) -> crate::Result<()> {
        let all_finite = [
            self.elevation_m,
            self.albedo,
            self.default_solar_radiation_w_m2,
            self.soil_stress_threshold,
            self.latent_heat_mj_kg,
            self.heat_transfer_coefficient_w_m2_k,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(EtCoolError::config("Model constants must be finite numbers"));
        }

        if !(-500.0..=9000.0).contains(&self.elevation_m) {
            return Err(EtCoolError::config("Elevation must be within -500 and 9000 m"));
        }

        if !(0.0..1.0).contains(&self.albedo) {
            return Err(EtCoolError::config("Albedo must be in [0, 1)"));
        }

        if !(0.0..=1400.0).contains(&self.default_solar_radiation_w_m2) {
            return Err(EtCoolError::config(
                "Default solar radiation must be within 0 and 1400 W/m²",
            ));
        }

        if self.soil_stress_threshold <= 0.0 || self.soil_stress_threshold > 1.0 {
            return Err(EtCoolError::config("Soil stress threshold must be in (0, 1]"));
        }

        if self.latent_heat_mj_kg <= 0.0 {
            return Err(EtCoolError::config("Latent heat must be positive"));
        }

        if self.heat_transfer_coefficient_w_m2_k <= 0.0
            || self.heat_transfer_coefficient_w_m2_k > 500.0
        {
            return Err(EtCoolError::config(
                "Heat transfer coefficient must be in (0, 500] W/m²/K",
            ));
        }

        Ok(())
    }
}
