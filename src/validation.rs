//! Physical plausibility checks on model inputs
//!
//! Every check runs before any computation. A rejected input surfaces as
//! [`EtCoolError::InvalidParameter`] naming the offending field.

use crate::models::ModelInputs;
use crate::{EtCoolError, Result};
use std::ops::RangeInclusive;

/// Near-surface air temperatures observed on Earth, with margin
pub const TEMPERATURE_RANGE_C: RangeInclusive<f64> = -90.0..=60.0;
pub const HUMIDITY_RANGE_PCT: RangeInclusive<f64> = 0.0..=100.0;
pub const SOIL_MOISTURE_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Check `inputs` and hand them back unchanged when plausible.
///
/// The vegetation category needs no check here: an unrecognized name is
/// already rejected when parsing [`crate::VegetationType`].
pub fn validate(inputs: &ModelInputs) -> Result<&ModelInputs> {
    check_range("temperature_c", inputs.temperature_c, &TEMPERATURE_RANGE_C, "°C")?;
    check_range(
        "relative_humidity",
        inputs.relative_humidity,
        &HUMIDITY_RANGE_PCT,
        "%",
    )?;
    check_non_negative("wind_speed_ms", inputs.wind_speed_ms)?;

    if let Some(soil_moisture) = inputs.soil_moisture {
        check_range("soil_moisture", soil_moisture, &SOIL_MOISTURE_RANGE, "")?;
    }
    if let Some(radiation) = inputs.solar_radiation_w_m2 {
        check_non_negative("solar_radiation_w_m2", radiation)?;
    }

    Ok(inputs)
}

fn check_finite(parameter: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        tracing::warn!(parameter, value, "rejected non-finite input");
        Err(EtCoolError::invalid_parameter(
            parameter,
            format!("{value} is not a finite number"),
        ))
    }
}

fn check_range(
    parameter: &str,
    value: f64,
    range: &RangeInclusive<f64>,
    unit: &str,
) -> Result<()> {
    check_finite(parameter, value)?;
    if range.contains(&value) {
        return Ok(());
    }
    tracing::warn!(parameter, value, "rejected out-of-range input");
    Err(EtCoolError::invalid_parameter(
        parameter,
        format!(
            "{value}{unit} is outside [{}, {}]{unit}",
            range.start(),
            range.end()
        ),
    ))
}

fn check_non_negative(parameter: &str, value: f64) -> Result<()> {
    check_finite(parameter, value)?;
    if value >= 0.0 {
        return Ok(());
    }
    tracing::warn!(parameter, value, "rejected negative input");
    Err(EtCoolError::invalid_parameter(
        parameter,
        format!("{value} must not be negative"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VegetationType;
    use rstest::rstest;

    fn base() -> ModelInputs {
        ModelInputs::new(30.0, 60.0, 2.0, VegetationType::Grass)
    }

    #[test]
    fn test_valid_inputs_returned_unchanged() {
        let inputs = base().with_soil_moisture(0.4).with_solar_radiation(300.0);
        let validated = validate(&inputs).unwrap();
        assert_eq!(*validated, inputs);
    }

    #[rstest]
    #[case(0.0)]
    #[case(100.0)]
    fn test_humidity_bounds_inclusive(#[case] humidity: f64) {
        let inputs = ModelInputs {
            relative_humidity: humidity,
            ..base()
        };
        assert!(validate(&inputs).is_ok());
    }

    #[rstest]
    #[case::humidity_too_high(ModelInputs { relative_humidity: 150.0, ..base() }, "relative_humidity")]
    #[case::humidity_negative(ModelInputs { relative_humidity: -0.1, ..base() }, "relative_humidity")]
    #[case::negative_wind(ModelInputs { wind_speed_ms: -1.0, ..base() }, "wind_speed_ms")]
    #[case::soil_too_wet(base().with_soil_moisture(1.2), "soil_moisture")]
    #[case::soil_negative(base().with_soil_moisture(-0.1), "soil_moisture")]
    #[case::negative_radiation(base().with_solar_radiation(-5.0), "solar_radiation_w_m2")]
    #[case::too_hot(ModelInputs { temperature_c: 75.0, ..base() }, "temperature_c")]
    #[case::nan_temperature(ModelInputs { temperature_c: f64::NAN, ..base() }, "temperature_c")]
    #[case::infinite_wind(ModelInputs { wind_speed_ms: f64::INFINITY, ..base() }, "wind_speed_ms")]
    fn test_invalid_inputs_rejected(#[case] inputs: ModelInputs, #[case] parameter: &str) {
        let err = validate(&inputs).unwrap_err();
        assert!(matches!(err, EtCoolError::InvalidParameter { .. }));
        assert_eq!(err.parameter(), Some(parameter));
    }

    #[test]
    fn test_missing_soil_moisture_is_fine() {
        assert!(base().soil_moisture.is_none());
        assert!(validate(&base()).is_ok());
    }
}
