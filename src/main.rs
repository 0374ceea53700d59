use anyhow::{Context, Result};
use etcool::{CoolingModel, EtCoolConfig, EtCoolError, telemetry};

/// Keep the typed error as the source and put the user-facing text on top
fn with_user_message(error: EtCoolError) -> anyhow::Error {
    let message = error.user_message();
    anyhow::Error::new(error).context(message)
}

fn main() -> Result<()> {
    let config = EtCoolConfig::load()?;
    telemetry::init(&config.logging)?;

    tracing::info!(
        version = etcool::VERSION,
        config = %EtCoolConfig::resolve_config_path().display(),
        "starting etcool"
    );

    let inputs = config.scenario.to_inputs().map_err(with_user_message)?;
    let model = CoolingModel::new(&config.model).map_err(with_user_message)?;

    let result = model
        .run(&inputs)
        .inspect_err(|e| tracing::error!(error = %e, "evaluation failed"))
        .map_err(with_user_message)?;

    tracing::info!(
        cooling = %result.format_cooling(),
        evapotranspiration = %result.format_evapotranspiration(),
        vegetation = %inputs.vegetation,
        "evaluation complete"
    );

    let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
    println!("{json}");

    Ok(())
}
