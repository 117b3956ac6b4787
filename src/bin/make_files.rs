use advent_harness::config::toml_config::DEFAULT_CONFIG_FILE;
use advent_harness::utils::{logger, validation::Validate};
use advent_harness::HarnessConfig;
use anyhow::Context;

/// Pre-creates `day01.rs` ... `day25.rs` using the settings in `aoc.toml`.
fn main() -> anyhow::Result<()> {
    let config = HarnessConfig::load(DEFAULT_CONFIG_FILE)
        .with_context(|| format!("failed to load {}", DEFAULT_CONFIG_FILE))?;

    logger::init_cli_logger(false, config.log_level());

    config.validate().context("invalid [scaffold] settings")?;
    let report = config
        .scaffold()
        .context("failed to prepare scaffold")?
        .generate()
        .context("failed to create solution files")?;

    for entry in &report.entries {
        println!("{}", entry);
    }

    tracing::info!(
        "✅ {} files created, {} already existed",
        report.created().len(),
        report.skipped().len()
    );
    Ok(())
}
