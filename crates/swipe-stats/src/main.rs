mod bootstrap;

use anyhow::{Context, Result};
use stats_core::formatting::print_report;
use stats_core::settings::Settings;
use stats_data::analysis::analyze_export;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::debug!(
        "swipe-stats v{} reading {}",
        env!("CARGO_PKG_VERSION"),
        settings.data_file.display()
    );

    let report = analyze_export(&settings.data_file)
        .with_context(|| format!("analyzing {}", settings.data_file.display()))?;

    print_report(&report.totals, &report.rates)?;

    Ok(())
}
