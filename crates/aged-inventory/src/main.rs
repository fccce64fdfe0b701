mod bootstrap;
mod pipeline;

use anyhow::Result;
use inventory_core::formatting::summary_lines;
use inventory_core::settings::{ReportConfig, Settings};

fn main() -> Result<()> {
    let settings = match Settings::from_args(std::env::args_os()) {
        Ok(settings) => settings,
        Err(message) => {
            // Wrong argument count is not an error exit.
            println!("{}", message.trim_end());
            return Ok(());
        }
    };

    bootstrap::setup_logging()?;

    tracing::info!("process_file v{} starting", env!("CARGO_PKG_VERSION"));

    let config = ReportConfig::default();
    let today = chrono::Local::now().date_naive();
    tracing::debug!(
        "Input: {}, output: {}, today: {}",
        settings.input.display(),
        config.output_path.display(),
        today
    );

    let summary = pipeline::run(&settings.input, &config, today)?;

    for line in summary_lines(&summary.output, &summary.totals) {
        println!("{}", line);
    }

    Ok(())
}
