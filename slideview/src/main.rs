use anyhow::{Context, Result};
use clap::Parser;
use slideview::app;
use slideview::args::Args;
use slideview::config::AppConfig;
use tracing::info;

fn init_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("slideview={},slide_display={},slide_input=info", log_level, log_level).into()
            }),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging first
    init_logging(args.verbose)?;

    info!("Starting slideview {}", env!("CARGO_PKG_VERSION"));

    if args.list_monitors {
        app::list_monitors();
        return Ok(());
    }

    let mut config = AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    config.apply_args(&args);

    app::run(config)
}
