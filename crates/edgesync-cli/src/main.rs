mod cli;
mod context;
mod report_io;
mod reports;
mod settings;

use clap::Parser;
use cli::{Cli, Commands};
use context::AppContext;
use edgesync_core::config;
use eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(dir) = &cli.config_dir {
        config::set_config_dir(dir);
    }
    let mut ctx = AppContext::load();

    match &cli.command {
        Commands::Render(args) => reports::run_render(&ctx, args)?,
        Commands::Summary(args) => reports::run_summary(args)?,
        Commands::Merge(args) => reports::run_merge(args)?,
        Commands::Config(args) => settings::run_config(&mut ctx, args)?,
    }

    Ok(())
}

/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
