use crate::cli::ConfigArgs;
use crate::context::AppContext;
use edgesync_core::config;
use eyre::Result;

pub fn run_config(ctx: &mut AppContext, args: &ConfigArgs) -> Result<()> {
    if let Some(toggle) = args.colors {
        ctx.settings.colors = toggle.into();
        let path = config::store_settings(&ctx.settings)?;
        println!(
            "Colors {} (saved to {})",
            if ctx.settings.colors { "enabled" } else { "disabled" },
            path.display()
        );
        return Ok(());
    }

    println!("Configuration directory: {}", config::config_dir()?.display());
    println!("colors = {}", ctx.settings.colors);
    if config::colors_disabled_by_env() {
        println!("(colors currently disabled by environment)");
    }
    Ok(())
}
