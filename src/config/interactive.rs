use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input};

use super::{Config, LoggingConfig};

#[inline]
pub fn run_interactive_config() -> Result<()> {
    println!(
        "{}",
        style("🔧 Example MCP Server Configuration Setup")
            .bold()
            .cyan()
    );
    println!();

    let mut config = load_existing_config()?;

    println!("{}", style("Logging Configuration").bold().yellow());
    println!("Set the tracing filter used when RUST_LOG is not set.");
    println!();

    configure_logging(&mut config.logging)?;

    println!();
    if Confirm::new()
        .with_prompt("Save configuration?")
        .default(true)
        .interact()?
    {
        config.save().context("Failed to save configuration")?;
        println!("{}", style("✓ Configuration saved successfully!").green());

        let config_path = Config::config_file_path().context("Failed to get config file path")?;
        println!(
            "Configuration saved to: {}",
            style(config_path.display()).cyan()
        );
    } else {
        println!("Configuration not saved.");
    }

    Ok(())
}

#[inline]
pub fn show_config() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    println!("{}", style("📋 Current Configuration").bold().cyan());
    println!();

    println!("{}", style("Logging Settings:").bold().yellow());
    println!("  Filter: {}", style(&config.logging.filter).cyan());

    let config_path = Config::config_file_path().context("Failed to get config file path")?;
    println!();
    println!("Config file: {}", style(config_path.display()).dim());

    Ok(())
}

fn load_existing_config() -> Result<Config> {
    let config = Config::load().context("Failed to load existing configuration")?;
    Ok(config)
}

fn configure_logging(logging: &mut LoggingConfig) -> Result<()> {
    let filter: String = Input::new()
        .with_prompt("Tracing filter (e.g. 'info' or 'example_mcp_server=debug')")
        .default(logging.filter.clone())
        .interact_text()?;

    logging
        .set_filter(filter)
        .context("Invalid tracing filter")?;

    Ok(())
}
