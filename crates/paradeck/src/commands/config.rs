use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();

    println!("{} {}", "Config file:".bold(), path.display());
    println!();
    println!("{}", "defaults:".bold());
    print_value("fullscreen", &config.fullscreen().to_string());
    print_value("reduced_motion", &config.reduced_motion().to_string());
    print_value("speed", config.speed().label());

    if !path.exists() {
        println!();
        println!(
            "{}",
            "No config file yet; showing built-in defaults.".dimmed()
        );
    }
    Ok(())
}

fn print_value(key: &str, value: &str) {
    println!("  {:<16} {}", key.cyan(), value);
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    tracing::debug!(key, value, path = %path.display(), "config updated");
    println!("{} {} = {}", "Set".green().bold(), key, value);
    Ok(())
}
