//! Config command implementations

use crate::config::Settings;
use anyhow::{Context, Result};

/// Print the effective settings and where they came from
pub fn show(settings: &Settings) -> Result<()> {
    match Settings::find_config_file() {
        Some(path) => println!("# Loaded from {}", path.display()),
        None => println!("# No config file found, showing defaults"),
    }

    let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
    print!("{}", contents);
    Ok(())
}

/// Print an example config file
pub fn example() -> Result<()> {
    print!("{}", Settings::example_config());
    Ok(())
}
