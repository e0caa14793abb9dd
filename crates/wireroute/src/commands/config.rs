use anyhow::Result;
use colored::Colorize;

use wireroute::config::Config;

use crate::cli::ConfigCommands;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let options = config.route_options();

    println!("{} {}", "Config file:".bold(), path.display());
    println!();
    println!("{}", "Effective routing options:".bold());
    println!("  grid_size:    {}", options.grid_size);
    println!("  bend_penalty: {}", options.bend_penalty);
    println!("  inflate:      {}", options.inflate);
    println!("  escape_pins:  {}", options.escape_pins);

    if config.routing.as_ref().is_some_and(|r| !r.is_empty()) {
        println!();
        println!("{}", "Stored configuration:".bold());
        print!("{}", config.to_yaml()?);
    }
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!("{} {key} = {value}", "Set".green().bold());
    println!("  {}", path.display().to_string().dimmed());
    Ok(())
}
