pub mod completion;
pub mod config;
pub mod render;
pub mod route;

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use log::debug;

use wireroute::config::Config;
use wireroute::routing::types::RouteOptions;
use wireroute::scene::Scene;

use crate::cli::RoutingArgs;

pub fn print_version() {
    println!(
        "{} {}",
        "wireroute".bold(),
        env!("CARGO_PKG_VERSION").dimmed()
    );
}

/// Load a scene and resolve its route options: defaults, then the user config, then
/// the scene's own options, then command-line flags.
pub fn load_scene(file: &Path, routing: &RoutingArgs) -> Result<(Scene, RouteOptions)> {
    if !file.exists() {
        anyhow::bail!("File not found: {}", file.display());
    }
    let scene = Scene::load(file)?;
    let config = Config::load_or_default();
    let options = routing
        .overrides()
        .apply(scene.route_options(config.route_options()));
    debug!(
        "scene {}: {} components, {} wires, options {:?}",
        file.display(),
        scene.components.len(),
        scene.wires.len(),
        options
    );
    Ok((scene, options))
}
