use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use wireroute::scene::route_scene;
use wireroute::svg::render_svg;

use crate::cli::RoutingArgs;

pub fn run(file: &Path, output: Option<&Path>, routing: &RoutingArgs) -> Result<()> {
    let (scene, options) = super::load_scene(file, routing)?;
    let wires = route_scene(&scene, &options)?;
    let svg = render_svg(&scene, &wires);

    match output {
        Some(path) => {
            std::fs::write(path, svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            let missing = wires.iter().filter(|w| !w.is_routed()).count();
            info!("wrote {} ({} wires, {missing} unrouted)", path.display(), wires.len());
            if missing > 0 {
                eprintln!(
                    "{} {missing} wire(s) could not be routed and were left out",
                    "warning:".yellow().bold()
                );
            }
            eprintln!("  Saved {}", path.display().to_string().green());
        }
        None => print!("{svg}"),
    }
    Ok(())
}
