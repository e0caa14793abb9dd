use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use wireroute::routing::path::{bend_count, path_length};
use wireroute::scene::route_scene;
use wireroute::svg::points_attr;

use crate::cli::{OutputFormat, RoutingArgs};

pub fn run(file: &Path, format: OutputFormat, routing: &RoutingArgs, quiet: bool) -> Result<()> {
    let (scene, options) = super::load_scene(file, routing)?;
    let wires = route_scene(&scene, &options)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&wires)?);
        }
        OutputFormat::Text => {
            for wire in &wires {
                if wire.is_routed() {
                    println!("{}: {}", wire.id.bold(), points_attr(&wire.points));
                } else {
                    println!("{}: {}", wire.id.bold(), "no route".red());
                }
            }

            if !quiet {
                let routed: Vec<_> = wires.iter().filter(|w| w.is_routed()).collect();
                let length: f64 = routed.iter().map(|w| path_length(&w.points)).sum();
                let bends: usize = routed.iter().map(|w| bend_count(&w.points)).sum();
                eprintln!(
                    "{}",
                    format!(
                        "Routed {}/{} wires, total length {length}, {bends} bends",
                        routed.len(),
                        wires.len()
                    )
                    .dimmed()
                );
            }
        }
    }
    Ok(())
}
