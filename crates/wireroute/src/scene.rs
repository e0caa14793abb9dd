//! A canvas of components and the wires to route between them.
//!
//! Scenes are read from YAML (JSON also parses, being a subset):
//!
//! ```yaml
//! width: 800
//! height: 600
//! components:
//!   - { x: 100, y: 100, width: 80, height: 40 }
//! wires:
//!   - { id: w1, from: { x: 180, y: 120 }, to: { x: 400, y: 150 } }
//! options:
//!   grid_size: 10
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::RoutingOverrides;
use crate::routing::types::{Point, Rect, RouteError, RouteOptions};
use crate::routing::{check_obstacles, check_point, route_validated};

const DEFAULT_WIDTH: f64 = 800.0;
const DEFAULT_HEIGHT: f64 = 600.0;

fn default_width() -> f64 {
    DEFAULT_WIDTH
}

fn default_height() -> f64 {
    DEFAULT_HEIGHT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Component footprints; every wire avoids all of them.
    #[serde(default)]
    pub components: Vec<Rect>,
    #[serde(default)]
    pub wires: Vec<WireSpec>,
    /// Routing options stored with the scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<RoutingOverrides>,
}

/// A wire between two connection points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireSpec {
    pub id: String,
    pub from: Point,
    pub to: Point,
}

/// The routed polyline for one wire. `points` is empty when no route exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutedWire {
    pub id: String,
    pub points: Vec<Point>,
}

impl RoutedWire {
    pub fn is_routed(&self) -> bool {
        !self.points.is_empty()
    }
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse scene {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let scene: Scene = serde_yaml::from_str(contents)?;
        Ok(scene)
    }

    /// Layer the scene's own options over `base`.
    pub fn route_options(&self, base: RouteOptions) -> RouteOptions {
        match &self.options {
            Some(overrides) => overrides.apply(base),
            None => base,
        }
    }
}

/// Route every wire of the scene.
///
/// Wires are independent: each one runs its own search against the full component list,
/// in parallel via rayon. The output keeps the scene's wire order. A wire that cannot be
/// routed comes back with no points so the renderer can leave it out.
///
/// # Errors
/// Invalid options, a bad wire endpoint or a bad component; all are checked before any
/// search runs.
pub fn route_scene(scene: &Scene, options: &RouteOptions) -> Result<Vec<RoutedWire>, RouteError> {
    options.validate()?;
    check_obstacles(&scene.components, options)?;
    for wire in &scene.wires {
        check_point("start", wire.from, options.grid_size)?;
        check_point("end", wire.to, options.grid_size)?;
    }

    let wires = scene
        .wires
        .par_iter()
        .map(|wire| {
            let points = route_validated(wire.from, wire.to, &scene.components, options);
            if points.is_none() {
                warn!("No route for wire '{}' from {} to {}", wire.id, wire.from, wire.to);
            }
            RoutedWire {
                id: wire.id.clone(),
                points: points.unwrap_or_default(),
            }
        })
        .collect();
    Ok(wires)
}
