use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::routing::types::RouteOptions;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "wireroute";

/// Valid keys for `Config::set`.
pub const KEYS: &[&str] = &[
    "routing.grid_size",
    "routing.bend_penalty",
    "routing.inflate",
    "routing.escape_pins",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing: Option<RoutingOverrides>,
}

/// A partial set of route options. Unset fields fall through to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bend_penalty: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escape_pins: Option<bool>,
}

impl RoutingOverrides {
    /// Layer these overrides on top of `base`.
    pub fn apply(&self, base: RouteOptions) -> RouteOptions {
        RouteOptions {
            grid_size: self.grid_size.unwrap_or(base.grid_size),
            bend_penalty: self.bend_penalty.unwrap_or(base.bend_penalty),
            inflate: self.inflate.unwrap_or(base.inflate),
            escape_pins: self.escape_pins.unwrap_or(base.escape_pins),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `wireroute config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("using default config: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = format!("# wireroute configuration\n{}", self.to_yaml()?);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Route options with this config layered over the built-in defaults.
    pub fn route_options(&self) -> RouteOptions {
        match &self.routing {
            Some(routing) => routing.apply(RouteOptions::default()),
            None => RouteOptions::default(),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let routing = self.routing.get_or_insert_with(RoutingOverrides::default);
        match key {
            "routing.grid_size" => {
                let v = parse_number(key, value)?;
                if v <= 0.0 {
                    anyhow::bail!("Invalid grid_size: {value}. Must be greater than zero.");
                }
                routing.grid_size = Some(v);
            }
            "routing.bend_penalty" => {
                let v = parse_number(key, value)?;
                if v < 0.0 {
                    anyhow::bail!("Invalid bend_penalty: {value}. Must be zero or greater.");
                }
                routing.bend_penalty = Some(v);
            }
            "routing.inflate" => {
                let v = parse_number(key, value)?;
                if v < 0.0 {
                    anyhow::bail!("Invalid inflate: {value}. Must be zero or greater.");
                }
                routing.inflate = Some(v);
            }
            "routing.escape_pins" => {
                let v = match value {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => anyhow::bail!("Invalid escape_pins: {value}. Must be 'true' or 'false'."),
                };
                routing.escape_pins = Some(v);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: {}",
                KEYS.join(", ")
            ),
        }
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64> {
    let v: f64 = value
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid value for {key}: {value}. Must be a number."))?;
    if !v.is_finite() {
        anyhow::bail!("Invalid value for {key}: {value}. Must be a finite number.");
    }
    Ok(v)
}
