use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use wireroute::config::RoutingOverrides;

#[derive(Parser)]
#[command(name = "wireroute")]
#[command(author, version, about)]
#[command(long_about = "Orthogonal wire auto-router for circuit diagrams.\n\n\
    Routes wires between component pins around rectangular obstacles using\n\
    a grid A* search that trades length against the number of bends.\n\n\
    Examples:\n  \
    wireroute route circuit.yaml             Print routed polylines\n  \
    wireroute route circuit.yaml -f json     Print routes as JSON\n  \
    wireroute render circuit.yaml -o out.svg Render the routed circuit\n  \
    wireroute config set routing.grid_size 5 Change a default")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Route every wire of a scene and print the polylines
    Route {
        /// Scene file (YAML or JSON)
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[command(flatten)]
        routing: RoutingArgs,
    },

    /// Route a scene and render it as SVG
    Render {
        /// Scene file (YAML or JSON)
        file: PathBuf,

        /// Output SVG file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        routing: RoutingArgs,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

/// Routing option flags. Anything given here wins over the scene file and the config.
#[derive(Args, Debug, Clone, Default)]
pub struct RoutingArgs {
    /// Grid cell size in pixels
    #[arg(long)]
    pub grid_size: Option<f64>,

    /// Extra cost per bend
    #[arg(long)]
    pub bend_penalty: Option<f64>,

    /// Clearance around components in pixels
    #[arg(long)]
    pub inflate: Option<f64>,

    /// Carve an exit for pins sealed inside a component (--escape-pins=false turns it off)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub escape_pins: Option<bool>,
}

impl RoutingArgs {
    pub fn overrides(&self) -> RoutingOverrides {
        RoutingOverrides {
            grid_size: self.grid_size,
            bend_penalty: self.bend_penalty,
            inflate: self.inflate,
            escape_pins: self.escape_pins,
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. routing.grid_size, routing.bend_penalty, routing.inflate)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Route {
                file,
                format,
                routing,
            }) => crate::commands::route::run(&file, format, &routing, self.quiet),
            Some(Commands::Render {
                file,
                output,
                routing,
            }) => crate::commands::render::run(&file, output.as_deref(), &routing),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::print_version();
                Ok(())
            }
            None => {
                use clap::CommandFactory;
                let mut cmd = Self::command();
                cmd.print_help()?;
                println!();
                Ok(())
            }
        }
    }
}
