use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use overload_core::{models::DayKey, WeightUnit};

use crate::cli::PlanCommands;

/// Command-line client for Overload weekly workout plans
///
/// Overload keeps a week plan per user on the Overload server: seven days,
/// each either a rest day or a named workout with exercises and sets. This
/// tool lists, shows, creates, edits, activates and deletes those plans and
/// browses the exercise catalog.
#[derive(Parser)]
#[command(version, about, name = "ovl")]
pub struct Args {
    /// API base URL of the Overload server. Defaults to the config file
    /// value, then http://localhost:8000/api
    #[arg(long, global = true, env = "OVERLOAD_SERVER_URL")]
    pub server_url: Option<String>,

    /// Anti-forgery token sent with every request
    #[arg(long, global = true, env = "OVERLOAD_CSRF_TOKEN", hide_env_values = true)]
    pub csrf_token: Option<String>,

    /// Session cookie, e.g. "sessionid=...; csrftoken=..."
    #[arg(long, global = true, env = "OVERLOAD_SESSION", hide_env_values = true)]
    pub session: Option<String>,

    /// Path to the JSON config file. Defaults to
    /// $XDG_CONFIG_HOME/overload/config.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub unit: UnitArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Display unit for set weights. Weights are stored as entered; the unit
/// only labels them.
#[derive(ClapArgs)]
pub struct UnitArgs {
    /// Label weights in kilograms
    #[arg(long, global = true, conflicts_with = "lb")]
    pub kg: bool,

    /// Label weights in pounds (default)
    #[arg(long, global = true)]
    pub lb: bool,
}

impl From<&UnitArgs> for WeightUnit {
    fn from(args: &UnitArgs) -> Self {
        if args.kg {
            WeightUnit::Kg
        } else {
            WeightUnit::Lb
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Manage week plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Show today's workout from the active plan
    #[command(alias = "t")]
    Today {
        /// Show another day instead (sun..sat or full name)
        #[arg(long)]
        day: Option<DayKey>,
    },
    /// Browse the exercise catalog
    #[command(alias = "c")]
    Catalog {
        /// Body part, e.g. "Chest"
        body_part: Option<String>,
        /// Region within the body part, e.g. "Upper Chest"
        region: Option<String>,
        /// Equipment group within the region, e.g. "Dumbbell"
        equipment: Option<String>,
    },
}
