use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// ExchangeDiet — plan exchange servings, spread them over meals, and track targets.
#[derive(Parser, Debug)]
#[command(name = "exchange_diet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the plan JSON file.
    #[arg(short, long, default_value = "exchange_plan.json")]
    pub file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show totals, distribution, composition, and target progress.
    Summary,

    /// Set calculator servings for an exchange group.
    Set {
        /// Exchange group (e.g. starch, meat_lean, "Low-Fat Milk").
        group: String,

        /// Servings, in steps of 0.25.
        servings: String,
    },

    /// Assign servings of a group to a meal slot.
    Assign {
        group: String,

        /// Meal slot (snack1, breakfast, snack2, lunch, snack3, dinner, snack4).
        slot: String,

        servings: String,
    },

    /// Set the calorie target and optional macro targets in grams.
    Target {
        kcal: String,

        #[arg(long)]
        cho: Option<String>,

        #[arg(long)]
        protein: Option<String>,

        #[arg(long)]
        fat: Option<String>,
    },

    /// Set body weight and height for the BMI gauge.
    Profile { weight_kg: String, height_cm: String },

    /// Edit the plan interactively.
    Edit,

    /// Summarize a free-form meal from a JSON list of items.
    Builder {
        /// Path to the items JSON file.
        items: PathBuf,
    },

    /// Export the plan as CSV.
    Export {
        /// Group summary output path.
        #[arg(long)]
        groups: Option<PathBuf>,

        /// Distribution matrix output path.
        #[arg(long)]
        distribution: Option<PathBuf>,
    },

    /// Reset parts of the plan.
    Reset {
        /// Clear all servings.
        #[arg(long)]
        servings: bool,

        /// Clear the distribution matrix.
        #[arg(long)]
        distribution: bool,

        /// Remove all targets.
        #[arg(long)]
        target: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Summary
    }
}
