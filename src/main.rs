use clap::Parser;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use exchange_diet_rs::cli::{Cli, Command};
use exchange_diet_rs::error::Result;
use exchange_diet_rs::interface::{
    display_builder, display_summary, parse_amount, parse_servings, prompt_action, prompt_group,
    prompt_servings, prompt_slot, prompt_target, prompt_yes_no, EditAction,
};
use exchange_diet_rs::models::{BodyProfile, ExchangeGroup, ExchangePlan, MealSlot, Target};
use exchange_diet_rs::state::{
    load_items, load_plan, save_plan, write_distribution_csv, write_group_csv, PlanStateManager,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();
    let file = cli.file;

    match command {
        Command::Summary => cmd_summary(&file),
        Command::Set { group, servings } => cmd_set(&file, &group, &servings),
        Command::Assign {
            group,
            slot,
            servings,
        } => cmd_assign(&file, &group, &slot, &servings),
        Command::Target {
            kcal,
            cho,
            protein,
            fat,
        } => cmd_target(&file, &kcal, cho, protein, fat),
        Command::Profile {
            weight_kg,
            height_cm,
        } => cmd_profile(&file, &weight_kg, &height_cm),
        Command::Edit => cmd_edit(&file),
        Command::Builder { items } => cmd_builder(&items),
        Command::Export {
            groups,
            distribution,
        } => cmd_export(&file, groups, distribution),
        Command::Reset {
            servings,
            distribution,
            target,
        } => cmd_reset(&file, servings, distribution, target),
    }
}

/// Load the plan, or start a fresh one when the file does not exist yet.
fn open_plan(path: &Path) -> Result<PlanStateManager> {
    if !path.exists() {
        info!(path = %path.display(), "no saved plan, starting a new one");
        return Ok(PlanStateManager::new(ExchangePlan::default()));
    }
    Ok(PlanStateManager::new(load_plan(path)?))
}

fn cmd_summary(path: &Path) -> Result<()> {
    let manager = open_plan(path)?;
    display_summary(&manager);
    Ok(())
}

fn cmd_set(path: &Path, group: &str, servings: &str) -> Result<()> {
    let group: ExchangeGroup = group.parse()?;
    let servings = parse_servings(servings)?;

    let mut manager = open_plan(path)?;
    manager.set_serving(group, servings);
    save_plan(path, manager.plan())?;

    println!("{}: {} servings", group.label(), servings);
    let remainder = manager.remainder(group);
    if remainder < 0.0 {
        warn!(group = group.key(), remainder, "group is over-allocated");
        println!(
            "Warning: {} more servings are assigned to meals than planned.",
            -remainder
        );
    }
    Ok(())
}

fn cmd_assign(path: &Path, group: &str, slot: &str, servings: &str) -> Result<()> {
    let group: ExchangeGroup = group.parse()?;
    let slot: MealSlot = slot.parse()?;
    let servings = parse_servings(servings)?;

    let mut manager = open_plan(path)?;
    manager.set_cell(group, slot, servings);
    save_plan(path, manager.plan())?;

    let remainder = manager.remainder(group);
    println!(
        "{} at {}: {} servings ({} left to assign)",
        group.label(),
        slot.label(),
        servings,
        remainder
    );
    if remainder < 0.0 {
        println!("Warning: {} is over-allocated.", group.label());
    }
    Ok(())
}

fn parse_optional(value: Option<String>) -> Result<Option<f64>> {
    value.as_deref().map(parse_amount).transpose()
}

fn cmd_target(
    path: &Path,
    kcal: &str,
    cho: Option<String>,
    protein: Option<String>,
    fat: Option<String>,
) -> Result<()> {
    let target = Target {
        kcal: parse_amount(kcal)?,
        cho: parse_optional(cho)?,
        protein: parse_optional(protein)?,
        fat: parse_optional(fat)?,
    };

    let mut manager = open_plan(path)?;
    manager.set_target(target);
    save_plan(path, manager.plan())?;

    println!("Target set to {:.0} kcal.", manager.target().kcal);
    Ok(())
}

fn cmd_profile(path: &Path, weight_kg: &str, height_cm: &str) -> Result<()> {
    let profile = BodyProfile {
        weight_kg: parse_amount(weight_kg)?,
        height_cm: parse_amount(height_cm)?,
    };

    let mut manager = open_plan(path)?;
    manager.set_profile(profile);
    save_plan(path, manager.plan())?;

    println!("Profile saved.");
    Ok(())
}

/// Interactive editing loop.
fn cmd_edit(path: &Path) -> Result<()> {
    let mut manager = open_plan(path)?;
    let mut changed = false;

    loop {
        match prompt_action()? {
            EditAction::SetServings => {
                while let Some(group) = prompt_group()? {
                    let current = manager.servings().get(group);
                    let servings =
                        prompt_servings(&format!("Servings of {}", group.label()), current)?;
                    manager.set_serving(group, servings);
                    changed = true;
                }
            }
            EditAction::AssignSlot => {
                if let Some(group) = prompt_group()? {
                    let slot = prompt_slot()?;
                    let current = manager.distribution().get(group, slot);
                    let servings = prompt_servings(
                        &format!("Servings of {} at {}", group.label(), slot.label()),
                        current,
                    )?;
                    manager.set_cell(group, slot, servings);
                    changed = true;
                    println!("{} left to assign.", manager.remainder(group));
                }
            }
            EditAction::SetTarget => {
                let target = prompt_target(manager.target())?;
                manager.set_target(target);
                changed = true;
            }
            EditAction::ShowSummary => display_summary(&manager),
            EditAction::Done => break,
        }
    }

    if changed && prompt_yes_no("Save plan?", true)? {
        save_plan(path, manager.plan())?;
        println!("Plan saved.");
    }

    Ok(())
}

fn cmd_builder(items_path: &Path) -> Result<()> {
    let items = load_items(items_path)?;
    for item in &items {
        tracing::debug!("{}", item.debug_string());
    }
    display_builder(&items);
    Ok(())
}

fn cmd_export(path: &Path, groups: Option<PathBuf>, distribution: Option<PathBuf>) -> Result<()> {
    if groups.is_none() && distribution.is_none() {
        println!("Please specify at least one output:");
        println!("  --groups <csv>        Group summary");
        println!("  --distribution <csv>  Distribution matrix");
        return Ok(());
    }

    let manager = open_plan(path)?;

    if let Some(out) = groups {
        write_group_csv(&manager, &out)?;
        println!("Wrote group summary to {}", out.display());
    }

    if let Some(out) = distribution {
        write_distribution_csv(&manager, &out)?;
        println!("Wrote distribution matrix to {}", out.display());
    }

    Ok(())
}

fn cmd_reset(path: &Path, servings: bool, distribution: bool, target: bool) -> Result<()> {
    if !servings && !distribution && !target {
        println!("Please specify at least one reset option:");
        println!("  --servings      Clear all servings");
        println!("  --distribution  Clear the meal distribution");
        println!("  --target        Remove all targets");
        return Ok(());
    }

    let mut manager = open_plan(path)?;

    if servings {
        manager.reset_servings();
        println!("Cleared all servings.");
    }

    if distribution {
        manager.clear_distribution();
        println!("Cleared the meal distribution.");
    }

    if target {
        manager.reset_target();
        println!("Removed all targets.");
    }

    save_plan(path, manager.plan())?;
    println!("Plan saved.");

    Ok(())
}
