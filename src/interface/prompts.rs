use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{ExchangeGroup, MealSlot, Target};
use crate::planner::constants::{FUZZY_MATCH_THRESHOLD, SERVING_STEP};

/// Check a user-entered quantity: finite, non-negative, on the serving step.
pub fn parse_servings(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a number", input.trim())))?;

    if !value.is_finite() || value < 0.0 {
        return Err(PlanError::InvalidInput(
            "Servings must be a non-negative number".to_string(),
        ));
    }

    if (value / SERVING_STEP).fract() != 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "Servings must be a multiple of {}",
            SERVING_STEP
        )));
    }

    Ok(value)
}

/// Check a user-entered non-negative amount (kcal, grams, kg, cm).
pub fn parse_amount(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a number", input.trim())))?;

    if !value.is_finite() || value < 0.0 {
        return Err(PlanError::InvalidInput(
            "Value must be a non-negative number".to_string(),
        ));
    }

    Ok(value)
}

/// Groups whose key or label resemble `input`, best first.
pub fn fuzzy_groups(input: &str) -> Vec<(ExchangeGroup, f64)> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(ExchangeGroup, f64)> = ExchangeGroup::ALL
        .into_iter()
        .map(|g| {
            let score = jaro_winkler(&g.key().to_lowercase(), &needle)
                .max(jaro_winkler(&g.label().to_lowercase(), &needle));
            (g, score)
        })
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Prompt for an exchange group by name, with fuzzy matching.
///
/// Returns `None` when the user enters nothing.
pub fn prompt_group() -> Result<Option<ExchangeGroup>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Exchange group (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if let Ok(group) = input.parse::<ExchangeGroup>() {
            return Ok(Some(group));
        }

        let candidates = fuzzy_groups(input);

        if candidates.is_empty() {
            println!("No exchange group matches '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let group = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", group.label()))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(group));
            }
            continue;
        }

        let options: Vec<ExchangeGroup> = candidates.iter().take(5).map(|(g, _)| *g).collect();
        let mut labels: Vec<&str> = options.iter().map(|g| g.label()).collect();
        labels.push("None of these");

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&labels)
            .default(0)
            .interact()?;

        if selection < options.len() {
            return Ok(Some(options[selection]));
        }
    }
}

/// Prompt for a meal slot from the fixed list.
pub fn prompt_slot() -> Result<MealSlot> {
    let labels: Vec<&str> = MealSlot::ALL.iter().map(|s| s.label()).collect();
    let selection = Select::new()
        .with_prompt("Meal slot")
        .items(&labels)
        .default(MealSlot::Breakfast.index())
        .interact()?;

    Ok(MealSlot::ALL[selection])
}

/// Prompt for a serving count, defaulting to `current`.
pub fn prompt_servings(prompt: &str, current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(format!("{}", current))
        .validate_with(|s: &String| parse_servings(s).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    parse_servings(&input)
}

fn prompt_optional_grams(prompt: &str, current: Option<f64>) -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .default(current.map(|v| v.to_string()).unwrap_or_default())
        .validate_with(|s: &String| {
            if s.trim().is_empty() {
                return Ok(());
            }
            parse_amount(s).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_amount(&input).map(Some)
}

/// Prompt for calorie and optional macro targets.
pub fn prompt_target(current: &Target) -> Result<Target> {
    let kcal: String = Input::new()
        .with_prompt("Daily calorie target (0 for none)")
        .default(format!("{}", current.kcal))
        .validate_with(|s: &String| parse_amount(s).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    Ok(Target {
        kcal: parse_amount(&kcal)?,
        cho: prompt_optional_grams("Carbohydrate target in g (blank for none)", current.cho)?,
        protein: prompt_optional_grams("Protein target in g (blank for none)", current.protein)?,
        fat: prompt_optional_grams("Fat target in g (blank for none)", current.fat)?,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Actions offered by the interactive editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    SetServings,
    AssignSlot,
    SetTarget,
    ShowSummary,
    Done,
}

impl EditAction {
    const ALL: [EditAction; 5] = [
        EditAction::SetServings,
        EditAction::AssignSlot,
        EditAction::SetTarget,
        EditAction::ShowSummary,
        EditAction::Done,
    ];

    fn label(self) -> &'static str {
        match self {
            EditAction::SetServings => "Set servings for a group",
            EditAction::AssignSlot => "Assign servings to a meal slot",
            EditAction::SetTarget => "Set targets",
            EditAction::ShowSummary => "Show summary",
            EditAction::Done => "Done",
        }
    }
}

pub fn prompt_action() -> Result<EditAction> {
    let labels: Vec<&str> = EditAction::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(EditAction::ALL[selection])
}
