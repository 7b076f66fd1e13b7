use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{ExchangePlan, LineItem};

/// Load a saved plan from a JSON file.
///
/// The blob is restored verbatim; fields missing from older files take
/// their defaults.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<ExchangePlan> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let plan: ExchangePlan = serde_json::from_str(&content)?;
    info!(path = %path.display(), "loaded plan");
    Ok(plan)
}

/// Save a plan to a JSON file.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &ExchangePlan) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "saved plan");
    Ok(())
}

/// Load meal-builder line items from a JSON array.
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<LineItem>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let items: Vec<LineItem> = serde_json::from_str(&content)?;
    info!(path = %path.display(), count = items.len(), "loaded builder items");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExchangeGroup, MealSlot, Target};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_save_and_load_roundtrip() {
        let mut plan = ExchangePlan::default();
        plan.servings.set(ExchangeGroup::Starch, 3.0);
        plan.distribution.set(ExchangeGroup::Starch, MealSlot::Lunch, 1.25);
        plan.target = Target::kcal(1800.0);

        let file = NamedTempFile::new().unwrap();
        save_plan(file.path(), &plan).unwrap();

        let reloaded = load_plan(file.path()).unwrap();
        assert_eq!(reloaded, plan);
    }

    #[test]
    fn test_load_plan_rejects_unknown_group() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"servings": {"dessert": 1}}"#).unwrap();
        assert!(load_plan(file.path()).is_err());
    }

    #[test]
    fn test_load_items() {
        let json = r#"[
            {"name": "Rice", "group": "starch", "quantity": 2,
             "per_unit": {"cho": 15, "protein": 3, "fat": 0, "fiber": 0.5, "kcal": 80}},
            {"name": "Broccoli", "group": "vegetable", "quantity": 1,
             "per_unit": {"cho": 5, "protein": 2, "fat": 0, "fiber": 2.5, "kcal": 25}}
        ]"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load_items(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].group, ExchangeGroup::Vegetable);
        assert_eq!(items[1].per_unit.fiber, 2.5);
    }
}
