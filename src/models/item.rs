use serde::{Deserialize, Serialize};

use crate::models::{ExchangeGroup, NutritionTotals};

/// A line in the free-form meal builder.
///
/// Unlike the structured planner, each item carries its own per-unit
/// factors, fiber included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,

    pub group: ExchangeGroup,

    pub quantity: f64,

    /// Nutrients contributed by one unit of this item.
    pub per_unit: NutritionTotals,
}

impl LineItem {
    pub fn new(name: impl Into<String>, group: ExchangeGroup, quantity: f64, per_unit: NutritionTotals) -> Self {
        Self {
            name: name.into(),
            group,
            quantity,
            per_unit,
        }
    }

    /// `quantity × per_unit`.
    pub fn totals(&self) -> NutritionTotals {
        self.per_unit.scale(self.quantity)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} x{} ({}): {} kcal, C:{} P:{} F:{} Fi:{}",
            self.name,
            self.quantity,
            self.group.key(),
            self.per_unit.kcal,
            self.per_unit.cho,
            self.per_unit.protein,
            self.per_unit.fat,
            self.per_unit.fiber
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_totals_scale_per_unit() {
        let item = LineItem::new(
            "Oatmeal",
            ExchangeGroup::Starch,
            1.5,
            NutritionTotals {
                cho: 20.0,
                protein: 4.0,
                fat: 2.0,
                fiber: 4.0,
                kcal: 110.0,
            },
        );
        let totals = item.totals();
        assert_eq!(totals.cho, 30.0);
        assert_eq!(totals.fiber, 6.0);
        assert_eq!(totals.kcal, 165.0);
    }

    #[test]
    fn test_item_deserializes_without_fiber() {
        let json = r#"{"name": "Apple", "group": "fruit", "quantity": 1,
            "per_unit": {"cho": 15, "protein": 0, "fat": 0, "kcal": 60}}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.group, ExchangeGroup::Fruit);
        assert_eq!(item.per_unit.fiber, 0.0);
    }
}
