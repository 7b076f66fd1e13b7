use crate::models::{ExchangeGroup, NutrientFactor};

/// Per-serving factors for an exchange group.
///
/// The match is exhaustive, so adding a group without a factor is a
/// compile error rather than a lookup failure.
pub fn nutrient_factor(group: ExchangeGroup) -> NutrientFactor {
    match group {
        ExchangeGroup::Starch => NutrientFactor::new(15.0, 3.0, 0.0, 80.0),
        ExchangeGroup::Vegetable => NutrientFactor::new(5.0, 2.0, 0.0, 25.0),
        ExchangeGroup::Fruit => NutrientFactor::new(15.0, 0.0, 0.0, 60.0),
        ExchangeGroup::MeatLean => NutrientFactor::new(0.0, 7.0, 3.0, 45.0),
        ExchangeGroup::MeatMedium => NutrientFactor::new(0.0, 7.0, 5.0, 75.0),
        ExchangeGroup::MeatHigh => NutrientFactor::new(0.0, 7.0, 8.0, 100.0),
        ExchangeGroup::MilkSkim => NutrientFactor::new(12.0, 8.0, 0.0, 90.0),
        ExchangeGroup::MilkLowFat => NutrientFactor::new(12.0, 8.0, 5.0, 120.0),
        ExchangeGroup::MilkWhole => NutrientFactor::new(12.0, 8.0, 8.0, 150.0),
        ExchangeGroup::Legumes => NutrientFactor::new(15.0, 7.0, 1.0, 125.0),
        ExchangeGroup::Fats => NutrientFactor::new(0.0, 0.0, 5.0, 45.0),
        ExchangeGroup::Sugars => NutrientFactor::new(15.0, 0.0, 0.0, 60.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kcal_is_table_value_not_atwater() {
        // 0*4 + 7*4 + 3*9 = 55, table says 45
        let lean = nutrient_factor(ExchangeGroup::MeatLean);
        assert_eq!(lean.kcal, 45.0);
    }

    #[test]
    fn test_every_group_has_non_negative_factors() {
        for group in ExchangeGroup::ALL {
            let f = nutrient_factor(group);
            assert!(f.cho >= 0.0 && f.protein >= 0.0 && f.fat >= 0.0);
            assert!(f.kcal > 0.0, "{} has no kcal", group.key());
        }
    }
}
