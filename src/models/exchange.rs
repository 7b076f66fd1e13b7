use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// A standardized food category whose single serving has a fixed macro profile.
///
/// Variant order is the display order used by every table and report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeGroup {
    Starch,
    Vegetable,
    Fruit,
    MeatLean,
    MeatMedium,
    MeatHigh,
    MilkSkim,
    MilkLowFat,
    MilkWhole,
    Legumes,
    Fats,
    Sugars,
}

impl ExchangeGroup {
    pub const COUNT: usize = 12;

    pub const ALL: [ExchangeGroup; Self::COUNT] = [
        ExchangeGroup::Starch,
        ExchangeGroup::Vegetable,
        ExchangeGroup::Fruit,
        ExchangeGroup::MeatLean,
        ExchangeGroup::MeatMedium,
        ExchangeGroup::MeatHigh,
        ExchangeGroup::MilkSkim,
        ExchangeGroup::MilkLowFat,
        ExchangeGroup::MilkWhole,
        ExchangeGroup::Legumes,
        ExchangeGroup::Fats,
        ExchangeGroup::Sugars,
    ];

    /// Position in display order, usable as an array index.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case identifier (matches the serialized form).
    pub fn key(self) -> &'static str {
        match self {
            ExchangeGroup::Starch => "starch",
            ExchangeGroup::Vegetable => "vegetable",
            ExchangeGroup::Fruit => "fruit",
            ExchangeGroup::MeatLean => "meat_lean",
            ExchangeGroup::MeatMedium => "meat_medium",
            ExchangeGroup::MeatHigh => "meat_high",
            ExchangeGroup::MilkSkim => "milk_skim",
            ExchangeGroup::MilkLowFat => "milk_low_fat",
            ExchangeGroup::MilkWhole => "milk_whole",
            ExchangeGroup::Legumes => "legumes",
            ExchangeGroup::Fats => "fats",
            ExchangeGroup::Sugars => "sugars",
        }
    }

    /// Human-readable name for tables and prompts.
    pub fn label(self) -> &'static str {
        match self {
            ExchangeGroup::Starch => "Starch",
            ExchangeGroup::Vegetable => "Vegetable",
            ExchangeGroup::Fruit => "Fruit",
            ExchangeGroup::MeatLean => "Lean Meat",
            ExchangeGroup::MeatMedium => "Medium-Fat Meat",
            ExchangeGroup::MeatHigh => "High-Fat Meat",
            ExchangeGroup::MilkSkim => "Skim Milk",
            ExchangeGroup::MilkLowFat => "Low-Fat Milk",
            ExchangeGroup::MilkWhole => "Whole Milk",
            ExchangeGroup::Legumes => "Legumes",
            ExchangeGroup::Fats => "Fats",
            ExchangeGroup::Sugars => "Sugars",
        }
    }
}

impl fmt::Display for ExchangeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExchangeGroup {
    type Err = PlanError;

    /// Accepts the key or the label, ignoring case, spaces, and hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ExchangeGroup::ALL
            .into_iter()
            .find(|g| normalize(g.key()) == wanted || normalize(g.label()) == wanted)
            .ok_or_else(|| PlanError::UnknownGroup(s.to_string()))
    }
}

/// An ordered time-of-day bucket that servings are assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Snack1,
    Breakfast,
    Snack2,
    Lunch,
    Snack3,
    Dinner,
    Snack4,
}

impl MealSlot {
    pub const COUNT: usize = 7;

    pub const ALL: [MealSlot; Self::COUNT] = [
        MealSlot::Snack1,
        MealSlot::Breakfast,
        MealSlot::Snack2,
        MealSlot::Lunch,
        MealSlot::Snack3,
        MealSlot::Dinner,
        MealSlot::Snack4,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> &'static str {
        match self {
            MealSlot::Snack1 => "snack1",
            MealSlot::Breakfast => "breakfast",
            MealSlot::Snack2 => "snack2",
            MealSlot::Lunch => "lunch",
            MealSlot::Snack3 => "snack3",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack4 => "snack4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Snack1 => "Early Snack",
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Snack2 => "Morning Snack",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snack3 => "Afternoon Snack",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack4 => "Late Snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealSlot {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        MealSlot::ALL
            .into_iter()
            .find(|m| normalize(m.key()) == wanted || normalize(m.label()) == wanted)
            .ok_or_else(|| PlanError::UnknownSlot(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
