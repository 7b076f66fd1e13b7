use crate::models::NutritionTotals;
use crate::planner::constants::*;

/// Denominator with 0 replaced by 1.
///
/// Shared by percentages, donut arcs, and gauges so an empty plan renders
/// as 0 everywhere instead of NaN.
#[inline]
pub fn guarded_denominator(denominator: f64) -> f64 {
    if denominator == 0.0 { 1.0 } else { denominator }
}

/// `value / max`, or 0 when `max` is 0.
#[inline]
pub fn ratio_or_zero(value: f64, max: f64) -> f64 {
    if max == 0.0 { 0.0 } else { value / max }
}

/// `part` as a percentage of `total`. A zero total yields 0%.
pub fn percentage_of(part: f64, total: f64) -> f64 {
    (part / guarded_denominator(total)) * 100.0
}

/// Calorie contribution of each macro.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroKcal {
    pub cho: f64,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl MacroKcal {
    /// Energy from carbohydrate, protein, and fat (fiber excluded).
    pub fn energy_sum(&self) -> f64 {
        self.cho + self.protein + self.fat
    }
}

/// Convert gram totals to kcal with the fixed energy factors.
pub fn macro_kcal(totals: &NutritionTotals) -> MacroKcal {
    MacroKcal {
        cho: totals.cho * CHO_KCAL_PER_GRAM,
        protein: totals.protein * PROTEIN_KCAL_PER_GRAM,
        fat: totals.fat * FAT_KCAL_PER_GRAM,
        fiber: totals.fiber * FIBER_KCAL_PER_GRAM,
    }
}

/// Macro calories and their share of total calories.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroComposition {
    pub kcal: MacroKcal,
    /// Calorie total the percentages are measured against.
    pub total_kcal: f64,
    pub cho_pct: f64,
    pub protein_pct: f64,
    pub fat_pct: f64,
    pub fiber_pct: f64,
}

/// Composition of `totals` against its own `kcal` field.
///
/// Exchange kcal values are standardized, so the percentages need not sum
/// to exactly 100.
pub fn compose(totals: &NutritionTotals) -> MacroComposition {
    let kcal = macro_kcal(totals);
    let total = totals.kcal;
    MacroComposition {
        kcal,
        total_kcal: total,
        cho_pct: percentage_of(kcal.cho, total),
        protein_pct: percentage_of(kcal.protein, total),
        fat_pct: percentage_of(kcal.fat, total),
        fiber_pct: percentage_of(kcal.fiber, total),
    }
}
