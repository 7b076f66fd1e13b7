use crate::models::{NutritionTotals, Target};
use crate::planner::constants::PERCENT_CAP;

/// Progress of a value toward its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetComparison {
    /// Percent of target reached, capped at 100. Not floored at 0.
    pub percent: f64,
    /// Over target, independent of the capped percent.
    pub is_over: bool,
    /// Signed `target - current`.
    pub remaining: f64,
}

/// Compare `current` against `target`. A non-positive target yields 0%.
pub fn target_comparison(current: f64, target: f64) -> TargetComparison {
    let has_target = target > 0.0;
    TargetComparison {
        percent: if has_target {
            (current / target * 100.0).min(PERCENT_CAP)
        } else {
            0.0
        },
        is_over: has_target && current > target,
        remaining: target - current,
    }
}

/// Comparison for calories and each macro that has a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetReport {
    pub kcal: TargetComparison,
    pub cho: Option<TargetComparison>,
    pub protein: Option<TargetComparison>,
    pub fat: Option<TargetComparison>,
}

impl TargetReport {
    /// True if any compared value is over its target.
    pub fn any_over(&self) -> bool {
        self.kcal.is_over
            || [self.cho, self.protein, self.fat]
                .into_iter()
                .flatten()
                .any(|c| c.is_over)
    }
}

pub fn compare_to_target(totals: &NutritionTotals, target: &Target) -> TargetReport {
    TargetReport {
        kcal: target_comparison(totals.kcal, target.kcal),
        cho: target.cho.map(|t| target_comparison(totals.cho, t)),
        protein: target.protein.map(|t| target_comparison(totals.protein, t)),
        fat: target.fat.map(|t| target_comparison(totals.fat, t)),
    }
}
