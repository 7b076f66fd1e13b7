use std::collections::BTreeMap;

use crate::models::{
    DistributionMatrix, ExchangeGroup, LineItem, MealSlot, NutritionTotals, ServingCounts,
};
use crate::planner::factors::nutrient_factor;

/// Contribution of `servings` of one group. Zero when servings are not positive.
fn group_contribution(group: ExchangeGroup, servings: f64) -> NutritionTotals {
    if servings > 0.0 {
        nutrient_factor(group).as_totals().scale(servings)
    } else {
        NutritionTotals::zero()
    }
}

/// Aggregate totals for calculator-mode servings.
///
/// Groups are summed in display order so repeated calls are bit-identical.
pub fn compute_totals(servings: &ServingCounts) -> NutritionTotals {
    let mut totals = NutritionTotals::zero();
    for group in ExchangeGroup::ALL {
        totals += group_contribution(group, servings.get(group));
    }
    totals
}

/// Totals per group, one entry for every group.
///
/// Each entry is exactly `servings[g] × factor[g]`.
pub fn compute_group_breakdown(servings: &ServingCounts) -> BTreeMap<ExchangeGroup, NutritionTotals> {
    ExchangeGroup::ALL
        .into_iter()
        .map(|g| (g, group_contribution(g, servings.get(g))))
        .collect()
}

/// Totals over every cell of the distribution matrix.
///
/// Tracked independently of `compute_totals`: the matrix may lag behind
/// or exceed the calculator servings while the user edits.
pub fn compute_distribution_totals(distribution: &DistributionMatrix) -> NutritionTotals {
    let mut totals = NutritionTotals::zero();
    for (group, _, servings) in distribution.cells() {
        totals += group_contribution(group, servings);
    }
    totals
}

/// Servings of `group` not yet assigned to a slot.
///
/// Negative means over-allocated. No epsilon: exactly 0 is complete.
pub fn row_remainder(
    group: ExchangeGroup,
    servings: &ServingCounts,
    distribution: &DistributionMatrix,
) -> f64 {
    servings.get(group) - distribution.row_sum(group)
}

/// Per-group servings summed across all slots.
pub fn column_servings(distribution: &DistributionMatrix) -> ServingCounts {
    ExchangeGroup::ALL
        .into_iter()
        .map(|g| (g, distribution.row_sum(g)))
        .collect()
}

/// Nutrition assigned to one meal slot.
pub fn slot_totals(distribution: &DistributionMatrix, slot: MealSlot) -> NutritionTotals {
    let mut totals = NutritionTotals::zero();
    for group in ExchangeGroup::ALL {
        totals += group_contribution(group, distribution.get(group, slot));
    }
    totals
}

/// Nutrition per meal slot, one entry for every slot.
pub fn compute_slot_breakdown(distribution: &DistributionMatrix) -> BTreeMap<MealSlot, NutritionTotals> {
    MealSlot::ALL
        .into_iter()
        .map(|s| (s, slot_totals(distribution, s)))
        .collect()
}

/// Allocation state of one group's row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowStatus {
    /// No servings planned and nothing assigned.
    Unplanned,
    /// Every serving assigned to a slot.
    Complete,
    /// Servings still waiting for a slot.
    Pending(f64),
    /// More assigned than planned.
    OverAllocated(f64),
}

impl RowStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RowStatus::Unplanned => "-",
            RowStatus::Complete => "complete",
            RowStatus::Pending(_) => "pending",
            RowStatus::OverAllocated(_) => "over",
        }
    }
}

/// Classify a group's remainder.
pub fn row_status(
    group: ExchangeGroup,
    servings: &ServingCounts,
    distribution: &DistributionMatrix,
) -> RowStatus {
    let remainder = row_remainder(group, servings, distribution);
    if remainder < 0.0 {
        RowStatus::OverAllocated(remainder)
    } else if remainder > 0.0 {
        RowStatus::Pending(remainder)
    } else if servings.get(group) > 0.0 {
        RowStatus::Complete
    } else {
        RowStatus::Unplanned
    }
}

/// True when every planned serving sits in exactly one slot.
pub fn distribution_complete(servings: &ServingCounts, distribution: &DistributionMatrix) -> bool {
    ExchangeGroup::ALL.into_iter().all(|g| {
        matches!(
            row_status(g, servings, distribution),
            RowStatus::Complete | RowStatus::Unplanned
        )
    })
}

/// Totals for free-form builder items, using each item's own factors.
pub fn compute_item_totals(items: &[LineItem]) -> NutritionTotals {
    let mut totals = NutritionTotals::zero();
    for item in items {
        totals += item.totals();
    }
    totals
}

/// Builder totals grouped by exchange group. Only groups with items appear.
pub fn compute_item_group_breakdown(items: &[LineItem]) -> BTreeMap<ExchangeGroup, NutritionTotals> {
    let mut breakdown: BTreeMap<ExchangeGroup, NutritionTotals> = BTreeMap::new();
    for item in items {
        *breakdown.entry(item.group).or_default() += item.totals();
    }
    breakdown
}
