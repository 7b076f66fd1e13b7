use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{
    BodyProfile, DistributionMatrix, ExchangeGroup, ExchangePlan, MealSlot, NutritionTotals,
    ServingCounts, Target,
};
use crate::planner::{self, RowStatus, TargetReport};

/// Owns the in-memory plan for a session.
///
/// Mutations touch one field at a time; every query recomputes from the
/// current plan.
pub struct PlanStateManager {
    plan: ExchangePlan,
}

impl PlanStateManager {
    pub fn new(plan: ExchangePlan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &ExchangePlan {
        &self.plan
    }

    pub fn servings(&self) -> &ServingCounts {
        &self.plan.servings
    }

    pub fn distribution(&self) -> &DistributionMatrix {
        &self.plan.distribution
    }

    pub fn target(&self) -> &Target {
        &self.plan.target
    }

    pub fn profile(&self) -> Option<&BodyProfile> {
        self.plan.profile.as_ref()
    }

    /// Set calculator-mode servings for one group.
    pub fn set_serving(&mut self, group: ExchangeGroup, servings: f64) {
        debug!(group = group.key(), servings, "set serving");
        self.plan.servings.set(group, servings);
    }

    /// Assign servings of a group to a slot.
    pub fn set_cell(&mut self, group: ExchangeGroup, slot: MealSlot, servings: f64) {
        debug!(group = group.key(), slot = slot.key(), servings, "set distribution cell");
        self.plan.distribution.set(group, slot, servings);
    }

    pub fn clear_row(&mut self, group: ExchangeGroup) {
        debug!(group = group.key(), "clear distribution row");
        self.plan.distribution.clear_row(group);
    }

    pub fn clear_distribution(&mut self) {
        debug!("clear distribution");
        self.plan.distribution.clear();
    }

    pub fn reset_servings(&mut self) {
        debug!("reset servings");
        self.plan.servings.clear();
    }

    pub fn set_target(&mut self, target: Target) {
        debug!(kcal = target.kcal, "set target");
        self.plan.target = target;
    }

    pub fn reset_target(&mut self) {
        self.set_target(Target::default());
    }

    pub fn set_profile(&mut self, profile: BodyProfile) {
        debug!(weight_kg = profile.weight_kg, height_cm = profile.height_cm, "set profile");
        self.plan.profile = Some(profile);
    }

    /// Totals from calculator-mode servings.
    pub fn totals(&self) -> NutritionTotals {
        planner::compute_totals(&self.plan.servings)
    }

    pub fn group_breakdown(&self) -> BTreeMap<ExchangeGroup, NutritionTotals> {
        planner::compute_group_breakdown(&self.plan.servings)
    }

    /// Totals from the distribution matrix.
    pub fn distribution_totals(&self) -> NutritionTotals {
        planner::compute_distribution_totals(&self.plan.distribution)
    }

    pub fn slot_breakdown(&self) -> BTreeMap<MealSlot, NutritionTotals> {
        planner::compute_slot_breakdown(&self.plan.distribution)
    }

    pub fn remainder(&self, group: ExchangeGroup) -> f64 {
        planner::row_remainder(group, &self.plan.servings, &self.plan.distribution)
    }

    pub fn row_status(&self, group: ExchangeGroup) -> RowStatus {
        planner::row_status(group, &self.plan.servings, &self.plan.distribution)
    }

    pub fn is_fully_distributed(&self) -> bool {
        planner::distribution_complete(&self.plan.servings, &self.plan.distribution)
    }

    pub fn target_report(&self) -> TargetReport {
        planner::compare_to_target(&self.totals(), &self.plan.target)
    }
}

impl Default for PlanStateManager {
    fn default() -> Self {
        Self::new(ExchangePlan::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_reflect_each_mutation() {
        let mut manager = PlanStateManager::default();
        assert!(manager.totals().is_zero());

        manager.set_serving(ExchangeGroup::Starch, 2.0);
        assert_eq!(manager.totals().kcal, 160.0);

        manager.set_serving(ExchangeGroup::Starch, 1.0);
        assert_eq!(manager.totals().kcal, 80.0);
    }

    #[test]
    fn test_remainder_tracks_cells() {
        let mut manager = PlanStateManager::default();
        manager.set_serving(ExchangeGroup::Vegetable, 3.0);
        manager.set_cell(ExchangeGroup::Vegetable, MealSlot::Lunch, 2.0);
        assert_eq!(manager.remainder(ExchangeGroup::Vegetable), 1.0);
        assert!(!manager.is_fully_distributed());

        manager.set_cell(ExchangeGroup::Vegetable, MealSlot::Dinner, 1.0);
        assert_eq!(manager.row_status(ExchangeGroup::Vegetable), RowStatus::Complete);
        assert!(manager.is_fully_distributed());

        manager.clear_row(ExchangeGroup::Vegetable);
        assert_eq!(manager.remainder(ExchangeGroup::Vegetable), 3.0);
    }

    #[test]
    fn test_target_report_uses_calculator_totals() {
        let mut manager = PlanStateManager::default();
        manager.set_serving(ExchangeGroup::MilkWhole, 2.0);
        manager.set_target(Target::kcal(600.0));
        let report = manager.target_report();
        assert_eq!(report.kcal.percent, 50.0);
        assert!(!report.kcal.is_over);

        manager.reset_target();
        assert_eq!(manager.target_report().kcal.percent, 0.0);
    }
}
