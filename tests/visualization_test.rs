#[macro_use]
extern crate assert_float_eq;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use exchange_diet_rs::models::{BodyProfile, ExchangeGroup, MealSlot, NutritionTotals, Target};
use exchange_diet_rs::planner::{
    bar_ratio, bmi, bmi_gauge_rotation, compare_to_target, donut_arc_spans, gauge_rotation,
    macro_kcal, target_comparison, BmiCategory,
};
use exchange_diet_rs::state::PlanStateManager;

#[test]
fn test_donut_closes_at_360_for_any_triple() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let cho: f64 = rng.gen_range(0.0..2000.0);
        let pro: f64 = rng.gen_range(0.0..2000.0);
        let fat: f64 = rng.gen_range(0.0..2000.0);
        let arcs = donut_arc_spans(cho, pro, fat);

        assert_eq!(arcs.cho.start, 0.0);
        assert_eq!(arcs.fat.end, 360.0);
        assert_eq!(arcs.cho.end, arcs.protein.start);
        assert_eq!(arcs.protein.end, arcs.fat.start);
        assert_eq!(
            arcs.cho.sweep() + arcs.protein.sweep() + arcs.fat.sweep(),
            360.0
        );
    }
}

#[test]
fn test_donut_all_zero_is_full_fat_arc() {
    let arcs = donut_arc_spans(0.0, 0.0, 0.0);
    assert_eq!(arcs.cho.sweep(), 0.0);
    assert_eq!(arcs.protein.sweep(), 0.0);
    assert_eq!(arcs.fat.sweep(), 360.0);
}

#[test]
fn test_donut_from_reference_day() {
    let totals = NutritionTotals {
        cho: 35.0,
        protein: 29.0,
        fat: 9.0,
        fiber: 0.0,
        kcal: 330.0,
    };
    let kcal = macro_kcal(&totals);
    let arcs = donut_arc_spans(kcal.cho, kcal.protein, kcal.fat);
    // 140 + 116 + 81 = 337 kcal from macros
    assert_float_absolute_eq!(arcs.cho.sweep(), 140.0 / 337.0 * 360.0, 1e-9);
    assert_float_absolute_eq!(arcs.protein.sweep(), 116.0 / 337.0 * 360.0, 1e-9);
}

#[test]
fn test_bmi_gauge_domain() {
    assert_eq!(gauge_rotation(12.0, 15.0, 40.0), 0.0);
    assert_eq!(gauge_rotation(15.0, 15.0, 40.0), 0.0);
    assert_eq!(gauge_rotation(27.5, 15.0, 40.0), 90.0);
    assert_eq!(gauge_rotation(40.0, 15.0, 40.0), 180.0);
    assert_eq!(gauge_rotation(41.0, 15.0, 40.0), 180.0);
}

#[test]
fn test_gauge_is_monotonic() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut values: Vec<f64> = (0..300).map(|_| rng.gen_range(5.0..50.0)).collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let rotations: Vec<f64> = values.iter().map(|v| gauge_rotation(*v, 15.0, 40.0)).collect();
    for pair in rotations.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
    assert!(rotations.iter().all(|r| (0.0..=180.0).contains(r)));
}

#[test]
fn test_bmi_profile_on_gauge() {
    let profile = BodyProfile {
        weight_kg: 64.8,
        height_cm: 180.0,
    };
    let value = bmi(&profile);
    assert_float_absolute_eq!(value, 20.0, 1e-9);
    assert_float_absolute_eq!(bmi_gauge_rotation(value), 36.0, 1e-6);
    assert_eq!(BmiCategory::from_bmi(value), BmiCategory::Normal);
}

#[test]
fn test_target_comparison_examples() {
    let under = target_comparison(50.0, 100.0);
    assert_eq!(under.percent, 50.0);
    assert!(!under.is_over);

    let over = target_comparison(150.0, 100.0);
    assert_eq!(over.percent, 100.0);
    assert!(over.is_over);
}

#[test]
fn test_bar_ratio_zero_max() {
    assert_eq!(bar_ratio(10.0, 0.0), 0.0);
    assert_eq!(bar_ratio(0.0, 0.0), 0.0);
    assert_eq!(bar_ratio(30.0, 120.0), 0.25);
}

#[test]
fn test_session_flow_recomputes_after_each_edit() {
    let mut manager = PlanStateManager::default();
    manager.set_target(Target {
        kcal: 1500.0,
        protein: Some(60.0),
        ..Default::default()
    });

    manager.set_serving(ExchangeGroup::Starch, 6.0);
    manager.set_serving(ExchangeGroup::MeatMedium, 4.0);
    manager.set_serving(ExchangeGroup::MilkLowFat, 2.0);
    manager.set_serving(ExchangeGroup::Fruit, 3.0);

    let totals = manager.totals();
    assert_eq!(totals.kcal, 6.0 * 80.0 + 4.0 * 75.0 + 2.0 * 120.0 + 3.0 * 60.0);

    let report = compare_to_target(&totals, manager.target());
    assert_eq!(report, manager.target_report());
    assert_eq!(report.kcal.percent, 80.0);
    assert!(!report.kcal.is_over);
    // 18 + 28 + 16 = 62 g protein
    assert!(report.protein.unwrap().is_over);

    manager.set_cell(ExchangeGroup::Starch, MealSlot::Breakfast, 2.0);
    manager.set_cell(ExchangeGroup::Starch, MealSlot::Lunch, 2.0);
    manager.set_cell(ExchangeGroup::Starch, MealSlot::Dinner, 2.5);
    assert_eq!(manager.remainder(ExchangeGroup::Starch), -0.5);

    manager.set_cell(ExchangeGroup::Starch, MealSlot::Dinner, 2.0);
    assert_eq!(manager.remainder(ExchangeGroup::Starch), 0.0);
    assert!(!manager.is_fully_distributed());
}
