use crate::models::{BodyProfile, ExchangeGroup, LineItem, MealSlot, NutritionTotals};
use crate::planner::{
    self, bar_cells, bar_heights, bar_ratio, compose, donut_arc_spans, macro_kcal, BmiCategory,
    RowStatus, TargetComparison, BAR_WIDTH, BMI_GAUGE_MAX, BMI_GAUGE_MIN,
};
use crate::state::PlanStateManager;

/// Text progress bar, `width` cells wide.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = bar_cells(ratio, width);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

/// Format a quantity without trailing zeros (e.g. `2`, `1.25`).
fn fmt_servings(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Display the per-group summary table with calculator totals.
pub fn display_group_breakdown(manager: &PlanStateManager) {
    println!();
    println!("=== Exchange Groups ===");
    println!();
    println!(
        "{:<16} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Group", "Servings", "CHO g", "PRO g", "FAT g", "kcal"
    );

    let breakdown = manager.group_breakdown();
    for (group, totals) in &breakdown {
        let servings = manager.servings().get(*group);
        if servings <= 0.0 {
            continue;
        }
        println!(
            "{:<16} {:>8} {:>8.1} {:>8.1} {:>8.1} {:>8.0}",
            group.label(),
            fmt_servings(servings),
            totals.cho,
            totals.protein,
            totals.fat,
            totals.kcal
        );
    }

    let totals = manager.totals();
    println!(
        "{:<16} {:>8} {:>8.1} {:>8.1} {:>8.1} {:>8.0}",
        "Total",
        fmt_servings(manager.servings().total()),
        totals.cho,
        totals.protein,
        totals.fat,
        totals.kcal
    );
}

/// One line per group that has servings planned or assigned, with the
/// row's cells, remainder and status.
fn distribution_rows(manager: &PlanStateManager) -> Vec<String> {
    let mut rows = Vec::new();
    for group in ExchangeGroup::ALL {
        let status = manager.row_status(group);
        if status == RowStatus::Unplanned {
            continue;
        }

        let mut line = format!("{:<16}", group.label());
        for value in manager.distribution().row(group) {
            line.push_str(&format!(" {:>9}", fmt_servings(*value)));
        }
        let marker = match status {
            RowStatus::Complete => "OK",
            RowStatus::Pending(_) => "..",
            RowStatus::OverAllocated(_) => "!!",
            RowStatus::Unplanned => "",
        };
        line.push_str(&format!(
            " {:>9}  {} {}",
            fmt_servings(manager.remainder(group)),
            marker,
            status.label()
        ));
        rows.push(line);
    }
    rows
}

/// Display the distribution matrix with each row's remainder and status.
pub fn display_distribution(manager: &PlanStateManager) {
    println!();
    println!("=== Meal Distribution ===");
    println!();

    let mut header = format!("{:<16}", "Group");
    for slot in MealSlot::ALL {
        header.push_str(&format!(" {:>9}", slot.key()));
    }
    header.push_str(&format!(" {:>9}  Status", "Left"));
    println!("{}", header);

    for line in distribution_rows(manager) {
        println!("{}", line);
    }

    if manager.is_fully_distributed() {
        println!();
        println!("All servings are assigned to a meal.");
    }
}

/// Display kcal per meal slot as horizontal bars scaled to the largest meal.
pub fn display_slot_bars(manager: &PlanStateManager) {
    let slots = manager.slot_breakdown();
    let kcal: Vec<f64> = MealSlot::ALL.iter().map(|s| slots[s].kcal).collect();
    let heights = bar_heights(&kcal);

    println!();
    println!("=== Calories per Meal ===");
    println!();
    for ((slot, value), height) in MealSlot::ALL.iter().zip(&kcal).zip(&heights) {
        println!(
            "{:<16} {} {:>6.0} kcal",
            slot.label(),
            progress_bar(*height, BAR_WIDTH),
            value
        );
    }
}

/// Display macro calories, their percentages, and the donut arcs.
pub fn display_composition(totals: &NutritionTotals, show_fiber: bool) {
    let comp = compose(totals);

    println!();
    println!("=== Macro Composition ===");
    println!();
    println!(
        "Carbohydrate {:>7.1} g  {:>7.0} kcal  {:>5.1}%",
        totals.cho, comp.kcal.cho, comp.cho_pct
    );
    println!(
        "Protein      {:>7.1} g  {:>7.0} kcal  {:>5.1}%",
        totals.protein, comp.kcal.protein, comp.protein_pct
    );
    println!(
        "Fat          {:>7.1} g  {:>7.0} kcal  {:>5.1}%",
        totals.fat, comp.kcal.fat, comp.fat_pct
    );
    if show_fiber {
        println!(
            "Fiber        {:>7.1} g  {:>7.0} kcal  {:>5.1}%",
            totals.fiber, comp.kcal.fiber, comp.fiber_pct
        );
    }
    println!("Calories     {:>7.0} kcal", comp.total_kcal);
    println!("Macro energy {:>7.0} kcal", comp.kcal.energy_sum());

    let kcal = macro_kcal(totals);
    let arcs = donut_arc_spans(kcal.cho, kcal.protein, kcal.fat);
    println!();
    println!(
        "Donut: CHO {:.1}°-{:.1}°, PRO {:.1}°-{:.1}°, FAT {:.1}°-{:.1}°",
        arcs.cho.start,
        arcs.cho.end,
        arcs.protein.start,
        arcs.protein.end,
        arcs.fat.start,
        arcs.fat.end
    );
}

fn display_comparison(name: &str, unit: &str, current: f64, target: f64, cmp: &TargetComparison) {
    let flag = if cmp.is_over { " OVER" } else { "" };
    println!(
        "{:<12} {} {:>5.1}%  {:.0}/{:.0} {}{}",
        name,
        progress_bar(bar_ratio(cmp.percent, 100.0), BAR_WIDTH),
        cmp.percent,
        current,
        target,
        unit,
        flag
    );
}

/// Display progress toward the calorie and macro targets.
pub fn display_targets(manager: &PlanStateManager) {
    let target = manager.target();
    if target.kcal <= 0.0 && target.cho.is_none() && target.protein.is_none() && target.fat.is_none()
    {
        println!();
        println!("No target set. Use 'target <kcal>' to set one.");
        return;
    }

    let totals = manager.totals();
    let report = manager.target_report();

    println!();
    println!("=== Targets ===");
    println!();
    display_comparison("Calories", "kcal", totals.kcal, target.kcal, &report.kcal);
    if let (Some(t), Some(cmp)) = (target.cho, report.cho) {
        display_comparison("Carbohydrate", "g", totals.cho, t, &cmp);
    }
    if let (Some(t), Some(cmp)) = (target.protein, report.protein) {
        display_comparison("Protein", "g", totals.protein, t, &cmp);
    }
    if let (Some(t), Some(cmp)) = (target.fat, report.fat) {
        display_comparison("Fat", "g", totals.fat, t, &cmp);
    }

    if report.any_over() {
        println!("Warning: at least one target is exceeded.");
    }

    let remaining = report.kcal.remaining;
    if target.kcal > 0.0 {
        if remaining >= 0.0 {
            println!("{:.0} kcal left today", remaining);
        } else {
            println!("{:.0} kcal over target", -remaining);
        }
    }
}

/// Display BMI with its gauge needle angle.
pub fn display_bmi(profile: &BodyProfile) {
    let value = planner::bmi(profile);
    let rotation = planner::bmi_gauge_rotation(value);
    let category = BmiCategory::from_bmi(value);

    println!();
    println!("=== BMI ===");
    println!();
    println!(
        "{:.1} kg, {:.0} cm => BMI {:.1} ({})",
        profile.weight_kg,
        profile.height_cm,
        value,
        category.label()
    );
    println!(
        "Gauge {:.0}-{:.0}: needle at {:.1}°",
        BMI_GAUGE_MIN, BMI_GAUGE_MAX, rotation
    );
}

/// Display the full plan summary.
pub fn display_summary(manager: &PlanStateManager) {
    if manager.servings().is_empty() {
        println!("No servings planned yet. Use 'set <group> <servings>' or 'edit'.");
    } else {
        display_group_breakdown(manager);
    }

    // Cells assigned without planned servings still show up as over-allocated.
    if !distribution_rows(manager).is_empty() {
        display_distribution(manager);
        display_slot_bars(manager);
    }

    let totals = manager.totals();
    display_composition(&totals, false);

    let distributed = manager.distribution_totals();
    if distributed != totals {
        println!();
        println!(
            "Distributed so far: {:.0} kcal of {:.0} kcal planned",
            distributed.kcal, totals.kcal
        );
    }

    display_targets(manager);

    if let Some(profile) = manager.profile() {
        display_bmi(profile);
    }
    println!();
}

/// Display free-form builder items and their totals.
pub fn display_builder(items: &[LineItem]) {
    if items.is_empty() {
        println!("No items in the meal.");
        return;
    }

    let max_name_len = items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    println!();
    println!("=== Meal Builder ({} items) ===", items.len());
    println!();
    for (i, item) in items.iter().enumerate() {
        let totals = item.totals();
        println!(
            "{:>3}. {:<width$} x{:<5} {:<14} {:>6.0} kcal | C:{:.1} P:{:.1} F:{:.1} Fi:{:.1}",
            i + 1,
            item.name,
            fmt_servings(item.quantity),
            item.group.label(),
            totals.kcal,
            totals.cho,
            totals.protein,
            totals.fat,
            totals.fiber,
            width = max_name_len
        );
    }

    println!();
    println!("--- By Group ---");
    for (group, totals) in planner::compute_item_group_breakdown(items) {
        println!("  {:<16} {:>6.0} kcal", group.label(), totals.kcal);
    }

    let totals = planner::compute_item_totals(items);
    display_composition(&totals, true);
    println!();
}
