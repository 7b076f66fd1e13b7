pub mod accounting;
pub mod composition;
pub mod constants;
pub mod factors;
pub mod target;
pub mod visual;

pub use accounting::{
    column_servings, compute_distribution_totals, compute_group_breakdown, compute_item_group_breakdown,
    compute_item_totals, compute_slot_breakdown, compute_totals, distribution_complete, row_remainder,
    row_status, slot_totals, RowStatus,
};
pub use composition::{
    compose, guarded_denominator, macro_kcal, percentage_of, ratio_or_zero, MacroComposition, MacroKcal,
};
pub use constants::*;
pub use factors::nutrient_factor;
pub use target::{compare_to_target, target_comparison, TargetComparison, TargetReport};
pub use visual::{
    bar_cells, bar_heights, bar_ratio, bmi, bmi_gauge_rotation, donut_arc_spans, gauge_rotation, ArcSpan,
    BmiCategory, DonutArcs,
};
