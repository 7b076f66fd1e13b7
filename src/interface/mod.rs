pub mod prompts;
pub mod render;

pub use prompts::{
    fuzzy_groups, parse_amount, parse_servings, prompt_action, prompt_group, prompt_servings,
    prompt_slot, prompt_target, prompt_yes_no, EditAction,
};
pub use render::{
    display_bmi, display_builder, display_composition, display_distribution,
    display_group_breakdown, display_slot_bars, display_summary, display_targets, progress_bar,
};
