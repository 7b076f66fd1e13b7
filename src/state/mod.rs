mod export;
mod manager;
mod persistence;

pub use export::{write_distribution_csv, write_group_csv};
pub use manager::PlanStateManager;
pub use persistence::{load_items, load_plan, save_plan};
