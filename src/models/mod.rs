mod exchange;
mod item;
mod nutrition;
mod plan;

pub use exchange::{ExchangeGroup, MealSlot};
pub use item::LineItem;
pub use nutrition::{NutrientFactor, NutritionTotals};
pub use plan::{BodyProfile, DistributionMatrix, ExchangePlan, ServingCounts, Target};
