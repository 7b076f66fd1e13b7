use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{ExchangeGroup, MealSlot};

/// Servings per exchange group in calculator mode.
///
/// Groups that were never set read as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServingCounts(BTreeMap<ExchangeGroup, f64>);

impl ServingCounts {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, group: ExchangeGroup) -> f64 {
        self.0.get(&group).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, group: ExchangeGroup, servings: f64) {
        self.0.insert(group, servings);
    }

    /// Sum of all servings across groups.
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|v| *v == 0.0)
    }
}

impl FromIterator<(ExchangeGroup, f64)> for ServingCounts {
    fn from_iter<I: IntoIterator<Item = (ExchangeGroup, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Serialized form of the distribution: `{group: {slot: servings}}`.
type SlotCells = BTreeMap<ExchangeGroup, BTreeMap<MealSlot, f64>>;

/// Servings of each group assigned to each meal slot.
///
/// Always a complete group × slot matrix; unassigned cells are 0. Saved as
/// nested keyed maps holding only the non-zero cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SlotCells", into = "SlotCells")]
pub struct DistributionMatrix {
    cells: [[f64; MealSlot::COUNT]; ExchangeGroup::COUNT],
}

impl DistributionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, group: ExchangeGroup, slot: MealSlot) -> f64 {
        self.cells[group.index()][slot.index()]
    }

    pub fn set(&mut self, group: ExchangeGroup, slot: MealSlot, servings: f64) {
        self.cells[group.index()][slot.index()] = servings;
    }

    /// One group's cells in slot order.
    pub fn row(&self, group: ExchangeGroup) -> &[f64; MealSlot::COUNT] {
        &self.cells[group.index()]
    }

    /// Servings of `group` assigned across all slots, summed in slot order.
    pub fn row_sum(&self, group: ExchangeGroup) -> f64 {
        self.row(group).iter().fold(0.0, |acc, v| acc + v)
    }

    /// Every cell as `(group, slot, servings)`, group-major.
    pub fn cells(&self) -> impl Iterator<Item = (ExchangeGroup, MealSlot, f64)> + '_ {
        ExchangeGroup::ALL.into_iter().flat_map(move |g| {
            MealSlot::ALL
                .into_iter()
                .map(move |s| (g, s, self.get(g, s)))
        })
    }

    pub fn clear_row(&mut self, group: ExchangeGroup) {
        self.cells[group.index()] = [0.0; MealSlot::COUNT];
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl From<SlotCells> for DistributionMatrix {
    fn from(cells: SlotCells) -> Self {
        let mut matrix = Self::new();
        for (group, row) in cells {
            for (slot, servings) in row {
                matrix.set(group, slot, servings);
            }
        }
        matrix
    }
}

impl From<DistributionMatrix> for SlotCells {
    fn from(matrix: DistributionMatrix) -> Self {
        let mut cells = SlotCells::new();
        for (group, slot, servings) in matrix.cells() {
            if servings != 0.0 {
                cells.entry(group).or_default().insert(slot, servings);
            }
        }
        cells
    }
}

/// User-set goals. A `kcal` of 0 means no calorie target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub kcal: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cho: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}

impl Target {
    pub fn kcal(kcal: f64) -> Self {
        Self {
            kcal,
            ..Default::default()
        }
    }
}

/// Body measurements used for the BMI gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// Everything a planning session holds, saved and restored as one blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangePlan {
    #[serde(default)]
    pub servings: ServingCounts,

    #[serde(default)]
    pub distribution: DistributionMatrix,

    #[serde(default)]
    pub target: Target,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<BodyProfile>,
}
