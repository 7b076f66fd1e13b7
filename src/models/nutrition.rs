use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// Per-serving contribution of one exchange group.
///
/// `kcal` is the standardized exchange-list value and is not derived from
/// the macros.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientFactor {
    pub cho: f64,
    pub protein: f64,
    pub fat: f64,
    pub kcal: f64,
}

impl NutrientFactor {
    pub const fn new(cho: f64, protein: f64, fat: f64, kcal: f64) -> Self {
        Self {
            cho,
            protein,
            fat,
            kcal,
        }
    }

    /// The factor as totals for exactly one serving. Fiber is 0.
    pub fn as_totals(&self) -> NutritionTotals {
        NutritionTotals {
            cho: self.cho,
            protein: self.protein,
            fat: self.fat,
            fiber: 0.0,
            kcal: self.kcal,
        }
    }
}

/// Derived macro and calorie totals. Grams for macros, kcal for energy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub cho: f64,
    pub protein: f64,
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    pub kcal: f64,
}

impl NutritionTotals {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Every field multiplied by `quantity`.
    pub fn scale(&self, quantity: f64) -> Self {
        Self {
            cho: self.cho * quantity,
            protein: self.protein * quantity,
            fat: self.fat * quantity,
            fiber: self.fiber * quantity,
            kcal: self.kcal * quantity,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.cho == 0.0
            && self.protein == 0.0
            && self.fat == 0.0
            && self.fiber == 0.0
            && self.kcal == 0.0
    }
}

impl Add for NutritionTotals {
    type Output = NutritionTotals;

    fn add(self, other: NutritionTotals) -> NutritionTotals {
        NutritionTotals {
            cho: self.cho + other.cho,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            kcal: self.kcal + other.kcal,
        }
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, other: NutritionTotals) {
        *self = *self + other;
    }
}

impl Mul<f64> for NutritionTotals {
    type Output = NutritionTotals;

    fn mul(self, quantity: f64) -> NutritionTotals {
        self.scale(quantity)
    }
}

impl std::iter::Sum for NutritionTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutritionTotals::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_as_totals_has_no_fiber() {
        let totals = NutrientFactor::new(15.0, 3.0, 0.0, 80.0).as_totals();
        assert_eq!(totals.fiber, 0.0);
        assert_eq!(totals.kcal, 80.0);
    }

    #[test]
    fn test_scale_and_add() {
        let a = NutritionTotals {
            cho: 10.0,
            protein: 2.0,
            fat: 1.0,
            fiber: 3.0,
            kcal: 60.0,
        };
        let doubled = a * 2.0;
        assert_eq!(doubled.cho, 20.0);
        assert_eq!(doubled.fiber, 6.0);

        let sum: NutritionTotals = vec![a, a, a].into_iter().sum();
        assert_eq!(sum.kcal, 180.0);
        assert_eq!(sum.protein, 6.0);
    }

    #[test]
    fn test_zero_is_zero() {
        assert!(NutritionTotals::zero().is_zero());
        let mut t = NutritionTotals::zero();
        t += NutritionTotals {
            kcal: 1.0,
            ..Default::default()
        };
        assert!(!t.is_zero());
    }
}
