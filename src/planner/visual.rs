use crate::models::BodyProfile;
use crate::planner::composition::{guarded_denominator, ratio_or_zero};
use crate::planner::constants::*;

/// One arc of the macro donut, in degrees from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    pub start: f64,
    pub end: f64,
}

impl ArcSpan {
    /// Degrees covered by the arc.
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

/// Contiguous carbohydrate, protein, and fat arcs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutArcs {
    pub cho: ArcSpan,
    pub protein: ArcSpan,
    pub fat: ArcSpan,
}

/// Split the donut in proportion to macro calories.
///
/// Order is carbohydrate, protein, fat. Fat closes at exactly 360 and
/// absorbs rounding. With all inputs 0 the arcs are 0°, 0°, 360°.
pub fn donut_arc_spans(cho_kcal: f64, protein_kcal: f64, fat_kcal: f64) -> DonutArcs {
    let total = guarded_denominator(cho_kcal + protein_kcal + fat_kcal);
    let cho_end = cho_kcal / total * DONUT_DEGREES;
    let protein_end = cho_end + protein_kcal / total * DONUT_DEGREES;

    DonutArcs {
        cho: ArcSpan {
            start: 0.0,
            end: cho_end,
        },
        protein: ArcSpan {
            start: cho_end,
            end: protein_end,
        },
        fat: ArcSpan {
            start: protein_end,
            end: DONUT_DEGREES,
        },
    }
}

/// Needle rotation for a half-circle gauge over `[min, max]`.
///
/// The value is clamped into the domain, so the result is always within
/// `[0, 180]`.
pub fn gauge_rotation(value: f64, min: f64, max: f64) -> f64 {
    let clamped = value.max(min).min(max);
    let normalized = (clamped - min) / guarded_denominator(max - min);
    normalized * GAUGE_DEGREES
}

/// `value / max` bounded to `[0, 1]`; 0 when `max` is 0.
pub fn bar_ratio(value: f64, max: f64) -> f64 {
    ratio_or_zero(value, max).clamp(0.0, 1.0)
}

/// Bar heights for a series, relative to its largest value.
pub fn bar_heights(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0, f64::max);
    values.iter().map(|v| bar_ratio(*v, max)).collect()
}

/// Filled cells of a text bar `width` cells wide.
pub fn bar_cells(ratio: f64, width: usize) -> usize {
    let cells = (ratio.clamp(0.0, 1.0) * width as f64).round();
    cells as usize
}

/// Body mass index from weight in kg and height in cm. 0 when height is 0.
pub fn bmi(profile: &BodyProfile) -> f64 {
    let height_m = profile.height_cm / 100.0;
    ratio_or_zero(profile.weight_kg, height_m * height_m)
}

/// Needle rotation on the BMI gauge.
pub fn bmi_gauge_rotation(bmi: f64) -> f64 {
    gauge_rotation(bmi, BMI_GAUGE_MIN, BMI_GAUGE_MAX)
}

/// Standard adult BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_UNDERWEIGHT_BELOW {
            BmiCategory::Underweight
        } else if bmi < BMI_NORMAL_BELOW {
            BmiCategory::Normal
        } else if bmi < BMI_OVERWEIGHT_BELOW {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_donut_zero_case() {
        let arcs = donut_arc_spans(0.0, 0.0, 0.0);
        assert_eq!(arcs.cho.sweep(), 0.0);
        assert_eq!(arcs.protein.sweep(), 0.0);
        assert_eq!(arcs.fat.sweep(), 360.0);
    }

    #[test]
    fn test_donut_arcs_are_contiguous() {
        let arcs = donut_arc_spans(140.0, 108.0, 81.0);
        assert_eq!(arcs.cho.start, 0.0);
        assert_eq!(arcs.cho.end, arcs.protein.start);
        assert_eq!(arcs.protein.end, arcs.fat.start);
        assert_eq!(arcs.fat.end, 360.0);
    }

    #[test]
    fn test_donut_proportions() {
        let arcs = donut_arc_spans(100.0, 100.0, 200.0);
        assert_eq!(arcs.cho.sweep(), 90.0);
        assert_eq!(arcs.protein.sweep(), 90.0);
        assert_eq!(arcs.fat.sweep(), 180.0);
    }

    #[test]
    fn test_gauge_bounds_and_midpoint() {
        assert_eq!(gauge_rotation(10.0, 15.0, 40.0), 0.0);
        assert_eq!(gauge_rotation(15.0, 15.0, 40.0), 0.0);
        assert_eq!(gauge_rotation(27.5, 15.0, 40.0), 90.0);
        assert_eq!(gauge_rotation(40.0, 15.0, 40.0), 180.0);
        assert_eq!(gauge_rotation(55.0, 15.0, 40.0), 180.0);
    }

    #[test]
    fn test_gauge_degenerate_domain() {
        assert_eq!(gauge_rotation(3.0, 5.0, 5.0), 0.0);
    }

    #[test]
    fn test_bar_ratio() {
        assert_eq!(bar_ratio(3.0, 0.0), 0.0);
        assert_eq!(bar_ratio(3.0, 12.0), 0.25);
        assert_eq!(bar_ratio(20.0, 10.0), 1.0);
    }

    #[test]
    fn test_bar_heights_relative_to_max() {
        assert_eq!(bar_heights(&[100.0, 400.0, 0.0]), vec![0.25, 1.0, 0.0]);
        assert_eq!(bar_heights(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(bar_heights(&[]).is_empty());
    }

    #[test]
    fn test_bar_cells() {
        assert_eq!(bar_cells(0.5, 30), 15);
        assert_eq!(bar_cells(1.5, 30), 30);
        assert_eq!(bar_cells(0.0, 30), 0);
    }

    #[test]
    fn test_bmi_and_category() {
        let profile = BodyProfile {
            weight_kg: 81.0,
            height_cm: 180.0,
        };
        assert!((bmi(&profile) - 25.0).abs() < 1e-9);
        assert_eq!(BmiCategory::from_bmi(22.0), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_zero_height() {
        let profile = BodyProfile {
            weight_kg: 70.0,
            height_cm: 0.0,
        };
        assert_eq!(bmi(&profile), 0.0);
        assert_eq!(bmi_gauge_rotation(0.0), 0.0);
    }
}
