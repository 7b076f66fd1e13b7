/// Energy from one gram of carbohydrate.
pub const CHO_KCAL_PER_GRAM: f64 = 4.0;

/// Energy from one gram of protein.
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;

/// Energy from one gram of fat.
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Energy credited to one gram of fiber in the meal builder display.
///
/// Only fermentable fibers come close to this; kept for output parity.
pub const FIBER_KCAL_PER_GRAM: f64 = 2.0;

// ─────────────────────────────────────────────────────────────────────────────
// Gauges and charts
// ─────────────────────────────────────────────────────────────────────────────

/// Degrees in a full donut.
pub const DONUT_DEGREES: f64 = 360.0;

/// Degrees swept by a half-circle gauge needle.
pub const GAUGE_DEGREES: f64 = 180.0;

/// BMI gauge domain lower bound.
pub const BMI_GAUGE_MIN: f64 = 15.0;

/// BMI gauge domain upper bound.
pub const BMI_GAUGE_MAX: f64 = 40.0;

/// BMI category upper bounds (exclusive).
pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
pub const BMI_NORMAL_BELOW: f64 = 25.0;
pub const BMI_OVERWEIGHT_BELOW: f64 = 30.0;

/// Upper bound of target progress, in percent.
pub const PERCENT_CAP: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Input and display
// ─────────────────────────────────────────────────────────────────────────────

/// Granularity of serving counts entered by the user.
pub const SERVING_STEP: f64 = 0.25;

/// Character width of text progress bars.
pub const BAR_WIDTH: usize = 30;

/// Minimum Jaro-Winkler score for a fuzzy group-name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;
