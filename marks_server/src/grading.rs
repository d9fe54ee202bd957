//! Total and percentage arithmetic for a student's marks.
//!
//! This is the only place the formula lives. `public/js/app.js` mirrors the
//! rounding rule for the live form preview but is never trusted.

use crate::models::student::Marks;

/// Number of subjects a percentage is averaged over.
pub const SUBJECT_COUNT: f64 = 3.0;

/// Derived figures stored alongside the raw marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grade {
    pub total: f64,
    pub percent: f64,
}

/// Sum of the three subject marks.
pub fn total(marks: &Marks) -> f64 {
    marks.math + marks.science + marks.english
}

/// `total / 3` rounded half away from zero to two decimals; 0 when total is 0.
pub fn percent(total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    round2(total / SUBJECT_COUNT)
}

pub fn grade(marks: &Marks) -> Grade {
    let total = total(marks);
    Grade {
        total,
        percent: percent(total),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse a submitted mark. Missing, blank, unparseable and non-finite input is 0.
pub fn coerce_mark(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        // -0 + 0 == +0
        .map(|v| v + 0.0)
        .unwrap_or(0.0)
}
