use std::fmt;

use fitbmi_model::{Gender, Measurement};
use log::debug;

/// Half-width in years of the comparison age window.
pub const AGE_WINDOW_HALF_WIDTH: u8 = 5;

/// Inclusive range of ages compared against.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AgeWindow {
    start: u8,
    end: u8,
}

impl AgeWindow {
    pub fn around(age: u8) -> Self {
        Self {
            start: age.saturating_sub(AGE_WINDOW_HALF_WIDTH),
            end: age.saturating_add(AGE_WINDOW_HALF_WIDTH),
        }
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    pub fn contains(&self, age: u8) -> bool {
        (self.start..=self.end).contains(&age)
    }
}

impl fmt::Display for AgeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonResult {
    pub window: AgeWindow,
    /// Rows of the same gender inside the window that carry a BMI, in dataset order.
    pub subset: Vec<Measurement>,
    /// Share of `subset` with a BMI strictly below the target, in [0, 100].
    pub percentile: f64,
}

impl ComparisonResult {
    pub fn sample_size(&self) -> usize {
        self.subset.len()
    }

    pub fn bmi_values(&self) -> Vec<f64> {
        self.subset.iter().filter_map(|m| m.bmi).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Comparison {
    Compared(ComparisonResult),
    /// Nobody with a recorded BMI matched the gender and age window.
    InsufficientData { window: AgeWindow },
}

impl Comparison {
    pub fn window(&self) -> AgeWindow {
        match self {
            Comparison::Compared(result) => result.window,
            Comparison::InsufficientData { window } => *window,
        }
    }

    pub fn percentile(&self) -> Option<f64> {
        match self {
            Comparison::Compared(result) => Some(result.percentile),
            Comparison::InsufficientData { .. } => None,
        }
    }
}

/// Places `bmi` within the part of `dataset` matching `gender` and the age window around `age`.
pub fn compare(dataset: &[Measurement], gender: Gender, age: u8, bmi: f64) -> Comparison {
    let window = AgeWindow::around(age);
    let code = gender.code();
    let subset: Vec<Measurement> = dataset
        .iter()
        .filter(|m| m.gender_code == code && window.contains(m.age))
        .filter(|m| m.bmi.is_some())
        .copied()
        .collect();
    debug!(
        "Comparing against {} rows (gender {}, ages {})",
        subset.len(),
        code,
        window
    );

    let values: Vec<f64> = subset.iter().filter_map(|m| m.bmi).collect();
    match percentile_below(&values, bmi) {
        Some(percentile) => Comparison::Compared(ComparisonResult {
            window,
            subset,
            percentile,
        }),
        None => Comparison::InsufficientData { window },
    }
}

/// Percentage of `values` strictly below `target`. `None` when `values` is empty.
pub fn percentile_below(values: &[f64], target: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let below = values.iter().filter(|v| **v < target).count();
    Some(below as f64 / values.len() as f64 * 100.0)
}
