use strum::{Display, EnumIter};

/// BMI category under the Asian-population cut-offs.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Colour the category is highlighted with.
    pub fn color_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "blue",
            BmiCategory::Normal => "green",
            BmiCategory::Overweight => "orange",
            BmiCategory::Obese => "red",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BmiResult {
    /// Rounded to two decimal places.
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    pub fn new(value: f64, category: BmiCategory) -> Self {
        Self { value, category }
    }
}
