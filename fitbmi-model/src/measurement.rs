use crate::gender::GenderCode;

/// A single row of the reference fitness-measurement dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub gender_code: GenderCode,
    pub age: u8,
    pub bmi: Option<f64>,
}

impl Measurement {
    pub fn new(gender_code: GenderCode, age: u8, bmi: Option<f64>) -> Self {
        Self {
            gender_code,
            age,
            bmi,
        }
    }
}
