use std::ops::RangeInclusive;

use crate::gender::Gender;

pub const AGE_RANGE: RangeInclusive<u8> = 10..=100;
pub const HEIGHT_CM_RANGE: RangeInclusive<f64> = 100.0..=250.0;
pub const WEIGHT_KG_RANGE: RangeInclusive<f64> = 30.0..=200.0;

/// Inputs for a single evaluation. Every field is kept inside its domain.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserProfile {
    gender: Gender,
    age: u8,
    height_cm: f64,
    weight_kg: f64,
}

impl UserProfile {
    /// Builds a profile, clamping each value into its accepted range.
    pub fn clamped(gender: Gender, age: u32, height_cm: f64, weight_kg: f64) -> Self {
        let age = age.clamp(*AGE_RANGE.start() as u32, *AGE_RANGE.end() as u32) as u8;
        Self {
            gender,
            age,
            height_cm: clamp_f64(height_cm, &HEIGHT_CM_RANGE),
            weight_kg: clamp_f64(weight_kg, &WEIGHT_KG_RANGE),
        }
    }

    pub fn with_gender(self, gender: Gender) -> Self {
        Self { gender, ..self }
    }

    pub fn with_age(self, age: u32) -> Self {
        Self::clamped(self.gender, age, self.height_cm, self.weight_kg)
    }

    pub fn with_height_cm(self, height_cm: f64) -> Self {
        Self::clamped(self.gender, self.age as u32, height_cm, self.weight_kg)
    }

    pub fn with_weight_kg(self, weight_kg: f64) -> Self {
        Self::clamped(self.gender, self.age as u32, self.height_cm, weight_kg)
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }
    pub fn age(&self) -> u8 {
        self.age
    }
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::clamped(Gender::Male, 30, 170.0, 70.0)
    }
}

// NaN falls back to the lower bound.
fn clamp_f64(value: f64, range: &RangeInclusive<f64>) -> f64 {
    if value.is_nan() {
        *range.start()
    } else {
        value.clamp(*range.start(), *range.end())
    }
}
