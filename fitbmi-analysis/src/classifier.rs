use fitbmi_model::{BmiCategory, BmiResult};

/// Upper (exclusive) bound of the underweight range.
pub const UNDERWEIGHT_BELOW: f64 = 18.5;
/// Upper (exclusive) bound of the normal range.
pub const NORMAL_BELOW: f64 = 23.0;
/// Upper (exclusive) bound of the overweight range. Anything at or above is obese.
pub const OVERWEIGHT_BELOW: f64 = 25.0;

/// Computes BMI from height in centimetres and weight in kilograms,
/// rounded to two decimal places. Exact ties go to the even digit.
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to_hundredths(weight_kg / height_m.powi(2))
}

pub fn categorize(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < NORMAL_BELOW {
        BmiCategory::Normal
    } else if bmi < OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

pub fn classify(height_cm: f64, weight_kg: f64) -> BmiResult {
    let value = body_mass_index(height_cm, weight_kg);
    BmiResult::new(value, categorize(value))
}

fn round_to_hundredths(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}
