use fitbmi_model::{Gender, UserProfile};
use log::warn;

/// Turns raw form values into a profile, clamping anything out of range.
pub fn profile_from_inputs(gender: Gender, age: u32, height_cm: f64, weight_kg: f64) -> UserProfile {
    let profile = UserProfile::clamped(gender, age, height_cm, weight_kg);
    note_clamped("age", age as f64, profile.age() as f64);
    note_clamped("height", height_cm, profile.height_cm());
    note_clamped("weight", weight_kg, profile.weight_kg());
    profile
}

pub(crate) fn note_clamped(field: &str, requested: f64, accepted: f64) {
    if requested != accepted {
        warn!("{} {} is out of range, using {}", field, requested, accepted);
    }
}
