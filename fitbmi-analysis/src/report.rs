use fitbmi_model::{BmiResult, ReferenceDataset, UserProfile};
use log::debug;

use crate::{
    classifier::classify,
    comparator::{compare, Comparison},
    histogram::Histogram,
};

/// Everything the presentation layer needs for one set of inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub profile: UserProfile,
    pub bmi: BmiResult,
    /// `None` when no reference dataset is available.
    pub comparison: Option<Comparison>,
    pub histogram: Option<Histogram>,
}

impl Report {
    pub fn percentile(&self) -> Option<f64> {
        self.comparison.as_ref().and_then(Comparison::percentile)
    }
}

pub fn analyze(profile: &UserProfile, dataset: Option<&ReferenceDataset>) -> Report {
    let bmi = classify(profile.height_cm(), profile.weight_kg());
    debug!("BMI {} classified as {}", bmi.value, bmi.category);

    let comparison =
        dataset.map(|dataset| compare(dataset, profile.gender(), profile.age(), bmi.value));
    let histogram = match &comparison {
        Some(Comparison::Compared(result)) => Histogram::from_values(&result.bmi_values(), bmi.value),
        _ => None,
    };

    Report {
        profile: *profile,
        bmi,
        comparison,
        histogram,
    }
}
