use fitbmi_analysis::{analyze, Report};
use fitbmi_loader::DatasetSource;
use fitbmi_model::{ReferenceDataset, UserProfile};
use log::{info, warn};

/// Holds the reference dataset for the lifetime of the program.
///
/// The dataset is loaded once, when the session starts. If that fails the session
/// keeps working, only without population comparison.
pub struct Session {
    dataset: Option<ReferenceDataset>,
    notice: Option<String>,
}

impl Session {
    pub fn start(source: &dyn DatasetSource) -> Self {
        match source.load() {
            Ok(dataset) => {
                info!("Reference dataset ready, {} measurements", dataset.len());
                Self::with_dataset(dataset)
            }
            Err(e) => {
                warn!("Population comparison disabled: {}", e);
                Self {
                    dataset: None,
                    notice: Some(format!(
                        "{}. Population comparison is disabled; BMI is still calculated.",
                        e
                    )),
                }
            }
        }
    }

    pub fn with_dataset(dataset: ReferenceDataset) -> Self {
        Self {
            dataset: Some(dataset),
            notice: None,
        }
    }

    pub fn dataset(&self) -> Option<&ReferenceDataset> {
        self.dataset.as_ref()
    }

    /// User-facing message explaining why comparison is unavailable.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn evaluate(&self, profile: &UserProfile) -> Report {
        analyze(profile, self.dataset.as_ref())
    }
}
