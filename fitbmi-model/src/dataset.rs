use std::{ops::Deref, sync::Arc};

use crate::measurement::Measurement;

/// Immutable snapshot of the reference population.
///
/// Loaded once and shared read-only; cloning only bumps a reference count.
#[derive(Clone, Debug, Default)]
pub struct ReferenceDataset {
    measurements: Arc<[Measurement]>,
}

impl ReferenceDataset {
    pub fn new(measurements: Vec<Measurement>) -> Self {
        Self {
            measurements: measurements.into(),
        }
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }
}

impl Deref for ReferenceDataset {
    type Target = [Measurement];

    fn deref(&self) -> &Self::Target {
        &self.measurements
    }
}

impl From<Vec<Measurement>> for ReferenceDataset {
    fn from(measurements: Vec<Measurement>) -> Self {
        Self::new(measurements)
    }
}
