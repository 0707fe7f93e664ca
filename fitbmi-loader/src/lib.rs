pub mod csv_source;
mod error;

use fitbmi_model::ReferenceDataset;

pub use csv_source::CsvDatasetSource;
pub use error::Error;

/// Somewhere the reference population can be loaded from.
#[mockall::automock]
pub trait DatasetSource {
    fn load(&self) -> Result<ReferenceDataset, Error>;
}
