pub mod bmi;
pub mod dataset;
pub mod gender;
pub mod measurement;
pub mod profile;

pub use bmi::{BmiCategory, BmiResult};
pub use dataset::ReferenceDataset;
pub use gender::{Gender, GenderCode};
pub use measurement::Measurement;
pub use profile::UserProfile;
