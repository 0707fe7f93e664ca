pub mod classifier;
pub mod comparator;
pub mod histogram;
pub mod report;

pub use classifier::{body_mass_index, categorize, classify};
pub use comparator::{compare, percentile_below, AgeWindow, Comparison, ComparisonResult};
pub use histogram::{Bin, Histogram};
pub use report::{analyze, Report};
