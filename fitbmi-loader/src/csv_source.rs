use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
    str::FromStr,
};

use csv::{ReaderBuilder, StringRecord};
use fitbmi_model::{GenderCode, Measurement, ReferenceDataset};
use log::{debug, info};

use crate::{DatasetSource, Error};

/// Default file name of the national fitness measurement export.
pub const DEFAULT_DATASET_PATH: &str = "fitness data.xlsx - KS_NFA_FTNESS_MESURE_ITEM_MESUR.csv";

pub const GENDER_COLUMN: &str = "성별구분코드";
pub const AGE_COLUMN: &str = "나이";
pub const BMI_COLUMN: &str = "BMI";

pub struct CsvDatasetSource {
    path: PathBuf,
}

impl CsvDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for CsvDatasetSource {
    fn load(&self) -> Result<ReferenceDataset, Error> {
        info!("Loading reference dataset from {}", self.path.display());
        let file = File::open(&self.path).map_err(|source| Error::Unavailable {
            path: self.path.clone(),
            source,
        })?;
        let measurements = read_measurements(BufReader::new(file), &self.path)?;
        Ok(ReferenceDataset::new(measurements))
    }
}

struct Columns {
    gender: usize,
    age: usize,
    bmi: usize,
}

impl Columns {
    fn locate(headers: &StringRecord, path: &Path) -> Result<Self, Error> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == column)
                .ok_or_else(|| Error::MissingColumn {
                    path: path.to_owned(),
                    column,
                })
        };

        Ok(Self {
            gender: find(GENDER_COLUMN)?,
            age: find(AGE_COLUMN)?,
            bmi: find(BMI_COLUMN)?,
        })
    }

    fn read(&self, record: &StringRecord) -> Option<Measurement> {
        let gender_code = GenderCode::from_str(record.get(self.gender)?.trim()).ok()?;
        let age = parse_age(record.get(self.age)?)?;
        let bmi = record.get(self.bmi).and_then(parse_bmi);
        Some(Measurement::new(gender_code, age, bmi))
    }
}

/// Reads measurements from headered CSV data. `path` is only used for error reporting.
pub fn read_measurements<R: Read>(reader: R, path: &Path) -> Result<Vec<Measurement>, Error> {
    let malformed = |source: csv::Error| Error::Malformed {
        path: path.to_owned(),
        source,
    };

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns::locate(reader.headers().map_err(malformed)?, path)?;

    let mut measurements = Vec::new();
    let mut skipped = 0;
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(malformed)?;
        match columns.read(&record) {
            Some(measurement) => measurements.push(measurement),
            None => {
                debug!("Skipping data row {}: {:?}", line + 1, record);
                skipped += 1;
            }
        }
    }

    info!(
        "Loaded {} measurements ({} rows skipped)",
        measurements.len(),
        skipped
    );
    Ok(measurements)
}

/// Accepts whole numbers, also when written with a zero fraction (`34.0`).
fn parse_age(field: &str) -> Option<u8> {
    let field = field.trim();
    if let Ok(age) = field.parse::<u8>() {
        return Some(age);
    }
    let age = field.parse::<f64>().ok()?;
    if age.is_finite() && age.fract() == 0.0 && (0.0..=u8::MAX as f64).contains(&age) {
        Some(age as u8)
    } else {
        None
    }
}

fn parse_bmi(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|bmi| bmi.is_finite())
}
