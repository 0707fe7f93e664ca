use std::io::Write;

use chrono::{DateTime, Utc};
use fitbmi_analysis::{AgeWindow, Comparison, Histogram, Report};
use fitbmi_model::{BmiResult, UserProfile};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    profile: &'a UserProfile,
    bmi: &'a BmiResult,
    comparison: JsonComparison,
    histogram: Option<&'a Histogram>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonComparison {
    Compared {
        window: AgeWindow,
        sample_size: usize,
        percentile: f64,
    },
    InsufficientData {
        window: AgeWindow,
    },
    Unavailable,
}

impl From<Option<&Comparison>> for JsonComparison {
    fn from(comparison: Option<&Comparison>) -> Self {
        match comparison {
            Some(Comparison::Compared(result)) => JsonComparison::Compared {
                window: result.window,
                sample_size: result.sample_size(),
                percentile: result.percentile,
            },
            Some(Comparison::InsufficientData { window }) => {
                JsonComparison::InsufficientData { window: *window }
            }
            None => JsonComparison::Unavailable,
        }
    }
}

pub fn write_report<W: Write>(
    out: W,
    report: &Report,
    generated_at: DateTime<Utc>,
) -> serde_json::Result<()> {
    let json = JsonReport {
        generated_at,
        profile: &report.profile,
        bmi: &report.bmi,
        comparison: report.comparison.as_ref().into(),
        histogram: report.histogram.as_ref(),
    };
    serde_json::to_writer_pretty(out, &json)
}
