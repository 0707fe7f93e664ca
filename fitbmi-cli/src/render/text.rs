use std::io::{self, Write};

use fitbmi_analysis::{Comparison, Histogram, Report};

use super::group_name;

const BAR_WIDTH: usize = 40;

pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let bmi = &report.bmi;
    writeln!(out, "BMI: {:.2} ({})", bmi.value, bmi.category)?;
    writeln!(
        out,
        "Your BMI is {:.2}, which is classified as {} [{}].",
        bmi.value,
        bmi.category,
        bmi.category.color_name()
    )?;

    let group = group_name(report.profile.gender());
    match &report.comparison {
        Some(Comparison::Compared(result)) => {
            writeln!(out)?;
            writeln!(
                out,
                "Compared with {} {} participants aged {}:",
                result.sample_size(),
                group,
                result.window
            )?;
            writeln!(
                out,
                "Your BMI is in the lower {:.1}% of this group (a higher share means heavier).",
                result.percentile
            )?;
        }
        Some(Comparison::InsufficientData { window }) => {
            writeln!(out)?;
            writeln!(
                out,
                "Not enough reference data to compare with {} participants aged {}.",
                group, window
            )?;
        }
        None => {}
    }

    if let Some(histogram) = &report.histogram {
        writeln!(out)?;
        write_histogram(out, histogram)?;
    }
    Ok(())
}

/// One row per bin, bars scaled to the fullest bin. The bin holding the marker is flagged.
pub fn write_histogram<W: Write>(out: &mut W, histogram: &Histogram) -> io::Result<()> {
    let max_count = histogram.max_count().max(1);
    let marker_bin = histogram.marker_bin();
    for (i, bin) in histogram.bins().iter().enumerate() {
        let width = (bin.count * BAR_WIDTH).div_ceil(max_count);
        write!(
            out,
            "{:>6.2} - {:<6.2} |{:<bar$}| {}",
            bin.lower,
            bin.upper,
            "#".repeat(width),
            bin.count,
            bar = BAR_WIDTH
        )?;
        if marker_bin == Some(i) {
            write!(out, "  <- you ({:.2})", histogram.marker())?;
        }
        writeln!(out)?;
    }
    if marker_bin.is_none() {
        writeln!(
            out,
            "Your BMI ({:.2}) is outside the range of this group.",
            histogram.marker()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use fitbmi_analysis::analyze;
    use fitbmi_model::{Gender, GenderCode, Measurement, ReferenceDataset, UserProfile};

    use super::*;

    fn render(report: &Report) -> String {
        let mut out = Vec::new();
        write_report(&mut out, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn report_without_dataset_shows_only_classification() {
        let text = render(&analyze(&UserProfile::default(), None));
        assert_eq!(
            text,
            "BMI: 24.22 (Overweight)\nYour BMI is 24.22, which is classified as Overweight [orange].\n"
        );
    }

    #[test]
    fn report_with_comparison_shows_percentile_and_histogram() {
        let dataset = ReferenceDataset::new(vec![
            Measurement::new(GenderCode::M, 30, Some(20.0)),
            Measurement::new(GenderCode::M, 31, Some(22.0)),
            Measurement::new(GenderCode::M, 32, Some(26.0)),
            Measurement::new(GenderCode::M, 33, Some(28.0)),
        ]);
        let text = render(&analyze(&UserProfile::default(), Some(&dataset)));

        assert!(text.contains("Compared with 4 male participants aged 25-35:"));
        assert!(text.contains("lower 50.0%"));
        assert_eq!(text.matches("<- you (24.22)").count(), 1);
        assert_eq!(text.lines().filter(|l| l.contains('|')).count(), 30);
    }

    #[test]
    fn report_with_insufficient_data_shows_notice() {
        let dataset = ReferenceDataset::new(vec![Measurement::new(GenderCode::M, 30, Some(20.0))]);
        let profile = UserProfile::clamped(Gender::Female, 10, 150.0, 45.0);
        let text = render(&analyze(&profile, Some(&dataset)));

        assert!(text.contains("Not enough reference data to compare with female participants aged 5-15."));
        assert!(!text.contains('#'));
    }

    #[test]
    fn marker_outside_range_is_mentioned() {
        let histogram = Histogram::from_values(&[20.0, 21.0], 35.0).unwrap();
        let mut out = Vec::new();
        write_histogram(&mut out, &histogram).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("Your BMI (35.00) is outside the range of this group.\n"));
    }
}
