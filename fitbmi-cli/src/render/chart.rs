use std::{error::Error, path::Path};

use fitbmi_analysis::{Histogram, Report};
use plotters::{coord::Shift, prelude::*};

use super::group_name;

const SIZE: (u32, u32) = (1024, 600);
const BAR_COLOR: RGBColor = RGBColor(166, 201, 236);
const MARKER_COLOR: RGBColor = RGBColor(220, 20, 20);
const DASH_SEGMENTS: usize = 24;

/// Writes the population histogram with the user's BMI marked to an SVG file.
///
/// Returns `false` without touching `path` when the report has no histogram.
pub fn write_svg(report: &Report, path: &Path) -> Result<bool, Box<dyn Error>> {
    let Some(histogram) = &report.histogram else {
        return Ok(false);
    };
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    draw_histogram(root, histogram, &title(report))?;
    Ok(true)
}

/// Same as [`write_svg`], into memory.
pub fn svg_string(report: &Report) -> Result<Option<String>, Box<dyn Error>> {
    let Some(histogram) = &report.histogram else {
        return Ok(None);
    };
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, SIZE).into_drawing_area();
        draw_histogram(root, histogram, &title(report))?;
    }
    Ok(Some(svg))
}

fn title(report: &Report) -> String {
    let window = report
        .comparison
        .as_ref()
        .map(|c| c.window().to_string())
        .unwrap_or_default();
    format!(
        "BMI distribution of {} participants aged {}",
        group_name(report.profile.gender()),
        window
    )
}

fn draw_histogram<DB>(
    root: DrawingArea<DB, Shift>,
    histogram: &Histogram,
    title: &str,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let marker = histogram.marker();
    let x_min = histogram.lower().min(marker);
    let x_max = histogram.upper().max(marker);
    let padding = ((x_max - x_min) * 0.05).max(0.5);
    let y_max = (histogram.max_count() as f64 * 1.15).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 45)
        .build_cartesian_2d((x_min - padding)..(x_max + padding), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("BMI")
        .y_desc("Participants")
        .x_label_formatter(&|v| format!("{:.1}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .draw()?;

    chart.draw_series(histogram.bins().iter().map(|bin| {
        Rectangle::new(
            [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
            BAR_COLOR.filled(),
        )
    }))?;

    // Dashed vertical line: every other segment is drawn.
    let step = y_max / (DASH_SEGMENTS * 2) as f64;
    chart.draw_series((0..DASH_SEGMENTS).map(|i| {
        let y0 = (2 * i) as f64 * step;
        PathElement::new(
            vec![(marker, y0), (marker, y0 + step)],
            MARKER_COLOR.stroke_width(3),
        )
    }))?;
    chart.draw_series(std::iter::once(Text::new(
        format!("You ({:.2})", marker),
        (marker, y_max * 0.97),
        ("sans-serif", 16).into_font().color(&MARKER_COLOR),
    )))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use fitbmi_analysis::analyze;
    use fitbmi_model::{GenderCode, Measurement, ReferenceDataset, UserProfile};

    use super::*;

    #[test]
    fn no_histogram_means_no_chart() {
        let report = analyze(&UserProfile::default(), None);
        assert_eq!(svg_string(&report).unwrap(), None);
        assert!(!write_svg(&report, Path::new("never-written.svg")).unwrap());
        assert!(!Path::new("never-written.svg").exists());
    }

    #[test]
    fn chart_contains_title_and_marker() {
        let dataset = ReferenceDataset::new(vec![
            Measurement::new(GenderCode::M, 30, Some(20.0)),
            Measurement::new(GenderCode::M, 29, Some(23.5)),
            Measurement::new(GenderCode::M, 31, Some(27.0)),
        ]);
        let report = analyze(&UserProfile::default(), Some(&dataset));
        let svg = svg_string(&report).unwrap().unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("BMI distribution of male participants aged 25-35"));
        assert!(svg.contains("You (24.22)"));
    }
}
