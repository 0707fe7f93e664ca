use std::io::Cursor;

use fitbmi_analysis::{AgeWindow, Comparison};
use fitbmi_cli::{interactive, Session};
use fitbmi_loader::{Error, MockDatasetSource};
use fitbmi_model::{
    BmiCategory, BmiResult, Gender, GenderCode, Measurement, ReferenceDataset, UserProfile,
};

fn reference_population() -> ReferenceDataset {
    ReferenceDataset::new(vec![
        Measurement::new(GenderCode::M, 27, Some(21.3)),
        Measurement::new(GenderCode::M, 30, Some(23.9)),
        Measurement::new(GenderCode::M, 34, Some(26.4)),
        Measurement::new(GenderCode::M, 35, None),
        Measurement::new(GenderCode::F, 29, Some(19.7)),
        Measurement::new(GenderCode::F, 31, Some(22.8)),
        Measurement::new(GenderCode::F, 62, Some(24.1)),
    ])
}

fn failing_source() -> MockDatasetSource {
    let mut source = MockDatasetSource::new();
    source.expect_load().times(1).returning(|| {
        Err(Error::Unavailable {
            path: "missing.csv".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    });
    source
}

#[test]
fn dataset_is_loaded_once_and_reused() {
    let mut source = MockDatasetSource::new();
    source
        .expect_load()
        .times(1)
        .returning(|| Ok(reference_population()));

    let session = Session::start(&source);
    assert!(session.notice().is_none());

    let profile = UserProfile::default();
    let first = session.evaluate(&profile);
    let second = session.evaluate(&profile);
    assert_eq!(first, second);
    assert_eq!(first.bmi, BmiResult::new(24.22, BmiCategory::Overweight));

    let Some(Comparison::Compared(result)) = &first.comparison else {
        panic!("expected a comparison");
    };
    assert_eq!(result.sample_size(), 3);
    assert!((result.percentile - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn missing_dataset_only_disables_comparison() {
    let session = Session::start(&failing_source());

    assert!(session.dataset().is_none());
    let notice = session.notice().unwrap();
    assert!(notice.contains("missing.csv could not be opened: entity not found"));
    assert!(notice.contains("BMI is still calculated"));

    let report = session.evaluate(&UserProfile::clamped(Gender::Female, 25, 160.0, 45.0));
    assert_eq!(report.bmi, BmiResult::new(17.58, BmiCategory::Underweight));
    assert_eq!(report.comparison, None);
    assert_eq!(report.histogram, None);
}

#[test]
fn young_female_without_peers_gets_insufficient_data() {
    let session = Session::with_dataset(reference_population());
    let report = session.evaluate(&UserProfile::clamped(Gender::Female, 10, 140.0, 35.0));

    assert_eq!(
        report.comparison,
        Some(Comparison::InsufficientData {
            window: AgeWindow::around(10)
        })
    );
    assert_eq!(report.percentile(), None);
}

#[test]
fn interactive_session_recomputes_after_every_change() {
    let session = Session::with_dataset(reference_population());
    let input = Cursor::new("weight 45\n\nbogus\ngender female\nheight 1000\nquit\nweight 90\n");
    let mut out = Vec::new();

    let profile = interactive::run(&session, UserProfile::default(), input, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        profile,
        UserProfile::clamped(Gender::Female, 30, 250.0, 45.0)
    );
    // Initial report plus one per accepted change.
    assert_eq!(text.matches("BMI: ").count(), 4);
    assert!(text.contains("BMI: 24.22 (Overweight)"));
    assert!(text.contains("BMI: 15.57 (Underweight)"));
    assert!(text.contains("BMI: 7.20 (Underweight)"));
    assert!(text.contains("error: unknown command \"bogus\""));
    assert!(text.contains("female participants aged 25-35"));
}

#[test]
fn interactive_session_without_dataset_still_reports() {
    let session = Session::start(&failing_source());
    let mut out = Vec::new();

    interactive::run(&session, UserProfile::default(), Cursor::new("age 50\n"), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("BMI: 24.22 (Overweight)").count(), 2);
    assert!(!text.contains("participants"));
}
