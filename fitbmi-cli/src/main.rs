use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use fitbmi_cli::{
    input::profile_from_inputs,
    interactive,
    render::{chart, json, text},
    Config, Session,
};
use fitbmi_loader::CsvDatasetSource;
use fitbmi_model::Gender;
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "BMI calculator with a national fitness data comparison")]
struct Cli {
    /// Reference dataset CSV (overrides FITBMI_DATASET)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a single report for the given measurements
    Report(ReportArgs),
    /// Adjust measurements line by line, recomputing after every change
    Interactive(ProfileArgs),
}

#[derive(Args, Debug)]
struct ProfileArgs {
    /// male or female
    #[arg(long, default_value = "male")]
    gender: Gender,

    /// Age in years (10-100)
    #[arg(long, default_value_t = 30)]
    age: u32,

    /// Height in centimetres (100-250)
    #[arg(long, default_value_t = 170.0)]
    height: f64,

    /// Weight in kilograms (30-200)
    #[arg(long, default_value_t = 70.0)]
    weight: f64,
}

#[derive(Args, Debug)]
struct ReportArgs {
    #[command(flatten)]
    profile: ProfileArgs,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also draw the population histogram to this SVG file
    #[arg(long, value_hint = ValueHint::FilePath)]
    svg: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = Config::from_env().with_dataset(cli.dataset);
    if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
        eprintln!(
            "warning: logging disabled, cannot read {}: {}",
            config.log_config.display(),
            e
        );
    }

    let session = Session::start(&CsvDatasetSource::new(&config.dataset_path));
    if let Some(notice) = session.notice() {
        eprintln!("warning: {}", notice);
    }

    match cli.command {
        Command::Report(args) => report(&session, args),
        Command::Interactive(args) => {
            let profile = profile_from_inputs(args.gender, args.age, args.height, args.weight);
            let stdin = io::stdin();
            interactive::run(&session, profile, stdin.lock(), &mut io::stdout().lock())?;
            Ok(())
        }
    }
}

fn report(session: &Session, args: ReportArgs) -> Result<(), Box<dyn Error>> {
    let ProfileArgs {
        gender,
        age,
        height,
        weight,
    } = args.profile;
    let report = session.evaluate(&profile_from_inputs(gender, age, height, weight));

    let mut stdout = io::stdout().lock();
    match args.format {
        Format::Text => text::write_report(&mut stdout, &report)?,
        Format::Json => {
            json::write_report(&mut stdout, &report, Utc::now())?;
            writeln!(stdout)?;
        }
    }

    if let Some(path) = args.svg {
        if chart::write_svg(&report, &path)? {
            info!("Chart written to {}", path.display());
        } else {
            warn!("No population data to chart, {} not written", path.display());
        }
    }
    Ok(())
}
