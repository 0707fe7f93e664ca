use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use fitbmi_model::{Gender, UserProfile};
use log::debug;

use crate::{input::note_clamped, render::text, session::Session};

const HELP: &str = "\
Commands:
  gender <male|female>   age <years>   height <cm>   weight <kg>
  show                   help          quit";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Gender(Gender),
    Age(u32),
    Height(f64),
    Weight(f64),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().ok_or("empty command")?.to_ascii_lowercase();
        let argument = words.next();
        if words.next().is_some() {
            return Err(format!("too many arguments for \"{}\"", name));
        }

        let value = || argument.ok_or_else(|| format!("\"{}\" needs a value", name));
        let number = |v: &str| {
            v.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| format!("\"{}\" is not a number", v))
        };

        match name.as_str() {
            "gender" | "g" => value()?
                .parse::<Gender>()
                .map(Command::Gender)
                .map_err(|_| format!("unknown gender \"{}\"", argument.unwrap_or_default())),
            "age" | "a" => {
                let v = value()?;
                v.parse::<u32>()
                    .map(Command::Age)
                    .map_err(|_| format!("\"{}\" is not a whole number of years", v))
            }
            "height" | "h" => number(value()?).map(Command::Height),
            "weight" | "w" => number(value()?).map(Command::Weight),
            "show" | "s" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(format!("unknown command \"{}\"", name)),
        }
    }
}

/// Applies an input change. `None` for commands that do not touch the profile.
pub fn apply(profile: UserProfile, command: Command) -> Option<UserProfile> {
    let updated = match command {
        Command::Gender(gender) => profile.with_gender(gender),
        Command::Age(age) => {
            let updated = profile.with_age(age);
            note_clamped("age", age as f64, updated.age() as f64);
            updated
        }
        Command::Height(height) => {
            let updated = profile.with_height_cm(height);
            note_clamped("height", height, updated.height_cm());
            updated
        }
        Command::Weight(weight) => {
            let updated = profile.with_weight_kg(weight);
            note_clamped("weight", weight, updated.weight_kg());
            updated
        }
        Command::Show | Command::Help | Command::Quit => return None,
    };
    Some(updated)
}

/// Reads commands from `input` until `quit` or end of input, re-rendering the report
/// after every change. Returns the last profile.
pub fn run<R: BufRead, W: Write>(
    session: &Session,
    mut profile: UserProfile,
    input: R,
    out: &mut W,
) -> io::Result<UserProfile> {
    writeln!(out, "{}", HELP)?;
    show(session, &profile, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                continue;
            }
        };
        debug!("Interactive command {:?}", command);

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Show => show(session, &profile, out)?,
            _ => {
                if let Some(updated) = apply(profile, command) {
                    profile = updated;
                    show(session, &profile, out)?;
                }
            }
        }
    }
    Ok(profile)
}

fn show<W: Write>(session: &Session, profile: &UserProfile, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\n[{}, {} years, {:.1} cm, {:.1} kg]",
        profile.gender(),
        profile.age(),
        profile.height_cm(),
        profile.weight_kg()
    )?;
    text::write_report(out, &session.evaluate(profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        let test_data = [
            ("gender female", Ok(Command::Gender(Gender::Female))),
            ("G Male", Ok(Command::Gender(Gender::Male))),
            ("age 42", Ok(Command::Age(42))),
            ("height 172.5", Ok(Command::Height(172.5))),
            ("  w 64 ", Ok(Command::Weight(64.0))),
            ("show", Ok(Command::Show)),
            ("?", Ok(Command::Help)),
            ("exit", Ok(Command::Quit)),
            ("age", Err("\"age\" needs a value".to_owned())),
            ("age 4.5", Err("\"4.5\" is not a whole number of years".to_owned())),
            ("height tall", Err("\"tall\" is not a number".to_owned())),
            ("weight NaN", Err("\"NaN\" is not a number".to_owned())),
            ("gender x", Err("unknown gender \"x\"".to_owned())),
            ("age 4 5", Err("too many arguments for \"age\"".to_owned())),
            ("jump", Err("unknown command \"jump\"".to_owned())),
        ];

        for (i, (input, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(input.parse::<Command>(), expected_output, "Test case #{}", i);
        }
    }

    #[test]
    fn apply_updates_only_the_named_field() {
        let profile = UserProfile::default();
        assert_eq!(
            apply(profile, Command::Weight(45.0)),
            Some(UserProfile::clamped(Gender::Male, 30, 170.0, 45.0))
        );
        assert_eq!(
            apply(profile, Command::Age(500)),
            Some(UserProfile::clamped(Gender::Male, 100, 170.0, 70.0))
        );
        assert_eq!(
            apply(profile, Command::Height(1000.0)),
            Some(UserProfile::clamped(Gender::Male, 30, 250.0, 70.0))
        );
        assert_eq!(
            apply(profile, Command::Gender(Gender::Female)),
            Some(UserProfile::clamped(Gender::Female, 30, 170.0, 70.0))
        );
        assert_eq!(apply(profile, Command::Show), None);
    }
}
