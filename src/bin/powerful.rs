//! Command-line wrapper around the powerful-number test.
//!
//! Takes exactly one non-negative integer argument and prints `1` when it
//! is powerful, `0` when it is not. Bad input is reported on stderr with
//! a failing exit status.

use chronograph::numeric::is_powerful;
use std::env;
use std::num::IntErrorKind;
use std::process::ExitCode;

fn parse_number(raw: &str) -> Result<u64, String> {
    match raw.parse::<u64>() {
        Ok(number) => Ok(number),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Err("the number specified is too large".to_string()),
            _ if raw.starts_with('-') => {
                Err("the number specified must not be negative".to_string())
            }
            _ => Err(format!("`{raw}` is not a number")),
        },
    }
}

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "powerful".to_string());

    let raw = match (args.next(), args.next()) {
        (Some(raw), None) => raw,
        _ => {
            eprintln!("usage: {program} <number>");
            return ExitCode::FAILURE;
        }
    };

    let number = match parse_number(&raw) {
        Ok(number) => number,
        Err(message) => {
            eprintln!("{program}: {message}");
            return ExitCode::FAILURE;
        }
    };

    match is_powerful(number) {
        Ok(powerful) => {
            println!("{}", u8::from(powerful));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{program}: {err}");
            ExitCode::FAILURE
        }
    }
}
