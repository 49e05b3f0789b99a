use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use serde_json::{json, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod art;
mod cli;
mod error;
mod owm;
mod render;
mod units;
mod weather;

use crate::art::lookup_art;
use crate::cli::Args;
use crate::error::Error;
use crate::render::{paint, render, Style};
use crate::units::Units;
use crate::units::direction::compass;
use crate::weather::WeatherReport;

fn dump(raw: &Value, report: &WeatherReport) -> Result<(), Error> {
    let doc = json!({
        "payload": raw,
        "report": report,
        "wind_from": compass(report.wind_degrees),
        "precipitation_1h": report.precipitation(),
    });
    let mut stderr = io::stderr().lock();
    let text = serde_json::to_string_pretty(&doc).map_err(Error::Dump)?;
    writeln!(stderr, "{}", text)?;
    Ok(())
}

/// Payload to report text. Nothing is rendered unless every field and the
/// art lookup succeed.
fn report(raw: &Value, style: Style, units: Units) -> Result<(WeatherReport, String), Error> {
    let report = WeatherReport::build(raw)?;
    let icon = lookup_art(report.condition_id)?;
    let text = render(&report, icon, style, units);
    Ok((report, text))
}

fn run(args: &Args) -> Result<(), Error> {
    let raw = owm::current_weather(&args.query(), args.timeout())?;
    let (report, text) = report(&raw, args.style, args.units)?;

    if args.dump {
        dump(&raw, &report)?;
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    debug!("Report for {} written", report.location);
    Ok(())
}

fn report_failure(err: &Error, style: Style) {
    debug!(stage = ?err.stage(), "{:?}", err);
    match style {
        Style::Plain => eprintln!("{}: {}", err.label(), err),
        Style::Color => eprintln!("{} {}", paint(format!("{}.", err.label()), 196), paint(err, 220)),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err, args.style);
            ExitCode::FAILURE
        }
    }
}
