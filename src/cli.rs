use std::time::Duration;

use clap::builder::{styling::AnsiColor, Styles};
use clap::Parser;

use crate::owm::Query;
use crate::render::Style;
use crate::units::Units;

const ABOUT: &str = "Current weather in five lines";

const LONG_ABOUT: &str = "
Prints the current weather for one location, sourced from OpenWeatherMap, as five short lines:
description, temperature (feels like), wind, visibility and the last hour of precipitation, each
next to a small piece of ASCII art chosen by the weather condition.

An OpenWeatherMap API key is required. Pass it with --api-key or set OWM_API_KEY.

Set RUST_LOG (e.g. RUST_LOG=debug) to see diagnostics on stderr.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(default_value = "Molodechno", help = "City name (e.g. London, \"Paris,FR\", etc.)")]
    pub location: String,

    #[arg(long, value_enum, default_value_t = Units::Metric)]
    pub units: Units,

    #[arg(long, env = "OWM_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, value_enum, default_value_t = Style::Color)]
    pub style: Style,

    #[arg(long, default_value_t = 10, help = "Request timeout in seconds")]
    pub timeout: u64,

    #[arg(long, help = "Dump the raw payload and the parsed report to stderr")]
    pub dump: bool,
}

impl Args {
    pub fn query(&self) -> Query<'_> {
        Query {
            location: &self.location,
            units: self.units,
            api_key: &self.api_key,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
