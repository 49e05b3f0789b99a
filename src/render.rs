use std::fmt::Display;

use clap::ValueEnum;
use crossterm::style::{Color, ResetColor, SetForegroundColor};

use crate::art::Icon;
use crate::units::{direction::wind_arrow, Units};
use crate::weather::WeatherReport;

const LINE_END: &str = "\r\n";

/// How the five report lines are decorated.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    Plain,
    #[default]
    Color,
}

/// Ascending breakpoints, each paired with a 256-colour index. A value takes
/// the colour of the first breakpoint strictly above it.
pub struct Scale {
    steps: &'static [(f64, u8)],
    fallback: u8,
}

/// Degrees Celsius.
pub const TEMPERATURE_SCALE: Scale = Scale {
    steps: &[
        (-15.0, 21),
        (-12.0, 27),
        (-9.0, 33),
        (-6.0, 39),
        (-3.0, 45),
        (0.0, 51),
        (2.0, 50),
        (4.0, 49),
        (6.0, 48),
        (8.0, 47),
        (10.0, 46),
        (13.0, 82),
        (16.0, 118),
        (19.0, 154),
        (22.0, 190),
        (25.0, 226),
        (28.0, 220),
        (31.0, 214),
        (34.0, 208),
        (37.0, 202),
    ],
    fallback: 196,
};

/// Metres per second.
pub const WIND_SCALE: Scale = Scale {
    steps: &[
        (3.0, 241),
        (6.0, 242),
        (9.0, 243),
        (12.0, 246),
        (15.0, 250),
        (19.0, 253),
        (23.0, 214),
        (27.0, 208),
        (31.0, 202),
    ],
    fallback: 196,
};

impl Scale {
    pub fn pick(&self, value: f64) -> u8 {
        self.steps
            .iter()
            .find(|(limit, _)| value < *limit)
            .map_or(self.fallback, |(_, color)| *color)
    }
}

pub fn paint(text: impl Display, color: u8) -> String {
    format!(
        "{}{}{}",
        SetForegroundColor(Color::AnsiValue(color)),
        text,
        ResetColor
    )
}

pub fn colorize_temperature<T: Display + Into<f64> + Copy>(value: T, units: Units) -> String {
    paint(value, TEMPERATURE_SCALE.pick(units.to_celsius(value.into())))
}

pub fn colorize_wind(value: f64, units: Units) -> String {
    paint(value, WIND_SCALE.pick(units.to_mps(value)))
}

impl Style {
    fn glyph(&self, icon: &Icon, line: usize) -> String {
        match self {
            Style::Plain => icon.lines[line].to_string(),
            Style::Color => paint(icon.lines[line], icon.tint),
        }
    }

    fn temperature(&self, report: &WeatherReport, units: Units) -> String {
        match self {
            Style::Plain => format!("{}({})", report.temperature, report.feels_like),
            Style::Color => format!(
                "{}({})",
                colorize_temperature(report.temperature, units),
                colorize_temperature(report.feels_like.trunc() as i32, units)
            ),
        }
    }

    fn wind(&self, speed: f64, units: Units) -> String {
        match self {
            Style::Plain => speed.to_string(),
            Style::Color => colorize_wind(speed, units),
        }
    }
}

/// The five report lines, each terminated with CRLF, as one string so the
/// caller can write them in a single flush.
pub fn render(report: &WeatherReport, icon: &Icon, style: Style, units: Units) -> String {
    let lines = [
        format!("{} {}", style.glyph(icon, 0), report.description),
        format!(
            "{} {} {}",
            style.glyph(icon, 1),
            style.temperature(report, units),
            units.temperature_symbol()
        ),
        format!(
            "{} {} {}",
            style.glyph(icon, 2),
            wind_arrow(report.wind_degrees),
            style.wind(report.wind_speed, units)
        ),
        format!("{} {} km", style.glyph(icon, 3), report.visibility_km()),
        format!("{} {}", style.glyph(icon, 4), report.precipitation()),
    ];

    lines.iter().fold(String::new(), |mut out, line| {
        out.push_str(line);
        out.push_str(LINE_END);
        out
    })
}
