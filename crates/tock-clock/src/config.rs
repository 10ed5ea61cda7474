//! Clock configuration supplied by the host.
//!
//! Hosts either fill [`ClockConfig`] directly or feed it named string options
//! (`colorClock`, `hour`, ...) the way a markup attribute set would.

use std::fmt;
use std::time::Duration;

use tock_engine::paint::Color;

use crate::animator::Easing;
use crate::time::Time;

pub const OPT_HOUR: &str = "hour";
pub const OPT_MINUTE: &str = "minute";
pub const OPT_SECOND: &str = "second";
pub const OPT_COLOR_CLOCK: &str = "colorClock";
pub const OPT_COLOR_INDICATORS: &str = "colorIndicators";
pub const OPT_COLOR_SECOND_HAND: &str = "colorSecondHand";
pub const OPT_COLOR_MINUTE_HAND: &str = "colorMinuteHand";
pub const OPT_COLOR_HOUR_HAND: &str = "colorHourHand";
pub const OPT_DURATION: &str = "duration";
pub const OPT_EASING: &str = "easing";

/// Every option name [`ClockConfig::apply_option`] accepts.
pub const OPTIONS: [&str; 10] = [
    OPT_HOUR,
    OPT_MINUTE,
    OPT_SECOND,
    OPT_COLOR_CLOCK,
    OPT_COLOR_INDICATORS,
    OPT_COLOR_SECOND_HAND,
    OPT_COLOR_MINUTE_HAND,
    OPT_COLOR_HOUR_HAND,
    OPT_DURATION,
    OPT_EASING,
];

/// A rejected configuration option.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    UnknownOption(String),
    /// Input was not of the form `name=value`.
    MalformedAssignment(String),
    InvalidValue {
        option: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption(name) => {
                write!(f, "unknown clock option '{name}' (expected one of: {})", OPTIONS.join(", "))
            }
            ConfigError::MalformedAssignment(s) => {
                write!(f, "expected name=value, got '{s}'")
            }
            ConfigError::InvalidValue { option, value, expected } => {
                write!(f, "invalid value '{value}' for '{option}': expected {expected}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Colors of the five clock parts. Each defaults to opaque black.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockColors {
    /// Dial outline and center cap.
    pub clock: Color,
    pub indicators: Color,
    pub second_hand: Color,
    pub minute_hand: Color,
    pub hour_hand: Color,
}

impl Default for ClockColors {
    fn default() -> Self {
        Self {
            clock: Color::black(),
            indicators: Color::black(),
            second_hand: Color::black(),
            minute_hand: Color::black(),
            hour_hand: Color::black(),
        }
    }
}

/// Everything a clock widget needs at construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClockConfig {
    pub time: Time,
    pub colors: ClockColors,
    /// Sweep length. `None` means one second of animation per second since midnight.
    pub duration: Option<Duration>,
    pub easing: Easing,
}

impl ClockConfig {
    pub fn new(time: Time) -> Self {
        Self { time, ..Self::default() }
    }

    pub fn colors(mut self, colors: ClockColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The sweep length the animator will use.
    pub fn animation_duration(&self) -> Duration {
        self.duration.unwrap_or_else(|| self.time.to_duration())
    }

    /// Sets one named option from its string form.
    pub fn apply_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let name = name.trim();
        let value = value.trim();
        match name {
            OPT_HOUR => self.time.hour = parse_int(OPT_HOUR, value)?,
            OPT_MINUTE => self.time.minute = parse_int(OPT_MINUTE, value)?,
            OPT_SECOND => self.time.second = parse_int(OPT_SECOND, value)?,
            OPT_COLOR_CLOCK => self.colors.clock = parse_color(OPT_COLOR_CLOCK, value)?,
            OPT_COLOR_INDICATORS => {
                self.colors.indicators = parse_color(OPT_COLOR_INDICATORS, value)?
            }
            OPT_COLOR_SECOND_HAND => {
                self.colors.second_hand = parse_color(OPT_COLOR_SECOND_HAND, value)?
            }
            OPT_COLOR_MINUTE_HAND => {
                self.colors.minute_hand = parse_color(OPT_COLOR_MINUTE_HAND, value)?
            }
            OPT_COLOR_HOUR_HAND => self.colors.hour_hand = parse_color(OPT_COLOR_HOUR_HAND, value)?,
            OPT_DURATION => self.duration = Some(parse_duration(value)?),
            OPT_EASING => self.easing = parse_easing(value)?,
            other => return Err(ConfigError::UnknownOption(other.to_string())),
        }
        log::trace!("clock option {name} = {value}");
        Ok(())
    }

    /// Sets one option from a `name=value` assignment.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), ConfigError> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| ConfigError::MalformedAssignment(assignment.to_string()))?;
        self.apply_option(name, value)
    }

    /// Builds a config from `(name, value)` pairs applied in order over the defaults.
    pub fn from_options<'a, I>(options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (name, value) in options {
            config.apply_option(name, value)?;
        }
        Ok(config)
    }
}

fn invalid(option: &'static str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue { option, value: value.to_string(), expected }
}

fn parse_int(option: &'static str, value: &str) -> Result<i32, ConfigError> {
    value.parse().map_err(|_| invalid(option, value, "an integer"))
}

fn parse_color(option: &'static str, value: &str) -> Result<Color, ConfigError> {
    Color::from_hex(value).ok_or_else(|| invalid(option, value, "#rrggbb or #rrggbbaa"))
}

fn parse_duration(value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| invalid(OPT_DURATION, value, "a non-negative number of seconds"))
}

fn parse_easing(value: &str) -> Result<Easing, ConfigError> {
    match value {
        "linear" => Ok(Easing::Linear),
        "accelerateDecelerate" => Ok(Easing::AccelerateDecelerate),
        _ => Err(invalid(OPT_EASING, value, "linear or accelerateDecelerate")),
    }
}
