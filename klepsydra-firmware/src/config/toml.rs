//! Simple TOML parser for timer configuration
//!
//! A minimal parser that handles only the subset needed for the
//! Klepsydra config. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (integers only)
//! - [section] headers
//! - [preset.N] subsection headers
//! - Comments (# ...)
//!
//! NOT supported:
//! - Strings, arrays, inline tables, datetimes
//!
//! Unknown keys are ignored so the config file can grow without
//! breaking older firmware; malformed values and sections are hard
//! errors and abort boot.

use klepsydra_core::config::{TimerConfig, HOLD_PRESETS};

/// Accepted duration range in minutes
const MINUTES_RANGE: core::ops::RangeInclusive<i64> = 1..=600;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Non-numeric or out-of-range value
    InvalidValue,
}

/// Current parsing context
#[derive(Debug, Clone, Copy)]
enum Section {
    Root,
    Timers,
    Preset(usize),
}

/// Parse TOML configuration into a TimerConfig
///
/// Starts from `TimerConfig::default()`; every recognized key
/// overrides the default it names.
pub fn parse_config(input: &str) -> Result<TimerConfig, ParseError> {
    let mut config = TimerConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Section header
        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        // Key = value pair
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let minutes = parse_minutes(value)?;

        match section {
            Section::Timers => match key {
                "slot_minutes" => config.slot_minutes = minutes,
                "total_minutes" => config.total_minutes = minutes,
                _ => {}
            },
            Section::Preset(i) => match key {
                "slot" => config.presets[i].slot_minutes = minutes,
                "total" => config.presets[i].total_minutes = minutes,
                _ => {}
            },
            Section::Root => {}
        }
    }

    Ok(config)
}

fn parse_section_header(name: &str) -> Result<Section, ParseError> {
    let name = name.trim();
    if name == "timers" {
        return Ok(Section::Timers);
    }
    if let Some(n) = name.strip_prefix("preset.") {
        let n: usize = n.trim().parse().map_err(|_| ParseError::InvalidSection)?;
        if (1..=HOLD_PRESETS).contains(&n) {
            return Ok(Section::Preset(n - 1));
        }
        return Err(ParseError::InvalidSection);
    }
    Err(ParseError::InvalidSection)
}

/// Parse a duration value, stripping any trailing comment
fn parse_minutes(value: &str) -> Result<u16, ParseError> {
    let value = match value.split_once('#') {
        Some((v, _)) => v.trim(),
        None => value.trim(),
    };
    let minutes: i64 = value.parse().map_err(|_| ParseError::InvalidValue)?;
    if !MINUTES_RANGE.contains(&minutes) {
        return Err(ParseError::InvalidValue);
    }
    Ok(minutes as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let input = r#"
# session defaults
[timers]
slot_minutes = 10
total_minutes = 60

[preset.1]
slot = 5
total = 30

[preset.5]
slot = 90  # long workshop slots
total = 240
"#;
        let config = parse_config(input).unwrap();
        assert_eq!(config.slot_minutes, 10);
        assert_eq!(config.total_minutes, 60);
        assert_eq!(config.presets[0].slot_minutes, 5);
        assert_eq!(config.presets[0].total_minutes, 30);
        assert_eq!(config.presets[4].slot_minutes, 90);
        // Untouched presets keep their defaults
        assert_eq!(config.presets[1], TimerConfig::default().presets[1]);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config = parse_config("[timers]\n").unwrap();
        assert_eq!(config, TimerConfig::default());
    }

    #[test]
    fn test_non_numeric_duration_is_rejected() {
        let input = "[timers]\nslot_minutes = twelve\n";
        assert_eq!(parse_config(input), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_out_of_range_duration_is_rejected() {
        assert_eq!(
            parse_config("[timers]\nslot_minutes = 0\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[timers]\nslot_minutes = 1000\n"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert_eq!(
            parse_config("[network]\nhost = 1\n"),
            Err(ParseError::InvalidSection)
        );
        assert_eq!(
            parse_config("[preset.9]\nslot = 1\n"),
            Err(ParseError::InvalidSection)
        );
    }
}
