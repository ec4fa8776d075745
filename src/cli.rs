//! Command-line arguments for the chronopick binary.

use anyhow::{Context, Result, anyhow, bail};
use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone};

use chronopick::PickerValue;

pub const USAGE: &str = "\
Usage: chronopick [OPTIONS]

Options:
  -m, --message TEXT    Question shown above the picker
  -d, --default TIME    Initial value (default: now)
      --min TIME        Earliest selectable value
      --max TIME        Latest selectable value
      --help-text TEXT  Text revealed by the help key
      --format FMT      strftime format for the printed value (default: RFC 3339)
      --scheduled       Show 'Now' for answers within a minute of now
      --no-color        Disable colors
  -h, --help            Print this help

TIME is RFC 3339, 'YYYY-MM-DD HH:MM:SS', 'now', or now+N / now-N with a
unit of s, m, h or d (e.g. now+30d).";

const DEFAULT_MESSAGE: &str = "Choose a date and time:";

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub message: String,
    pub default: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub help_text: Option<String>,
    pub format: Option<String>,
    pub scheduled: bool,
    pub no_color: bool,
    pub show_usage: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            default: None,
            min: None,
            max: None,
            help_text: None,
            format: None,
            scheduled: false,
            no_color: false,
            show_usage: false,
        }
    }
}

impl Args {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let args: Vec<String> = args.into_iter().collect();
        let mut parsed = Args::default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let slot = match flag {
                "--message" | "-m" => Some(&mut parsed.message),
                "--default" | "-d" => Some(parsed.default.insert(String::new())),
                "--min" => Some(parsed.min.insert(String::new())),
                "--max" => Some(parsed.max.insert(String::new())),
                "--help-text" => Some(parsed.help_text.insert(String::new())),
                "--format" => Some(parsed.format.insert(String::new())),
                "--scheduled" => {
                    parsed.scheduled = true;
                    None
                }
                "--no-color" => {
                    parsed.no_color = true;
                    None
                }
                "--help" | "-h" => {
                    parsed.show_usage = true;
                    None
                }
                _ => {
                    eprintln!("Warning: ignoring unknown argument '{}'", flag);
                    None
                }
            };

            if let Some(slot) = slot {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow!("{} requires a value", flag))?;
                *slot = value.clone();
                i += 1;
            }
            i += 1;
        }

        Ok(parsed)
    }
}

/// Parse a TIME argument relative to `now`.
///
/// Naive timestamps are read in `now`'s offset.
pub fn parse_time(input: &str, now: PickerValue) -> Result<PickerValue> {
    let input = input.trim();

    if let Some(rest) = input.strip_prefix("now") {
        if rest.is_empty() {
            return Ok(now);
        }
        let delta = parse_delta(rest).with_context(|| format!("invalid time '{}'", input))?;
        return now
            .checked_add_signed(delta)
            .ok_or_else(|| anyhow!("time '{}' is out of range", input));
    }

    if let Ok(t) = DateTime::parse_from_rfc3339(input) {
        return Ok(t);
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return now
                .offset()
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| anyhow!("time '{}' is ambiguous", input));
        }
    }

    bail!("invalid time '{}'", input)
}

fn parse_delta(s: &str) -> Result<TimeDelta> {
    let (sign, rest) = match s.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => bail!("expected '+' or '-' after 'now'"),
    };
    let unit_at = rest
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| anyhow!("missing unit (s, m, h or d)"))?;
    let (amount, unit) = rest.split_at(unit_at);
    let amount: i64 = amount.parse().context("missing amount")?;
    let amount = amount * sign;

    let delta = match unit {
        "s" => TimeDelta::try_seconds(amount),
        "m" => TimeDelta::try_minutes(amount),
        "h" => TimeDelta::try_hours(amount),
        "d" => TimeDelta::try_days(amount),
        other => bail!("unknown unit '{}'", other),
    };
    delta.ok_or_else(|| anyhow!("offset too large"))
}

/// Render the selected value for stdout.
pub fn format_output(value: PickerValue, format: Option<&str>) -> String {
    use std::fmt::Write;

    let Some(format) = format else {
        return value.to_rfc3339();
    };
    let mut out = String::new();
    match write!(out, "{}", value.format(format)) {
        Ok(()) => out,
        Err(_) => {
            eprintln!("Warning: invalid output format '{}', using RFC 3339", format);
            value.to_rfc3339()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> PickerValue {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn args(list: &[&str]) -> Result<Args> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&[
            "-m", "Start?", "--min", "now", "--max", "now+30d", "--scheduled", "--no-color",
        ])
        .unwrap();
        assert_eq!(parsed.message, "Start?");
        assert_eq!(parsed.min.as_deref(), Some("now"));
        assert_eq!(parsed.max.as_deref(), Some("now+30d"));
        assert!(parsed.default.is_none());
        assert!(parsed.scheduled);
        assert!(parsed.no_color);
        assert!(!parsed.show_usage);
    }

    #[test]
    fn test_parse_args_defaults_and_usage() {
        let parsed = args(&[]).unwrap();
        assert_eq!(parsed, Args::default());
        assert!(args(&["--help"]).unwrap().show_usage);
        assert!(args(&["--bogus"]).is_ok());
    }

    #[test]
    fn test_missing_value_is_error() {
        let err = args(&["--default"]).unwrap_err();
        assert_eq!(err.to_string(), "--default requires a value");
    }

    #[test]
    fn test_parse_time_forms() {
        let now = at("2024-05-01T08:00:00+02:00");
        assert_eq!(parse_time("now", now).unwrap(), now);
        assert_eq!(parse_time("now+30d", now).unwrap(), at("2024-05-31T08:00:00+02:00"));
        assert_eq!(parse_time("now-90m", now).unwrap(), at("2024-05-01T06:30:00+02:00"));
        assert_eq!(
            parse_time("2023-06-15T10:30:00Z", now).unwrap(),
            at("2023-06-15T10:30:00Z")
        );
        let naive = parse_time("2023-06-15 10:30:00", now).unwrap();
        assert_eq!(naive, at("2023-06-15T10:30:00+02:00"));
        assert_eq!(naive.offset(), now.offset());
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        let now = at("2024-05-01T08:00:00Z");
        assert!(parse_time("tomorrow", now).is_err());
        assert!(parse_time("now+5", now).is_err());
        assert!(parse_time("now*5d", now).is_err());
        assert!(parse_time("now+5w", now).is_err());
    }

    #[test]
    fn test_format_output() {
        let t = at("2024-06-15T10:30:01+00:00");
        assert_eq!(format_output(t, None), "2024-06-15T10:30:01+00:00");
        assert_eq!(format_output(t, Some("%Y/%m/%d %H:%M")), "2024/06/15 10:30");
    }
}
