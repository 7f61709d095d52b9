/*
[INPUT]:  User-entered deadline text and the configured display zone
[OUTPUT]: Canonical UTC timestamp plus a display-only local rendering
[POS]:    Timestamp normalizer - the only place local time is interpreted
[UPDATE]: When accepted input formats or display formatting change
*/

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use thiserror::Error;
use todo_adapter::{parse_iso_string, to_iso_string};
use tracing::debug;

/// India Standard Time, UTC+05:30
pub const DEFAULT_OFFSET_MINUTES: i32 = 5 * 60 + 30;
pub const DEFAULT_ZONE_LABEL: &str = "IST";

/// Format used to pre-fill deadline inputs
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeadlineError {
    #[error("deadline is empty")]
    Empty,
    #[error("unrecognized date/time '{0}', expected YYYY-MM-DDTHH:MM")]
    Unparseable(String),
    #[error("UTC offset of {0} minutes is out of range")]
    InvalidOffset(i32),
}

/// Fixed-offset zone used to read input and render previews
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayZone {
    offset: FixedOffset,
    label: String,
}

impl DisplayZone {
    pub fn new(offset_minutes: i32, label: impl Into<String>) -> Result<Self, DeadlineError> {
        let offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(DeadlineError::InvalidOffset(offset_minutes))?;
        Ok(Self {
            offset,
            label: label.into(),
        })
    }

    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
            label: "UTC".to_string(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// `UTC+05:30` style name of the offset
    pub fn offset_name(&self) -> String {
        let total = self.offset.local_minus_utc();
        let sign = if total < 0 { '-' } else { '+' };
        let minutes = total.abs() / 60;
        format!("UTC{sign}{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self::new(DEFAULT_OFFSET_MINUTES, DEFAULT_ZONE_LABEL).unwrap_or_else(|_| Self::utc())
    }
}

/// A deadline in both of its renderings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDeadline {
    pub instant: DateTime<Utc>,
    /// What goes on the wire
    pub canonical: String,
    /// What the user sees; never submitted
    pub display: String,
}

/// Read a deadline typed by the user.
///
/// Naive values are taken to be wall-clock time in `zone`; values carrying
/// their own offset are used as-is.
pub fn parse_input(input: &str, zone: &DisplayZone) -> Result<DateTime<Utc>, DeadlineError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DeadlineError::Empty);
    }
    if let Some(instant) = parse_iso_string(input) {
        return Ok(instant);
    }

    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .ok_or_else(|| DeadlineError::Unparseable(input.to_string()))?;

    zone.offset
        .from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| DeadlineError::Unparseable(input.to_string()))
}

pub fn normalize(input: &str, zone: &DisplayZone) -> Result<NormalizedDeadline, DeadlineError> {
    let instant = parse_input(input, zone)?;
    let normalized = NormalizedDeadline {
        instant,
        canonical: to_iso_string(&instant),
        display: display(&instant, zone),
    };
    debug!(
        utc = %normalized.canonical,
        local = %normalized.display,
        "deadline normalized"
    );
    Ok(normalized)
}

/// Human-readable rendering, e.g. `16 Feb 2025, 08:25 PM IST (UTC+05:30)`
pub fn display(instant: &DateTime<Utc>, zone: &DisplayZone) -> String {
    let local = instant.with_timezone(&zone.offset);
    format!(
        "{} {} ({})",
        local.format("%d %b %Y, %I:%M %p"),
        zone.label,
        zone.offset_name()
    )
}

/// Value suitable for pre-filling an input, in the zone's wall-clock time
pub fn input_value(instant: &DateTime<Utc>, zone: &DisplayZone) -> String {
    instant.with_timezone(&zone.offset).format(INPUT_FORMAT).to_string()
}

/// Default deadline: `now` truncated to the minute
pub fn default_input_value(now: DateTime<Utc>, zone: &DisplayZone) -> String {
    let truncated = now
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);
    input_value(&truncated, zone)
}
