/*
[INPUT]:  UTC instants
[OUTPUT]: Canonical ISO-8601 strings (millisecond precision, trailing Z)
[POS]:    Data layer - the single wire format for timestamps
[UPDATE]: When the API changes its timestamp format
*/

use chrono::{DateTime, SecondsFormat, Utc};

/// Format an instant the way the API expects: `2025-02-16T14:55:00.000Z`.
pub fn to_iso_string(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 timestamp with any offset into UTC.
pub fn parse_iso_string(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Serde adapter for `DateTime<Utc>` fields using [`to_iso_string`].
pub mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_iso_string(instant))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_iso_string(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_iso_string_has_millis_and_z() {
        let instant = Utc.with_ymd_and_hms(2025, 2, 16, 14, 55, 0).unwrap();
        assert_eq!(to_iso_string(&instant), "2025-02-16T14:55:00.000Z");
    }

    #[test]
    fn test_parse_offset_timestamp_into_utc() {
        let parsed = parse_iso_string("2025-02-16T20:25:00+05:30").expect("parse");
        assert_eq!(to_iso_string(&parsed), "2025-02-16T14:55:00.000Z");
    }

    #[test]
    fn test_parse_rejects_naive_timestamp() {
        assert!(parse_iso_string("2025-02-16T20:25").is_none());
        assert!(parse_iso_string("").is_none());
    }
}
