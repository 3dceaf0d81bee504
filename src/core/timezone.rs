use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

/// India Standard Time (UTC+05:30), the storefront's business timezone
pub const IST_OFFSET_MINUTES: i32 = 330;

/// Largest offset chrono accepts for a fixed zone
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Timezone used when rendering timestamps to the operator
///
/// All timestamps are held as UTC; conversion happens only at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayZone {
    offset: FixedOffset,
}

impl DisplayZone {
    /// Build a zone from an offset east of UTC, in minutes
    pub fn from_offset_minutes(minutes: i32) -> Result<Self, String> {
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
            return Err(format!(
                "UTC offset {} minutes is outside +/-{} minutes",
                minutes, MAX_OFFSET_MINUTES
            ));
        }
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(|offset| Self { offset })
            .ok_or_else(|| format!("Invalid UTC offset: {} minutes", minutes))
    }

    pub fn ist() -> Self {
        Self::from_offset_minutes(IST_OFFSET_MINUTES).unwrap_or_else(|_| Self::utc())
    }

    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    pub fn convert(&self, utc_time: DateTime<Utc>) -> DateTime<FixedOffset> {
        utc_time.with_timezone(&self.offset)
    }

    /// Short operator-facing rendering, e.g. `2025-11-01 15:30 +05:30`
    pub fn format(&self, utc_time: DateTime<Utc>) -> String {
        self.convert(utc_time).format("%Y-%m-%d %H:%M %:z").to_string()
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self::ist()
    }
}

/// Parse a timestamp as the storefront API emits it
///
/// Accepts RFC 3339 (`2025-11-01T10:00:00.000Z`), naive ISO datetimes (treated as UTC)
/// and epoch milliseconds given as a string.
pub fn parse_api_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    raw.parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
}
