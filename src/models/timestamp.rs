use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO-8601 timestamp as it appears in the dataset.
///
/// The raw string is kept so a malformed value never poisons a whole payload;
/// it is parsed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into an instant.
    ///
    /// Accepts RFC 3339 with an offset, a naive date-time (read as local
    /// time) or a bare date (read as UTC midnight).
    pub fn parse(&self) -> Option<DateTime<Utc>> {
        let raw = self.0.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Local
                    .from_local_datetime(&naive)
                    .earliest()
                    .map(|dt| dt.with_timezone(&Utc));
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Self(dt.with_timezone(&Utc).to_rfc3339())
    }
}

/// One local calendar day: `[midnight, next midnight)` on this machine's clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DayWindow {
    /// The local day we are in right now.
    pub fn today() -> Self {
        Self::containing(Local::now())
    }

    pub fn containing(now: DateTime<Local>) -> Self {
        Self::for_date(now.date_naive())
    }

    pub fn for_date(date: NaiveDate) -> Self {
        let next = date.succ_opt().unwrap_or(date);
        Self {
            start: local_midnight(date),
            end: local_midnight(next),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn contains(&self, ts: &Timestamp) -> bool {
        ts.parse()
            .map(|instant| instant >= self.start && instant < self.end)
            .unwrap_or(false)
    }
}

/// Start of `date` in local time. Zones that skip midnight on a DST switch
/// get the first valid instant of that day.
fn local_midnight(date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(chrono::NaiveTime::MIN);

    (0..24)
        .filter_map(|hour| {
            Local
                .from_local_datetime(&(midnight + Duration::hours(hour)))
                .earliest()
        })
        .next()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}
