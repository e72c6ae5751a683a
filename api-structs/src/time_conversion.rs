use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone};

// Python's isoformat() with and without microseconds, plus the space separated variant
const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];
const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// Which wall clock an instant is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalTime {
    /// A single offset for every instant, JS `getTimezoneOffset()` sign: UTC minus local.
    FixedOffsetMinutes(i64),
    /// The machine's (or browser's) timezone, looked up for each instant so DST is honoured.
    System,
}

impl LocalTime {
    pub fn utc_to_local(&self, utc: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            LocalTime::FixedOffsetMinutes(offset_minutes) => {
                utc_to_local_date(utc, *offset_minutes)
            }
            LocalTime::System => Some(Local.from_utc_datetime(&utc).naive_local()),
        }
    }
}

/// `offset_minutes` follows the JS `Date.getTimezoneOffset()` sign: UTC minus local.
pub fn utc_to_local_date(utc: NaiveDateTime, offset_minutes: i64) -> Option<NaiveDateTime> {
    utc.checked_sub_signed(Duration::minutes(offset_minutes))
}

/// Parses a date coming from the API into local wall clock time.
///
/// Strings carrying an offset are moved to UTC and then to `local_time`. Naive
/// strings are already local, the same way a browser reads them. A bare date is
/// local midnight. Anything else yields `None`.
pub fn parse_local_date_time(raw: &str, local_time: &LocalTime) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return local_time.utc_to_local(with_offset.naive_utc());
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(local) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(local);
        }
    }
    NaiveDate::parse_from_str(raw, DATE_ONLY_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod test {
    use crate::time_conversion::{parse_local_date_time, LocalTime};
    use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};

    const UTC: LocalTime = LocalTime::FixedOffsetMinutes(0);

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn python_isoformat_is_local_time() {
        let parsed =
            parse_local_date_time("2024-03-05T10:22:33.123456", &LocalTime::FixedOffsetMinutes(300))
                .unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(parsed.format("%H:%M:%S").to_string(), "10:22:33");
        assert_eq!(
            parse_local_date_time("2024-03-05T10:22:33", &UTC),
            Some(at(2024, 3, 5, 10, 22, 33))
        );
        assert_eq!(
            parse_local_date_time("2024-03-05 10:22:33", &LocalTime::System),
            Some(at(2024, 3, 5, 10, 22, 33))
        );
    }

    #[test]
    fn offset_strings_are_moved_to_local_time() {
        // UTC+2 has a JS offset of -120
        assert_eq!(
            parse_local_date_time("2023-12-31T23:30:00Z", &LocalTime::FixedOffsetMinutes(-120)),
            Some(at(2024, 1, 1, 1, 30, 0))
        );
        assert_eq!(
            parse_local_date_time("2024-01-01T01:30:00+02:00", &UTC),
            Some(at(2023, 12, 31, 23, 30, 0))
        );
    }

    #[test]
    fn system_time_uses_the_offset_of_each_instant() {
        for utc in [at(2024, 1, 15, 12, 0, 0), at(2024, 7, 15, 12, 0, 0)] {
            let expected = Local.from_utc_datetime(&utc).naive_local();
            let raw = format!("{}Z", utc.format("%Y-%m-%dT%H:%M:%S"));
            assert_eq!(
                parse_local_date_time(&raw, &LocalTime::System),
                Some(expected),
                "{raw}"
            );
        }
    }

    #[test]
    fn bare_date_is_local_midnight() {
        assert_eq!(
            parse_local_date_time(" 2024-02-29 ", &LocalTime::FixedOffsetMinutes(480)),
            Some(at(2024, 2, 29, 0, 0, 0))
        );
        assert_eq!(
            parse_local_date_time("2024-02-29", &LocalTime::System),
            Some(at(2024, 2, 29, 0, 0, 0))
        );
    }

    #[test]
    fn garbage_is_rejected() {
        for raw in ["", "   ", "yesterday", "2024-02-30", "2024-13-01", "12/03/2024"] {
            assert_eq!(parse_local_date_time(raw, &UTC), None, "{raw:?} should not parse");
        }
    }
}
