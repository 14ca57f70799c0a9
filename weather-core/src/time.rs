//! Display formatting for the timestamps HKO puts in its documents.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

const DISPLAY_FORMAT: &str = "%H:%M HKT %d/%m/%Y";

/// Render an ISO-8601 timestamp as `HH:MM HKT DD/MM/YYYY`.
///
/// The wall-clock time is shown as written in the source, whatever its
/// offset. Input that does not parse is returned unchanged; a missing value
/// becomes an empty string.
pub fn normalize(raw: Option<&str>) -> String {
    raw.map(normalize_str).unwrap_or_default()
}

pub fn normalize_str(raw: &str) -> String {
    match parse_iso(raw) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// `<date>[<sep><time>[<offset>]]`, where the separator is any single character.
///
/// Dates are `YYYY-MM-DD` or `YYYYMMDD`. Times are `HH`, `HH:MM`, `HH:MM:SS[.f]`
/// or the compact `HHMM`, `HHMMSS[.f]`. Offsets are `Z` or a signed `HH`,
/// `HHMM`, `HH:MM` or `HH:MM:SS`.
fn parse_iso(raw: &str) -> Option<NaiveDateTime> {
    let (date, rest) = split_date(raw)?;

    let Some(sep) = rest.chars().next() else {
        return date.and_hms_opt(0, 0, 0);
    };
    let rest = &rest[sep.len_utf8()..];

    let (clock, offset) = match rest.find(['+', '-', 'Z']) {
        Some(idx) => (&rest[..idx], Some(&rest[idx..])),
        None => (rest, None),
    };
    let local = date.and_time(parse_time(clock)?);

    match offset {
        Some(offset) => parse_offset(offset)?
            .from_local_datetime(&local)
            .single()
            .map(|dt| dt.naive_local()),
        None => Some(local),
    }
}

fn split_date(raw: &str) -> Option<(NaiveDate, &str)> {
    let extended = raw.get(4..5) == Some("-");
    let len = if extended { 10 } else { 8 };
    let date = raw.get(..len).filter(|d| d.is_ascii())?;

    let (year, month, day) = if extended {
        if &date[7..8] != "-" {
            return None;
        }
        (&date[..4], &date[5..7], &date[8..10])
    } else {
        (&date[..4], &date[4..6], &date[6..8])
    };

    let date = NaiveDate::from_ymd_opt(
        i32::try_from(digits(year)?).ok()?,
        digits(month)?,
        digits(day)?,
    )?;
    Some((date, &raw[len..]))
}

fn parse_time(clock: &str) -> Option<NaiveTime> {
    let (hms, fraction) = match clock.find(['.', ',']) {
        Some(idx) => (&clock[..idx], Some(&clock[idx + 1..])),
        None => (clock, None),
    };

    let fields = two_digit_fields(hms)?;
    let nanos = match fraction {
        // A fraction only follows seconds.
        Some(_) if fields.len() != 3 => return None,
        Some(frac) if (1..=9).contains(&frac.len()) => {
            digits(frac)? * 10u32.pow(9 - frac.len() as u32)
        }
        Some(_) => return None,
        None => 0,
    };

    let field = |i: usize| fields.get(i).copied().unwrap_or(0);
    NaiveTime::from_hms_nano_opt(field(0), field(1), field(2), nanos)
}

fn parse_offset(offset: &str) -> Option<FixedOffset> {
    if offset == "Z" {
        return FixedOffset::east_opt(0);
    }

    let sign = match offset.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let fields = two_digit_fields(&offset[1..])?;
    if fields.iter().skip(1).any(|v| *v >= 60) {
        return None;
    }

    let secs = fields
        .iter()
        .zip([3600, 60, 1])
        .map(|(v, unit)| *v as i32 * unit)
        .sum::<i32>();
    FixedOffset::east_opt(sign * secs)
}

/// One to three two-digit fields, either `:`-separated or run together.
fn two_digit_fields(s: &str) -> Option<Vec<u32>> {
    if !s.is_ascii() {
        return None;
    }

    let parts: Vec<&str> = if s.contains(':') {
        s.split(':').collect()
    } else if s.len() % 2 == 0 {
        (0..s.len()).step_by(2).map(|i| &s[i..i + 2]).collect()
    } else {
        return None;
    };

    if parts.is_empty() || parts.len() > 3 || parts.iter().any(|p| p.len() != 2) {
        return None;
    }
    parts.into_iter().map(digits).collect()
}

fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_offset_timestamp() {
        assert_eq!(normalize_str("2024-01-15T14:30:00+08:00"), "14:30 HKT 15/01/2024");
    }

    #[test]
    fn keeps_wall_clock_of_foreign_offsets() {
        assert_eq!(normalize_str("2024-01-15T06:30:00Z"), "06:30 HKT 15/01/2024");
        assert_eq!(normalize_str("2024-07-01T23:05:30.250-05:00"), "23:05 HKT 01/07/2024");
    }

    #[test]
    fn accepts_naive_and_date_only_forms() {
        assert_eq!(normalize_str("2024-01-15T14:30:00"), "14:30 HKT 15/01/2024");
        assert_eq!(normalize_str("2024-01-15T14:30"), "14:30 HKT 15/01/2024");
        assert_eq!(normalize_str("2024-01-15 09:05:00"), "09:05 HKT 15/01/2024");
        assert_eq!(normalize_str("2024-01-15"), "00:00 HKT 15/01/2024");
        assert_eq!(normalize_str("2024-01-15T14:30+08:00"), "14:30 HKT 15/01/2024");
        assert_eq!(normalize_str("2024-01-15T14"), "14:00 HKT 15/01/2024");
        assert_eq!(normalize_str("20240115T143000"), "14:30 HKT 15/01/2024");
        assert_eq!(normalize_str("20240115"), "00:00 HKT 15/01/2024");
        assert_eq!(normalize_str("2024-01-15T1430"), "14:30 HKT 15/01/2024");
    }

    #[test]
    fn accepts_basic_and_hour_only_offsets() {
        assert_eq!(normalize_str("2024-01-15T14:30:00+0800"), "14:30 HKT 15/01/2024");
        assert_eq!(normalize_str("2024-01-15T14:30:00+08"), "14:30 HKT 15/01/2024");
        assert_eq!(normalize_str("2024-01-15T14:30:00-03:30"), "14:30 HKT 15/01/2024");
        assert_eq!(normalize_str("20240115T143000+0800"), "14:30 HKT 15/01/2024");
        assert_eq!(normalize_str("2024-01-15T14:30:00,5+08:00"), "14:30 HKT 15/01/2024");
    }

    #[test]
    fn invalid_input_passes_through() {
        assert_eq!(normalize_str("not-a-date"), "not-a-date");
        assert_eq!(normalize_str(""), "");
        assert_eq!(normalize_str("2024-13-45T99:00:00+08:00"), "2024-13-45T99:00:00+08:00");
        assert_eq!(normalize_str(" 2024-01-15T14:30:00+08:00"), " 2024-01-15T14:30:00+08:00");
        assert_eq!(normalize_str("2024-01-15T14:30:00+08:00 "), "2024-01-15T14:30:00+08:00 ");
        assert_eq!(normalize_str("2024-01-15T14:3"), "2024-01-15T14:3");
        assert_eq!(normalize_str("2024-01-15T14:30:00+24:00"), "2024-01-15T14:30:00+24:00");
        assert_eq!(normalize_str("2024-01-15T14:30+08:75"), "2024-01-15T14:30+08:75");
        assert_eq!(normalize_str("2024-01-15T14:30.5"), "2024-01-15T14:30.5");
    }

    #[test]
    fn absent_input_is_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
    }
}
