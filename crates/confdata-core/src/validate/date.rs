//! Calendar date grammar.
//!
//! Two spellings are accepted:
//! - `YYYY-MM-DD` (ISO 8601 calendar date, four-digit year);
//! - `DD/MM/YYYY` (day-first form found in older configuration files).
//!
//! Fields are fixed-width ASCII digits. The date must exist: `2023-02-29` is rejected.

use time::{Date, Month};

use crate::validate::Rejection;

/// Parses `raw` into a calendar date.
pub(crate) fn parse_date(raw: &str) -> Result<Date, Rejection> {
    let (year, month, day) = split_iso(raw)
        .or_else(|| split_day_first(raw))
        .ok_or(Rejection::NotADate)?;

    let month = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or(Rejection::NoSuchDate)?;
    let day = u8::try_from(day).map_err(|_| Rejection::NoSuchDate)?;

    Date::from_calendar_date(year, month, day).map_err(|_| Rejection::NoSuchDate)
}

fn split_iso(raw: &str) -> Option<(i32, u32, u32)> {
    let b = raw.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return None;
    }
    Some((
        digits(&b[0..4])? as i32,
        digits(&b[5..7])?,
        digits(&b[8..10])?,
    ))
}

fn split_day_first(raw: &str) -> Option<(i32, u32, u32)> {
    let b = raw.as_bytes();
    if b.len() != 10 || b[2] != b'/' || b[5] != b'/' {
        return None;
    }
    Some((
        digits(&b[6..10])? as i32,
        digits(&b[3..5])?,
        digits(&b[0..2])?,
    ))
}

fn digits(field: &[u8]) -> Option<u32> {
    field.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("2024-02-29"), Ok(date!(2024 - 02 - 29)));
        assert_eq!(parse_date("1999-12-31"), Ok(date!(1999 - 12 - 31)));
    }

    #[test]
    fn parses_day_first_dates() {
        assert_eq!(parse_date("29/02/2024"), Ok(date!(2024 - 02 - 29)));
        assert_eq!(parse_date("01/12/2010"), Ok(date!(2010 - 12 - 01)));
    }

    #[test]
    fn rejects_dates_that_do_not_exist() {
        let bad = [
            "2023-02-29",
            "2024-13-01",
            "2024-00-10",
            "2024-04-31",
            "2024-01-00",
            "1900-02-29",
            "31/04/2021",
            "01/13/2021",
        ];
        for input in bad {
            assert_eq!(parse_date(input), Err(Rejection::NoSuchDate), "{input:?}");
        }
    }

    #[test]
    fn rejects_other_spellings() {
        let bad = [
            "",
            "2024-2-29",
            "24-02-29",
            "2024/02/29",
            "2024-02-29T00:00:00",
            " 2024-02-29",
            "2024-02-29 ",
            "+202-02-29",
            "2024-0a-01",
            "1/2/2024",
            "2024.02.29",
            "today",
            "é024-02-29",
        ];
        for input in bad {
            assert_eq!(parse_date(input), Err(Rejection::NotADate), "{input:?}");
        }
    }
}
