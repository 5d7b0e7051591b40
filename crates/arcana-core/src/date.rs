//! Date parsing and the running-year rule.

use chrono::format::ParseErrorKind;
use chrono::{Datelike, Local, NaiveDate};

use crate::error::{ArcanaError, ArcanaResult, check_range};

/// Primary input format, e.g. `19/07/1977`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";
/// Accepted fallback, e.g. `1977-07-19`.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Earliest accepted year.
pub const MIN_YEAR: i32 = 1;
/// Latest accepted year.
pub const MAX_YEAR: i32 = 9999;

/// Parse a `DD/MM/YYYY` date, falling back to `YYYY-MM-DD`.
///
/// Unpadded days and months (`1/7/1977`) are accepted.
pub fn parse_date(input: &str) -> ArcanaResult<NaiveDate> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ArcanaError::invalid_date(input, "date is empty"));
    }

    let parsed = NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(|date| (date, year_field(text, '/', false)))
        .or_else(|primary| {
            NaiveDate::parse_from_str(text, ISO_FORMAT)
                .map(|date| (date, year_field(text, '-', true)))
                .map_err(|iso| (primary, iso))
        });

    let date = match parsed {
        Ok((date, year)) if is_four_digits(year) => date,
        Ok(_) => return Err(ArcanaError::invalid_date(input, "the year must have four digits")),
        Err((primary, iso)) => {
            let impossible = |kind: ParseErrorKind| {
                matches!(kind, ParseErrorKind::OutOfRange | ParseErrorKind::Impossible)
            };
            let reason = if impossible(primary.kind()) || impossible(iso.kind()) {
                "no such calendar day"
            } else {
                "expected DD/MM/YYYY, for example 19/07/1977"
            };
            return Err(ArcanaError::invalid_date(input, reason));
        }
    };

    check_range(
        "year",
        i64::from(date.year()),
        i64::from(MIN_YEAR),
        i64::from(MAX_YEAR),
    )?;
    Ok(date)
}

/// The year field of a date that already parsed: the last `/` field, or the
/// first `-` field for ISO text.
fn year_field(text: &str, separator: char, leading: bool) -> &str {
    let mut fields = text.split(separator);
    let field = if leading { fields.next() } else { fields.next_back() };
    field.unwrap_or_default()
}

fn is_four_digits(field: &str) -> bool {
    field.len() == 4 && field.bytes().all(|b| b.is_ascii_digit())
}

/// Render a date the way it is entered.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The current local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The year of the most recent birthday on or before `reference`.
///
/// Compares (month, day) pairs, so a 29 February birthday counts as passed
/// from 1 March in common years.
pub fn effective_running_year(birth: NaiveDate, reference: NaiveDate) -> i32 {
    let birthday = (birth.month(), birth.day());
    let current = (reference.month(), reference.day());
    if current >= birthday {
        reference.year()
    } else {
        reference.year() - 1
    }
}

/// First day of a calendar month, validating both parts.
pub fn first_of_month(year: i32, month: u32) -> ArcanaResult<NaiveDate> {
    check_range(
        "year",
        i64::from(year),
        i64::from(MIN_YEAR),
        i64::from(MAX_YEAR),
    )?;
    check_range("month", i64::from(month), 1, 12)?;
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ArcanaError::invalid_date(&format!("{year}-{month:02}"), "no such month"))
}

/// Number of days in a calendar month.
pub fn days_in_month(first: NaiveDate) -> u32 {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_day_month_year() {
        assert_eq!(parse_date("21/06/1961").unwrap(), ymd(1961, 6, 21));
        assert_eq!(parse_date(" 1/7/1977 ").unwrap(), ymd(1977, 7, 1));
    }

    #[test]
    fn parses_iso_fallback() {
        assert_eq!(parse_date("1977-07-19").unwrap(), ymd(1977, 7, 19));
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_date("yesterday").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("DD/MM/YYYY"));

        assert!(parse_date("").is_err());
        assert!(parse_date("19-07-1977").is_err());
    }

    #[test]
    fn rejects_impossible_days() {
        let err = parse_date("31/02/2001").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("no such calendar day"));

        assert!(parse_date("29/02/2023").is_err());
        assert!(parse_date("29/02/2024").is_ok());
        assert!(parse_date("12/13/2000").is_err());
    }

    #[test]
    fn rejects_short_and_long_years() {
        for text in ["19/07/77", "19/07/197", "1/1/1", "77-07-19"] {
            let err = parse_date(text).unwrap_err();
            assert!(err.is_validation(), "{text}");
            assert!(err.to_string().contains("four digits"), "{text}");
        }
        assert!(parse_date("19/07/01977").is_err());
        assert_eq!(parse_date("0977-07-19").unwrap(), ymd(977, 7, 19));
    }

    #[test]
    fn rejects_year_zero() {
        let err = parse_date("01/01/0000").unwrap_err();
        assert!(matches!(err, ArcanaError::OutOfRange { field: "year", .. }));
    }

    #[test]
    fn formats_like_input() {
        assert_eq!(format_date(ymd(1977, 7, 9)), "09/07/1977");
    }

    #[test]
    fn running_year_turns_on_birthday() {
        let birth = ymd(1961, 6, 21);
        assert_eq!(effective_running_year(birth, ymd(2024, 6, 20)), 2023);
        assert_eq!(effective_running_year(birth, ymd(2024, 6, 21)), 2024);
        assert_eq!(effective_running_year(birth, ymd(2024, 12, 31)), 2024);
        assert_eq!(effective_running_year(birth, ymd(2024, 1, 1)), 2023);
    }

    #[test]
    fn leap_day_birthday() {
        let birth = ymd(2000, 2, 29);
        assert_eq!(effective_running_year(birth, ymd(2023, 2, 28)), 2022);
        assert_eq!(effective_running_year(birth, ymd(2023, 3, 1)), 2023);
        assert_eq!(effective_running_year(birth, ymd(2024, 2, 29)), 2024);
    }

    #[test]
    fn month_bounds() {
        assert_eq!(first_of_month(2025, 8).unwrap(), ymd(2025, 8, 1));
        assert!(first_of_month(2025, 0).is_err());
        assert!(first_of_month(2025, 13).is_err());
        assert!(first_of_month(0, 1).is_err());
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(ymd(2025, 8, 1)), 31);
        assert_eq!(days_in_month(ymd(2025, 2, 1)), 28);
        assert_eq!(days_in_month(ymd(2024, 2, 1)), 29);
        assert_eq!(days_in_month(ymd(2025, 12, 1)), 31);
        assert_eq!(days_in_month(ymd(2025, 4, 1)), 30);
    }
}
