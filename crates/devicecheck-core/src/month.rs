//! Calendar year/month values
//!
//! The attestation API reports the last update as a month with no day
//! component, formatted `YYYY-MM`. [`YearMonth`] is the parsed form; it orders
//! chronologically so "used this month" checks reduce to a comparison.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::{DeviceCheckError, Result};

/// A calendar year and month (no day)
///
/// Field order matters: the derived `Ord` compares year first, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Build from numeric parts. Fails if `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(DeviceCheckError::malformed(
                format!("{:04}-{:02}", year, month),
                format!("month {} out of range 1..=12", month),
            ));
        }
        Ok(Self { year, month })
    }

    /// Parse separate year and month tokens (`"2021"`, `"03"`).
    ///
    /// The year must be exactly four ASCII digits and the month exactly two.
    pub fn from_parts(year: &str, month: &str) -> Result<Self> {
        let value = format!("{}-{}", year, month);
        let year = parse_digits(&value, year, 4, "year")?;
        let month = parse_digits(&value, month, 2, "month")?;
        Self::new(year as i32, month).map_err(|_| {
            DeviceCheckError::malformed(value, format!("month {} out of range 1..=12", month))
        })
    }

    /// Month containing the given date
    pub fn from_date(date: &impl Datelike) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of this month, or `None` if the year is outside chrono's range
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// The following month, rolling the year over after December
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month, rolling the year back before January
    pub fn pred(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

fn parse_digits(value: &str, token: &str, width: usize, what: &str) -> Result<u32> {
    if token.len() != width || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DeviceCheckError::malformed(
            value,
            format!("{} must be {} digits, got '{}'", what, width, token),
        ));
    }
    token
        .parse()
        .map_err(|e| DeviceCheckError::malformed(value, format!("{}: {}", what, e)))
}

impl FromStr for YearMonth {
    type Err = DeviceCheckError;

    /// Parse a `YYYY-MM` string
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('-') {
            Some((year, month)) => Self::from_parts(year, month),
            None => Err(DeviceCheckError::malformed(s, "expected YYYY-MM")),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        let parsed: YearMonth = "2021-03".parse().unwrap();
        assert_eq!(parsed.year(), 2021);
        assert_eq!(parsed.month(), 3);
        assert_eq!(parsed.to_string(), "2021-03");
    }

    #[test]
    fn test_parse_month_out_of_range() {
        for input in ["2021-13", "2021-00"] {
            let err = input.parse::<YearMonth>().unwrap_err();
            assert!(
                matches!(err, DeviceCheckError::MalformedDate { .. }),
                "{} should be malformed, got {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_parse_non_numeric() {
        for input in ["2021-ab", "20x1-03", "2021-3", "21-03", "2021-+3", "202103", ""] {
            assert!(
                input.parse::<YearMonth>().is_err(),
                "{} should fail to parse",
                input
            );
        }
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(YearMonth::from_parts("2020", "12").unwrap(), ym(2020, 12));
        assert!(YearMonth::from_parts("2020", "13").is_err());
        assert!(YearMonth::from_parts("2020", "1.").is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(ym(2020, 12) < ym(2021, 1));
        assert!(ym(2021, 1) < ym(2021, 2));
        assert!(ym(2021, 3) == ym(2021, 3));
    }

    #[test]
    fn test_succ_and_pred_roll_over_year() {
        assert_eq!(ym(2020, 12).succ(), ym(2021, 1));
        assert_eq!(ym(2021, 1).pred(), ym(2020, 12));
        assert_eq!(ym(2021, 6).succ().pred(), ym(2021, 6));
    }

    #[test]
    fn test_from_date_and_first_day() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 17).unwrap();
        let month = YearMonth::from_date(&date);
        assert_eq!(month, ym(2021, 3));
        assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2021, 3, 1));
    }
}
