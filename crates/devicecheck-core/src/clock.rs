//! Sources for the "current month"

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::config::ReferenceTimeConfig;
use crate::error::Result;
use crate::month::YearMonth;

/// Supplies the current month in the reference time zone.
///
/// Callers should sample once per authorization decision and reuse the value,
/// so checks straddling a month boundary stay consistent.
pub trait MonthSource {
    fn current_month(&self) -> YearMonth;
}

/// Wall clock shifted into a fixed reference offset
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Clock in UTC
    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    pub fn from_config(config: &ReferenceTimeConfig) -> Result<Self> {
        Ok(Self::new(config.offset()?))
    }

    /// Month containing `instant` in this clock's reference offset
    pub fn month_of(&self, instant: DateTime<Utc>) -> YearMonth {
        YearMonth::from_date(&instant.with_timezone(&self.offset))
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl MonthSource for SystemClock {
    fn current_month(&self) -> YearMonth {
        self.month_of(Utc::now())
    }
}

/// Always reports the same month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMonth(pub YearMonth);

impl MonthSource for FixedMonth {
    fn current_month(&self) -> YearMonth {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_of_respects_offset() {
        // 2021-02-28 23:30 UTC is already March one hour east
        let instant = Utc.with_ymd_and_hms(2021, 2, 28, 23, 30, 0).unwrap();

        let utc = SystemClock::utc();
        assert_eq!(utc.month_of(instant), YearMonth::new(2021, 2).unwrap());

        let cet = SystemClock::from_config(&ReferenceTimeConfig::new(60).unwrap()).unwrap();
        assert_eq!(cet.month_of(instant), YearMonth::new(2021, 3).unwrap());
    }

    #[test]
    fn test_negative_offset_rolls_back_year() {
        let instant = Utc.with_ymd_and_hms(2021, 1, 1, 2, 0, 0).unwrap();
        let est = SystemClock::new(FixedOffset::west_opt(5 * 3600).unwrap());
        assert_eq!(est.month_of(instant), YearMonth::new(2020, 12).unwrap());
    }

    #[test]
    fn test_fixed_month() {
        let march = YearMonth::new(2021, 3).unwrap();
        assert_eq!(FixedMonth(march).current_month(), march);
    }
}
