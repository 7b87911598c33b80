//! Calendar month value type used to label reporting periods.

use crate::error::MonthError;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use time::{Date, OffsetDateTime};

pub const MIN_YEAR: i32 = 888;
pub const MAX_YEAR: i32 = 9999;

/// October: the first month of the fiscal year unless told otherwise.
pub const DEFAULT_FISCAL_START: u8 = 10;

pub type Result<T> = std::result::Result<T, MonthError>;

/// A calendar year/month pair (not a duration).
///
/// Ordering is `(year, month)` lexicographic; all six comparison operators
/// come from the single derived `Ord`. Every operation returns a new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u8, // 1..=12
}

fn key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]{4})([0-9]{2})$").expect("static month key regex"))
}

fn positive_offset(n: i32) -> Result<i64> {
    if n <= 0 {
        return Err(MonthError::invalid(format!("month offset must be a positive integer, got {n}")));
    }
    Ok(n as i64)
}

fn check_start_month(start_month: u8) -> Result<()> {
    if !(1..=12).contains(&start_month) {
        return Err(MonthError::invalid(format!("fiscal start month must be 1..=12, got {start_month}")));
    }
    Ok(())
}

impl Month {
    /// Build a month, rejecting years outside 888..=9999 and months outside 1..=12.
    pub fn new(year: i32, month: i32) -> Result<Self> {
        Self::checked(year as i64, month as i64)
    }

    fn checked(year: i64, month: i64) -> Result<Self> {
        if !(MIN_YEAR as i64..=MAX_YEAR as i64).contains(&year) {
            return Err(MonthError::invalid(format!("year {year} outside {MIN_YEAR}..={MAX_YEAR}")));
        }
        if !(1..=12).contains(&month) {
            return Err(MonthError::invalid(format!("month {month} outside 1..=12")));
        }
        Ok(Self { year: year as i32, month: month as u8 })
    }

    /// The month containing today's date, read once from the system clock.
    /// Uses the local offset when it can be determined, UTC otherwise.
    pub fn current() -> Result<Self> {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self::from_date(now.date())
    }

    /// The month containing `date`.
    pub fn from_date(date: Date) -> Result<Self> {
        Self::checked(date.year() as i64, u8::from(date.month()) as i64)
    }

    /// Parse a 6-digit `YYYYMM` key.
    pub fn from_key(key: &str) -> Result<Self> {
        let caps = key_regex()
            .captures(key)
            .ok_or_else(|| MonthError::invalid(format!("month key must be 6 digits YYYYMM, got {key:?}")))?;
        // both groups are ASCII digits of bounded length
        let year: i64 = caps[1].parse().map_err(|_| MonthError::invalid(format!("bad year in key {key:?}")))?;
        let month: i64 = caps[2].parse().map_err(|_| MonthError::invalid(format!("bad month in key {key:?}")))?;
        Self::checked(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// Canonical `YYYYMM` key, e.g. `201809`.
    pub fn to_key(&self) -> String {
        format!("{:04}{:02}", self.year, self.month)
    }

    fn calendar_month(&self) -> time::Month {
        time::Month::January.nth_next(self.month - 1)
    }

    fn date_on(&self, day: u8) -> Date {
        // year and month are range-checked on construction, day by the callers
        Date::from_calendar_date(self.year, self.calendar_month(), day)
            .expect("validated month always maps to a calendar date")
    }

    pub fn first_day(&self) -> Date {
        self.date_on(1)
    }

    /// Last calendar day of the month (28..=31, leap-year aware).
    pub fn last_day(&self) -> Date {
        self.date_on(self.calendar_month().length(self.year))
    }

    /// The month `n` months after this one. `n` must be positive.
    pub fn add(self, n: i32) -> Result<Self> {
        let n = positive_offset(n)?;
        let zero_based = n + self.month as i64 - 1;
        Self::checked(self.year as i64 + zero_based / 12, zero_based % 12 + 1)
    }

    /// The month `n` months before this one. `n` must be positive.
    pub fn subtract(self, n: i32) -> Result<Self> {
        let n = positive_offset(n)?;
        let year_offset = n / 12;
        let month_offset = n % 12;
        let month = self.month as i64;
        let year = self.year as i64;

        let (year, month) = if month > month_offset {
            (year - year_offset, month - month_offset)
        } else if month == month_offset {
            // lands exactly on the previous December
            (year - year_offset - 1, 12)
        } else {
            (year - year_offset - 1, month + 12 - month_offset)
        };
        Self::checked(year, month)
    }

    /// Following month, `None` past year 9999.
    pub fn next(self) -> Option<Self> {
        if self.month < 12 {
            Some(Self { year: self.year, month: self.month + 1 })
        } else if self.year < MAX_YEAR {
            Some(Self { year: self.year + 1, month: 1 })
        } else {
            None
        }
    }

    /// Preceding month, `None` before year 888.
    pub fn prev(self) -> Option<Self> {
        if self.month > 1 {
            Some(Self { year: self.year, month: self.month - 1 })
        } else if self.year > MIN_YEAR {
            Some(Self { year: self.year - 1, month: 12 })
        } else {
            None
        }
    }

    /// Relabel with the fiscal year, using an October start.
    pub fn as_fiscal_year(self) -> Result<Self> {
        self.as_fiscal_year_from(DEFAULT_FISCAL_START)
    }

    /// Relabel with the fiscal year whose first month is `start_month`.
    /// Months from `start_month` onwards belong to the next year's label.
    /// Fails when that label would pass year 9999.
    pub fn as_fiscal_year_from(self, start_month: u8) -> Result<Self> {
        check_start_month(start_month)?;
        if self.month >= start_month {
            Self::checked(self.year as i64 + 1, self.month as i64)
        } else {
            Ok(self)
        }
    }

    /// Relabel a fiscal-year month with its calendar year, using an October start.
    pub fn as_calendar_year(self) -> Result<Self> {
        self.as_calendar_year_from(DEFAULT_FISCAL_START)
    }

    /// Inverse of [`Month::as_fiscal_year_from`] for the same `start_month`.
    /// Fails when the calendar year would fall below 888.
    pub fn as_calendar_year_from(self, start_month: u8) -> Result<Self> {
        check_start_month(start_month)?;
        if self.month >= start_month {
            Self::checked(self.year as i64 - 1, self.month as i64)
        } else {
            Ok(self)
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = MonthError;
    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s.trim())
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_key())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Month::from_key(&key).map_err(de::Error::custom)
    }
}

/// Inclusive iteration from `start` to `end` (if `start` <= `end`), else empty.
pub fn iter_months(start: Month, end: Month) -> impl Iterator<Item = Month> {
    let mut curr = if start <= end { Some(start) } else { None };
    std::iter::from_fn(move || {
        let ret = curr?;
        curr = ret.next().filter(|n| *n <= end);
        Some(ret)
    })
}
