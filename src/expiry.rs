//! Card expiry dates in the `MM/YY` form the expiry field produces.
//!
//! Years are kept as the two digits the user typed and compared numerically.
//! There is no century handling: `01/00` sorts before `12/99`, so a card
//! expiring in 2100 would read as expired in 2099. This matches what the form
//! shows the user and is a known limitation.
//!
//! # Example
//!
//! ```
//! use payform::expiry::{check_expiry, parse_expiry, YearMonth};
//! use payform::FieldError;
//!
//! let june_24 = YearMonth::new(24, 6).unwrap();
//! assert_eq!(parse_expiry("06/24"), Ok(june_24));
//!
//! assert!(check_expiry("06/24", june_24).is_ok());
//! assert_eq!(check_expiry("05/24", june_24), Err(FieldError::Expired));
//! assert_eq!(check_expiry("13/25", june_24), Err(FieldError::ExpiryFormat));
//! ```

use chrono::Datelike;
use std::fmt;
use std::str::FromStr;

use crate::error::{FieldError, FormError};

/// A month of a two-digit year.
///
/// Ordering compares the year first, then the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    /// Two-digit year (0-99)
    year: u8,
    /// Month (1-12)
    month: u8,
}

impl YearMonth {
    /// Creates a year/month pair.
    ///
    /// Returns `None` if the year is above 99 or the month is not 1-12.
    pub fn new(year: u8, month: u8) -> Option<Self> {
        if year > 99 || !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// Builds a pair from a calendar year, keeping its last two digits.
    pub fn from_calendar(year: i32, month: u32) -> Option<Self> {
        let year = u8::try_from(year.rem_euclid(100)).ok()?;
        let month = u8::try_from(month).ok()?;
        Self::new(year, month)
    }

    /// Returns the two-digit year.
    #[inline]
    pub const fn year(&self) -> u8 {
        self.year
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns true if this month is strictly before `today`.
    #[inline]
    pub fn is_before(&self, today: YearMonth) -> bool {
        *self < today
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}

/// Parses `YY-MM`, the form used to pin "today" from the command line.
impl FromStr for YearMonth {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormError::InvalidDate(s.to_string());

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 2 || month.is_empty() || month.len() > 2 {
            return Err(invalid());
        }
        let year: u8 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).ok_or_else(invalid)
    }
}

/// Source of the current month for expiry checks.
pub trait Clock {
    /// Returns the current year and month.
    fn today(&self) -> YearMonth;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> YearMonth {
        let now = chrono::Local::now();
        // The local clock always yields a month in 1-12.
        YearMonth::from_calendar(now.year(), now.month()).unwrap_or(YearMonth {
            year: 0,
            month: 1,
        })
    }
}

/// A clock stuck at one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub YearMonth);

impl Clock for FixedClock {
    fn today(&self) -> YearMonth {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> YearMonth {
        (**self).today()
    }
}

/// Parses a strict `MM/YY` expiry date.
///
/// The input must be exactly two digits, a slash and two digits, with the
/// month in 01-12. Surrounding whitespace is not accepted.
///
/// # Example
///
/// ```
/// use payform::expiry::parse_expiry;
/// use payform::FieldError;
///
/// assert_eq!(parse_expiry("12/30").unwrap().month(), 12);
/// assert_eq!(parse_expiry("1/30"), Err(FieldError::ExpiryFormat));
/// assert_eq!(parse_expiry("00/30"), Err(FieldError::ExpiryFormat));
/// ```
pub fn parse_expiry(input: &str) -> Result<YearMonth, FieldError> {
    match input.as_bytes() {
        [m1, m2, b'/', y1, y2] if [m1, m2, y1, y2].iter().all(|b| b.is_ascii_digit()) => {
            let month = (m1 - b'0') * 10 + (m2 - b'0');
            let year = (y1 - b'0') * 10 + (y2 - b'0');
            YearMonth::new(year, month).ok_or(FieldError::ExpiryFormat)
        }
        _ => Err(FieldError::ExpiryFormat),
    }
}

/// Validates an expiry date against the current month.
///
/// A card is good through the end of its expiry month, so only months
/// strictly before `today` are expired.
pub fn check_expiry(input: &str, today: YearMonth) -> Result<YearMonth, FieldError> {
    let expiry = parse_expiry(input)?;

    if expiry.is_before(today) {
        return Err(FieldError::Expired);
    }

    Ok(expiry)
}
