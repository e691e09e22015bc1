//! Epiweek (MMWR year+week) arithmetic.
//!
//! An epiweek is encoded as `year * 100 + week`, e.g. `201740` is week 40 of
//! 2017. Years follow the CDC convention: most years have 52 epiweeks, but
//! years with `year % 28` in {4, 9, 15, 20, 26} have 53. The encoding is only
//! defined for 1900..2100.
//!
//! Flu seasons span epiweek 40 of one year through epiweek 20 of the next;
//! weeks 21..39 are the offseason.

use serde::{Deserialize, Serialize};

/// Errors from epiweek construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EpiweekError {
    /// The `yyyyww` value does not name a real epiweek.
    #[error("invalid epiweek: {0}")]
    Invalid(i32),
    /// The year is outside 1900..2100, where the 52/53-week rule is defined.
    #[error("epiweek count undefined for year {0}")]
    YearOutOfRange(i32),
}

/// Number of epiweeks in the given year.
pub fn num_weeks(year: i32) -> Result<u32, EpiweekError> {
    if !(1900..2100).contains(&year) {
        return Err(EpiweekError::YearOutOfRange(year));
    }
    match year % 28 {
        4 | 9 | 15 | 20 | 26 => Ok(53),
        _ => Ok(52),
    }
}

/// A validated epiweek in the `yyyyww` encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Epiweek(i32);

impl Epiweek {
    /// Validate a `yyyyww` value.
    pub fn new(epiweek: i32) -> Result<Self, EpiweekError> {
        let (year, week) = (epiweek / 100, epiweek % 100);
        let weeks_in_year = num_weeks(year).map_err(|_| EpiweekError::Invalid(epiweek))?;
        if week < 1 || week as u32 > weeks_in_year {
            return Err(EpiweekError::Invalid(epiweek));
        }
        Ok(Self(epiweek))
    }

    /// Build from a (year, week) pair.
    pub fn from_parts(year: i32, week: u32) -> Result<Self, EpiweekError> {
        Self::new(year * 100 + week as i32)
    }

    /// The raw `yyyyww` value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Calendar year of the encoding (not the season year).
    pub fn year(self) -> i32 {
        self.0 / 100
    }

    /// Week within the year, 1-based.
    pub fn week(self) -> u32 {
        (self.0 % 100) as u32
    }

    /// This epiweek plus (or minus) a number of weeks.
    ///
    /// Walks year boundaries one at a time so 53-week years are honored.
    pub fn add_weeks(self, delta: i32) -> Result<Self, EpiweekError> {
        let (mut year, mut week) = (self.year(), self.week() as i32);
        let mut i = delta;
        while i > 0 {
            let weeks_in_year = num_weeks(year)? as i32;
            let dw = i.min(weeks_in_year - week);
            i -= dw;
            week += dw;
            if i > 0 && week == weeks_in_year {
                i -= 1;
                year += 1;
                week = 1;
            }
        }
        while i < 0 {
            let dw = (week - 1).min(-i);
            i += dw;
            week -= dw;
            if i < 0 && week == 1 {
                i += 1;
                year -= 1;
                week = num_weeks(year)? as i32;
            }
        }
        Self::from_parts(year, week as u32)
    }

    /// Signed number of weeks from `self` to `other`.
    pub fn delta(self, other: Epiweek) -> Result<i32, EpiweekError> {
        let (y1, w1) = (self.year(), self.week() as i32);
        let (mut y2, w2) = (other.year(), other.week() as i32);
        let mut num = 0;
        while y2 > y1 {
            num += num_weeks(y2 - 1)? as i32;
            y2 -= 1;
        }
        while y2 < y1 {
            num -= num_weeks(y2)? as i32;
            y2 += 1;
        }
        Ok(num + w2 - w1)
    }

    /// The flu season containing this epiweek, as `(first, last)` epiweeks
    /// (w40 of the season year through w20 of the next).
    ///
    /// Returns `None` for offseason weeks (21..=39).
    pub fn season(self) -> Option<(Epiweek, Epiweek)> {
        let (year, week) = (self.year(), self.week());
        let range = if week <= 20 {
            (
                Epiweek::from_parts(year - 1, 40),
                Epiweek::from_parts(year, 20),
            )
        } else if week >= 40 {
            (
                Epiweek::from_parts(year, 40),
                Epiweek::from_parts(year + 1, 20),
            )
        } else {
            return None;
        };
        match range {
            (Ok(first), Ok(last)) => Some((first, last)),
            _ => None,
        }
    }

    /// The year that labels the flu season containing this epiweek
    /// (the year of the season's epiweek 40). `None` in the offseason.
    pub fn season_year(self) -> Option<i32> {
        self.season().map(|(first, _)| first.year())
    }

    /// Iterator over `self..end` (exclusive) in week steps.
    pub fn range_to(self, end: Epiweek) -> EpiweekRange {
        EpiweekRange {
            next: Some(self),
            end,
            inclusive: false,
        }
    }

    /// Iterator over `self..=end` in week steps.
    pub fn range_through(self, end: Epiweek) -> EpiweekRange {
        EpiweekRange {
            next: Some(self),
            end,
            inclusive: true,
        }
    }
}

impl std::fmt::Display for Epiweek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}w{:02}", self.year(), self.week())
    }
}

/// Iterator over consecutive epiweeks.
#[derive(Debug, Clone)]
pub struct EpiweekRange {
    next: Option<Epiweek>,
    end: Epiweek,
    inclusive: bool,
}

impl Iterator for EpiweekRange {
    type Item = Epiweek;

    fn next(&mut self) -> Option<Epiweek> {
        let current = self.next?;
        let done = if self.inclusive {
            current > self.end
        } else {
            current >= self.end
        };
        if done {
            self.next = None;
            return None;
        }
        self.next = current.add_weeks(1).ok();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_counts() {
        // 2014 % 28 == 26, a 53-week year
        assert_eq!(num_weeks(2014).unwrap(), 53);
        assert_eq!(num_weeks(2015).unwrap(), 52);
        assert_eq!(num_weeks(2017).unwrap(), 52);
        assert!(num_weeks(1800).is_err());
        assert!(num_weeks(2100).is_err());
    }

    #[test]
    fn test_validation() {
        assert!(Epiweek::new(201740).is_ok());
        assert!(Epiweek::new(201453).is_ok());
        assert!(Epiweek::new(201553).is_err());
        assert!(Epiweek::new(201700).is_err());
        assert!(Epiweek::new(201754).is_err());
    }

    #[test]
    fn test_add_across_year_boundary() {
        let ew = Epiweek::new(201752).unwrap();
        assert_eq!(ew.add_weeks(1).unwrap().value(), 201801);
        assert_eq!(ew.add_weeks(-52).unwrap().value(), 201652);
    }

    #[test]
    fn test_add_honors_53_week_year() {
        let ew = Epiweek::new(201452).unwrap();
        assert_eq!(ew.add_weeks(1).unwrap().value(), 201453);
        assert_eq!(ew.add_weeks(2).unwrap().value(), 201501);
    }

    #[test]
    fn test_delta_inverts_add() {
        let start = Epiweek::new(201340).unwrap();
        for delta in [-120, -53, -1, 0, 1, 52, 53, 130] {
            let shifted = start.add_weeks(delta).unwrap();
            assert_eq!(start.delta(shifted).unwrap(), delta);
        }
    }

    #[test]
    fn test_season_bounds() {
        let (first, last) = Epiweek::new(201740).unwrap().season().unwrap();
        assert_eq!(first.value(), 201740);
        assert_eq!(last.value(), 201820);

        let (first, _) = Epiweek::new(201805).unwrap().season().unwrap();
        assert_eq!(first.value(), 201740);

        assert!(Epiweek::new(201730).unwrap().season().is_none());
    }

    #[test]
    fn test_season_year() {
        assert_eq!(Epiweek::new(201740).unwrap().season_year(), Some(2017));
        assert_eq!(Epiweek::new(201810).unwrap().season_year(), Some(2017));
        assert_eq!(Epiweek::new(201825).unwrap().season_year(), None);
    }

    #[test]
    fn test_range_iteration() {
        let start = Epiweek::new(201450).unwrap();
        let end = Epiweek::new(201502).unwrap();
        let weeks: Vec<i32> = start.range_to(end).map(Epiweek::value).collect();
        assert_eq!(weeks, vec![201450, 201451, 201452, 201453, 201501]);
        let weeks: Vec<i32> = start.range_through(end).map(Epiweek::value).collect();
        assert_eq!(weeks.last(), Some(&201502));
    }
}
