//! In-game Clock Types
//!
//! The host advances time in fixed 10-minute steps from 6:00 am to 2:00 am
//! the following night. Times are carried the way the host carries them: as
//! an `HHMM` integer where values past midnight keep counting (2400, 2510...).
//!
//! # Example
//!
//! ```
//! use friendship_events::{GameDate, GameTime, Season};
//!
//! let time = GameTime::new(1250).unwrap();
//! assert_eq!(time.next().unwrap().hhmm(), 1300);
//! assert_eq!(time.to_string(), "12:50 pm");
//!
//! let date = GameDate::new(1, Season::Spring, 3);
//! assert_eq!(date.to_string(), "year_1.spring.day_3");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of days in each season.
pub const DAYS_PER_SEASON: u8 = 28;

/// Minutes covered by one time tick.
pub const MINUTES_PER_TICK: u16 = 10;

/// First time of day (6:00 am).
pub const DAY_START: u16 = 600;

/// Last time of day (2:00 am the following night).
pub const DAY_END: u16 = 2600;

/// Number of time ticks in a full day.
pub const TICKS_PER_DAY: u32 = 120;

/// Errors raised when building or parsing clock values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("time {0} is outside 600..=2600")]
    OutOfRange(u16),
    #[error("time {0} is not on a 10-minute boundary")]
    Misaligned(u16),
    #[error("invalid date format: '{0}', expected 'year_N.season.day_M'")]
    InvalidFormat(String),
    #[error("invalid year: '{0}'")]
    InvalidYear(String),
    #[error("invalid season: '{0}'")]
    InvalidSeason(String),
    #[error("invalid day: '{0}'")]
    InvalidDay(String),
}

/// Time of day as an `HHMM` integer, always on a 10-minute boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameTime(u16);

impl GameTime {
    /// Creates a validated time of day.
    pub fn new(hhmm: u16) -> Result<Self, ClockError> {
        if !(DAY_START..=DAY_END).contains(&hhmm) {
            return Err(ClockError::OutOfRange(hhmm));
        }
        if hhmm % 100 >= 60 || hhmm % MINUTES_PER_TICK != 0 {
            return Err(ClockError::Misaligned(hhmm));
        }
        Ok(Self(hhmm))
    }

    /// The first time of every day.
    pub fn day_start() -> Self {
        Self(DAY_START)
    }

    /// Raw `HHMM` value.
    pub fn hhmm(self) -> u16 {
        self.0
    }

    /// Returns the time one tick later, or `None` once the day is over.
    pub fn next(self) -> Option<Self> {
        let mut next = self.0 + MINUTES_PER_TICK;
        if next % 100 >= 60 {
            next = next - next % 100 + 100;
        }
        (next <= DAY_END).then_some(Self(next))
    }
}

impl Default for GameTime {
    fn default() -> Self {
        Self::day_start()
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = (self.0 / 100) % 24;
        let minutes = self.0 % 100;
        let suffix = if hours < 12 { "am" } else { "pm" };
        let display_hour = match hours % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{}:{:02} {}", display_hour, minutes, suffix)
    }
}

impl FromStr for GameTime {
    type Err = ClockError;

    /// Parses an `HHMM` string such as "0610" or "2450".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hhmm = s
            .trim()
            .parse::<u16>()
            .map_err(|_| ClockError::InvalidFormat(s.to_string()))?;
        Self::new(hhmm)
    }
}

impl Serialize for GameTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.0)
    }
}

impl<'de> Deserialize<'de> for GameTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hhmm = u16::deserialize(deserializer)?;
        GameTime::new(hhmm).map_err(serde::de::Error::custom)
    }
}

/// Season of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Returns the next season in order.
    pub fn next(self) -> Self {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Fall,
            Season::Fall => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Fall => write!(f, "fall"),
            Season::Winter => write!(f, "winter"),
        }
    }
}

impl FromStr for Season {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            _ => Err(ClockError::InvalidSeason(s.to_string())),
        }
    }
}

/// Calendar date. Serializes to strings like "year_2.fall.day_14".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameDate {
    pub year: u32,
    pub season: Season,
    pub day: u8,
}

impl GameDate {
    pub fn new(year: u32, season: Season, day: u8) -> Self {
        Self { year, season, day }
    }

    /// The first day of a new save.
    pub fn start() -> Self {
        Self::new(1, Season::Spring, 1)
    }

    /// Advances the date by one day, handling season and year rollovers.
    pub fn advance_day(&mut self) {
        self.day += 1;
        if self.day > DAYS_PER_SEASON {
            self.day = 1;
            if self.season == Season::Winter {
                self.year += 1;
            }
            self.season = self.season.next();
        }
    }
}

impl Default for GameDate {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "year_{}.{}.day_{}", self.year, self.season, self.day)
    }
}

impl FromStr for GameDate {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(ClockError::InvalidFormat(s.to_string()));
        }

        let year = parts[0]
            .strip_prefix("year_")
            .ok_or_else(|| ClockError::InvalidFormat(s.to_string()))?
            .parse::<u32>()
            .map_err(|_| ClockError::InvalidYear(parts[0].to_string()))?;

        let season = parts[1].parse::<Season>()?;

        let day = parts[2]
            .strip_prefix("day_")
            .ok_or_else(|| ClockError::InvalidFormat(s.to_string()))?
            .parse::<u8>()
            .map_err(|_| ClockError::InvalidDay(parts[2].to_string()))?;
        if day == 0 || day > DAYS_PER_SEASON {
            return Err(ClockError::InvalidDay(parts[2].to_string()));
        }

        Ok(GameDate { year, season, day })
    }
}

impl Serialize for GameDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GameDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_validation() {
        assert!(GameTime::new(600).is_ok());
        assert!(GameTime::new(2600).is_ok());
        assert_eq!(GameTime::new(550), Err(ClockError::OutOfRange(550)));
        assert_eq!(GameTime::new(2610), Err(ClockError::OutOfRange(2610)));
        assert_eq!(GameTime::new(675), Err(ClockError::Misaligned(675)));
        assert_eq!(GameTime::new(615), Err(ClockError::Misaligned(615)));
    }

    #[test]
    fn test_time_next_rolls_hour() {
        let time = GameTime::new(650).unwrap();
        assert_eq!(time.next().unwrap().hhmm(), 700);

        let time = GameTime::new(2350).unwrap();
        assert_eq!(time.next().unwrap().hhmm(), 2400);
    }

    #[test]
    fn test_time_next_stops_at_day_end() {
        let time = GameTime::new(2550).unwrap();
        assert_eq!(time.next().unwrap().hhmm(), 2600);
        assert!(GameTime::new(2600).unwrap().next().is_none());
    }

    #[test]
    fn test_full_day_tick_count() {
        let mut time = GameTime::day_start();
        let mut ticks = 0;
        while let Some(next) = time.next() {
            time = next;
            ticks += 1;
        }
        assert_eq!(ticks, TICKS_PER_DAY);
        assert_eq!(time.hhmm(), DAY_END);
    }

    #[test]
    fn test_time_display() {
        assert_eq!(GameTime::new(600).unwrap().to_string(), "6:00 am");
        assert_eq!(GameTime::new(1200).unwrap().to_string(), "12:00 pm");
        assert_eq!(GameTime::new(1330).unwrap().to_string(), "1:30 pm");
        assert_eq!(GameTime::new(2400).unwrap().to_string(), "12:00 am");
        assert_eq!(GameTime::new(2510).unwrap().to_string(), "1:10 am");
    }

    #[test]
    fn test_time_parse() {
        assert_eq!("0610".parse::<GameTime>().unwrap().hhmm(), 610);
        assert_eq!("2450".parse::<GameTime>().unwrap().hhmm(), 2450);
        assert!("noon".parse::<GameTime>().is_err());
    }

    #[test]
    fn test_time_serializes_as_number() {
        let time = GameTime::new(1310).unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "1310");
        assert!(serde_json::from_str::<GameTime>("1375").is_err());
    }

    #[test]
    fn test_date_display_and_parse() {
        let date = GameDate::new(3, Season::Winter, 12);
        assert_eq!(date.to_string(), "year_3.winter.day_12");
        assert_eq!("year_3.winter.day_12".parse::<GameDate>().unwrap(), date);
        assert!("year_1.spring.day_29".parse::<GameDate>().is_err());
        assert!("year_1.autumn.day_1".parse::<GameDate>().is_err());
    }

    #[test]
    fn test_date_season_rollover() {
        let mut date = GameDate::new(1, Season::Spring, 28);
        date.advance_day();
        assert_eq!(date, GameDate::new(1, Season::Summer, 1));
    }

    #[test]
    fn test_date_year_rollover() {
        let mut date = GameDate::new(1, Season::Winter, 28);
        date.advance_day();
        assert_eq!(date, GameDate::new(2, Season::Spring, 1));
    }

    #[test]
    fn test_date_serialize_as_string() {
        let date = GameDate::new(2, Season::Fall, 14);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""year_2.fall.day_14""#);
    }
}
