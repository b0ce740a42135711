use std::fmt;
use std::str::FromStr;

use serde::{de, ser, Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::duration::{Sign, Unit};
use crate::generator;
use crate::parser::{self, ParseError};

/// The canonical representation of a duration: seven magnitudes and a sign.
///
/// The magnitudes are never negative, the sign is only carried by `negative`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DurationValue {
    negative: bool,
    years: u64,
    months: u64,
    weeks: u64,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
}

/// Mutators take signed input, anything below one is stored as zero.
fn clamp(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

impl DurationValue {
    #[must_use]
    pub const fn new(
        years: u64,
        months: u64,
        weeks: u64,
        days: u64,
        hours: u64,
        minutes: u64,
        seconds: u64,
    ) -> Self {
        Self {
            negative: false,
            years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Returns a copy with the magnitude of `unit` replaced.
    #[must_use]
    pub const fn with(mut self, unit: Unit, magnitude: u64) -> Self {
        match unit {
            Unit::Years => self.years = magnitude,
            Unit::Months => self.months = magnitude,
            Unit::Weeks => self.weeks = magnitude,
            Unit::Days => self.days = magnitude,
            Unit::Hours => self.hours = magnitude,
            Unit::Minutes => self.minutes = magnitude,
            Unit::Seconds => self.seconds = magnitude,
        }

        self
    }

    #[must_use]
    pub const fn with_negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    #[must_use]
    pub const fn get(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Years => self.years,
            Unit::Months => self.months,
            Unit::Weeks => self.weeks,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }

    pub fn set(&mut self, unit: Unit, value: i64) {
        *self = self.with(unit, clamp(value));
    }

    pub fn set_negative(&mut self, negative: bool) {
        self.negative = negative;
    }

    pub fn set_years(&mut self, value: i64) {
        self.set(Unit::Years, value);
    }

    pub fn set_months(&mut self, value: i64) {
        self.set(Unit::Months, value);
    }

    pub fn set_weeks(&mut self, value: i64) {
        self.set(Unit::Weeks, value);
    }

    pub fn set_days(&mut self, value: i64) {
        self.set(Unit::Days, value);
    }

    pub fn set_hours(&mut self, value: i64) {
        self.set(Unit::Hours, value);
    }

    pub fn set_minutes(&mut self, value: i64) {
        self.set(Unit::Minutes, value);
    }

    pub fn set_seconds(&mut self, value: i64) {
        self.set(Unit::Seconds, value);
    }

    #[must_use]
    pub const fn negative(&self) -> bool {
        self.negative
    }

    #[must_use]
    pub const fn sign(&self) -> Sign {
        Sign::from_negative(self.negative)
    }

    #[must_use]
    pub const fn years(&self) -> u64 {
        self.years
    }

    #[must_use]
    pub const fn months(&self) -> u64 {
        self.months
    }

    #[must_use]
    pub const fn weeks(&self) -> u64 {
        self.weeks
    }

    #[must_use]
    pub const fn days(&self) -> u64 {
        self.days
    }

    #[must_use]
    pub const fn hours(&self) -> u64 {
        self.hours
    }

    #[must_use]
    pub const fn minutes(&self) -> u64 {
        self.minutes
    }

    #[must_use]
    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    /// A value is empty if every magnitude is zero, regardless of its sign.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Unit::ALL.iter().all(|unit| self.get(*unit) == 0)
    }
}

/// Writes the duration with every unit and the sign visible.
impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&generator::generate(self, &DisplayConfig::show_all()))
    }
}

impl FromStr for DurationValue {
    type Err = ParseError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        parser::parse(string)
    }
}

impl<'de> Deserialize<'de> for DurationValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for DurationValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_setters_clamp_negative_input() {
        let mut value = DurationValue::default();
        value.set_hours(5);
        value.set_minutes(-3);
        value.set_seconds(0);

        assert_eq!(value.hours(), 5);
        assert_eq!(value.minutes(), 0);
        assert_eq!(value.seconds(), 0);

        value.set_hours(-1);
        assert_eq!(value.hours(), 0);
    }

    #[test]
    fn test_is_empty_ignores_sign() {
        assert!(DurationValue::default().is_empty());
        assert!(DurationValue::default().with_negative(true).is_empty());
        assert!(!DurationValue::default().with(Unit::Weeks, 1).is_empty());
    }

    #[test]
    fn test_display_shows_sign_and_every_unit() {
        let value = DurationValue::new(1, 0, 0, 2, 0, 0, 3).with_negative(true);

        assert_eq!(value.to_string(), "-P1Y2DT3S");
        assert_eq!(DurationValue::default().to_string(), "PT0S");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "PT1H30M".parse::<DurationValue>().unwrap(),
            DurationValue::new(0, 0, 0, 0, 1, 30, 0)
        );
        assert!("P1H".parse::<DurationValue>().is_err());
    }
}
