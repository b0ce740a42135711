use crate::duration::{DurationValue, Unit};

/// The signed length of `value` in seconds.
///
/// Weeks, months and years use fixed factors (see [`Unit::seconds`]), so this
/// is not calendar accurate.
#[must_use]
pub fn total_seconds(value: &DurationValue) -> i128 {
    let magnitude: i128 = Unit::ALL
        .iter()
        .map(|unit| i128::from(value.get(*unit)) * i128::from(unit.seconds()))
        .sum();

    value.sign().factor() * magnitude
}

#[must_use]
pub fn total_milliseconds(value: &DurationValue) -> i128 {
    total_seconds(value) * 1000
}
