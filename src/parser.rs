use std::num::ParseIntError;

use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::duration::{DurationValue, Sign, Unit};

// `regex` has no look-around, so the two lookaheads of the ISO grammar
// (`P(?!$)` and `T(?=\d+[HMS])`) are checked in `parse` after matching.
// `[0-9]` instead of `\d`, because `\d` would match any unicode digit.
static DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[+-]?P",
        r"(?:(?P<years>[0-9]+)Y)?",
        r"(?:(?P<months>[0-9]+)M)?",
        r"(?:(?P<weeks>[0-9]+)W)?",
        r"(?:(?P<days>[0-9]+)D)?",
        r"(?P<time>T",
        r"(?:(?P<hours>[0-9]+)H)?",
        r"(?:(?P<minutes>[0-9]+)M)?",
        r"(?:(?P<seconds>[0-9]+)S)?",
        r")?$",
    ))
    .expect("duration grammar is a valid regex")
});

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid duration: {input:?}")]
    InvalidFormat { input: String },
    #[error("duration component is out of range in {input:?}")]
    OutOfRange {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

impl ParseError {
    fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
        }
    }

    /// The string that could not be parsed.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input } | Self::OutOfRange { input, .. } => input,
        }
    }
}

const fn group_name(unit: Unit) -> &'static str {
    match unit {
        Unit::Years => "years",
        Unit::Months => "months",
        Unit::Weeks => "weeks",
        Unit::Days => "days",
        Unit::Hours => "hours",
        Unit::Minutes => "minutes",
        Unit::Seconds => "seconds",
    }
}

fn has_any(captures: &Captures<'_>, units: &[Unit]) -> bool {
    units
        .iter()
        .any(|unit| captures.name(group_name(*unit)).is_some())
}

/// Parses a duration like `P1Y2M3W4DT5H6M7S`, optionally prefixed by `+` or `-`.
///
/// The designators must appear in the order `Y M W D T H M S`, each at most
/// once. At least one of them must be present and a `T` must be followed by
/// at least one of `H`, `M` or `S`.
pub fn parse(input: &str) -> Result<DurationValue, ParseError> {
    let captures = DURATION
        .captures(input)
        .ok_or_else(|| ParseError::invalid_format(input))?;

    // `T` without any time unit after it
    if captures.name("time").is_some() && !has_any(&captures, &Unit::TIME) {
        return Err(ParseError::invalid_format(input));
    }

    // nothing after `P`
    if !has_any(&captures, &Unit::ALL) {
        return Err(ParseError::invalid_format(input));
    }

    let mut value = DurationValue::default()
        .with_negative(Sign::from_prefix(input).is_negative());

    for unit in Unit::ALL {
        if let Some(digits) = captures.name(group_name(unit)) {
            let magnitude = digits
                .as_str()
                .parse::<u64>()
                .map_err(|source| ParseError::OutOfRange {
                    input: input.to_string(),
                    source,
                })?;

            value = value.with(unit, magnitude);
        }
    }

    trace!("parsed {:?} into {:?}", input, value);

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_every_unit() {
        assert_eq!(
            parse("P1Y2M3W4DT5H6M7S"),
            Ok(DurationValue::new(1, 2, 3, 4, 5, 6, 7))
        );
    }

    #[test]
    fn test_parse_sign() {
        assert_eq!(
            parse("-P3D"),
            Ok(DurationValue::new(0, 0, 0, 3, 0, 0, 0).with_negative(true))
        );
        assert_eq!(parse("+P3D"), Ok(DurationValue::new(0, 0, 0, 3, 0, 0, 0)));
        assert!(parse("--P3D").is_err());
        assert!(parse("+-P3D").is_err());
    }

    #[test]
    fn test_months_and_minutes_are_told_apart_by_t() {
        assert_eq!(parse("P5M"), Ok(DurationValue::new(0, 5, 0, 0, 0, 0, 0)));
        assert_eq!(parse("PT5M"), Ok(DurationValue::new(0, 0, 0, 0, 0, 5, 0)));
        assert_eq!(
            parse("P5MT5M"),
            Ok(DurationValue::new(0, 5, 0, 0, 0, 5, 0))
        );
    }

    #[test]
    fn test_zero_magnitudes_are_accepted() {
        assert_eq!(parse("PT0S"), Ok(DurationValue::default()));
        assert_eq!(parse("P0D"), Ok(DurationValue::default()));
        assert_eq!(parse("P007D"), Ok(DurationValue::new(0, 0, 0, 7, 0, 0, 0)));
    }

    #[test]
    fn test_rejects_grammar_mismatches() {
        for input in [
            "", "P", "-P", "+P", "PT", "P1YT", "1Y", "P1H", "PT1D", "P1D1Y", "P1Y1Y", "PT1S1H",
            "P1.5D", "P-1D", "p1d", " P1D", "P1D ", "P1DT", "PD", "P١D",
        ] {
            assert_eq!(
                parse(input),
                Err(ParseError::InvalidFormat {
                    input: input.to_string()
                }),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_out_of_range() {
        let input = "P99999999999999999999999Y";
        let error = parse(input).unwrap_err();

        assert!(matches!(error, ParseError::OutOfRange { .. }));
        assert_eq!(error.input(), input);
    }

    #[test]
    fn test_error_message_names_input() {
        assert_eq!(
            parse("P1H").unwrap_err().to_string(),
            "invalid duration: \"P1H\""
        );
    }
}
