use log::{debug, error};

use crate::config::{DisplayConfig, DisplayConfigUpdate};
use crate::duration::{DurationValue, Unit};
use crate::generator::generate;
use crate::output::{recompute, Recomputed};
use crate::parser::{parse, ParseError};

/// Holds the duration and the config of one picker.
///
/// Every mutator regenerates the canonical string and returns the derived
/// outputs, so that the caller can forward them to whoever listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationPicker {
    value: DurationValue,
    config: DisplayConfig,
    canonical: String,
}

impl Default for DurationPicker {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

impl DurationPicker {
    #[must_use]
    pub fn new(config: DisplayConfig) -> Self {
        let value = DurationValue::default();

        Self {
            canonical: generate(&value, &config),
            value,
            config,
        }
    }

    /// Creates a picker from an initial string.
    pub fn with_value(config: DisplayConfig, input: &str) -> Result<Self, ParseError> {
        let mut picker = Self::new(config);
        picker.write_value(Some(input))?;
        Ok(picker)
    }

    #[must_use]
    pub fn value(&self) -> &DurationValue {
        &self.value
    }

    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The last generated duration string.
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    #[must_use]
    pub fn recompute(&self) -> Recomputed {
        recompute(&self.value, &self.config)
    }

    /// Replaces the duration with the parsed `input`.
    ///
    /// Without input (or with an empty string) nothing happens and `Ok(None)`
    /// is returned. If the input is invalid, the error is logged and returned
    /// and the picker keeps its previous state.
    pub fn write_value(
        &mut self,
        input: Option<&str>,
    ) -> Result<Option<Recomputed>, ParseError> {
        let Some(input) = input.filter(|input| !input.is_empty()) else {
            return Ok(None);
        };

        match parse(input) {
            Ok(value) => {
                self.value = value;
                Ok(Some(self.regenerate()))
            }
            Err(e) => {
                error!("invalid duration value: {}", e);
                Err(e)
            }
        }
    }

    pub fn set_options(&mut self, update: DisplayConfigUpdate) -> Recomputed {
        self.config.merge(update);
        self.regenerate()
    }

    pub fn set(&mut self, unit: Unit, value: i64) -> Recomputed {
        self.value.set(unit, value);
        self.regenerate()
    }

    pub fn set_negative(&mut self, negative: bool) -> Recomputed {
        self.value.set_negative(negative);
        self.regenerate()
    }

    pub fn set_years(&mut self, value: i64) -> Recomputed {
        self.set(Unit::Years, value)
    }

    pub fn set_months(&mut self, value: i64) -> Recomputed {
        self.set(Unit::Months, value)
    }

    pub fn set_weeks(&mut self, value: i64) -> Recomputed {
        self.set(Unit::Weeks, value)
    }

    pub fn set_days(&mut self, value: i64) -> Recomputed {
        self.set(Unit::Days, value)
    }

    pub fn set_hours(&mut self, value: i64) -> Recomputed {
        self.set(Unit::Hours, value)
    }

    pub fn set_minutes(&mut self, value: i64) -> Recomputed {
        self.set(Unit::Minutes, value)
    }

    pub fn set_seconds(&mut self, value: i64) -> Recomputed {
        self.set(Unit::Seconds, value)
    }

    fn regenerate(&mut self) -> Recomputed {
        let recomputed = self.recompute();
        debug!("duration changed: {:?} -> {:?}", self.canonical, recomputed.canonical);
        self.canonical.clone_from(&recomputed.canonical);

        recomputed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_starts_at_zero_value() {
        let picker = DurationPicker::default();

        assert_eq!(picker.canonical(), "PT0S");
        assert!(picker.value().is_empty());
    }

    #[test]
    fn test_setters_regenerate() {
        let mut picker = DurationPicker::default();

        assert_eq!(picker.set_hours(2).canonical, "PT2H");
        assert_eq!(picker.set_days(1).canonical, "P1DT2H");

        let recomputed = picker.set_hours(-4);
        assert_eq!(recomputed.canonical, "P1D");
        assert_eq!(recomputed.total_seconds, 86_400);
        assert_eq!(picker.canonical(), "P1D");
    }

    #[test]
    fn test_write_value_without_input_is_noop() {
        let mut picker = DurationPicker::with_value(DisplayConfig::default(), "P2W").unwrap();

        assert_eq!(picker.write_value(None), Ok(None));
        assert_eq!(picker.write_value(Some("")), Ok(None));
        assert_eq!(picker.canonical(), "P2W");
    }

    #[test]
    fn test_write_value_regenerates_canonical() {
        let mut picker = DurationPicker::default();

        let recomputed = picker.write_value(Some("+P0Y01DT0S")).unwrap().unwrap();
        assert_eq!(recomputed.canonical, "P1D");
        assert_eq!(picker.canonical(), "P1D");
    }
}
