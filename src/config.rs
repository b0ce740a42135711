use std::convert::Infallible;
use std::io::Read;
use std::str::FromStr;

use derive_more::Display;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::duration::Unit;
use crate::utils;

/// The literal that selects the canonical ISO string as a format.
const ISO: &str = "ISO";

/// How the preview of a duration is rendered.
#[derive(Debug, Clone, Default, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PreviewFormat {
    /// Show the canonical ISO string.
    #[default]
    #[display("ISO")]
    Iso,
    /// Show a template with `{{Y}}`, `{{M}}`, ... placeholders.
    #[display("{_0}")]
    Template(String),
}

impl FromStr for PreviewFormat {
    type Err = Infallible;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(string.to_string()))
    }
}

impl From<String> for PreviewFormat {
    fn from(string: String) -> Self {
        if string.is_empty() || string == ISO {
            Self::Iso
        } else {
            Self::Template(string)
        }
    }
}

impl From<PreviewFormat> for String {
    fn from(format: PreviewFormat) -> Self {
        format.to_string()
    }
}

/// What [`custom_output`](crate::custom_output) produces.
#[derive(Debug, Clone, Default, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CustomOutputFormat {
    #[default]
    #[display("ISO")]
    Iso,
    /// Total milliseconds.
    #[display("timestamp")]
    Timestamp,
    /// Total seconds.
    #[display("seconds")]
    Seconds,
    #[display("{_0}")]
    Template(String),
}

impl FromStr for CustomOutputFormat {
    type Err = Infallible;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(string.to_string()))
    }
}

impl From<String> for CustomOutputFormat {
    fn from(string: String) -> Self {
        match string.as_str() {
            "" | ISO => Self::Iso,
            "timestamp" => Self::Timestamp,
            "seconds" => Self::Seconds,
            _ => Self::Template(string),
        }
    }
}

impl From<CustomOutputFormat> for String {
    fn from(format: CustomOutputFormat) -> Self {
        format.to_string()
    }
}

/// Display labels of the units. The codec itself never reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub years: String,
    pub months: String,
    pub weeks: String,
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            years: "Y".to_string(),
            months: "M".to_string(),
            weeks: "W".to_string(),
            days: "D".to_string(),
            hours: "H".to_string(),
            minutes: "M".to_string(),
            seconds: "S".to_string(),
        }
    }
}

impl Labels {
    #[must_use]
    pub fn get(&self, unit: Unit) -> &str {
        match unit {
            Unit::Years => &self.years,
            Unit::Months => &self.months,
            Unit::Weeks => &self.weeks,
            Unit::Days => &self.days,
            Unit::Hours => &self.hours,
            Unit::Minutes => &self.minutes,
            Unit::Seconds => &self.seconds,
        }
    }

    /// Overwrites only the labels that are present in `update`.
    pub fn merge(&mut self, update: LabelsUpdate) {
        let LabelsUpdate {
            years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds,
        } = update;

        overwrite(&mut self.years, years);
        overwrite(&mut self.months, months);
        overwrite(&mut self.weeks, weeks);
        overwrite(&mut self.days, days);
        overwrite(&mut self.hours, hours);
        overwrite(&mut self.minutes, minutes);
        overwrite(&mut self.seconds, seconds);
    }
}

/// Controls which parts of a duration are written and how the derived
/// outputs look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayConfig {
    pub show_negative: bool,
    pub show_years: bool,
    pub show_months: bool,
    pub show_weeks: bool,
    pub show_days: bool,
    pub show_hours: bool,
    pub show_minutes: bool,
    pub show_seconds: bool,
    /// Written instead of a duration without any visible, non-zero unit.
    pub zero_value: String,
    pub preview_format: PreviewFormat,
    pub custom_output_format: CustomOutputFormat,
    pub labels: Labels,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_negative: false,
            show_years: true,
            show_months: true,
            show_weeks: true,
            show_days: true,
            show_hours: true,
            show_minutes: true,
            show_seconds: true,
            zero_value: "PT0S".to_string(),
            preview_format: PreviewFormat::default(),
            custom_output_format: CustomOutputFormat::default(),
            labels: Labels::default(),
        }
    }
}

impl DisplayConfig {
    /// The default config, but with the sign visible as well.
    #[must_use]
    pub fn show_all() -> Self {
        Self {
            show_negative: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn shows(&self, unit: Unit) -> bool {
        match unit {
            Unit::Years => self.show_years,
            Unit::Months => self.show_months,
            Unit::Weeks => self.show_weeks,
            Unit::Days => self.show_days,
            Unit::Hours => self.show_hours,
            Unit::Minutes => self.show_minutes,
            Unit::Seconds => self.show_seconds,
        }
    }

    /// Applies a partial update. Every field that is present replaces the
    /// current one, except for `labels` which are merged one by one.
    pub fn merge(&mut self, update: DisplayConfigUpdate) {
        debug!("merging display config: {:?}", update);

        let DisplayConfigUpdate {
            show_negative,
            show_years,
            show_months,
            show_weeks,
            show_days,
            show_hours,
            show_minutes,
            show_seconds,
            zero_value,
            preview_format,
            custom_output_format,
            labels,
        } = update;

        overwrite(&mut self.show_negative, show_negative);
        overwrite(&mut self.show_years, show_years);
        overwrite(&mut self.show_months, show_months);
        overwrite(&mut self.show_weeks, show_weeks);
        overwrite(&mut self.show_days, show_days);
        overwrite(&mut self.show_hours, show_hours);
        overwrite(&mut self.show_minutes, show_minutes);
        overwrite(&mut self.show_seconds, show_seconds);
        overwrite(&mut self.zero_value, zero_value);
        overwrite(&mut self.preview_format, preview_format);
        overwrite(&mut self.custom_output_format, custom_output_format);

        if let Some(labels) = labels {
            self.labels.merge(labels);
        }
    }

    #[must_use]
    pub fn merged(mut self, update: DisplayConfigUpdate) -> Self {
        self.merge(update);
        self
    }
}

fn overwrite<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabelsUpdate {
    pub years: Option<String>,
    pub months: Option<String>,
    pub weeks: Option<String>,
    pub days: Option<String>,
    pub hours: Option<String>,
    pub minutes: Option<String>,
    pub seconds: Option<String>,
}

/// A partial [`DisplayConfig`], as handed over by the host of the picker.
///
/// Unknown keys are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayConfigUpdate {
    pub show_negative: Option<bool>,
    pub show_years: Option<bool>,
    pub show_months: Option<bool>,
    pub show_weeks: Option<bool>,
    pub show_days: Option<bool>,
    pub show_hours: Option<bool>,
    pub show_minutes: Option<bool>,
    pub show_seconds: Option<bool>,
    pub zero_value: Option<String>,
    pub preview_format: Option<PreviewFormat>,
    pub custom_output_format: Option<CustomOutputFormat>,
    pub labels: Option<LabelsUpdate>,
}

impl DisplayConfigUpdate {
    /// Reads an update from toml, for example
    ///
    /// ```toml
    /// showNegative = true
    /// customOutputFormat = "seconds"
    ///
    /// [labels]
    /// years = "yr"
    /// ```
    pub fn from_toml_reader<R: Read>(reader: R) -> anyhow::Result<Self> {
        utils::toml_from_reader(reader)
    }
}
