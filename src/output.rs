use derive_more::Display;
use log::trace;

use crate::config::{CustomOutputFormat, DisplayConfig, PreviewFormat};
use crate::duration::DurationValue;
use crate::generator::generate;
use crate::projection::{total_milliseconds, total_seconds};
use crate::template::substitute;

/// The value selected by [`CustomOutputFormat`].
#[derive(Debug, Clone, Display, PartialEq, Eq)]
pub enum CustomOutput {
    #[display("{_0}")]
    Text(String),
    #[display("{_0}")]
    Number(i128),
}

/// Derives the custom output of `value`. `canonical` must be the output of
/// [`generate`] for the same value and config.
///
/// A template format falls back to the canonical string, the substituted
/// template is not returned.
#[must_use]
pub fn custom_output(
    value: &DurationValue,
    config: &DisplayConfig,
    canonical: &str,
) -> CustomOutput {
    match &config.custom_output_format {
        CustomOutputFormat::Iso => CustomOutput::Text(canonical.to_string()),
        CustomOutputFormat::Timestamp => CustomOutput::Number(total_milliseconds(value)),
        CustomOutputFormat::Seconds => CustomOutput::Number(total_seconds(value)),
        CustomOutputFormat::Template(template) => {
            let substituted = substitute(template, value);
            trace!(
                "custom output template rendered to {:?}, emitting {:?}",
                substituted,
                canonical
            );
            CustomOutput::Text(canonical.to_string())
        }
    }
}

/// The text shown as a preview of `value`: the canonical string, or the
/// configured template with the magnitudes filled in.
#[must_use]
pub fn preview(value: &DurationValue, config: &DisplayConfig, canonical: &str) -> String {
    match &config.preview_format {
        PreviewFormat::Iso => canonical.to_string(),
        PreviewFormat::Template(template) => substitute(template, value),
    }
}

/// Everything that is derived from a duration and its config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recomputed {
    pub canonical: String,
    pub custom_output: CustomOutput,
    pub preview: String,
    pub total_seconds: i128,
    pub total_milliseconds: i128,
}

/// Derives all outputs of `value`. Call this after every change of the value
/// or the config.
#[must_use]
pub fn recompute(value: &DurationValue, config: &DisplayConfig) -> Recomputed {
    let canonical = generate(value, config);

    Recomputed {
        custom_output: custom_output(value, config, &canonical),
        preview: preview(value, config, &canonical),
        total_seconds: total_seconds(value),
        total_milliseconds: total_milliseconds(value),
        canonical,
    }
}
