use crate::duration::{DurationValue, Unit};

/// Replaces the placeholders `{{Y}}`, `{{M}}`, `{{W}}`, `{{D}}`, `{{h}}`,
/// `{{m}}` and `{{s}}` with the magnitudes of `value`.
///
/// Only the first occurrence of each placeholder is replaced, a repeated
/// placeholder stays in the output as it is.
#[must_use]
pub fn substitute(template: &str, value: &DurationValue) -> String {
    Unit::ALL
        .iter()
        .fold(template.to_string(), |output, unit| {
            output.replacen(unit.placeholder(), &value.get(*unit).to_string(), 1)
        })
}
