use log::trace;

use crate::config::DisplayConfig;
use crate::duration::{DurationValue, Unit};

fn visible(value: &DurationValue, config: &DisplayConfig, unit: Unit) -> Option<u64> {
    let magnitude = value.get(unit);
    (config.shows(unit) && magnitude != 0).then_some(magnitude)
}

fn push_units(output: &mut String, units: &[Unit], value: &DurationValue, config: &DisplayConfig) {
    for unit in units {
        if let Some(magnitude) = visible(value, config, *unit) {
            output.push_str(&magnitude.to_string());
            output.push(unit.designator());
        }
    }
}

/// Writes `value` as an ISO-8601 duration, leaving out every unit that is
/// zero or hidden by `config`.
///
/// If nothing is left to write, `config.zero_value` is returned instead.
#[must_use]
pub fn generate(value: &DurationValue, config: &DisplayConfig) -> String {
    let mut output = String::with_capacity(32);

    if config.show_negative && value.negative() {
        output.push(value.sign().symbol());
    }
    output.push('P');

    let prefix_len = output.len();

    push_units(&mut output, &Unit::DATE, value, config);

    if Unit::TIME
        .iter()
        .any(|unit| visible(value, config, *unit).is_some())
    {
        output.push('T');
        push_units(&mut output, &Unit::TIME, value, config);
    }

    if output.len() == prefix_len {
        trace!("{:?} has nothing to show, using the zero value", value);
        return config.zero_value.clone();
    }

    output
}
