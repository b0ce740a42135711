use duration_codec::{DurationValue, Unit};

/// Installs a logger that honours `RUST_LOG`. Can be called by every test.
pub fn init_logger() {
    let _ = pretty_env_logger::try_init();
}

/// A positive duration with only `unit` set.
#[must_use]
#[allow(dead_code)]
pub fn only(unit: Unit, magnitude: u64) -> DurationValue {
    DurationValue::default().with(unit, magnitude)
}

/// Builds a duration from `(unit, magnitude)` pairs.
#[must_use]
#[allow(dead_code)]
pub fn duration(negative: bool, parts: &[(Unit, u64)]) -> DurationValue {
    parts
        .iter()
        .fold(DurationValue::default(), |value, (unit, magnitude)| {
            value.with(*unit, *magnitude)
        })
        .with_negative(negative)
}
