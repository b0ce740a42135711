//! Parsing and generation of ISO-8601 durations like `P1Y2M3W4DT5H6M7S`, as
//! used by a duration picker.
//!
//! ```
//! use duration_codec::{generate, parse, total_seconds, DisplayConfig};
//!
//! let value = parse("PT1M30S").unwrap();
//! assert_eq!(total_seconds(&value), 90);
//! assert_eq!(generate(&value, &DisplayConfig::default()), "PT1M30S");
//! ```

mod generator;
mod output;
mod parser;
mod picker;
mod projection;
mod template;
mod utils;

pub mod config;
pub mod duration;

pub use config::{CustomOutputFormat, DisplayConfig, DisplayConfigUpdate, PreviewFormat};
pub use duration::{DurationValue, Sign, Unit};
pub use generator::generate;
pub use output::{custom_output, preview, recompute, CustomOutput, Recomputed};
pub use parser::{parse, ParseError};
pub use picker::DurationPicker;
pub use projection::{total_milliseconds, total_seconds};
pub use template::substitute;
