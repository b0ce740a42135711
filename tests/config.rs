//! Tests that partial option objects are read and merged like the host
//! hands them over.

use std::io::Cursor;

use duration_codec::config::{Labels, LabelsUpdate};
use duration_codec::{CustomOutputFormat, DisplayConfig, DisplayConfigUpdate, PreviewFormat};

use pretty_assertions::assert_eq;

mod common;

#[test]
fn test_labels_merge_key_by_key() {
    common::init_logger();
    let update: DisplayConfigUpdate =
        serde_json::from_str(r#"{ "labels": { "years": "yr" } }"#).expect("json should be valid");

    assert_eq!(
        update,
        DisplayConfigUpdate {
            labels: Some(LabelsUpdate {
                years: Some("yr".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    );

    let config = DisplayConfig::default().merged(update);

    assert_eq!(config.labels.years, "yr");
    assert_eq!(config.labels.months, "M");
    assert_eq!(config.labels.minutes, "M");
    assert_eq!(
        DisplayConfig {
            labels: Labels::default(),
            ..config
        },
        DisplayConfig::default()
    );
}

#[test]
fn test_json_options_use_camel_case() {
    common::init_logger();
    let update: DisplayConfigUpdate = serde_json::from_str(concat!(
        "{",
        "\"showNegative\": true,",
        "\"showWeeks\": false,",
        "\"zeroValue\": \"P0D\",",
        "\"previewFormat\": \"{{h}}:{{m}}\",",
        "\"customOutputFormat\": \"timestamp\",",
        "\"showButtons\": false",
        "}"
    ))
    .expect("unknown options should be ignored");

    let config = DisplayConfig::default().merged(update);

    assert_eq!(
        config,
        DisplayConfig {
            show_negative: true,
            show_weeks: false,
            zero_value: "P0D".to_string(),
            preview_format: PreviewFormat::Template("{{h}}:{{m}}".to_string()),
            custom_output_format: CustomOutputFormat::Timestamp,
            ..DisplayConfig::default()
        }
    );
}

#[test]
fn test_toml_options() {
    common::init_logger();
    let update = DisplayConfigUpdate::from_toml_reader(Cursor::new(concat!(
        "showSeconds = false\n",
        "customOutputFormat = \"ISO\"\n",
        "\n",
        "[labels]\n",
        "hours = \"h\"\n",
        "minutes = \"min\"\n",
    )))
    .expect("toml should be valid");

    let mut config = DisplayConfig::show_all();
    config.merge(update);

    assert!(!config.show_seconds);
    assert!(config.show_negative);
    assert_eq!(config.custom_output_format, CustomOutputFormat::Iso);
    assert_eq!(
        config.labels,
        Labels {
            hours: "h".to_string(),
            minutes: "min".to_string(),
            ..Labels::default()
        }
    );
}

#[test]
fn test_invalid_toml_options() {
    common::init_logger();

    assert!(DisplayConfigUpdate::from_toml_reader(Cursor::new("showSeconds = \"no\"\n")).is_err());
}

#[test]
fn test_config_serializes_formats_as_strings() {
    let config = DisplayConfig::default();
    let json = serde_json::to_value(&config).expect("config should serialize");

    assert_eq!(json["zeroValue"], "PT0S");
    assert_eq!(json["previewFormat"], "ISO");
    assert_eq!(json["customOutputFormat"], "ISO");
    assert_eq!(json["labels"]["minutes"], "M");

    assert_eq!(
        serde_json::from_value::<DisplayConfig>(json).expect("config should deserialize"),
        config
    );
}
