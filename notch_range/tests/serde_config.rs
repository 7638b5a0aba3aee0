// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "serde")]

use notch_range::{ConfigIssue, ConfigPatch, RangeConfig, RangeSlider, RangeValue};

#[test]
fn single_value_is_a_number() {
    let config = RangeConfig::new(0.0, 10.0, 0.5, RangeValue::Single(2.5)).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"min":0.0,"max":10.0,"step":0.5,"value":2.5}"#);
    let back: RangeConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn dual_value_uses_text_form() {
    let config = RangeConfig::new(0.0, 100.0, 1.0, RangeValue::Dual(20.0, 80.0)).unwrap();
    let json = serde_json::to_value(config).unwrap();
    assert_eq!(json["value"], "20,80");

    let back: RangeConfig =
        serde_json::from_str(r#"{"min":0,"max":100,"step":1,"value":" 20 , 80 "}"#).unwrap();
    assert_eq!(back.value, RangeValue::Dual(20.0, 80.0));
}

#[test]
fn missing_fields_take_defaults() {
    let config: RangeConfig = serde_json::from_str(r#"{"max":50}"#).unwrap();
    assert_eq!(config.min, 0.0);
    assert_eq!(config.max, 50.0);
    assert_eq!(config.step, 1.0);
    assert_eq!(config.value, RangeValue::Single(0.0));
    assert!(RangeSlider::new(config).is_ok());
}

#[test]
fn malformed_value_text_fails_to_deserialize() {
    let err = serde_json::from_str::<RangeConfig>(r#"{"value":"1,2,3"}"#);
    assert!(err.is_err());
}

#[test]
fn deserialized_config_is_validated_on_use() {
    let config: RangeConfig = serde_json::from_str(r#"{"min":10,"max":0}"#).unwrap();
    assert_eq!(config.validate(), Err(ConfigIssue::MinAboveMax));
    assert!(RangeSlider::new(config).is_err());
}

#[test]
fn patch_fields_are_optional() {
    let patch: ConfigPatch = serde_json::from_str(r#"{"value":"30,60"}"#).unwrap();
    assert_eq!(patch, ConfigPatch::value(RangeValue::Dual(30.0, 60.0)));

    let mut slider =
        RangeSlider::new(RangeConfig::new(0.0, 100.0, 1.0, RangeValue::Dual(0.0, 100.0)).unwrap())
            .unwrap();
    slider.set_config(&patch).unwrap();
    assert_eq!(slider.get_value(), "30,60");
}
