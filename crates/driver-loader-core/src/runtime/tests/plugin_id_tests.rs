#![cfg(test)]

use crate::runtime::PluginId;

#[test]
fn test_contains_code_is_loose() {
    let id = PluginId::new("plugin-driver-mysql@8.0.21");

    assert!(id.contains_code("mysql"));
    assert!(id.contains_code("driver-mysql"));
    assert!(id.contains_code("8.0"));
    assert!(!id.contains_code("postgresql"));
}

#[test]
fn test_conversions_and_display() {
    let from_str = PluginId::from("hive@2.3.7");
    let from_string = PluginId::from("hive@2.3.7".to_string());

    assert_eq!(from_str, from_string);
    assert_eq!(from_str.as_str(), "hive@2.3.7");
    assert_eq!(from_str.to_string(), "hive@2.3.7");
}

#[test]
fn test_serializes_as_plain_string() {
    let json = serde_json::to_string(&PluginId::new("mysql@8.0.21")).expect("serialize should succeed");
    assert_eq!(json, "\"mysql@8.0.21\"");
}
