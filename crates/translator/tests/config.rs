//! Integration tests for deserializing rule sets and keys.

use serde_json::json;
use translator::{DictKey, Rule, Translator};

#[test]
fn rule_lists_deserialize_from_json() {
    let rules: Vec<Rule> = serde_json::from_value(json!([
        {"pattern": r"data/(\w+)\.txt", "template": r"out/\1.dat"},
        {"pattern": r"(\w+)\.JPG", "template": r"\1", "case_insensitive": true},
    ]))
    .unwrap();

    let t = Translator::by_regex(rules).unwrap();
    assert_eq!(t.first("data/obs.txt").as_deref(), Some("out/obs.dat"));
    assert_eq!(t.first("saturn.jpg").as_deref(), Some("saturn"));
}

#[test]
fn case_insensitive_defaults_to_off() {
    let rule: Rule = serde_json::from_value(json!({"pattern": "a", "template": "b"})).unwrap();
    assert!(!rule.case_insensitive);
}

#[test]
fn dict_keys_serialize_untagged() {
    assert_eq!(serde_json::to_value(DictKey::from("apple")).unwrap(), json!("apple"));
    assert_eq!(
        serde_json::to_value(DictKey::from(("volumes", "v1"))).unwrap(),
        json!(["volumes", "v1"]),
    );
}

#[test]
fn dict_keys_deserialize_from_either_shape() {
    let single: DictKey = serde_json::from_value(json!("apple")).unwrap();
    assert_eq!(single, DictKey::from("apple"));

    let multi: DictKey = serde_json::from_value(json!(["volumes", "v1"])).unwrap();
    assert_eq!(multi, DictKey::from(("volumes", "v1")));
}
