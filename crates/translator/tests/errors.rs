//! Integration tests for construction-time configuration errors.

use translator::{ConfigError, Translator, TranslatorByRegex};

// =============================================================================
// Pattern Errors
// =============================================================================

#[test]
fn invalid_pattern_fails_at_construction() {
    let err = TranslatorByRegex::new([(r"(unclosed", r"x")]).unwrap_err();
    assert!(matches!(err, ConfigError::Pattern { index: 0, .. }));
}

#[test]
fn error_reports_the_offending_rule_index() {
    let err = TranslatorByRegex::new([(r"fine", r"ok"), (r"(unclosed", r"x")]).unwrap_err();
    assert!(matches!(err, ConfigError::Pattern { index: 1, .. }));
}

// =============================================================================
// Group Reference Errors
// =============================================================================

#[test]
fn out_of_range_group_index_is_rejected() {
    let err = TranslatorByRegex::new([(r"(\w+)", r"\2")]).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::GroupIndex {
            index: 0,
            group: 2,
            available: 1,
        }
    ));
}

#[test]
fn group_zero_is_always_in_range() {
    let t = TranslatorByRegex::new([(r"\w+", r"\g<0>")]).unwrap();
    assert_eq!(t.patterns().count(), 1);
}

#[test]
fn unknown_group_name_is_rejected_with_a_suggestion() {
    let err = TranslatorByRegex::new([(r"(?P<stem>\w+)", r"\g<stme>")]).unwrap_err();
    let ConfigError::GroupName {
        name, suggestion, ..
    } = &err
    else {
        panic!("expected a group-name error");
    };
    assert_eq!(name, "stme");
    assert_eq!(suggestion.as_deref(), Some("stem"));
    assert!(err.to_string().contains("did you mean `stem`"));
}

#[test]
fn unknown_group_name_without_a_near_miss_has_no_suggestion() {
    let err = TranslatorByRegex::new([(r"(?P<stem>\w+)", r"\g<zzzz>")]).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::GroupName {
            suggestion: None,
            ..
        }
    ));
}

// =============================================================================
// Template Syntax Errors
// =============================================================================

#[test]
fn unrecognized_escape_is_a_syntax_error() {
    let err = TranslatorByRegex::new([(r"x", r"\q")]).unwrap_err();
    assert!(matches!(err, ConfigError::Template { index: 0, .. }));
    assert!(err.to_string().contains("column 1"));
}

#[test]
fn trailing_backslash_is_a_syntax_error() {
    let err = TranslatorByRegex::new([(r"x", "bad\\")]).unwrap_err();
    assert!(matches!(err, ConfigError::Template { .. }));
    assert!(err.to_string().contains("column 4"));
}

// =============================================================================
// Match-Time Outcomes Stay Errors-Free
// =============================================================================

#[test]
fn no_match_is_a_value_not_an_error() {
    let t = Translator::by_regex([(r"data/(\w+)", r"\1")]).unwrap();
    // No panic, no Result: absence is `None` / an empty vector.
    assert_eq!(t.first("images/x"), None);
    assert_eq!(t.all("images/x"), Vec::<String>::new());
}
