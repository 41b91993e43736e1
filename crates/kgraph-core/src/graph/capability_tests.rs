//! Tests for injected vertex capabilities.

use super::capability::Capabilities;

#[test]
fn test_default_uses_partial_eq() {
    let caps = Capabilities::<char>::new();
    assert!(caps.equals(&'A', &'A'));
    assert!(!caps.equals(&'A', &'B'));
    assert!(!caps.has_display());
    assert_eq!(caps.display(&'A'), None);
}

#[test]
fn test_custom_equality() {
    let caps = Capabilities::<f32>::new().with_equality(|a, b| (a - b).abs() < 1e-6);
    assert!(caps.equals(&1.0, &1.000_000_1));
    assert!(!caps.equals(&1.0, &1.1));
}

#[test]
fn test_custom_display() {
    let caps = Capabilities::<char>::new().with_display(|v| format!("{v}-"));
    assert!(caps.has_display());
    assert_eq!(caps.display(&'V').as_deref(), Some("V-"));
}

#[test]
fn test_case_insensitive_equality() {
    let caps = Capabilities::<String>::new().with_equality(|a, b| a.eq_ignore_ascii_case(b));
    assert!(caps.equals(&"Alpha".to_string(), &"ALPHA".to_string()));
}

#[test]
fn test_debug_reports_presence() {
    let caps = Capabilities::<char>::new().with_display(|v| v.to_string());
    let debug = format!("{caps:?}");
    assert!(debug.contains("equality: false"));
    assert!(debug.contains("display: true"));
}
