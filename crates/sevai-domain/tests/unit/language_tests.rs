//! Unit tests for the Language value object

use sevai_domain::Language;

#[test]
fn test_language_tags() {
    assert_eq!(Language::English.tag(), "en");
    assert_eq!(Language::Tamil.tag(), "ta");
    assert_eq!(Language::Tamil.to_string(), "Tamil");
}

#[test]
fn test_language_from_str() {
    assert_eq!("en".parse::<Language>().unwrap(), Language::English);
    assert_eq!(" English ".parse::<Language>().unwrap(), Language::English);
    assert_eq!("ta".parse::<Language>().unwrap(), Language::Tamil);
    assert_eq!("தமிழ்".parse::<Language>().unwrap(), Language::Tamil);
    assert!("hindi".parse::<Language>().is_err());
}

#[test]
fn test_language_serde_uses_tags() {
    assert_eq!(serde_json::to_string(&Language::Tamil).unwrap(), "\"ta\"");
    let parsed: Language = serde_json::from_str("\"tamil\"").unwrap();
    assert_eq!(parsed, Language::Tamil);
    let parsed: Language = serde_json::from_str("\"English\"").unwrap();
    assert_eq!(parsed, Language::English);
}

#[test]
fn test_default_language_is_english() {
    assert_eq!(Language::default(), Language::English);
}
