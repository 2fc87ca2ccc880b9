use cursor_framework::{CharClass, ClassRegistry, Cursor, CursorConfig, Matcher, RegistryError};
use std::sync::Arc;

#[test]
fn test_standard_registry_has_every_class() {
    let registry = ClassRegistry::standard();
    assert_eq!(registry.len(), CharClass::ALL.len());
    for class in CharClass::ALL {
        assert!(registry.contains(class.name()), "missing {class}");
    }
}

#[test]
fn test_standard_registry_is_shared() {
    assert!(Arc::ptr_eq(&ClassRegistry::standard(), &ClassRegistry::standard()));
}

#[test]
fn test_matches_literal_class() {
    let registry = ClassRegistry::standard();
    assert!(registry.matches("semicolon", ";"));
    assert!(!registry.matches("semicolon", ":"));
    assert!(registry.matches("whitespace", " "));
    assert!(!registry.matches("whitespace", "\t"));
}

#[test]
fn test_matches_pattern_class() {
    let registry = ClassRegistry::standard();
    assert!(registry.matches("digit", "7"));
    assert!(!registry.matches("digit", "x"));
    assert!(registry.matches("alphabet", "_"));
    assert!(registry.matches("newline", "\n"));
    assert!(registry.matches("newline", "\r"));
    assert!(registry.matches("newline", "\u{2028}"));
    assert!(registry.matches("round_bracket", ")"));
    assert!(!registry.matches("round_bracket", "]"));
}

#[test]
fn test_quote_class() {
    let registry = ClassRegistry::standard();
    for quote in ["'", "\"", "`"] {
        assert!(registry.matches("quote", quote));
    }
    assert!(!registry.matches("quote", "a"));
}

#[test]
fn test_matches_unknown_name_is_literal() {
    let registry = ClassRegistry::standard();
    assert!(registry.classify("const ").is_none());
    assert!(registry.matches("const ", "const "));
    assert!(registry.matches("const_", "const "));
    assert!(!registry.matches("const", "let"));
}

#[test]
fn test_classify_accepts_spaced_names() {
    let registry = ClassRegistry::standard();
    assert!(registry.classify("left angle bracket").is_some());
    assert!(registry.classify("left_angle_bracket").is_some());
    assert!(registry.matches("left angle bracket", "<"));
}

#[test]
fn test_char_class_from_name() {
    assert_eq!(CharClass::from_name("dollar_sign"), Some(CharClass::DollarSign));
    assert_eq!(CharClass::from_name("dollar sign"), Some(CharClass::DollarSign));
    assert_eq!(CharClass::from_name("dollar"), None);
    assert_eq!("curly_bracket".parse::<CharClass>(), Ok(CharClass::CurlyBracket));
    assert!("nope".parse::<CharClass>().is_err());
    assert_eq!(CharClass::ExclamationSign.to_string(), "exclamation_sign");
}

#[test]
fn test_matcher_is_match_char() {
    let matcher = Matcher::literal("$");
    assert!(matcher.is_match_char('$'));
    assert!(!matcher.is_match_char('#'));

    let matcher = Matcher::pattern("[a-f]").unwrap();
    assert!(matcher.is_match_char('c'));
    assert!(!matcher.is_match_char('z'));
}

#[test]
fn test_custom_registry() {
    let registry = ClassRegistry::builder()
        .standard_classes()
        .literal("arrow", "=>")
        .unwrap()
        .pattern("hex", "[0-9a-fA-F]")
        .unwrap()
        .build();
    let config = CursorConfig::new().registry(registry);
    let mut cursor = Cursor::with_config("ff=>", config);

    assert_eq!(cursor.read_while("hex"), "ff");
    assert!(cursor.is(&["arrow"]));
    assert!(cursor.is_eof());
}

#[test]
fn test_registered_literal_class_consumes_whole_text() {
    let registry = ClassRegistry::builder()
        .standard_classes()
        .literal("arrow", "=>")
        .unwrap()
        .build();
    let config = CursorConfig::new().registry(registry);
    let mut cursor = Cursor::with_config("ab=>c=", config);

    assert_eq!(cursor.read_until("arrow"), "ab");
    assert!(cursor.check("arrow"));
    assert!(cursor.is(&["arrow"]));
    assert_eq!(cursor.index(), 3);
    assert_eq!(cursor.read(1), "c");
    // A partial arrow at the end does not match.
    assert!(!cursor.is(&["arrow"]));
    assert_eq!(cursor.index(), 4);
}

#[test]
fn test_digit_and_alphabet_are_ascii() {
    let registry = ClassRegistry::standard();
    assert!(registry.matches("digit", "7"));
    assert!(!registry.matches("digit", "٣"));
    assert!(!registry.matches("digit", "７"));
    assert!(registry.matches("alphabet", "Z"));
    assert!(!registry.matches("alphabet", "变"));
    assert!(!registry.matches("alphabet", "é"));

    let mut cursor = Cursor::new("٣١x");
    assert_eq!(cursor.read_while(CharClass::Digit), "");
    assert!(!Cursor::new("变量").is_class(CharClass::Alphabet));
}

#[test]
fn test_registry_overrides_standard_class() {
    let registry = ClassRegistry::builder()
        .standard_classes()
        .pattern("whitespace", r"\s")
        .unwrap()
        .build();
    let config = CursorConfig::new().registry(registry);
    let mut cursor = Cursor::with_config("\t \nx", config);
    assert_eq!(cursor.read_while(CharClass::Whitespace), "\t \n");
}

#[test]
fn test_registry_rejects_empty_name() {
    let err = ClassRegistry::builder().literal("", "x").unwrap_err();
    assert!(matches!(err, RegistryError::EmptyName));
}

#[test]
fn test_registry_rejects_invalid_pattern() {
    let err = ClassRegistry::builder().pattern("broken", "[unclosed").unwrap_err();
    match err {
        RegistryError::InvalidPattern { name, .. } => assert_eq!(name, "broken"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_registered_spaced_name() {
    let registry = ClassRegistry::builder()
        .literal("fat arrow", "=>")
        .unwrap()
        .build();
    assert!(registry.classify("fat_arrow").is_some());
    assert!(registry.classify("fat arrow").is_some());
}
