use std::io::Write;

use super::{BuiltinRegistry, EMBEDDED_BUILTINS};
use crate::error::RegistryError;

const TWO_ENTRIES: &str = r#"[
    {
        "name": "Wait",
        "text": "void Wait(int frames)",
        "brief": "Suspend the script.",
        "signature": { "label": "void Wait(int frames)", "parameters": [{ "label": "int frames" }] }
    },
    {
        "name": "GetCaller",
        "text": "object GetCaller()",
        "signature": { "label": "object GetCaller()" }
    }
]"#;

#[test]
fn test_embedded_table_loads() {
    let registry = BuiltinRegistry::embedded().expect("embedded builtins parse");
    assert!(!registry.is_empty());
    for name in ["Print", "Wait", "MoveObject", "CreateObject", "GetCaller"] {
        assert!(registry.contains(name), "missing builtin: {}", name);
    }
    let print = registry.get("Print").unwrap();
    assert_eq!(print.text, "void Print(string message)");
    assert_eq!(print.signature.parameters.len(), 1);
}

#[test]
fn test_embedded_signatures_match_text() {
    let registry = BuiltinRegistry::embedded().unwrap();
    for entry in registry.iter() {
        assert_eq!(entry.signature.label, entry.text, "label mismatch for {}", entry.name);
        assert!(entry.text.contains(&entry.name));
    }
    assert!(EMBEDDED_BUILTINS.trim_start().starts_with('['));
}

#[test]
fn test_lookup_and_order() {
    let registry = BuiltinRegistry::from_json_str(TWO_ENTRIES).unwrap();
    assert_eq!(registry.len(), 2);
    let names: Vec<&str> = registry.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Wait", "GetCaller"]);

    let caller = registry.get("GetCaller").unwrap();
    assert!(caller.brief.is_empty());
    assert!(caller.detail.is_empty());
    assert!(caller.signature.parameters.is_empty());
    assert!(registry.get("wait").is_none());
}

#[test]
fn test_duplicate_names_rejected() {
    let json = r#"[
        { "name": "Wait", "text": "a", "signature": { "label": "a" } },
        { "name": "Wait", "text": "b", "signature": { "label": "b" } }
    ]"#;
    match BuiltinRegistry::from_json_str(json) {
        Err(RegistryError::DuplicateName(name)) => assert_eq!(name, "Wait"),
        other => panic!("expected duplicate error, got {:?}", other),
    }
}

#[test]
fn test_empty_name_rejected() {
    let json = r#"[{ "name": " ", "text": "a", "signature": { "label": "a" } }]"#;
    assert!(matches!(
        BuiltinRegistry::from_json_str(json),
        Err(RegistryError::EmptyName { index: 0 })
    ));
}

#[test]
fn test_malformed_json_rejected() {
    let err = BuiltinRegistry::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, RegistryError::Json(_)));
    assert!(err.to_string().starts_with("malformed builtin table"));
}

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TWO_ENTRIES.as_bytes()).unwrap();
    let registry = BuiltinRegistry::from_path(file.path()).unwrap();
    assert!(registry.contains("Wait"));

    let missing = BuiltinRegistry::from_path(file.path().with_extension("missing")).unwrap_err();
    assert!(matches!(missing, RegistryError::Io { .. }));
}
