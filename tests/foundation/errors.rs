//! Integration tests for Error types
//!
//! Tests error construction, display, context, and codes.

use waymark_foundation::{Error, ErrorContext, ErrorKind, Id};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_unresolved_target() {
    let err = Error::unresolved_target("world-town/gate");
    assert!(matches!(err.kind, ErrorKind::UnresolvedTarget(_)));
    assert_eq!(err.to_string(), "required location not exists: world-town/gate");
    assert_eq!(err.code(), "F5");
}

#[test]
fn error_duplicate_label() {
    let err = Error::duplicate_label("world-town/square");
    assert!(matches!(err.kind, ErrorKind::DuplicateLabel(_)));
    assert!(err.to_string().contains("world-town/square"));
}

#[test]
fn error_io_names_path() {
    let err = Error::io("maps/Town - town/map.ht.md", "permission denied");
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
    assert_eq!(
        err.to_string(),
        "io error: maps/Town - town/map.ht.md: permission denied"
    );
}

#[test]
fn error_id_collision() {
    let err = Error::new(ErrorKind::IdCollision {
        id: Id::from_raw(7),
        first: "a/x".into(),
        second: "b/y".into(),
    });
    assert_eq!(err.code(), "id-collision");
    assert_eq!(err.to_string(), "id 7 is shared by 'a/x' and 'b/y'");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_renders_text_then_location() {
    let context = ErrorContext::new()
        .with_source("Town - town/map.ht.md")
        .with_line(12)
        .with_text("* shout");
    assert_eq!(
        context.to_string(),
        "    * shout\n    line 12 in Town - town/map.ht.md"
    );
}

#[test]
fn context_without_line() {
    let context = ErrorContext::new().with_source("maps/Town");
    assert_eq!(context.to_string(), "    in maps/Town");
}

#[test]
fn context_is_kept_on_error() {
    let err = Error::new(ErrorKind::TransitionTargetMissing)
        .with_context(ErrorContext::new().with_line(3));
    assert_eq!(err.context.and_then(|c| c.line), Some(3));
}

// =============================================================================
// Codes
// =============================================================================

#[test]
fn every_format_violation_has_a_code() {
    let kinds = [
        ErrorKind::AreaLabelMissing("Town".into()),
        ErrorKind::TransitionTargetMissing,
        ErrorKind::LocationLabelMissing,
        ErrorKind::NestedLocationLabel("a/b".into()),
        ErrorKind::UnresolvedTarget("x/y".into()),
        ErrorKind::AreaNameMismatch {
            expected: "Town".into(),
            found: "City".into(),
        },
    ];
    let codes: Vec<_> = kinds.iter().map(ErrorKind::code).collect();
    assert_eq!(codes, ["F1", "F2", "F3", "F4", "F5", "F6"]);
}
