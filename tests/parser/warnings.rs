//! Recoverable warnings collected during a walk.

use waymark_foundation::identifier;
use waymark_parser::{CollisionPolicy, ParseConfig, WarningKind};

use crate::fixtures::Tree;

#[test]
fn formatting_warnings_do_not_stop_the_parse() {
    let output = Tree::new()
        .map(
            "Town - town",
            "# Town\n###Bad - bad\n### Square - square \n*north - square\n   \n  indented\n",
        )
        .parse()
        .unwrap();

    let kinds: Vec<_> = output.diagnostics.iter().map(|d| (d.kind, d.line)).collect();
    assert_eq!(
        kinds,
        [
            (WarningKind::MissingSpaceAfterLocationMarker, Some(2)),
            (WarningKind::TrailingWhitespace, Some(3)),
            (WarningKind::MissingSpaceAfterActionMarker, Some(4)),
            (WarningKind::WhitespaceOnly, Some(5)),
            (WarningKind::LeadingWhitespace, Some(6)),
            (WarningKind::TextBeforeHeader, Some(6)),
        ]
    );
    assert_eq!(output.world.locations().len(), 1);
}

#[test]
fn whitespace_only_line_is_not_echoed() {
    let output = Tree::new().map("Town - town", "# Town\n \t\n").parse().unwrap();
    let warning = output.diagnostics.iter().next().unwrap();
    assert_eq!(warning.kind, WarningKind::WhitespaceOnly);
    assert_eq!(warning.text, None);
    assert!(warning.to_string().starts_with("Warning: string with spaces only\n    line 2 in "));
}

#[test]
fn glued_title_is_reported_with_its_text() {
    let output = Tree::new().map("Town - town", "#Town\n").parse().unwrap();
    let warning = output.diagnostics.iter().next().unwrap();
    assert_eq!(warning.kind, WarningKind::MissingSpaceAfterHash);
    assert_eq!(warning.text.as_deref(), Some("#Town"));
}

#[test]
fn missing_map_is_a_warning() {
    let output = Tree::new().area("Town - town").parse().unwrap();
    assert_eq!(output.diagnostics.count(WarningKind::MissingMap), 1);
    assert_eq!(output.world.areas().len(), 1);
}

#[test]
fn hidden_directories_are_skipped() {
    let output = Tree::new()
        .map("Town - town", "# Town\n")
        .map(".git", "not a map")
        .map("Town - town/.cache - cache", "# .cache\n")
        .parse()
        .unwrap();
    assert_eq!(output.world.areas().len(), 1);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn id_collisions_warn_by_default() {
    // "town/ppp" and "town/gbdaej" derive the same id
    let tree = Tree::new().map("Town - town", "# Town\n### P - ppp\n### G - gbdaej\n");

    let output = tree.parse().unwrap();
    assert_eq!(output.diagnostics.count(WarningKind::IdCollision), 1);
    assert_eq!(output.world.locations().len(), 2);
    assert_eq!(
        output.world.locations().get("town/gbdaej").map(|l| l.label.as_str()),
        Some("town/gbdaej")
    );

    let quiet = tree
        .parse_with(ParseConfig::new().with_collisions(CollisionPolicy::Ignore))
        .unwrap();
    assert!(quiet.diagnostics.is_empty());
}

#[test]
fn id_collision_is_reported_at_its_header() {
    let output = Tree::new()
        .map("Town - town", "# Town\n### P - ppp\n### G - gbdaej\ntext \n")
        .parse()
        .unwrap();

    let kinds: Vec<_> = output.diagnostics.iter().map(|d| (d.kind, d.line)).collect();
    assert_eq!(
        kinds,
        [
            (WarningKind::IdCollision, Some(3)),
            (WarningKind::TrailingWhitespace, Some(4)),
        ]
    );

    let collision = output.diagnostics.iter().next().unwrap();
    assert!(collision.file.ends_with("map.ht.md"));
    assert_eq!(
        collision.text,
        Some(format!(
            "id {} of 'town/gbdaej' is already used by 'town/ppp'",
            identifier("town/ppp")
        ))
    );
}
