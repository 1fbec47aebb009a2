//! Whole-tree parsing into a resolved world.

use waymark_foundation::identifier;
use waymark_world::Transition;

use crate::fixtures::{Tree, WORLD, town_tree};

// =============================================================================
// Example Tree
// =============================================================================

#[test]
fn town_example() {
    let output = town_tree().parse().unwrap();
    let world = &output.world;

    let areas: Vec<_> = world.areas().iter().map(|a| a.label.as_str()).collect();
    assert_eq!(areas, ["world", "world-town"]);
    assert_eq!(world.areas()[0].description, "The whole world.");

    let labels: Vec<_> = world.locations().iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, ["world-town/square", "world-town/gate"]);

    let square = world.locations().get("world-town/square").unwrap();
    assert_eq!(square.name, "Square");
    assert_eq!(square.description, "A quiet square.");
    assert_eq!(square.area, identifier("world-town"));
    assert_eq!(
        square.actions.get("north").and_then(Transition::target_id),
        Some(identifier("world-town/gate"))
    );

    let gate = world.locations().get("world-town/gate").unwrap();
    assert_eq!(
        gate.actions.get("back").and_then(Transition::target_id),
        Some(square.id)
    );

    assert!(output.diagnostics.is_empty());
}

#[test]
fn parsing_twice_is_identical() {
    let tree = town_tree().map(
        "World - world/Fort - fort",
        "# Fort\n### Yard - yard\n* town - world-town/square\n",
    );
    let first = tree.parse().unwrap().world;
    let second = tree.parse().unwrap().world;

    assert_eq!(first.areas(), second.areas());
    let a: Vec<_> = first.locations().iter().collect();
    let b: Vec<_> = second.locations().iter().collect();
    assert_eq!(a, b);
}

// =============================================================================
// Cross-Area Targets
// =============================================================================

#[test]
fn cross_area_targets_resolve() {
    let output = town_tree()
        .map(
            "World - world/Fort - fort",
            "# Fort\n### Yard - yard\n* town - world-town/square\n",
        )
        .parse()
        .unwrap();

    let yard = output.world.locations().get("world-fort/yard").unwrap();
    assert_eq!(
        yard.actions.get("town").and_then(Transition::target_id),
        Some(identifier("world-town/square"))
    );
}

#[test]
fn targets_may_point_at_later_areas() {
    let output = Tree::new()
        .map("A - a", "# A\n### Start - start\n* go - b/end\n")
        .map("B - b", "# B\n### End - end\n")
        .parse()
        .unwrap();

    let start = output.world.locations().get("a/start").unwrap();
    assert_eq!(
        start.actions.get("go").and_then(Transition::target_id),
        Some(identifier("b/end"))
    );
}

// =============================================================================
// Map Details
// =============================================================================

#[test]
fn descriptions_keep_inner_lines() {
    let output = Tree::new()
        .map(
            "Town - town",
            "# Town\n\n### Square - square\n\nFirst line.\n\nSecond line.\n\n",
        )
        .parse()
        .unwrap();

    let square = output.world.locations().get("town/square").unwrap();
    assert_eq!(square.description, "First line.\n\nSecond line.");
    assert_eq!(output.world.areas()[0].description, "");
}

#[test]
fn repeated_action_keeps_first_position() {
    let output = Tree::new()
        .map(
            "Town - town",
            "# Town
### Square - square
* north - gate
* east - pier
* north - tower
### Gate - gate
### Pier - pier
### Tower - tower
",
        )
        .parse()
        .unwrap();

    let square = output.world.locations().get("town/square").unwrap();
    let actions: Vec<_> = square
        .actions
        .iter()
        .map(|(name, t)| (name, t.target_id()))
        .collect();
    assert_eq!(
        actions,
        [
            ("north", Some(identifier("town/tower"))),
            ("east", Some(identifier("town/pier"))),
        ]
    );
}

#[test]
fn location_with_no_actions() {
    let output = Tree::new()
        .map("Town - town", "# Town\n### Well - well\nDeep.\n")
        .parse()
        .unwrap();
    let well = output.world.locations().get("town/well").unwrap();
    assert!(well.actions.is_empty());
}

#[test]
fn map_without_title_is_accepted() {
    let output = Tree::new()
        .map("Town - town", "### Square - square\n")
        .parse()
        .unwrap();
    assert_eq!(output.world.locations().len(), 1);
}

#[test]
fn area_with_only_sub_areas() {
    let output = Tree::new()
        .area("World - world")
        .map("World - world/Town - town", "# Town\n")
        .map("World - world/Town - town/Old Quarter - old", "# Old Quarter\n")
        .parse()
        .unwrap();

    let labels: Vec<_> = output.world.areas().iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, ["world", "world-town", "world-town-old"]);
    assert!(output.world.locations().is_empty());
}

#[test]
fn sibling_areas_reset_the_chain() {
    let output = Tree::new()
        .map("World - world", WORLD)
        .map("World - world/A - a/Deep - deep", "# Deep\n")
        .map("World - world/B - b", "# B\n")
        .parse()
        .unwrap();

    let labels: Vec<_> = output.world.areas().iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, ["world", "world-a", "world-a-deep", "world-b"]);
}
