//! Integration tests for world assembly

use waymark_foundation::{ErrorKind, identifier};
use waymark_world::{Actions, Area, Location, Transition, World};

#[test]
fn area_ids_derive_from_labels() {
    let area = Area::new("world-town", "Town", "The old town.");
    assert_eq!(area.id, identifier("world-town"));
    assert_eq!(area.name, "Town");
}

#[test]
fn areas_are_found_by_label_and_id() {
    let mut world = World::new();
    world.push_area(Area::new("world", "World", "")).unwrap();
    world.push_area(Area::new("world-town", "Town", "")).unwrap();

    assert_eq!(world.areas().len(), 2);
    assert_eq!(world.area_by_label("world-town").map(|a| a.name.as_str()), Some("Town"));
    assert_eq!(
        world.area(identifier("world")).map(|a| a.label.as_str()),
        Some("world")
    );
    assert!(world.area_by_label("town").is_none());
}

#[test]
fn duplicate_area_label_is_rejected() {
    let mut world = World::new();
    world.push_area(Area::new("world", "World", "")).unwrap();
    let err = world.push_area(Area::new("world", "Other World", "")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateLabel(_)));
}

#[test]
fn location_leads_back_to_its_area() {
    let mut world = World::new();
    let town = Area::new("world-town", "Town", "");
    let town_id = town.id;
    world.push_area(town).unwrap();

    let mut actions = Actions::new();
    actions.insert("north", Transition::new("world-town/gate", 3));
    world
        .locations_mut()
        .push(Location::new("world-town/square", "Square", "", town_id, actions))
        .unwrap();
    world
        .locations_mut()
        .push(Location::new("world-town/gate", "Gate", "", town_id, Actions::new()))
        .unwrap();
    world.resolve().unwrap();

    let square = world.locations().get("world-town/square").unwrap();
    assert_eq!(square.slug(), "square");
    assert_eq!(world.location_area(square).map(|a| a.label.as_str()), Some("world-town"));
    assert!(world.is_resolved());

    let err = world.push_area(Area::new("world-fort", "Fort", "")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RegistrySealed));
}

#[test]
fn duplicate_action_keeps_position_and_takes_last_target() {
    let mut actions = Actions::new();
    actions.insert("north", Transition::new("town/gate", 1));
    actions.insert("south", Transition::new("town/pier", 2));
    let old = actions.insert("north", Transition::new("town/tower", 3));

    assert_eq!(old.map(|t| t.target), Some("town/gate".to_string()));
    let order: Vec<_> = actions.iter().map(|(name, t)| (name, t.target.as_str())).collect();
    assert_eq!(order, [("north", "town/tower"), ("south", "town/pier")]);
}
