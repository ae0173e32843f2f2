//! Construction contract: a missed target lookup fails before any mutation.

use veneer_tests::prelude::*;

#[test]
fn test_missing_target_fails_construction() {
    let result = PropertyOverride::<PropertyBag>::for_target(None, props! { "color" => "blue" });
    assert!(matches!(result, Err(OverrideError::MissingTarget)));
}

#[test]
fn test_missing_target_fails_internal_construction() {
    let result =
        InternalPropertyOverride::<Widget>::for_target(None, props! { "color" => "blue" });
    assert!(matches!(result, Err(OverrideError::MissingTarget)));
}

#[test]
fn test_failed_construction_performs_no_mutation() {
    let mut widgets: std::collections::HashMap<u32, Widget> = std::collections::HashMap::new();
    widgets.insert(1, Widget::with_properties(props! { "color" => "red" }));

    // Lookup misses: no scope, and no widget observed any mutation.
    let result = PropertyOverride::for_target(widgets.get_mut(&2), props! { "color" => "blue" });
    assert!(matches!(result, Err(OverrideError::MissingTarget)));

    let widget = &widgets[&1];
    assert!(widget.events().is_empty());
    assert_eq!(widget.get("color"), Some(&Value::String("red".into())));
}

#[test]
fn test_found_lookup_constructs_and_applies() {
    let mut widgets: std::collections::HashMap<u32, Widget> = std::collections::HashMap::new();
    widgets.insert(1, Widget::with_properties(props! { "color" => "red" }));

    let scope = PropertyOverride::for_target(widgets.get_mut(&1), props! { "color" => "blue" })
        .unwrap()
        .enter()
        .unwrap();
    assert_eq!(
        scope.target().get_property("color"),
        Some(Value::String("blue".into()))
    );
    scope.exit().unwrap();

    assert_eq!(widgets[&1].get("color"), Some(&Value::String("red".into())));
}

#[test]
fn test_construction_alone_is_inert() {
    let mut bag = PropertyBag::with_properties(props! { "color" => "red" });

    let ovr = PropertyOverride::new(&mut bag, props! { "color" => "blue" });
    drop(ovr);

    assert_eq!(bag.get("color"), Some(&Value::String("red".into())));
    assert_eq!(bag.revision(), 0);
}
