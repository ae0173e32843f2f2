//! Failures of the underlying property access propagate uncaught.
//!
//! Sequential application: keys applied before the failing one stay
//! applied. This is the documented limitation, not a rollback guarantee.

use veneer_tests::prelude::*;

#[test]
fn test_read_only_property_aborts_entry() {
    let mut lamp = Lamp::new("desk");

    // Name order: "brightness" applies first, then "model" is rejected.
    let result = PropertyOverride::new(
        &mut lamp,
        props! { "brightness" => 20i64, "model" => "fake" },
    )
    .enter();

    assert!(matches!(
        result,
        Err(OverrideError::Property(PropertyError::ReadOnly { .. }))
    ));
    drop(result);

    // Applied prefix survives; nothing after the failure was touched.
    assert_eq!(lamp.brightness(), 20);
    assert_eq!(lamp.model(), "desk");
}

#[test]
fn test_unknown_property_aborts_entry_on_fixed_schema() {
    let mut lamp = Lamp::new("desk");

    let result = PropertyOverride::new(&mut lamp, props! { "warmth" => 3i64 }).enter();

    assert!(matches!(
        result,
        Err(OverrideError::Property(PropertyError::UnknownProperty { .. }))
    ));
    drop(result);
    assert_eq!(lamp.brightness(), 100);
}

#[test]
fn test_type_mismatch_aborts_entry() {
    let mut lamp = Lamp::new("desk");

    let result = PropertyOverride::new(&mut lamp, props! { "lit" => "yes" }).enter();

    assert!(matches!(
        result,
        Err(OverrideError::Property(PropertyError::TypeMismatch { .. }))
    ));
    drop(result);
    assert!(!lamp.lit());
}

#[test]
fn test_internal_entry_failure_still_lowers_marker() {
    // The marker override brackets the failing apply loop; its guard drops
    // on the error path and puts the marker back.
    let mut widget = Widget::with_properties(props! { "color" => "red" });

    struct Rejecting<'w>(&'w mut Widget);

    impl PropertyAccess for Rejecting<'_> {
        fn get_property(&self, name: &str) -> Option<Value> {
            self.0.get_property(name)
        }

        fn set_property(&mut self, name: &str, value: Value) -> veneer_core::PropertyResult<()> {
            if name == "frozen" {
                return Err(PropertyError::read_only(name));
            }
            self.0.set_property(name, value)
        }

        fn remove_property(
            &mut self,
            name: &str,
        ) -> veneer_core::PropertyResult<Option<Value>> {
            self.0.remove_property(name)
        }
    }

    let mut target = Rejecting(&mut widget);
    let result = InternalPropertyOverride::new(
        &mut target,
        props! { "color" => "blue", "frozen" => 1i64 },
    )
    .enter();
    assert!(matches!(result, Err(OverrideError::Property(_))));
    drop(result);

    // "color" sorts before "frozen": it was applied and stays applied.
    assert_eq!(widget.get("color"), Some(&Value::String("blue".into())));
    // The marker window closed on the failure path.
    assert!(!widget.contains(INTERNAL_MARKER));
}
