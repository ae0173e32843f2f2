//! Mutation-window marking for override machinery.
//!
//! An `InternalPropertyOverride` behaves exactly like a `PropertyOverride`
//! from the caller's side, but brackets each of its two mutation phases
//! with an inner one-key override that raises `INTERNAL_MARKER` on the
//! target. An observer reacting to property changes can sample the marker
//! synchronously and tell machinery-issued writes apart from ordinary
//! application writes. The marker reverts to its own prior state as soon as
//! each phase's loop completes; it is never raised for the whole lifetime
//! of the outer scope.

use veneer_core::{props, Properties, PropertyAccess};

use crate::error::{OverrideError, OverrideResult};
use crate::overrides::{apply_overrides, restore_priors, PriorMap, PropertyOverride};
use crate::record::Prior;

/// Property raised on the target while override machinery is mutating it.
pub const INTERNAL_MARKER: &str = "_being_modified_internally";

fn marker_props() -> Properties {
    props! { INTERNAL_MARKER => true }
}

/// Restore recorded priors with the internal marker raised for the
/// duration of the loop. The marker's own prior state is saved and put
/// back by the inner override.
fn restore_within_marker<T>(target: &mut T, saved: &PriorMap) -> OverrideResult<()>
where
    T: PropertyAccess + ?Sized,
{
    let mut marker = PropertyOverride::new(target, marker_props()).enter()?;
    restore_priors(marker.target_mut(), saved)?;
    marker.exit()?;
    Ok(())
}

/// A scoped property override whose mutations are marked as internal.
///
/// Same contract as [`PropertyOverride`]; the only observable difference is
/// the transient marker window around each mutation phase.
#[derive(Debug)]
pub struct InternalPropertyOverride<'a, T: PropertyAccess + ?Sized> {
    target: &'a mut T,
    overrides: Properties,
}

impl<'a, T: PropertyAccess + ?Sized> InternalPropertyOverride<'a, T> {
    /// Create an override of the given properties on a target.
    pub fn new(target: &'a mut T, overrides: Properties) -> Self {
        Self { target, overrides }
    }

    /// Create an override over a lookup that may have missed.
    ///
    /// Fails with [`OverrideError::MissingTarget`] when the lookup produced
    /// no object; nothing is mutated on that path.
    pub fn for_target(target: Option<&'a mut T>, overrides: Properties) -> OverrideResult<Self> {
        let target = target.ok_or(OverrideError::MissingTarget)?;
        Ok(Self::new(target, overrides))
    }

    /// The intended property values.
    pub fn overrides(&self) -> &Properties {
        &self.overrides
    }

    /// Apply the overrides inside a marker window and return the scope.
    ///
    /// The inner marker override is fully driven (entered before the apply
    /// loop, exited right after), so the marker is observably raised only
    /// while this override's properties are being read and written.
    pub fn enter(self) -> OverrideResult<ActiveInternalOverride<'a, T>> {
        let Self { target, overrides } = self;
        let mut marker = PropertyOverride::new(target, marker_props()).enter()?;
        let saved = apply_overrides(marker.target_mut(), &overrides)?;
        let target = marker.exit()?;
        Ok(ActiveInternalOverride {
            target: Some(target),
            saved,
        })
    }
}

/// An entered internal override scope.
///
/// Identical to [`ActiveOverride`](crate::ActiveOverride) except that its
/// restore phase runs inside a marker window.
#[derive(Debug)]
pub struct ActiveInternalOverride<'a, T: PropertyAccess + ?Sized> {
    /// Taken by `exit`; present on every other path until drop.
    target: Option<&'a mut T>,
    saved: PriorMap,
}

impl<'a, T: PropertyAccess + ?Sized> ActiveInternalOverride<'a, T> {
    /// Access the overridden target.
    pub fn target(&self) -> &T {
        match &self.target {
            Some(target) => target,
            // The borrow is only taken by `exit`, which consumes the scope.
            None => unreachable!(),
        }
    }

    /// Mutably access the overridden target.
    pub fn target_mut(&mut self) -> &mut T {
        match &mut self.target {
            Some(target) => target,
            None => unreachable!(),
        }
    }

    /// Names of properties that did not exist before entry, in name order.
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.saved
            .iter()
            .filter(|(_, prior)| prior.is_absent())
            .map(|(name, _)| name.as_str())
    }

    /// The recorded prior state for one property, if it was overridden.
    pub fn prior(&self, name: &str) -> Option<&Prior> {
        self.saved.get(name)
    }

    /// Restore prior state inside a marker window and give the borrow back.
    pub fn exit(mut self) -> OverrideResult<&'a mut T> {
        match self.target.take() {
            Some(target) => {
                restore_within_marker(&mut *target, &self.saved)?;
                Ok(target)
            }
            None => Err(OverrideError::AlreadyRestored),
        }
    }
}

impl<'a, T: PropertyAccess + ?Sized> Drop for ActiveInternalOverride<'a, T> {
    fn drop(&mut self) {
        if let Some(target) = self.target.take() {
            if let Err(err) = restore_within_marker(&mut *target, &self.saved) {
                // A destructor must not panic, and must not mask a panic
                // already unwinding through the scope.
                tracing::warn!(
                    "Failed to restore properties on {}: {}",
                    target.describe(),
                    err
                );
            }
        }
    }
}

/// Run a closure against a target with properties overridden, marking both
/// mutation phases as internal.
pub fn with_properties_internal<T, R>(
    target: &mut T,
    overrides: Properties,
    f: impl FnOnce(&mut T) -> R,
) -> OverrideResult<R>
where
    T: PropertyAccess + ?Sized,
{
    let mut scope = InternalPropertyOverride::new(target, overrides).enter()?;
    let result = f(scope.target_mut());
    scope.exit()?;
    Ok(result)
}
