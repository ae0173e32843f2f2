//! The base scoped-override mechanism.
//!
//! A `PropertyOverride` applies a set of named property values to a target
//! object and hands back an `ActiveOverride` guard. While the guard lives,
//! the target carries the overridden values. When the guard exits, whether
//! by an explicit `exit()`, an early return, or a panic unwinding through
//! it, every recorded prior state is replayed onto the target.

use std::collections::BTreeMap;

use veneer_core::{Properties, PropertyAccess};

use crate::error::{OverrideError, OverrideResult};
use crate::record::Prior;

/// Recorded prior state, one entry per overridden property.
pub(crate) type PriorMap = BTreeMap<String, Prior>;

/// Apply the desired values in name order, recording prior state per key.
///
/// A failed set propagates immediately; keys applied before the failure are
/// left in place. Sequential application, no rollback of the partial pass.
pub(crate) fn apply_overrides<T>(target: &mut T, desired: &Properties) -> OverrideResult<PriorMap>
where
    T: PropertyAccess + ?Sized,
{
    let mut saved = PriorMap::new();
    for (name, value) in desired {
        let prior = match target.get_property(name) {
            Some(current) => Prior::Value(current),
            None => {
                tracing::warn!(
                    "Property {} was not existing in {}",
                    name,
                    target.describe()
                );
                Prior::Absent
            }
        };
        saved.insert(name.clone(), prior);
        target.set_property(name, value.clone())?;
    }
    Ok(saved)
}

/// Replay recorded prior state in name order.
///
/// A property that was absent before is removed (idempotent if something
/// already removed it); a property that existed is set back to its recorded
/// value exactly.
pub(crate) fn restore_priors<T>(target: &mut T, saved: &PriorMap) -> OverrideResult<()>
where
    T: PropertyAccess + ?Sized,
{
    for (name, prior) in saved {
        match prior {
            Prior::Absent => {
                target.remove_property(name)?;
            }
            Prior::Value(value) => {
                target.set_property(name, value.clone())?;
            }
        }
    }
    Ok(())
}

/// A scoped property override, constructed but not yet applied.
///
/// Construction stores the exclusive borrow and the intended values; no
/// mutation happens until [`enter`](PropertyOverride::enter).
#[derive(Debug)]
pub struct PropertyOverride<'a, T: PropertyAccess + ?Sized> {
    target: &'a mut T,
    overrides: Properties,
}

impl<'a, T: PropertyAccess + ?Sized> PropertyOverride<'a, T> {
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

    /// Apply the overrides and return the active scope guard.
    ///
    /// For each property in name order, the current value (or its absence)
    /// is recorded, then the desired value is written. A property that did
    /// not exist beforehand is logged at warn level and created.
    pub fn enter(self) -> OverrideResult<ActiveOverride<'a, T>> {
        let Self { target, overrides } = self;
        let saved = apply_overrides(target, &overrides)?;
        Ok(ActiveOverride {
            target: Some(target),
            saved,
        })
    }
}

/// An entered override scope.
///
/// Holds the target for the scope's duration; the caller's block works
/// through [`target`](ActiveOverride::target) and
/// [`target_mut`](ActiveOverride::target_mut). Dropping the guard restores
/// prior state best-effort; [`exit`](ActiveOverride::exit) restores it
/// fallibly and gives the borrow back.
#[derive(Debug)]
pub struct ActiveOverride<'a, T: PropertyAccess + ?Sized> {
    /// Taken by `exit`; present on every other path until drop.
    target: Option<&'a mut T>,
    saved: PriorMap,
}

impl<'a, T: PropertyAccess + ?Sized> ActiveOverride<'a, T> {
    /// Access the overridden target.
    pub fn target(&self) -> &T {
        match &self.target {
            Some(target) => target,
            // The borrow is only taken by `exit`, which consumes the scope.
            None => unreachable!(),
        }
    }

    /// Mutably access the overridden target.
    ///
    /// The returned borrow is also the way to nest another override on the
    /// same object: the inner scope must end before this one can be touched
    /// again, which enforces strict reverse-order exit.
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

    /// Restore prior state and give the target borrow back.
    ///
    /// Restoration failures surface here; the drop path would only log
    /// them.
    pub fn exit(mut self) -> OverrideResult<&'a mut T> {
        match self.target.take() {
            Some(target) => {
                restore_priors(&mut *target, &self.saved)?;
                Ok(target)
            }
            None => Err(OverrideError::AlreadyRestored),
        }
    }
}

impl<'a, T: PropertyAccess + ?Sized> Drop for ActiveOverride<'a, T> {
    fn drop(&mut self) {
        if let Some(target) = self.target.take() {
            if let Err(err) = restore_priors(&mut *target, &self.saved) {
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

/// Run a closure against a target with properties overridden.
///
/// Prior state is restored when the closure returns, and best-effort if it
/// panics.
pub fn with_properties<T, R>(
    target: &mut T,
    overrides: Properties,
    f: impl FnOnce(&mut T) -> R,
) -> OverrideResult<R>
where
    T: PropertyAccess + ?Sized,
{
    let mut scope = PropertyOverride::new(target, overrides).enter()?;
    let result = f(scope.target_mut());
    scope.exit()?;
    Ok(result)
}
