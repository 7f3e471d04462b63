use serde::Serialize;

///
/// Layer
///
/// Who is writing an attribute. `Explicit` writes come from the mapping
/// DSL and are permanent; `Convention` writes only land on slots the user
/// has not set.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Layer {
    Explicit,
    Convention,
}

///
/// Slot
///
/// A single mapping attribute: its current value and whether the user set
/// it explicitly. The explicit flag never reverts once raised.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Slot<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<T>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    explicit: bool,
}

impl<T> Slot<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: None,
            explicit: false,
        }
    }

    /// Build a slot that already carries an explicit value.
    #[must_use]
    pub const fn explicit(value: T) -> Self {
        Self {
            value: Some(value),
            explicit: true,
        }
    }

    /// Build a slot holding a default (non-explicit) value.
    #[must_use]
    pub const fn defaulted(value: T) -> Self {
        Self {
            value: Some(value),
            explicit: false,
        }
    }

    /// Write and mark as explicit; always succeeds.
    pub fn set_explicit(&mut self, value: T) {
        self.value = Some(value);
        self.explicit = true;
    }

    /// Write only when the user has not set this attribute.
    /// Returns whether the value was written.
    pub fn set_default(&mut self, value: T) -> bool {
        if self.explicit {
            return false;
        }
        self.value = Some(value);

        true
    }

    /// Route a write through the given layer.
    pub fn write(&mut self, layer: Layer, value: T) -> bool {
        match layer {
            Layer::Explicit => {
                self.set_explicit(value);
                true
            }
            Layer::Convention => self.set_default(value),
        }
    }

    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Mutable access to the stored value for nested slots (columns).
    /// Does not touch the explicit flag.
    pub const fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    #[must_use]
    pub const fn is_explicit(&self) -> bool {
        self.explicit
    }

    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl<T: Clone> Slot<T> {
    /// Current value or the supplied fallback.
    #[must_use]
    pub fn value_or(&self, fallback: T) -> T {
        self.value.clone().unwrap_or(fallback)
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq<T> for Slot<T> {
    fn eq(&self, other: &T) -> bool {
        self.value.as_ref() == Some(other)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_write_lands_on_unset_slot_without_marking_it() {
        let mut slot = Slot::new();
        assert!(slot.set_default(10));

        assert_eq!(slot.get(), Some(&10));
        assert!(!slot.is_explicit());
    }

    #[test]
    fn later_default_replaces_earlier_default() {
        let mut slot = Slot::new();
        slot.set_default("first");
        slot.set_default("second");

        assert_eq!(slot, "second");
    }

    #[test]
    fn default_never_replaces_explicit() {
        let mut slot = Slot::new();
        slot.set_explicit("user");

        assert!(!slot.set_default("convention"));
        assert_eq!(slot, "user");
        assert!(slot.is_explicit());
    }

    #[test]
    fn explicit_replaces_explicit() {
        let mut slot = Slot::explicit(1);
        slot.set_explicit(2);

        assert_eq!(slot, 2);
    }

    #[test]
    fn nested_access_keeps_flag() {
        let mut slot = Slot::defaulted(vec![1]);
        slot.get_mut().unwrap().push(2);

        assert_eq!(slot, vec![1, 2]);
        assert!(!slot.is_explicit());
    }

    proptest! {
        #[test]
        fn explicit_survives_any_convention_sequence(
            user in any::<u32>(),
            before in prop::collection::vec(any::<u32>(), 0..4),
            after in prop::collection::vec(any::<u32>(), 0..8),
        ) {
            let mut slot = Slot::new();
            for value in before {
                slot.write(Layer::Convention, value);
            }
            slot.write(Layer::Explicit, user);
            for value in after {
                slot.write(Layer::Convention, value);
            }

            prop_assert_eq!(slot.get(), Some(&user));
            prop_assert!(slot.is_explicit());
        }

        #[test]
        fn last_convention_write_wins_without_explicit(
            writes in prop::collection::vec(any::<u32>(), 1..8),
        ) {
            let mut slot = Slot::new();
            for value in &writes {
                slot.write(Layer::Convention, *value);
            }

            prop_assert_eq!(slot.get(), writes.last());
            prop_assert!(!slot.is_explicit());
        }
    }
}
