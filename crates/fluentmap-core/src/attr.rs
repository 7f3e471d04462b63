//! Attribute setters shared by the mapping DSL and the convention facades.
//!
//! A setter borrows its parent part (or instance) and a projection onto one
//! slot, writes through the parent's layer, and hands the parent back so
//! calls keep chaining.

use crate::model::{
    Access, Cache, CacheUsage, Cascade, Fetch, Generator, Layer, NotFound, OnDelete,
    OptimisticLock, Slot,
};

///
/// Setter
///

pub struct Setter<'a, P, T> {
    parent: &'a mut P,
    slot: fn(&mut P) -> &mut Slot<T>,
    layer: Layer,
}

impl<'a, P, T> Setter<'a, P, T> {
    pub fn new(parent: &'a mut P, layer: Layer, slot: fn(&mut P) -> &mut Slot<T>) -> Self {
        Self {
            parent,
            slot,
            layer,
        }
    }

    /// Write `value` through the parent's layer.
    pub fn set(self, value: T) -> &'a mut P {
        (self.slot)(&mut *self.parent).write(self.layer, value);

        self.parent
    }
}

impl<'a, P> Setter<'a, P, Access> {
    pub fn property(self) -> &'a mut P {
        self.set(Access::Property)
    }

    pub fn field(self) -> &'a mut P {
        self.set(Access::Field)
    }

    pub fn camel_case_field(self) -> &'a mut P {
        self.set(Access::CamelCaseField)
    }

    pub fn backing_field(self) -> &'a mut P {
        self.set(Access::BackingField)
    }

    pub fn read_only_property(self) -> &'a mut P {
        self.set(Access::ReadOnlyProperty)
    }

    pub fn no_setter(self) -> &'a mut P {
        self.set(Access::NoSetterCamelCase)
    }

    pub fn no_op(self) -> &'a mut P {
        self.set(Access::NoOp)
    }
}

impl<'a, P> Setter<'a, P, Cascade> {
    pub fn all(self) -> &'a mut P {
        self.set(Cascade::All)
    }

    pub fn none(self) -> &'a mut P {
        self.set(Cascade::None)
    }

    pub fn save_update(self) -> &'a mut P {
        self.set(Cascade::SaveUpdate)
    }

    pub fn delete(self) -> &'a mut P {
        self.set(Cascade::Delete)
    }

    pub fn all_delete_orphan(self) -> &'a mut P {
        self.set(Cascade::AllDeleteOrphan)
    }

    pub fn delete_orphan(self) -> &'a mut P {
        self.set(Cascade::DeleteOrphan)
    }

    pub fn merge(self) -> &'a mut P {
        self.set(Cascade::Merge)
    }
}

impl<'a, P> Setter<'a, P, Fetch> {
    pub fn select(self) -> &'a mut P {
        self.set(Fetch::Select)
    }

    pub fn join(self) -> &'a mut P {
        self.set(Fetch::Join)
    }

    pub fn subselect(self) -> &'a mut P {
        self.set(Fetch::Subselect)
    }
}

impl<'a, P> Setter<'a, P, Cache> {
    pub fn read_only(self) -> &'a mut P {
        self.set(Cache::new(CacheUsage::ReadOnly))
    }

    pub fn read_write(self) -> &'a mut P {
        self.set(Cache::new(CacheUsage::ReadWrite))
    }

    pub fn non_strict_read_write(self) -> &'a mut P {
        self.set(Cache::new(CacheUsage::NonStrictReadWrite))
    }

    pub fn transactional(self) -> &'a mut P {
        self.set(Cache::new(CacheUsage::Transactional))
    }

    /// Cache with an explicit usage in a named region.
    pub fn region(self, usage: CacheUsage, region: impl Into<String>) -> &'a mut P {
        self.set(Cache {
            usage,
            region: Some(region.into()),
        })
    }
}

impl<'a, P> Setter<'a, P, OptimisticLock> {
    pub fn none(self) -> &'a mut P {
        self.set(OptimisticLock::None)
    }

    pub fn version(self) -> &'a mut P {
        self.set(OptimisticLock::Version)
    }

    pub fn dirty(self) -> &'a mut P {
        self.set(OptimisticLock::Dirty)
    }

    pub fn all(self) -> &'a mut P {
        self.set(OptimisticLock::All)
    }
}

impl<'a, P> Setter<'a, P, NotFound> {
    pub fn ignore(self) -> &'a mut P {
        self.set(NotFound::Ignore)
    }

    pub fn exception(self) -> &'a mut P {
        self.set(NotFound::Exception)
    }
}

impl<'a, P> Setter<'a, P, OnDelete> {
    pub fn cascade(self) -> &'a mut P {
        self.set(OnDelete::Cascade)
    }

    pub fn no_action(self) -> &'a mut P {
        self.set(OnDelete::NoAction)
    }
}

impl<'a, P> Setter<'a, P, Generator> {
    pub fn assigned(self) -> &'a mut P {
        self.set(Generator::Assigned)
    }

    pub fn identity(self) -> &'a mut P {
        self.set(Generator::Identity)
    }

    pub fn native(self) -> &'a mut P {
        self.set(Generator::Native)
    }

    pub fn guid(self) -> &'a mut P {
        self.set(Generator::Guid)
    }

    pub fn guid_comb(self) -> &'a mut P {
        self.set(Generator::GuidComb)
    }

    pub fn increment(self) -> &'a mut P {
        self.set(Generator::Increment)
    }

    pub fn sequence(self, name: impl Into<String>) -> &'a mut P {
        self.set(Generator::Sequence(name.into()))
    }
}

///
/// Negation
///
/// One-shot flag behind `not()`: the next boolean write is inverted and
/// the flag resets.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Negation(bool);

impl Negation {
    pub const fn toggle(&mut self) {
        self.0 = !self.0;
    }

    /// Consume the flag, returning the value a boolean setter should write.
    pub const fn take(&mut self) -> bool {
        let value = !self.0;
        self.0 = false;

        value
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Part {
        cascade: Slot<Cascade>,
        lock: Slot<OptimisticLock>,
    }

    #[test]
    fn setter_writes_through_layer_and_returns_parent() {
        let mut part = Part::default();
        Setter::new(&mut part, Layer::Explicit, |p| &mut p.cascade).all();
        Setter::new(&mut part, Layer::Convention, |p| &mut p.cascade).none();
        Setter::new(&mut part, Layer::Convention, |p| &mut p.lock).dirty();

        assert_eq!(part.cascade, Cascade::All);
        assert_eq!(part.lock, OptimisticLock::Dirty);
    }

    #[test]
    fn negation_applies_once() {
        let mut neg = Negation::default();
        neg.toggle();

        assert!(!neg.take());
        assert!(neg.take());
    }

    #[test]
    fn double_negation_cancels() {
        let mut neg = Negation::default();
        neg.toggle();
        neg.toggle();

        assert!(neg.take());
    }
}
