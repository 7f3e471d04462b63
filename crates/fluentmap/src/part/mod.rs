//! Mapping parts.
//!
//! A part borrows one element of the mapping under construction and
//! records explicit user declarations on it. Every write marks its
//! attribute explicit, so no convention can replace it later.

mod collection;
mod discriminator;
mod id;
mod join;
mod property;
mod reference;

pub use collection::{CollectionPart, ManyToManyKind, ManyToManyPart, OneToManyKind, OneToManyPart};
pub use discriminator::DiscriminatorPart;
pub use id::IdPart;
pub use join::JoinPart;
pub use property::PropertyPart;
pub use reference::ManyToOnePart;

use fluentmap_core::model::{Layer, Slot};

/// Layer used by every part write.
pub(crate) const LAYER: Layer = Layer::Explicit;

// declare
// explicit user write
pub(crate) fn declare<T>(slot: &mut Slot<T>, value: T) {
    slot.set_explicit(value);
}

// push
// appends an element and hands back the new entry
pub(crate) fn push<E>(list: &mut Vec<E>, element: E) -> &mut E {
    list.push(element);
    let index = list.len() - 1;

    &mut list[index]
}
