//! Instance facades.
//!
//! Each facade wraps one model element for the length of a single
//! convention call. Reads see the current values; every write goes through
//! [`Layer::Convention`](crate::model::Layer), so attributes the user set
//! explicitly are never touched.

mod class;
mod collection;
mod document;
mod join;
mod key;
mod property;
mod reference;
mod subclass;

pub use class::ClassInstance;
pub use collection::{CollectionInstance, ManyToManyInstance};
pub use document::DocumentInstance;
pub use join::JoinInstance;
pub use key::{KeyInstance, KeyOwner};
pub use property::{IdInstance, PropertyInstance};
pub use reference::ReferenceInstance;
pub use subclass::SubclassInstance;

use crate::model::{Layer, Slot};

/// Layer used by every facade write.
pub(crate) const LAYER: Layer = Layer::Convention;

// propose
// convention write that leaves explicit slots alone
pub(crate) fn propose<T>(slot: &mut Slot<T>, value: T) {
    slot.write(LAYER, value);
}
