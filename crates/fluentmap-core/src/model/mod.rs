//! Mapping model: the nodes a build produces and conventions refine.
//!
//! Every settable attribute is a [`Slot`], so user declarations and
//! convention defaults share one store but never collide.

mod class;
mod collection;
mod column;
mod document;
mod join;
mod key;
mod property;
mod reference;
mod slot;
mod subclass;
mod types;

pub use class::{Class, Discriminator};
pub use collection::{Collection, ManyToMany, Relationship, RelationshipKind};
pub use column::{Column, Columns};
pub use document::Document;
pub use join::Join;
pub use key::Key;
pub use property::{Id, Property};
pub use reference::Reference;
pub use slot::{Layer, Slot};
pub use subclass::{Subclass, SubclassKind};
pub use types::{
    Access, Cache, CacheUsage, Cascade, CollectionKind, Fetch, Generator, Member, NotFound,
    OnDelete, OptimisticLock, TypeRef,
};
