//! Convention engine.
//!
//! A convention is a policy object that refines elements of the mapping
//! model through instance facades. It declares which element categories it
//! handles by registering itself into a [`DispatchTable`]; the build walks
//! the model and runs each category's handlers in registration order.

mod collection;
mod defaults;
mod dispatch;
mod finder;
mod foreign_key;

pub mod builder;
pub mod helpers;

pub use builder::ConventionBuilder;
pub use collection::ConventionCollection;
pub use defaults::{DefaultColumnNames, DefaultForeignKey, DefaultTableNames};
pub use dispatch::{DispatchEntry, DispatchTable};
pub use finder::{ConventionFinder, DefaultConventionFinder};
pub use foreign_key::{ForeignKeyConvention, ForeignKeyNaming};

use crate::{
    error::ConventionError,
    instance::{
        ClassInstance, CollectionInstance, DocumentInstance, IdInstance, JoinInstance,
        KeyInstance, PropertyInstance, ReferenceInstance, SubclassInstance,
    },
};
use derive_more::Display;
use serde::Serialize;
use std::{any::Any, sync::Arc};

///
/// ConventionCategory
///
/// Element kinds a convention can target. Collection conventions see every
/// collection; HasMany and HasManyToMany narrow to one relationship kind.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum ConventionCategory {
    Document,
    Class,
    Id,
    Property,
    Reference,
    Collection,
    HasMany,
    HasManyToMany,
    Key,
    Join,
    Subclass,
    JoinedSubclass,
}

impl ConventionCategory {
    pub const ALL: [Self; 12] = [
        Self::Document,
        Self::Class,
        Self::Id,
        Self::Property,
        Self::Reference,
        Self::Collection,
        Self::HasMany,
        Self::HasManyToMany,
        Self::Key,
        Self::Join,
        Self::Subclass,
        Self::JoinedSubclass,
    ];
}

///
/// Convention
///
/// Registration half of a convention. Implementors add themselves to every
/// category they handle; one instance may appear in several categories and
/// runs once per matching element in each.
///

pub trait Convention: Any + Send + Sync {
    fn register(self: Arc<Self>, table: &mut DispatchTable);

    /// Name used in logs and errors.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

// category
// declares one capability trait over its facade type
macro_rules! category {
    ($(#[$meta:meta])* $trait:ident, $instance:ident) => {
        $(#[$meta])*
        pub trait $trait: Send + Sync {
            /// Acceptance criteria; a rejected element is skipped.
            fn accepts(&self, _instance: &$instance<'_>) -> bool {
                true
            }

            fn apply(&self, instance: &mut $instance<'_>) -> Result<(), ConventionError>;
        }
    };
}

category!(
    /// Document-wide defaults.
    DocumentConvention,
    DocumentInstance
);
category!(ClassConvention, ClassInstance);
category!(IdConvention, IdInstance);
category!(PropertyConvention, PropertyInstance);
category!(ReferenceConvention, ReferenceInstance);
category!(
    /// Every collection regardless of relationship kind.
    CollectionConvention,
    CollectionInstance
);
category!(
    /// One-to-many collections only.
    HasManyConvention,
    CollectionInstance
);
category!(
    /// Many-to-many collections only.
    HasManyToManyConvention,
    CollectionInstance
);
category!(
    /// Keys owned by collections, joins and joined subclasses; runs after
    /// the owning element's own conventions.
    KeyConvention,
    KeyInstance
);
category!(JoinConvention, JoinInstance);
category!(
    /// Every subclass regardless of kind.
    SubclassConvention,
    SubclassInstance
);
category!(
    /// Joined subclasses only.
    JoinedSubclassConvention,
    SubclassInstance
);
