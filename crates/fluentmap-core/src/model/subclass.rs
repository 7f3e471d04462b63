use crate::model::{Collection, Join, Key, Property, Reference, Slot, TypeRef};
use derive_more::Display;
use serde::Serialize;

///
/// SubclassKind
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, Serialize)]
pub enum SubclassKind {
    /// Stored in the root table, told apart by the discriminator.
    #[display("subclass")]
    Discriminated,

    /// Stored in its own table keyed to the superclass table.
    #[default]
    #[display("joined-subclass")]
    Joined,
}

///
/// Subclass
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Subclass {
    pub ty: TypeRef,
    pub extends: TypeRef,
    pub kind: SubclassKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,

    pub table: Slot<String>,
    pub schema: Slot<String>,
    pub discriminator_value: Slot<String>,
    pub lazy: Slot<bool>,
    pub dynamic_update: Slot<bool>,
    pub dynamic_insert: Slot<bool>,
    pub is_abstract: Slot<bool>,
    pub check: Slot<String>,
    pub batch_size: Slot<u32>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<Collection>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub joins: Vec<Join>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subclasses: Vec<Self>,
}

impl Subclass {
    #[must_use]
    pub fn new(ty: TypeRef, extends: TypeRef) -> Self {
        Self {
            ty,
            extends,
            kind: SubclassKind::default(),
            key: None,
            table: Slot::new(),
            schema: Slot::new(),
            discriminator_value: Slot::new(),
            lazy: Slot::new(),
            dynamic_update: Slot::new(),
            dynamic_insert: Slot::new(),
            is_abstract: Slot::new(),
            check: Slot::new(),
            batch_size: Slot::new(),
            properties: Vec::new(),
            references: Vec::new(),
            collections: Vec::new(),
            joins: Vec::new(),
            subclasses: Vec::new(),
        }
    }

    #[must_use]
    pub fn key_mut(&mut self) -> Option<&mut Key> {
        self.key.as_mut()
    }

    /// Find a nested subclass by type, searching depth-first.
    pub fn find_subclass_mut(&mut self, ty: &TypeRef) -> Option<&mut Self> {
        if &self.ty == ty {
            return Some(self);
        }

        self.subclasses
            .iter_mut()
            .find_map(|sub| sub.find_subclass_mut(ty))
    }
}
