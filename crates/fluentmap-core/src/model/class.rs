use crate::model::{
    Cache, Collection, Columns, Id, Join, OptimisticLock, Property, Reference, Slot, Subclass,
    TypeRef,
};
use serde::Serialize;

///
/// Class
///
/// Root node for a mapped entity type and everything it owns.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Class {
    pub ty: TypeRef,

    pub table: Slot<String>,
    pub schema: Slot<String>,
    pub lazy: Slot<bool>,
    pub batch_size: Slot<u32>,
    pub dynamic_update: Slot<bool>,
    pub dynamic_insert: Slot<bool>,
    pub mutable: Slot<bool>,
    pub where_clause: Slot<String>,
    pub check: Slot<String>,
    pub optimistic_lock: Slot<OptimisticLock>,
    pub cache: Slot<Cache>,
    pub persister: Slot<TypeRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Discriminator>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<Collection>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub joins: Vec<Join>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subclasses: Vec<Subclass>,
}

impl Class {
    #[must_use]
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            table: Slot::new(),
            schema: Slot::new(),
            lazy: Slot::new(),
            batch_size: Slot::new(),
            dynamic_update: Slot::new(),
            dynamic_insert: Slot::new(),
            mutable: Slot::new(),
            where_clause: Slot::new(),
            check: Slot::new(),
            optimistic_lock: Slot::new(),
            cache: Slot::new(),
            persister: Slot::new(),
            discriminator: None,
            id: None,
            properties: Vec::new(),
            references: Vec::new(),
            collections: Vec::new(),
            joins: Vec::new(),
            subclasses: Vec::new(),
        }
    }

    /// Find a property by member name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.member.name == name)
    }

    /// Find a subclass anywhere in this hierarchy.
    pub fn find_subclass_mut(&mut self, ty: &TypeRef) -> Option<&mut Subclass> {
        self.subclasses
            .iter_mut()
            .find_map(|sub| sub.find_subclass_mut(ty))
    }
}

///
/// Discriminator
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Discriminator {
    pub columns: Columns,
    pub force: Slot<bool>,
    pub insert: Slot<bool>,
}
