use crate::{
    attr::{Negation, Setter},
    instance::{LAYER, propose},
    model::{Column, Key, OnDelete, TypeRef},
};
use derive_more::Display;

///
/// KeyOwner
///
/// Element that owns a key; decides which type the key references.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum KeyOwner {
    #[display("collection")]
    Collection,
    #[display("join")]
    Join,
    #[display("joined-subclass")]
    JoinedSubclass,
}

///
/// KeyInstance
///

pub struct KeyInstance<'a> {
    mapping: &'a mut Key,
    owner: KeyOwner,
    referenced: &'a TypeRef,
    negation: Negation,
}

impl<'a> KeyInstance<'a> {
    pub(crate) fn new(mapping: &'a mut Key, owner: KeyOwner, referenced: &'a TypeRef) -> Self {
        Self {
            mapping,
            owner,
            referenced,
            negation: Negation::default(),
        }
    }

    #[must_use]
    pub const fn mapping(&self) -> &Key {
        self.mapping
    }

    #[must_use]
    pub const fn owner(&self) -> KeyOwner {
        self.owner
    }

    /// Type whose table the key points at: the owning class for
    /// collections and joins, the superclass for joined subclasses.
    #[must_use]
    pub const fn referenced_type(&self) -> &TypeRef {
        self.referenced
    }

    pub fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    pub fn column(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.mapping.columns.rename(LAYER, name.as_ref());
        self
    }

    /// Replace all key columns at once (composite keys).
    pub fn columns<S: AsRef<str>>(&mut self, names: &[S]) -> &mut Self {
        let columns = names.iter().map(|n| Column::new(n.as_ref())).collect();
        propose(&mut self.mapping.columns, columns);
        self
    }

    pub fn foreign_key(&mut self, name: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.foreign_key, name.into());
        self
    }

    pub fn property_ref(&mut self, name: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.property_ref, name.into());
        self
    }

    pub fn on_delete(&mut self) -> Setter<'_, Self, OnDelete> {
        Setter::new(self, LAYER, |i| &mut i.mapping.on_delete)
    }

    pub fn not_nullable(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.not_null, value);
        self
    }

    pub fn update(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.update, value);
        self
    }

    pub fn unique(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.unique, value);
        self
    }
}
