use crate::{
    attr::{Negation, Setter},
    instance::{LAYER, propose},
    model::{Access, Cascade, Fetch, Member, NotFound, Reference, TypeRef},
};

///
/// ReferenceInstance
///

pub struct ReferenceInstance<'a> {
    mapping: &'a mut Reference,
    entity: &'a TypeRef,
    negation: Negation,
}

impl<'a> ReferenceInstance<'a> {
    pub(crate) fn new(mapping: &'a mut Reference, entity: &'a TypeRef) -> Self {
        Self {
            mapping,
            entity,
            negation: Negation::default(),
        }
    }

    #[must_use]
    pub const fn mapping(&self) -> &Reference {
        self.mapping
    }

    #[must_use]
    pub const fn member(&self) -> &Member {
        &self.mapping.member
    }

    /// Type holding the reference.
    #[must_use]
    pub const fn entity_type(&self) -> &TypeRef {
        self.entity
    }

    /// Type the reference points at.
    #[must_use]
    pub const fn referenced_type(&self) -> &TypeRef {
        &self.mapping.referenced
    }

    pub fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    pub fn column(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.mapping.columns.rename(LAYER, name.as_ref());
        self
    }

    pub fn cascade(&mut self) -> Setter<'_, Self, Cascade> {
        Setter::new(self, LAYER, |i| &mut i.mapping.cascade)
    }

    pub fn fetch(&mut self) -> Setter<'_, Self, Fetch> {
        Setter::new(self, LAYER, |i| &mut i.mapping.fetch)
    }

    pub fn not_found(&mut self) -> Setter<'_, Self, NotFound> {
        Setter::new(self, LAYER, |i| &mut i.mapping.not_found)
    }

    pub fn access(&mut self) -> Setter<'_, Self, Access> {
        Setter::new(self, LAYER, |i| &mut i.mapping.access)
    }

    pub fn lazy_load(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.lazy, value);
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

    pub fn insert(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.insert, value);
        self
    }

    pub fn update(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.update, value);
        self
    }

    pub fn read_only(&mut self) -> &mut Self {
        let value = !self.negation.take();
        propose(&mut self.mapping.insert, value);
        propose(&mut self.mapping.update, value);
        self
    }

    pub fn unique(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.unique, value);
        self
    }

    pub fn not_nullable(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.not_null, value);
        self
    }
}
