use crate::{
    attr::Negation,
    instance::{KeyInstance, KeyOwner, propose},
    model::{Subclass, SubclassKind, TypeRef},
};

///
/// SubclassInstance
///
/// Facade shared by the subclass and joined-subclass categories.
///

pub struct SubclassInstance<'a> {
    mapping: &'a mut Subclass,
    negation: Negation,
}

impl<'a> SubclassInstance<'a> {
    pub(crate) fn new(mapping: &'a mut Subclass) -> Self {
        Self {
            mapping,
            negation: Negation::default(),
        }
    }

    #[must_use]
    pub const fn mapping(&self) -> &Subclass {
        self.mapping
    }

    #[must_use]
    pub const fn entity_type(&self) -> &TypeRef {
        &self.mapping.ty
    }

    /// Direct superclass.
    #[must_use]
    pub const fn extends(&self) -> &TypeRef {
        &self.mapping.extends
    }

    #[must_use]
    pub const fn kind(&self) -> SubclassKind {
        self.mapping.kind
    }

    pub fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    /// Key to the superclass table; `None` for discriminated subclasses.
    pub fn key(&mut self) -> Option<KeyInstance<'_>> {
        let extends = &self.mapping.extends;
        self.mapping
            .key
            .as_mut()
            .map(|key| KeyInstance::new(key, KeyOwner::JoinedSubclass, extends))
    }

    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.table, table.into());
        self
    }

    pub fn schema(&mut self, schema: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.schema, schema.into());
        self
    }

    pub fn discriminator_value(&mut self, value: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.discriminator_value, value.into());
        self
    }

    pub fn lazy_load(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.lazy, value);
        self
    }

    pub fn dynamic_update(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.dynamic_update, value);
        self
    }

    pub fn dynamic_insert(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.dynamic_insert, value);
        self
    }

    pub fn abstract_(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.is_abstract, value);
        self
    }

    pub fn check(&mut self, constraint: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.check, constraint.into());
        self
    }

    pub fn batch_size(&mut self, size: u32) -> &mut Self {
        propose(&mut self.mapping.batch_size, size);
        self
    }
}
