use crate::{
    attr::{Negation, Setter},
    instance::{KeyInstance, KeyOwner, LAYER, propose},
    model::{Fetch, Join, TypeRef},
};

///
/// JoinInstance
///

pub struct JoinInstance<'a> {
    mapping: &'a mut Join,
    entity: &'a TypeRef,
    negation: Negation,
}

impl<'a> JoinInstance<'a> {
    pub(crate) fn new(mapping: &'a mut Join, entity: &'a TypeRef) -> Self {
        Self {
            mapping,
            entity,
            negation: Negation::default(),
        }
    }

    #[must_use]
    pub const fn mapping(&self) -> &Join {
        self.mapping
    }

    #[must_use]
    pub const fn entity_type(&self) -> &TypeRef {
        self.entity
    }

    #[must_use]
    pub fn table_name(&self) -> Option<&str> {
        self.mapping.table.get().map(String::as_str)
    }

    pub fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    pub fn key(&mut self) -> KeyInstance<'_> {
        KeyInstance::new(&mut self.mapping.key, KeyOwner::Join, self.entity)
    }

    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.table, table.into());
        self
    }

    pub fn schema(&mut self, schema: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.schema, schema.into());
        self
    }

    pub fn fetch(&mut self) -> Setter<'_, Self, Fetch> {
        Setter::new(self, LAYER, |i| &mut i.mapping.fetch)
    }

    pub fn inverse(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.inverse, value);
        self
    }

    pub fn optional(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.optional, value);
        self
    }
}
