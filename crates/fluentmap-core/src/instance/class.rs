use crate::{
    attr::{Negation, Setter},
    error::ConventionError,
    instance::{LAYER, PropertyInstance, propose},
    model::{Cache, Class, OptimisticLock, TypeRef},
};

///
/// ClassInstance
///

pub struct ClassInstance<'a> {
    mapping: &'a mut Class,
    negation: Negation,
}

impl<'a> ClassInstance<'a> {
    pub(crate) fn new(mapping: &'a mut Class) -> Self {
        Self {
            mapping,
            negation: Negation::default(),
        }
    }

    #[must_use]
    pub const fn mapping(&self) -> &Class {
        self.mapping
    }

    #[must_use]
    pub const fn entity_type(&self) -> &TypeRef {
        &self.mapping.ty
    }

    #[must_use]
    pub fn table_name(&self) -> Option<&str> {
        self.mapping.table.get().map(String::as_str)
    }

    pub fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.table, table.into());
        self
    }

    pub fn schema(&mut self, schema: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.schema, schema.into());
        self
    }

    pub fn lazy_load(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.lazy, value);
        self
    }

    pub fn batch_size(&mut self, size: u32) -> &mut Self {
        propose(&mut self.mapping.batch_size, size);
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

    /// Mark the class immutable; `not().read_only()` keeps it mutable.
    pub fn read_only(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.mutable, !value);
        self
    }

    pub fn where_clause(&mut self, clause: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.where_clause, clause.into());
        self
    }

    pub fn check(&mut self, constraint: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.check, constraint.into());
        self
    }

    pub fn persister(&mut self, persister: TypeRef) -> &mut Self {
        propose(&mut self.mapping.persister, persister);
        self
    }

    pub fn optimistic_lock(&mut self) -> Setter<'_, Self, OptimisticLock> {
        Setter::new(self, LAYER, |i| &mut i.mapping.optimistic_lock)
    }

    pub fn cache(&mut self) -> Setter<'_, Self, Cache> {
        Setter::new(self, LAYER, |i| &mut i.mapping.cache)
    }

    /// Facade over one of the class's properties.
    pub fn property(&mut self, name: &str) -> Result<PropertyInstance<'_>, ConventionError> {
        let ty = &self.mapping.ty;
        let property = self
            .mapping
            .properties
            .iter_mut()
            .find(|p| p.member.name == name)
            .ok_or_else(|| ConventionError::UnknownMember {
                entity: ty.name.clone(),
                member: name.to_string(),
            })?;

        Ok(PropertyInstance::new(property, ty))
    }
}
