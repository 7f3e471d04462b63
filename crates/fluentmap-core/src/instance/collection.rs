use crate::{
    attr::{Negation, Setter},
    instance::{KeyInstance, KeyOwner, LAYER, propose},
    model::{
        Access, Cache, Cascade, Collection, CollectionKind, Fetch, ManyToMany, Member,
        OptimisticLock, Relationship, RelationshipKind, TypeRef,
    },
};

///
/// CollectionInstance
///
/// Facade shared by the collection, has-many, and has-many-to-many
/// categories.
///

pub struct CollectionInstance<'a> {
    mapping: &'a mut Collection,
    entity: &'a TypeRef,
    negation: Negation,
}

impl<'a> CollectionInstance<'a> {
    pub(crate) fn new(mapping: &'a mut Collection, entity: &'a TypeRef) -> Self {
        Self {
            mapping,
            entity,
            negation: Negation::default(),
        }
    }

    #[must_use]
    pub const fn mapping(&self) -> &Collection {
        self.mapping
    }

    #[must_use]
    pub const fn member(&self) -> &Member {
        &self.mapping.member
    }

    /// Type that owns the collection.
    #[must_use]
    pub const fn entity_type(&self) -> &TypeRef {
        self.entity
    }

    /// Element type of the collection.
    #[must_use]
    pub const fn child_type(&self) -> &TypeRef {
        &self.mapping.child
    }

    #[must_use]
    pub const fn relationship_kind(&self) -> RelationshipKind {
        self.mapping.relationship_kind()
    }

    #[must_use]
    pub fn table_name(&self) -> Option<&str> {
        self.mapping.table_name.get().map(String::as_str)
    }

    pub fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    /// Facade over the key that points back at the owning type.
    pub fn key(&mut self) -> KeyInstance<'_> {
        KeyInstance::new(&mut self.mapping.key, KeyOwner::Collection, self.entity)
    }

    /// Child side of a many-to-many association; `None` for one-to-many.
    pub fn relationship(&mut self) -> Option<ManyToManyInstance<'_>> {
        let child = &self.mapping.child;
        let many = match &mut self.mapping.relationship {
            Relationship::ManyToMany(many) => many,
            Relationship::OneToMany { .. } => return None,
        };

        Some(ManyToManyInstance::new(many, child))
    }

    pub fn as_bag(&mut self) -> &mut Self {
        propose(&mut self.mapping.kind, CollectionKind::Bag);
        self
    }

    pub fn as_set(&mut self) -> &mut Self {
        propose(&mut self.mapping.kind, CollectionKind::Set);
        self
    }

    pub fn as_list(&mut self) -> &mut Self {
        propose(&mut self.mapping.kind, CollectionKind::List);
        self
    }

    pub fn access(&mut self) -> Setter<'_, Self, Access> {
        Setter::new(self, LAYER, |i| &mut i.mapping.access)
    }

    pub fn cache(&mut self) -> Setter<'_, Self, Cache> {
        Setter::new(self, LAYER, |i| &mut i.mapping.cache)
    }

    pub fn cascade(&mut self) -> Setter<'_, Self, Cascade> {
        Setter::new(self, LAYER, |i| &mut i.mapping.cascade)
    }

    pub fn fetch(&mut self) -> Setter<'_, Self, Fetch> {
        Setter::new(self, LAYER, |i| &mut i.mapping.fetch)
    }

    pub fn optimistic_lock(&mut self) -> Setter<'_, Self, OptimisticLock> {
        Setter::new(self, LAYER, |i| &mut i.mapping.optimistic_lock)
    }

    pub fn batch_size(&mut self, size: u32) -> &mut Self {
        propose(&mut self.mapping.batch_size, size);
        self
    }

    pub fn check(&mut self, constraint: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.check, constraint.into());
        self
    }

    pub fn collection_type(&mut self, ty: TypeRef) -> &mut Self {
        propose(&mut self.mapping.collection_type, ty);
        self
    }

    pub fn generic(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.generic, value);
        self
    }

    pub fn inverse(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.inverse, value);
        self
    }

    pub fn lazy_load(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.lazy, value);
        self
    }

    pub fn persister(&mut self, persister: TypeRef) -> &mut Self {
        propose(&mut self.mapping.persister, persister);
        self
    }

    pub fn schema(&mut self, schema: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.schema, schema.into());
        self
    }

    pub fn where_clause(&mut self, clause: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.where_clause, clause.into());
        self
    }

    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.table_name, table.into());
        self
    }

    pub fn order_by(&mut self, order: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.order_by, order.into());
        self
    }
}

///
/// ManyToManyInstance
///

pub struct ManyToManyInstance<'a> {
    mapping: &'a mut ManyToMany,
    child: &'a TypeRef,
}

impl<'a> ManyToManyInstance<'a> {
    pub(crate) const fn new(mapping: &'a mut ManyToMany, child: &'a TypeRef) -> Self {
        Self { mapping, child }
    }

    #[must_use]
    pub const fn mapping(&self) -> &ManyToMany {
        self.mapping
    }

    #[must_use]
    pub const fn child_type(&self) -> &TypeRef {
        self.child
    }

    pub fn column(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.mapping.columns.rename(LAYER, name.as_ref());
        self
    }

    pub fn foreign_key(&mut self, name: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.foreign_key, name.into());
        self
    }
}
