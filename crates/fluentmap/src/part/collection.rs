use crate::part::{LAYER, declare};
use fluentmap_core::{
    attr::{Negation, Setter},
    model::{
        Access, Cache, Cascade, Collection, CollectionKind, Column, Fetch, NotFound,
        OptimisticLock, Relationship, TypeRef,
    },
};
use std::marker::PhantomData;

/// Marker for one-to-many parts.
pub enum OneToManyKind {}

/// Marker for many-to-many parts.
pub enum ManyToManyKind {}

pub type OneToManyPart<'a> = CollectionPart<'a, OneToManyKind>;
pub type ManyToManyPart<'a> = CollectionPart<'a, ManyToManyKind>;

///
/// CollectionPart
///
/// Declarations shared by both collection kinds; each kind adds the
/// relationship-specific ones.
///

pub struct CollectionPart<'a, K> {
    mapping: &'a mut Collection,
    negation: Negation,
    _kind: PhantomData<K>,
}

impl<'a, K> CollectionPart<'a, K> {
    pub(crate) fn new(mapping: &'a mut Collection) -> Self {
        Self {
            mapping,
            negation: Negation::default(),
            _kind: PhantomData,
        }
    }

    pub fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    /// Column of the key back to the owning type.
    pub fn key_column(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.mapping.key.columns.rename(LAYER, name.as_ref());
        self
    }

    pub fn key_columns<S: AsRef<str>>(&mut self, names: &[S]) -> &mut Self {
        let columns = names.iter().map(|n| Column::new(n.as_ref())).collect();
        declare(&mut self.mapping.key.columns, columns);
        self
    }

    /// Name of the key's foreign-key constraint.
    pub fn foreign_key_constraint_name(&mut self, name: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.key.foreign_key, name.into());
        self
    }

    /// Property on the owner the key references instead of its id.
    pub fn property_ref(&mut self, name: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.key.property_ref, name.into());
        self
    }

    pub fn table(&mut self, name: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.table_name, name.into());
        self
    }

    pub fn schema(&mut self, schema: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.schema, schema.into());
        self
    }

    pub fn where_clause(&mut self, clause: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.where_clause, clause.into());
        self
    }

    pub fn check(&mut self, constraint: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.check, constraint.into());
        self
    }

    pub fn order_by(&mut self, order: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.order_by, order.into());
        self
    }

    pub fn batch_size(&mut self, size: u32) -> &mut Self {
        declare(&mut self.mapping.batch_size, size);
        self
    }

    pub fn inverse(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.inverse, value);
        self
    }

    pub fn generic(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.generic, value);
        self
    }

    pub fn lazy_load(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.lazy, value);
        self
    }

    pub fn as_bag(&mut self) -> &mut Self {
        declare(&mut self.mapping.kind, CollectionKind::Bag);
        self
    }

    pub fn as_set(&mut self) -> &mut Self {
        declare(&mut self.mapping.kind, CollectionKind::Set);
        self
    }

    pub fn as_list(&mut self) -> &mut Self {
        declare(&mut self.mapping.kind, CollectionKind::List);
        self
    }

    pub fn collection_type<C: ?Sized + 'static>(&mut self) -> &mut Self {
        declare(&mut self.mapping.collection_type, TypeRef::of::<C>());
        self
    }

    pub fn persister<P: ?Sized + 'static>(&mut self) -> &mut Self {
        declare(&mut self.mapping.persister, TypeRef::of::<P>());
        self
    }

    pub fn access(&mut self) -> Setter<'_, Self, Access> {
        Setter::new(self, LAYER, |p| &mut p.mapping.access)
    }

    pub fn cache(&mut self) -> Setter<'_, Self, Cache> {
        Setter::new(self, LAYER, |p| &mut p.mapping.cache)
    }

    pub fn cascade(&mut self) -> Setter<'_, Self, Cascade> {
        Setter::new(self, LAYER, |p| &mut p.mapping.cascade)
    }

    pub fn fetch(&mut self) -> Setter<'_, Self, Fetch> {
        Setter::new(self, LAYER, |p| &mut p.mapping.fetch)
    }

    pub fn optimistic_lock(&mut self) -> Setter<'_, Self, OptimisticLock> {
        Setter::new(self, LAYER, |p| &mut p.mapping.optimistic_lock)
    }
}

impl CollectionPart<'_, OneToManyKind> {
    /// Behaviour when a child row is missing.
    pub fn not_found(&mut self, behaviour: NotFound) -> &mut Self {
        if let Relationship::OneToMany { not_found } = &mut self.mapping.relationship {
            declare(not_found, behaviour);
        }
        self
    }
}

impl CollectionPart<'_, ManyToManyKind> {
    /// Column of the key to the child type.
    pub fn child_key_column(&mut self, name: impl AsRef<str>) -> &mut Self {
        if let Some(many) = self.mapping.many_to_many_mut() {
            many.columns.rename(LAYER, name.as_ref());
        }
        self
    }

    pub fn child_foreign_key_constraint_name(&mut self, name: impl Into<String>) -> &mut Self {
        if let Some(many) = self.mapping.many_to_many_mut() {
            declare(&mut many.foreign_key, name.into());
        }
        self
    }
}
