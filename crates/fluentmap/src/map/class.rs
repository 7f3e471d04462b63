use crate::{
    map::{Mapped, members},
    part::{DiscriminatorPart, IdPart, LAYER, declare},
};
use fluentmap_core::{
    attr::{Negation, Setter},
    build::{MappingProvider, ProvidedMapping},
    error::SourceError,
    model::{Cache, Class, Column, Columns, Discriminator, Id, Member, OptimisticLock, TypeRef},
};
use std::marker::PhantomData;
use tracing::trace;

///
/// ClassMap
///
/// Mapping of a root entity type `T`.
///

pub struct ClassMap<T: Mapped> {
    mapping: Class,
    negation: Negation,
    _ty: PhantomData<fn() -> T>,
}

impl<T: Mapped> ClassMap<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mapping: Class::new(T::type_ref()),
            negation: Negation::default(),
            _ty: PhantomData,
        }
    }

    /// The model declared so far.
    #[must_use]
    pub const fn mapping(&self) -> &Class {
        &self.mapping
    }

    #[must_use]
    pub fn into_mapping(self) -> Class {
        self.mapping
    }

    pub fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    /// Identifier member; replaces any earlier id declaration.
    pub fn id(&mut self, member: impl Into<Member>) -> IdPart<'_> {
        IdPart::new(self.mapping.id.insert(Id::new(member.into())))
    }

    /// Store subclasses in this table, told apart by `column`.
    pub fn discriminate_subclasses_on_column(
        &mut self,
        column: impl Into<String>,
    ) -> DiscriminatorPart<'_> {
        let discriminator = Discriminator {
            columns: Columns::explicit(vec![Column::new(column)]),
            ..Discriminator::default()
        };

        DiscriminatorPart::new(self.mapping.discriminator.insert(discriminator))
    }

    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.table, table.into());
        self
    }

    pub fn schema(&mut self, schema: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.schema, schema.into());
        self
    }

    pub fn lazy_load(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.lazy, value);
        self
    }

    pub fn batch_size(&mut self, size: u32) -> &mut Self {
        declare(&mut self.mapping.batch_size, size);
        self
    }

    pub fn dynamic_update(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.dynamic_update, value);
        self
    }

    pub fn dynamic_insert(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.dynamic_insert, value);
        self
    }

    /// Mark the entity immutable.
    pub fn read_only(&mut self) -> &mut Self {
        let mutable = !self.negation.take();
        declare(&mut self.mapping.mutable, mutable);
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

    pub fn persister<P: ?Sized + 'static>(&mut self) -> &mut Self {
        declare(&mut self.mapping.persister, TypeRef::of::<P>());
        self
    }

    pub fn optimistic_lock(&mut self) -> Setter<'_, Self, OptimisticLock> {
        Setter::new(self, LAYER, |m| &mut m.mapping.optimistic_lock)
    }

    pub fn cache(&mut self) -> Setter<'_, Self, Cache> {
        Setter::new(self, LAYER, |m| &mut m.mapping.cache)
    }
}

members!(ClassMap);

impl<T: Mapped> Default for ClassMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Mapped> MappingProvider for ClassMap<T> {
    fn provide(&self) -> Result<ProvidedMapping, SourceError> {
        trace!(class = %self.mapping.ty, "class mapping provided");

        Ok(ProvidedMapping::Class(self.mapping.clone()))
    }

    fn name(&self) -> String {
        self.mapping.ty.path.clone()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use fluentmap_core::model::{CollectionKind, Fetch};

    struct Order;
    struct Customer;
    struct Line;

    crate::mapped!(Order, Customer, Line);

    #[test]
    fn declarations_are_explicit() {
        let mut map = ClassMap::<Order>::new();
        map.id("Id").column("order_id");
        map.table("orders").not().lazy_load();
        map.references::<Customer>("Customer").fetch().join();

        let class = map.mapping();
        assert!(class.table.is_explicit());
        assert_eq!(class.lazy.get(), Some(&false));
        assert_eq!(class.id.as_ref().unwrap().columns.names(), vec!["order_id"]);

        let reference = &class.references[0];
        assert!(reference.fetch.is_explicit());
        assert_eq!(reference.fetch, Fetch::Join);
        assert_eq!(reference.member.ty, Some(Customer::type_ref()));
    }

    #[test]
    fn unset_attributes_stay_open_for_conventions() {
        let mut map = ClassMap::<Order>::new();
        map.has_many::<Line>("Lines").inverse();

        let collection = &map.mapping().collections[0];
        assert!(collection.inverse.is_explicit());
        assert!(!collection.table_name.has_value());
        assert!(!collection.kind.is_explicit());
        assert_eq!(collection.kind, CollectionKind::Bag);
        assert!(!collection.key.columns.has_value());
    }

    #[test]
    fn join_members_land_on_the_join() {
        let mut map = ClassMap::<Order>::new();
        map.join("order_notes", |join| {
            join.map("Note");
            join.optional();
        });

        let join = &map.mapping().joins[0];
        assert_eq!(join.table, "order_notes".to_string());
        assert_eq!(join.properties[0].member.name, "Note");
        assert!(join.optional.is_explicit());
    }

    #[test]
    fn provides_a_class_mapping() {
        let mut map = ClassMap::<Order>::new();
        map.discriminate_subclasses_on_column("kind");

        let provided = map.provide().unwrap();

        assert_eq!(provided.ty(), &Order::type_ref());
        assert!(matches!(provided, ProvidedMapping::Class(ref c) if c.discriminator.is_some()));
    }
}
