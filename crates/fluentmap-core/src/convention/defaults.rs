//! Built-in naming conventions, registered ahead of the application's own
//! unless the build config turns them off.

use crate::{
    config::NamingConfig,
    convention::{
        ClassConvention, Convention, DispatchTable, ForeignKeyConvention,
        HasManyToManyConvention, IdConvention, JoinedSubclassConvention, PropertyConvention,
        helpers::many_to_many_table,
    },
    error::ConventionError,
    instance::{ClassInstance, CollectionInstance, IdInstance, PropertyInstance, SubclassInstance},
};
use std::sync::Arc;

/// Foreign-key columns named from [`NamingConfig::foreign_key`].
pub type DefaultForeignKey = ForeignKeyConvention<NamingConfig>;

///
/// DefaultTableNames
///
/// Class and joined-subclass tables after their type; many-to-many
/// association tables after both ends.
///

#[derive(Clone, Debug)]
pub struct DefaultTableNames {
    naming: NamingConfig,
}

impl DefaultTableNames {
    #[must_use]
    pub const fn new(naming: NamingConfig) -> Self {
        Self { naming }
    }
}

impl Convention for DefaultTableNames {
    fn register(self: Arc<Self>, table: &mut DispatchTable) {
        table
            .class(Arc::clone(&self))
            .joined_subclass(Arc::clone(&self))
            .has_many_to_many(self);
    }
}

impl ClassConvention for DefaultTableNames {
    fn apply(&self, instance: &mut ClassInstance<'_>) -> Result<(), ConventionError> {
        let table = self.naming.table(&instance.entity_type().name);
        instance.table(table);

        Ok(())
    }
}

impl JoinedSubclassConvention for DefaultTableNames {
    fn apply(&self, instance: &mut SubclassInstance<'_>) -> Result<(), ConventionError> {
        let table = self.naming.table(&instance.entity_type().name);
        instance.table(table);

        Ok(())
    }
}

impl HasManyToManyConvention for DefaultTableNames {
    fn apply(&self, instance: &mut CollectionInstance<'_>) -> Result<(), ConventionError> {
        let pair = many_to_many_table(instance.entity_type(), instance.child_type());
        let table = self.naming.table(&pair);
        instance.table(table);

        Ok(())
    }
}

///
/// DefaultColumnNames
///

#[derive(Clone, Debug)]
pub struct DefaultColumnNames {
    naming: NamingConfig,
}

impl DefaultColumnNames {
    #[must_use]
    pub const fn new(naming: NamingConfig) -> Self {
        Self { naming }
    }
}

impl Convention for DefaultColumnNames {
    fn register(self: Arc<Self>, table: &mut DispatchTable) {
        table.id(Arc::clone(&self)).property(self);
    }
}

impl IdConvention for DefaultColumnNames {
    fn apply(&self, instance: &mut IdInstance<'_>) -> Result<(), ConventionError> {
        let column = self.naming.column(&instance.member().name);
        instance.column(column);

        Ok(())
    }
}

impl PropertyConvention for DefaultColumnNames {
    fn apply(&self, instance: &mut PropertyInstance<'_>) -> Result<(), ConventionError> {
        let column = self.naming.column(&instance.member().name);
        instance.column(column);

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::NamingCase,
        model::{Class, Collection, Member, Property, TypeRef},
    };

    fn snake() -> NamingConfig {
        NamingConfig {
            case: NamingCase::Snake,
            table_prefix: "tbl_".to_string(),
            ..NamingConfig::default()
        }
    }

    #[test]
    fn class_table_follows_naming() {
        let mut class = Class::new(TypeRef::from_path("app::OrderLine"));
        ClassConvention::apply(&DefaultTableNames::new(snake()), &mut ClassInstance::new(&mut class))
            .unwrap();

        assert_eq!(class.table, "tbl_order_line".to_string());
        assert!(!class.table.is_explicit());
    }

    #[test]
    fn explicit_table_is_kept() {
        let mut class = Class::new(TypeRef::from_path("app::OrderLine"));
        class.table.set_explicit("lines".to_string());
        ClassConvention::apply(&DefaultTableNames::new(snake()), &mut ClassInstance::new(&mut class))
            .unwrap();

        assert_eq!(class.table, "lines".to_string());
    }

    #[test]
    fn many_to_many_table_uses_both_ends() {
        let owner = TypeRef::from_path("app::Order");
        let mut collection =
            Collection::many_to_many(Member::new("Customers"), TypeRef::from_path("app::Customer"));
        HasManyToManyConvention::apply(
            &DefaultTableNames::new(NamingConfig::default()),
            &mut CollectionInstance::new(&mut collection, &owner),
        )
        .unwrap();

        assert_eq!(collection.table_name, "CustomerToOrder".to_string());
    }

    #[test]
    fn property_column_follows_case() {
        let owner = TypeRef::from_path("app::Order");
        let mut property = Property::new(Member::new("PlacedAt"));
        PropertyConvention::apply(
            &DefaultColumnNames::new(snake()),
            &mut PropertyInstance::new(&mut property, &owner),
        )
        .unwrap();

        assert_eq!(property.columns.names(), vec!["placed_at"]);
    }
}
