use crate::{
    config::NamingConfig,
    convention::{
        CollectionConvention, Convention, DispatchTable, JoinConvention, JoinedSubclassConvention,
        ReferenceConvention,
    },
    error::ConventionError,
    instance::{CollectionInstance, JoinInstance, ReferenceInstance, SubclassInstance},
    model::{Member, TypeRef},
};
use std::sync::Arc;

///
/// ForeignKeyNaming
///
/// Derives a foreign-key column name. `member` is the referencing member
/// for many-to-one references and `None` everywhere else, where `ty` is
/// the type the key points at.
///

pub trait ForeignKeyNaming: Send + Sync + 'static {
    fn derive_key_name(&self, member: Option<&Member>, ty: &TypeRef) -> String;
}

impl<F> ForeignKeyNaming for F
where
    F: Fn(Option<&Member>, &TypeRef) -> String + Send + Sync + 'static,
{
    fn derive_key_name(&self, member: Option<&Member>, ty: &TypeRef) -> String {
        self(member, ty)
    }
}

impl ForeignKeyNaming for NamingConfig {
    fn derive_key_name(&self, member: Option<&Member>, ty: &TypeRef) -> String {
        member.map_or_else(
            || self.foreign_key(&ty.name),
            |member| self.foreign_key(&member.name),
        )
    }
}

///
/// ForeignKeyConvention
///
/// Names every foreign-key column in the model from one rule:
/// - many-to-one: the reference's columns, from the member;
/// - one-to-many and many-to-many: the collection key, from the owning type;
/// - many-to-many: the child column, from the child type;
/// - join: the join key, from the owning type;
/// - joined subclass: the subclass key, from the superclass.
///
/// Columns the user set explicitly are left alone.
///

#[derive(Clone, Debug)]
pub struct ForeignKeyConvention<N> {
    naming: N,
}

impl<N: ForeignKeyNaming> ForeignKeyConvention<N> {
    pub const fn new(naming: N) -> Self {
        Self { naming }
    }

    #[must_use]
    pub const fn naming(&self) -> &N {
        &self.naming
    }
}

impl<F> ForeignKeyConvention<F>
where
    F: Fn(Option<&Member>, &TypeRef) -> String + Send + Sync + 'static,
{
    /// Build from a closure; pins the closure's signature for inference.
    pub const fn from_fn(naming: F) -> Self {
        Self { naming }
    }
}

impl<N: ForeignKeyNaming> Convention for ForeignKeyConvention<N> {
    fn register(self: Arc<Self>, table: &mut DispatchTable) {
        table
            .reference(Arc::clone(&self))
            .collection(Arc::clone(&self))
            .join(Arc::clone(&self))
            .joined_subclass(self);
    }
}

impl<N: ForeignKeyNaming> ReferenceConvention for ForeignKeyConvention<N> {
    fn apply(&self, instance: &mut ReferenceInstance<'_>) -> Result<(), ConventionError> {
        let name = self
            .naming
            .derive_key_name(Some(instance.member()), instance.referenced_type());
        instance.column(name);

        Ok(())
    }
}

impl<N: ForeignKeyNaming> CollectionConvention for ForeignKeyConvention<N> {
    fn apply(&self, instance: &mut CollectionInstance<'_>) -> Result<(), ConventionError> {
        let key = self.naming.derive_key_name(None, instance.entity_type());
        instance.key().column(key);

        let child = self.naming.derive_key_name(None, instance.child_type());
        if let Some(mut relationship) = instance.relationship() {
            relationship.column(child);
        }

        Ok(())
    }
}

impl<N: ForeignKeyNaming> JoinConvention for ForeignKeyConvention<N> {
    fn apply(&self, instance: &mut JoinInstance<'_>) -> Result<(), ConventionError> {
        let key = self.naming.derive_key_name(None, instance.entity_type());
        instance.key().column(key);

        Ok(())
    }
}

impl<N: ForeignKeyNaming> JoinedSubclassConvention for ForeignKeyConvention<N> {
    fn apply(&self, instance: &mut SubclassInstance<'_>) -> Result<(), ConventionError> {
        let key = self.naming.derive_key_name(None, instance.extends());
        if let Some(mut owned) = instance.key() {
            owned.column(key);
        }

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::NamingCase, convention::ConventionCategory};

    fn bang(member: Option<&Member>, ty: &TypeRef) -> String {
        member.map_or_else(|| format!("{}!", ty.name), |m| format!("{}!", m.name))
    }

    #[test]
    fn closures_implement_naming() {
        let convention = ForeignKeyConvention::from_fn(bang);
        let parent = TypeRef::from_path("app::ExampleParentClass");

        assert_eq!(
            convention
                .naming()
                .derive_key_name(Some(&Member::new("Parent")), &parent),
            "Parent!"
        );
        assert_eq!(
            convention.naming().derive_key_name(None, &parent),
            "ExampleParentClass!"
        );
    }

    #[test]
    fn naming_config_appends_suffix() {
        let naming = NamingConfig {
            case: NamingCase::Snake,
            ..NamingConfig::default()
        };
        let ty = TypeRef::from_path("app::OrderLine");

        assert_eq!(naming.derive_key_name(None, &ty), "order_line_id");
        assert_eq!(
            naming.derive_key_name(Some(&Member::new("Parent")), &ty),
            "parent_id"
        );
    }

    #[test]
    fn registers_into_all_foreign_key_categories() {
        let mut table = DispatchTable::new();
        Arc::new(ForeignKeyConvention::from_fn(bang)).register(&mut table);

        for category in [
            ConventionCategory::Reference,
            ConventionCategory::Collection,
            ConventionCategory::Join,
            ConventionCategory::JoinedSubclass,
        ] {
            assert_eq!(table.len(category), 1, "{category}");
        }
        assert_eq!(table.len(ConventionCategory::Key), 0);
    }
}
