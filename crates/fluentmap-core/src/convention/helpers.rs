//! Ready-made conventions for the common cases.

use crate::{
    convention::{
        ConventionBuilder, ForeignKeyConvention,
        builder::{ClassFn, DocumentFn, IdFn, ReferenceFn},
    },
    model::{Access, Cascade, Member, TypeRef},
};

/// Table name for every class, derived from its type.
#[must_use]
pub fn table_name<F>(derive: F) -> ClassFn
where
    F: Fn(&TypeRef) -> String + Send + Sync + 'static,
{
    ConventionBuilder::class()
        .named("table_name")
        .always(move |class| {
            let name = derive(class.entity_type());
            class.table(name);
        })
}

/// Primary key column for every id, derived from the owning type.
#[must_use]
pub fn primary_key_name<F>(derive: F) -> IdFn
where
    F: Fn(&TypeRef) -> String + Send + Sync + 'static,
{
    ConventionBuilder::id()
        .named("primary_key_name")
        .always(move |id| {
            let name = derive(id.entity_type());
            id.column(name);
        })
}

/// Foreign-key columns named `{member}{suffix}` or `{type}{suffix}`.
#[must_use]
pub fn foreign_key_ends_with(
    suffix: &'static str,
) -> ForeignKeyConvention<impl Fn(Option<&Member>, &TypeRef) -> String + Send + Sync + 'static> {
    ForeignKeyConvention::from_fn(move |member: Option<&Member>, ty: &TypeRef| {
        let base = member.map_or(ty.name.as_str(), |m| m.name.as_str());
        format!("{base}{suffix}")
    })
}

/// Lazy loading for every reference.
#[must_use]
pub fn references_lazy(lazy: bool) -> ReferenceFn {
    ConventionBuilder::reference()
        .named("references_lazy")
        .always(move |reference| {
            if !lazy {
                reference.not();
            }
            reference.lazy_load();
        })
}

#[must_use]
pub fn default_access(access: Access) -> DocumentFn {
    ConventionBuilder::document()
        .named("default_access")
        .always(move |document| {
            document.default_access().set(access);
        })
}

#[must_use]
pub fn default_cascade(cascade: Cascade) -> DocumentFn {
    ConventionBuilder::document()
        .named("default_cascade")
        .always(move |document| {
            document.default_cascade().set(cascade);
        })
}

#[must_use]
pub fn default_lazy(lazy: bool) -> DocumentFn {
    ConventionBuilder::document()
        .named("default_lazy")
        .always(move |document| {
            if !lazy {
                document.not();
            }
            document.default_lazy();
        })
}

#[must_use]
pub fn auto_import(enabled: bool) -> DocumentFn {
    ConventionBuilder::document()
        .named("auto_import")
        .always(move |document| {
            if !enabled {
                document.not();
            }
            document.auto_import();
        })
}

/// Association table for a many-to-many pair; the two type names are
/// ordered so both sides agree on one table.
#[must_use]
pub fn many_to_many_table(a: &TypeRef, b: &TypeRef) -> String {
    let (first, second) = if a.name <= b.name {
        (a, b)
    } else {
        (b, a)
    };

    format!("{}To{}", first.name, second.name)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convention::ForeignKeyNaming;

    #[test]
    fn many_to_many_table_is_symmetric() {
        let a = TypeRef::from_path("app::Order");
        let b = TypeRef::from_path("app::Customer");

        assert_eq!(many_to_many_table(&a, &b), "CustomerToOrder");
        assert_eq!(many_to_many_table(&b, &a), "CustomerToOrder");
    }

    #[test]
    fn foreign_key_suffix_helper() {
        let convention = foreign_key_ends_with("Id");
        let ty = TypeRef::from_path("app::Parent");

        assert_eq!(convention.naming().derive_key_name(None, &ty), "ParentId");
        assert_eq!(
            convention
                .naming()
                .derive_key_name(Some(&Member::new("Owner")), &ty),
            "OwnerId"
        );
    }
}
