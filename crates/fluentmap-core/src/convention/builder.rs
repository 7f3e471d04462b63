//! Closure-backed conventions.
//!
//! `ConventionBuilder::collection().always(|c| { c.table("xxx"); })` yields
//! a convention for one category without declaring a type.

use crate::{
    convention::{
        ClassConvention, CollectionConvention, Convention, DispatchTable, DocumentConvention,
        HasManyConvention, HasManyToManyConvention, IdConvention, JoinConvention,
        JoinedSubclassConvention, KeyConvention, PropertyConvention, ReferenceConvention,
        SubclassConvention,
    },
    error::ConventionError,
    instance::{
        ClassInstance, CollectionInstance, DocumentInstance, IdInstance, JoinInstance,
        KeyInstance, PropertyInstance, ReferenceInstance, SubclassInstance,
    },
};
use std::sync::Arc;

///
/// ConventionBuilder
///

pub struct ConventionBuilder;

// fn_convention
// one closure convention type and its builder per category
macro_rules! fn_convention {
    ($(
        $ctor:ident => $conv:ident, $builder:ident, $trait:ident, $instance:ident, $register:ident;
    )*) => {
        impl ConventionBuilder {
            $(
                #[must_use]
                pub const fn $ctor() -> $builder {
                    $builder {
                        name: stringify!($conv),
                    }
                }
            )*
        }

        $(
            #[doc = concat!("Builder for [`", stringify!($conv), "`].")]
            pub struct $builder {
                name: &'static str,
            }

            impl $builder {
                /// Name reported in logs and errors.
                #[must_use]
                pub const fn named(mut self, name: &'static str) -> Self {
                    self.name = name;
                    self
                }

                /// Apply to every element of the category.
                pub fn always<F>(self, apply: F) -> $conv
                where
                    F: Fn(&mut $instance<'_>) + Send + Sync + 'static,
                {
                    $conv {
                        name: self.name,
                        accepts: None,
                        apply: Box::new(apply),
                    }
                }

                /// Apply only where `accepts` holds.
                pub fn when<A, F>(self, accepts: A, apply: F) -> $conv
                where
                    A: Fn(&$instance<'_>) -> bool + Send + Sync + 'static,
                    F: Fn(&mut $instance<'_>) + Send + Sync + 'static,
                {
                    $conv {
                        name: self.name,
                        accepts: Some(Box::new(accepts)),
                        apply: Box::new(apply),
                    }
                }
            }

            #[doc = concat!("Closure-backed [`", stringify!($trait), "`].")]
            #[allow(clippy::type_complexity)]
            pub struct $conv {
                name: &'static str,
                accepts: Option<Box<dyn Fn(&$instance<'_>) -> bool + Send + Sync>>,
                apply: Box<dyn Fn(&mut $instance<'_>) + Send + Sync>,
            }

            impl $trait for $conv {
                fn accepts(&self, instance: &$instance<'_>) -> bool {
                    self.accepts.as_ref().is_none_or(|accepts| accepts(instance))
                }

                fn apply(&self, instance: &mut $instance<'_>) -> Result<(), ConventionError> {
                    (self.apply)(instance);

                    Ok(())
                }
            }

            impl Convention for $conv {
                fn register(self: Arc<Self>, table: &mut DispatchTable) {
                    let name = self.name;
                    table.$register(name, self);
                }

                fn name(&self) -> &'static str {
                    self.name
                }
            }
        )*
    };
}

fn_convention! {
    document => DocumentFn, DocumentConventionBuilder, DocumentConvention, DocumentInstance, document_named;
    class => ClassFn, ClassConventionBuilder, ClassConvention, ClassInstance, class_named;
    id => IdFn, IdConventionBuilder, IdConvention, IdInstance, id_named;
    property => PropertyFn, PropertyConventionBuilder, PropertyConvention, PropertyInstance, property_named;
    reference => ReferenceFn, ReferenceConventionBuilder, ReferenceConvention, ReferenceInstance, reference_named;
    collection => CollectionFn, CollectionConventionBuilder, CollectionConvention, CollectionInstance, collection_named;
    has_many => HasManyFn, HasManyConventionBuilder, HasManyConvention, CollectionInstance, has_many_named;
    has_many_to_many => HasManyToManyFn, HasManyToManyConventionBuilder, HasManyToManyConvention, CollectionInstance, has_many_to_many_named;
    key => KeyFn, KeyConventionBuilder, KeyConvention, KeyInstance, key_named;
    join => JoinFn, JoinConventionBuilder, JoinConvention, JoinInstance, join_named;
    subclass => SubclassFn, SubclassConventionBuilder, SubclassConvention, SubclassInstance, subclass_named;
    joined_subclass => JoinedSubclassFn, JoinedSubclassConventionBuilder, JoinedSubclassConvention, SubclassInstance, joined_subclass_named;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convention::ConventionCategory;

    #[test]
    fn builder_registers_under_its_name() {
        let convention = ConventionBuilder::collection()
            .named("table-xxx")
            .always(|c| {
                c.table("xxx");
            });

        let mut table = DispatchTable::new();
        Arc::new(convention).register(&mut table);

        assert_eq!(table.names(ConventionCategory::Collection), vec!["table-xxx"]);
        assert!(table.names(ConventionCategory::HasMany).is_empty());
    }

    #[test]
    fn default_name_is_the_convention_type() {
        let convention = ConventionBuilder::key().always(|k| {
            k.column("xxx");
        });

        assert_eq!(Convention::name(&convention), "KeyFn");
    }
}
