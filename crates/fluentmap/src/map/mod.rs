//! Class and subclass maps.
//!
//! A map owns the model for one Rust type. It is filled in through the
//! mapping parts and handed to a build as a [`MappingProvider`].
//!
//! [`MappingProvider`]: fluentmap_core::build::MappingProvider

use fluentmap_core::model::TypeRef;

///
/// Mapped
///
/// A Rust type that can appear in a mapping, either as an entity or as the
/// target of an association.
///

pub trait Mapped: 'static {
    #[must_use]
    fn type_ref() -> TypeRef {
        TypeRef::of::<Self>()
    }

    /// Direct superclass, for types mapped as subclasses.
    #[must_use]
    fn base() -> Option<TypeRef> {
        None
    }
}

/// Implement [`Mapped`] for plain types, or for one type and its base.
///
/// ```ignore
/// mapped!(Order, Customer);
/// mapped!(PriorityOrder: Order);
/// ```
#[macro_export]
macro_rules! mapped {
    ($ty:ty : $base:ty) => {
        impl $crate::map::Mapped for $ty {
            fn base() -> ::core::option::Option<$crate::core::model::TypeRef> {
                ::core::option::Option::Some(<$base as $crate::map::Mapped>::type_ref())
            }
        }
    };

    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::map::Mapped for $ty {})+
    };
}

// members
// element-declaring methods shared by class and subclass maps
macro_rules! members {
    ($map:ident) => {
        impl<T: $crate::map::Mapped> $map<T> {
            pub fn map(
                &mut self,
                member: impl Into<fluentmap_core::model::Member>,
            ) -> $crate::part::PropertyPart<'_> {
                let property = fluentmap_core::model::Property::new(member.into());

                $crate::part::PropertyPart::new($crate::part::push(
                    &mut self.mapping.properties,
                    property,
                ))
            }

            /// Many-to-one association to `U`.
            pub fn references<U: $crate::map::Mapped>(
                &mut self,
                member: impl Into<fluentmap_core::model::Member>,
            ) -> $crate::part::ManyToOnePart<'_> {
                let reference = fluentmap_core::model::Reference::new(
                    fluentmap_core::model::Member::of::<U>(member.into()),
                    U::type_ref(),
                );

                $crate::part::ManyToOnePart::new($crate::part::push(
                    &mut self.mapping.references,
                    reference,
                ))
            }

            /// One-to-many collection of `U`.
            pub fn has_many<U: $crate::map::Mapped>(
                &mut self,
                member: impl Into<fluentmap_core::model::Member>,
            ) -> $crate::part::OneToManyPart<'_> {
                let collection =
                    fluentmap_core::model::Collection::one_to_many(member.into(), U::type_ref());

                $crate::part::CollectionPart::new($crate::part::push(
                    &mut self.mapping.collections,
                    collection,
                ))
            }

            /// Many-to-many collection of `U` through an association table.
            pub fn has_many_to_many<U: $crate::map::Mapped>(
                &mut self,
                member: impl Into<fluentmap_core::model::Member>,
            ) -> $crate::part::ManyToManyPart<'_> {
                let collection =
                    fluentmap_core::model::Collection::many_to_many(member.into(), U::type_ref());

                $crate::part::CollectionPart::new($crate::part::push(
                    &mut self.mapping.collections,
                    collection,
                ))
            }

            /// Map members stored in the secondary table `table`.
            pub fn join(
                &mut self,
                table: impl Into<String>,
                declare: impl FnOnce(&mut $crate::part::JoinPart<'_>),
            ) -> &mut Self {
                let join = fluentmap_core::model::Join::new(table);
                declare(&mut $crate::part::JoinPart::new($crate::part::push(
                    &mut self.mapping.joins,
                    join,
                )));

                self
            }
        }
    };
}

pub(crate) use members;

mod class;
mod subclass;

pub use class::ClassMap;
pub use subclass::SubclassMap;

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    struct Order;
    struct PriorityOrder;

    crate::mapped!(Order);
    crate::mapped!(PriorityOrder: Order);

    #[test]
    fn mapped_types_report_their_base() {
        assert_eq!(Order::type_ref().name, "Order");
        assert_eq!(Order::base(), None);
        assert_eq!(PriorityOrder::base(), Some(Order::type_ref()));
    }
}
