use crate::convention::{
    ClassConvention, CollectionConvention, Convention, ConventionCategory, DocumentConvention,
    HasManyConvention, HasManyToManyConvention, IdConvention, JoinConvention,
    JoinedSubclassConvention, KeyConvention, PropertyConvention, ReferenceConvention,
    SubclassConvention,
};
use std::sync::Arc;

///
/// DispatchEntry
///

pub struct DispatchEntry<H: ?Sized> {
    name: &'static str,
    handler: Arc<H>,
}

impl<H: ?Sized> DispatchEntry<H> {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl<H: ?Sized> Clone for DispatchEntry<H> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            handler: Arc::clone(&self.handler),
        }
    }
}

///
/// DispatchTable
///
/// Category to ordered handler lists. Built once per finder; the build
/// never inspects convention types while walking the model.
///

#[derive(Clone, Default)]
pub struct DispatchTable {
    pub(crate) document: Vec<DispatchEntry<dyn DocumentConvention>>,
    pub(crate) class: Vec<DispatchEntry<dyn ClassConvention>>,
    pub(crate) id: Vec<DispatchEntry<dyn IdConvention>>,
    pub(crate) property: Vec<DispatchEntry<dyn PropertyConvention>>,
    pub(crate) reference: Vec<DispatchEntry<dyn ReferenceConvention>>,
    pub(crate) collection: Vec<DispatchEntry<dyn CollectionConvention>>,
    pub(crate) has_many: Vec<DispatchEntry<dyn HasManyConvention>>,
    pub(crate) has_many_to_many: Vec<DispatchEntry<dyn HasManyToManyConvention>>,
    pub(crate) key: Vec<DispatchEntry<dyn KeyConvention>>,
    pub(crate) join: Vec<DispatchEntry<dyn JoinConvention>>,
    pub(crate) subclass: Vec<DispatchEntry<dyn SubclassConvention>>,
    pub(crate) joined_subclass: Vec<DispatchEntry<dyn JoinedSubclassConvention>>,
}

// register
// generates the typed registration methods for each category
// the plain method records the convention's own name
macro_rules! register {
    ($($method:ident / $named:ident => $field:ident: $trait:ident),* $(,)?) => {
        $(
            pub fn $method<C: $trait + Convention + 'static>(
                &mut self,
                convention: Arc<C>,
            ) -> &mut Self {
                let name = Convention::name(&*convention);
                self.$named(name, convention)
            }

            pub fn $named<C: $trait + 'static>(
                &mut self,
                name: &'static str,
                convention: Arc<C>,
            ) -> &mut Self {
                self.$field.push(DispatchEntry {
                    name,
                    handler: convention,
                });
                self
            }
        )*
    };
}

impl DispatchTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    register! {
        document / document_named => document: DocumentConvention,
        class / class_named => class: ClassConvention,
        id / id_named => id: IdConvention,
        property / property_named => property: PropertyConvention,
        reference / reference_named => reference: ReferenceConvention,
        collection / collection_named => collection: CollectionConvention,
        has_many / has_many_named => has_many: HasManyConvention,
        has_many_to_many / has_many_to_many_named => has_many_to_many: HasManyToManyConvention,
        key / key_named => key: KeyConvention,
        join / join_named => join: JoinConvention,
        subclass / subclass_named => subclass: SubclassConvention,
        joined_subclass / joined_subclass_named => joined_subclass: JoinedSubclassConvention,
    }

    /// Number of handlers registered for a category.
    #[must_use]
    pub fn len(&self, category: ConventionCategory) -> usize {
        match category {
            ConventionCategory::Document => self.document.len(),
            ConventionCategory::Class => self.class.len(),
            ConventionCategory::Id => self.id.len(),
            ConventionCategory::Property => self.property.len(),
            ConventionCategory::Reference => self.reference.len(),
            ConventionCategory::Collection => self.collection.len(),
            ConventionCategory::HasMany => self.has_many.len(),
            ConventionCategory::HasManyToMany => self.has_many_to_many.len(),
            ConventionCategory::Key => self.key.len(),
            ConventionCategory::Join => self.join.len(),
            ConventionCategory::Subclass => self.subclass.len(),
            ConventionCategory::JoinedSubclass => self.joined_subclass.len(),
        }
    }

    /// Handler names for a category, in dispatch order.
    #[must_use]
    pub fn names(&self, category: ConventionCategory) -> Vec<&'static str> {
        fn names_of<H: ?Sized>(entries: &[DispatchEntry<H>]) -> Vec<&'static str> {
            entries.iter().map(DispatchEntry::name).collect()
        }

        match category {
            ConventionCategory::Document => names_of(&self.document),
            ConventionCategory::Class => names_of(&self.class),
            ConventionCategory::Id => names_of(&self.id),
            ConventionCategory::Property => names_of(&self.property),
            ConventionCategory::Reference => names_of(&self.reference),
            ConventionCategory::Collection => names_of(&self.collection),
            ConventionCategory::HasMany => names_of(&self.has_many),
            ConventionCategory::HasManyToMany => names_of(&self.has_many_to_many),
            ConventionCategory::Key => names_of(&self.key),
            ConventionCategory::Join => names_of(&self.join),
            ConventionCategory::Subclass => names_of(&self.subclass),
            ConventionCategory::JoinedSubclass => names_of(&self.joined_subclass),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        ConventionCategory::ALL
            .iter()
            .all(|category| self.len(*category) == 0)
    }
}

///
/// TESTS
///
