use crate::part::{LAYER, declare};
use fluentmap_core::{
    attr::{Negation, Setter},
    model::{Access, Cascade, Fetch, NotFound, Reference},
};

///
/// ManyToOnePart
///

pub struct ManyToOnePart<'a> {
    mapping: &'a mut Reference,
    negation: Negation,
}

impl<'a> ManyToOnePart<'a> {
    pub(crate) fn new(mapping: &'a mut Reference) -> Self {
        Self {
            mapping,
            negation: Negation::default(),
        }
    }

    pub fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    pub fn column(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.mapping.columns.rename(LAYER, name.as_ref());
        self
    }

    pub fn cascade(&mut self) -> Setter<'_, Self, Cascade> {
        Setter::new(self, LAYER, |p| &mut p.mapping.cascade)
    }

    pub fn fetch(&mut self) -> Setter<'_, Self, Fetch> {
        Setter::new(self, LAYER, |p| &mut p.mapping.fetch)
    }

    pub fn not_found(&mut self) -> Setter<'_, Self, NotFound> {
        Setter::new(self, LAYER, |p| &mut p.mapping.not_found)
    }

    pub fn access(&mut self) -> Setter<'_, Self, Access> {
        Setter::new(self, LAYER, |p| &mut p.mapping.access)
    }

    pub fn lazy_load(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.lazy, value);
        self
    }

    pub fn foreign_key(&mut self, name: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.foreign_key, name.into());
        self
    }

    pub fn property_ref(&mut self, name: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.property_ref, name.into());
        self
    }

    pub fn insert(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.insert, value);
        self
    }

    pub fn update(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.update, value);
        self
    }

    pub fn read_only(&mut self) -> &mut Self {
        let value = !self.negation.take();
        declare(&mut self.mapping.insert, value);
        declare(&mut self.mapping.update, value);
        self
    }

    pub fn unique(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.unique, value);
        self
    }

    pub fn not_nullable(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.not_null, value);
        self
    }
}
