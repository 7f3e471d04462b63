use crate::part::{LAYER, declare};
use fluentmap_core::{
    attr::{Negation, Setter},
    model::{Access, Column, Property, TypeRef},
};

///
/// PropertyPart
///

pub struct PropertyPart<'a> {
    mapping: &'a mut Property,
    negation: Negation,
}

impl<'a> PropertyPart<'a> {
    pub(crate) fn new(mapping: &'a mut Property) -> Self {
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

    pub fn access(&mut self) -> Setter<'_, Self, Access> {
        Setter::new(self, LAYER, |p| &mut p.mapping.access)
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

    pub fn lazy_load(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.lazy, value);
        self
    }

    pub fn optimistic_lock(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.optimistic_lock, value);
        self
    }

    pub fn formula(&mut self, formula: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.formula, formula.into());
        self
    }

    pub fn custom_type<C: ?Sized + 'static>(&mut self) -> &mut Self {
        declare(&mut self.mapping.custom_type, TypeRef::of::<C>());
        self
    }

    pub fn length(&mut self, length: u32) -> &mut Self {
        self.each_column(|c| c.length.set_explicit(length));
        self
    }

    pub fn not_nullable(&mut self) -> &mut Self {
        let value = self.negation.take();
        self.each_column(|c| c.not_null.set_explicit(value));
        self
    }

    pub fn unique(&mut self) -> &mut Self {
        let value = self.negation.take();
        self.each_column(|c| c.unique.set_explicit(value));
        self
    }

    pub fn unique_key(&mut self, key: impl AsRef<str>) -> &mut Self {
        self.each_column(|c| c.unique_key.set_explicit(key.as_ref().to_string()));
        self
    }

    pub fn index(&mut self, index: impl AsRef<str>) -> &mut Self {
        self.each_column(|c| c.index.set_explicit(index.as_ref().to_string()));
        self
    }

    pub fn sql_type(&mut self, sql_type: impl AsRef<str>) -> &mut Self {
        self.each_column(|c| c.sql_type.set_explicit(sql_type.as_ref().to_string()));
        self
    }

    pub fn check(&mut self, constraint: impl AsRef<str>) -> &mut Self {
        self.each_column(|c| c.check.set_explicit(constraint.as_ref().to_string()));
        self
    }

    pub fn default(&mut self, value: impl AsRef<str>) -> &mut Self {
        self.each_column(|c| c.default.set_explicit(value.as_ref().to_string()));
        self
    }

    fn each_column(&mut self, f: impl FnMut(&mut Column)) {
        self.mapping.columns.each_mut(f);
    }
}
