use crate::{
    attr::{Negation, Setter},
    instance::{LAYER, propose},
    model::{Access, Column, Generator, Id, Member, Property, TypeRef},
};

///
/// IdInstance
///

pub struct IdInstance<'a> {
    mapping: &'a mut Id,
    entity: &'a TypeRef,
}

impl<'a> IdInstance<'a> {
    pub(crate) const fn new(mapping: &'a mut Id, entity: &'a TypeRef) -> Self {
        Self { mapping, entity }
    }

    #[must_use]
    pub const fn mapping(&self) -> &Id {
        self.mapping
    }

    #[must_use]
    pub const fn member(&self) -> &Member {
        &self.mapping.member
    }

    #[must_use]
    pub const fn entity_type(&self) -> &TypeRef {
        self.entity
    }

    pub fn column(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.mapping.columns.rename(LAYER, name.as_ref());
        self
    }

    pub fn generated_by(&mut self) -> Setter<'_, Self, Generator> {
        Setter::new(self, LAYER, |i| &mut i.mapping.generator)
    }

    pub fn unsaved_value(&mut self, value: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.unsaved_value, value.into());
        self
    }

    pub fn access(&mut self) -> Setter<'_, Self, Access> {
        Setter::new(self, LAYER, |i| &mut i.mapping.access)
    }
}

///
/// PropertyInstance
///
/// Column-level writes (`length`, `not_nullable`, ...) land on every
/// column the property currently maps to.
///

pub struct PropertyInstance<'a> {
    mapping: &'a mut Property,
    entity: &'a TypeRef,
    negation: Negation,
}

impl<'a> PropertyInstance<'a> {
    pub(crate) fn new(mapping: &'a mut Property, entity: &'a TypeRef) -> Self {
        Self {
            mapping,
            entity,
            negation: Negation::default(),
        }
    }

    #[must_use]
    pub const fn mapping(&self) -> &Property {
        self.mapping
    }

    #[must_use]
    pub const fn member(&self) -> &Member {
        &self.mapping.member
    }

    #[must_use]
    pub const fn entity_type(&self) -> &TypeRef {
        self.entity
    }

    /// Value type of the member, when the mapping declared one.
    #[must_use]
    pub const fn property_type(&self) -> Option<&TypeRef> {
        self.mapping.member.ty.as_ref()
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
        Setter::new(self, LAYER, |i| &mut i.mapping.access)
    }

    pub fn insert(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.insert, value);
        self
    }

    pub fn update(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.update, value);
        self
    }

    /// Neither inserted nor updated; `not().read_only()` re-enables both.
    pub fn read_only(&mut self) -> &mut Self {
        let value = !self.negation.take();
        propose(&mut self.mapping.insert, value);
        propose(&mut self.mapping.update, value);
        self
    }

    pub fn lazy_load(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.lazy, value);
        self
    }

    pub fn optimistic_lock(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.optimistic_lock, value);
        self
    }

    pub fn formula(&mut self, formula: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.formula, formula.into());
        self
    }

    pub fn custom_type(&mut self, ty: TypeRef) -> &mut Self {
        propose(&mut self.mapping.custom_type, ty);
        self
    }

    pub fn length(&mut self, length: u32) -> &mut Self {
        self.each_column(|c| propose(&mut c.length, length));
        self
    }

    pub fn not_nullable(&mut self) -> &mut Self {
        let value = self.negation.take();
        self.each_column(|c| propose(&mut c.not_null, value));
        self
    }

    pub fn unique(&mut self) -> &mut Self {
        let value = self.negation.take();
        self.each_column(|c| propose(&mut c.unique, value));
        self
    }

    pub fn unique_key(&mut self, key: impl AsRef<str>) -> &mut Self {
        self.each_column(|c| propose(&mut c.unique_key, key.as_ref().to_string()));
        self
    }

    pub fn index(&mut self, index: impl AsRef<str>) -> &mut Self {
        self.each_column(|c| propose(&mut c.index, index.as_ref().to_string()));
        self
    }

    pub fn sql_type(&mut self, sql_type: impl AsRef<str>) -> &mut Self {
        self.each_column(|c| propose(&mut c.sql_type, sql_type.as_ref().to_string()));
        self
    }

    pub fn check(&mut self, constraint: impl AsRef<str>) -> &mut Self {
        self.each_column(|c| propose(&mut c.check, constraint.as_ref().to_string()));
        self
    }

    pub fn default(&mut self, value: impl AsRef<str>) -> &mut Self {
        self.each_column(|c| propose(&mut c.default, value.as_ref().to_string()));
        self
    }

    fn each_column(&mut self, f: impl FnMut(&mut Column)) {
        self.mapping.columns.each_mut(f);
    }
}
