use crate::part::{LAYER, declare};
use fluentmap_core::{
    attr::Setter,
    model::{Access, Generator, Id},
};

///
/// IdPart
///

pub struct IdPart<'a> {
    mapping: &'a mut Id,
}

impl<'a> IdPart<'a> {
    pub(crate) const fn new(mapping: &'a mut Id) -> Self {
        Self { mapping }
    }

    pub fn column(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.mapping.columns.rename(LAYER, name.as_ref());
        self
    }

    pub fn generated_by(&mut self) -> Setter<'_, Self, Generator> {
        Setter::new(self, LAYER, |p| &mut p.mapping.generator)
    }

    pub fn unsaved_value(&mut self, value: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.unsaved_value, value.into());
        self
    }

    pub fn access(&mut self) -> Setter<'_, Self, Access> {
        Setter::new(self, LAYER, |p| &mut p.mapping.access)
    }
}
