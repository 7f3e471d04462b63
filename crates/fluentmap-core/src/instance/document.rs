use crate::{
    attr::{Negation, Setter},
    instance::{LAYER, propose},
    model::{Access, Cascade, Document},
};

///
/// DocumentInstance
///

pub struct DocumentInstance<'a> {
    mapping: &'a mut Document,
    negation: Negation,
}

impl<'a> DocumentInstance<'a> {
    pub(crate) fn new(mapping: &'a mut Document) -> Self {
        Self {
            mapping,
            negation: Negation::default(),
        }
    }

    #[must_use]
    pub const fn mapping(&self) -> &Document {
        self.mapping
    }

    pub fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    pub fn default_access(&mut self) -> Setter<'_, Self, Access> {
        Setter::new(self, LAYER, |i| &mut i.mapping.default_access)
    }

    pub fn default_cascade(&mut self) -> Setter<'_, Self, Cascade> {
        Setter::new(self, LAYER, |i| &mut i.mapping.default_cascade)
    }

    pub fn default_lazy(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.default_lazy, value);
        self
    }

    pub fn auto_import(&mut self) -> &mut Self {
        let value = self.negation.take();
        propose(&mut self.mapping.auto_import, value);
        self
    }

    pub fn schema(&mut self, schema: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.schema, schema.into());
        self
    }

    pub fn catalog(&mut self, catalog: impl Into<String>) -> &mut Self {
        propose(&mut self.mapping.catalog, catalog.into());
        self
    }
}
