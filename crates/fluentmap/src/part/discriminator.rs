use crate::part::{LAYER, declare};
use fluentmap_core::{attr::Negation, model::Discriminator};

///
/// DiscriminatorPart
///

pub struct DiscriminatorPart<'a> {
    mapping: &'a mut Discriminator,
    negation: Negation,
}

impl<'a> DiscriminatorPart<'a> {
    pub(crate) fn new(mapping: &'a mut Discriminator) -> Self {
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

    /// Always filter on the discriminator, even when loading the root.
    pub fn always_select_with_value(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.force, value);
        self
    }

    pub fn insert(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.insert, value);
        self
    }
}
