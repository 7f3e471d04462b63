use crate::{
    map::Mapped,
    part::{LAYER, ManyToOnePart, PropertyPart, declare, push},
};
use fluentmap_core::{
    attr::{Negation, Setter},
    model::{Fetch, Join, Member, Property, Reference},
};

///
/// JoinPart
///
/// Members stored in a secondary table of the owning class.
///

pub struct JoinPart<'a> {
    mapping: &'a mut Join,
    negation: Negation,
}

impl<'a> JoinPart<'a> {
    pub(crate) fn new(mapping: &'a mut Join) -> Self {
        Self {
            mapping,
            negation: Negation::default(),
        }
    }

    pub fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    pub fn map(&mut self, member: impl Into<Member>) -> PropertyPart<'_> {
        let property = Property::new(member.into());

        PropertyPart::new(push(&mut self.mapping.properties, property))
    }

    pub fn references<U: Mapped>(&mut self, member: impl Into<Member>) -> ManyToOnePart<'_> {
        let reference = Reference::new(Member::of::<U>(member.into()), U::type_ref());

        ManyToOnePart::new(push(&mut self.mapping.references, reference))
    }

    pub fn key_column(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.mapping.key.columns.rename(LAYER, name.as_ref());
        self
    }

    pub fn schema(&mut self, schema: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.schema, schema.into());
        self
    }

    pub fn fetch(&mut self) -> Setter<'_, Self, Fetch> {
        Setter::new(self, LAYER, |p| &mut p.mapping.fetch)
    }

    pub fn inverse(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.inverse, value);
        self
    }

    pub fn optional(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.optional, value);
        self
    }
}
