use crate::{
    map::{Mapped, members},
    part::{LAYER, declare},
};
use fluentmap_core::{
    attr::Negation,
    build::{MappingProvider, ProvidedMapping},
    error::SourceError,
    model::{Key, Subclass, TypeRef},
};
use std::marker::PhantomData;
use tracing::trace;

///
/// SubclassMap
///
/// Mapping of a subtype `T`. Whether it becomes a discriminated or a
/// joined subclass is decided by the root class at build time.
///

pub struct SubclassMap<T: Mapped> {
    mapping: Subclass,
    base: Option<TypeRef>,
    negation: Negation,
    _ty: PhantomData<fn() -> T>,
}

impl<T: Mapped> SubclassMap<T> {
    /// New subclass map; the base defaults to `T::base()`.
    #[must_use]
    pub fn new() -> Self {
        let ty = T::type_ref();
        let base = T::base();
        let extends = base.clone().unwrap_or_else(|| ty.clone());

        Self {
            mapping: Subclass::new(ty, extends),
            base,
            negation: Negation::default(),
            _ty: PhantomData,
        }
    }

    #[must_use]
    pub const fn mapping(&self) -> &Subclass {
        &self.mapping
    }

    /// Attach beneath `U` instead of `T::base()`.
    pub fn extends<U: Mapped>(&mut self) -> &mut Self {
        let base = U::type_ref();
        self.mapping.extends = base.clone();
        self.base = Some(base);
        self
    }

    pub fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    /// Column of the key to the superclass table. Only joined subclasses
    /// own a key; the build fails if the root uses a discriminator.
    pub fn key_column(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.mapping
            .key
            .get_or_insert_with(Key::new)
            .columns
            .rename(LAYER, name.as_ref());
        self
    }

    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.table, table.into());
        self
    }

    pub fn schema(&mut self, schema: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.schema, schema.into());
        self
    }

    pub fn discriminator_value(&mut self, value: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.discriminator_value, value.into());
        self
    }

    pub fn lazy_load(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.lazy, value);
        self
    }

    pub fn dynamic_update(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.dynamic_update, value);
        self
    }

    pub fn dynamic_insert(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.dynamic_insert, value);
        self
    }

    pub fn abstract_(&mut self) -> &mut Self {
        let value = self.negation.take();
        declare(&mut self.mapping.is_abstract, value);
        self
    }

    pub fn check(&mut self, constraint: impl Into<String>) -> &mut Self {
        declare(&mut self.mapping.check, constraint.into());
        self
    }

    pub fn batch_size(&mut self, size: u32) -> &mut Self {
        declare(&mut self.mapping.batch_size, size);
        self
    }
}

members!(SubclassMap);

impl<T: Mapped> Default for SubclassMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Mapped> MappingProvider for SubclassMap<T> {
    fn provide(&self) -> Result<ProvidedMapping, SourceError> {
        let base = self.base.clone().ok_or_else(|| SourceError::MissingBase {
            subclass: self.mapping.ty.path.clone(),
        })?;
        trace!(subclass = %self.mapping.ty, base = %base, "subclass mapping provided");

        Ok(ProvidedMapping::Subclass {
            base,
            mapping: self.mapping.clone(),
        })
    }

    fn name(&self) -> String {
        self.mapping.ty.path.clone()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    struct Animal;
    struct Dog;
    struct Stray;

    crate::mapped!(Animal, Stray);
    crate::mapped!(Dog: Animal);

    #[test]
    fn base_comes_from_mapped_type() {
        let map = SubclassMap::<Dog>::new();

        let ProvidedMapping::Subclass { base, mapping } = map.provide().unwrap() else {
            panic!("expected a subclass mapping");
        };
        assert_eq!(base, Animal::type_ref());
        assert_eq!(mapping.extends, Animal::type_ref());
    }

    #[test]
    fn missing_base_is_a_source_error() {
        let map = SubclassMap::<Stray>::new();

        assert!(matches!(
            map.provide().unwrap_err(),
            SourceError::MissingBase { .. }
        ));
    }

    #[test]
    fn extends_overrides_base_and_key_column_is_explicit() {
        let mut map = SubclassMap::<Stray>::new();
        map.extends::<Animal>().key_column("animal_fk");

        let key = map.mapping().key.as_ref().unwrap();
        assert!(key.columns.is_explicit());
        assert_eq!(key.columns.names(), vec!["animal_fk"]);
        assert!(map.provide().is_ok());
    }
}
