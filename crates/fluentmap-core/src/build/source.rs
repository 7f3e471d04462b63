use crate::{
    error::SourceError,
    model::{Class, Subclass, TypeRef},
};

///
/// ProvidedMapping
///
/// What a mapping source contributes to a build: a root class, or a
/// subclass to attach beneath its base type.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProvidedMapping {
    Class(Class),
    Subclass { base: TypeRef, mapping: Subclass },
}

impl ProvidedMapping {
    /// Type described by this mapping.
    #[must_use]
    pub const fn ty(&self) -> &TypeRef {
        match self {
            Self::Class(class) => &class.ty,
            Self::Subclass { mapping, .. } => &mapping.ty,
        }
    }
}

///
/// MappingProvider
///
/// A source of one class or subclass mapping. Providers are asked once per
/// build and hand over an owned model.
///

pub trait MappingProvider {
    fn provide(&self) -> Result<ProvidedMapping, SourceError>;

    /// Name used in errors and logs.
    fn name(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl MappingProvider for ProvidedMapping {
    fn provide(&self) -> Result<ProvidedMapping, SourceError> {
        Ok(self.clone())
    }

    fn name(&self) -> String {
        self.ty().path.clone()
    }
}

impl<F> MappingProvider for F
where
    F: Fn() -> Result<ProvidedMapping, SourceError>,
{
    fn provide(&self) -> Result<ProvidedMapping, SourceError> {
        self()
    }
}
