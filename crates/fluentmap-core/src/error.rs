use crate::{build::BuildPhase, convention::ConventionCategory};
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

///
/// BuildError
///
/// Any failure aborts the whole build; no partial model is returned.
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("mapping source '{provider}' failed: {source}")]
    Source {
        provider: String,
        #[source]
        source: SourceError,
    },

    #[error("type '{ty}' is mapped by more than one class mapping")]
    DuplicateClass { ty: String },

    #[error("subclass '{subclass}' extends '{base}', which is not mapped")]
    OrphanSubclass { subclass: String, base: String },

    #[error("subclass '{subclass}' declares a key column but its root '{root}' uses a discriminator")]
    DiscriminatedSubclassKey { subclass: String, root: String },

    #[error("{category} convention '{convention}' failed at {path} during {phase}: {source}")]
    Convention {
        phase: BuildPhase,
        category: ConventionCategory,
        convention: &'static str,
        path: String,
        #[source]
        source: ConventionError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BuildError {
    /// Innermost convention error, if this build failed inside a convention.
    #[must_use]
    pub fn convention_leaf(&self) -> Option<&ConventionError> {
        match self {
            Self::Convention { source, .. } => Some(source.leaf()),
            _ => None,
        }
    }
}

///
/// SourceError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SourceError {
    #[error("subclass '{subclass}' has no base type; declare one with `extends`")]
    MissingBase { subclass: String },

    #[error("{message}")]
    Invalid { message: String },
}

///
/// ConventionError
///
/// Raised by a convention while it inspects or writes an element.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConventionError {
    #[error("type '{entity}' has no mapped member '{member}'")]
    UnknownMember { entity: String, member: String },

    #[error("{message}")]
    Invalid { message: String },

    #[error("{path}: {source}")]
    Context {
        path: String,
        #[source]
        source: Box<Self>,
    },
}

impl ConventionError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Prepend a path segment to the error context.
    #[must_use]
    pub fn with_segment(self, segment: impl Into<String>) -> Self {
        let segment = segment.into();
        match self {
            Self::Context { path, source } => Self::Context {
                path: format!("{segment}.{path}"),
                source,
            },
            source => Self::Context {
                path: segment,
                source: Box::new(source),
            },
        }
    }

    /// Return the innermost, non-context error.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.leaf(),
            _ => self,
        }
    }
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {message}")]
    Invalid { message: String },
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_segments_join_outermost_first() {
        let err = ConventionError::invalid("boom")
            .with_segment("key")
            .with_segment("Children");

        assert_eq!(err.to_string(), "Children.key: boom");
        assert_eq!(err.leaf(), &ConventionError::invalid("boom"));
    }
}
