//! Scenario tests for convention resolution, driven through the public
//! mapping DSL and build pipeline.

pub mod fixture;
pub mod test;

///
/// Prelude
///

#[cfg(test)]
pub(crate) mod prelude {
    pub use crate::fixture::*;
    pub use fluentmap::{
        core::{
            build::apply_conventions,
            convention::{ConventionFinder, DefaultConventionFinder},
            error::BuildError,
            model::{Class, Collection, Document},
        },
        prelude::*,
    };
}
