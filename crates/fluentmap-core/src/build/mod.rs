//! Build pipeline.
//!
//! Sources are collected into a raw model, prepared so every element can
//! be wrapped by a facade, refined by conventions, and finalized into
//! documents. Phases run in order; the first error aborts the build and
//! discards the model.

mod apply;
mod pipeline;
mod source;

pub use apply::apply_conventions;
pub use pipeline::BuildPipeline;
pub use source::{MappingProvider, ProvidedMapping};

use derive_more::Display;
use serde::Serialize;

///
/// BuildPhase
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum BuildPhase {
    #[display("collect-sources")]
    CollectSources,

    #[display("instantiate-facades")]
    InstantiateFacades,

    #[display("apply-conventions")]
    ApplyConventions,

    #[display("finalize")]
    Finalize,
}
