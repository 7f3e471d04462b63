//! ## Crate layout
//! - `core`: mapping model, convention engine, and build pipeline.
//! - `map`: class and subclass maps, one per mapped Rust type.
//! - `part`: fluent parts that record explicit declarations.
//!
//! The `prelude` module carries what mapping code and convention code
//! usually need together.

pub use fluentmap_core as core;

pub mod map;
pub mod part;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use fluentmap_core::{Error, build::BuildPipeline};
pub use map::{ClassMap, Mapped, SubclassMap};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        mapped,
        map::{ClassMap, Mapped, SubclassMap},
        part::{
            CollectionPart, DiscriminatorPart, IdPart, JoinPart, ManyToManyPart, ManyToOnePart,
            OneToManyPart, PropertyPart,
        },
    };
    pub use fluentmap_core::prelude::*;
}
