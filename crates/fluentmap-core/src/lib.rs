//! Core of fluentmap: the mapping model, the convention engine, and the build
//! pipeline that joins them.
//!
//! ## Layout
//! - `model`: mapping nodes and the `Slot` explicit/default attribute store.
//! - `instance`: facades conventions write through.
//! - `convention`: capability traits, collection, finder, built-ins.
//! - `build`: sources, pipeline phases, traversal.
//! - `config`: TOML-backed build configuration.
//! - `obs`: build events, sinks, and reports.
#![warn(unreachable_pub)]

pub mod attr;
pub mod build;
pub mod config;
pub mod convention;
pub mod error;
pub mod instance;
pub mod model;
pub mod obs;

///
/// Prelude
///
/// Vocabulary needed to author mappings and conventions.
/// Pipeline internals stay behind their modules.
///

pub mod prelude {
    pub use crate::{
        build::{BuildPipeline, MappingProvider, ProvidedMapping},
        config::BuildConfig,
        convention::{
            ClassConvention, CollectionConvention, Convention, ConventionBuilder,
            ConventionCollection, DispatchTable, DocumentConvention, ForeignKeyConvention,
            ForeignKeyNaming, HasManyConvention, HasManyToManyConvention, IdConvention,
            JoinConvention, JoinedSubclassConvention, KeyConvention, PropertyConvention,
            ReferenceConvention, SubclassConvention,
        },
        error::ConventionError,
        instance::*,
        model::{Layer, Member, Slot, TypeRef},
    };
}

pub use error::Error;
