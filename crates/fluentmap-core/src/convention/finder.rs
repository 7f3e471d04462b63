use crate::{
    config::BuildConfig,
    convention::{
        Convention, ConventionCollection, DefaultColumnNames, DefaultForeignKey,
        DefaultTableNames, DispatchTable,
    },
};
use std::sync::Arc;
use tracing::debug;

///
/// ConventionFinder
///
/// Source of the dispatch table a build applies.
///

pub trait ConventionFinder {
    fn dispatch(&self) -> &DispatchTable;
}

///
/// DefaultConventionFinder
///
/// Registers the built-in naming conventions (unless disabled) followed by
/// the application's conventions, so application writes land last.
///

#[derive(Clone)]
pub struct DefaultConventionFinder {
    table: DispatchTable,
}

impl DefaultConventionFinder {
    #[must_use]
    pub fn new(config: &BuildConfig, conventions: &ConventionCollection) -> Self {
        let mut table = DispatchTable::new();

        if config.default_conventions {
            let naming = &config.naming;
            Arc::new(DefaultTableNames::new(naming.clone())).register(&mut table);
            Arc::new(DefaultColumnNames::new(naming.clone())).register(&mut table);
            Arc::new(DefaultForeignKey::new(naming.clone())).register(&mut table);
        }
        conventions.register_into(&mut table);

        debug!(
            conventions = conventions.len(),
            defaults = config.default_conventions,
            "convention dispatch table built"
        );

        Self { table }
    }

    /// Finder over `conventions` alone, without built-in defaults.
    #[must_use]
    pub fn without_defaults(conventions: &ConventionCollection) -> Self {
        let mut table = DispatchTable::new();
        conventions.register_into(&mut table);

        Self { table }
    }
}

impl ConventionFinder for DefaultConventionFinder {
    fn dispatch(&self) -> &DispatchTable {
        &self.table
    }
}

impl ConventionFinder for DispatchTable {
    fn dispatch(&self) -> &DispatchTable {
        self
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convention::ConventionCategory;

    #[test]
    fn defaults_register_ahead_of_application_conventions() {
        let finder =
            DefaultConventionFinder::new(&BuildConfig::default(), &ConventionCollection::new());
        let table = finder.dispatch();

        assert_eq!(table.len(ConventionCategory::Class), 1);
        assert_eq!(table.len(ConventionCategory::Reference), 1);
        assert_eq!(table.len(ConventionCategory::Collection), 1);
        assert_eq!(table.len(ConventionCategory::HasManyToMany), 1);
        assert_eq!(table.len(ConventionCategory::Key), 0);
    }

    #[test]
    fn defaults_can_be_disabled() {
        let config = BuildConfig {
            default_conventions: false,
            ..BuildConfig::default()
        };
        let finder = DefaultConventionFinder::new(&config, &ConventionCollection::new());

        assert!(finder.dispatch().is_empty());
    }
}
