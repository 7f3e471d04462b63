//! Build configuration.
//!
//! A build takes its configuration as a value; nothing is read from
//! process-wide state. Configuration can be authored in TOML:
//!
//! ```toml
//! default_conventions = true
//! merge_mappings = false
//!
//! [naming]
//! case = "snake"
//! foreign_key_suffix = "_id"
//! table_prefix = "app_"
//! ```

use crate::error::ConfigError;
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

///
/// BuildConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Register the built-in naming conventions ahead of the application's.
    pub default_conventions: bool,

    /// Emit a single document holding every class instead of one per class.
    pub merge_mappings: bool,

    pub naming: NamingConfig,
}

impl BuildConfig {
    /// Parse a TOML document; missing keys fall back to defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    /// Load and parse a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self
            .naming
            .foreign_key_suffix
            .chars()
            .any(char::is_whitespace)
        {
            return Err(ConfigError::Invalid {
                message: format!(
                    "foreign_key_suffix '{}' must not contain whitespace",
                    self.naming.foreign_key_suffix
                ),
            });
        }

        Ok(())
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            default_conventions: true,
            merge_mappings: false,
            naming: NamingConfig::default(),
        }
    }
}

///
/// NamingConfig
///
/// Naming rules used by the built-in conventions.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    pub case: NamingCase,
    pub foreign_key_suffix: String,
    pub table_prefix: String,
}

impl NamingConfig {
    /// Table name for a type (or association) name.
    #[must_use]
    pub fn table(&self, name: &str) -> String {
        format!("{}{}", self.table_prefix, self.case.apply(name))
    }

    /// Column name for a member name.
    #[must_use]
    pub fn column(&self, name: &str) -> String {
        self.case.apply(name)
    }

    /// Foreign key column pointing at `name` (a member or type name).
    #[must_use]
    pub fn foreign_key(&self, name: &str) -> String {
        format!("{}{}", self.case.apply(name), self.foreign_key_suffix)
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            case: NamingCase::Preserve,
            foreign_key_suffix: "_id".to_string(),
            table_prefix: String::new(),
        }
    }
}

///
/// NamingCase
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingCase {
    #[default]
    Preserve,
    Snake,
    Camel,
    Pascal,
    Constant,
}

impl NamingCase {
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Preserve => name.to_string(),
            Self::Snake => name.to_case(Case::Snake),
            Self::Camel => name.to_case(Case::Camel),
            Self::Pascal => name.to_case(Case::Pascal),
            Self::Constant => name.to_case(Case::Constant),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = BuildConfig::from_toml_str("").unwrap();

        assert_eq!(config, BuildConfig::default());
        assert!(config.default_conventions);
        assert_eq!(config.naming.foreign_key_suffix, "_id");
    }

    #[test]
    fn naming_section_is_parsed() {
        let config = BuildConfig::from_toml_str(
            r#"
            merge_mappings = true

            [naming]
            case = "snake"
            table_prefix = "app_"
            "#,
        )
        .unwrap();

        assert!(config.merge_mappings);
        assert_eq!(config.naming.case, NamingCase::Snake);
        assert_eq!(config.naming.table("OrderLine"), "app_order_line");
        assert_eq!(config.naming.foreign_key("OrderLine"), "order_line_id");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = BuildConfig::from_toml_str("merge = true").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn whitespace_suffix_is_rejected() {
        let err = BuildConfig::from_toml_str("[naming]\nforeign_key_suffix = \" id\"").unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = BuildConfig::from_path("/nonexistent/fluentmap.toml").unwrap_err();

        assert!(err.to_string().contains("/nonexistent/fluentmap.toml"));
    }

    #[test]
    fn preserve_case_keeps_names() {
        assert_eq!(NamingCase::Preserve.apply("ExampleClass"), "ExampleClass");
        assert_eq!(NamingCase::Constant.apply("ExampleClass"), "EXAMPLE_CLASS");
    }
}
