// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convention configuration.
//!
//! | Setting | Default | Used for |
//! |---------|---------|----------|
//! | `default_schema` | `"dbo"` | Schema of functions without a `schema` override |
//! | `result_column_name` | `"value"` | Column name of scalar/enum result rows |
//! | `namespace` | `"CodeFirstDatabaseSchema"` | Namespace of synthesized store functions |

/// Default database schema for store functions.
pub const DEFAULT_SCHEMA: &str = "dbo";

/// Default column name for single-column result rows.
pub const DEFAULT_RESULT_COLUMN_NAME: &str = "value";

/// Default metadata namespace for store functions.
pub const DEFAULT_NAMESPACE: &str = "CodeFirstDatabaseSchema";

/// Settings applied to every function discovered on a container.
///
/// # Example
///
/// ```rust
/// use store_functions_core::ConventionConfig;
///
/// let config = ConventionConfig::default().with_default_schema("reporting");
/// assert_eq!(config.default_schema, "reporting");
/// assert_eq!(config.result_column_name, "value");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConventionConfig {
    /// Schema used when a function does not override it.
    pub default_schema: String,

    /// Column name of rows produced by scalar and enum results.
    pub result_column_name: String,

    /// Namespace the store functions are registered under.
    pub namespace: String
}

impl ConventionConfig {
    /// Replace the default schema.
    #[must_use]
    pub fn with_default_schema(mut self, schema: impl Into<String>) -> Self {
        self.default_schema = schema.into();
        self
    }

    /// Replace the default result column name.
    #[must_use]
    pub fn with_result_column_name(mut self, name: impl Into<String>) -> Self {
        self.result_column_name = name.into();
        self
    }

    /// Replace the store namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

impl Default for ConventionConfig {
    fn default() -> Self {
        Self {
            default_schema:     DEFAULT_SCHEMA.to_string(),
            result_column_name: DEFAULT_RESULT_COLUMN_NAME.to_string(),
            namespace:          DEFAULT_NAMESPACE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ConventionConfig::default();
        assert_eq!(config.default_schema, "dbo");
        assert_eq!(config.result_column_name, "value");
        assert_eq!(config.namespace, "CodeFirstDatabaseSchema");
    }

    #[test]
    fn builder_setters() {
        let config = ConventionConfig::default()
            .with_default_schema("stats")
            .with_result_column_name("result")
            .with_namespace("Store");
        assert_eq!(config.default_schema, "stats");
        assert_eq!(config.result_column_name, "result");
        assert_eq!(config.namespace, "Store");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_partial() {
        let config: ConventionConfig =
            serde_json::from_str(r#"{"default_schema": "app"}"#).unwrap();
        assert_eq!(config.default_schema, "app");
        assert_eq!(config.namespace, DEFAULT_NAMESPACE);
    }
}
