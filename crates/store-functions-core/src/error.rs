// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Configuration errors raised while building the model.
//!
//! Every variant is fatal: the convention stops at the first error and
//! registers nothing for the container.

use thiserror::Error;

/// Error raised by the function convention.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConventionError {
    /// A method carries store-function annotations but no function marker.
    #[error("method `{method}` has function annotations but no #[function] marker")]
    MissingFunctionMarker {
        /// Method name.
        method: String
    },

    /// Neither the schema override nor the configured default is set.
    #[error("no database schema for function `{function}`")]
    UnresolvedSchema {
        /// Function name.
        function: String
    },

    /// The semantic type of a parameter cannot be determined.
    #[error("cannot determine the type of parameter `{parameter}` of function `{function}`")]
    UnresolvedParameterType {
        /// Function name.
        function:  String,
        /// Parameter name.
        parameter: String
    },

    /// An untyped sequence result without an explicit result type.
    #[error("result type not specified for function `{function}`")]
    ResultTypeNotSpecified {
        /// Function name.
        function: String
    },

    /// A store type name that the provider manifest does not know.
    #[error("store type `{name}` is not supported by provider `{provider}`")]
    UnknownStoreType {
        /// Requested store type name.
        name:     String,
        /// Provider manifest name.
        provider: String
    },

    /// A semantic type without a model counterpart.
    #[error("type `{type_name}` cannot be mapped to a model type")]
    UnresolvedType {
        /// Display name of the semantic type.
        type_name: String
    },

    /// A structural type that is neither an entity nor a complex type.
    #[error("type `{type_name}` is not an entity, complex, enum or primitive type")]
    UnsupportedStructuralType {
        /// Display name of the semantic type.
        type_name: String
    },

    /// An entity property without a column mapping.
    #[error("property `{entity}.{property}` is not mapped to a column")]
    UnmappedProperty {
        /// Entity type name.
        entity:   String,
        /// Property name.
        property: String
    },

    /// Two functions resolve to the same schema-qualified name.
    #[error("store function `{schema}.{name}` is already defined")]
    DuplicateFunction {
        /// Schema name.
        schema: String,
        /// Function name.
        name:   String
    }
}

impl ConventionError {
    /// Create an [`ConventionError::UnresolvedType`] from anything printable.
    pub fn unresolved(type_name: impl ToString) -> Self {
        Self::UnresolvedType {
            type_name: type_name.to_string()
        }
    }

    /// Create an [`ConventionError::UnsupportedStructuralType`].
    pub fn unsupported(type_name: impl ToString) -> Self {
        Self::UnsupportedStructuralType {
            type_name: type_name.to_string()
        }
    }
}

/// Result alias for convention operations.
pub type Result<T, E = ConventionError> = std::result::Result<T, E>;
