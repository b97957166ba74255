// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Store functions, function imports and their mappings.

use std::fmt;

use super::usage::TypeUsage;
use crate::descriptor::{ParameterDirection, ParameterTypeSemantics};

/// Schema-qualified function name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    /// Database schema.
    pub schema: String,
    /// Function name.
    pub name:   String
}

impl QualifiedName {
    /// Create a qualified name.
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name:   name.into()
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.name)
    }
}

/// Parameter mode of a model function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterMode {
    /// `IN`.
    In,
    /// `OUT`.
    Out,
    /// `INOUT`.
    InOut,
    /// Return value.
    ReturnValue
}

impl ParameterMode {
    /// SQL keyword for the mode.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
            Self::InOut => "INOUT",
            Self::ReturnValue => "RETURN"
        }
    }
}

impl From<ParameterDirection> for ParameterMode {
    fn from(direction: ParameterDirection) -> Self {
        match direction {
            ParameterDirection::Input => Self::In,
            ParameterDirection::Output => Self::Out,
            ParameterDirection::InputOutput => Self::InOut,
            ParameterDirection::ReturnValue => Self::ReturnValue
        }
    }
}

/// Parameter of a store function or function import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionParameter {
    /// Parameter name.
    pub name:       String,
    /// Parameter type.
    pub type_usage: TypeUsage,
    /// Parameter mode.
    pub mode:       ParameterMode
}

impl FunctionParameter {
    /// Create a parameter.
    pub fn new(name: impl Into<String>, type_usage: TypeUsage, mode: ParameterMode) -> Self {
        Self {
            name: name.into(),
            type_usage,
            mode
        }
    }
}

/// Function of the store model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreFunction {
    /// Store namespace.
    pub namespace:                String,
    /// Schema and name.
    pub name:                     QualifiedName,
    /// Usable inside a larger query.
    pub is_composable:            bool,
    /// Aggregate function.
    pub is_aggregate:             bool,
    /// Built into the database.
    pub is_built_in:              bool,
    /// Invoked without parentheses.
    pub is_niladic:               bool,
    /// Overload resolution semantics.
    pub parameter_type_semantics: ParameterTypeSemantics,
    /// Parameters in order.
    pub parameters:               Vec<FunctionParameter>,
    /// Zero or one return parameter.
    pub return_parameters:        Vec<FunctionParameter>
}

impl StoreFunction {
    /// The single return parameter, if any.
    pub fn return_parameter(&self) -> Option<&FunctionParameter> {
        self.return_parameters.first()
    }

    /// Whether the function returns a collection of rows.
    pub fn returns_row_collection(&self) -> bool {
        self.return_parameter()
            .is_some_and(|p| p.type_usage.row_element().is_some())
    }
}

/// Function import of the conceptual container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionImport {
    /// Import name, equal to the store function name.
    pub name:              String,
    /// Container the import belongs to.
    pub container:         String,
    /// Usable inside a larger query.
    pub is_composable:     bool,
    /// Parameters with conceptual types.
    pub parameters:        Vec<FunctionParameter>,
    /// One collection return parameter per result set.
    pub return_parameters: Vec<FunctionParameter>,
    /// Entity set of each result set, for entity results.
    pub entity_sets:       Vec<Option<String>>
}

/// Mapping of one conceptual property onto a result column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarPropertyMapping {
    /// Conceptual property name.
    pub property: String,
    /// Store column name.
    pub column:   String
}

/// Property-by-property mapping of a complex result type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralResultMapping {
    /// Complex type name.
    pub type_name:  String,
    /// Property mappings in member order.
    pub properties: Vec<ScalarPropertyMapping>
}

impl StructuralResultMapping {
    /// Column mapped to `property`.
    pub fn column_for(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|m| m.property == property)
            .map(|m| m.column.as_str())
    }
}

/// Mapping of a function import onto its store function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionImportMapping {
    /// Import usable inside queries.
    Composable {
        /// Function import name.
        function_import: String,
        /// Target store function.
        store_function:  QualifiedName,
        /// Result mapping for complex element types.
        result_mapping:  Option<StructuralResultMapping>
    },
    /// Import invoked as a statement; rows are projected by the caller.
    NonComposable {
        /// Function import name.
        function_import: String,
        /// Target store function.
        store_function:  QualifiedName,
        /// Result mappings, one per result set.
        result_mappings: Vec<StructuralResultMapping>
    }
}

impl FunctionImportMapping {
    /// Name of the mapped function import.
    pub fn function_import(&self) -> &str {
        match self {
            Self::Composable {
                function_import, ..
            }
            | Self::NonComposable {
                function_import, ..
            } => function_import
        }
    }

    /// Name of the target store function.
    pub fn store_function(&self) -> &QualifiedName {
        match self {
            Self::Composable {
                store_function, ..
            }
            | Self::NonComposable {
                store_function, ..
            } => store_function
        }
    }

    /// Whether this is a composable mapping.
    pub const fn is_composable(&self) -> bool {
        matches!(self, Self::Composable { .. })
    }
}
