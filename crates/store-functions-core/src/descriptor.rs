// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Function descriptors.
//!
//! A [`FunctionDescriptor`] is the transient, immutable description of one
//! annotated method. It is produced by the
//! [`DescriptorBuilder`](crate::DescriptorBuilder) and consumed by the
//! [`ModelSynthesizer`](crate::ModelSynthesizer).

use crate::types::TypeRef;

/// Direction of a parameter as seen by the method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterDirection {
    /// Passed by value.
    Input,
    /// Written by the function.
    Output,
    /// Read and written by the function.
    InputOutput,
    /// Function return value.
    ReturnValue
}

/// Overload resolution semantics of a store function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterTypeSemantics {
    /// Arguments may be implicitly converted.
    #[default]
    AllowImplicitConversion,
    /// Arguments may be promoted to wider types.
    AllowImplicitPromotion,
    /// Argument types must match exactly.
    ExactMatchOnly
}

/// Return shape, decided once from the method's return type.
///
/// | Shape | Return type | Table-valued | Composable |
/// |-------|-------------|--------------|------------|
/// | `Query` | `Query<T>` | yes | unless disabled |
/// | `UntypedQuery` | `UntypedQuery` | yes | unless disabled |
/// | `Rows` | `Vec<T>` | yes | never |
/// | `UntypedRows` | `UntypedRows` | yes | never |
/// | `Scalar` | anything else | no | unless disabled |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnShape {
    /// Single value.
    Scalar,
    /// Typed composable sequence.
    Query,
    /// Untyped composable sequence.
    UntypedQuery,
    /// Typed materialized rows, possibly followed by extra result sets.
    Rows,
    /// Result sets declared by annotations only.
    UntypedRows
}

impl ReturnShape {
    /// Whether the function returns rows.
    pub const fn is_table_valued(&self) -> bool {
        !matches!(self, Self::Scalar)
    }

    /// Whether the shape rules out composition.
    pub const fn is_materialized(&self) -> bool {
        matches!(self, Self::Rows | Self::UntypedRows)
    }
}

/// Type and store type override shared by parameters and results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleTypeDescriptor {
    pub(crate) ty:              TypeRef,
    pub(crate) store_type_name: Option<String>
}

impl SimpleTypeDescriptor {
    /// Create a descriptor.
    pub fn new(ty: TypeRef, store_type_name: Option<String>) -> Self {
        Self {
            ty,
            store_type_name
        }
    }

    /// Semantic type.
    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    /// Store type name override.
    pub fn store_type_name(&self) -> Option<&str> {
        self.store_type_name.as_deref()
    }
}

/// Length, precision and scale hints for a store type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FacetHints {
    /// Maximum length.
    pub length:       Option<u32>,
    /// Fixed-length flag.
    pub fixed_length: Option<bool>,
    /// Precision.
    pub precision:    Option<u8>,
    /// Scale.
    pub scale:        Option<u8>
}

/// One parameter of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub(crate) base:      SimpleTypeDescriptor,
    pub(crate) position:  usize,
    pub(crate) name:      String,
    pub(crate) direction: ParameterDirection,
    pub(crate) facets:    FacetHints
}

impl ParameterDescriptor {
    /// Position among the function's parameters, starting at 0.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Parameter name, after overrides.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direction.
    pub fn direction(&self) -> ParameterDirection {
        self.direction
    }

    /// Semantic type and store type override.
    pub fn base(&self) -> &SimpleTypeDescriptor {
        &self.base
    }

    /// Semantic type.
    pub fn ty(&self) -> &TypeRef {
        &self.base.ty
    }

    /// Store type name override.
    pub fn store_type_name(&self) -> Option<&str> {
        self.base.store_type_name()
    }

    /// Length, precision and scale hints.
    pub fn facets(&self) -> &FacetHints {
        &self.facets
    }
}

/// One result set of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultDescriptor {
    pub(crate) base:        SimpleTypeDescriptor,
    pub(crate) column_name: String
}

impl ResultDescriptor {
    /// Semantic type and store type override.
    pub fn base(&self) -> &SimpleTypeDescriptor {
        &self.base
    }

    /// Semantic type of one result item.
    pub fn ty(&self) -> &TypeRef {
        &self.base.ty
    }

    /// Store type name override.
    pub fn store_type_name(&self) -> Option<&str> {
        self.base.store_type_name()
    }

    /// Column name for single-column rows.
    pub fn column_name(&self) -> &str {
        &self.column_name
    }
}

/// Everything needed to synthesize one store function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub(crate) namespace:                String,
    pub(crate) schema:                   String,
    pub(crate) name:                     String,
    pub(crate) shape:                    ReturnShape,
    pub(crate) is_composable:            Option<bool>,
    pub(crate) is_built_in:              Option<bool>,
    pub(crate) is_aggregate:             Option<bool>,
    pub(crate) is_niladic:               Option<bool>,
    pub(crate) parameter_type_semantics: Option<ParameterTypeSemantics>,
    pub(crate) parameters:               Vec<ParameterDescriptor>,
    pub(crate) results:                  Vec<ResultDescriptor>
}

impl FunctionDescriptor {
    /// Store namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Database schema.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return shape.
    pub fn shape(&self) -> ReturnShape {
        self.shape
    }

    /// Whether the function returns rows.
    pub fn is_table_valued(&self) -> bool {
        self.shape.is_table_valued()
    }

    /// Composability, when known.
    pub fn is_composable(&self) -> Option<bool> {
        self.is_composable
    }

    /// Built-in flag, when known.
    pub fn is_built_in(&self) -> Option<bool> {
        self.is_built_in
    }

    /// Aggregate flag, when known.
    pub fn is_aggregate(&self) -> Option<bool> {
        self.is_aggregate
    }

    /// Niladic flag, when known.
    pub fn is_niladic(&self) -> Option<bool> {
        self.is_niladic
    }

    /// Overload resolution semantics, when known.
    pub fn parameter_type_semantics(&self) -> Option<ParameterTypeSemantics> {
        self.parameter_type_semantics
    }

    /// Parameters ordered by position.
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// Result sets in declaration order.
    pub fn results(&self) -> &[ResultDescriptor] {
        &self.results
    }

    /// Whether the store function returns a collection of rows.
    ///
    /// True for table-valued functions unless composition is disabled.
    pub fn returns_row_collection(&self) -> bool {
        self.is_table_valued() && self.is_composable != Some(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes() {
        assert!(!ReturnShape::Scalar.is_table_valued());
        assert!(ReturnShape::Query.is_table_valued());
        assert!(ReturnShape::UntypedRows.is_table_valued());
        assert!(ReturnShape::Rows.is_materialized());
        assert!(!ReturnShape::UntypedQuery.is_materialized());
    }

    #[test]
    fn default_semantics() {
        assert_eq!(
            ParameterTypeSemantics::default(),
            ParameterTypeSemantics::AllowImplicitConversion
        );
    }
}
