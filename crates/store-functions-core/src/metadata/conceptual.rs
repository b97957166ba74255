// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Conceptual types and their store mappings.

use super::usage::TypeUsage;
use crate::types::PrimitiveKind;

/// Named, typed property of an entity, complex type or store table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdmProperty {
    /// Property name.
    pub name:       String,
    /// Property type.
    pub type_usage: TypeUsage
}

impl EdmProperty {
    /// Create a property.
    pub fn new(name: impl Into<String>, type_usage: TypeUsage) -> Self {
        Self {
            name: name.into(),
            type_usage
        }
    }
}

/// Entity type of the conceptual model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    /// Type name.
    pub name:       String,
    /// Base entity type, by name.
    pub base_type:  Option<String>,
    /// Declared properties, excluding inherited ones.
    pub properties: Vec<EdmProperty>
}

impl EntityType {
    /// Entity without a base type.
    pub fn new(name: impl Into<String>, properties: Vec<EdmProperty>) -> Self {
        Self {
            name: name.into(),
            base_type: None,
            properties
        }
    }

    /// Set the base type.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base_type = Some(base.into());
        self
    }
}

/// Complex (non-entity structural) type of the conceptual model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexType {
    /// Type name.
    pub name:       String,
    /// Properties in declaration order.
    pub properties: Vec<EdmProperty>
}

/// Enum type of the conceptual model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    /// Type name.
    pub name:       String,
    /// Module-qualified name of the Rust enum.
    pub full_name:  String,
    /// Integral primitive the enum is stored as.
    pub underlying: PrimitiveKind,
    /// Variant names and values.
    pub members:    Vec<(String, i64)>
}

/// Entity set of the conceptual container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySet {
    /// Set name.
    pub name:         String,
    /// Element entity type, by name.
    pub element_type: String
}

impl EntitySet {
    /// Create an entity set.
    pub fn new(name: impl Into<String>, element_type: impl Into<String>) -> Self {
        Self {
            name:         name.into(),
            element_type: element_type.into()
        }
    }
}

/// Mapping of one entity property onto a store column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Entity property name.
    pub property: String,
    /// Store column with its store type usage.
    pub column:   EdmProperty
}

impl ColumnMapping {
    /// Create a mapping.
    pub fn new(property: impl Into<String>, column: EdmProperty) -> Self {
        Self {
            property: property.into(),
            column
        }
    }
}
