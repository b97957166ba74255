// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type usages: a model type plus its facets.

use std::fmt;

use crate::types::PrimitiveKind;

/// Native type of the database provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreType {
    /// Native name (e.g. `nvarchar`).
    pub name: String,
    /// Primitive kind the native type stores.
    pub kind: PrimitiveKind
}

impl StoreType {
    /// Create a store type.
    pub fn new(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self {
            name: name.into(),
            kind
        }
    }
}

/// How the database generates a column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreGeneratedPattern {
    /// Generated on insert.
    Identity,
    /// Generated on insert and update.
    Computed
}

/// Facets refining a type usage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Facets {
    /// Allows NULL.
    pub nullable:          bool,
    /// Maximum length of strings and binaries.
    pub max_length:        Option<u32>,
    /// Fixed-length strings and binaries.
    pub fixed_length:      Option<bool>,
    /// Decimal or fractional-second precision.
    pub precision:         Option<u8>,
    /// Decimal scale.
    pub scale:             Option<u8>,
    /// Database-generated value.
    pub store_generated:   Option<StoreGeneratedPattern>,
    /// Participates in optimistic concurrency checks.
    pub concurrency_token: bool
}

/// A model type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdmType {
    /// Conceptual primitive.
    Primitive(PrimitiveKind),
    /// Native store type.
    Store(StoreType),
    /// Conceptual enum, by name.
    Enum(String),
    /// Conceptual complex type, by name.
    Complex(String),
    /// Conceptual entity type, by name.
    Entity(String),
    /// Anonymous row.
    Row(RowType),
    /// Collection of elements.
    Collection(Box<TypeUsage>)
}

impl fmt::Display for EdmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => write!(f, "Edm.{kind}"),
            Self::Store(store) => f.write_str(&store.name),
            Self::Enum(name) | Self::Complex(name) | Self::Entity(name) => f.write_str(name),
            Self::Row(row) => {
                f.write_str("Row(")?;
                for (i, member) in row.members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} {}", member.name, member.type_usage.edm_type)?;
                }
                f.write_str(")")
            }
            Self::Collection(element) => write!(f, "Collection({})", element.edm_type)
        }
    }
}

/// A model type together with its facets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeUsage {
    /// The type.
    pub edm_type: EdmType,
    /// The facets.
    pub facets:   Facets
}

impl TypeUsage {
    /// Non-nullable usage without facets.
    pub fn new(edm_type: EdmType) -> Self {
        Self {
            edm_type,
            facets: Facets::default()
        }
    }

    /// Set the nullable facet.
    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.facets.nullable = nullable;
        self
    }

    /// Usage of a collection of `self`.
    #[must_use]
    pub fn into_collection(self) -> Self {
        Self::new(EdmType::Collection(Box::new(self)))
    }

    /// Copy without store-generation and concurrency facets.
    #[must_use]
    pub fn without_store_facets(&self) -> Self {
        let mut usage = self.clone();
        usage.facets.store_generated = None;
        usage.facets.concurrency_token = false;
        usage
    }

    /// Element usage when this is a collection.
    pub fn element(&self) -> Option<&TypeUsage> {
        match &self.edm_type {
            EdmType::Collection(element) => Some(element),
            _ => None
        }
    }

    /// Row of a collection of rows.
    pub fn row_element(&self) -> Option<&RowType> {
        match self.element().map(|e| &e.edm_type) {
            Some(EdmType::Row(row)) => Some(row),
            _ => None
        }
    }

    /// Store type, when this is a native type usage.
    pub fn store_type(&self) -> Option<&StoreType> {
        match &self.edm_type {
            EdmType::Store(store) => Some(store),
            _ => None
        }
    }
}

/// One column of a row type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMember {
    /// Column name.
    pub name:       String,
    /// Column type.
    pub type_usage: TypeUsage
}

impl RowMember {
    /// Create a member.
    pub fn new(name: impl Into<String>, type_usage: TypeUsage) -> Self {
        Self {
            name: name.into(),
            type_usage
        }
    }
}

/// Column layout of one result row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowType {
    /// Columns in order.
    pub members: Vec<RowMember>
}

impl RowType {
    /// Create a row from its members.
    pub fn new(members: Vec<RowMember>) -> Self {
        Self {
            members
        }
    }

    /// Find a column by name.
    pub fn member(&self, name: &str) -> Option<&RowMember> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> TypeUsage {
        TypeUsage::new(EdmType::Store(StoreType::new("int", PrimitiveKind::Int32)))
    }

    #[test]
    fn strips_generation_and_concurrency() {
        let mut usage = int();
        usage.facets.store_generated = Some(StoreGeneratedPattern::Identity);
        usage.facets.concurrency_token = true;
        usage.facets.nullable = true;

        let stripped = usage.without_store_facets();
        assert_eq!(stripped.facets.store_generated, None);
        assert!(!stripped.facets.concurrency_token);
        assert!(stripped.facets.nullable);
    }

    #[test]
    fn collection_of_rows() {
        let row = RowType::new(vec![RowMember::new("Id", int())]);
        let usage = TypeUsage::new(EdmType::Row(row.clone())).into_collection();
        assert_eq!(usage.row_element(), Some(&row));
        assert_eq!(usage.edm_type.to_string(), "Collection(Row(Id int))");
        assert_eq!(int().row_element(), None);
    }

    #[test]
    fn store_type_accessor() {
        assert_eq!(int().store_type().map(|s| s.name.as_str()), Some("int"));
        assert_eq!(
            TypeUsage::new(EdmType::Primitive(PrimitiveKind::Int32)).store_type(),
            None
        );
    }
}
