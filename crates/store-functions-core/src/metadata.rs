// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model elements produced and consumed by the convention.
//!
//! # Architecture
//!
//! ```text
//! metadata.rs (coordinator)
//! ├── usage.rs       - TypeUsage, facets, row and collection types
//! ├── conceptual.rs  - entity, complex and enum types, entity sets
//! └── function.rs    - store functions, function imports, mappings
//! ```

mod conceptual;
mod function;
mod usage;

pub use conceptual::{ColumnMapping, ComplexType, EdmProperty, EntitySet, EntityType, EnumType};
pub use function::{
    FunctionImport, FunctionImportMapping, FunctionParameter, ParameterMode, QualifiedName,
    ScalarPropertyMapping, StoreFunction, StructuralResultMapping
};
pub use usage::{EdmType, Facets, RowMember, RowType, StoreGeneratedPattern, StoreType, TypeUsage};
