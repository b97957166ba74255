// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Host model interface.
//!
//! The convention reads the model through [`ModelSource`] and appends to it
//! through [`ModelSink`]. [`DbModel`] is an in-memory implementation of both.
//!
//! # Example
//!
//! ```rust
//! use store_functions_core::{DbModel, ModelSource, ProviderManifest};
//!
//! let model = DbModel::new("ShopContext", ProviderManifest::sql_server());
//! assert_eq!(model.container_name(), "ShopContext");
//! assert!(model.entity_sets().is_empty());
//! ```

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    descriptor::FacetHints,
    error::{ConventionError, Result},
    manifest::ProviderManifest,
    metadata::{
        ColumnMapping, ComplexType, EdmProperty, EntitySet, EntityType, EnumType,
        FunctionImport, FunctionImportMapping, QualifiedName, StoreFunction
    },
    resolve::TypeResolver,
    types::{DescribeType, StructuralDescription, TypeRef}
};

/// Read side of the model.
pub trait ModelSource {
    /// Provider manifest of the store model.
    fn manifest(&self) -> &ProviderManifest;

    /// Name of the conceptual container.
    fn container_name(&self) -> &str;

    /// Enum type registered under a module-qualified Rust name.
    fn enum_type(&self, full_name: &str) -> Option<&EnumType>;

    /// Entity type by name.
    fn entity_type(&self, name: &str) -> Option<&EntityType>;

    /// Complex type by name.
    fn complex_type(&self, name: &str) -> Option<&ComplexType>;

    /// Entity sets of the conceptual container.
    fn entity_sets(&self) -> &[EntitySet];

    /// Column mappings declared for the entity itself, not its base types.
    fn column_mappings(&self, entity: &str) -> &[ColumnMapping];

    /// The entity followed by its base types, most derived first.
    fn entity_hierarchy(&self, name: &str) -> Vec<&EntityType> {
        let mut chain: Vec<&EntityType> = Vec::new();
        let mut next = self.entity_type(name);
        while let Some(entity) = next {
            if chain.iter().any(|e| e.name == entity.name) {
                break;
            }
            chain.push(entity);
            next = entity
                .base_type
                .as_deref()
                .and_then(|base| self.entity_type(base));
        }
        chain
    }

    /// Properties of an entity including inherited ones, root type first.
    fn entity_properties(&self, name: &str) -> Vec<&EdmProperty> {
        self.entity_hierarchy(name)
            .into_iter()
            .rev()
            .flat_map(|entity| entity.properties.iter())
            .collect()
    }

    /// Entity set whose element type is the entity or one of its bases.
    fn entity_set_for(&self, entity: &str) -> Option<&EntitySet> {
        self.entity_hierarchy(entity).into_iter().find_map(|ty| {
            self.entity_sets()
                .iter()
                .find(|set| set.element_type == ty.name)
        })
    }
}

/// Append-only write side of the model.
pub trait ModelSink {
    /// Whether a store function with this name is already registered.
    fn contains_store_function(&self, name: &QualifiedName) -> bool;

    /// Register a store function.
    fn add_store_function(&mut self, function: StoreFunction);

    /// Register a function import on the conceptual container.
    fn add_function_import(&mut self, import: FunctionImport);

    /// Register a function import mapping.
    fn add_function_import_mapping(&mut self, mapping: FunctionImportMapping);
}

/// In-memory conceptual and store model.
#[derive(Debug, Clone)]
pub struct DbModel {
    container:       String,
    manifest:        ProviderManifest,
    entity_types:    IndexMap<String, EntityType>,
    complex_types:   IndexMap<String, ComplexType>,
    enum_types:      IndexMap<String, EnumType>,
    entity_sets:     Vec<EntitySet>,
    column_mappings: IndexMap<String, Vec<ColumnMapping>>,
    functions:       IndexMap<QualifiedName, StoreFunction>,
    imports:         IndexMap<String, FunctionImport>,
    mappings:        Vec<FunctionImportMapping>
}

impl DbModel {
    /// Empty model for a container backed by `manifest`.
    pub fn new(container: impl Into<String>, manifest: ProviderManifest) -> Self {
        Self {
            container: container.into(),
            manifest,
            entity_types: IndexMap::new(),
            complex_types: IndexMap::new(),
            enum_types: IndexMap::new(),
            entity_sets: Vec::new(),
            column_mappings: IndexMap::new(),
            functions: IndexMap::new(),
            imports: IndexMap::new(),
            mappings: Vec::new()
        }
    }

    /// Register an entity type, replacing one with the same name.
    pub fn add_entity_type(&mut self, entity: EntityType) -> &mut Self {
        self.entity_types.insert(entity.name.clone(), entity);
        self
    }

    /// Register a complex type, replacing one with the same name.
    pub fn add_complex_type(&mut self, complex: ComplexType) -> &mut Self {
        self.complex_types.insert(complex.name.clone(), complex);
        self
    }

    /// Register an enum type under its full name.
    pub fn add_enum_type(&mut self, enum_type: EnumType) -> &mut Self {
        self.enum_types
            .insert(enum_type.full_name.clone(), enum_type);
        self
    }

    /// Register an entity set.
    pub fn add_entity_set(&mut self, set: EntitySet) -> &mut Self {
        self.entity_sets.push(set);
        self
    }

    /// Declare how the entity's own properties map onto store columns.
    pub fn map_entity(&mut self, entity: impl Into<String>, mappings: Vec<ColumnMapping>) -> &mut Self {
        self.column_mappings.insert(entity.into(), mappings);
        self
    }

    /// Register the enum described by `T`.
    ///
    /// # Errors
    ///
    /// [`ConventionError::UnresolvedType`] when `T` is not an enum.
    pub fn add_enum_type_from<T: DescribeType>(&mut self) -> Result<&mut Self> {
        match T::describe() {
            TypeRef::Enum(desc) => Ok(self.add_enum_type(EnumType {
                name:       desc.name,
                full_name:  desc.full_name,
                underlying: desc.underlying,
                members:    desc
                    .members
                    .into_iter()
                    .map(|m| (m.name, m.value))
                    .collect()
            })),
            other => Err(ConventionError::unresolved(other))
        }
    }

    /// Register the struct described by `T` as a complex type.
    ///
    /// # Errors
    ///
    /// Fails when `T` is not a struct or a member type cannot be resolved.
    pub fn add_complex_type_from<T: DescribeType>(&mut self) -> Result<&mut Self> {
        let desc = structural::<T>()?;
        let properties = self.conceptual_properties(&desc)?;
        Ok(self.add_complex_type(ComplexType {
            name: desc.name,
            properties
        }))
    }

    /// Register the struct described by `T` as an entity, with an entity set
    /// named `set` and a column per member.
    ///
    /// # Errors
    ///
    /// Fails when `T` is not a struct or a member type cannot be resolved.
    pub fn add_entity_from<T: DescribeType>(&mut self, set: &str) -> Result<&mut Self> {
        let desc = structural::<T>()?;
        let properties = self.conceptual_properties(&desc)?;
        let resolver = TypeResolver::new(&*self);
        let mappings = desc
            .members
            .iter()
            .map(|member| {
                let usage = resolver.store_type_usage(&member.ty, None, &FacetHints::default())?;
                Ok(ColumnMapping::new(
                    member.name.clone(),
                    EdmProperty::new(member.column_name(), usage)
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(entity = %desc.name, set, columns = mappings.len(), "registered entity");
        self.map_entity(desc.name.clone(), mappings);
        self.add_entity_set(EntitySet::new(set, desc.name.clone()));
        Ok(self.add_entity_type(EntityType::new(desc.name, properties)))
    }

    fn conceptual_properties(&self, desc: &StructuralDescription) -> Result<Vec<EdmProperty>> {
        let resolver = TypeResolver::new(self);
        desc.members
            .iter()
            .map(|member| {
                Ok(EdmProperty::new(
                    member.name.clone(),
                    resolver.conceptual_type_usage(&member.ty)?
                ))
            })
            .collect()
    }

    /// Registered store functions, in registration order.
    pub fn store_functions(&self) -> impl Iterator<Item = &StoreFunction> {
        self.functions.values()
    }

    /// Store function by qualified name.
    pub fn store_function(&self, name: &QualifiedName) -> Option<&StoreFunction> {
        self.functions.get(name)
    }

    /// Registered function imports, in registration order.
    pub fn function_imports(&self) -> impl Iterator<Item = &FunctionImport> {
        self.imports.values()
    }

    /// Function import by name.
    pub fn function_import(&self, name: &str) -> Option<&FunctionImport> {
        self.imports.get(name)
    }

    /// Registered function import mappings.
    pub fn function_import_mappings(&self) -> &[FunctionImportMapping] {
        &self.mappings
    }

    /// Mapping of a function import.
    pub fn function_import_mapping(&self, import: &str) -> Option<&FunctionImportMapping> {
        self.mappings
            .iter()
            .find(|m| m.function_import() == import)
    }
}

fn structural<T: DescribeType>() -> Result<StructuralDescription> {
    match T::describe() {
        TypeRef::Structural(desc) => Ok(desc),
        other => Err(ConventionError::unsupported(other))
    }
}

impl ModelSource for DbModel {
    fn manifest(&self) -> &ProviderManifest {
        &self.manifest
    }

    fn container_name(&self) -> &str {
        &self.container
    }

    fn enum_type(&self, full_name: &str) -> Option<&EnumType> {
        self.enum_types.get(full_name)
    }

    fn entity_type(&self, name: &str) -> Option<&EntityType> {
        self.entity_types.get(name)
    }

    fn complex_type(&self, name: &str) -> Option<&ComplexType> {
        self.complex_types.get(name)
    }

    fn entity_sets(&self) -> &[EntitySet] {
        &self.entity_sets
    }

    fn column_mappings(&self, entity: &str) -> &[ColumnMapping] {
        self.column_mappings
            .get(entity)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl ModelSink for DbModel {
    fn contains_store_function(&self, name: &QualifiedName) -> bool {
        self.functions.contains_key(name)
    }

    fn add_store_function(&mut self, function: StoreFunction) {
        self.functions.insert(function.name.clone(), function);
    }

    fn add_function_import(&mut self, import: FunctionImport) {
        self.imports.insert(import.name.clone(), import);
    }

    fn add_function_import_mapping(&mut self, mapping: FunctionImportMapping) {
        self.mappings.push(mapping);
    }
}
