// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type resolution.
//!
//! Maps semantic types onto store and conceptual type usages and derives the
//! row type of a result.
//!
//! # Store Side
//!
//! 1. An explicit store type name is looked up in the provider manifest
//! 2. Otherwise `Option<T>` is unwrapped into a nullable usage of `T`
//! 3. Enums map through their underlying integral type
//! 4. Primitives map through the manifest's default for their kind
//!
//! # Row Types
//!
//! | Result type | Row |
//! |-------------|-----|
//! | entity | mapped column of every property, base types included |
//! | complex | one column per member, annotated column names preferred |
//! | enum or primitive | a single column named after the result column |

use tracing::trace;

use crate::{
    descriptor::{FacetHints, ParameterDescriptor, ResultDescriptor},
    error::{ConventionError, Result},
    metadata::{ColumnMapping, EdmType, Facets, RowMember, RowType, StoreType, TypeUsage},
    model::ModelSource,
    types::{PrimitiveKind, StructuralDescription, TypeRef}
};

/// Resolves semantic types against a model.
#[derive(Debug)]
pub struct TypeResolver<'m, M: ModelSource + ?Sized> {
    model: &'m M
}

impl<M: ModelSource + ?Sized> Clone for TypeResolver<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ModelSource + ?Sized> Copy for TypeResolver<'_, M> {}

impl<'m, M: ModelSource + ?Sized> TypeResolver<'m, M> {
    /// Create a resolver over `model`.
    pub const fn new(model: &'m M) -> Self {
        Self {
            model
        }
    }

    /// Store usage of a parameter.
    ///
    /// # Errors
    ///
    /// See [`TypeResolver::store_type_usage`].
    pub fn parameter_store_usage(&self, parameter: &ParameterDescriptor) -> Result<TypeUsage> {
        self.store_type_usage(
            parameter.ty(),
            parameter.store_type_name(),
            parameter.facets()
        )
    }

    /// Store usage of a scalar result.
    ///
    /// # Errors
    ///
    /// See [`TypeResolver::store_type_usage`].
    pub fn result_store_usage(&self, result: &ResultDescriptor) -> Result<TypeUsage> {
        self.store_type_usage(result.ty(), result.store_type_name(), &FacetHints::default())
    }

    /// Store usage of a semantic type.
    ///
    /// # Errors
    ///
    /// - [`ConventionError::UnknownStoreType`] when the override is not in
    ///   the manifest
    /// - [`ConventionError::UnresolvedType`] when no store type exists for
    ///   the primitive
    /// - [`ConventionError::UnsupportedStructuralType`] for structs
    pub fn store_type_usage(
        &self,
        ty: &TypeRef,
        store_type_name: Option<&str>,
        hints: &FacetHints
    ) -> Result<TypeUsage> {
        let manifest = self.model.manifest();
        let (inner, nullable) = ty.strip_nullable();

        let store = match store_type_name {
            Some(name) => manifest.store_type(name).ok_or_else(|| {
                ConventionError::UnknownStoreType {
                    name:     name.to_string(),
                    provider: manifest.name().to_string()
                }
            })?,
            None => {
                let kind = self.store_kind(inner)?;
                manifest
                    .store_type_for(kind)
                    .ok_or_else(|| ConventionError::unresolved(ty))?
            }
        };

        trace!(ty = %ty, store_type = %store.name, nullable, "resolved store type");
        Ok(TypeUsage {
            edm_type: EdmType::Store(store.clone()),
            facets:   store_facets(store, hints, nullable)
        })
    }

    fn store_kind(&self, ty: &TypeRef) -> Result<PrimitiveKind> {
        match ty {
            TypeRef::Primitive(kind) => Ok(*kind),
            TypeRef::Enum(desc) => Ok(self
                .model
                .enum_type(&desc.full_name)
                .map_or(desc.underlying, |registered| registered.underlying)),
            TypeRef::Structural(desc) => Err(ConventionError::unsupported(&desc.name)),
            other => Err(ConventionError::unresolved(other))
        }
    }

    /// Conceptual usage of a semantic type.
    ///
    /// # Errors
    ///
    /// - [`ConventionError::UnresolvedType`] for sequence types
    /// - [`ConventionError::UnsupportedStructuralType`] for structs that are
    ///   neither entities nor complex types
    pub fn conceptual_type_usage(&self, ty: &TypeRef) -> Result<TypeUsage> {
        let (inner, nullable) = ty.strip_nullable();
        let edm_type = match inner {
            TypeRef::Primitive(kind) => EdmType::Primitive(*kind),
            TypeRef::Enum(desc) => match self.model.enum_type(&desc.full_name) {
                Some(registered) => EdmType::Enum(registered.name.clone()),
                None => EdmType::Primitive(desc.underlying)
            },
            TypeRef::Structural(desc) => self.structural_type(desc)?,
            other => return Err(ConventionError::unresolved(other))
        };
        Ok(TypeUsage::new(edm_type).with_nullable(nullable))
    }

    fn structural_type(&self, desc: &StructuralDescription) -> Result<EdmType> {
        if self.model.entity_type(&desc.name).is_some() {
            Ok(EdmType::Entity(desc.name.clone()))
        } else if self.model.complex_type(&desc.name).is_some() {
            Ok(EdmType::Complex(desc.name.clone()))
        } else {
            Err(ConventionError::unsupported(&desc.name))
        }
    }

    /// Row type of one result set.
    ///
    /// # Errors
    ///
    /// - [`ConventionError::UnsupportedStructuralType`] for unregistered
    ///   structs and sequence types
    /// - [`ConventionError::UnmappedProperty`] for an entity property without
    ///   a column
    /// - any store resolution error of a column
    pub fn row_type(&self, result: &ResultDescriptor) -> Result<RowType> {
        let (inner, _) = result.ty().strip_nullable();
        match inner {
            TypeRef::Structural(desc) => match self.structural_type(desc)? {
                EdmType::Entity(name) => self.entity_row(&name),
                _ => self.complex_row(desc)
            },
            TypeRef::Primitive(_) | TypeRef::Enum(_) => Ok(RowType::new(vec![RowMember::new(
                result.column_name(),
                self.result_store_usage(result)?
            )])),
            other => Err(ConventionError::unsupported(other))
        }
    }

    fn entity_row(&self, entity: &str) -> Result<RowType> {
        let mappings: Vec<&ColumnMapping> = self
            .model
            .entity_hierarchy(entity)
            .iter()
            .flat_map(|ty| self.model.column_mappings(&ty.name))
            .collect();

        self.model
            .entity_properties(entity)
            .into_iter()
            .map(|property| {
                let mapping = mappings
                    .iter()
                    .find(|m| m.property == property.name)
                    .ok_or_else(|| ConventionError::UnmappedProperty {
                        entity:   entity.to_string(),
                        property: property.name.clone()
                    })?;
                Ok(RowMember::new(
                    mapping.column.name.clone(),
                    mapping.column.type_usage.without_store_facets()
                ))
            })
            .collect::<Result<Vec<_>>>()
            .map(RowType::new)
    }

    fn complex_row(&self, desc: &StructuralDescription) -> Result<RowType> {
        desc.members
            .iter()
            .map(|member| {
                Ok(RowMember::new(
                    member.column_name(),
                    self.store_type_usage(&member.ty, None, &FacetHints::default())?
                ))
            })
            .collect::<Result<Vec<_>>>()
            .map(RowType::new)
    }
}

fn store_facets(store: &StoreType, hints: &FacetHints, nullable: bool) -> Facets {
    let mut facets = Facets {
        nullable,
        ..Facets::default()
    };
    if store.kind.has_length()
        && let Some(length) = hints.length
    {
        facets.max_length = Some(length);
        facets.fixed_length = Some(hints.fixed_length.unwrap_or(false));
    }
    if store.kind.has_scale()
        && let (Some(precision), Some(scale)) = (hints.precision, hints.scale)
    {
        facets.precision = Some(precision);
        facets.scale = Some(scale);
    }
    if store.kind.is_temporal() {
        facets.precision = hints.precision;
    }
    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        descriptor::SimpleTypeDescriptor,
        manifest::ProviderManifest,
        metadata::{ComplexType, EdmProperty, EntitySet, EntityType, EnumType, StoreGeneratedPattern},
        model::DbModel,
        types::{DescribeType, EnumDescription, MemberDescription}
    };

    fn status() -> TypeRef {
        TypeRef::Enum(EnumDescription {
            name:       "Status".to_string(),
            full_name:  "shop::Status".to_string(),
            underlying: PrimitiveKind::Int16,
            members:    Vec::new()
        })
    }

    fn stats() -> TypeRef {
        TypeRef::Structural(StructuralDescription {
            name:      "Stats".to_string(),
            full_name: "shop::Stats".to_string(),
            members:   vec![
                MemberDescription::new("total", i64::describe()).with_column("Total"),
                MemberDescription::new("label", Option::<String>::describe()),
            ]
        })
    }

    fn result(ty: TypeRef, column: &str) -> ResultDescriptor {
        ResultDescriptor {
            base:        SimpleTypeDescriptor::new(ty, None),
            column_name: column.to_string()
        }
    }

    fn model() -> DbModel {
        DbModel::new("Shop", ProviderManifest::sql_server())
    }

    fn store_name(usage: &TypeUsage) -> &str {
        &usage.store_type().unwrap().name
    }

    #[test]
    fn primitives_use_manifest_defaults() {
        let model = model();
        let resolver = TypeResolver::new(&model);
        let usage = resolver
            .store_type_usage(&Option::<i32>::describe(), None, &FacetHints::default())
            .unwrap();
        assert_eq!(store_name(&usage), "int");
        assert!(usage.facets.nullable);
    }

    #[test]
    fn override_is_case_insensitive_and_checked() {
        let model = model();
        let resolver = TypeResolver::new(&model);
        let usage = resolver
            .store_type_usage(&String::describe(), Some("VarChar"), &FacetHints::default())
            .unwrap();
        assert_eq!(store_name(&usage), "varchar");

        let err = resolver
            .store_type_usage(&String::describe(), Some("geography"), &FacetHints::default())
            .unwrap_err();
        assert_eq!(
            err,
            ConventionError::UnknownStoreType {
                name:     "geography".to_string(),
                provider: "SqlServer".to_string()
            }
        );
    }

    #[test]
    fn facets_follow_kind() {
        let model = model();
        let resolver = TypeResolver::new(&model);
        let hints = FacetHints {
            length:       Some(40),
            fixed_length: None,
            precision:    Some(18),
            scale:        Some(2)
        };

        let text = resolver.store_type_usage(&String::describe(), None, &hints).unwrap();
        assert_eq!(text.facets.max_length, Some(40));
        assert_eq!(text.facets.fixed_length, Some(false));
        assert_eq!(text.facets.precision, None);

        let money = resolver
            .store_type_usage(&rust_decimal::Decimal::describe(), None, &hints)
            .unwrap();
        assert_eq!((money.facets.precision, money.facets.scale), (Some(18), Some(2)));
        assert_eq!(money.facets.max_length, None);

        let only_precision = FacetHints {
            precision: Some(10),
            ..FacetHints::default()
        };
        let money = resolver
            .store_type_usage(&rust_decimal::Decimal::describe(), None, &only_precision)
            .unwrap();
        assert_eq!(money.facets.precision, None);

        let stamp = resolver
            .store_type_usage(&chrono::NaiveDateTime::describe(), None, &only_precision)
            .unwrap();
        assert_eq!(stamp.facets.precision, Some(10));
    }

    #[test]
    fn enums_use_underlying_type() {
        let mut model = model();
        let resolver = TypeResolver::new(&model);
        let usage = resolver
            .store_type_usage(&status(), None, &FacetHints::default())
            .unwrap();
        assert_eq!(store_name(&usage), "smallint");
        assert_eq!(
            resolver.conceptual_type_usage(&status()).unwrap().edm_type,
            EdmType::Primitive(PrimitiveKind::Int16)
        );

        model.add_enum_type(EnumType {
            name:       "Status".to_string(),
            full_name:  "shop::Status".to_string(),
            underlying: PrimitiveKind::Int64,
            members:    Vec::new()
        });
        let resolver = TypeResolver::new(&model);
        let usage = resolver
            .store_type_usage(&status(), None, &FacetHints::default())
            .unwrap();
        assert_eq!(store_name(&usage), "bigint");
        assert_eq!(
            resolver.conceptual_type_usage(&status()).unwrap().edm_type,
            EdmType::Enum("Status".to_string())
        );
    }

    #[test]
    fn structs_need_registration() {
        let mut model = model();
        assert_eq!(
            TypeResolver::new(&model)
                .conceptual_type_usage(&stats())
                .unwrap_err(),
            ConventionError::unsupported("Stats")
        );
        assert!(matches!(
            TypeResolver::new(&model).store_type_usage(&stats(), None, &FacetHints::default()),
            Err(ConventionError::UnsupportedStructuralType { .. })
        ));

        model.add_complex_type(ComplexType {
            name:       "Stats".to_string(),
            properties: Vec::new()
        });
        let usage = TypeResolver::new(&model)
            .conceptual_type_usage(&Option::<i32>::describe())
            .unwrap();
        assert!(usage.facets.nullable);
        assert_eq!(
            TypeResolver::new(&model)
                .conceptual_type_usage(&stats())
                .unwrap()
                .edm_type,
            EdmType::Complex("Stats".to_string())
        );
    }

    #[test]
    fn complex_row_prefers_column_annotation() {
        let mut model = model();
        model.add_complex_type(ComplexType {
            name:       "Stats".to_string(),
            properties: Vec::new()
        });
        let row = TypeResolver::new(&model)
            .row_type(&result(stats(), "value"))
            .unwrap();
        assert_eq!(row.column_names(), ["Total", "label"]);
        assert!(row.members[1].type_usage.facets.nullable);
    }

    #[test]
    fn scalar_row_uses_result_column() {
        let model = model();
        let row = TypeResolver::new(&model)
            .row_type(&result(Option::<i32>::describe(), "value"))
            .unwrap();
        assert_eq!(row.column_names(), ["value"]);
        assert_eq!(store_name(&row.members[0].type_usage), "int");
    }

    #[test]
    fn entity_row_joins_mappings_across_hierarchy() {
        let mut model = model();
        let int = TypeResolver::new(&model)
            .store_type_usage(&i32::describe(), None, &FacetHints::default())
            .unwrap();
        let mut identity = int.clone();
        identity.facets.store_generated = Some(StoreGeneratedPattern::Identity);
        identity.facets.concurrency_token = true;
        let conceptual = TypeUsage::new(EdmType::Primitive(PrimitiveKind::Int32));

        model
            .add_entity_type(EntityType::new(
                "Person",
                vec![EdmProperty::new("Id", conceptual.clone())]
            ))
            .add_entity_type(
                EntityType::new("Employee", vec![EdmProperty::new("Grade", conceptual)])
                    .with_base("Person")
            )
            .add_entity_set(EntitySet::new("People", "Person"))
            .map_entity("Person", vec![ColumnMapping::new(
                "Id",
                EdmProperty::new("PersonId", identity)
            )])
            .map_entity("Employee", vec![ColumnMapping::new(
                "Grade",
                EdmProperty::new("Grade", int)
            )]);

        let employee = TypeRef::Structural(StructuralDescription {
            name:      "Employee".to_string(),
            full_name: "hr::Employee".to_string(),
            members:   Vec::new()
        });
        let row = TypeResolver::new(&model)
            .row_type(&result(employee, "value"))
            .unwrap();
        assert_eq!(row.column_names(), ["PersonId", "Grade"]);
        assert_eq!(row.members[0].type_usage.facets.store_generated, None);
        assert!(!row.members[0].type_usage.facets.concurrency_token);
    }

    #[test]
    fn unmapped_entity_property_fails() {
        let mut model = model();
        let conceptual = TypeUsage::new(EdmType::Primitive(PrimitiveKind::Int32));
        model
            .add_entity_type(EntityType::new("Customer", vec![EdmProperty::new("Id", conceptual)]))
            .add_entity_set(EntitySet::new("Customers", "Customer"));

        let customer = TypeRef::Structural(StructuralDescription {
            name:      "Customer".to_string(),
            full_name: "shop::Customer".to_string(),
            members:   Vec::new()
        });
        assert_eq!(
            TypeResolver::new(&model)
                .row_type(&result(customer, "value"))
                .unwrap_err(),
            ConventionError::UnmappedProperty {
                entity:   "Customer".to_string(),
                property: "Id".to_string()
            }
        );
    }

    #[test]
    fn sequences_have_no_row() {
        let model = model();
        assert!(matches!(
            TypeResolver::new(&model).row_type(&result(TypeRef::UntypedQuery, "value")),
            Err(ConventionError::UnsupportedStructuralType { .. })
        ));
    }
}
