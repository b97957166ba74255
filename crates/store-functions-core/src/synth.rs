// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model synthesis.
//!
//! Turns a [`FunctionDescriptor`] into the model elements it stands for:
//!
//! | Function | Store return | Import | Mapping |
//! |----------|--------------|--------|---------|
//! | scalar | one scalar value | none | none |
//! | table-valued, composable | collection of rows | yes | composable |
//! | table-valued, non-composable | none | yes | non-composable |
//!
//! Synthesis only reads the model. [`Synthesis::register`] applies the result.

use tracing::{debug, warn};

use crate::{
    descriptor::FunctionDescriptor,
    error::Result,
    metadata::{
        EdmType, FunctionImport, FunctionImportMapping, FunctionParameter, ParameterMode,
        QualifiedName, ScalarPropertyMapping, StoreFunction, StructuralResultMapping, TypeUsage
    },
    model::{ModelSink, ModelSource},
    resolve::TypeResolver,
    types::TypeRef
};

/// Name of the return parameter of store functions and the first result of
/// function imports.
pub const RETURN_PARAMETER_NAME: &str = "ReturnType";

/// Model elements synthesized for one function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    /// The store function.
    pub store_function: StoreFunction,
    /// Function import, for table-valued functions.
    pub import:         Option<FunctionImport>,
    /// Import mapping, for table-valued functions.
    pub mapping:        Option<FunctionImportMapping>
}

impl Synthesis {
    /// Qualified name of the store function.
    pub fn name(&self) -> &QualifiedName {
        &self.store_function.name
    }

    /// Register every element with `sink`.
    pub fn register<S: ModelSink + ?Sized>(self, sink: &mut S) {
        debug!(function = %self.store_function.name, "registering store function");
        sink.add_store_function(self.store_function);
        if let Some(import) = self.import {
            debug!(import = %import.name, container = %import.container, "registering function import");
            sink.add_function_import(import);
        }
        if let Some(mapping) = self.mapping {
            debug!(
                import = mapping.function_import(),
                composable = mapping.is_composable(),
                "registering function import mapping"
            );
            sink.add_function_import_mapping(mapping);
        }
    }
}

/// Synthesizes model elements from descriptors.
#[derive(Debug)]
pub struct ModelSynthesizer<'m, M: ModelSource + ?Sized> {
    model:    &'m M,
    resolver: TypeResolver<'m, M>
}

impl<'m, M: ModelSource + ?Sized> ModelSynthesizer<'m, M> {
    /// Create a synthesizer reading `model`.
    pub const fn new(model: &'m M) -> Self {
        Self {
            model,
            resolver: TypeResolver::new(model)
        }
    }

    /// Synthesize the elements of one function.
    ///
    /// # Errors
    ///
    /// Any resolution error of a parameter or result type.
    pub fn synthesize(&self, descriptor: &FunctionDescriptor) -> Result<Synthesis> {
        let store_function = self.store_function(descriptor)?;
        if !descriptor.is_table_valued() {
            return Ok(Synthesis {
                store_function,
                import: None,
                mapping: None
            });
        }

        let import = self.function_import(descriptor, store_function.is_composable)?;
        let mapping = self.mapping(descriptor, &store_function);
        Ok(Synthesis {
            store_function,
            import: Some(import),
            mapping: Some(mapping)
        })
    }

    /// Build the store function.
    ///
    /// # Errors
    ///
    /// Any store resolution error of a parameter or result type.
    pub fn store_function(&self, descriptor: &FunctionDescriptor) -> Result<StoreFunction> {
        let parameters = descriptor
            .parameters()
            .iter()
            .map(|p| {
                Ok(FunctionParameter::new(
                    p.name(),
                    self.resolver.parameter_store_usage(p)?,
                    ParameterMode::from(p.direction())
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let return_usage = match descriptor.results().first() {
            Some(result) if !descriptor.is_table_valued() => {
                Some(self.resolver.result_store_usage(result)?)
            }
            Some(result) if descriptor.returns_row_collection() => Some(
                TypeUsage::new(EdmType::Row(self.resolver.row_type(result)?)).into_collection()
            ),
            _ => None
        };

        Ok(StoreFunction {
            namespace: descriptor.namespace().to_string(),
            name: QualifiedName::new(descriptor.schema(), descriptor.name()),
            is_composable: descriptor.is_composable().unwrap_or(true),
            is_aggregate: descriptor.is_aggregate().unwrap_or(false),
            is_built_in: descriptor.is_built_in().unwrap_or(false),
            is_niladic: descriptor.is_niladic().unwrap_or(false),
            parameter_type_semantics: descriptor.parameter_type_semantics().unwrap_or_default(),
            parameters,
            return_parameters: return_usage
                .map(|usage| {
                    FunctionParameter::new(RETURN_PARAMETER_NAME, usage, ParameterMode::ReturnValue)
                })
                .into_iter()
                .collect()
        })
    }

    /// Build the function import of a table-valued function.
    ///
    /// # Errors
    ///
    /// Any conceptual resolution error of a parameter or result type.
    pub fn function_import(
        &self,
        descriptor: &FunctionDescriptor,
        is_composable: bool
    ) -> Result<FunctionImport> {
        let parameters = descriptor
            .parameters()
            .iter()
            .map(|p| {
                Ok(FunctionParameter::new(
                    p.name(),
                    self.resolver.conceptual_type_usage(p.ty())?,
                    ParameterMode::from(p.direction())
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut return_parameters = Vec::with_capacity(descriptor.results().len());
        let mut entity_sets = Vec::with_capacity(descriptor.results().len());
        for (index, result) in descriptor.results().iter().enumerate() {
            let usage = self.resolver.conceptual_type_usage(result.ty())?;
            entity_sets.push(self.entity_set(descriptor, &usage));
            return_parameters.push(FunctionParameter::new(
                return_parameter_name(index),
                usage.into_collection(),
                ParameterMode::ReturnValue
            ));
        }

        Ok(FunctionImport {
            name: descriptor.name().to_string(),
            container: self.model.container_name().to_string(),
            is_composable,
            parameters,
            return_parameters,
            entity_sets
        })
    }

    fn entity_set(&self, descriptor: &FunctionDescriptor, usage: &TypeUsage) -> Option<String> {
        let EdmType::Entity(entity) = &usage.edm_type else {
            return None;
        };
        let set = self.model.entity_set_for(entity).map(|set| set.name.clone());
        if set.is_none() {
            warn!(function = descriptor.name(), entity = %entity, "no entity set for result type");
        }
        set
    }

    fn mapping(
        &self,
        descriptor: &FunctionDescriptor,
        store_function: &StoreFunction
    ) -> FunctionImportMapping {
        if store_function.returns_row_collection() {
            FunctionImportMapping::Composable {
                function_import: descriptor.name().to_string(),
                store_function:  store_function.name.clone(),
                result_mapping:  descriptor
                    .results()
                    .first()
                    .and_then(|result| self.structural_mapping(result.ty()))
            }
        } else {
            FunctionImportMapping::NonComposable {
                function_import: descriptor.name().to_string(),
                store_function:  store_function.name.clone(),
                result_mappings: Vec::new()
            }
        }
    }

    fn structural_mapping(&self, ty: &TypeRef) -> Option<StructuralResultMapping> {
        let TypeRef::Structural(desc) = ty.strip_nullable().0 else {
            return None;
        };
        self.model.complex_type(&desc.name)?;
        Some(StructuralResultMapping {
            type_name:  desc.name.clone(),
            properties: desc
                .members
                .iter()
                .map(|member| ScalarPropertyMapping {
                    property: member.name.clone(),
                    column:   member.column_name().to_string()
                })
                .collect()
        })
    }
}

fn return_parameter_name(index: usize) -> String {
    match index {
        0 => RETURN_PARAMETER_NAME.to_string(),
        n => format!("{RETURN_PARAMETER_NAME}{n}")
    }
}
