// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Descriptor builder.
//!
//! Classifies a method's return type into a [`ReturnShape`] and turns the
//! method into a [`FunctionDescriptor`].
//!
//! # Classification
//!
//! Checked in this order:
//!
//! 1. `Query<T>`: table-valued, one result of type `T`
//! 2. `UntypedQuery`: table-valued, first `#[result(ty = ...)]` is the result
//! 3. `Vec<T>`: table-valued, non-composable, `T` plus every typed
//!    `#[result]`
//! 4. `UntypedRows`: table-valued, non-composable, every typed `#[result]`
//! 5. anything else: scalar
//!
//! Byte vectors and strings are scalar values, never row sequences.

use crate::{
    config::ConventionConfig,
    descriptor::{
        FacetHints, FunctionDescriptor, ParameterDescriptor, ParameterDirection,
        ResultDescriptor, ReturnShape, SimpleTypeDescriptor
    },
    discovery::DiscoveredFunction,
    error::{ConventionError, Result},
    method::{MethodInfo, ParameterInfo, ResultAttr},
    types::{PrimitiveKind, TypeRef}
};

/// Builds descriptors for discovered functions.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorBuilder<'c> {
    config: &'c ConventionConfig
}

impl<'c> DescriptorBuilder<'c> {
    /// Create a builder using `config` for namespace and column defaults.
    pub const fn new(config: &'c ConventionConfig) -> Self {
        Self {
            config
        }
    }

    /// Build the descriptor of one function.
    ///
    /// # Errors
    ///
    /// - [`ConventionError::ResultTypeNotSpecified`] for an `UntypedQuery`
    ///   without a typed `#[result]`
    /// - [`ConventionError::UnresolvedParameterType`] for untyped output
    ///   placeholders
    pub fn build(&self, function: &DiscoveredFunction<'_>) -> Result<FunctionDescriptor> {
        let method = function.method;
        let details = method.details.clone().unwrap_or_default();
        let (shape, results) = self.classify(function)?;
        let parameters = build_parameters(function)?;

        let is_composable = if shape.is_materialized() {
            Some(false)
        } else {
            details.is_composable
        };
        let is_aggregate = match shape {
            ReturnShape::Scalar => details.is_aggregate,
            _ => None
        };
        let is_niladic = if parameters.is_empty() {
            details.is_niladic
        } else {
            Some(false)
        };

        Ok(FunctionDescriptor {
            namespace: self.config.namespace.clone(),
            schema: function.schema.to_string(),
            name: function.name.to_string(),
            shape,
            is_composable,
            is_built_in: details.is_built_in,
            is_aggregate,
            is_niladic,
            parameter_type_semantics: details.parameter_type_semantics,
            parameters,
            results
        })
    }

    fn classify(
        &self,
        function: &DiscoveredFunction<'_>
    ) -> Result<(ReturnShape, Vec<ResultDescriptor>)> {
        let method = function.method;
        let primary = method.results.iter().find(|r| r.ty.is_none());
        let mut typed = method
            .results
            .iter()
            .filter_map(|r| r.ty.as_ref().map(|ty| (ty, r)));

        match &method.return_type {
            TypeRef::Query(item) => Ok((ReturnShape::Query, vec![self.result(item, primary)])),
            TypeRef::UntypedQuery => {
                let (ty, attr) =
                    typed
                        .next()
                        .ok_or_else(|| ConventionError::ResultTypeNotSpecified {
                            function: function.name.to_string()
                        })?;
                Ok((ReturnShape::UntypedQuery, vec![self.result(ty, Some(attr))]))
            }
            TypeRef::Rows(item) if !is_byte(item) => {
                let mut results = vec![self.result(item, primary)];
                results.extend(typed.map(|(ty, attr)| self.result(ty, Some(attr))));
                Ok((ReturnShape::Rows, results))
            }
            TypeRef::UntypedRows => Ok((
                ReturnShape::UntypedRows,
                typed.map(|(ty, attr)| self.result(ty, Some(attr))).collect()
            )),
            TypeRef::Rows(_) => Ok((
                ReturnShape::Scalar,
                vec![self.result(&TypeRef::Primitive(PrimitiveKind::Binary), primary)]
            )),
            scalar => Ok((ReturnShape::Scalar, vec![self.result(scalar, primary)]))
        }
    }

    fn result(&self, ty: &TypeRef, attr: Option<&ResultAttr>) -> ResultDescriptor {
        let column_name = attr
            .and_then(|a| a.column.clone())
            .unwrap_or_else(|| self.config.result_column_name.clone());
        ResultDescriptor {
            base: SimpleTypeDescriptor::new(ty.clone(), attr.and_then(|a| a.store_type.clone())),
            column_name
        }
    }
}

fn is_byte(item: &TypeRef) -> bool {
    matches!(item, TypeRef::Primitive(PrimitiveKind::Byte))
}

fn build_parameters(function: &DiscoveredFunction<'_>) -> Result<Vec<ParameterDescriptor>> {
    function
        .method
        .declared_parameters()
        .iter()
        .enumerate()
        .map(|(position, parameter)| build_parameter(function, position, parameter))
        .collect()
}

fn build_parameter(
    function: &DiscoveredFunction<'_>,
    position: usize,
    parameter: &ParameterInfo
) -> Result<ParameterDescriptor> {
    let ty = parameter
        .semantic_type()
        .ok_or_else(|| ConventionError::UnresolvedParameterType {
            function:  function.name.to_string(),
            parameter: parameter.name.clone()
        })?;
    let attr = parameter.attr.clone().unwrap_or_default();

    Ok(ParameterDescriptor {
        base: SimpleTypeDescriptor::new(ty.clone(), attr.store_type),
        position,
        name: attr.name.unwrap_or_else(|| parameter.name.clone()),
        direction: direction(parameter),
        facets: FacetHints {
            length:       attr.length,
            fixed_length: attr.fixed_length,
            precision:    attr.precision,
            scale:        attr.scale
        }
    })
}

fn direction(parameter: &ParameterInfo) -> ParameterDirection {
    let by_ref = parameter.by_ref || parameter.ty == TypeRef::OutputParameter;
    match (parameter.is_out, by_ref) {
        (true, _) => ParameterDirection::Output,
        (false, true) => ParameterDirection::InputOutput,
        (false, false) => ParameterDirection::Input
    }
}

/// Discover and build a single method.
///
/// # Errors
///
/// Same as [`crate::discover`] and [`DescriptorBuilder::build`].
pub fn describe_method(method: &MethodInfo, config: &ConventionConfig) -> Result<FunctionDescriptor> {
    let found = crate::discovery::discover(std::slice::from_ref(method), config)?;
    let function = found
        .first()
        .ok_or_else(|| ConventionError::MissingFunctionMarker {
            method: method.name.clone()
        })?;
    DescriptorBuilder::new(config).build(function)
}
