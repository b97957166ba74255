// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Function discovery.
//!
//! Filters a container's methods down to those carrying store-function
//! annotations and validates what can be validated without the model:
//!
//! - the `#[function]` marker is present,
//! - a schema can be resolved,
//! - every parameter has a semantic type.

use tracing::debug;

use crate::{
    config::ConventionConfig,
    error::{ConventionError, Result},
    method::MethodInfo
};

/// A validated annotated method.
#[derive(Debug, Clone, Copy)]
pub struct DiscoveredFunction<'m> {
    /// The method.
    pub method: &'m MethodInfo,
    /// Store function name.
    pub name:   &'m str,
    /// Database schema.
    pub schema: &'m str
}

/// Find the functions among `methods`.
///
/// Methods without any store-function annotation are skipped.
///
/// # Errors
///
/// - [`ConventionError::MissingFunctionMarker`] for annotated methods without
///   `#[function]`
/// - [`ConventionError::UnresolvedSchema`] when the override and the
///   configured default are both empty
/// - [`ConventionError::UnresolvedParameterType`] for output placeholders
///   without a type annotation
pub fn discover<'m>(
    methods: &'m [MethodInfo],
    config: &'m ConventionConfig
) -> Result<Vec<DiscoveredFunction<'m>>> {
    let mut found = Vec::new();

    for method in methods.iter().filter(|m| m.has_annotations()) {
        let marker = method
            .function
            .as_ref()
            .ok_or_else(|| ConventionError::MissingFunctionMarker {
                method: method.name.clone()
            })?;

        let name = marker.name.as_deref().unwrap_or(&method.name);
        let schema = resolve_schema(method, config).ok_or_else(|| {
            ConventionError::UnresolvedSchema {
                function: name.to_string()
            }
        })?;

        if let Some(parameter) = method
            .declared_parameters()
            .iter()
            .find(|p| p.semantic_type().is_none())
        {
            return Err(ConventionError::UnresolvedParameterType {
                function:  name.to_string(),
                parameter: parameter.name.clone()
            });
        }

        debug!(method = %method.name, function = name, schema, "discovered store function");
        found.push(DiscoveredFunction {
            method,
            name,
            schema
        });
    }

    Ok(found)
}

fn resolve_schema<'m>(method: &'m MethodInfo, config: &'m ConventionConfig) -> Option<&'m str> {
    method
        .details
        .as_ref()
        .and_then(|details| details.schema.as_deref())
        .filter(|schema| !schema.is_empty())
        .or(Some(config.default_schema.as_str()))
        .filter(|schema| !schema.is_empty())
}
