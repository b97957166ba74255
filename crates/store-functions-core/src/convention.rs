// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The store functions convention.
//!
//! One pass over a container's annotated methods:
//!
//! ```text
//! discover ─► build descriptors ─► check names ─► synthesize ─► register
//! ```
//!
//! Everything up to synthesis only reads the model. Registration starts once
//! every function of the container has been synthesized, so a failing method
//! leaves the model untouched.

use std::collections::HashSet;

use tracing::{debug, debug_span};

use crate::{
    builder::DescriptorBuilder,
    config::ConventionConfig,
    descriptor::FunctionDescriptor,
    discovery::discover,
    error::{ConventionError, Result},
    metadata::QualifiedName,
    method::{FunctionContainer, MethodInfo},
    model::{ModelSink, ModelSource},
    synth::{ModelSynthesizer, Synthesis}
};

/// Maps the annotated methods of containers onto store functions.
///
/// # Example
///
/// ```rust
/// use store_functions_core::{
///     DbModel, DescribeType, FunctionAttr, FunctionsConvention, MethodInfo, ProviderManifest
/// };
///
/// let mut model = DbModel::new("Shop", ProviderManifest::sql_server());
/// let methods = vec![
///     MethodInfo::new("order_count", <i32>::describe())
///         .with_function(FunctionAttr::named("OrderCount"))
/// ];
///
/// let names = FunctionsConvention::default()
///     .apply_methods("Shop", &methods, &mut model)
///     .unwrap();
/// assert_eq!(names[0].to_string(), "dbo.OrderCount");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FunctionsConvention {
    config: ConventionConfig
}

impl FunctionsConvention {
    /// Create the convention with `config`.
    pub const fn new(config: ConventionConfig) -> Self {
        Self {
            config
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &ConventionConfig {
        &self.config
    }

    /// Register every function of container `C`.
    ///
    /// Returns the names of the registered store functions.
    ///
    /// # Errors
    ///
    /// The first [`ConventionError`] of any method; nothing is registered.
    pub fn apply<C, M>(&self, model: &mut M) -> Result<Vec<QualifiedName>>
    where
        C: FunctionContainer,
        M: ModelSource + ModelSink + ?Sized
    {
        self.apply_methods(C::container_name(), &C::functions(), model)
    }

    /// Register every function among `methods`.
    ///
    /// # Errors
    ///
    /// The first [`ConventionError`] of any method; nothing is registered.
    pub fn apply_methods<M>(
        &self,
        container: &str,
        methods: &[MethodInfo],
        model: &mut M
    ) -> Result<Vec<QualifiedName>>
    where
        M: ModelSource + ModelSink + ?Sized
    {
        let span = debug_span!(
            "store_functions",
            container,
            namespace = %self.config.namespace
        );
        let _guard = span.enter();

        let syntheses = self.synthesize(methods, model)?;
        let names: Vec<QualifiedName> = syntheses.iter().map(|s| s.name().clone()).collect();
        for synthesis in syntheses {
            synthesis.register(model);
        }

        debug!(functions = names.len(), "store functions registered");
        Ok(names)
    }

    fn synthesize<M>(&self, methods: &[MethodInfo], model: &M) -> Result<Vec<Synthesis>>
    where
        M: ModelSource + ModelSink + ?Sized
    {
        let found = discover(methods, &self.config)?;
        let builder = DescriptorBuilder::new(&self.config);
        let descriptors = found
            .iter()
            .map(|function| builder.build(function))
            .collect::<Result<Vec<_>>>()?;

        check_names(&descriptors, model)?;

        let synthesizer = ModelSynthesizer::new(model);
        descriptors
            .iter()
            .map(|descriptor| synthesizer.synthesize(descriptor))
            .collect()
    }
}

fn check_names<M>(descriptors: &[FunctionDescriptor], model: &M) -> Result<()>
where
    M: ModelSink + ?Sized
{
    let mut seen = HashSet::with_capacity(descriptors.len());
    for descriptor in descriptors {
        let name = QualifiedName::new(descriptor.schema(), descriptor.name());
        if model.contains_store_function(&name) || !seen.insert(name.clone()) {
            return Err(ConventionError::DuplicateFunction {
                schema: name.schema,
                name:   name.name
            });
        }
    }
    Ok(())
}
