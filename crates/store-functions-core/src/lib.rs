// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime for store-functions.
//!
//! Maps annotated methods onto database stored functions and table-valued
//! functions. Code generated by `store-functions` feeds [`MethodInfo`]
//! records into the pipeline below; the records can also be built by hand.
//!
//! # Overview
//!
//! ```text
//! MethodInfo ──► discover ──► DescriptorBuilder ──► FunctionDescriptor
//!                                                          │
//!                 ModelSource ◄── TypeResolver ◄── ModelSynthesizer
//!                                                          │
//!                 ModelSink ◄───────────────────────── Synthesis
//! ```
//!
//! - [`FunctionsConvention`] - runs the whole pipeline for a container
//! - [`DescriptorBuilder`] - classifies return types into [`ReturnShape`]s
//! - [`TypeResolver`] - maps semantic types onto store and conceptual types
//! - [`ModelSynthesizer`] - builds store functions, imports and mappings
//! - [`DbModel`] - in-memory model implementing [`ModelSource`] and
//!   [`ModelSink`]
//! - [`rows`] - fixed-shape result rows
//! - [`prelude`] - convenient re-exports
//!
//! # Usage
//!
//! ```rust
//! use store_functions_core::prelude::*;
//!
//! let mut model = DbModel::new("Shop", ProviderManifest::sql_server());
//! let methods = vec![
//!     MethodInfo::new("top_ids", Query::<i32>::describe())
//!         .with_function(FunctionAttr::named("TopIds"))
//!         .with_parameter(ParameterInfo::new("count", <i32>::describe())),
//! ];
//!
//! FunctionsConvention::default()
//!     .apply_methods("Shop", &methods, &mut model)
//!     .unwrap();
//!
//! let import = model.function_import("TopIds").unwrap();
//! assert!(import.is_composable);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod builder;
mod config;
mod convention;
mod descriptor;
mod discovery;
mod error;
mod manifest;
mod method;
mod model;
mod resolve;
mod synth;
mod types;

pub mod metadata;
pub mod prelude;
pub mod rows;

pub use builder::{DescriptorBuilder, describe_method};
pub use config::{ConventionConfig, DEFAULT_NAMESPACE, DEFAULT_RESULT_COLUMN_NAME, DEFAULT_SCHEMA};
pub use convention::FunctionsConvention;
pub use descriptor::{
    FacetHints, FunctionDescriptor, ParameterDescriptor, ParameterDirection,
    ParameterTypeSemantics, ResultDescriptor, ReturnShape, SimpleTypeDescriptor
};
pub use discovery::{DiscoveredFunction, discover};
pub use error::{ConventionError, Result};
pub use manifest::ProviderManifest;
pub use method::{
    FunctionAttr, FunctionContainer, FunctionDetailsAttr, MethodInfo, ParameterAttr,
    ParameterInfo, ResultAttr
};
pub use model::{DbModel, ModelSink, ModelSource};
pub use resolve::TypeResolver;
pub use synth::{ModelSynthesizer, RETURN_PARAMETER_NAME, Synthesis};
pub use types::{
    DescribeType, EnumDescription, EnumMember, MemberDescription, OutputParameter, PrimitiveKind,
    Query, StructuralDescription, TypeRef, UntypedQuery, UntypedRows
};
