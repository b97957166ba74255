// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust
//! use store_functions_core::prelude::*;
//! ```

pub use crate::{
    ConventionConfig, ConventionError, DbModel, DescribeType, FunctionAttr, FunctionContainer,
    FunctionDetailsAttr, FunctionsConvention, MethodInfo, ModelSink, ModelSource,
    OutputParameter, ParameterAttr, ParameterInfo, ParameterTypeSemantics, ProviderManifest,
    Query, ResultAttr, TypeRef, UntypedQuery, UntypedRows,
    metadata::{FunctionImportMapping, QualifiedName}
};
