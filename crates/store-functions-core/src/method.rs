// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Method and annotation records.
//!
//! A [`MethodInfo`] is what `#[store_functions]` emits for every annotated
//! method of an `impl` block. The records are plain values, so functions can
//! also be registered without the macro:
//!
//! ```rust
//! use store_functions_core::{
//!     DescribeType, FunctionAttr, FunctionDetailsAttr, MethodInfo, ParameterInfo
//! };
//!
//! let method = MethodInfo::new("order_total", <i32>::describe())
//!     .with_parameter(ParameterInfo::new("order_id", <i64>::describe()))
//!     .with_function(FunctionAttr::named("OrderTotal"))
//!     .with_details(FunctionDetailsAttr {
//!         schema: Some("sales".to_string()),
//!         ..Default::default()
//!     });
//! assert!(method.has_annotations());
//! ```

use crate::{descriptor::ParameterTypeSemantics, types::TypeRef};

/// The function marker, `#[function]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionAttr {
    /// Explicit store function name; the method name is used otherwise.
    pub name: Option<String>
}

impl FunctionAttr {
    /// Marker with an explicit function name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into())
        }
    }
}

/// The extended function marker, `#[function_details]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionDetailsAttr {
    /// Schema override.
    pub schema:                   Option<String>,
    /// Whether the function can be used inside a larger query.
    pub is_composable:            Option<bool>,
    /// Whether the function is built into the database.
    pub is_built_in:              Option<bool>,
    /// Whether the function is an aggregate. Honored for scalars only.
    pub is_aggregate:             Option<bool>,
    /// Whether the function is invoked without parentheses.
    pub is_niladic:               Option<bool>,
    /// Overload resolution semantics.
    pub parameter_type_semantics: Option<ParameterTypeSemantics>
}

impl FunctionDetailsAttr {
    /// Details marking a function as non-composable.
    pub fn non_composable() -> Self {
        Self {
            is_composable: Some(false),
            ..Default::default()
        }
    }
}

/// Per-parameter annotation, `#[parameter(...)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterAttr {
    /// Parameter name override.
    pub name:         Option<String>,
    /// Store type name override.
    pub store_type:   Option<String>,
    /// Semantic type of an [`OutputParameter`](crate::OutputParameter).
    pub ty:           Option<TypeRef>,
    /// Maximum length for string and binary parameters.
    pub length:       Option<u32>,
    /// Fixed-length flag for string and binary parameters.
    pub fixed_length: Option<bool>,
    /// Precision for decimal and date/time parameters.
    pub precision:    Option<u8>,
    /// Scale for decimal parameters.
    pub scale:        Option<u8>
}

/// Result shape annotation, `#[result(...)]`. Repeatable.
///
/// Without `ty` it configures the primary result implied by the return type.
/// With `ty` it declares an additional result set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultAttr {
    /// Column name for single-column results.
    pub column:     Option<String>,
    /// Store type name override.
    pub store_type: Option<String>,
    /// Explicit result type.
    pub ty:         Option<TypeRef>
}

/// A declared method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    /// Declared name.
    pub name:   String,
    /// Declared type, references removed.
    pub ty:     TypeRef,
    /// Declared as `&mut T`.
    pub by_ref: bool,
    /// Marked `#[out]`.
    pub is_out: bool,
    /// `#[parameter(...)]` annotation.
    pub attr:   Option<ParameterAttr>
}

impl ParameterInfo {
    /// Input parameter without annotations.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            by_ref: false,
            is_out: false,
            attr: None
        }
    }

    /// Mark as passed by mutable reference.
    #[must_use]
    pub fn by_ref(mut self) -> Self {
        self.by_ref = true;
        self
    }

    /// Mark as an output parameter.
    #[must_use]
    pub fn out(mut self) -> Self {
        self.by_ref = true;
        self.is_out = true;
        self
    }

    /// Attach a `#[parameter(...)]` annotation.
    #[must_use]
    pub fn with_attr(mut self, attr: ParameterAttr) -> Self {
        self.attr = Some(attr);
        self
    }

    /// Semantic type of the parameter.
    ///
    /// Placeholders take their type from the annotation and yield `None`
    /// when it is missing.
    pub fn semantic_type(&self) -> Option<&TypeRef> {
        match self.ty {
            TypeRef::OutputParameter => self.attr.as_ref().and_then(|attr| attr.ty.as_ref()),
            ref ty => Some(ty)
        }
    }
}

/// A method of a function container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    /// Method name.
    pub name:         String,
    /// Whether the first parameter is the context the method extends.
    pub is_extension: bool,
    /// Declared parameters, including the context parameter of extensions.
    pub parameters:   Vec<ParameterInfo>,
    /// Declared return type.
    pub return_type:  TypeRef,
    /// `#[function]` marker.
    pub function:     Option<FunctionAttr>,
    /// `#[function_details]` marker.
    pub details:      Option<FunctionDetailsAttr>,
    /// `#[result]` annotations in declaration order.
    pub results:      Vec<ResultAttr>
}

impl MethodInfo {
    /// Method without parameters or annotations.
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            is_extension: false,
            parameters: Vec::new(),
            return_type,
            function: None,
            details: None,
            results: Vec::new()
        }
    }

    /// Turn into an extension-style method with a leading context parameter.
    #[must_use]
    pub fn extension(mut self, context_name: impl Into<String>) -> Self {
        self.is_extension = true;
        self.parameters
            .insert(0, ParameterInfo::new(context_name, TypeRef::Context));
        self
    }

    /// Append a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterInfo) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Set the function marker.
    #[must_use]
    pub fn with_function(mut self, function: FunctionAttr) -> Self {
        self.function = Some(function);
        self
    }

    /// Set the extended marker.
    #[must_use]
    pub fn with_details(mut self, details: FunctionDetailsAttr) -> Self {
        self.details = Some(details);
        self
    }

    /// Append a result annotation.
    #[must_use]
    pub fn with_result(mut self, result: ResultAttr) -> Self {
        self.results.push(result);
        self
    }

    /// Whether any store-function annotation is present.
    pub fn has_annotations(&self) -> bool {
        self.function.is_some()
            || self.details.is_some()
            || !self.results.is_empty()
            || self.parameters.iter().any(|p| p.attr.is_some())
    }

    /// Parameters after the context parameter of extension methods.
    pub fn declared_parameters(&self) -> &[ParameterInfo] {
        match (self.is_extension, self.parameters.split_first()) {
            (true, Some((_, rest))) => rest,
            _ => &self.parameters
        }
    }
}

/// A type whose methods map onto store functions.
///
/// Implemented by `#[store_functions]` on an `impl` block.
pub trait FunctionContainer {
    /// Name of the container, used in diagnostics.
    fn container_name() -> &'static str;

    /// Every method carrying store-function annotations.
    fn functions() -> Vec<MethodInfo>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DescribeType, OutputParameter};

    #[test]
    fn extension_skips_context() {
        let method = MethodInfo::new("f", i32::describe())
            .with_parameter(ParameterInfo::new("a", i32::describe()))
            .extension("ctx");
        assert_eq!(method.parameters.len(), 2);
        assert_eq!(method.parameters[0].ty, TypeRef::Context);
        let declared: Vec<_> = method
            .declared_parameters()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(declared, ["a"]);
    }

    #[test]
    fn plain_method_keeps_all_parameters() {
        let method = MethodInfo::new("f", i32::describe())
            .with_parameter(ParameterInfo::new("a", i32::describe()))
            .with_parameter(ParameterInfo::new("b", i32::describe()));
        assert_eq!(method.declared_parameters().len(), 2);
    }

    #[test]
    fn placeholder_type_comes_from_annotation() {
        let bare = ParameterInfo::new("count", OutputParameter::describe()).out();
        assert_eq!(bare.semantic_type(), None);

        let typed = bare.with_attr(ParameterAttr {
            ty: Some(i32::describe()),
            ..Default::default()
        });
        assert_eq!(typed.semantic_type(), Some(&i32::describe()));
    }

    #[test]
    fn annotations_detected() {
        let method = MethodInfo::new("f", i32::describe());
        assert!(!method.has_annotations());
        assert!(
            method
                .clone()
                .with_result(ResultAttr::default())
                .has_annotations()
        );
        assert!(
            method
                .with_function(FunctionAttr::default())
                .has_annotations()
        );
    }
}
