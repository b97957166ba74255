// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Method parsing.
//!
//! Reads and strips the store-function attributes of one method and
//! classifies its parameters.
//!
//! # Parameters
//!
//! | Declaration | Recorded as |
//! |-------------|-------------|
//! | `&self`, `&mut self` | nothing |
//! | leading `ctx: &Self` on an associated fn | context parameter, extension method |
//! | `x: &mut T` | `T`, by reference |
//! | `#[out] x: &mut T` | `T`, output |
//! | `x: &T` | `T` |
//! | `x: T` | `T` |

use quote::ToTokens;
use syn::{FnArg, ImplItemFn, Pat, ReturnType, Type, ext::IdentExt};

use super::attrs::{
    DetailsArgs, FUNCTION, FUNCTION_DETAILS, FunctionArgs, OUT, PARAMETER, ParameterDef, RESULT,
    ResultDef, is_method_attr, is_parameter_attr, parse_attr
};

/// Parameter type of a method.
#[derive(Debug, Clone)]
pub enum ParamType {
    /// The context an extension method is declared on.
    Context,
    /// Any other type, references removed.
    Typed(Type)
}

/// One declared parameter.
#[derive(Debug, Clone)]
pub struct ParamDef {
    /// Declared name.
    pub name:   String,
    /// Type.
    pub ty:     ParamType,
    /// Declared as `&mut T`.
    pub by_ref: bool,
    /// Marked `#[out]`.
    pub is_out: bool,
    /// `#[parameter(...)]`.
    pub attr:   Option<ParameterDef>
}

/// One annotated method.
#[derive(Debug, Clone)]
pub struct MethodDef {
    /// Method name.
    pub ident:        syn::Ident,
    /// `#[function]`.
    pub function:     FunctionArgs,
    /// `#[function_details]`.
    pub details:      Option<DetailsArgs>,
    /// `#[result]`, in order.
    pub results:      Vec<ResultDef>,
    /// Declared on a leading context parameter.
    pub is_extension: bool,
    /// Parameters, context included.
    pub params:       Vec<ParamDef>,
    /// Declared return type; `None` for `()`.
    pub return_type:  Option<Type>
}

impl MethodDef {
    /// Method name without raw prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// Parse and strip the attributes of `method`.
///
/// Returns `Ok(None)` for methods without store-function attributes.
///
/// # Errors
///
/// - malformed attributes
/// - `#[function_details]`, `#[result]` or `#[parameter]` without
///   `#[function]`
/// - `#[out]` on a parameter that is neither `&mut T` nor `OutputParameter`
pub fn parse_method(method: &mut ImplItemFn, self_ty: &Type) -> darling::Result<Option<MethodDef>> {
    let mut errors = darling::Error::accumulator();

    let mut function = None;
    let mut details = None;
    let mut results = Vec::new();
    for attr in method.attrs.iter().filter(|a| is_method_attr(a)) {
        if attr.path().is_ident(FUNCTION) {
            function = errors.handle(parse_attr::<FunctionArgs>(attr));
        } else if attr.path().is_ident(FUNCTION_DETAILS) {
            details = errors.handle(parse_attr::<DetailsArgs>(attr));
        } else if attr.path().is_ident(RESULT) {
            results.extend(errors.handle(ResultDef::from_attr(attr)));
        }
    }
    let annotated = method.attrs.iter().any(is_method_attr);
    let marked = method.attrs.iter().any(|a| a.path().is_ident(FUNCTION));
    method.attrs.retain(|a| !is_method_attr(a));

    let has_receiver = matches!(method.sig.inputs.first(), Some(FnArg::Receiver(_)));
    let mut params = Vec::new();
    let mut has_param_attrs = false;
    for (index, input) in method.sig.inputs.iter_mut().enumerate() {
        let FnArg::Typed(arg) = input else {
            continue;
        };
        has_param_attrs |= arg.attrs.iter().any(is_parameter_attr);

        let mut attr = None;
        let mut is_out = false;
        for a in arg.attrs.iter().filter(|a| is_parameter_attr(a)) {
            if a.path().is_ident(PARAMETER) {
                attr = errors.handle(ParameterDef::from_attr(a));
            } else if a.path().is_ident(OUT) {
                is_out = true;
            }
        }
        arg.attrs.retain(|a| !is_parameter_attr(a));

        let name = match arg.pat.as_ref() {
            Pat::Ident(pat) => pat.ident.unraw().to_string(),
            _ => format!("arg{index}")
        };

        if index == 0 && !has_receiver && is_context(&arg.ty, self_ty) {
            params.push(ParamDef {
                name,
                ty: ParamType::Context,
                by_ref: matches!(arg.ty.as_ref(), Type::Reference(r) if r.mutability.is_some()),
                is_out: false,
                attr
            });
            continue;
        }

        let (ty, by_ref) = strip_reference(&arg.ty);
        if is_out && !by_ref && !is_output_placeholder(&ty) {
            errors.push(
                darling::Error::custom("#[out] requires a `&mut T` or `OutputParameter` parameter")
                    .with_span(&arg.ty)
            );
        }
        params.push(ParamDef {
            name,
            ty: ParamType::Typed(ty),
            by_ref,
            is_out,
            attr
        });
    }

    let return_type = match &method.sig.output {
        ReturnType::Type(_, ty) if !matches!(ty.as_ref(), Type::Tuple(t) if t.elems.is_empty()) => {
            Some(ty.as_ref().clone())
        }
        _ => None
    };

    if !annotated && !has_param_attrs {
        return errors.finish_with(None);
    }

    let Some(function) = function else {
        if !marked {
            errors.push(
                darling::Error::custom(
                    "store function attributes require a #[function] marker on the method"
                )
                .with_span(&method.sig.ident)
            );
        }
        return errors.finish_with(None);
    };

    if let Some(param) = method.sig.generics.type_params().next() {
        errors.push(
            darling::Error::custom("store functions cannot have generic type parameters")
                .with_span(&param.ident)
        );
    }

    let is_extension = params
        .first()
        .is_some_and(|p| matches!(p.ty, ParamType::Context));

    errors.finish_with(Some(MethodDef {
        ident: method.sig.ident.clone(),
        function,
        details,
        results,
        is_extension,
        params,
        return_type
    }))
}

/// `&Self`, `&mut Self` or a reference to the container type.
fn is_context(ty: &Type, self_ty: &Type) -> bool {
    let Type::Reference(reference) = ty else {
        return false;
    };
    match reference.elem.as_ref() {
        Type::Path(path) if path.qself.is_none() && path.path.is_ident("Self") => true,
        elem => elem.to_token_stream().to_string() == self_ty.to_token_stream().to_string()
    }
}

/// Remove one reference level, reporting whether it was `&mut`.
fn strip_reference(ty: &Type) -> (Type, bool) {
    match ty {
        Type::Reference(reference) => (
            reference.elem.as_ref().clone(),
            reference.mutability.is_some()
        ),
        Type::Paren(paren) => strip_reference(&paren.elem),
        other => (other.clone(), false)
    }
}

fn is_output_placeholder(ty: &Type) -> bool {
    matches!(
        ty,
        Type::Path(path) if path
            .path
            .segments
            .last()
            .is_some_and(|s| s.ident == "OutputParameter")
    )
}
