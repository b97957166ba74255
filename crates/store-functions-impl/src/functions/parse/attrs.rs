// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Method and parameter attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Target | Arguments |
//! |-----------|--------|-----------|
//! | `#[function]` | method | `name` |
//! | `#[function_details]` | method | `schema`, `composable`, `built_in`, `aggregate`, `niladic`, `parameter_semantics` |
//! | `#[result]` | method, repeatable | `column`, `store_type`, `ty` |
//! | `#[parameter]` | parameter | `name`, `store_type`, `ty`, `length`, `fixed_length`, `precision`, `scale` |
//! | `#[out]` | parameter | none |

use darling::FromMeta;
use syn::{Attribute, LitStr, Meta, Type};

use super::semantics::ParameterSemantics;

/// Function marker attribute name.
pub const FUNCTION: &str = "function";

/// Extended function marker attribute name.
pub const FUNCTION_DETAILS: &str = "function_details";

/// Result annotation attribute name.
pub const RESULT: &str = "result";

/// Parameter annotation attribute name.
pub const PARAMETER: &str = "parameter";

/// Output parameter marker attribute name.
pub const OUT: &str = "out";

/// Whether `attr` is consumed on methods.
pub fn is_method_attr(attr: &Attribute) -> bool {
    let path = attr.path();
    path.is_ident(FUNCTION) || path.is_ident(FUNCTION_DETAILS) || path.is_ident(RESULT)
}

/// Whether `attr` is consumed on parameters.
pub fn is_parameter_attr(attr: &Attribute) -> bool {
    attr.path().is_ident(PARAMETER) || attr.path().is_ident(OUT)
}

/// Parse an attribute that may also appear as a bare word.
pub fn parse_attr<T: FromMeta + Default>(attr: &Attribute) -> darling::Result<T> {
    match &attr.meta {
        Meta::Path(_) => Ok(T::default()),
        meta => T::from_meta(meta)
    }
}

/// `#[function(name = "...")]`.
#[derive(Debug, Clone, Default, FromMeta)]
pub struct FunctionArgs {
    /// Store function name.
    pub name: Option<String>
}

/// `#[function_details(...)]`.
#[derive(Debug, Clone, Default, FromMeta)]
pub struct DetailsArgs {
    /// Schema override.
    pub schema:              Option<String>,
    /// Composable flag.
    pub composable:          Option<bool>,
    /// Built-in flag.
    pub built_in:            Option<bool>,
    /// Aggregate flag.
    pub aggregate:           Option<bool>,
    /// Niladic flag.
    pub niladic:             Option<bool>,
    /// Overload resolution semantics.
    pub parameter_semantics: Option<ParameterSemantics>
}

/// Raw `#[result(...)]`.
#[derive(Debug, Clone, Default, FromMeta)]
pub struct ResultArgs {
    /// Column name.
    pub column:     Option<String>,
    /// Store type name.
    pub store_type: Option<String>,
    /// Result type as a string.
    pub ty:         Option<LitStr>
}

/// Raw `#[parameter(...)]`.
#[derive(Debug, Clone, Default, FromMeta)]
pub struct ParameterArgs {
    /// Parameter name override.
    pub name:         Option<String>,
    /// Store type name.
    pub store_type:   Option<String>,
    /// Semantic type as a string.
    pub ty:           Option<LitStr>,
    /// Maximum length.
    pub length:       Option<u32>,
    /// Fixed-length flag.
    pub fixed_length: Option<bool>,
    /// Precision.
    pub precision:    Option<u8>,
    /// Scale.
    pub scale:        Option<u8>
}

/// Parsed `#[result(...)]`.
#[derive(Debug, Clone)]
pub struct ResultDef {
    /// Column name.
    pub column:     Option<String>,
    /// Store type name.
    pub store_type: Option<String>,
    /// Explicit result type.
    pub ty:         Option<Type>
}

impl ResultDef {
    /// Parse from an attribute.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        let args: ResultArgs = parse_attr(attr)?;
        Ok(Self {
            column:     args.column,
            store_type: args.store_type,
            ty:         parse_type(args.ty.as_ref())?
        })
    }
}

/// Parsed `#[parameter(...)]`.
#[derive(Debug, Clone, Default)]
pub struct ParameterDef {
    /// Name override.
    pub name:         Option<String>,
    /// Store type name.
    pub store_type:   Option<String>,
    /// Semantic type.
    pub ty:           Option<Type>,
    /// Maximum length.
    pub length:       Option<u32>,
    /// Fixed-length flag.
    pub fixed_length: Option<bool>,
    /// Precision.
    pub precision:    Option<u8>,
    /// Scale.
    pub scale:        Option<u8>
}

impl ParameterDef {
    /// Parse from an attribute.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        let args: ParameterArgs = parse_attr(attr)?;
        Ok(Self {
            name:         args.name,
            store_type:   args.store_type,
            ty:           parse_type(args.ty.as_ref())?,
            length:       args.length,
            fixed_length: args.fixed_length,
            precision:    args.precision,
            scale:        args.scale
        })
    }
}

fn parse_type(lit: Option<&LitStr>) -> darling::Result<Option<Type>> {
    lit.map(|lit| lit.parse::<Type>().map_err(darling::Error::from))
        .transpose()
}
