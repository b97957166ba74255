// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Overload resolution semantics.

use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::quote;

/// `parameter_semantics = "..."` value.
///
/// | Value | Semantics |
/// |-------|-----------|
/// | `"allow_implicit_conversion"` | Arguments may be converted |
/// | `"allow_implicit_promotion"` | Arguments may be widened |
/// | `"exact_match_only"` | Argument types must match |
///
/// Underscores and case are ignored, so `"ExactMatchOnly"` is accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterSemantics {
    /// Implicit conversion.
    AllowImplicitConversion,
    /// Implicit promotion.
    AllowImplicitPromotion,
    /// Exact match.
    ExactMatchOnly
}

impl ParameterSemantics {
    /// Runtime value.
    pub fn to_tokens(self) -> TokenStream {
        match self {
            Self::AllowImplicitConversion => {
                quote!(::store_functions_core::ParameterTypeSemantics::AllowImplicitConversion)
            }
            Self::AllowImplicitPromotion => {
                quote!(::store_functions_core::ParameterTypeSemantics::AllowImplicitPromotion)
            }
            Self::ExactMatchOnly => {
                quote!(::store_functions_core::ParameterTypeSemantics::ExactMatchOnly)
            }
        }
    }
}

impl FromMeta for ParameterSemantics {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.replace('_', "").to_lowercase().as_str() {
            "allowimplicitconversion" => Ok(Self::AllowImplicitConversion),
            "allowimplicitpromotion" => Ok(Self::AllowImplicitPromotion),
            "exactmatchonly" => Ok(Self::ExactMatchOnly),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}
