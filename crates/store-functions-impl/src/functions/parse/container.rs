// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Container-level parsing for `#[store_functions(...)]`.

use darling::{FromMeta, ast::NestedMeta};
use proc_macro2::TokenStream;
use syn::{ImplItem, ItemImpl, Type};

use super::{
    method::{MethodDef, parse_method},
    rename::RenameRule
};

/// Arguments of `#[store_functions(...)]`.
#[derive(Debug, Clone, Default, FromMeta)]
pub struct ContainerArgs {
    /// Container name reported in diagnostics; the type name otherwise.
    pub name:       Option<String>,
    /// Casing applied to method names without `#[function(name = ...)]`.
    pub rename_all: Option<RenameRule>
}

impl ContainerArgs {
    /// Parse the attribute arguments.
    pub fn parse(args: TokenStream) -> darling::Result<Self> {
        let items = NestedMeta::parse_meta_list(args)?;
        Self::from_list(&items)
    }
}

/// A parsed `impl` block.
#[derive(Debug, Clone)]
pub struct ContainerDef {
    /// The block with store-function attributes removed.
    pub item:    ItemImpl,
    /// Container name.
    pub name:    String,
    /// Casing for unnamed functions.
    pub rename:  Option<RenameRule>,
    /// Annotated methods in declaration order.
    pub methods: Vec<MethodDef>
}

impl ContainerDef {
    /// Parse an `impl` block, stripping every consumed attribute.
    ///
    /// The stripped block is returned alongside errors so the expansion can
    /// still emit it.
    ///
    /// # Errors
    ///
    /// - trait implementations
    /// - errors of individual methods, accumulated
    pub fn parse(args: ContainerArgs, mut item: ItemImpl) -> Result<Self, (darling::Error, ItemImpl)> {
        let mut errors = darling::Error::accumulator();

        if let Some((_, path, _)) = &item.trait_ {
            errors.push(
                darling::Error::custom("#[store_functions] applies to inherent impl blocks")
                    .with_span(path)
            );
        }

        let self_ty = item.self_ty.as_ref().clone();
        let mut methods = Vec::new();
        for impl_item in &mut item.items {
            let ImplItem::Fn(method) = impl_item else {
                continue;
            };
            if let Some(Some(def)) = errors.handle(parse_method(method, &self_ty)) {
                methods.push(def);
            }
        }

        if let Err(err) = errors.finish() {
            return Err((err, item));
        }

        let name = args.name.unwrap_or_else(|| type_name(&self_ty));
        Ok(Self {
            item,
            name,
            rename: args.rename_all,
            methods
        })
    }
}

/// Last path segment of the container type.
fn type_name(ty: &Type) -> String {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .map_or_else(String::new, |s| s.ident.to_string()),
        Type::Group(group) => type_name(&group.elem),
        Type::Paren(paren) => type_name(&paren.elem),
        other => quote::quote!(#other).to_string()
    }
}
