// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[store_functions]` attribute macro implementation.
//!
//! # Architecture
//!
//! ```text
//! functions.rs (orchestrator)
//! │
//! ├── parse/       → attribute parsing (ContainerDef, MethodDef)
//! └── generate.rs  → FunctionContainer impl
//! ```
//!
//! # Generated Code
//!
//! ```rust,ignore
//! #[store_functions(rename_all = "PascalCase")]
//! impl ShopContext {
//!     #[function]
//!     fn active_customers(&self) -> Query<Customer> { Query::new() }
//! }
//! ```
//!
//! expands to the `impl` block with the attributes removed plus:
//!
//! ```rust,ignore
//! impl ::store_functions_core::FunctionContainer for ShopContext {
//!     fn container_name() -> &'static str { "ShopContext" }
//!     fn functions() -> Vec<MethodInfo> {
//!         vec![MethodInfo { name: "active_customers".into(), /* ... */ }]
//!     }
//! }
//! ```

mod generate;
pub mod parse;

use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemImpl, parse_macro_input};

use self::parse::{ContainerArgs, ContainerDef};

/// Main entry point for the `#[store_functions]` attribute.
///
/// On errors the `impl` block is still emitted with the consumed attributes
/// removed, so the diagnostics are not buried under unknown-attribute errors.
pub fn expand(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as ItemImpl);

    let (args, mut errors) = match ContainerArgs::parse(args.into()) {
        Ok(args) => (args, Vec::new()),
        Err(err) => (ContainerArgs::default(), vec![err])
    };

    let item = match ContainerDef::parse(args, item) {
        Ok(container) if errors.is_empty() => return generate::generate(&container).into(),
        Ok(container) => container.item,
        Err((err, item)) => {
            errors.push(err);
            item
        }
    };

    let errors = darling::Error::multiple(errors).write_errors();
    quote!(#errors #item).into()
}
