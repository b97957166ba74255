// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Quick Navigation
//!
//! - **Attribute Macro**: [`store_functions`](macro@store_functions) on an
//!   `impl` block
//! - **Derive Macro**: [`StoreType`](macro@StoreType) for row, entity and
//!   enum types
//!
//! # Attribute Quick Reference
//!
//! ## Container `#[store_functions(...)]`
//!
//! ```rust,ignore
//! #[store_functions(
//!     name = "Shop",            // Optional: diagnostic name (default: type name)
//!     rename_all = "PascalCase" // Optional: casing for unnamed functions
//! )]
//! impl ShopContext { /* ... */ }
//! ```
//!
//! ## Method-Level Attributes
//!
//! ```rust,ignore
//! #[function(name = "GetActiveCustomers")]         // Marker, optional name
//! #[function_details(schema = "sales", composable = false)]
//! #[result(column = "Total", store_type = "money")] // Primary result
//! #[result(ty = "Order")]                           // Additional result set
//! fn active_customers(&self) -> Query<Customer> { Query::new() }
//! ```
//!
//! ## Parameter-Level Attributes
//!
//! ```rust,ignore
//! fn lookup(
//!     &self,
//!     #[parameter(store_type = "nchar", length = 3, fixed_length)] code: &str,
//!     #[out] #[parameter(ty = "i32")] count: OutputParameter,
//! ) -> Vec<Order> { Vec::new() }
//! ```

mod functions;
mod store_type;

use proc_macro::TokenStream;

/// Attribute macro registering the annotated methods of an `impl` block as
/// store functions.
///
/// Implements `FunctionContainer` for the block's self type. Methods without
/// any store-function attribute are left alone. All consumed attributes are
/// removed from the emitted block.
///
/// # Method Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[function]`, `#[function(name = "...")]` | Marks the method. Required when any other attribute is used. |
/// | `#[function_details(...)]` | `schema`, `composable`, `built_in`, `aggregate`, `niladic`, `parameter_semantics` |
/// | `#[result(...)]` | `column`, `store_type`, `ty`. Repeatable. |
///
/// # Parameter Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[parameter(...)]` | `name`, `store_type`, `ty`, `length`, `fixed_length`, `precision`, `scale` |
/// | `#[out]` | Output parameter. Requires `&mut T` or `OutputParameter`. |
///
/// # Extension Methods
///
/// An associated function whose first parameter is `&Self` (or a reference to
/// the container type) is recorded as an extension method; the context
/// parameter is not mapped onto the store function.
///
/// # Example
///
/// ```rust,ignore
/// use store_functions::prelude::*;
/// use store_functions::store_functions;
///
/// #[store_functions(rename_all = "PascalCase")]
/// impl ShopContext {
///     #[function]
///     #[function_details(schema = "sales")]
///     fn active_customers(&self, region: &str) -> Query<Customer> {
///         Query::new()
///     }
///
///     #[function(name = "OrderTotal")]
///     #[function_details(aggregate)]
///     fn order_total(&self, customer_id: i32) -> Decimal {
///         Decimal::ZERO
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn store_functions(args: TokenStream, input: TokenStream) -> TokenStream {
    functions::expand(args, input)
}

/// Derive macro implementing `DescribeType` for structs and field-less
/// enums.
///
/// # Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[store_type(name = "...")]` | Type name used for model lookups. Defaults to the type's name. |
/// | `#[column(name = "...")]` | Column a field maps to. Defaults to the field name. |
/// | `#[repr(u8)]` and other integer reprs | Underlying type of an enum. Defaults to `i32`. |
///
/// # Example
///
/// ```rust,ignore
/// use store_functions::StoreType;
///
/// #[derive(StoreType)]
/// pub struct Customer {
///     pub id: i32,
///     #[column(name = "FullName")]
///     pub name: String,
/// }
///
/// #[derive(StoreType)]
/// #[repr(u8)]
/// pub enum Status {
///     Active = 1,
///     Closed = 2,
/// }
/// ```
#[proc_macro_derive(StoreType, attributes(store_type, column))]
pub fn derive_store_type(input: TokenStream) -> TokenStream {
    store_type::derive(input)
}
