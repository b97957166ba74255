// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # store-functions
//!
//! One crate, all features. Re-exports:
//! - [`store_functions`](macro@store_functions) attribute macro and
//!   [`StoreType`](macro@StoreType) derive from `store-functions-impl`
//! - All types from `store-functions-core` ([`FunctionsConvention`],
//!   [`DbModel`], [`ProviderManifest`], [`rows`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use store_functions::{StoreType, prelude::*, store_functions};
//!
//! #[derive(StoreType)]
//! pub struct Customer {
//!     pub id: i32,
//!     pub name: String,
//! }
//!
//! pub struct ShopContext;
//!
//! #[store_functions]
//! impl ShopContext {
//!     #[function(name = "GetActiveCustomers")]
//!     pub fn active_customers(&self) -> Query<Customer> {
//!         Query::new()
//!     }
//! }
//!
//! let mut model = DbModel::new("Shop", ProviderManifest::sql_server());
//! model.add_entity_from::<Customer>("Customers")?;
//! FunctionsConvention::default().apply::<ShopContext, _>(&mut model)?;
//! ```

pub use store_functions_core::*;
pub use store_functions_impl::{StoreType, store_functions};
