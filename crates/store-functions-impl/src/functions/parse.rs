// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for `#[store_functions]`.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── container.rs - #[store_functions(...)] arguments and impl block (ContainerDef)
//! ├── method.rs    - per-method attributes and parameters (MethodDef, ParamDef)
//! ├── attrs.rs     - darling structs for #[function], #[result], #[parameter]
//! ├── rename.rs    - rename_all casing (RenameRule)
//! └── semantics.rs - parameter_semantics values (ParameterSemantics)
//! ```
//!
//! # Data Structures
//!
//! ```text
//! ContainerDef
//! ├── item: ItemImpl         (attributes stripped)
//! ├── name: String           (diagnostic name)
//! ├── rename: Option<RenameRule>
//! └── methods: Vec<MethodDef>
//!     └── MethodDef
//!         ├── ident
//!         ├── function: FunctionArgs
//!         ├── details: Option<DetailsArgs>
//!         ├── results: Vec<ResultDef>
//!         ├── is_extension: bool
//!         ├── params: Vec<ParamDef>
//!         └── return_type: Option<Type>
//! ```
//!
//! Attributes consumed here are removed from the emitted `impl` block, so
//! they never reach the compiler as unknown attributes.

mod attrs;
mod container;
mod method;
mod rename;
mod semantics;

pub use attrs::{DetailsArgs, ParameterDef, ResultDef};
pub use container::{ContainerArgs, ContainerDef};
pub use method::{MethodDef, ParamDef, ParamType};
