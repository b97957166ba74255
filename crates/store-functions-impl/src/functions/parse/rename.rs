// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Function name casing.

use convert_case::{Case, Casing};
use darling::FromMeta;

/// `rename_all = "..."` value, applied to method names without an explicit
/// function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `GetActiveCustomers`.
    Pascal,
    /// `getActiveCustomers`.
    Camel,
    /// `get_active_customers`.
    Snake,
    /// `get-active-customers`.
    Kebab
}

impl RenameRule {
    /// Apply the rule to a method name.
    pub fn apply(self, name: &str) -> String {
        let case = match self {
            Self::Pascal => Case::Pascal,
            Self::Camel => Case::Camel,
            Self::Snake => Case::Snake,
            Self::Kebab => Case::Kebab
        };
        name.to_case(case)
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            "kebab-case" => Ok(Self::Kebab),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}
