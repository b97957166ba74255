// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Provider manifests.
//!
//! A manifest lists the native store types of a database provider and which
//! of them each primitive kind maps onto by default.
//!
//! | Kind | SQL Server | PostgreSQL |
//! |------|------------|------------|
//! | Boolean | `bit` | `boolean` |
//! | Byte | `tinyint` | `smallint` |
//! | Int16 | `smallint` | `smallint` |
//! | Int32 | `int` | `integer` |
//! | Int64 | `bigint` | `bigint` |
//! | Single | `real` | `real` |
//! | Double | `float` | `double precision` |
//! | Decimal | `decimal` | `numeric` |
//! | String | `nvarchar` | `text` |
//! | Binary | `varbinary` | `bytea` |
//! | DateTime | `datetime` | `timestamp` |
//! | DateTimeOffset | `datetimeoffset` | `timestamptz` |
//! | Time | `time` | `time` |
//! | Guid | `uniqueidentifier` | `uuid` |

use indexmap::IndexMap;

use crate::{metadata::StoreType, types::PrimitiveKind};

/// Store type catalog of one database provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderManifest {
    name:        String,
    store_types: Vec<StoreType>,
    defaults:    IndexMap<PrimitiveKind, usize>
}

impl ProviderManifest {
    /// Empty manifest.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:        name.into(),
            store_types: Vec::new(),
            defaults:    IndexMap::new()
        }
    }

    /// Add a store type. The first type of each kind becomes its default.
    #[must_use]
    pub fn with_type(mut self, name: impl Into<String>, kind: PrimitiveKind) -> Self {
        self.store_types.push(StoreType::new(name, kind));
        self.defaults
            .entry(kind)
            .or_insert(self.store_types.len() - 1);
        self
    }

    /// Make the already-added type `name` the default for `kind`.
    ///
    /// Unknown names are ignored.
    #[must_use]
    pub fn with_default(mut self, kind: PrimitiveKind, name: &str) -> Self {
        if let Some(index) = self.position(name) {
            self.defaults.insert(kind, index);
        }
        self
    }

    /// Provider name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every store type, in registration order.
    pub fn store_types(&self) -> &[StoreType] {
        &self.store_types
    }

    /// Store type by name, ignoring ASCII case.
    pub fn store_type(&self, name: &str) -> Option<&StoreType> {
        self.position(name).map(|index| &self.store_types[index])
    }

    /// Default store type for a primitive kind.
    pub fn store_type_for(&self, kind: PrimitiveKind) -> Option<&StoreType> {
        self.defaults.get(&kind).map(|&index| &self.store_types[index])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.store_types
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Microsoft SQL Server.
    pub fn sql_server() -> Self {
        use PrimitiveKind::*;

        Self::new("SqlServer")
            .with_type("bit", Boolean)
            .with_type("tinyint", Byte)
            .with_type("smallint", Int16)
            .with_type("int", Int32)
            .with_type("bigint", Int64)
            .with_type("real", Single)
            .with_type("float", Double)
            .with_type("decimal", Decimal)
            .with_type("numeric", Decimal)
            .with_type("money", Decimal)
            .with_type("nvarchar", String)
            .with_type("varchar", String)
            .with_type("nchar", String)
            .with_type("char", String)
            .with_type("ntext", String)
            .with_type("text", String)
            .with_type("varbinary", Binary)
            .with_type("binary", Binary)
            .with_type("image", Binary)
            .with_type("datetime", DateTime)
            .with_type("datetime2", DateTime)
            .with_type("date", DateTime)
            .with_type("smalldatetime", DateTime)
            .with_type("datetimeoffset", DateTimeOffset)
            .with_type("time", Time)
            .with_type("uniqueidentifier", Guid)
            .with_default(SByte, "smallint")
    }

    /// PostgreSQL.
    pub fn postgres() -> Self {
        use PrimitiveKind::*;

        Self::new("PostgreSQL")
            .with_type("boolean", Boolean)
            .with_type("smallint", Int16)
            .with_type("integer", Int32)
            .with_type("bigint", Int64)
            .with_type("real", Single)
            .with_type("double precision", Double)
            .with_type("numeric", Decimal)
            .with_type("text", String)
            .with_type("varchar", String)
            .with_type("char", String)
            .with_type("bytea", Binary)
            .with_type("timestamp", DateTime)
            .with_type("timestamptz", DateTimeOffset)
            .with_type("time", Time)
            .with_type("uuid", Guid)
            .with_default(Byte, "smallint")
            .with_default(SByte, "smallint")
    }
}
