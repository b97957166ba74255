// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Semantic type descriptions.
//!
//! Rust has no runtime reflection, so every type that appears in a function
//! signature describes itself through [`DescribeType`]. The resulting
//! [`TypeRef`] is what the descriptor builder classifies and the type
//! resolver maps onto model types.
//!
//! # Return Shapes
//!
//! | Rust return type | [`TypeRef`] | Function kind |
//! |------------------|-------------|---------------|
//! | `Query<T>` | `Query(T)` | Composable table-valued |
//! | `UntypedQuery` | `UntypedQuery` | Table-valued, needs `#[result(ty = ...)]` |
//! | `Vec<T>` | `Rows(T)` | Non-composable table-valued |
//! | `UntypedRows` | `UntypedRows` | Non-composable, results from annotations |
//! | `Vec<u8>`, `String` | `Primitive(..)` | Scalar |
//! | anything else | | Scalar |

use std::{fmt, marker::PhantomData};

use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Primitive kinds shared by the conceptual and the store model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveKind {
    /// Variable length byte sequence.
    Binary,
    /// `bool`.
    Boolean,
    /// `u8`.
    Byte,
    /// Date and time without offset.
    DateTime,
    /// Date and time with offset.
    DateTimeOffset,
    /// Fixed-point decimal.
    Decimal,
    /// `f64`.
    Double,
    /// UUID.
    Guid,
    /// `i16`.
    Int16,
    /// `i32`.
    Int32,
    /// `i64`.
    Int64,
    /// `i8`.
    SByte,
    /// `f32`.
    Single,
    /// Unicode text.
    String,
    /// Time of day.
    Time
}

impl PrimitiveKind {
    /// Conceptual name of the primitive (e.g. `Int32`).
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::DateTime => "DateTime",
            Self::DateTimeOffset => "DateTimeOffset",
            Self::Decimal => "Decimal",
            Self::Double => "Double",
            Self::Guid => "Guid",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::SByte => "SByte",
            Self::Single => "Single",
            Self::String => "String",
            Self::Time => "Time"
        }
    }

    /// Whether the kind can back an enum.
    pub const fn is_integral(&self) -> bool {
        matches!(
            self,
            Self::Byte | Self::SByte | Self::Int16 | Self::Int32 | Self::Int64
        )
    }

    /// Whether max-length and fixed-length facets apply.
    pub const fn has_length(&self) -> bool {
        matches!(self, Self::Binary | Self::String)
    }

    /// Whether precision and scale facets apply.
    pub const fn has_scale(&self) -> bool {
        matches!(self, Self::Decimal)
    }

    /// Whether a fractional-seconds precision facet applies.
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::DateTime | Self::DateTimeOffset | Self::Time)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Member of a structural type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescription {
    /// Rust field name.
    pub name:   String,
    /// Explicit column name from `#[column(name = "...")]`.
    pub column: Option<String>,
    /// Field type.
    pub ty:     TypeRef
}

impl MemberDescription {
    /// Create a member without a column override.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            column: None,
            ty
        }
    }

    /// Set the column name.
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Column name, preferring the explicit annotation.
    pub fn column_name(&self) -> &str {
        self.column.as_deref().unwrap_or(&self.name)
    }
}

/// A struct used as an entity, complex type or row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralDescription {
    /// Type name used for model lookups.
    pub name:      String,
    /// Module-qualified name.
    pub full_name: String,
    /// Members in declaration order.
    pub members:   Vec<MemberDescription>
}

/// Named value of an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    /// Variant name.
    pub name:  String,
    /// Discriminant value.
    pub value: i64
}

/// A field-less enum stored as its underlying integral type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescription {
    /// Enum name.
    pub name:       String,
    /// Module-qualified name, used to find the enum in the conceptual model.
    pub full_name:  String,
    /// Integral primitive the enum is stored as.
    pub underlying: PrimitiveKind,
    /// Variants in declaration order.
    pub members:    Vec<EnumMember>
}

/// Description of a type appearing in a function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// Primitive value.
    Primitive(PrimitiveKind),
    /// `Option<T>`.
    Nullable(Box<TypeRef>),
    /// Enum stored as an integral value.
    Enum(EnumDescription),
    /// Struct with named members.
    Structural(StructuralDescription),
    /// Composable typed sequence, `Query<T>`.
    Query(Box<TypeRef>),
    /// Composable untyped sequence.
    UntypedQuery,
    /// Materialized typed rows, `Vec<T>`.
    Rows(Box<TypeRef>),
    /// Materialized untyped rows.
    UntypedRows,
    /// Output parameter placeholder whose type comes from an annotation.
    OutputParameter,
    /// The context a method is declared on.
    Context
}

impl TypeRef {
    /// Wrap in `Nullable` unless already nullable.
    #[must_use]
    pub fn nullable(self) -> Self {
        match self {
            Self::Nullable(_) => self,
            other => Self::Nullable(Box::new(other))
        }
    }

    /// Remove nullable wrapping, reporting whether there was any.
    pub fn strip_nullable(&self) -> (&TypeRef, bool) {
        match self {
            Self::Nullable(inner) => (inner.strip_nullable().0, true),
            other => (other, false)
        }
    }

    /// Whether the type is `Nullable`.
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => write!(f, "{kind}"),
            Self::Nullable(inner) => write!(f, "Option<{inner}>"),
            Self::Enum(desc) => f.write_str(&desc.name),
            Self::Structural(desc) => f.write_str(&desc.name),
            Self::Query(inner) => write!(f, "Query<{inner}>"),
            Self::UntypedQuery => f.write_str("UntypedQuery"),
            Self::Rows(inner) => write!(f, "Vec<{inner}>"),
            Self::UntypedRows => f.write_str("UntypedRows"),
            Self::OutputParameter => f.write_str("OutputParameter"),
            Self::Context => f.write_str("Self")
        }
    }
}

/// Types that can appear in a store function signature.
///
/// Implemented here for primitives, `Option<T>`, `Vec<T>`, references and the
/// sequence markers; `#[derive(StoreType)]` implements it for structs and
/// field-less enums.
pub trait DescribeType {
    /// Describe the type.
    fn describe() -> TypeRef;
}

macro_rules! describe_primitive {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl DescribeType for $ty {
                fn describe() -> TypeRef {
                    TypeRef::Primitive(PrimitiveKind::$kind)
                }
            }
        )*
    };
}

describe_primitive! {
    bool => Boolean,
    u8 => Byte,
    i8 => SByte,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Single,
    f64 => Double,
    String => String,
    str => String,
    Decimal => Decimal,
    Uuid => Guid,
    NaiveDateTime => DateTime,
    NaiveTime => Time
}

impl<Tz: TimeZone> DescribeType for DateTime<Tz> {
    fn describe() -> TypeRef {
        TypeRef::Primitive(PrimitiveKind::DateTimeOffset)
    }
}

impl<T: DescribeType> DescribeType for Option<T> {
    fn describe() -> TypeRef {
        T::describe().nullable()
    }
}

impl<T: DescribeType> DescribeType for Vec<T> {
    fn describe() -> TypeRef {
        match T::describe() {
            TypeRef::Primitive(PrimitiveKind::Byte) => TypeRef::Primitive(PrimitiveKind::Binary),
            item => TypeRef::Rows(Box::new(item))
        }
    }
}

impl<T: DescribeType + ?Sized> DescribeType for &T {
    fn describe() -> TypeRef {
        T::describe()
    }
}

impl<T: DescribeType + ?Sized> DescribeType for &mut T {
    fn describe() -> TypeRef {
        T::describe()
    }
}

/// Composable, typed row sequence returned by a table-valued function.
///
/// Functions returning `Query<T>` can be used inside larger queries.
pub struct Query<T>(PhantomData<fn() -> T>);

impl<T> Query<T> {
    /// Create the marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Query")
    }
}

impl<T: DescribeType> DescribeType for Query<T> {
    fn describe() -> TypeRef {
        TypeRef::Query(Box::new(T::describe()))
    }
}

/// Composable row sequence whose item type is given by `#[result(ty = ...)]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UntypedQuery;

impl DescribeType for UntypedQuery {
    fn describe() -> TypeRef {
        TypeRef::UntypedQuery
    }
}

/// Materialized rows whose shapes are given by `#[result(ty = ...)]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UntypedRows;

impl DescribeType for UntypedRows {
    fn describe() -> TypeRef {
        TypeRef::UntypedRows
    }
}

/// Output parameter placeholder; its type comes from `#[parameter(ty = ...)]`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputParameter {
    /// Parameter name as sent to the database.
    pub name: String
}

impl OutputParameter {
    /// Create a placeholder for the named parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into()
        }
    }
}

impl DescribeType for OutputParameter {
    fn describe() -> TypeRef {
        TypeRef::OutputParameter
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn primitives() {
        assert_eq!(i32::describe(), TypeRef::Primitive(PrimitiveKind::Int32));
        assert_eq!(
            <&str>::describe(),
            TypeRef::Primitive(PrimitiveKind::String)
        );
        assert_eq!(
            DateTime::<Utc>::describe(),
            TypeRef::Primitive(PrimitiveKind::DateTimeOffset)
        );
        assert_eq!(
            DateTime::<FixedOffset>::describe(),
            TypeRef::Primitive(PrimitiveKind::DateTimeOffset)
        );
    }

    #[test]
    fn byte_vectors_are_binary() {
        assert_eq!(
            Vec::<u8>::describe(),
            TypeRef::Primitive(PrimitiveKind::Binary)
        );
        assert_eq!(
            Vec::<i32>::describe(),
            TypeRef::Rows(Box::new(TypeRef::Primitive(PrimitiveKind::Int32)))
        );
    }

    #[test]
    fn nested_options_collapse() {
        let ty = Option::<Option<i64>>::describe();
        assert_eq!(
            ty,
            TypeRef::Nullable(Box::new(TypeRef::Primitive(PrimitiveKind::Int64)))
        );
        let (inner, nullable) = ty.strip_nullable();
        assert!(nullable);
        assert_eq!(inner, &TypeRef::Primitive(PrimitiveKind::Int64));
    }

    #[test]
    fn references_describe_the_referent() {
        assert_eq!(<&mut i16>::describe(), i16::describe());
        assert_eq!(<&OutputParameter>::describe(), TypeRef::OutputParameter);
    }

    #[test]
    fn display() {
        assert_eq!(Query::<Option<i32>>::describe().to_string(), "Query<Option<Int32>>");
        assert_eq!(Vec::<String>::describe().to_string(), "Vec<String>");
    }

    #[test]
    fn kind_facets() {
        assert!(PrimitiveKind::String.has_length());
        assert!(PrimitiveKind::Binary.has_length());
        assert!(!PrimitiveKind::Int32.has_length());
        assert!(PrimitiveKind::Decimal.has_scale());
        assert!(PrimitiveKind::Time.is_temporal());
        assert!(PrimitiveKind::Byte.is_integral());
        assert!(!PrimitiveKind::Double.is_integral());
    }

    #[test]
    fn member_column_name_prefers_annotation() {
        let member = MemberDescription::new("total", i32::describe());
        assert_eq!(member.column_name(), "total");
        let member = member.with_column("Total");
        assert_eq!(member.column_name(), "Total");
    }
}
