//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Surrogate keys are
//! assigned by the database; the API surface carries them as base-10 decimal
//! strings, so every ID implements both `Display` and `FromStr`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a decimal string into a surrogate-key ID.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid id: {0}")]
pub struct ParseIdError(#[from] std::num::ParseIntError);

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around the given integer type with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Ord`, `Hash`
/// - Conversion methods: `new()` and the named accessor
/// - `Display` (base-10 decimal) and `FromStr` implementations
/// - `From` conversions to and from the integer type
/// - `sqlx` `Type`, `Encode`, and `Decode` implementations (with `postgres` feature)
///
/// # Example
///
/// ```rust
/// # use pouch_core::define_id;
/// define_id!(ItemId, i32, as_i32);
/// define_id!(TransactionId, i64, as_i64);
///
/// let item_id = ItemId::new(7);
/// assert_eq!(item_id.to_string(), "7");
/// assert_eq!("7".parse::<ItemId>(), Ok(item_id));
///
/// // These are different types, so this won't compile:
/// // let _: ItemId = TransactionId::new(7);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $int:ty, $accessor:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name($int);

        impl $name {
            /// Create a new ID from a raw integer value.
            #[must_use]
            pub const fn new(id: $int) -> Self {
                Self(id)
            }

            /// Get the underlying integer value.
            #[must_use]
            pub const fn $accessor(&self) -> $int {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::id::ParseIdError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Ok(Self(s.parse::<$int>()?))
            }
        }

        impl From<$int> for $name {
            fn from(id: $int) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $int {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Type<::sqlx::Postgres> for $name {
            fn type_info() -> ::sqlx::postgres::PgTypeInfo {
                <$int as ::sqlx::Type<::sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
                <$int as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
            }
        }

        #[cfg(feature = "postgres")]
        impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for $name {
            fn decode(
                value: ::sqlx::postgres::PgValueRef<'r>,
            ) -> ::core::result::Result<Self, ::sqlx::error::BoxDynError> {
                let id = <$int as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
                Ok(Self(id))
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Encode<'_, ::sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut ::sqlx::postgres::PgArgumentBuffer,
            ) -> ::std::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
                <$int as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }
    };
}

// Define standard entity IDs. Items use a 32-bit key; payment accounts and
// transactions use 64-bit keys, matching the column types in the schema.
define_id!(ItemId, i32, as_i32);
define_id!(PaymentAccountId, i64, as_i64);
define_id!(TransactionId, i64, as_i64);
