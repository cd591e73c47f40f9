//! Fields whose value is fixed by the API.
//!
//! Discord documents a few fields as read-only constants, such as the
//! interaction `version`, which is always `1`. Modelling them as
//! [`MustBeU64`] keeps the constant in the type and rejects payloads that
//! carry anything else.

use serde::{
    de::{Deserialize, Deserializer, Error as DeError, Unexpected, Visitor},
    ser::{Serialize, Serializer},
};
use std::fmt::{Formatter, Result as FmtResult};

/// An integer field that must always be `T`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct MustBeU64<const T: u64>;

impl<const T: u64> MustBeU64<T> {
    /// The only value the field may take.
    pub const VALUE: u64 = T;

    /// Return the fixed value.
    pub const fn get(self) -> u64 {
        T
    }
}

impl<'de, const T: u64> Deserialize<'de> for MustBeU64<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MustBeU64Visitor<const T: u64>;

        impl<const T: u64> Visitor<'_> for MustBeU64Visitor<T> {
            type Value = MustBeU64<T>;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, "the integer {T}")
            }

            fn visit_u64<E: DeError>(self, value: u64) -> Result<Self::Value, E> {
                if value == T {
                    Ok(MustBeU64)
                } else {
                    Err(DeError::invalid_value(Unexpected::Unsigned(value), &self))
                }
            }

            fn visit_i64<E: DeError>(self, value: i64) -> Result<Self::Value, E> {
                match u64::try_from(value) {
                    Ok(unsigned) => self.visit_u64(unsigned),
                    Err(_) => Err(DeError::invalid_value(Unexpected::Signed(value), &self)),
                }
            }
        }

        deserializer.deserialize_u64(MustBeU64Visitor::<T>)
    }
}

impl<const T: u64> Serialize for MustBeU64<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(T)
    }
}
