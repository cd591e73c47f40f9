//! Utilities for parsing and representing data from Discord's API.

pub mod datetime;
pub mod mustbe;

pub use self::{datetime::Timestamp, mustbe::MustBeU64};

#[cfg(feature = "v8")]
use serde::{de::Error as DeError, ser::Error as SerError, Serialize, Serializer};
#[cfg(feature = "v8")]
use serde_json::Value;

/// Implement serde for a `bitflags` set carried on the wire as an integer.
///
/// Unknown bits are retained so that a payload from a newer API revision
/// serializes back unchanged.
#[cfg(feature = "v8")]
macro_rules! bitflags_serde_as_integer {
    ($name:ident: $repr:ty) => {
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <$repr as serde::Deserialize>::deserialize(deserializer).map(Self::from_bits_retain)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.bits(), serializer)
            }
        }
    };
}

#[cfg(feature = "v8")]
pub(crate) use bitflags_serde_as_integer;

/// Declare an integer wire enumeration with an `Unknown` fallback and the
/// conversions serde goes through.
///
/// The representation defaults to `u8`; write `enum Name: u16 { .. }` for
/// wider tables.
#[cfg(feature = "v8")]
macro_rules! integer_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ty {
            $($(#[$variant_meta:meta])* $variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant,)+
            /// Variant value is unknown to the library.
            Unknown($repr),
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    unknown => Self::Unknown(unknown),
                }
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => $value,)+
                    $name::Unknown(unknown) => unknown,
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <$repr as serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&<$repr>::from(*self), serializer)
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($body:tt)* }
    ) => {
        $crate::util::integer_enum! {
            $(#[$meta])*
            $vis enum $name: u8 { $($body)* }
        }
    };
}

#[cfg(feature = "v8")]
pub(crate) use integer_enum;

#[cfg(feature = "v8")]
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_false(value: &bool) -> bool {
    !value
}

/// Extension trait on [`serde_json::Value`] that provides
/// `.deserialize_into::<T>()`.
///
/// Tagged unions are deserialized in two steps: the payload is buffered as a
/// [`Value`], the tag is read, and the buffer is then deserialized into the
/// variant the tag selects.
#[cfg(feature = "v8")]
pub(crate) trait ValueExt: Sized {
    /// Consume this value and attempt to deserialize it into `T`.
    fn deserialize_into<T: serde::de::DeserializeOwned>(self) -> Result<T, serde_json::Error>;
}

#[cfg(feature = "v8")]
impl ValueExt for Value {
    fn deserialize_into<T: serde::de::DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self)
    }
}

/// Read an integer tag out of a buffered object.
#[cfg(feature = "v8")]
pub(crate) fn integer_tag<E: DeError>(value: &Value, tag: &'static str) -> Result<u64, E> {
    match value.get(tag) {
        Some(raw) => raw
            .as_u64()
            .ok_or_else(|| DeError::custom(format!("`{tag}` must be an unsigned integer"))),
        None => Err(DeError::missing_field(tag)),
    }
}

/// Read a string tag out of a buffered object.
#[cfg(feature = "v8")]
pub(crate) fn string_tag<'a, E: DeError>(value: &'a Value, tag: &'static str) -> Result<&'a str, E> {
    match value.get(tag) {
        Some(raw) => raw
            .as_str()
            .ok_or_else(|| DeError::custom(format!("`{tag}` must be a string"))),
        None => Err(DeError::missing_field(tag)),
    }
}

/// Serialize `payload` as an object with an additional integer `tag` key.
///
/// `payload` must serialize to a JSON object.
#[cfg(feature = "v8")]
pub(crate) fn serialize_tagged<S: Serializer, T: Serialize>(
    serializer: S,
    tag: &'static str,
    tag_value: u64,
    payload: &T,
) -> Result<S::Ok, S::Error> {
    let mut object = match serde_json::to_value(payload).map_err(SerError::custom)? {
        Value::Object(object) => object,
        _ => return Err(SerError::custom("tagged payload must serialize to an object")),
    };
    object.insert(tag.to_owned(), Value::from(tag_value));

    object.serialize(serializer)
}

#[cfg(all(test, feature = "v8"))]
mod tests {
    use super::{integer_enum, integer_tag, serialize_tagged, string_tag, ValueExt};
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};

    #[derive(Debug, Deserialize, PartialEq, Serialize)]
    struct Payload {
        custom_id: String,
    }

    integer_enum! {
        enum Interval: u16 {
            Hour = 60,
            Day = 1440,
        }
    }

    #[test]
    fn wide_integer_enum() {
        serde_test::assert_tokens(&Interval::Day, &[serde_test::Token::U16(1440)]);
        serde_test::assert_tokens(&Interval::Unknown(300), &[serde_test::Token::U16(300)]);
        assert_eq!(u16::from(Interval::Hour), 60);
        assert_eq!(Interval::from(61), Interval::Unknown(61));
    }

    #[test]
    fn tagged_round_trip() {
        let payload = Payload {
            custom_id: "click".to_owned(),
        };
        let value = serialize_tagged(serde_json::value::Serializer, "type", 2, &payload).unwrap();
        assert_eq!(value, json!({"type": 2, "custom_id": "click"}));

        assert_eq!(integer_tag::<serde_json::Error>(&value, "type").unwrap(), 2);
        let parsed: Payload = value.deserialize_into().unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn tagged_rejects_non_objects() {
        assert!(serialize_tagged(serde_json::value::Serializer, "type", 1, &5_u8).is_err());
    }

    #[test]
    fn missing_and_mistyped_tags() {
        let value = json!({"key": 3});
        assert!(integer_tag::<serde_json::Error>(&value, "type").is_err());
        assert!(string_tag::<serde_json::Error>(&value, "key").is_err());
        assert!(integer_tag::<serde_json::Error>(&Value::Null, "key").is_err());
    }
}
