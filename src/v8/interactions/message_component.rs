//! Data of message component interactions.
//!
//! The data carries its own `component_type`, which decides whether the
//! interaction came from a button or a select menu. Only select menus send
//! back the chosen values.

use crate::{
    util::{integer_tag, serialize_tagged, ValueExt},
    v8::channel::component::ComponentType,
};
use serde::{
    de::{Deserializer, Error as DeError},
    ser::Serializer,
    Deserialize, Serialize,
};
use serde_json::Value;
use tracing::debug;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MessageComponentInteractionData {
    Button(ButtonInteractionData),
    SelectMenu(SelectMenuInteractionData),
    /// Data of a component type unknown to the library, kept as received.
    Unknown(Value),
}

impl MessageComponentInteractionData {
    /// Type of the component that was used.
    ///
    /// Unknown data whose `component_type` doesn't fit in a `u8` reports
    /// `ComponentType::Unknown(u8::MAX)`.
    pub fn component_type(&self) -> ComponentType {
        match self {
            Self::Button(_) => ComponentType::Button,
            Self::SelectMenu(_) => ComponentType::SelectMenu,
            Self::Unknown(value) => value
                .get("component_type")
                .and_then(Value::as_u64)
                .and_then(|kind| u8::try_from(kind).ok())
                .map_or(ComponentType::Unknown(u8::MAX), ComponentType::from),
        }
    }

    /// Developer defined ID of the component that was used.
    pub fn custom_id(&self) -> Option<&str> {
        match self {
            Self::Button(data) => Some(&data.custom_id),
            Self::SelectMenu(data) => Some(&data.custom_id),
            Self::Unknown(value) => value.get("custom_id").and_then(Value::as_str),
        }
    }
}

impl<'de> Deserialize<'de> for MessageComponentInteractionData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = integer_tag::<D::Error>(&value, "component_type")?;

        let data = match u8::try_from(kind).map(ComponentType::from) {
            Ok(ComponentType::Button) => Self::Button(value.deserialize_into().map_err(DeError::custom)?),
            Ok(ComponentType::SelectMenu) => {
                Self::SelectMenu(value.deserialize_into().map_err(DeError::custom)?)
            }
            Ok(_) | Err(_) => {
                debug!(kind, "unknown message component interaction type");

                Self::Unknown(value)
            }
        };

        Ok(data)
    }
}

impl Serialize for MessageComponentInteractionData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag = u64::from(u8::from(self.component_type()));

        match self {
            Self::Button(data) => serialize_tagged(serializer, "component_type", tag, data),
            Self::SelectMenu(data) => serialize_tagged(serializer, "component_type", tag, data),
            Self::Unknown(value) => value.serialize(serializer),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ButtonInteractionData {
    pub custom_id: String,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SelectMenuInteractionData {
    pub custom_id: String,
    /// Values of the chosen options.
    pub values: Vec<String>,
}
