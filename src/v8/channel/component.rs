//! Interactive message components.
//!
//! Components are sent as a tree: top-level [`ActionRow`]s hold buttons,
//! select menus, or text inputs. Each node carries an integer `type` that
//! selects its shape; [`Component`] reads it and falls back to
//! [`Component::Unknown`] for types the library does not know.
//!
//! <https://discord.com/developers/docs/interactions/message-components>

use crate::{
    util::{integer_enum, integer_tag, is_false, serialize_tagged, ValueExt},
    v8::emoji::Emoji,
};
use serde::{
    de::{Deserializer, Error as DeError},
    ser::Serializer,
    Deserialize, Serialize,
};
use serde_json::Value;
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub enum Component {
    ActionRow(ActionRow),
    Button(Button),
    SelectMenu(SelectMenu),
    TextInput(TextInput),
    /// Component of a type unknown to the library, kept as received.
    Unknown(Value),
}

impl Component {
    /// Type of the component.
    ///
    /// An unknown component whose `type` doesn't fit in a `u8` reports
    /// `ComponentType::Unknown(u8::MAX)`.
    pub fn kind(&self) -> ComponentType {
        match self {
            Self::ActionRow(_) => ComponentType::ActionRow,
            Self::Button(_) => ComponentType::Button,
            Self::SelectMenu(_) => ComponentType::SelectMenu,
            Self::TextInput(_) => ComponentType::TextInput,
            Self::Unknown(value) => value
                .get("type")
                .and_then(Value::as_u64)
                .and_then(|kind| u8::try_from(kind).ok())
                .map_or(ComponentType::Unknown(u8::MAX), ComponentType::from),
        }
    }
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = integer_tag::<D::Error>(&value, "type")?;

        let component = match u8::try_from(kind).map(ComponentType::from) {
            Ok(ComponentType::ActionRow) => Self::ActionRow(value.deserialize_into().map_err(DeError::custom)?),
            Ok(ComponentType::Button) => Self::Button(value.deserialize_into().map_err(DeError::custom)?),
            Ok(ComponentType::SelectMenu) => {
                Self::SelectMenu(value.deserialize_into().map_err(DeError::custom)?)
            }
            Ok(ComponentType::TextInput) => {
                Self::TextInput(value.deserialize_into().map_err(DeError::custom)?)
            }
            Ok(ComponentType::Unknown(_)) | Err(_) => {
                debug!(kind, "unknown component type");

                Self::Unknown(value)
            }
        };

        Ok(component)
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag = u64::from(u8::from(self.kind()));

        match self {
            Self::ActionRow(row) => serialize_tagged(serializer, "type", tag, row),
            Self::Button(button) => serialize_tagged(serializer, "type", tag, button),
            Self::SelectMenu(menu) => serialize_tagged(serializer, "type", tag, menu),
            Self::TextInput(input) => serialize_tagged(serializer, "type", tag, input),
            Self::Unknown(value) => value.serialize(serializer),
        }
    }
}

impl From<ActionRow> for Component {
    fn from(row: ActionRow) -> Self {
        Self::ActionRow(row)
    }
}

impl From<Button> for Component {
    fn from(button: Button) -> Self {
        Self::Button(button)
    }
}

impl From<SelectMenu> for Component {
    fn from(menu: SelectMenu) -> Self {
        Self::SelectMenu(menu)
    }
}

impl From<TextInput> for Component {
    fn from(input: TextInput) -> Self {
        Self::TextInput(input)
    }
}

integer_enum! {
    /// <https://discord.com/developers/docs/interactions/message-components#component-object-component-types>
    pub enum ComponentType {
        ActionRow = 1,
        Button = 2,
        SelectMenu = 3,
        TextInput = 4,
    }
}

/// Container for other components.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ActionRow {
    pub components: Vec<Component>,
}

/// Clickable button.
///
/// Link buttons carry a `url` and no `custom_id`; every other style carries a
/// `custom_id` and no `url`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Button {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<Emoji>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub style: ButtonStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

integer_enum! {
    /// <https://discord.com/developers/docs/interactions/message-components#button-object-button-styles>
    pub enum ButtonStyle {
        /// Blurple.
        Primary = 1,
        /// Grey.
        Secondary = 2,
        /// Green.
        Success = 3,
        /// Red.
        Danger = 4,
        /// Grey, navigates to a URL.
        Link = 5,
    }
}

/// Dropdown of string options.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SelectMenu {
    pub custom_id: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
    /// Maximum number of options that may be chosen, at most 25.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_values: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_values: Option<u8>,
    pub options: Vec<SelectMenuOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SelectMenuOption {
    /// Whether the option is selected by default.
    #[serde(default, skip_serializing_if = "is_false")]
    pub default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<Emoji>,
    pub label: String,
    /// Developer defined value sent back in the interaction.
    pub value: String,
}

/// Text field shown in a modal.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TextInput {
    pub custom_id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    pub style: TextInputStyle,
    /// Pre-filled value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

integer_enum! {
    pub enum TextInputStyle {
        /// Single line.
        Short = 1,
        /// Multiple lines.
        Paragraph = 2,
    }
}

/// Build an action row wrapping other components.
pub fn action_row(components: Vec<Component>) -> Component {
    Component::ActionRow(ActionRow { components })
}

/// Build a button that sends `custom_id` back when clicked.
///
/// Use [`link_button`] for [`ButtonStyle::Link`].
pub fn button(style: ButtonStyle, label: impl Into<String>, custom_id: impl Into<String>) -> Component {
    Component::Button(Button {
        custom_id: Some(custom_id.into()),
        disabled: false,
        emoji: None,
        label: Some(label.into()),
        style,
        url: None,
    })
}

/// Build a button that navigates to `url`.
pub fn link_button(label: impl Into<String>, url: impl Into<String>) -> Component {
    Component::Button(Button {
        custom_id: None,
        disabled: false,
        emoji: None,
        label: Some(label.into()),
        style: ButtonStyle::Link,
        url: Some(url.into()),
    })
}

/// Build a single-choice select menu.
pub fn select_menu(
    custom_id: impl Into<String>,
    placeholder: impl Into<String>,
    options: Vec<SelectMenuOption>,
) -> Component {
    Component::SelectMenu(SelectMenu {
        custom_id: custom_id.into(),
        disabled: false,
        max_values: Some(1),
        min_values: Some(1),
        options,
        placeholder: Some(placeholder.into()),
    })
}

/// Build a text input for use inside a modal.
pub fn text_input(
    custom_id: impl Into<String>,
    label: impl Into<String>,
    style: TextInputStyle,
    required: bool,
) -> Component {
    Component::TextInput(TextInput {
        custom_id: custom_id.into(),
        label: label.into(),
        max_length: None,
        min_length: None,
        placeholder: None,
        required: Some(required),
        style,
        value: None,
    })
}

#[cfg(test)]
mod tests {
    use super::{
        action_row, button, link_button, select_menu, text_input, ButtonStyle, Component,
        ComponentType, SelectMenuOption, TextInputStyle,
    };
    use serde_json::json;
    use serde_test::Token;

    #[test]
    fn action_row_of_buttons() {
        let row = action_row(vec![
            button(ButtonStyle::Success, "OK", "btn_ok"),
            link_button("Visit", "https://example.com"),
        ]);
        let value = json!({
            "type": 1,
            "components": [
                {"type": 2, "style": 3, "label": "OK", "custom_id": "btn_ok"},
                {"type": 2, "style": 5, "label": "Visit", "url": "https://example.com"},
            ],
        });

        assert_eq!(serde_json::to_value(&row).unwrap(), value);
        assert_eq!(serde_json::from_value::<Component>(value).unwrap(), row);
    }

    #[test]
    fn select_menu_round_trip() {
        let menu = select_menu(
            "class",
            "Choose a class",
            vec![SelectMenuOption {
                default: false,
                description: Some("Sneak n stab".to_owned()),
                emoji: None,
                label: "Rogue".to_owned(),
                value: "rogue".to_owned(),
            }],
        );
        let value = serde_json::to_value(&menu).unwrap();

        assert_eq!(value["type"], 3);
        assert_eq!(value["options"][0]["value"], "rogue");
        assert_eq!(serde_json::from_value::<Component>(value).unwrap(), menu);
    }

    #[test]
    fn text_input_component() {
        let input = text_input("reason", "Reason", TextInputStyle::Paragraph, true);
        assert_eq!(input.kind(), ComponentType::TextInput);
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "type": 4,
                "custom_id": "reason",
                "label": "Reason",
                "style": 2,
                "required": true,
            })
        );
    }

    #[test]
    fn unknown_component_is_kept() {
        let value = json!({"type": 8, "custom_id": "channels", "channel_types": [0]});
        let component: Component = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(component.kind(), ComponentType::Unknown(8));
        assert_eq!(serde_json::to_value(&component).unwrap(), value);

        let value = json!({"type": 256});
        let component: Component = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(component.kind(), ComponentType::Unknown(u8::MAX));
        assert_eq!(serde_json::to_value(&component).unwrap(), value);
    }

    #[test]
    fn missing_type_is_an_error() {
        assert!(serde_json::from_value::<Component>(json!({"custom_id": "x"})).is_err());
    }

    #[test]
    fn component_type_tokens() {
        serde_test::assert_tokens(&ComponentType::SelectMenu, &[Token::U8(3)]);
        serde_test::assert_tokens(&ButtonStyle::Unknown(7), &[Token::U8(7)]);
    }
}
