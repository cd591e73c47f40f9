//! Responses sent back to Discord for an interaction.
//!
//! <https://discord.com/developers/docs/interactions/receiving-and-responding#responding-to-an-interaction>

use crate::v8::channel::{component::Component, embed::Embed, message::MessageFlags};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Initial response to an interaction.
///
/// Must be sent within three seconds of receiving the interaction; deferred
/// responses extend that for follow-ups sent with the interaction's token.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: InteractionResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionResponseData>,
}

impl InteractionResponse {
    /// Acknowledge a [`Ping`](super::Interaction::Ping).
    pub const fn pong() -> Self {
        Self {
            kind: InteractionResponseType::Pong,
            data: None,
        }
    }

    /// Respond with a message.
    pub const fn message(data: InteractionResponseData) -> Self {
        Self {
            kind: InteractionResponseType::ChannelMessageWithSource,
            data: Some(data),
        }
    }

    /// Acknowledge now and send the message later; the user sees a loading
    /// state.
    pub const fn deferred() -> Self {
        Self {
            kind: InteractionResponseType::DeferredChannelMessageWithSource,
            data: None,
        }
    }

    /// Edit the message a component was attached to.
    pub const fn update(data: InteractionResponseData) -> Self {
        Self {
            kind: InteractionResponseType::UpdateMessage,
            data: Some(data),
        }
    }

    /// Suggest choices for the focused option of an autocomplete
    /// interaction.
    pub fn autocomplete(choices: Vec<CommandOptionChoice>) -> Self {
        Self {
            kind: InteractionResponseType::ApplicationCommandAutocompleteResult,
            data: Some(InteractionResponseData {
                choices: Some(choices),
                ..InteractionResponseData::default()
            }),
        }
    }

    /// Show a modal made of action rows of text inputs.
    pub fn modal(
        custom_id: impl Into<String>,
        title: impl Into<String>,
        components: Vec<Component>,
    ) -> Self {
        Self {
            kind: InteractionResponseType::Modal,
            data: Some(InteractionResponseData {
                components: Some(components),
                custom_id: Some(custom_id.into()),
                title: Some(title.into()),
                ..InteractionResponseData::default()
            }),
        }
    }
}

/// Outbound only, so values are never unknown.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum InteractionResponseType {
    Pong = 1,
    ChannelMessageWithSource = 4,
    DeferredChannelMessageWithSource = 5,
    /// For components, acknowledge now and edit the original message later.
    DeferredUpdateMessage = 6,
    UpdateMessage = 7,
    ApplicationCommandAutocompleteResult = 8,
    Modal = 9,
}

/// Data of an [`InteractionResponse`].
///
/// Which fields apply depends on the response type: messages use content,
/// embeds, components, and flags; autocomplete uses choices; modals use
/// title, custom ID, and components.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct InteractionResponseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<CommandOptionChoice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
    /// Only [`MessageFlags::EPHEMERAL`] and [`MessageFlags::SUPPRESS_EMBEDS`]
    /// may be set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<MessageFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
}

impl InteractionResponseData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn embed(mut self, embed: Embed) -> Self {
        self.embeds.get_or_insert_with(Vec::new).push(embed);
        self
    }

    pub fn component(mut self, component: Component) -> Self {
        self.components.get_or_insert_with(Vec::new).push(component);
        self
    }

    /// Show the message only to the invoking user.
    pub fn ephemeral(mut self) -> Self {
        self.flags = Some(self.flags.unwrap_or_else(MessageFlags::empty) | MessageFlags::EPHEMERAL);
        self
    }
}

/// Autocomplete suggestion.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CommandOptionChoice {
    pub name: String,
    pub value: CommandOptionChoiceValue,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOptionChoiceValue {
    Integer(i64),
    Number(f64),
    String(String),
}
