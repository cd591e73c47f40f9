//! Data of application command and autocomplete interactions.

use crate::{
    id::{
        marker::{
            AttachmentMarker, ChannelMarker, CommandMarker, GenericMarker, GuildMarker,
            MessageMarker, RoleMarker, UserMarker,
        },
        Id,
    },
    util::{integer_enum, is_false, Timestamp, ValueExt},
    v8::{
        channel::{message::Attachment, ChannelType, Message},
        permissions::{Permissions, Role},
        user::User,
    },
};
use serde::{
    de::{DeserializeOwned, Deserializer, Error as DeError},
    ser::{Error as SerError, Serializer},
    Deserialize, Serialize,
};
use serde_json::Value;
use std::collections::HashMap;

/// Invoked command, with the options the user filled in.
///
/// Autocomplete interactions carry the same data with exactly one option
/// marked [`CommandOptionValue::Focused`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CommandData {
    /// Guild the command is registered in, for guild commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    pub id: Id<CommandMarker>,
    #[serde(rename = "type")]
    pub kind: CommandType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandDataOption>,
    /// Users, roles, channels, and messages referenced by the options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<InteractionDataResolved>,
    /// User or message a context menu command was used on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<Id<GenericMarker>>,
}

integer_enum! {
    /// <https://discord.com/developers/docs/interactions/application-commands#application-command-object-application-command-types>
    pub enum CommandType {
        /// Slash command.
        ChatInput = 1,
        /// Context menu command on a user.
        User = 2,
        /// Context menu command on a message.
        Message = 3,
    }
}

integer_enum! {
    /// <https://discord.com/developers/docs/interactions/application-commands#application-command-object-application-command-option-type>
    pub enum CommandOptionType {
        SubCommand = 1,
        SubCommandGroup = 2,
        String = 3,
        /// Any integer between -2^53 and 2^53.
        Integer = 4,
        Boolean = 5,
        User = 6,
        /// Any channel type, including categories.
        Channel = 7,
        Role = 8,
        /// Users and roles.
        Mentionable = 9,
        /// Any double between -2^53 and 2^53.
        Number = 10,
        Attachment = 11,
    }
}

/// Option the user filled in.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandDataOption {
    pub name: String,
    pub value: CommandOptionValue,
}

/// Value of a [`CommandDataOption`], selected by the option's `type`.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOptionValue {
    Attachment(Id<AttachmentMarker>),
    Boolean(bool),
    Channel(Id<ChannelMarker>),
    /// Option the user is typing in an autocomplete interaction, with the
    /// partial input and the option's declared type.
    ///
    /// Partial input is not validated against the type, so it is always
    /// kept as a string.
    Focused(String, CommandOptionType),
    Integer(i64),
    /// User or role.
    Mentionable(Id<GenericMarker>),
    Number(f64),
    Role(Id<RoleMarker>),
    String(String),
    SubCommand(Vec<CommandDataOption>),
    SubCommandGroup(Vec<CommandDataOption>),
    User(Id<UserMarker>),
    /// Option of a type unknown to the library, with its raw value.
    Unknown(u8, Value),
}

impl CommandOptionValue {
    pub const fn kind(&self) -> CommandOptionType {
        match self {
            Self::Attachment(_) => CommandOptionType::Attachment,
            Self::Boolean(_) => CommandOptionType::Boolean,
            Self::Channel(_) => CommandOptionType::Channel,
            Self::Focused(_, kind) => *kind,
            Self::Integer(_) => CommandOptionType::Integer,
            Self::Mentionable(_) => CommandOptionType::Mentionable,
            Self::Number(_) => CommandOptionType::Number,
            Self::Role(_) => CommandOptionType::Role,
            Self::String(_) => CommandOptionType::String,
            Self::SubCommand(_) => CommandOptionType::SubCommand,
            Self::SubCommandGroup(_) => CommandOptionType::SubCommandGroup,
            Self::User(_) => CommandOptionType::User,
            Self::Unknown(kind, _) => CommandOptionType::Unknown(*kind),
        }
    }
}

/// Shape of an option on the wire.
#[derive(Deserialize, Serialize)]
struct RawCommandDataOption {
    #[serde(default, skip_serializing_if = "is_false")]
    focused: bool,
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<CommandDataOption>,
    #[serde(rename = "type")]
    kind: CommandOptionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}

/// Deserialize the `value` of a non-sub-command option.
fn scalar<T: DeserializeOwned, E: DeError>(value: Option<Value>) -> Result<T, E> {
    value
        .ok_or_else(|| E::missing_field("value"))?
        .deserialize_into()
        .map_err(E::custom)
}

impl<'de> Deserialize<'de> for CommandDataOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawCommandDataOption::deserialize(deserializer)?;

        if raw.focused {
            let input = match raw.value {
                Some(Value::String(input)) => input,
                Some(other) => other.to_string(),
                None => String::new(),
            };

            return Ok(Self {
                name: raw.name,
                value: CommandOptionValue::Focused(input, raw.kind),
            });
        }

        let value = match raw.kind {
            CommandOptionType::Attachment => CommandOptionValue::Attachment(scalar(raw.value)?),
            CommandOptionType::Boolean => CommandOptionValue::Boolean(scalar(raw.value)?),
            CommandOptionType::Channel => CommandOptionValue::Channel(scalar(raw.value)?),
            CommandOptionType::Integer => CommandOptionValue::Integer(scalar(raw.value)?),
            CommandOptionType::Mentionable => CommandOptionValue::Mentionable(scalar(raw.value)?),
            CommandOptionType::Number => CommandOptionValue::Number(scalar(raw.value)?),
            CommandOptionType::Role => CommandOptionValue::Role(scalar(raw.value)?),
            CommandOptionType::String => CommandOptionValue::String(scalar(raw.value)?),
            CommandOptionType::SubCommand => CommandOptionValue::SubCommand(raw.options),
            CommandOptionType::SubCommandGroup => CommandOptionValue::SubCommandGroup(raw.options),
            CommandOptionType::User => CommandOptionValue::User(scalar(raw.value)?),
            CommandOptionType::Unknown(kind) => {
                CommandOptionValue::Unknown(kind, raw.value.unwrap_or(Value::Null))
            }
        };

        Ok(Self {
            name: raw.name,
            value,
        })
    }
}

impl Serialize for CommandDataOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        fn to_value<S: Serializer, T: Serialize>(value: &T) -> Result<Option<Value>, S::Error> {
            serde_json::to_value(value).map(Some).map_err(SerError::custom)
        }

        let (focused, options, value) = match &self.value {
            CommandOptionValue::SubCommand(options) | CommandOptionValue::SubCommandGroup(options) => {
                (false, options.clone(), None)
            }
            CommandOptionValue::Focused(input, _) => (true, Vec::new(), to_value::<S, _>(input)?),
            CommandOptionValue::Attachment(id) => (false, Vec::new(), to_value::<S, _>(id)?),
            CommandOptionValue::Boolean(value) => (false, Vec::new(), to_value::<S, _>(value)?),
            CommandOptionValue::Channel(id) => (false, Vec::new(), to_value::<S, _>(id)?),
            CommandOptionValue::Integer(value) => (false, Vec::new(), to_value::<S, _>(value)?),
            CommandOptionValue::Mentionable(id) => (false, Vec::new(), to_value::<S, _>(id)?),
            CommandOptionValue::Number(value) => (false, Vec::new(), to_value::<S, _>(value)?),
            CommandOptionValue::Role(id) => (false, Vec::new(), to_value::<S, _>(id)?),
            CommandOptionValue::String(value) => (false, Vec::new(), to_value::<S, _>(value)?),
            CommandOptionValue::User(id) => (false, Vec::new(), to_value::<S, _>(id)?),
            CommandOptionValue::Unknown(_, value) => (false, Vec::new(), Some(value.clone())),
        };

        RawCommandDataOption {
            focused,
            name: self.name.clone(),
            options,
            kind: self.value.kind(),
            value,
        }
        .serialize(serializer)
    }
}

/// Entities referenced by a command's options, keyed by ID.
///
/// <https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-resolved-data-structure>
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct InteractionDataResolved {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attachments: HashMap<Id<AttachmentMarker>, Attachment>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub channels: HashMap<Id<ChannelMarker>, InteractionChannel>,
    /// Members of the resolved users, without their `user` field.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub members: HashMap<Id<UserMarker>, InteractionMember>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub messages: HashMap<Id<MessageMarker>, Message>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub roles: HashMap<Id<RoleMarker>, Role>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub users: HashMap<Id<UserMarker>, User>,
}

/// Partial channel in [`InteractionDataResolved`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct InteractionChannel {
    pub id: Id<ChannelMarker>,
    #[serde(rename = "type")]
    pub kind: ChannelType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Id<ChannelMarker>>,
    /// Permissions of the invoking member in the channel.
    pub permissions: Permissions,
}

/// Partial member in [`InteractionDataResolved`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct InteractionMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_disabled_until: Option<Timestamp>,
    pub joined_at: Timestamp,
    pub nick: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub pending: bool,
    /// Total permissions of the member in the channel, including overwrites.
    pub permissions: Permissions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_since: Option<Timestamp>,
    pub roles: Vec<Id<RoleMarker>>,
}
