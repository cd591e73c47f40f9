//! Envelope shared by every interaction, and its guild and DM forms.

use super::{
    application_command::CommandData, message_component::MessageComponentInteractionData,
    modal::ModalInteractionData, InteractionType,
};
use crate::{
    id::{
        marker::{ApplicationMarker, ChannelMarker, GuildMarker, InteractionMarker, RoleMarker},
        Id,
    },
    util::{integer_tag, is_false, MustBeU64, Timestamp, ValueExt},
    v8::{channel::Message, guild::Member, permissions::Permissions, user::User},
};
use serde::{
    de::{Deserializer, Error as DeError},
    ser::Serializer,
    Deserialize, Serialize,
};
use serde_json::Value;
use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};
use tracing::debug;

/// Fields common to every interaction that carries data.
///
/// Exactly one of `member` (with `guild_id`) or `user` is present, depending
/// on whether the interaction was invoked in a guild or in a DM. Use
/// [`into_context`] to check that and get a type where the right fields are
/// required.
///
/// [`into_context`]: Self::into_context
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BaseInteraction<D> {
    pub application_id: Id<ApplicationMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Id<ChannelMarker>>,
    pub data: D,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    /// Preferred locale of the guild, if invoked in a guild.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_locale: Option<String>,
    pub id: Id<InteractionMarker>,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// Selected language of the invoking user.
    pub locale: String,
    /// Invoking member, if invoked in a guild.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<InteractionGuildMember>,
    /// Message the component was attached to.
    ///
    /// Only sent for message component interactions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    /// Continuation token for responding to the interaction.
    pub token: String,
    /// Invoking user, if invoked in a DM.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub version: MustBeU64<1>,
}

impl<D> BaseInteraction<D> {
    /// Check where the interaction was invoked.
    ///
    /// # Errors
    ///
    /// Returns an [`InteractionContextErrorType::AmbiguousInvoker`] error
    /// type if both `member` and `user` are present.
    ///
    /// Returns an [`InteractionContextErrorType::MissingInvoker`] error type
    /// if neither `member` nor `user` is present.
    ///
    /// Returns an [`InteractionContextErrorType::MissingGuildId`] error type
    /// if `member` is present without `guild_id`.
    ///
    /// Returns an [`InteractionContextErrorType::UnexpectedGuildId`] error
    /// type if `user` is present alongside `guild_id`.
    pub fn into_context(self) -> Result<InteractionContext<D>, InteractionContextError> {
        let Self {
            application_id,
            channel_id,
            data,
            guild_id,
            guild_locale,
            id,
            kind,
            locale,
            member,
            message,
            token,
            user,
            version,
        } = self;

        match (member, user, guild_id) {
            (Some(_), Some(_), _) => Err(InteractionContextError::new(
                InteractionContextErrorType::AmbiguousInvoker,
            )),
            (None, None, _) => Err(InteractionContextError::new(
                InteractionContextErrorType::MissingInvoker,
            )),
            (Some(_), None, None) => Err(InteractionContextError::new(
                InteractionContextErrorType::MissingGuildId,
            )),
            (None, Some(_), Some(_)) => Err(InteractionContextError::new(
                InteractionContextErrorType::UnexpectedGuildId,
            )),
            (Some(member), None, Some(guild_id)) => Ok(InteractionContext::Guild(GuildInteraction {
                application_id,
                channel_id,
                data,
                guild_id,
                guild_locale,
                id,
                kind,
                locale,
                member,
                message,
                token,
                version,
            })),
            (None, Some(user), None) => Ok(InteractionContext::Dm(DmInteraction {
                application_id,
                channel_id,
                data,
                guild_locale,
                id,
                kind,
                locale,
                message,
                token,
                user,
                version,
            })),
        }
    }

    /// User who invoked the interaction, in either context.
    pub fn author(&self) -> Option<&User> {
        match (&self.member, &self.user) {
            (Some(member), _) => Some(&member.user),
            (None, user) => user.as_ref(),
        }
    }
}

/// Member who invoked an interaction in a guild.
///
/// Unlike [`Member`], the user is always present and the member's total
/// permissions in the channel are included.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct InteractionGuildMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_disabled_until: Option<Timestamp>,
    pub deaf: bool,
    pub joined_at: Timestamp,
    pub mute: bool,
    pub nick: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub pending: bool,
    /// Total permissions of the member in the channel, including overwrites.
    pub permissions: Permissions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_since: Option<Timestamp>,
    pub roles: Vec<Id<RoleMarker>>,
    pub user: User,
}

impl From<InteractionGuildMember> for Member {
    fn from(member: InteractionGuildMember) -> Self {
        Self {
            avatar: member.avatar,
            communication_disabled_until: member.communication_disabled_until,
            deaf: member.deaf,
            joined_at: member.joined_at,
            mute: member.mute,
            nick: member.nick,
            pending: member.pending,
            premium_since: member.premium_since,
            roles: member.roles,
            user: Some(member.user),
        }
    }
}

/// Interaction invoked in a guild.
///
/// Has no top-level `user`; the invoking user is nested in `member`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GuildInteraction<D> {
    pub application_id: Id<ApplicationMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Id<ChannelMarker>>,
    pub data: D,
    pub guild_id: Id<GuildMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_locale: Option<String>,
    pub id: Id<InteractionMarker>,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    pub locale: String,
    pub member: InteractionGuildMember,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    pub token: String,
    pub version: MustBeU64<1>,
}

/// Interaction invoked in a DM.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DmInteraction<D> {
    pub application_id: Id<ApplicationMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Id<ChannelMarker>>,
    pub data: D,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_locale: Option<String>,
    pub id: Id<InteractionMarker>,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    pub token: String,
    pub user: User,
    pub version: MustBeU64<1>,
}

/// Interaction narrowed by where it was invoked.
#[derive(Clone, Debug, PartialEq)]
pub enum InteractionContext<D> {
    Dm(DmInteraction<D>),
    Guild(GuildInteraction<D>),
}

impl<D> InteractionContext<D> {
    /// User who invoked the interaction.
    pub const fn author(&self) -> &User {
        match self {
            Self::Dm(interaction) => &interaction.user,
            Self::Guild(interaction) => &interaction.member.user,
        }
    }

    pub const fn data(&self) -> &D {
        match self {
            Self::Dm(interaction) => &interaction.data,
            Self::Guild(interaction) => &interaction.data,
        }
    }

    pub const fn guild_id(&self) -> Option<Id<GuildMarker>> {
        match self {
            Self::Dm(_) => None,
            Self::Guild(interaction) => Some(interaction.guild_id),
        }
    }
}

impl<D> TryFrom<BaseInteraction<D>> for GuildInteraction<D> {
    type Error = InteractionContextError;

    fn try_from(base: BaseInteraction<D>) -> Result<Self, Self::Error> {
        match base.into_context()? {
            InteractionContext::Guild(interaction) => Ok(interaction),
            InteractionContext::Dm(_) => Err(InteractionContextError::new(
                InteractionContextErrorType::DmInvoked,
            )),
        }
    }
}

impl<D> TryFrom<BaseInteraction<D>> for DmInteraction<D> {
    type Error = InteractionContextError;

    fn try_from(base: BaseInteraction<D>) -> Result<Self, Self::Error> {
        match base.into_context()? {
            InteractionContext::Dm(interaction) => Ok(interaction),
            InteractionContext::Guild(_) => Err(InteractionContextError::new(
                InteractionContextErrorType::GuildInvoked,
            )),
        }
    }
}

impl<'de, D: Deserialize<'de>> Deserialize<'de> for GuildInteraction<D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        BaseInteraction::<D>::deserialize(deserializer)?
            .try_into()
            .map_err(DeError::custom)
    }
}

impl<'de, D: Deserialize<'de>> Deserialize<'de> for DmInteraction<D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        BaseInteraction::<D>::deserialize(deserializer)?
            .try_into()
            .map_err(DeError::custom)
    }
}

impl<D> From<GuildInteraction<D>> for BaseInteraction<D> {
    fn from(interaction: GuildInteraction<D>) -> Self {
        Self {
            application_id: interaction.application_id,
            channel_id: interaction.channel_id,
            data: interaction.data,
            guild_id: Some(interaction.guild_id),
            guild_locale: interaction.guild_locale,
            id: interaction.id,
            kind: interaction.kind,
            locale: interaction.locale,
            member: Some(interaction.member),
            message: interaction.message,
            token: interaction.token,
            user: None,
            version: interaction.version,
        }
    }
}

impl<D> From<DmInteraction<D>> for BaseInteraction<D> {
    fn from(interaction: DmInteraction<D>) -> Self {
        Self {
            application_id: interaction.application_id,
            channel_id: interaction.channel_id,
            data: interaction.data,
            guild_id: None,
            guild_locale: interaction.guild_locale,
            id: interaction.id,
            kind: interaction.kind,
            locale: interaction.locale,
            member: None,
            message: interaction.message,
            token: interaction.token,
            user: Some(interaction.user),
            version: interaction.version,
        }
    }
}

impl<D> From<InteractionContext<D>> for BaseInteraction<D> {
    fn from(context: InteractionContext<D>) -> Self {
        match context {
            InteractionContext::Dm(interaction) => interaction.into(),
            InteractionContext::Guild(interaction) => interaction.into(),
        }
    }
}

/// Interaction could not be narrowed to a guild or DM context.
#[derive(Debug)]
pub struct InteractionContextError {
    kind: InteractionContextErrorType,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl InteractionContextError {
    const fn new(kind: InteractionContextErrorType) -> Self {
        Self { kind, source: None }
    }

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &InteractionContextErrorType {
        &self.kind
    }

    /// Consume the error, returning the source error if there is any.
    #[must_use = "consuming the error and retrieving the source has no effect if left unused"]
    pub fn into_source(self) -> Option<Box<dyn Error + Send + Sync>> {
        self.source
    }

    /// Consume the error, returning the owned error type and the source error.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_parts(
        self,
    ) -> (
        InteractionContextErrorType,
        Option<Box<dyn Error + Send + Sync>>,
    ) {
        (self.kind, self.source)
    }
}

impl Display for InteractionContextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            InteractionContextErrorType::AmbiguousInvoker => {
                f.write_str("interaction has both a member and a user")
            }
            InteractionContextErrorType::DmInvoked => {
                f.write_str("interaction was invoked in a dm, not a guild")
            }
            InteractionContextErrorType::GuildInvoked => {
                f.write_str("interaction was invoked in a guild, not a dm")
            }
            InteractionContextErrorType::MissingGuildId => {
                f.write_str("interaction has a member but no guild id")
            }
            InteractionContextErrorType::MissingInvoker => {
                f.write_str("interaction has neither a member nor a user")
            }
            InteractionContextErrorType::UnexpectedGuildId => {
                f.write_str("interaction has a user and a guild id")
            }
        }
    }
}

impl Error for InteractionContextError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn Error + 'static))
    }
}

/// Type of [`InteractionContextError`] that occurred.
#[derive(Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum InteractionContextErrorType {
    /// Both `member` and `user` are present.
    AmbiguousInvoker,
    /// A guild interaction was expected, but it was invoked in a DM.
    DmInvoked,
    /// A DM interaction was expected, but it was invoked in a guild.
    GuildInvoked,
    /// `member` is present without `guild_id`.
    MissingGuildId,
    /// Neither `member` nor `user` is present.
    MissingInvoker,
    /// `user` is present alongside `guild_id`.
    UnexpectedGuildId,
}

/// Sent by Discord to check that an interactions endpoint is reachable.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PingInteraction {
    pub application_id: Id<ApplicationMarker>,
    pub id: Id<InteractionMarker>,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    pub token: String,
    pub version: MustBeU64<1>,
}

pub type ApplicationCommandInteraction = BaseInteraction<CommandData>;
pub type AutocompleteInteraction = BaseInteraction<CommandData>;
pub type MessageComponentInteraction = BaseInteraction<MessageComponentInteractionData>;
pub type ModalSubmitInteraction = BaseInteraction<ModalInteractionData>;

/// Interaction, selected by its `type`.
///
/// Message component interactions are narrowed a second time by the data's
/// `component_type`, see [`MessageComponentInteractionData`].
///
/// The `type` of the wrapped interaction is not checked against the variant
/// when serializing.
#[derive(Clone, Debug, PartialEq)]
pub enum Interaction {
    Ping(PingInteraction),
    ApplicationCommand(Box<ApplicationCommandInteraction>),
    MessageComponent(Box<MessageComponentInteraction>),
    ApplicationCommandAutocomplete(Box<AutocompleteInteraction>),
    ModalSubmit(Box<ModalSubmitInteraction>),
    /// Interaction of a type unknown to the library, kept as received.
    Unknown(Value),
}

impl Interaction {
    /// Type of the interaction.
    ///
    /// An unknown interaction whose `type` doesn't fit in a `u8` reports
    /// `InteractionType::Unknown(u8::MAX)`; the received value is kept in
    /// the buffered payload.
    pub fn kind(&self) -> InteractionType {
        match self {
            Self::Ping(_) => InteractionType::Ping,
            Self::ApplicationCommand(_) => InteractionType::ApplicationCommand,
            Self::MessageComponent(_) => InteractionType::MessageComponent,
            Self::ApplicationCommandAutocomplete(_) => InteractionType::ApplicationCommandAutocomplete,
            Self::ModalSubmit(_) => InteractionType::ModalSubmit,
            Self::Unknown(value) => value
                .get("type")
                .and_then(Value::as_u64)
                .and_then(|kind| u8::try_from(kind).ok())
                .map_or(InteractionType::Unknown(u8::MAX), InteractionType::from),
        }
    }

    /// Continuation token for responding to the interaction.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Ping(ping) => Some(&ping.token),
            Self::ApplicationCommand(interaction) | Self::ApplicationCommandAutocomplete(interaction) => {
                Some(&interaction.token)
            }
            Self::MessageComponent(interaction) => Some(&interaction.token),
            Self::ModalSubmit(interaction) => Some(&interaction.token),
            Self::Unknown(value) => value.get("token").and_then(Value::as_str),
        }
    }

    /// User who invoked the interaction.
    ///
    /// Pings have no invoker.
    pub fn author(&self) -> Option<&User> {
        match self {
            Self::ApplicationCommand(interaction) | Self::ApplicationCommandAutocomplete(interaction) => {
                interaction.author()
            }
            Self::MessageComponent(interaction) => interaction.author(),
            Self::ModalSubmit(interaction) => interaction.author(),
            Self::Ping(_) | Self::Unknown(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for Interaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = integer_tag::<D::Error>(&value, "type")?;

        let interaction = match u8::try_from(kind).map(InteractionType::from) {
            Ok(InteractionType::Ping) => Self::Ping(value.deserialize_into().map_err(DeError::custom)?),
            Ok(InteractionType::ApplicationCommand) => {
                Self::ApplicationCommand(value.deserialize_into().map_err(DeError::custom)?)
            }
            Ok(InteractionType::MessageComponent) => {
                Self::MessageComponent(value.deserialize_into().map_err(DeError::custom)?)
            }
            Ok(InteractionType::ApplicationCommandAutocomplete) => {
                Self::ApplicationCommandAutocomplete(value.deserialize_into().map_err(DeError::custom)?)
            }
            Ok(InteractionType::ModalSubmit) => {
                Self::ModalSubmit(value.deserialize_into().map_err(DeError::custom)?)
            }
            Ok(InteractionType::Unknown(_)) | Err(_) => {
                debug!(kind, "unknown interaction type");

                Self::Unknown(value)
            }
        };

        Ok(interaction)
    }
}

impl Serialize for Interaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Ping(ping) => ping.serialize(serializer),
            Self::ApplicationCommand(interaction) | Self::ApplicationCommandAutocomplete(interaction) => {
                interaction.serialize(serializer)
            }
            Self::MessageComponent(interaction) => interaction.serialize(serializer),
            Self::ModalSubmit(interaction) => interaction.serialize(serializer),
            Self::Unknown(value) => value.serialize(serializer),
        }
    }
}
