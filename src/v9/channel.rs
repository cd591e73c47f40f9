//! Channels as of v9, which adds threads.

pub use crate::v8::channel::{
    component, embed, message, ActionRow, Attachment, Button, ButtonStyle, Component,
    ComponentType, Embed, EmbedBuilder, Message, MessageFlags, MessageInteraction, MessageType,
    Overwrite, OverwriteType, SelectMenu, SelectMenuOption, TextInput, TextInputStyle,
};

use crate::{
    id::{
        marker::{ChannelMarker, UserMarker},
        Id,
    },
    util::{integer_enum, Timestamp},
    v8::channel::with_v8_channel_types,
};
use serde::{Deserialize, Serialize};

with_v8_channel_types!(integer_enum {
    /// <https://discord.com/developers/docs/resources/channel#channel-object-channel-types>
    pub enum ChannelType
} {
    GuildNewsThread = 10,
    GuildPublicThread = 11,
    GuildPrivateThread = 12,
});

impl ChannelType {
    /// Whether the channel type is one of the thread types.
    pub const fn is_thread(self) -> bool {
        matches!(
            self,
            Self::GuildNewsThread | Self::GuildPublicThread | Self::GuildPrivateThread
        )
    }
}

/// Shapes shared with v8 carry the v8 table; reading them through this one
/// recovers the thread types.
impl From<crate::v8::channel::ChannelType> for ChannelType {
    fn from(kind: crate::v8::channel::ChannelType) -> Self {
        Self::from(u8::from(kind))
    }
}

/// Thread specific fields of a thread channel.
///
/// <https://discord.com/developers/docs/resources/channel#thread-metadata-object>
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ThreadMetadata {
    /// When the archive status last changed.
    pub archive_timestamp: Timestamp,
    pub archived: bool,
    /// Inactivity after which the thread is archived.
    pub auto_archive_duration: AutoArchiveDuration,
    /// Only present for threads created after 2022-01-09.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_timestamp: Option<Timestamp>,
    /// Whether non-moderators can add other non-moderators. Private threads
    /// only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitable: Option<bool>,
    /// Whether only moderators can unarchive the thread.
    #[serde(default)]
    pub locked: bool,
}

/// Membership of a user in a thread.
///
/// `id` and `user_id` are omitted in `GUILD_CREATE` thread member lists.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ThreadMember {
    /// Notification settings; not otherwise documented.
    pub flags: u64,
    /// Thread ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id<ChannelMarker>>,
    pub join_timestamp: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Id<UserMarker>>,
}

integer_enum! {
    /// Minutes of inactivity after which a thread is archived.
    pub enum AutoArchiveDuration: u16 {
        Hour = 60,
        Day = 1440,
        ThreeDays = 4320,
        Week = 10080,
    }
}

impl AutoArchiveDuration {
    pub fn minutes(self) -> u16 {
        self.into()
    }
}
