//! Channels, their permission overwrites, and what is posted in them.

pub mod component;
pub mod embed;
pub mod message;

pub use self::{
    component::{
        ActionRow, Button, ButtonStyle, Component, ComponentType, SelectMenu, SelectMenuOption,
        TextInput, TextInputStyle,
    },
    embed::{Embed, EmbedBuilder},
    message::{Attachment, Message, MessageFlags, MessageInteraction, MessageType},
};

use crate::{
    id::{marker::GenericMarker, Id},
    util::integer_enum,
    v8::permissions::Permissions,
};
use serde::{Deserialize, Serialize};

/// Invoke `$callback` with the v8 channel type table, followed by `$extra`
/// entries.
macro_rules! with_v8_channel_types {
    ($callback:ident { $($head:tt)* } { $($extra:tt)* }) => {
        $callback! {
            $($head)* {
                GuildText = 0,
                Dm = 1,
                GuildVoice = 2,
                GroupDm = 3,
                GuildCategory = 4,
                GuildNews = 5,
                GuildStore = 6,
                GuildStageVoice = 13,
                $($extra)*
            }
        }
    };
}

#[cfg(feature = "v9")]
pub(crate) use with_v8_channel_types;

with_v8_channel_types!(integer_enum {
    /// <https://discord.com/developers/docs/resources/channel#channel-object-channel-types>
    pub enum ChannelType
} {});

/// Explicit permission grant or denial for a role or member in a channel.
///
/// <https://discord.com/developers/docs/resources/channel#overwrite-object>
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Overwrite {
    pub allow: Permissions,
    pub deny: Permissions,
    /// Role or user ID, depending on `kind`.
    pub id: Id<GenericMarker>,
    #[serde(rename = "type")]
    pub kind: OverwriteType,
}

integer_enum! {
    pub enum OverwriteType {
        Role = 0,
        Member = 1,
    }
}
