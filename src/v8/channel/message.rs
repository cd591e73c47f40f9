use super::{component::Component, embed::Embed};
use crate::{
    id::{
        marker::{
            ApplicationMarker, AttachmentMarker, ChannelMarker, GuildMarker, InteractionMarker,
            MessageMarker, RoleMarker, WebhookMarker,
        },
        Id,
    },
    util::{bitflags_serde_as_integer, integer_enum, Timestamp},
    v8::{interactions::InteractionType, user::User},
};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Message sent in a channel.
///
/// <https://discord.com/developers/docs/resources/channel#message-object>
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Message {
    /// Sent with rich presence chat embeds and interaction responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Id<ApplicationMarker>>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Author of the message.
    ///
    /// For webhook messages this is the webhook's name and avatar, not a real
    /// user.
    pub author: User,
    pub channel_id: Id<ChannelMarker>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    pub content: String,
    pub edited_timestamp: Option<Timestamp>,
    #[serde(default)]
    pub embeds: Vec<Embed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<MessageFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    pub id: Id<MessageMarker>,
    /// Present when the message is a response to an interaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<MessageInteraction>,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub mention_everyone: bool,
    #[serde(default)]
    pub mention_roles: Vec<Id<RoleMarker>>,
    #[serde(default)]
    pub mentions: Vec<User>,
    pub pinned: bool,
    /// Message this one replies to.
    ///
    /// Only sent for [`MessageType::Reply`]. `None` inside the field means
    /// the referenced message was deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referenced_message: Option<Box<Message>>,
    pub timestamp: Timestamp,
    pub tts: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<Id<WebhookMarker>>,
}

integer_enum! {
    /// <https://discord.com/developers/docs/resources/channel#message-object-message-types>
    pub enum MessageType {
        Regular = 0,
        RecipientAdd = 1,
        RecipientRemove = 2,
        Call = 3,
        ChannelNameChange = 4,
        ChannelIconChange = 5,
        ChannelMessagePinned = 6,
        GuildMemberJoin = 7,
        UserPremiumSub = 8,
        UserPremiumSubTier1 = 9,
        UserPremiumSubTier2 = 10,
        UserPremiumSubTier3 = 11,
        ChannelFollowAdd = 12,
        GuildDiscoveryDisqualified = 14,
        GuildDiscoveryRequalified = 15,
        GuildDiscoveryGracePeriodInitialWarning = 16,
        GuildDiscoveryGracePeriodFinalWarning = 17,
        ThreadCreated = 18,
        Reply = 19,
        ChatInputCommand = 20,
        ThreadStarterMessage = 21,
        GuildInviteReminder = 22,
        ContextMenuCommand = 23,
    }
}

bitflags! {
    /// <https://discord.com/developers/docs/resources/channel#message-object-message-flags>
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct MessageFlags: u64 {
        /// Published to the channels following this one.
        const CROSSPOSTED = 1;
        /// Originated from a message in another channel.
        const IS_CROSSPOST = 1 << 1;
        const SUPPRESS_EMBEDS = 1 << 2;
        /// Source message of this crosspost was deleted.
        const SOURCE_MESSAGE_DELETED = 1 << 3;
        /// Came from the urgent message system.
        const URGENT = 1 << 4;
        const HAS_THREAD = 1 << 5;
        /// Only visible to the user who invoked the interaction.
        const EPHEMERAL = 1 << 6;
        /// Interaction response showing "is thinking".
        const LOADING = 1 << 7;
        const FAILED_TO_MENTION_SOME_ROLES_IN_THREAD = 1 << 8;
    }
}

bitflags_serde_as_integer!(MessageFlags: u64);

/// <https://discord.com/developers/docs/resources/channel#attachment-object>
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Attachment {
    /// Media type, such as `image/png`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the attachment is removed after a set period of time.
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub ephemeral: bool,
    pub filename: String,
    /// Height of images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    pub id: Id<AttachmentMarker>,
    pub proxy_url: String,
    /// Size in bytes.
    pub size: u64,
    pub url: String,
    /// Width of images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,
}

/// Sent on a message that is a response to an interaction.
///
/// <https://discord.com/developers/docs/interactions/receiving-and-responding#message-interaction-object>
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MessageInteraction {
    pub id: Id<InteractionMarker>,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// Name of the invoked application command.
    pub name: String,
    /// User who invoked the interaction.
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::{Message, MessageFlags, MessageType};
    use crate::{
        id::Id,
        v8::{channel::component::Component, interactions::InteractionType},
    };
    use serde_json::{json, Value};
    use serde_test::Token;

    fn message_json() -> Value {
        json!({
            "id": "334385199974967042",
            "channel_id": "290926798999357250",
            "author": {
                "id": "53908099506183680",
                "username": "Mason",
                "discriminator": "9999",
                "avatar": null,
            },
            "content": "Supa Hot",
            "timestamp": "2017-07-11T17:27:07.299000+00:00",
            "edited_timestamp": null,
            "tts": false,
            "mention_everyone": false,
            "mentions": [],
            "mention_roles": [],
            "attachments": [],
            "embeds": [],
            "pinned": false,
            "type": 0,
        })
    }

    #[test]
    fn regular_message() {
        let message: Message = serde_json::from_value(message_json()).unwrap();

        assert_eq!(message.id, Id::new(334_385_199_974_967_042));
        assert_eq!(message.kind, MessageType::Regular);
        assert_eq!(message.author.name, "Mason");
        assert!(message.components.is_empty());
        assert_eq!(message.timestamp.as_secs(), 1_499_794_027);
        assert_eq!(serde_json::to_value(&message).unwrap(), message_json());
    }

    #[test]
    fn interaction_response_message() {
        let mut value = message_json();
        value["type"] = json!(20);
        value["flags"] = json!(64);
        value["application_id"] = json!("1");
        value["interaction"] = json!({
            "id": "2",
            "type": 2,
            "name": "ping",
            "user": {"id": "3", "username": "a", "discriminator": "0001", "avatar": null},
        });
        value["components"] = json!([{
            "type": 1,
            "components": [{"type": 2, "style": 1, "custom_id": "again", "label": "Again"}],
        }]);

        let message: Message = serde_json::from_value(value).unwrap();

        assert_eq!(message.kind, MessageType::ChatInputCommand);
        assert_eq!(message.flags, Some(MessageFlags::EPHEMERAL));
        assert_eq!(
            message.interaction.map(|interaction| interaction.kind),
            Some(InteractionType::ApplicationCommand)
        );
        assert!(matches!(message.components[0], Component::ActionRow(_)));
    }

    #[test]
    fn message_type_tokens() {
        serde_test::assert_tokens(&MessageType::Reply, &[Token::U8(19)]);
        serde_test::assert_tokens(&MessageType::Unknown(13), &[Token::U8(13)]);
    }
}
