//! Audit logs: administrative actions taken in a guild.
//!
//! Each [`AuditLogEntry`] names an [`AuditLogEvent`] and lists the attributes
//! it changed. Which type a change's old and new values have depends solely on
//! the change's `key`, so [`AuditLogChange`] is a closed table with one variant
//! per key. Keys the library does not know are kept as
//! [`AuditLogChange::Unknown`].
//!
//! Both tables are declared once here and reused by later API versions, which
//! append to them rather than copy them.
//!
//! <https://discord.com/developers/docs/resources/audit-log>

use crate::{
    id::{
        marker::{
            AuditLogEntryMarker, ChannelMarker, GenericMarker, MessageMarker, RoleMarker,
            UserMarker,
        },
        Id,
    },
    v8::{
        guild::GuildIntegration, guild_scheduled_event::GuildScheduledEvent, user::User,
        webhook::Webhook,
    },
};
use serde::{
    ser::{SerializeMap, Serializer},
    Deserialize, Serialize,
};

/// Declare a change-key table as an enum with one variant per key.
///
/// Generates the enum, its `key` accessor, and serde impls that read the
/// `key` field to select the variant.
macro_rules! audit_log_changes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident;
        $($variant:ident($key:literal => $ty:ty),)+
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $name {
            $($variant($crate::v8::audit_log::AuditLogChangeData<$ty>),)+
            /// Change of an attribute unknown to the library.
            Unknown {
                key: String,
                data: $crate::v8::audit_log::AuditLogChangeData<::serde_json::Value>,
            },
        }

        impl $name {
            /// Name of the changed attribute.
            pub fn key(&self) -> &str {
                match self {
                    $(Self::$variant(_) => $key,)+
                    Self::Unknown { key, .. } => key,
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                use ::serde::de::Error as _;
                use $crate::util::ValueExt as _;

                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                let key = $crate::util::string_tag::<D::Error>(&value, "key")?.to_owned();

                let change = match key.as_str() {
                    $($key => Self::$variant(value.deserialize_into().map_err(D::Error::custom)?),)+
                    _ => {
                        ::tracing::debug!(%key, "unknown audit log change key");

                        Self::Unknown {
                            data: value.deserialize_into().map_err(D::Error::custom)?,
                            key,
                        }
                    }
                };

                Ok(change)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $(Self::$variant(data) => $crate::v8::audit_log::serialize_change(serializer, $key, data),)+
                    Self::Unknown { key, data } => {
                        $crate::v8::audit_log::serialize_change(serializer, key, data)
                    }
                }
            }
        }
    };
}

/// Declare an audit log event table as a `u16` enum with an `Unknown`
/// fallback.
macro_rules! audit_log_events {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident;
        $($variant:ident = $value:literal,)+
    ) => {
        $crate::util::integer_enum! {
            $(#[$meta])*
            $vis enum $name: u16 {
                $($variant = $value,)+
            }
        }
    };
}

/// Invoke `$callback` with the v8 change-key table, followed by `$extra`
/// entries.
macro_rules! with_v8_change_keys {
    ($callback:ident { $($head:tt)* } { $($extra:tt)* }) => {
        $callback! {
            $($head)*
            Name("name" => String),
            Description("description" => String),
            IconHash("icon_hash" => String),
            SplashHash("splash_hash" => String),
            DiscoverySplashHash("discovery_splash_hash" => String),
            BannerHash("banner_hash" => String),
            OwnerId("owner_id" => $crate::id::Id<$crate::id::marker::UserMarker>),
            Region("region" => String),
            PreferredLocale("preferred_locale" => String),
            AfkChannelId("afk_channel_id" => $crate::id::Id<$crate::id::marker::ChannelMarker>),
            AfkTimeout("afk_timeout" => u64),
            RulesChannelId("rules_channel_id" => $crate::id::Id<$crate::id::marker::ChannelMarker>),
            PublicUpdatesChannelId("public_updates_channel_id" => $crate::id::Id<$crate::id::marker::ChannelMarker>),
            MfaLevel("mfa_level" => $crate::v8::guild::MfaLevel),
            VerificationLevel("verification_level" => $crate::v8::guild::VerificationLevel),
            ExplicitContentFilter("explicit_content_filter" => $crate::v8::guild::ExplicitContentFilter),
            DefaultMessageNotifications("default_message_notifications" => $crate::v8::guild::DefaultMessageNotificationLevel),
            VanityUrlCode("vanity_url_code" => String),
            RoleAdded("$add" => Vec<$crate::v8::audit_log::AuditLogChangeRole>),
            RoleRemoved("$remove" => Vec<$crate::v8::audit_log::AuditLogChangeRole>),
            PruneDeleteDays("prune_delete_days" => u64),
            WidgetEnabled("widget_enabled" => bool),
            WidgetChannelId("widget_channel_id" => $crate::id::Id<$crate::id::marker::ChannelMarker>),
            SystemChannelId("system_channel_id" => $crate::id::Id<$crate::id::marker::ChannelMarker>),
            Position("position" => i64),
            Topic("topic" => String),
            Bitrate("bitrate" => u64),
            PermissionOverwrites("permission_overwrites" => Vec<$crate::v8::channel::Overwrite>),
            Nsfw("nsfw" => bool),
            ApplicationId("application_id" => $crate::id::Id<$crate::id::marker::ApplicationMarker>),
            RateLimitPerUser("rate_limit_per_user" => u64),
            Permissions("permissions" => $crate::v8::permissions::Permissions),
            Color("color" => u32),
            Hoist("hoist" => bool),
            Mentionable("mentionable" => bool),
            Allow("allow" => $crate::v8::permissions::Permissions),
            Deny("deny" => $crate::v8::permissions::Permissions),
            Code("code" => String),
            ChannelId("channel_id" => $crate::id::Id<$crate::id::marker::ChannelMarker>),
            InviterId("inviter_id" => $crate::id::Id<$crate::id::marker::UserMarker>),
            MaxUses("max_uses" => u64),
            Uses("uses" => u64),
            MaxAge("max_age" => u64),
            Temporary("temporary" => bool),
            Deaf("deaf" => bool),
            Mute("mute" => bool),
            Nick("nick" => String),
            AvatarHash("avatar_hash" => String),
            Id("id" => $crate::id::Id<$crate::id::marker::GenericMarker>),
            Type("type" => $crate::v8::audit_log::AuditLogChangeType),
            EnableEmoticons("enable_emoticons" => bool),
            ExpireBehavior("expire_behavior" => $crate::v8::guild::IntegrationExpireBehavior),
            ExpireGracePeriod("expire_grace_period" => u64),
            UserLimit("user_limit" => u64),
            PrivacyLevel("privacy_level" => $crate::v8::stage_instance::StageInstancePrivacyLevel),
            Tags("tags" => String),
            FormatType("format_type" => $crate::v8::sticker::StickerFormatType),
            Asset("asset" => String),
            Available("available" => bool),
            GuildId("guild_id" => $crate::id::Id<$crate::id::marker::GuildMarker>),
            EntityType("entity_type" => $crate::v8::guild_scheduled_event::EntityType),
            Status("status" => $crate::v8::guild_scheduled_event::Status),
            Location("location" => String),
            CommunicationDisabledUntil("communication_disabled_until" => $crate::util::Timestamp),
            $($extra)*
        }
    };
}

/// Invoke `$callback` with the v8 audit log event table, followed by
/// `$extra` entries.
macro_rules! with_v8_events {
    ($callback:ident { $($head:tt)* } { $($extra:tt)* }) => {
        $callback! {
            $($head)*
            GuildUpdate = 1,
            ChannelCreate = 10,
            ChannelUpdate = 11,
            ChannelDelete = 12,
            ChannelOverwriteCreate = 13,
            ChannelOverwriteUpdate = 14,
            ChannelOverwriteDelete = 15,
            MemberKick = 20,
            MemberPrune = 21,
            MemberBanAdd = 22,
            MemberBanRemove = 23,
            MemberUpdate = 24,
            MemberRoleUpdate = 25,
            MemberMove = 26,
            MemberDisconnect = 27,
            BotAdd = 28,
            RoleCreate = 30,
            RoleUpdate = 31,
            RoleDelete = 32,
            InviteCreate = 40,
            InviteUpdate = 41,
            InviteDelete = 42,
            WebhookCreate = 50,
            WebhookUpdate = 51,
            WebhookDelete = 52,
            EmojiCreate = 60,
            EmojiUpdate = 61,
            EmojiDelete = 62,
            MessageDelete = 72,
            MessageBulkDelete = 73,
            MessagePin = 74,
            MessageUnpin = 75,
            IntegrationCreate = 80,
            IntegrationUpdate = 81,
            IntegrationDelete = 82,
            StageInstanceCreate = 83,
            StageInstanceUpdate = 84,
            StageInstanceDelete = 85,
            StickerCreate = 90,
            StickerUpdate = 91,
            StickerDelete = 92,
            GuildScheduledEventCreate = 100,
            GuildScheduledEventUpdate = 101,
            GuildScheduledEventDelete = 102,
            $($extra)*
        }
    };
}

#[cfg(feature = "v9")]
pub(crate) use {audit_log_changes, audit_log_events, with_v8_change_keys, with_v8_events};

with_v8_change_keys!(audit_log_changes {
    /// Single attribute change recorded in an audit log entry.
    ///
    /// The variant fixes the type of the old and new values, so a change
    /// can't pair a key with a value of another key's type:
    ///
    /// ```compile_fail
    /// use discord_payloads::v8::audit_log::{AuditLogChange, AuditLogChangeData};
    ///
    /// let change = AuditLogChange::Color(AuditLogChangeData {
    ///     new_value: Some("red".to_owned()),
    ///     old_value: None,
    /// });
    /// ```
    pub enum AuditLogChange;
} {});

with_v8_events!(audit_log_events {
    /// Action an audit log entry records.
    ///
    /// <https://discord.com/developers/docs/resources/audit-log#audit-log-entry-object-audit-log-events>
    pub enum AuditLogEvent;
} {});

/// Old and new values of a changed attribute.
///
/// Either side may be absent. A present `old_value` with an absent
/// `new_value` means the attribute was reset or cleared.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AuditLogChangeData<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<T>,
}

impl<T> AuditLogChangeData<T> {
    /// Whether the attribute was reset rather than set to a new value.
    pub const fn is_reset(&self) -> bool {
        self.old_value.is_some() && self.new_value.is_none()
    }
}

pub(crate) fn serialize_change<S: Serializer, T: Serialize>(
    serializer: S,
    key: &str,
    data: &AuditLogChangeData<T>,
) -> Result<S::Ok, S::Error> {
    let len = 1 + usize::from(data.new_value.is_some()) + usize::from(data.old_value.is_some());
    let mut state = serializer.serialize_map(Some(len))?;

    state.serialize_entry("key", key)?;

    if let Some(new_value) = &data.new_value {
        state.serialize_entry("new_value", new_value)?;
    }

    if let Some(old_value) = &data.old_value {
        state.serialize_entry("old_value", old_value)?;
    }

    state.end()
}

/// Role added to or removed from a member, as recorded by the `$add` and
/// `$remove` keys.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AuditLogChangeRole {
    pub id: Id<RoleMarker>,
    pub name: String,
}

/// Value of the `type` key, which is an integer for channels and webhooks
/// and a string for integrations.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AuditLogChangeType {
    Number(u64),
    String(String),
}

/// <https://discord.com/developers/docs/resources/audit-log#audit-log-object>
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AuditLog<Change = AuditLogChange, Event = AuditLogEvent> {
    pub audit_log_entries: Vec<AuditLogEntry<Change, Event>>,
    #[serde(default)]
    pub guild_scheduled_events: Vec<GuildScheduledEvent>,
    pub integrations: Vec<GuildIntegration>,
    /// Users referenced in the entries.
    pub users: Vec<User>,
    pub webhooks: Vec<Webhook>,
}

/// <https://discord.com/developers/docs/resources/audit-log#audit-log-entry-object>
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AuditLogEntry<Change = AuditLogChange, Event = AuditLogEvent> {
    pub action_type: Event,
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<Change>,
    pub id: Id<AuditLogEntryMarker>,
    /// Additional information for certain events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<AuditLogOptions>,
    /// Reason given by the moderator, 0-512 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// ID of the affected entity, such as a webhook, user, or role.
    pub target_id: Option<Id<GenericMarker>>,
    /// User who made the change.
    pub user_id: Option<Id<UserMarker>>,
}

/// Additional information sent with certain [`AuditLogEvent`]s.
///
/// Counts are string-encoded integers on the wire.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AuditLogOptions {
    /// Channel in which messages were deleted or pinned, or a member moved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Id<ChannelMarker>>,
    /// Number of entities targeted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
    /// Days after which inactive members were pruned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_member_days: Option<String>,
    /// Overwritten role or member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id<GenericMarker>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AuditLogOptionsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members_removed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<Id<MessageMarker>>,
    /// Name of the overwritten role. Absent for member overwrites.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

/// Type of an overwritten entity. Sent as a string.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum AuditLogOptionsType {
    Role,
    Member,
    /// Variant value is unknown to the library.
    Unknown(String),
}

impl From<String> for AuditLogOptionsType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "0" => Self::Role,
            "1" => Self::Member,
            _ => Self::Unknown(value),
        }
    }
}

impl From<AuditLogOptionsType> for String {
    fn from(value: AuditLogOptionsType) -> Self {
        match value {
            AuditLogOptionsType::Role => "0".to_owned(),
            AuditLogOptionsType::Member => "1".to_owned(),
            AuditLogOptionsType::Unknown(unknown) => unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AuditLog, AuditLogChange, AuditLogChangeData, AuditLogChangeRole, AuditLogChangeType,
        AuditLogEntry, AuditLogEvent, AuditLogOptionsType,
    };
    use crate::{
        id::Id,
        v8::{guild::MfaLevel, permissions::Permissions},
    };
    use serde_json::json;
    use serde_test::Token;
    use static_assertions::assert_impl_all;
    use std::fmt::Debug;

    assert_impl_all!(AuditLogChange: Clone, Debug, PartialEq, Send, Sync);
    assert_impl_all!(AuditLogEvent: Copy, Debug, Eq, Send, Sync);

    #[test]
    fn change_selected_by_key() {
        let change: AuditLogChange = serde_json::from_value(json!({
            "key": "color",
            "old_value": 0,
            "new_value": 16_711_680,
        }))
        .unwrap();

        assert_eq!(
            change,
            AuditLogChange::Color(AuditLogChangeData {
                new_value: Some(0xFF_00_00),
                old_value: Some(0),
            })
        );
        assert_eq!(change.key(), "color");
    }

    #[test]
    fn role_list_changes() {
        let value = json!({
            "key": "$add",
            "new_value": [{"id": "5", "name": "Moderator"}],
        });
        let change: AuditLogChange = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(
            change,
            AuditLogChange::RoleAdded(AuditLogChangeData {
                new_value: Some(vec![AuditLogChangeRole {
                    id: Id::new(5),
                    name: "Moderator".to_owned(),
                }]),
                old_value: None,
            })
        );
        assert_eq!(serde_json::to_value(&change).unwrap(), value);
    }

    #[test]
    fn typed_values() {
        let change: AuditLogChange =
            serde_json::from_value(json!({"key": "permissions", "new_value": "8"})).unwrap();
        assert_eq!(
            change,
            AuditLogChange::Permissions(AuditLogChangeData {
                new_value: Some(Permissions::ADMINISTRATOR),
                old_value: None,
            })
        );

        let change: AuditLogChange =
            serde_json::from_value(json!({"key": "mfa_level", "new_value": 1})).unwrap();
        assert!(matches!(
            change,
            AuditLogChange::MfaLevel(AuditLogChangeData {
                new_value: Some(MfaLevel::Elevated),
                ..
            })
        ));

        let change: AuditLogChange =
            serde_json::from_value(json!({"key": "type", "new_value": "twitch"})).unwrap();
        assert!(matches!(
            change,
            AuditLogChange::Type(AuditLogChangeData {
                new_value: Some(AuditLogChangeType::String(_)),
                ..
            })
        ));
    }

    #[test]
    fn mismatched_value_type_is_an_error() {
        assert!(serde_json::from_value::<AuditLogChange>(json!({
            "key": "hoist",
            "new_value": "yes",
        }))
        .is_err());
    }

    #[test]
    fn reset_attribute() {
        let change: AuditLogChange =
            serde_json::from_value(json!({"key": "nick", "old_value": "alice"})).unwrap();

        match change {
            AuditLogChange::Nick(data) => assert!(data.is_reset()),
            other => panic!("expected nick change, got {other:?}"),
        }
    }

    #[test]
    fn unknown_key_is_kept() {
        let value = json!({"key": "archived", "old_value": false, "new_value": true});
        let change: AuditLogChange = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(
            change,
            AuditLogChange::Unknown {
                key: "archived".to_owned(),
                data: AuditLogChangeData {
                    new_value: Some(json!(true)),
                    old_value: Some(json!(false)),
                },
            }
        );
        assert_eq!(change.key(), "archived");
        assert_eq!(serde_json::to_value(&change).unwrap(), value);
    }

    #[test]
    fn events() {
        serde_test::assert_tokens(&AuditLogEvent::MemberRoleUpdate, &[Token::U16(25)]);
        serde_test::assert_tokens(&AuditLogEvent::GuildScheduledEventDelete, &[Token::U16(102)]);
        assert_eq!(AuditLogEvent::from(110), AuditLogEvent::Unknown(110));
    }

    #[test]
    fn audit_log() {
        let log: AuditLog = serde_json::from_value(json!({
            "audit_log_entries": [{
                "id": "3",
                "action_type": 13,
                "target_id": "4",
                "user_id": "5",
                "changes": [
                    {"key": "allow", "new_value": "1024"},
                    {"key": "id", "new_value": "6"},
                ],
                "options": {"id": "6", "type": "0", "role_name": "Muted"},
                "reason": "cleanup",
            }],
            "integrations": [],
            "users": [],
            "webhooks": [],
        }))
        .unwrap();

        let entry: &AuditLogEntry = &log.audit_log_entries[0];
        assert_eq!(entry.action_type, AuditLogEvent::ChannelOverwriteCreate);
        assert_eq!(entry.changes.len(), 2);
        assert_eq!(entry.changes[1].key(), "id");
        assert_eq!(
            entry.options.as_ref().and_then(|options| options.kind.clone()),
            Some(AuditLogOptionsType::Role)
        );
        assert!(log.guild_scheduled_events.is_empty());
    }
}
