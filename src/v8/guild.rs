//! Guild members, guild-wide settings, and integrations.

use crate::{
    id::{
        marker::{ApplicationMarker, IntegrationMarker, RoleMarker},
        Id,
    },
    util::{integer_enum, Timestamp},
    v8::user::User,
};
use serde::{Deserialize, Serialize};

/// <https://discord.com/developers/docs/resources/guild#guild-member-object>
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Member {
    /// Guild specific avatar hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// When the member's timeout expires. `None` or a past time means the
    /// member is not timed out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_disabled_until: Option<Timestamp>,
    pub deaf: bool,
    pub joined_at: Timestamp,
    pub mute: bool,
    pub nick: Option<String>,
    /// Whether the member has not yet passed membership screening.
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub pending: bool,
    /// When the member started boosting the guild.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_since: Option<Timestamp>,
    pub roles: Vec<Id<RoleMarker>>,
    /// Not included in `MESSAGE_CREATE` and `MESSAGE_UPDATE` member objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

integer_enum! {
    /// Two-factor requirement for moderation actions.
    ///
    /// <https://discord.com/developers/docs/resources/guild#guild-object-mfa-level>
    pub enum MfaLevel {
        None = 0,
        Elevated = 1,
    }
}

integer_enum! {
    /// <https://discord.com/developers/docs/resources/guild#guild-object-verification-level>
    pub enum VerificationLevel {
        /// Unrestricted.
        None = 0,
        /// Must have a verified email.
        Low = 1,
        /// Must be registered for longer than 5 minutes.
        Medium = 2,
        /// Must be a member of the guild for longer than 10 minutes.
        High = 3,
        /// Must have a verified phone number.
        VeryHigh = 4,
    }
}

integer_enum! {
    /// Whose messages are scanned for explicit media.
    ///
    /// <https://discord.com/developers/docs/resources/guild#guild-object-explicit-content-filter-level>
    pub enum ExplicitContentFilter {
        Disabled = 0,
        MembersWithoutRoles = 1,
        AllMembers = 2,
    }
}

integer_enum! {
    /// <https://discord.com/developers/docs/resources/guild#guild-object-default-message-notification-level>
    pub enum DefaultMessageNotificationLevel {
        AllMessages = 0,
        OnlyMentions = 1,
    }
}

integer_enum! {
    /// What happens to a subscriber when their integration subscription
    /// expires.
    pub enum IntegrationExpireBehavior {
        RemoveRole = 0,
        Kick = 1,
    }
}

/// Third-party integration, such as Twitch or YouTube, attached to a guild.
///
/// <https://discord.com/developers/docs/resources/guild#integration-object>
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GuildIntegration {
    pub account: IntegrationAccount,
    /// Bot application for Discord integrations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<IntegrationApplication>,
    /// Whether emoticons should be synced. Twitch only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_emoticons: Option<bool>,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_behavior: Option<IntegrationExpireBehavior>,
    /// Grace period, in days, before expiring subscribers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_grace_period: Option<u64>,
    pub id: Id<IntegrationMarker>,
    /// `twitch`, `youtube`, or `discord`.
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked: Option<bool>,
    /// Role that subscribers receive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<Id<RoleMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synced_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syncing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct IntegrationAccount {
    /// Account ID on the third-party service. Not a snowflake.
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct IntegrationApplication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<User>,
    pub description: String,
    pub icon: Option<String>,
    pub id: Id<ApplicationMarker>,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::{
        DefaultMessageNotificationLevel, ExplicitContentFilter, GuildIntegration,
        IntegrationExpireBehavior, Member, MfaLevel, VerificationLevel,
    };
    use crate::id::Id;
    use serde_json::json;
    use serde_test::Token;

    #[test]
    fn member() {
        let value = json!({
            "user": {"id": "1", "username": "a", "discriminator": "0001", "avatar": null},
            "nick": "NOT API SUPPORT",
            "roles": ["2"],
            "joined_at": "2015-04-26T06:26:56.936000+00:00",
            "deaf": false,
            "mute": false,
            "communication_disabled_until": "2021-12-23T07:01:06.000000+00:00",
        });
        let member: Member = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(member.roles, [Id::new(2)]);
        assert!(!member.pending);
        assert!(member.communication_disabled_until.is_some());
        assert_eq!(serde_json::to_value(&member).unwrap(), value);
    }

    #[test]
    fn integer_enums() {
        serde_test::assert_tokens(&MfaLevel::Elevated, &[Token::U8(1)]);
        serde_test::assert_tokens(&VerificationLevel::VeryHigh, &[Token::U8(4)]);
        serde_test::assert_tokens(&ExplicitContentFilter::AllMembers, &[Token::U8(2)]);
        serde_test::assert_tokens(&DefaultMessageNotificationLevel::OnlyMentions, &[Token::U8(1)]);
        serde_test::assert_tokens(&IntegrationExpireBehavior::Unknown(5), &[Token::U8(5)]);
    }

    #[test]
    fn twitch_integration() {
        let integration: GuildIntegration = serde_json::from_value(json!({
            "id": "33590653072239123",
            "name": "twitch-user",
            "type": "twitch",
            "enabled": true,
            "syncing": false,
            "role_id": "5",
            "enable_emoticons": true,
            "expire_behavior": 1,
            "expire_grace_period": 7,
            "account": {"id": "1234567", "name": "twitch-user"},
            "synced_at": "2021-01-01T00:00:00+00:00",
            "subscriber_count": 0,
            "revoked": false,
        }))
        .unwrap();

        assert_eq!(integration.kind, "twitch");
        assert_eq!(integration.expire_behavior, Some(IntegrationExpireBehavior::Kick));
        assert_eq!(integration.account.id, "1234567");
        assert!(integration.application.is_none());
    }
}
