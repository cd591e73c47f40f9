//! Users, their flags, and their third-party connections.
//!
//! <https://discord.com/developers/docs/resources/user>

use crate::{
    id::{marker::UserMarker, Id},
    util::{bitflags_serde_as_integer, integer_enum, is_false},
    v8::guild::GuildIntegration,
};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// <https://discord.com/developers/docs/resources/user#user-object>
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct User {
    /// Banner color encoded as an integer representation of a hexadecimal
    /// color code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<u32>,
    /// Avatar hash.
    pub avatar: Option<String>,
    /// Banner hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    /// Whether the user belongs to an OAuth2 application.
    #[serde(default, skip_serializing_if = "is_false")]
    pub bot: bool,
    /// Four digit discord-tag.
    pub discriminator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<UserFlags>,
    pub id: Id<UserMarker>,
    /// Chosen language option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Whether the user has two factor enabled on their account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_enabled: Option<bool>,
    /// Username, not unique across the platform.
    #[serde(rename = "username")]
    pub name: String,
    /// Type of Nitro subscription on the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_type: Option<PremiumType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_flags: Option<UserFlags>,
    /// Whether the user is an official system user, part of the urgent
    /// message system.
    #[serde(default, skip_serializing_if = "is_false")]
    pub system: bool,
    /// Whether the email on the account has been verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// User object where only the ID is guaranteed.
///
/// Sent inside gateway events such as `PRESENCE_UPDATE`. Every other field
/// mirrors [`User`] but may be absent, and consumers must not assume it is
/// populated.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PartialUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<UserFlags>,
    pub id: Id<UserMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_enabled: Option<bool>,
    #[serde(rename = "username", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_type: Option<PremiumType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_flags: Option<UserFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl PartialUser {
    /// Partial user carrying nothing but an ID.
    pub const fn from_id(id: Id<UserMarker>) -> Self {
        Self {
            accent_color: None,
            avatar: None,
            banner: None,
            bot: None,
            discriminator: None,
            email: None,
            flags: None,
            id,
            locale: None,
            mfa_enabled: None,
            name: None,
            premium_type: None,
            public_flags: None,
            system: None,
            verified: None,
        }
    }
}

impl From<User> for PartialUser {
    fn from(user: User) -> Self {
        Self {
            accent_color: user.accent_color,
            avatar: user.avatar,
            banner: user.banner,
            bot: Some(user.bot),
            discriminator: Some(user.discriminator),
            email: user.email,
            flags: user.flags,
            id: user.id,
            locale: user.locale,
            mfa_enabled: user.mfa_enabled,
            name: Some(user.name),
            premium_type: user.premium_type,
            public_flags: user.public_flags,
            system: Some(user.system),
            verified: user.verified,
        }
    }
}

bitflags! {
    /// Flags on a user's account.
    ///
    /// <https://discord.com/developers/docs/resources/user#user-object-user-flags>
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct UserFlags: u64 {
        /// Discord employee.
        const STAFF = 1;
        /// Partnered server owner.
        const PARTNER = 1 << 1;
        /// HypeSquad events coordinator.
        const HYPESQUAD = 1 << 2;
        /// Bug hunter level 1.
        const BUG_HUNTER_LEVEL_1 = 1 << 3;
        /// House Bravery member.
        const HYPESQUAD_ONLINE_HOUSE_1 = 1 << 6;
        /// House Brilliance member.
        const HYPESQUAD_ONLINE_HOUSE_2 = 1 << 7;
        /// House Balance member.
        const HYPESQUAD_ONLINE_HOUSE_3 = 1 << 8;
        /// Early Nitro supporter.
        const PREMIUM_EARLY_SUPPORTER = 1 << 9;
        /// User is a team.
        const TEAM_PSEUDO_USER = 1 << 10;
        /// Bug hunter level 2.
        const BUG_HUNTER_LEVEL_2 = 1 << 14;
        /// Verified bot.
        const VERIFIED_BOT = 1 << 16;
        /// Early verified bot developer.
        const VERIFIED_DEVELOPER = 1 << 17;
        /// Discord certified moderator.
        const CERTIFIED_MODERATOR = 1 << 18;
        /// Bot uses only HTTP interactions and is shown in the online member
        /// list.
        const BOT_HTTP_INTERACTIONS = 1 << 19;
        /// User has been identified as a spammer.
        const SPAMMER = 1 << 20;
    }
}

bitflags_serde_as_integer!(UserFlags: u64);

integer_enum! {
    /// Type of Nitro subscription on a user's account.
    ///
    /// <https://discord.com/developers/docs/resources/user#user-object-premium-types>
    pub enum PremiumType {
        None = 0,
        NitroClassic = 1,
        Nitro = 2,
    }
}

/// Account on a third-party service connected to a user.
///
/// <https://discord.com/developers/docs/resources/user#connection-object>
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Connection {
    pub friend_sync: bool,
    /// ID of the connection account.
    pub id: String,
    /// Partial server integrations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub integrations: Vec<GuildIntegration>,
    /// Service of the connection, such as `twitch` or `youtube`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Username of the connection account.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked: Option<bool>,
    /// Whether activities related to this connection are shown in presence
    /// updates.
    pub show_activity: bool,
    pub verified: bool,
    pub visibility: ConnectionVisibility,
}

integer_enum! {
    /// <https://discord.com/developers/docs/resources/user#connection-object-visibility-types>
    pub enum ConnectionVisibility {
        /// Invisible to everyone except the user themselves.
        None = 0,
        /// Visible to everyone.
        Everyone = 1,
    }
}

#[cfg(test)]
mod tests {
    use super::{ConnectionVisibility, PartialUser, PremiumType, User, UserFlags};
    use crate::id::Id;
    use serde_json::json;
    use serde_test::Token;
    use static_assertions::assert_fields;

    assert_fields!(
        User: accent_color,
        avatar,
        banner,
        bot,
        discriminator,
        email,
        flags,
        id,
        locale,
        mfa_enabled,
        name,
        premium_type,
        public_flags,
        system,
        verified
    );

    #[test]
    fn user_minimal() {
        let user: User = serde_json::from_value(json!({
            "id": "80351110224678912",
            "username": "Nelly",
            "discriminator": "1337",
            "avatar": "8342729096ea3675442027381ff50dfe",
        }))
        .unwrap();

        assert_eq!(user.id, Id::new(80_351_110_224_678_912));
        assert_eq!(user.name, "Nelly");
        assert!(!user.bot);
        assert!(user.flags.is_none());

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "80351110224678912",
                "username": "Nelly",
                "discriminator": "1337",
                "avatar": "8342729096ea3675442027381ff50dfe",
            })
        );
    }

    #[test]
    fn user_full() {
        let user: User = serde_json::from_value(json!({
            "id": "80351110224678912",
            "username": "Nelly",
            "discriminator": "1337",
            "avatar": null,
            "banner": null,
            "accent_color": 16_711_680,
            "bot": true,
            "verified": true,
            "email": "nelly@discord.com",
            "flags": 64,
            "public_flags": 1_048_576,
            "premium_type": 1,
            "locale": "en-US",
            "mfa_enabled": true,
        }))
        .unwrap();

        assert!(user.bot);
        assert_eq!(user.accent_color, Some(0xFF_00_00));
        assert_eq!(user.flags, Some(UserFlags::HYPESQUAD_ONLINE_HOUSE_1));
        assert_eq!(user.public_flags, Some(UserFlags::SPAMMER));
        assert_eq!(user.premium_type, Some(PremiumType::NitroClassic));
    }

    #[test]
    fn user_flags_keep_unknown_bits() {
        let flags: UserFlags = serde_json::from_str(&((1_u64 << 40) | 1).to_string()).unwrap();
        assert!(flags.contains(UserFlags::STAFF));
        assert_eq!(flags.bits(), (1 << 40) | 1);
        serde_test::assert_tokens(&UserFlags::PARTNER, &[Token::U64(2)]);
    }

    #[test]
    fn partial_user_only_id() {
        let user: PartialUser = serde_json::from_value(json!({"id": "1"})).unwrap();
        assert_eq!(user, PartialUser::from_id(Id::new(1)));
        assert_eq!(serde_json::to_value(&user).unwrap(), json!({"id": "1"}));
    }

    #[test]
    fn premium_type_unknown() {
        serde_test::assert_tokens(&PremiumType::Nitro, &[Token::U8(2)]);
        serde_test::assert_tokens(&PremiumType::Unknown(9), &[Token::U8(9)]);
        serde_test::assert_tokens(&ConnectionVisibility::Everyone, &[Token::U8(1)]);
    }
}
