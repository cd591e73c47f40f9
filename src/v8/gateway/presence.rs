//! A user's live status and activities, as broadcast by `PRESENCE_UPDATE`.
//!
//! <https://discord.com/developers/docs/topics/gateway#presence-update>

use crate::{
    id::{
        marker::{ApplicationMarker, EmojiMarker, GuildMarker},
        Id,
    },
    util::{bitflags_serde_as_integer, integer_enum},
    v8::user::PartialUser,
};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PresenceUpdate {
    /// Current activities, in no particular order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<Activity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_status: Option<ClientStatus>,
    pub guild_id: Id<GuildMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Only the user's ID is guaranteed.
    pub user: PartialUser,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Online,
    #[serde(rename = "dnd")]
    DoNotDisturb,
    Idle,
    Invisible,
    Offline,
    /// Variant value is unknown to the library.
    #[serde(other)]
    Unknown,
}

/// Status of each platform the user is active on.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ClientStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<Status>,
}

/// <https://discord.com/developers/docs/topics/gateway#activity-object>
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Activity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Id<ApplicationMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<ActivityAssets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<ActivityButtons>,
    /// Unix timestamp in milliseconds of when the activity was added to the
    /// user's session.
    pub created_at: u64,
    /// What the user is currently doing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Emoji of a custom status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ActivityEmoji>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<ActivityFlags>,
    pub id: String,
    /// Whether the activity is an instanced game session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<bool>,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<ActivityParty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<ActivityPlatform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<ActivitySecrets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// User's current party status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<ActivityTimestamps>,
    /// Stream URL, validated when the type is [`ActivityType::Streaming`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

integer_enum! {
    /// <https://discord.com/developers/docs/topics/gateway#activity-object-activity-types>
    pub enum ActivityType {
        Playing = 0,
        Streaming = 1,
        Listening = 2,
        Watching = 3,
        Custom = 4,
        Competing = 5,
    }
}

impl ActivityType {
    /// Verb clients render before the activity name, such as "Listening to"
    /// in "Listening to Spotify".
    ///
    /// Custom statuses render only their emoji and state and have no verb.
    pub const fn verb(self) -> Option<&'static str> {
        match self {
            Self::Playing => Some("Playing"),
            Self::Streaming => Some("Streaming"),
            Self::Listening => Some("Listening to"),
            Self::Watching => Some("Watching"),
            Self::Competing => Some("Competing in"),
            Self::Custom | Self::Unknown(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityPlatform {
    Desktop,
    Samsung,
    Xbox,
    /// Variant value is unknown to the library.
    #[serde(other)]
    Unknown,
}

/// Unix timestamps, in milliseconds, of the start and end of an activity.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ActivityTimestamps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ActivityEmoji {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
    /// Present for custom emoji.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id<EmojiMarker>>,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ActivityParty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Current and maximum size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<[u64; 2]>,
}

impl ActivityParty {
    pub fn current_size(&self) -> Option<u64> {
        self.size.map(|[current, _]| current)
    }

    pub fn max_size(&self) -> Option<u64> {
        self.size.map(|[_, max]| max)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ActivityAssets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_image: Option<String>,
    /// Hover text of the large image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_text: Option<String>,
}

/// Secrets for rich presence joining and spectating.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ActivitySecrets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join: Option<String>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spectate: Option<String>,
}

bitflags! {
    /// Independently combinable properties of an activity.
    ///
    /// <https://discord.com/developers/docs/topics/gateway#activity-object-activity-flags>
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct ActivityFlags: u64 {
        const INSTANCE = 1;
        const JOIN = 1 << 1;
        const SPECTATE = 1 << 2;
        const JOIN_REQUEST = 1 << 3;
        const SYNC = 1 << 4;
        const PLAY = 1 << 5;
        const PARTY_PRIVACY_FRIENDS = 1 << 6;
        const PARTY_PRIVACY_VOICE_CHANNEL = 1 << 7;
        const EMBEDDED = 1 << 8;
    }
}

bitflags_serde_as_integer!(ActivityFlags: u64);

/// Custom buttons shown in a rich presence.
///
/// Bots receive only the labels; the activity's own client sends the
/// label and URL pairs.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActivityButtons {
    Labels(Vec<String>),
    Links(Vec<ActivityButton>),
}

impl ActivityButtons {
    /// Labels of the buttons, in display order.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Self::Labels(labels) => labels.iter().map(String::as_str).collect(),
            Self::Links(links) => links.iter().map(|link| link.label.as_str()).collect(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ActivityButton {
    pub label: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::{
        ActivityButton, ActivityButtons, ActivityFlags, ActivityPlatform, ActivityType,
        PresenceUpdate, Status,
    };
    use crate::id::Id;
    use serde_json::json;
    use serde_test::Token;

    #[test]
    fn presence_with_id_only_user() {
        let presence: PresenceUpdate = serde_json::from_value(json!({
            "user": {"id": "80351110224678912"},
            "guild_id": "1",
        }))
        .unwrap();

        assert_eq!(presence.user.id, Id::new(80_351_110_224_678_912));
        assert!(presence.user.name.is_none());
        assert!(presence.status.is_none());
        assert!(presence.activities.is_empty());
        assert_eq!(
            serde_json::to_value(&presence).unwrap(),
            json!({"user": {"id": "80351110224678912"}, "guild_id": "1"})
        );
    }

    #[test]
    fn presence_with_activities() {
        let presence: PresenceUpdate = serde_json::from_value(json!({
            "user": {"id": "1", "username": "a"},
            "guild_id": "2",
            "status": "dnd",
            "client_status": {"desktop": "dnd", "mobile": "idle"},
            "activities": [{
                "id": "spotify:1",
                "name": "Spotify",
                "type": 2,
                "created_at": 1_640_000_000_000_u64,
                "details": "Song",
                "state": "Artist",
                "timestamps": {"start": 1, "end": 2},
                "party": {"id": "spotify:1", "size": [1, 4]},
                "flags": 48,
                "buttons": ["Play on Spotify"],
                "platform": "desktop",
            }],
        }))
        .unwrap();

        assert_eq!(presence.status, Some(Status::DoNotDisturb));
        let activity = &presence.activities[0];
        assert_eq!(activity.kind.verb(), Some("Listening to"));
        assert_eq!(activity.platform, Some(ActivityPlatform::Desktop));
        assert_eq!(
            activity.flags,
            Some(ActivityFlags::SYNC | ActivityFlags::PLAY)
        );
        assert!(activity.flags.is_some_and(|flags| flags.contains(ActivityFlags::PLAY)));
        assert_eq!(activity.party.as_ref().and_then(|party| party.max_size()), Some(4));
        assert_eq!(
            activity.buttons,
            Some(ActivityButtons::Labels(vec!["Play on Spotify".to_owned()]))
        );
    }

    #[test]
    fn buttons_with_links() {
        let buttons: ActivityButtons =
            serde_json::from_value(json!([{"label": "Join", "url": "https://example.com"}]))
                .unwrap();

        assert_eq!(
            buttons,
            ActivityButtons::Links(vec![ActivityButton {
                label: "Join".to_owned(),
                url: "https://example.com".to_owned(),
            }])
        );
        assert_eq!(buttons.labels(), ["Join"]);
    }

    #[test]
    fn unknown_status_and_type() {
        let status: Status = serde_json::from_value(json!("streaming")).unwrap();
        assert_eq!(status, Status::Unknown);
        serde_test::assert_tokens(&ActivityType::Competing, &[Token::U8(5)]);
        assert_eq!(ActivityType::Custom.verb(), None);
        assert_eq!(ActivityType::Unknown(9).verb(), None);
    }
}
