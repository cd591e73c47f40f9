//! Extension traits with helpers derived from payload fields.
//!
//! The payload structs stay plain data mirrors of the API; helpers that
//! compute something from them live here.

use crate::{
    id::{marker::UserMarker, Id},
    v8::{
        channel::Message,
        user::{PartialUser, User},
    },
};

const CDN_BASE: &str = "https://cdn.discordapp.com";

/// Convenience methods on [`User`] and [`PartialUser`].
pub trait UserExt {
    /// CDN URL of the user's avatar, or `None` if no avatar is set or known.
    ///
    /// Animated avatars, whose hash starts with `a_`, link to a GIF.
    fn avatar_url(&self) -> Option<String>;

    /// `name#discriminator`, or just the name for users on the unique
    /// username system, whose discriminator is `0`.
    ///
    /// `None` if the name isn't known.
    fn tag(&self) -> Option<String>;
}

fn avatar_url(id: Id<UserMarker>, hash: &str) -> String {
    let extension = if hash.starts_with("a_") { "gif" } else { "png" };

    format!("{CDN_BASE}/avatars/{id}/{hash}.{extension}")
}

fn tag(name: &str, discriminator: Option<&str>) -> String {
    match discriminator {
        None | Some("0") => name.to_owned(),
        Some(discriminator) => format!("{name}#{discriminator}"),
    }
}

impl UserExt for User {
    fn avatar_url(&self) -> Option<String> {
        self.avatar.as_deref().map(|hash| avatar_url(self.id, hash))
    }

    fn tag(&self) -> Option<String> {
        Some(tag(&self.name, Some(&self.discriminator)))
    }
}

impl UserExt for PartialUser {
    fn avatar_url(&self) -> Option<String> {
        self.avatar.as_deref().map(|hash| avatar_url(self.id, hash))
    }

    fn tag(&self) -> Option<String> {
        let name = self.name.as_deref()?;

        Some(tag(name, self.discriminator.as_deref()))
    }
}

/// Convenience methods on [`Message`].
pub trait MessageExt {
    /// Unix timestamp in milliseconds, decoded from the message ID.
    fn created_at_ms(&self) -> u64;

    /// Whether the given user is mentioned in the message.
    fn mentions_user(&self, user_id: Id<UserMarker>) -> bool;
}

impl MessageExt for Message {
    fn created_at_ms(&self) -> u64 {
        self.id.timestamp()
    }

    fn mentions_user(&self, user_id: Id<UserMarker>) -> bool {
        self.mentions.iter().any(|user| user.id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{MessageExt, UserExt};
    use crate::{
        id::Id,
        v8::{
            channel::Message,
            user::{PartialUser, User},
        },
    };
    use serde_json::json;

    fn user(discriminator: &str, avatar: Option<&str>) -> User {
        serde_json::from_value(json!({
            "id": "80351110224678912",
            "username": "Nelly",
            "discriminator": discriminator,
            "avatar": avatar,
        }))
        .unwrap()
    }

    #[test]
    fn user_tag() {
        assert_eq!(user("1337", None).tag().as_deref(), Some("Nelly#1337"));
        assert_eq!(user("0", None).tag().as_deref(), Some("Nelly"));
        assert_eq!(PartialUser::from_id(Id::new(1)).tag(), None);
    }

    #[test]
    fn user_avatar_url() {
        assert_eq!(user("1337", None).avatar_url(), None);
        assert_eq!(
            user("1337", Some("8342729096ea3675442027381ff50dfe")).avatar_url().as_deref(),
            Some(
                "https://cdn.discordapp.com/avatars/80351110224678912/8342729096ea3675442027381ff50dfe.png"
            )
        );
        assert!(PartialUser::from(user("1337", Some("a_1")))
            .avatar_url()
            .is_some_and(|url| url.ends_with("a_1.gif")));
    }

    #[test]
    fn message_helpers() {
        let message: Message = serde_json::from_value(json!({
            "id": "175928847299117063",
            "channel_id": "4",
            "author": {"id": "2", "username": "a", "discriminator": "0", "avatar": null},
            "content": "hi <@80351110224678912>",
            "timestamp": "2016-04-30T11:18:25.796000+00:00",
            "edited_timestamp": null,
            "tts": false,
            "mention_everyone": false,
            "mentions": [{
                "id": "80351110224678912",
                "username": "Nelly",
                "discriminator": "1337",
                "avatar": null,
            }],
            "mention_roles": [],
            "attachments": [],
            "embeds": [],
            "pinned": false,
            "type": 0,
        }))
        .unwrap();

        assert_eq!(message.created_at_ms(), 1_462_015_105_796);
        assert!(message.mentions_user(Id::new(80_351_110_224_678_912)));
        assert!(!message.mentions_user(Id::new(2)));
    }
}
