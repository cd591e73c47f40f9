use crate::{
    id::{
        marker::{EmojiMarker, RoleMarker},
        Id,
    },
    v8::user::User,
};
use serde::{Deserialize, Serialize};

/// Custom guild emoji, or a unicode emoji when `id` is absent.
///
/// <https://discord.com/developers/docs/resources/emoji#emoji-object>
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Emoji {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
    /// May be false due to loss of server boosts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    pub id: Option<Id<EmojiMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed: Option<bool>,
    /// Only `None` in reaction emoji objects of deleted custom emoji.
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_colons: Option<bool>,
    /// Roles allowed to use the emoji.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Id<RoleMarker>>,
    /// User that created the emoji.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}
