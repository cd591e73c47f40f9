//! Stickers that can be sent in messages.
//!
//! <https://discord.com/developers/docs/resources/sticker>

use crate::{
    id::{
        marker::{GuildMarker, StickerMarker, StickerPackMarker},
        Id,
    },
    util::integer_enum,
    v8::user::User,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Sticker {
    /// Whether a guild sticker can be used. May be false due to loss of
    /// server boosts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    pub description: Option<String>,
    pub format_type: StickerFormatType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    pub id: Id<StickerMarker>,
    #[serde(rename = "type")]
    pub kind: StickerType,
    pub name: String,
    /// Pack of a standard sticker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack_id: Option<Id<StickerPackMarker>>,
    /// Position within the pack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_value: Option<u64>,
    /// Comma separated autocomplete keywords.
    pub tags: String,
    /// User that uploaded a guild sticker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

integer_enum! {
    pub enum StickerFormatType {
        Png = 1,
        Apng = 2,
        Lottie = 3,
    }
}

integer_enum! {
    pub enum StickerType {
        /// Official sticker in a pack, part of Nitro or in a removed
        /// purchasable pack.
        Standard = 1,
        /// Sticker uploaded to a boosted guild.
        Guild = 2,
    }
}

#[cfg(test)]
mod tests {
    use super::{Sticker, StickerFormatType, StickerType};
    use crate::id::Id;
    use serde_json::json;

    #[test]
    fn standard_sticker() {
        let value = json!({
            "id": "749054660769218631",
            "name": "Wave",
            "tags": "wumpus, hello, sup, hi, oi, heyo, heya, yo, wave",
            "type": 1,
            "format_type": 3,
            "description": "Wumpus waves hello",
            "pack_id": "847199849233514549",
            "sort_value": 12,
        });
        let sticker: Sticker = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(sticker.kind, StickerType::Standard);
        assert_eq!(sticker.format_type, StickerFormatType::Lottie);
        assert_eq!(sticker.pack_id, Some(Id::new(847_199_849_233_514_549)));
        assert_eq!(serde_json::to_value(&sticker).unwrap(), value);
    }
}
