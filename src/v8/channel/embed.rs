//! Rich embeds attached to messages and interaction responses.
//!
//! <https://discord.com/developers/docs/resources/channel#embed-object>

use crate::util::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,
    /// Always `rich` for embeds sent by bots and webhooks.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<EmbedMedia>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedAuthor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedField {
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub inline: bool,
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedFooter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
    pub text: String,
}

/// Image, thumbnail, or video of an embed.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,
}

impl EmbedMedia {
    fn from_url(url: impl Into<String>) -> Self {
        Self {
            height: None,
            proxy_url: None,
            url: url.into(),
            width: None,
        }
    }
}

/// Builder for an [`Embed`].
///
/// ```
/// use discord_payloads::v8::channel::embed::EmbedBuilder;
///
/// let embed = EmbedBuilder::new()
///     .title("Hello")
///     .description("World")
///     .color(0x00FF00)
///     .build();
///
/// assert_eq!(embed.title.as_deref(), Some("Hello"));
/// ```
#[derive(Clone, Debug, Default)]
#[must_use = "must be built into an embed"]
pub struct EmbedBuilder(Embed);

impl EmbedBuilder {
    pub fn new() -> Self {
        Self(Embed {
            kind: Some("rich".to_owned()),
            ..Embed::default()
        })
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    /// 24-bit RGB color, such as `0xFF6600`.
    pub fn color(mut self, color: u32) -> Self {
        self.0.color = Some(color);
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.0.fields.push(EmbedField {
            inline,
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.0.footer = Some(EmbedFooter {
            icon_url: None,
            proxy_icon_url: None,
            text: text.into(),
        });
        self
    }

    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.0.author = Some(EmbedAuthor {
            icon_url: None,
            name: name.into(),
            proxy_icon_url: None,
            url: None,
        });
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.0.image = Some(EmbedMedia::from_url(url));
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.0.thumbnail = Some(EmbedMedia::from_url(url));
        self
    }

    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.0.timestamp = Some(timestamp);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.0.url = Some(url.into());
        self
    }

    pub fn build(self) -> Embed {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Embed, EmbedBuilder};
    use crate::util::Timestamp;
    use serde_json::json;

    #[test]
    fn builder() {
        let embed = EmbedBuilder::new()
            .title("Test Title")
            .color(0xFF_00_00)
            .field("Name1", "Value1", true)
            .field("Name2", "Value2", false)
            .footer("Footer text")
            .timestamp(Timestamp::from_secs(1_580_608_922).unwrap())
            .build();

        assert_eq!(
            serde_json::to_value(&embed).unwrap(),
            json!({
                "type": "rich",
                "title": "Test Title",
                "color": 16_711_680,
                "fields": [
                    {"name": "Name1", "value": "Value1", "inline": true},
                    {"name": "Name2", "value": "Value2"},
                ],
                "footer": {"text": "Footer text"},
                "timestamp": "2020-02-02T02:02:02.000000+00:00",
            })
        );
    }

    #[test]
    fn received_embed() {
        let embed: Embed = serde_json::from_value(json!({
            "type": "image",
            "url": "https://example.com/a.png",
            "thumbnail": {
                "url": "https://example.com/a.png",
                "proxy_url": "https://media.example.com/a.png",
                "width": 64,
                "height": 64,
            },
        }))
        .unwrap();

        assert_eq!(embed.kind.as_deref(), Some("image"));
        assert_eq!(embed.thumbnail.and_then(|media| media.width), Some(64));
        assert!(embed.fields.is_empty());
    }
}
