use crate::{
    id::{
        marker::{ApplicationMarker, ChannelMarker, GuildMarker, WebhookMarker},
        Id,
    },
    util::integer_enum,
    v8::user::User,
};
use serde::{Deserialize, Serialize};

/// <https://discord.com/developers/docs/resources/webhook#webhook-object>
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Webhook {
    /// Application that created the webhook.
    pub application_id: Option<Id<ApplicationMarker>>,
    /// Default avatar hash.
    pub avatar: Option<String>,
    /// `None` for application-owned webhooks.
    pub channel_id: Option<Id<ChannelMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    pub id: Id<WebhookMarker>,
    #[serde(rename = "type")]
    pub kind: WebhookType,
    pub name: Option<String>,
    /// Channel followed by a channel follower webhook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_channel: Option<WebhookChannel>,
    /// Guild of the channel followed by a channel follower webhook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_guild: Option<WebhookGuild>,
    /// Secure token, only present on incoming webhooks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Only present on incoming webhooks retrieved with an OAuth2 token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Creator of the webhook. Absent when retrieved by its token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Partial channel a channel follower webhook follows.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct WebhookChannel {
    pub id: Id<ChannelMarker>,
    pub name: String,
}

/// Partial guild of a followed channel.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct WebhookGuild {
    pub icon: Option<String>,
    pub id: Id<GuildMarker>,
    pub name: String,
}

integer_enum! {
    /// <https://discord.com/developers/docs/resources/webhook#webhook-object-webhook-types>
    pub enum WebhookType {
        /// Posts messages to channels with a token.
        Incoming = 1,
        /// Posts messages from a followed news channel.
        ChannelFollower = 2,
        /// Used with interactions.
        Application = 3,
    }
}

#[cfg(test)]
mod tests {
    use super::{Webhook, WebhookType};
    use crate::id::Id;
    use serde_json::json;

    #[test]
    fn incoming_webhook() {
        let value = json!({
            "id": "223704706495545344",
            "type": 1,
            "guild_id": "199737254929760256",
            "channel_id": "199737254929760256",
            "user": {
                "id": "80351110224678912",
                "username": "Nelly",
                "discriminator": "1337",
                "avatar": "8342729096ea3675442027381ff50dfe",
            },
            "name": "test webhook",
            "avatar": "1418a7e9ab9cfbbd27c07bf5c44b0cdf",
            "token": "3d89bb7572e0fb30d8128367b3b1b44fecd1726de135cbe28a41f8b2f777c372ba2939e72279b94526ff5d1bd4358d65cf11",
            "application_id": null,
        });
        let webhook: Webhook = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(webhook.kind, WebhookType::Incoming);
        assert_eq!(webhook.channel_id, Some(Id::new(199_737_254_929_760_256)));
        assert_eq!(serde_json::to_value(&webhook).unwrap(), value);
    }

    #[test]
    fn channel_follower_webhook() {
        let webhook: Webhook = serde_json::from_value(json!({
            "id": "1",
            "type": 2,
            "channel_id": "2",
            "name": "follower",
            "avatar": null,
            "application_id": null,
            "source_guild": {"id": "3", "name": "News", "icon": null},
            "source_channel": {"id": "4", "name": "announcements"},
        }))
        .unwrap();

        assert_eq!(webhook.kind, WebhookType::ChannelFollower);
        assert_eq!(webhook.source_channel.map(|channel| channel.name), Some("announcements".to_owned()));
        assert!(webhook.token.is_none());
    }
}
