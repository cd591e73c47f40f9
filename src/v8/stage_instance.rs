use crate::{
    id::{
        marker::{ChannelMarker, GuildMarker, ScheduledEventMarker, StageMarker},
        Id,
    },
    util::integer_enum,
};
use serde::{Deserialize, Serialize};

/// Live stage in a stage channel.
///
/// <https://discord.com/developers/docs/resources/stage-instance#stage-instance-object>
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct StageInstance {
    pub channel_id: Id<ChannelMarker>,
    /// Whether stage discovery is disabled.
    pub discoverable_disabled: bool,
    pub guild_id: Id<GuildMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_scheduled_event_id: Option<Id<ScheduledEventMarker>>,
    pub id: Id<StageMarker>,
    pub privacy_level: StageInstancePrivacyLevel,
    pub topic: String,
}

integer_enum! {
    pub enum StageInstancePrivacyLevel {
        /// Visible publicly, such as on stage discovery.
        Public = 1,
        /// Visible to guild members only.
        GuildOnly = 2,
    }
}

#[cfg(test)]
mod tests {
    use super::{StageInstance, StageInstancePrivacyLevel};
    use serde_json::json;
    use serde_test::Token;

    #[test]
    fn stage_instance() {
        let value = json!({
            "id": "840647391636226060",
            "guild_id": "197038439483310086",
            "channel_id": "733488538393510049",
            "topic": "Testing Testing, 123",
            "privacy_level": 1,
            "discoverable_disabled": false,
        });
        let stage: StageInstance = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(stage.privacy_level, StageInstancePrivacyLevel::Public);
        assert_eq!(serde_json::to_value(&stage).unwrap(), value);
    }

    #[test]
    fn privacy_level() {
        serde_test::assert_tokens(&StageInstancePrivacyLevel::GuildOnly, &[Token::U8(2)]);
    }
}
