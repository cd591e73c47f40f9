//! Events scheduled in a guild.
//!
//! <https://discord.com/developers/docs/resources/guild-scheduled-event>

use crate::{
    id::{
        marker::{
            ChannelMarker, GuildMarker, ScheduledEventEntityMarker, ScheduledEventMarker,
            UserMarker,
        },
        Id,
    },
    util::{integer_enum, Timestamp},
    v8::user::User,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GuildScheduledEvent {
    /// Stage or voice channel the event is hosted in.
    ///
    /// `None` for [`EntityType::External`] events.
    pub channel_id: Option<Id<ChannelMarker>>,
    /// Not included for events created before October 25th, 2021.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<Id<UserMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub entity_id: Option<Id<ScheduledEventEntityMarker>>,
    /// Required for [`EntityType::External`] events.
    pub entity_metadata: Option<EntityMetadata>,
    pub entity_type: EntityType,
    pub guild_id: Id<GuildMarker>,
    pub id: Id<ScheduledEventMarker>,
    pub name: String,
    pub privacy_level: PrivacyLevel,
    /// Required for [`EntityType::External`] events.
    pub scheduled_end_time: Option<Timestamp>,
    pub scheduled_start_time: Timestamp,
    pub status: Status,
    /// Number of users subscribed to the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_count: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EntityMetadata {
    /// Location of an external event, 1-100 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

integer_enum! {
    /// Where the event is hosted.
    pub enum EntityType {
        StageInstance = 1,
        Voice = 2,
        External = 3,
    }
}

integer_enum! {
    pub enum PrivacyLevel {
        /// Only accessible to guild members.
        GuildOnly = 2,
    }
}

integer_enum! {
    /// Scheduled events move from `Scheduled` to `Active` to `Completed`, or
    /// from `Scheduled` to `Canceled`.
    pub enum Status {
        Scheduled = 1,
        Active = 2,
        Completed = 3,
        Canceled = 4,
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityType, GuildScheduledEvent, PrivacyLevel, Status};
    use crate::id::Id;
    use serde_json::json;

    #[test]
    fn external_event() {
        let value = json!({
            "id": "1",
            "guild_id": "2",
            "channel_id": null,
            "creator_id": "3",
            "name": "Game night",
            "scheduled_start_time": "2022-01-01T20:00:00.000000+00:00",
            "scheduled_end_time": "2022-01-01T23:00:00.000000+00:00",
            "privacy_level": 2,
            "status": 1,
            "entity_type": 3,
            "entity_id": null,
            "entity_metadata": {"location": "The park"},
        });
        let event: GuildScheduledEvent = serde_json::from_value(value).unwrap();

        assert_eq!(event.creator_id, Some(Id::new(3)));
        assert_eq!(event.entity_type, EntityType::External);
        assert_eq!(event.privacy_level, PrivacyLevel::GuildOnly);
        assert_eq!(event.status, Status::Scheduled);
        assert_eq!(
            event.entity_metadata.and_then(|metadata| metadata.location),
            Some("The park".to_owned())
        );
    }

    #[test]
    fn round_trip_keeps_nulls() {
        let value = json!({
            "id": "1",
            "guild_id": "2",
            "channel_id": "4",
            "name": "Stage talk",
            "scheduled_start_time": "2022-01-01T20:00:00.000000+00:00",
            "scheduled_end_time": null,
            "privacy_level": 2,
            "status": 2,
            "entity_type": 1,
            "entity_id": "5",
            "entity_metadata": null,
        });
        let event: GuildScheduledEvent = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(serde_json::to_value(&event).unwrap(), value);
    }
}
