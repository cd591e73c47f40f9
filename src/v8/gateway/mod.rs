//! Gateway connection info, presences, and the event envelope.

pub mod event;
pub mod presence;

pub use self::{
    event::{DispatchEvent, GatewayEvent, GatewayPayload, Hello, OpCode},
    presence::{Activity, ActivityFlags, ActivityType, PresenceUpdate, Status},
};

use serde::{Deserialize, Serialize};

/// Response of `GET /gateway`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GatewayInfo {
    /// WSS URL to connect to.
    pub url: String,
}

/// Response of `GET /gateway/bot`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GatewayBotInfo {
    pub session_start_limit: SessionStartLimit,
    /// Recommended number of shards.
    pub shards: u64,
    pub url: String,
}

/// How many more sessions the bot may start.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SessionStartLimit {
    /// Number of identify requests allowed per 5 seconds.
    pub max_concurrency: u64,
    pub remaining: u64,
    /// Milliseconds until the limit resets.
    pub reset_after: u64,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::{GatewayBotInfo, SessionStartLimit};
    use serde_json::json;

    #[test]
    fn gateway_bot_info() {
        let info: GatewayBotInfo = serde_json::from_value(json!({
            "url": "wss://gateway.discord.gg",
            "shards": 9,
            "session_start_limit": {
                "total": 1000,
                "remaining": 999,
                "reset_after": 14_400_000,
                "max_concurrency": 1,
            },
        }))
        .unwrap();

        assert_eq!(info.shards, 9);
        assert_eq!(
            info.session_start_limit,
            SessionStartLimit {
                max_concurrency: 1,
                remaining: 999,
                reset_after: 14_400_000,
                total: 1000,
            }
        );
    }
}
