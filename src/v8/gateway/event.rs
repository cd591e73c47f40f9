//! Gateway event envelope and typed events.
//!
//! Every message on the gateway socket is a [`GatewayPayload`]: an opcode, a
//! payload, and for dispatches a sequence number and event name.
//! [`GatewayEvent::from_payload`] turns the envelope into a typed event so
//! consumers match on shapes instead of `(op, t, d)` tuples.
//!
//! Framing, compression, and the connection itself are left to the client.

use crate::{
    id::{
        marker::{ApplicationMarker, GuildMarker},
        Id,
    },
    util::integer_enum,
    v8::{
        channel::message::Message, gateway::presence::PresenceUpdate, interactions::Interaction,
        user::User,
    },
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Raw gateway envelope.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GatewayPayload {
    pub op: OpCode,
    /// Event data.
    pub d: Option<Value>,
    /// Sequence number, only for [`OpCode::Dispatch`].
    pub s: Option<u64>,
    /// Event name, only for [`OpCode::Dispatch`].
    pub t: Option<String>,
}

integer_enum! {
    /// <https://discord.com/developers/docs/topics/opcodes-and-status-codes#gateway-gateway-opcodes>
    pub enum OpCode {
        /// Receive: an event was dispatched.
        Dispatch = 0,
        /// Send or receive: keep the connection alive.
        Heartbeat = 1,
        /// Send: start a new session.
        Identify = 2,
        /// Send: update the client's presence.
        PresenceUpdate = 3,
        /// Send: join, move between, or leave voice channels.
        VoiceStateUpdate = 4,
        /// Send: resume a previous session.
        Resume = 6,
        /// Receive: reconnect and resume immediately.
        Reconnect = 7,
        /// Send: request guild members.
        RequestGuildMembers = 8,
        /// Receive: the session was invalidated.
        InvalidSession = 9,
        /// Receive: sent immediately after connecting.
        Hello = 10,
        /// Receive: a heartbeat was received.
        HeartbeatAck = 11,
    }
}

/// Data of [`OpCode::Hello`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Hello {
    /// Milliseconds between heartbeats.
    pub heartbeat_interval: u64,
}

/// Data of the `READY` dispatch.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Ready {
    pub application: ReadyApplication,
    /// Guilds the user is in, all initially unavailable.
    pub guilds: Vec<UnavailableGuild>,
    pub session_id: String,
    /// Shard ID and total shard count, if sharding was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shard: Option<[u64; 2]>,
    pub user: User,
    /// Gateway version.
    pub v: u8,
}

/// Partial application in [`Ready`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ReadyApplication {
    pub flags: u64,
    pub id: Id<ApplicationMarker>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct UnavailableGuild {
    pub id: Id<GuildMarker>,
    pub unavailable: bool,
}

/// Typed event received from the gateway.
#[derive(Clone, Debug, PartialEq)]
pub enum GatewayEvent {
    /// Event dispatched with the given sequence number.
    Dispatch(u64, DispatchEvent),
    /// The gateway requests a heartbeat immediately.
    Heartbeat,
    HeartbeatAck,
    Hello(Hello),
    /// The session was invalidated; the flag tells whether it is resumable.
    InvalidSession(bool),
    Reconnect,
    /// Envelope that could not be typed, kept as received.
    Unknown(GatewayPayload),
}

/// Typed dispatch event, selected by the envelope's event name.
#[derive(Clone, Debug, PartialEq)]
pub enum DispatchEvent {
    InteractionCreate(Box<Interaction>),
    MessageCreate(Box<Message>),
    PresenceUpdate(Box<PresenceUpdate>),
    Ready(Box<Ready>),
    /// Dispatch of an unknown name, or whose data didn't match its shape.
    Unknown { name: String, data: Value },
}

impl DispatchEvent {
    /// Parse dispatch data by event name.
    ///
    /// Never fails: names the library doesn't know, and data that doesn't
    /// match the named shape, become [`DispatchEvent::Unknown`].
    pub fn from_parts(name: &str, data: Value) -> Self {
        match name {
            "INTERACTION_CREATE" => parse(name, data, Self::InteractionCreate),
            "MESSAGE_CREATE" => parse(name, data, Self::MessageCreate),
            "PRESENCE_UPDATE" => parse(name, data, Self::PresenceUpdate),
            "READY" => parse(name, data, Self::Ready),
            _ => {
                debug!(event = name, "unknown dispatch event");

                Self::Unknown {
                    name: name.to_owned(),
                    data,
                }
            }
        }
    }

    /// Name of the event, such as `MESSAGE_CREATE`.
    pub fn name(&self) -> &str {
        match self {
            Self::InteractionCreate(_) => "INTERACTION_CREATE",
            Self::MessageCreate(_) => "MESSAGE_CREATE",
            Self::PresenceUpdate(_) => "PRESENCE_UPDATE",
            Self::Ready(_) => "READY",
            Self::Unknown { name, .. } => name,
        }
    }
}

fn parse<T: DeserializeOwned>(
    name: &str,
    data: Value,
    wrap: impl FnOnce(Box<T>) -> DispatchEvent,
) -> DispatchEvent {
    match serde_json::from_value::<T>(data.clone()) {
        Ok(parsed) => wrap(Box::new(parsed)),
        Err(source) => {
            warn!(event = name, error = %source, "failed to parse dispatch payload");

            DispatchEvent::Unknown {
                name: name.to_owned(),
                data,
            }
        }
    }
}

impl GatewayEvent {
    /// Type a raw envelope.
    ///
    /// Never fails: envelopes missing the fields their opcode requires become
    /// [`GatewayEvent::Unknown`].
    pub fn from_payload(payload: GatewayPayload) -> Self {
        match payload.op {
            OpCode::Dispatch => {
                let (Some(sequence), Some(name)) = (payload.s, payload.t.clone()) else {
                    return Self::Unknown(payload);
                };
                let data = payload.d.unwrap_or(Value::Null);

                Self::Dispatch(sequence, DispatchEvent::from_parts(&name, data))
            }
            OpCode::Heartbeat => Self::Heartbeat,
            OpCode::HeartbeatAck => Self::HeartbeatAck,
            OpCode::Hello => match payload.d.clone().map(serde_json::from_value::<Hello>) {
                Some(Ok(hello)) => Self::Hello(hello),
                Some(Err(source)) => {
                    warn!(error = %source, "failed to parse hello payload");

                    Self::Unknown(payload)
                }
                None => Self::Unknown(payload),
            },
            OpCode::InvalidSession => {
                Self::InvalidSession(payload.d.as_ref().and_then(Value::as_bool).unwrap_or(false))
            }
            OpCode::Reconnect => Self::Reconnect,
            _ => Self::Unknown(payload),
        }
    }
}
