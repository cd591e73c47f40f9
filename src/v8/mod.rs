//! Payloads of Discord API v8.

pub mod audit_log;
pub mod channel;
pub mod emoji;
pub mod gateway;
pub mod guild;
pub mod guild_scheduled_event;
pub mod interactions;
pub mod permissions;
pub mod stage_instance;
pub mod sticker;
pub mod user;
pub mod webhook;

/// Version of the API these payloads belong to.
pub const API_VERSION: u8 = 8;
