//! Payloads of Discord API v9.
//!
//! Shapes v9 did not change are the v8 shapes themselves, so a fix in v8
//! reaches v9 exactly where the versions agree. [`channel`] and
//! [`audit_log`] extend their v8 counterparts with threads.

pub mod audit_log;
pub mod channel;

pub use crate::v8::{
    emoji, gateway, guild, guild_scheduled_event, interactions, permissions, stage_instance,
    sticker, user, webhook,
};

/// Version of the API these payloads belong to.
pub const API_VERSION: u8 = 9;
