//! Markers for various resource types, such as channels or users.
//!
//! Markers themselves perform no logical action, and are only used to
//! ensure that IDs of incorrect types aren't used. If IDs were only 64-bit
//! integers then a role's ID may be erroneously used in the place of where
//! a user's ID is required; by using markers it can be ensured that only an
//! ID with a [`RoleMarker`] can be used where a role's ID is required.

/// Marker for application IDs.
///
/// Types such as [`BaseInteraction`] or [`Webhook`] use this ID marker.
///
/// [`BaseInteraction`]: crate::v8::interactions::BaseInteraction
/// [`Webhook`]: crate::v8::webhook::Webhook
#[derive(Debug)]
#[non_exhaustive]
pub struct ApplicationMarker;

/// Marker for attachment IDs.
///
/// Types such as [`Attachment`] use this ID marker.
///
/// [`Attachment`]: crate::v8::channel::message::Attachment
#[derive(Debug)]
#[non_exhaustive]
pub struct AttachmentMarker;

/// Marker for audit log entry IDs.
///
/// Types such as [`AuditLogEntry`] use this ID marker.
///
/// [`AuditLogEntry`]: crate::v8::audit_log::AuditLogEntry
#[derive(Debug)]
#[non_exhaustive]
pub struct AuditLogEntryMarker;

/// Marker for channel IDs.
///
/// Types such as [`Message`] or [`Webhook`] use this ID marker.
///
/// [`Message`]: crate::v8::channel::message::Message
/// [`Webhook`]: crate::v8::webhook::Webhook
#[derive(Debug)]
#[non_exhaustive]
pub struct ChannelMarker;

/// Marker for command IDs.
///
/// Types such as [`CommandData`] use this ID marker.
///
/// [`CommandData`]: crate::v8::interactions::application_command::CommandData
#[derive(Debug)]
#[non_exhaustive]
pub struct CommandMarker;

/// Marker for emoji IDs.
///
/// Types such as [`Emoji`] or [`ActivityEmoji`] use this ID marker.
///
/// [`Emoji`]: crate::v8::emoji::Emoji
/// [`ActivityEmoji`]: crate::v8::gateway::presence::ActivityEmoji
#[derive(Debug)]
#[non_exhaustive]
pub struct EmojiMarker;

/// Marker for generic IDs.
///
/// Types such as [`AuditLogEntry::target_id`] or [`Overwrite`] use this ID
/// marker, where the ID may refer to more than one kind of resource.
///
/// [`AuditLogEntry::target_id`]: crate::v8::audit_log::AuditLogEntry::target_id
/// [`Overwrite`]: crate::v8::channel::Overwrite
#[derive(Debug)]
#[non_exhaustive]
pub struct GenericMarker;

/// Marker for guild IDs.
///
/// Types such as [`PresenceUpdate`] or [`Message`] use this ID marker.
///
/// [`PresenceUpdate`]: crate::v8::gateway::presence::PresenceUpdate
/// [`Message`]: crate::v8::channel::message::Message
#[derive(Debug)]
#[non_exhaustive]
pub struct GuildMarker;

/// Marker for integration IDs.
///
/// Types such as [`GuildIntegration`] or [`RoleTags`] use this ID marker.
///
/// [`GuildIntegration`]: crate::v8::guild::GuildIntegration
/// [`RoleTags`]: crate::v8::permissions::RoleTags
#[derive(Debug)]
#[non_exhaustive]
pub struct IntegrationMarker;

/// Marker for interaction IDs.
///
/// Types such as [`BaseInteraction`] or [`MessageInteraction`] use this ID
/// marker.
///
/// [`BaseInteraction`]: crate::v8::interactions::BaseInteraction
/// [`MessageInteraction`]: crate::v8::channel::message::MessageInteraction
#[derive(Debug)]
#[non_exhaustive]
pub struct InteractionMarker;

/// Marker for message IDs.
///
/// Types such as [`Message`] or [`AuditLogOptions`] use this ID marker.
///
/// [`Message`]: crate::v8::channel::message::Message
/// [`AuditLogOptions`]: crate::v8::audit_log::AuditLogOptions
#[derive(Debug)]
#[non_exhaustive]
pub struct MessageMarker;

/// Marker for role IDs.
///
/// Types such as [`Member`] or [`Role`] use this ID marker.
///
/// [`Member`]: crate::v8::guild::Member
/// [`Role`]: crate::v8::permissions::Role
#[derive(Debug)]
#[non_exhaustive]
pub struct RoleMarker;

/// Marker for scheduled event IDs.
///
/// Types such as [`GuildScheduledEvent`] use this ID marker.
///
/// [`GuildScheduledEvent`]: crate::v8::guild_scheduled_event::GuildScheduledEvent
#[derive(Debug)]
#[non_exhaustive]
pub struct ScheduledEventMarker;

/// Marker for scheduled event entity IDs.
///
/// Types such as [`GuildScheduledEvent`] use this ID marker.
///
/// [`GuildScheduledEvent`]: crate::v8::guild_scheduled_event::GuildScheduledEvent
#[derive(Debug)]
#[non_exhaustive]
pub struct ScheduledEventEntityMarker;

/// Marker for stage IDs.
///
/// Types such as [`StageInstance`] use this ID marker.
///
/// [`StageInstance`]: crate::v8::stage_instance::StageInstance
#[derive(Debug)]
#[non_exhaustive]
pub struct StageMarker;

/// Marker for sticker IDs.
///
/// Types such as [`Sticker`] use this ID marker.
///
/// [`Sticker`]: crate::v8::sticker::Sticker
#[derive(Debug)]
#[non_exhaustive]
pub struct StickerMarker;

/// Marker for sticker pack IDs.
///
/// Types such as [`Sticker`] use this ID marker.
///
/// [`Sticker`]: crate::v8::sticker::Sticker
#[derive(Debug)]
#[non_exhaustive]
pub struct StickerPackMarker;

/// Marker for user IDs.
///
/// Types such as [`PartialUser`] or [`User`] use this ID marker.
///
/// [`PartialUser`]: crate::v8::user::PartialUser
/// [`User`]: crate::v8::user::User
#[derive(Debug)]
#[non_exhaustive]
pub struct UserMarker;

/// Marker for webhook IDs.
///
/// Types such as [`Webhook`] use this ID marker.
///
/// [`Webhook`]: crate::v8::webhook::Webhook
#[derive(Debug)]
#[non_exhaustive]
pub struct WebhookMarker;
