//! Interactions: command invocations, component clicks, autocomplete
//! requests, and modal submits.
//!
//! An incoming interaction is narrowed in two steps. [`Interaction`] is
//! selected by the envelope's `type`. Within the message component branch,
//! [`MessageComponentInteractionData`] is selected again by the data's
//! `component_type`, so a button click never carries select menu values.
//!
//! Every interaction is invoked either in a guild, carrying `member` and
//! `guild_id`, or in a DM, carrying `user`. [`BaseInteraction::into_context`]
//! validates that and produces a [`GuildInteraction`] or a [`DmInteraction`].
//!
//! <https://discord.com/developers/docs/interactions/receiving-and-responding>

pub mod application_command;
pub mod base;
pub mod message_component;
pub mod modal;
pub mod responses;

pub use self::{
    application_command::{
        CommandData, CommandDataOption, CommandOptionType, CommandOptionValue, CommandType,
        InteractionDataResolved,
    },
    base::{
        ApplicationCommandInteraction, AutocompleteInteraction, BaseInteraction, DmInteraction,
        GuildInteraction, Interaction, InteractionContext, InteractionContextError,
        InteractionContextErrorType, InteractionGuildMember, MessageComponentInteraction,
        ModalSubmitInteraction, PingInteraction,
    },
    message_component::{
        ButtonInteractionData, MessageComponentInteractionData, SelectMenuInteractionData,
    },
    modal::ModalInteractionData,
    responses::{InteractionResponse, InteractionResponseData, InteractionResponseType},
};

use crate::util::integer_enum;

integer_enum! {
    /// <https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-interaction-type>
    pub enum InteractionType {
        Ping = 1,
        ApplicationCommand = 2,
        MessageComponent = 3,
        ApplicationCommandAutocomplete = 4,
        ModalSubmit = 5,
    }
}
