#![cfg(feature = "v9")]

use discord_payloads::{
    id::Id,
    v9::{
        interactions::{
            ApplicationCommandInteraction, AutocompleteInteraction, CommandData,
            CommandOptionType, CommandOptionValue, DmInteraction, GuildInteraction, Interaction,
            InteractionContext, InteractionGuildMember, InteractionResponse,
            InteractionResponseData, InteractionType, MessageComponentInteraction,
            MessageComponentInteractionData, ModalSubmitInteraction,
        },
        user::User,
    },
};
use serde_json::{json, Value};

fn envelope(kind: u8, data: Value, invoker: (&str, Value)) -> Value {
    let mut value = json!({
        "id": "846462639134605312",
        "application_id": "760535315337429015",
        "type": kind,
        "token": "aW50ZXJhY3Rpb246ODQ2NDYyNjM5MTM0NjA1MzEy",
        "version": 1,
        "locale": "en-GB",
        "channel_id": "760535314799247361",
        "data": data,
    });
    value[invoker.0] = invoker.1;

    value
}

fn user() -> Value {
    json!({
        "id": "53908232506183680",
        "username": "Mason",
        "discriminator": "0001",
        "avatar": "a_d5efa99b3eeaa7dd43acca82f5692432",
        "public_flags": 131_141,
    })
}

fn member() -> Value {
    json!({
        "user": user(),
        "roles": ["539082325061836999"],
        "premium_since": null,
        "permissions": "2147483647",
        "pending": false,
        "nick": null,
        "mute": false,
        "joined_at": "2017-03-13T19:19:14.040000+00:00",
        "deaf": false,
    })
}

#[test]
fn command_narrows_to_command_data() {
    let value = envelope(
        2,
        json!({"id": "771825006014889984", "name": "blep", "type": 1}),
        ("user", user()),
    );
    let interaction: Interaction = serde_json::from_value(value).unwrap();

    assert_eq!(interaction.kind(), InteractionType::ApplicationCommand);

    match interaction {
        Interaction::ApplicationCommand(command) => {
            let command: ApplicationCommandInteraction = *command;
            let data: CommandData = command.data;
            assert_eq!(data.id, Id::new(771_825_006_014_889_984));
            assert_eq!(data.name, "blep");
        }
        other => panic!("expected an application command, got {other:?}"),
    }
}

#[test]
fn component_narrows_twice() {
    let button = envelope(
        3,
        json!({"component_type": 2, "custom_id": "click_one"}),
        ("user", user()),
    );
    let menu = envelope(
        3,
        json!({"component_type": 3, "custom_id": "class_select_1", "values": ["mage", "rogue"]}),
        ("user", user()),
    );

    for (value, expected) in [(button, None), (menu, Some(vec!["mage", "rogue"]))] {
        let interaction: Interaction = serde_json::from_value(value).unwrap();
        let Interaction::MessageComponent(component) = interaction else {
            panic!("expected a message component interaction");
        };
        let component: MessageComponentInteraction = *component;

        let values = match &component.data {
            MessageComponentInteractionData::Button(_) => None,
            MessageComponentInteractionData::SelectMenu(menu) => {
                Some(menu.values.iter().map(String::as_str).collect::<Vec<_>>())
            }
            MessageComponentInteractionData::Unknown(data) => {
                panic!("unexpected component data {data}")
            }
        };
        assert_eq!(values, expected);
    }
}

#[test]
fn autocomplete_narrows_to_focused_option() {
    let value = envelope(
        4,
        json!({
            "id": "771825006014889984",
            "name": "adopt",
            "type": 1,
            "options": [{"name": "breed", "type": 3, "value": "shi", "focused": true}],
        }),
        ("user", user()),
    );
    let interaction: Interaction = serde_json::from_value(value).unwrap();

    assert_eq!(interaction.kind(), InteractionType::ApplicationCommandAutocomplete);

    let Interaction::ApplicationCommandAutocomplete(autocomplete) = interaction else {
        panic!("expected an autocomplete interaction");
    };
    let autocomplete: AutocompleteInteraction = *autocomplete;
    let option = &autocomplete.data.options[0];

    assert_eq!(option.name, "breed");
    assert_eq!(
        option.value,
        CommandOptionValue::Focused("shi".to_owned(), CommandOptionType::String)
    );
}

#[test]
fn modal_submit_narrows_to_modal_data() {
    let value = envelope(
        5,
        json!({
            "custom_id": "feedback",
            "components": [{
                "type": 1,
                "components": [{"type": 4, "custom_id": "x", "value": "more cats"}],
            }],
        }),
        ("user", user()),
    );
    let interaction: Interaction = serde_json::from_value(value).unwrap();

    assert_eq!(interaction.kind(), InteractionType::ModalSubmit);

    let Interaction::ModalSubmit(modal) = interaction else {
        panic!("expected a modal submit interaction");
    };
    let modal: ModalSubmitInteraction = *modal;

    assert_eq!(modal.data.custom_id, "feedback");
    assert_eq!(modal.data.value("x"), Some("more cats"));
}

#[test]
fn dm_interaction_has_user() {
    let value = envelope(
        2,
        json!({"id": "1", "name": "blep", "type": 1}),
        ("user", user()),
    );
    let dm: DmInteraction<CommandData> = serde_json::from_value(value).unwrap();
    let user: &User = &dm.user;

    assert_eq!(user.id, Id::new(53_908_232_506_183_680));
}

#[test]
fn guild_interaction_has_member() {
    let mut value = envelope(
        2,
        json!({"id": "1", "name": "blep", "type": 1}),
        ("member", member()),
    );
    value["guild_id"] = json!("290926798626357999");
    value["guild_locale"] = json!("de");

    let guild: GuildInteraction<CommandData> = serde_json::from_value(value.clone()).unwrap();
    let member: &InteractionGuildMember = &guild.member;
    assert_eq!(member.user.name, "Mason");
    assert_eq!(guild.guild_locale.as_deref(), Some("de"));

    let interaction: Interaction = serde_json::from_value(value).unwrap();
    let Interaction::ApplicationCommand(command) = interaction else {
        panic!("expected an application command");
    };
    match command.into_context().unwrap() {
        InteractionContext::Guild(guild) => {
            assert_eq!(guild.guild_id, Id::new(290_926_798_626_357_999));
        }
        InteractionContext::Dm(_) => panic!("expected a guild interaction"),
    }
}

#[test]
fn guild_interaction_rejects_dm_payload() {
    let value = envelope(
        2,
        json!({"id": "1", "name": "blep", "type": 1}),
        ("user", user()),
    );

    assert!(serde_json::from_value::<GuildInteraction<CommandData>>(value).is_err());
}

#[test]
fn respond_to_interaction() {
    let response = InteractionResponse::message(InteractionResponseData::new().content("blep"));

    assert_eq!(
        serde_json::to_value(response).unwrap(),
        json!({"type": 4, "data": {"content": "blep"}})
    );
}
