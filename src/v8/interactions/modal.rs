//! Data of modal submit interactions.

use crate::v8::channel::component::ComponentType;
use serde::{Deserialize, Serialize};

/// Values the user entered into a modal.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ModalInteractionData {
    pub components: Vec<ModalInteractionDataActionRow>,
    /// Developer defined ID of the modal.
    pub custom_id: String,
}

impl ModalInteractionData {
    /// Submitted value of the text input with the given ID.
    pub fn value(&self, custom_id: &str) -> Option<&str> {
        self.components
            .iter()
            .flat_map(|row| &row.components)
            .find(|component| component.custom_id == custom_id)
            .map(|component| component.value.as_str())
    }
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ModalInteractionDataActionRow {
    pub components: Vec<ModalInteractionDataComponent>,
    #[serde(rename = "type")]
    pub kind: ComponentType,
}

/// Submitted text input.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ModalInteractionDataComponent {
    pub custom_id: String,
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::ModalInteractionData;
    use crate::v8::channel::component::ComponentType;
    use serde_json::json;

    #[test]
    fn submitted_values() {
        let value = json!({
            "custom_id": "report",
            "components": [
                {"type": 1, "components": [{"type": 4, "custom_id": "reason", "value": "spam"}]},
                {"type": 1, "components": [{"type": 4, "custom_id": "details", "value": ""}]},
            ],
        });
        let data: ModalInteractionData = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(data.components[0].kind, ComponentType::ActionRow);
        assert_eq!(data.value("reason"), Some("spam"));
        assert_eq!(data.value("details"), Some(""));
        assert_eq!(data.value("missing"), None);
        assert_eq!(serde_json::to_value(&data).unwrap(), value);
    }
}
