use crate::model::prelude::*;

/// A builder for creating a components action row in a message.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/message-components#component-object).
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum CreateActionRow {
    Buttons(Vec<CreateButton>),
}

impl CreateActionRow {
    pub fn buttons(buttons: impl Into<Vec<CreateButton>>) -> Self {
        Self::Buttons(buttons.into())
    }
}

impl serde::Serialize for CreateActionRow {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap as _;

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", &ComponentType::ActionRow)?;

        match self {
            CreateActionRow::Buttons(buttons) => map.serialize_entry("components", &buttons)?,
        }

        map.end()
    }
}

/// A builder for creating a button component in a message
#[derive(Clone, Debug, Serialize, PartialEq)]
#[must_use]
pub struct CreateButton {
    style: ButtonStyle,
    #[serde(rename = "type")]
    kind: ComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default)]
    disabled: bool,
}

impl CreateButton {
    /// Creates a link button to the given URL. You must also set [`Self::label`] after this.
    ///
    /// Clicking this button _will not_ trigger an interaction event in your bot.
    pub fn new_link(url: impl Into<String>) -> Self {
        Self {
            style: ButtonStyle::Link,
            kind: ComponentType::Button,
            url: Some(url.into()),
            custom_id: None,
            label: None,
            disabled: false,
        }
    }

    /// Creates a normal button with the given custom ID. You must also set [`Self::label`] after
    /// this.
    pub fn new(custom_id: impl Into<String>) -> Self {
        Self {
            style: ButtonStyle::Primary,
            kind: ComponentType::Button,
            url: None,
            custom_id: Some(custom_id.into()),
            label: None,
            disabled: false,
        }
    }

    /// Sets the style of this button.
    ///
    /// Has no effect on link buttons.
    pub fn style(mut self, new_style: ButtonStyle) -> Self {
        if self.url.is_none() {
            self.style = new_style;
        }
        self
    }

    /// Sets label of the button.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the disabled state for the button.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_link_button_row() {
        let row = CreateActionRow::buttons(vec![
            CreateButton::new_link("https://example.com").label("Open Browser"),
        ]);

        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!({
                "type": 1,
                "components": [{
                    "type": 2,
                    "style": 5,
                    "label": "Open Browser",
                    "url": "https://example.com",
                    "disabled": false,
                }],
            })
        );
    }

    #[test]
    fn test_link_button_ignores_style() {
        let button = CreateButton::new_link("https://example.com").style(ButtonStyle::Danger);
        assert_eq!(serde_json::to_value(&button).unwrap()["style"], json!(5));

        let button = CreateButton::new("id").style(ButtonStyle::Danger);
        assert_eq!(serde_json::to_value(&button).unwrap()["style"], json!(4));
    }
}
