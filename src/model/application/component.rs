use serde::{Deserialize, Serialize};

enum_number! {
    /// The type of a component
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/message-components#component-object-component-types).
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
    #[serde(from = "u8", into = "u8")]
    #[non_exhaustive]
    pub enum ComponentType {
        ActionRow = 1,
        Button = 2,
        StringSelect = 3,
        InputText = 4,
        _ => Unknown(u8),
    }
}

enum_number! {
    /// The style of a button.
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/message-components#button-object-button-styles).
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
    #[serde(from = "u8", into = "u8")]
    #[non_exhaustive]
    pub enum ButtonStyle {
        Primary = 1,
        Secondary = 2,
        Success = 3,
        Danger = 4,
        Link = 5,
        _ => Unknown(u8),
    }
}
