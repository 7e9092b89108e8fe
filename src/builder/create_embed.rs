//! Developer note:
//!
//! This is a set of embed builders for rich embeds.
//!
//! The only builder that should be exposed is [`CreateEmbed`]. The rest of these have no real
//! reason for being exposed, but are for completeness' sake.
//!
//! Documentation for embeds can be found [here].
//!
//! [here]: https://discord.com/developers/docs/resources/channel#embed-object

/// A builder to create an embed in a message
///
/// [Discord docs](https://discord.com/developers/docs/resources/channel#embed-object)
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[must_use]
pub struct CreateEmbed {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(rename = "color")]
    #[serde(skip_serializing_if = "Option::is_none")]
    colour: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    footer: Option<CreateEmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<CreateEmbedImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<CreateEmbedAuthor>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    fields: Vec<CreateEmbedField>,
}

impl CreateEmbed {
    /// Equivalent to [`Self::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the author of the embed.
    ///
    /// Refer to the documentation for [`CreateEmbedAuthor`] for more information.
    pub fn author(mut self, author: CreateEmbedAuthor) -> Self {
        self.author = Some(author);
        self
    }

    /// Set the colour of the left-hand side of the embed, as `0xRRGGBB`.
    ///
    /// This is an alias of [`Self::colour`].
    pub fn color(self, colour: u32) -> Self {
        self.colour(colour)
    }

    /// Set the colour of the left-hand side of the embed, as `0xRRGGBB`.
    pub fn colour(mut self, colour: u32) -> Self {
        self.colour = Some(colour);
        self
    }

    /// Set the description of the embed.
    ///
    /// **Note**: This can't be longer than 4096 characters.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a field. Note that this will not overwrite other fields, and will add to them.
    ///
    /// **Note**: Maximum amount of characters you can put is 256 in a field name and 1024 in a
    /// field value.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(CreateEmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Set the footer of the embed.
    pub fn footer(mut self, footer: CreateEmbedFooter) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Set the image associated with the embed. This only supports HTTP(S), or an
    /// `attachment://filename` reference to a file sent with the same message.
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(CreateEmbedImage {
            url: url.into(),
        });
        self
    }

    /// Set the title of the embed.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the URL to direct to when clicking on the title.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A builder to create the author data of an emebd. See [`CreateEmbed::author`]
#[derive(Clone, Debug, Serialize, PartialEq)]
#[must_use]
pub struct CreateEmbedAuthor {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_url: Option<String>,
}

impl CreateEmbedAuthor {
    /// Creates an author object with the given name, leaving all other fields empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon_url: None,
            url: None,
        }
    }

    /// Set the URL of the author's icon.
    pub fn icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    /// Set the author's URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A builder to create the footer data for an embed. See [`CreateEmbed::footer`]
#[derive(Clone, Debug, Serialize, PartialEq)]
#[must_use]
pub struct CreateEmbedFooter {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_url: Option<String>,
}

impl CreateEmbedFooter {
    /// Creates a new footer object with the given text, leaving all other fields empty.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon_url: None,
        }
    }

    /// Set the icon URL's value. This only supports HTTP(S).
    pub fn icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
struct CreateEmbedImage {
    url: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
struct CreateEmbedField {
    name: String,
    value: String,
    inline: bool,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_embed_serialization() {
        let embed = CreateEmbed::new()
            .colour(0xFB05EF)
            .author(CreateEmbedAuthor::new("Author name").icon_url(""))
            .title("Title")
            .url("https://example.com")
            .description("Description");

        assert_eq!(
            serde_json::to_value(&embed).unwrap(),
            json!({
                "color": 0xFB05EF,
                "author": {"name": "Author name", "icon_url": ""},
                "title": "Title",
                "url": "https://example.com",
                "description": "Description",
            })
        );
    }

    #[test]
    fn test_empty_embed_is_empty_object() {
        assert_eq!(serde_json::to_value(CreateEmbed::new()).unwrap(), json!({}));
    }

    #[test]
    fn test_fields_keep_order() {
        let embed = CreateEmbed::new().field("a", "b", false).field("c", "z", true);

        assert_eq!(
            serde_json::to_value(&embed).unwrap(),
            json!({"fields": [
                {"name": "a", "value": "b", "inline": false},
                {"name": "c", "value": "z", "inline": true},
            ]})
        );
    }
}
