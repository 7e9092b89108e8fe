use async_trait::async_trait;

use super::{example_buttons, example_embed, get_random, EMBED_COLOUR};
use crate::builder::{reply, CreateEmbed, ReplyOptions};
use crate::dispatch::{CommandHandler, Context, Outcome};

/// `/string text:<..>`: echoes the text back.
pub struct Text;

#[async_trait]
impl CommandHandler for Text {
    fn name(&self) -> &str {
        "string"
    }

    async fn invoke(&self, ctx: Context) -> Outcome {
        let text = ctx.get_str("text").unwrap_or_default();
        reply(format!("Your string: {text}"), ReplyOptions::default()).into()
    }
}

/// `/number`: a random number between 0 and 100 for the invoking user.
pub struct Number;

#[async_trait]
impl CommandHandler for Number {
    fn name(&self) -> &str {
        "number"
    }

    async fn invoke(&self, ctx: Context) -> Outcome {
        let content = match ctx.actor() {
            Some(user) => format!("{}'s random number: {}", user.mention(), get_random(0, 100)),
            None => format!("Random number: {}", get_random(0, 100)),
        };
        reply(content, ReplyOptions::default()).into()
    }
}

/// `/embed`: a message with an example embed.
pub struct Embed;

#[async_trait]
impl CommandHandler for Embed {
    fn name(&self) -> &str {
        "embed"
    }

    async fn invoke(&self, _ctx: Context) -> Outcome {
        reply("Bot message", ReplyOptions {
            embeds: Some(vec![example_embed()]),
            ..Default::default()
        })
        .into()
    }
}

/// `/button`: a message with a link button.
pub struct Button;

#[async_trait]
impl CommandHandler for Button {
    fn name(&self) -> &str {
        "button"
    }

    async fn invoke(&self, _ctx: Context) -> Outcome {
        reply("Bot message", ReplyOptions {
            components: Some(example_buttons()),
            ..Default::default()
        })
        .into()
    }
}

/// `/ship user1:<..> user2:<..>`: a compatibility percentage and a ship name made of the first
/// three characters of one username and the last two of the other.
pub struct Ship;

#[async_trait]
impl CommandHandler for Ship {
    fn name(&self) -> &str {
        "ship"
    }

    async fn invoke(&self, ctx: Context) -> Outcome {
        let data = &ctx.interaction.data;
        let (Some(first), Some(second)) = (data.get_user("user1"), data.get_user("user2")) else {
            return reply("Pick two users to ship.", ReplyOptions::default()).into();
        };

        let description = format!(
            "\u{2764}\u{fe0f} | {} & {} are **{}%** compatible.\n\u{2764}\u{fe0f} | Ship name: \
             **{}**.",
            first.mention(),
            second.mention(),
            get_random(0, 100),
            ship_name(&first.name, &second.name),
        );

        reply("", ReplyOptions {
            embeds: Some(vec![CreateEmbed::new().colour(EMBED_COLOUR).description(description)]),
            ..Default::default()
        })
        .into()
    }
}

fn ship_name(first: &str, second: &str) -> String {
    let head = first.chars().take(3);
    let tail_len = second.chars().count().saturating_sub(2);
    head.chain(second.chars().skip(tail_len)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ship_names() {
        assert_eq!(ship_name("alice", "bob"), "aliob");
        assert_eq!(ship_name("al", "b"), "alb");
        assert_eq!(ship_name("\u{e9}mile", "zo\u{eb}"), "\u{e9}mio\u{eb}");
    }
}
