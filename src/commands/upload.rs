use async_trait::async_trait;
use tracing::warn;

use super::{example_buttons, example_embed};
use crate::builder::{deferred_update, CreateAttachment, FollowupOptions};
use crate::dispatch::{CommandHandler, Context, Outcome};

/// The image the upload commands attach.
pub const DEFAULT_IMAGE_URL: &str =
    "https://i.kym-cdn.com/photos/images/newsfeed/001/564/945/0cd.png";

const FILENAME: &str = "filename.png";

async fn download(ctx: &Context, url: &str) -> Option<CreateAttachment> {
    match CreateAttachment::url(&*ctx.http, url, FILENAME).await {
        Ok(attachment) => Some(attachment),
        Err(why) => {
            warn!("Could not download {}: {}", url, why);
            None
        },
    }
}

/// `/files`: defers, downloads an image and posts it as the follow-up.
pub struct UploadFile {
    image_url: String,
}

impl UploadFile {
    #[must_use]
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
        }
    }
}

#[async_trait]
impl CommandHandler for UploadFile {
    fn name(&self) -> &str {
        "files"
    }

    async fn invoke(&self, ctx: Context) -> Outcome {
        let url = self.image_url.clone();

        Outcome::deferred(async move {
            let Some(file) = download(&ctx, &url).await else {
                return;
            };

            let followup = deferred_update("Bot message", FollowupOptions {
                attachments: vec![file],
                ..Default::default()
            });
            ctx.http.create_followup_message(&ctx.followup_target(), followup).await;
        })
    }
}

/// `/combined`: like `/files`, with the example embed and link button on the same message.
pub struct Combined {
    image_url: String,
}

impl Combined {
    #[must_use]
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
        }
    }
}

#[async_trait]
impl CommandHandler for Combined {
    fn name(&self) -> &str {
        "combined"
    }

    async fn invoke(&self, ctx: Context) -> Outcome {
        let url = self.image_url.clone();

        Outcome::deferred(async move {
            let Some(file) = download(&ctx, &url).await else {
                return;
            };

            let followup = deferred_update("Bot message", FollowupOptions {
                embeds: Some(vec![example_embed()]),
                components: Some(example_buttons()),
                attachments: vec![file],
            });
            ctx.http.create_followup_message(&ctx.followup_target(), followup).await;
        })
    }
}
