use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncReadExt;
use url::Url;

use crate::error::{Error, Result};
use crate::http::Http;

/// A file to upload alongside a message, sent as one `files[n]` part of a multipart request.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
#[must_use]
pub struct CreateAttachment {
    pub data: Vec<u8>,
    pub filename: String,
}

impl CreateAttachment {
    /// Builds an [`CreateAttachment`] from the raw attachment data.
    pub fn bytes(data: impl Into<Vec<u8>>, filename: impl Into<String>) -> CreateAttachment {
        CreateAttachment {
            data: data.into(),
            filename: filename.into(),
        }
    }

    /// Builds an [`CreateAttachment`] by reading a local file.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if reading the file fails.
    pub async fn path(path: impl AsRef<Path>) -> Result<CreateAttachment> {
        let mut file = File::open(path.as_ref()).await?;
        let mut data = Vec::new();
        file.read_to_end(&mut data).await?;

        let filename = path.as_ref().file_name().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "attachment path must not be a directory")
        })?;

        Ok(CreateAttachment {
            data,
            filename: filename.to_string_lossy().to_string(),
        })
    }

    /// Builds an [`CreateAttachment`] by downloading attachment data from a URL, storing it under
    /// the given filename.
    ///
    /// # Errors
    ///
    /// [`Error::Url`] if the URL is invalid, [`Error::Http`] if downloading the data fails or the
    /// server answers with a non-success status.
    pub async fn url(
        http: impl AsRef<Http>,
        url: &str,
        filename: impl Into<String>,
    ) -> Result<CreateAttachment> {
        let url = Url::parse(url).map_err(|_| Error::Url(url.to_string()))?;

        let response = http.as_ref().client.get(url).send().await?.error_for_status()?;
        let data = response.bytes().await?.to_vec();

        Ok(CreateAttachment {
            data,
            filename: filename.into(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_path_uses_file_name() {
        let dir = std::env::temp_dir().join(format!("herald-attachment-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("filename.png");
        tokio::fs::write(&path, b"\x89PNG").await.unwrap();

        let attachment = CreateAttachment::path(&path).await.unwrap();
        assert_eq!(attachment.filename, "filename.png");
        assert_eq!(attachment.data, b"\x89PNG");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_url_rejects_garbage() {
        let http = Http::new("https://discord.com/api/v10", None).unwrap();
        let err = CreateAttachment::url(&http, "not a url", "a.png").await.unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }
}
