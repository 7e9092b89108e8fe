use reqwest::multipart::{Form, Part};

use crate::builder::CreateAttachment;
use crate::internal::prelude::*;

/// Holder for multipart body. Contains files and the `payload_json` for creating requests with
/// attachments.
#[derive(Clone, Debug, PartialEq)]
pub struct Multipart {
    pub files: Vec<CreateAttachment>,
    /// JSON body, already stringified, that is sent as the `payload_json` form value.
    pub payload_json: String,
}

/// One named part of a multipart body.
#[derive(Clone, Debug, PartialEq)]
pub struct FormPart<'a> {
    pub name: String,
    pub filename: Option<&'a str>,
    pub content_type: Option<String>,
    pub data: &'a [u8],
}

impl Multipart {
    /// The parts in the order they are sent: `files[0]` through `files[n]`, then `payload_json`.
    #[must_use]
    pub fn parts(&self) -> Vec<FormPart<'_>> {
        let mut parts = Vec::with_capacity(self.files.len() + 1);

        for (file_num, file) in self.files.iter().enumerate() {
            // This is required for certain endpoints, otherwise the Discord API will respond with
            // a 500 Internal Server Error. The mime type chosen is the same as what reqwest does
            // internally when using Part::file().
            // https://datatracker.ietf.org/doc/html/rfc7578#section-4.4
            let mime_type = mime_guess::from_path(&file.filename).first_or_octet_stream();

            parts.push(FormPart {
                name: format!("files[{file_num}]"),
                filename: Some(&file.filename),
                content_type: Some(mime_type.essence_str().to_string()),
                data: &file.data,
            });
        }

        parts.push(FormPart {
            name: "payload_json".to_string(),
            filename: None,
            content_type: None,
            data: self.payload_json.as_bytes(),
        });

        parts
    }

    pub(crate) fn build_form(&self) -> Result<Form> {
        let mut multipart = Form::new();

        for part in self.parts() {
            let mut form_part = Part::bytes(part.data.to_vec());
            if let Some(filename) = part.filename {
                form_part = form_part.file_name(filename.to_string());
            }
            if let Some(content_type) = &part.content_type {
                form_part = form_part.mime_str(content_type)?;
            }
            multipart = multipart.part(part.name, form_part);
        }

        Ok(multipart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_come_first_in_order() {
        let multipart = Multipart {
            files: vec![
                CreateAttachment::bytes(vec![1], "filename.png"),
                CreateAttachment::bytes(vec![2], "notes.txt"),
            ],
            payload_json: r#"{"content":"Bot message"}"#.to_string(),
        };

        let parts = multipart.parts();
        let names: Vec<_> = parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["files[0]", "files[1]", "payload_json"]);

        assert_eq!(parts[0].filename, Some("filename.png"));
        assert_eq!(parts[0].content_type.as_deref(), Some("image/png"));
        assert_eq!(parts[0].data, [1]);
        assert_eq!(parts[1].content_type.as_deref(), Some("text/plain"));
        assert_eq!(parts[2].filename, None);
        assert_eq!(parts[2].data, br#"{"content":"Bot message"}"#);
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        let multipart = Multipart {
            files: vec![CreateAttachment::bytes(vec![0], "blob")],
            payload_json: "{}".to_string(),
        };

        assert_eq!(multipart.parts()[0].content_type.as_deref(), Some("application/octet-stream"));
        assert!(multipart.build_form().is_ok());
    }
}
