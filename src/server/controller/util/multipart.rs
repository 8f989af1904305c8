use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
};

use crate::{
    model::{game::MediaKind, validation::ValidationError},
    server::{
        error::Error,
        model::upload::{GameEdit, GameUpload, UploadedFile},
    },
};

/// Parts of a multipart form, collected by field name.
#[derive(Default)]
struct FormParts {
    title: Option<String>,
    description: Option<String>,
    media_kind: Option<String>,
    media_url: Option<String>,
    file: Option<UploadedFile>,
    thumbnail: Option<UploadedFile>,
}

fn invalid_field(err: MultipartError) -> Error {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ValidationError::UploadTooLarge.into();
    }

    ValidationError::InvalidField(err.body_text()).into()
}

async fn collect(mut multipart: Multipart) -> Result<FormParts, Error> {
    let mut parts = FormParts::default();

    while let Some(field) = multipart.next_field().await.map_err(invalid_field)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "file" | "thumbnail" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(invalid_field)?;

                // Browsers send an empty part for file inputs left blank
                if file_name.is_empty() || data.is_empty() {
                    continue;
                }

                let file = UploadedFile {
                    file_name,
                    data: data.to_vec(),
                };
                if name == "file" {
                    parts.file = Some(file);
                } else {
                    parts.thumbnail = Some(file);
                }
            }
            "title" | "description" | "media_kind" | "media_url" => {
                let value = field.text().await.map_err(invalid_field)?;
                let slot = match name.as_str() {
                    "title" => &mut parts.title,
                    "description" => &mut parts.description,
                    "media_kind" => &mut parts.media_kind,
                    _ => &mut parts.media_url,
                };
                *slot = Some(value);
            }
            _ => {}
        }
    }

    Ok(parts)
}

/// Parse the upload form.
pub async fn parse_game_upload(multipart: Multipart) -> Result<GameUpload, Error> {
    let parts = collect(multipart).await?;

    let media_kind = match parts.media_kind.as_deref() {
        Some(kind) => MediaKind::parse(kind)
            .ok_or_else(|| ValidationError::InvalidField("media_kind".to_string()))?,
        None => MediaKind::Embed,
    };

    Ok(GameUpload {
        title: parts.title.unwrap_or_default(),
        description: parts.description.unwrap_or_default(),
        media_kind,
        media_url: parts.media_url.filter(|url| !url.trim().is_empty()),
        file: parts.file,
        thumbnail: parts.thumbnail,
    })
}

/// Parse the edit form.
pub async fn parse_game_edit(multipart: Multipart) -> Result<GameEdit, Error> {
    let parts = collect(multipart).await?;

    Ok(GameEdit {
        title: parts.title.unwrap_or_default(),
        description: parts.description.unwrap_or_default(),
        thumbnail: parts.thumbnail,
    })
}
