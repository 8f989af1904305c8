use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{
    reaction::{FavoriteDto, ReactionSummaryDto},
    user::UserDto,
    validation::{ValidationError, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN},
};

/// How a game is played from its detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Rendered inside an embedded frame
    Embed,
    /// Opened on another site
    Link,
    /// Downloaded and run locally
    Download,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Embed => "embed",
            Self::Link => "link",
            Self::Download => "download",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "embed" => Some(Self::Embed),
            "link" => Some(Self::Link),
            "download" => Some(Self::Download),
            _ => None,
        }
    }
}

/// Frame source for Scratch projects, which need the TurboWarp player.
pub const SCRATCH_EMBED_URL: &str = "https://turbowarp.org/embed?project_url=";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GameDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub media_kind: MediaKind,
    pub media_url: Option<String>,
    pub owner_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl GameDto {
    /// Whether `viewer` may edit or delete this game.
    ///
    /// Anonymous viewers never own a game.
    pub fn is_owned_by(&self, viewer: Option<&UserDto>) -> bool {
        viewer.is_some_and(|user| user.id == self.owner_id)
    }

    /// Case-insensitive match of `query` against the title or description.
    ///
    /// A blank query matches every game.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();

        query.is_empty()
            || self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }

    /// Source for the play frame of an embeddable game.
    pub fn embed_src(&self) -> Option<String> {
        if self.media_kind != MediaKind::Embed {
            return None;
        }

        let url = self.media_url.as_deref()?;

        if url.to_ascii_lowercase().ends_with(".sb3") {
            Some(format!("{SCRATCH_EMBED_URL}{url}"))
        } else {
            Some(url.to_string())
        }
    }
}

/// Trim a game's title and description, rejecting a blank title or oversized text.
pub fn validate_game_text(
    title: &str,
    description: &str,
) -> Result<(String, String), ValidationError> {
    let title = title.trim();
    let description = description.trim();

    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong(MAX_TITLE_LEN));
    }

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong(MAX_DESCRIPTION_LEN));
    }

    Ok((title.to_string(), description.to_string()))
}

/// A game together with its reaction totals and the viewer's favorite state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GameDetailDto {
    pub game: GameDto,
    pub reactions: ReactionSummaryDto,
    pub favorite: FavoriteDto,
}
