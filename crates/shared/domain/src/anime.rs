//! Anime domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::{ANIME_NAME_EMPTY_MESSAGE, MIN_ANIME_NAME_LENGTH};
use crate::error::{DomainError, DomainResult};

/// Database-assigned anime identifier
pub type AnimeId = i32;

/// Anime domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Anime {
    /// Unique anime identifier
    #[cfg_attr(feature = "openapi", schema(value_type = i32, example = 1))]
    pub id: AnimeId,
    /// Anime title
    #[cfg_attr(feature = "openapi", schema(example = "Naruto"))]
    pub name: String,
}

impl Anime {
    pub fn new(id: AnimeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Overwrite the mutable fields, keeping the id.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// Anime creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAnime {
    /// Anime title
    pub name: String,
}

impl CreateAnime {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Check the business rules for a new anime
    pub fn validate(&self) -> DomainResult<()> {
        validate_name(&self.name)
    }
}

/// Anime replacement data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplaceAnime {
    /// Identifier of the anime being replaced
    pub id: AnimeId,
    /// New anime title
    pub name: String,
}

impl ReplaceAnime {
    pub fn new(id: AnimeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Check the business rules for a replacement
    pub fn validate(&self) -> DomainResult<()> {
        validate_name(&self.name)
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().chars().count() < MIN_ANIME_NAME_LENGTH {
        return Err(DomainError::validation(ANIME_NAME_EMPTY_MESSAGE));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_anime_accepts_name() {
        assert!(CreateAnime::new("Naruto").validate().is_ok());
    }

    #[test]
    fn test_create_anime_rejects_empty_name() {
        let result = CreateAnime::new("").validate();
        assert_eq!(
            result,
            Err(DomainError::Validation(ANIME_NAME_EMPTY_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_replace_anime_rejects_blank_name() {
        assert!(ReplaceAnime::new(1, "   ").validate().is_err());
    }

    #[test]
    fn test_rename_keeps_id() {
        let mut anime = Anime::new(7, "Bleach");
        anime.rename("Bleach: Thousand-Year Blood War");

        assert_eq!(anime.id, 7);
        assert_eq!(anime.name, "Bleach: Thousand-Year Blood War");
    }

    #[test]
    fn test_anime_serializes_id_and_name() {
        let json = serde_json::to_value(Anime::new(1, "Naruto")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "name": "Naruto" }));
    }
}
