//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The anime service maps its database models into these types.

pub mod anime;
pub mod constants;
pub mod error;

pub use anime::{Anime, AnimeId, CreateAnime, ReplaceAnime};
pub use constants::*;
pub use error::{DomainError, DomainResult};
