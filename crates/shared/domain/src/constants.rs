//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Anime
// =============================================================================

/// Minimum anime name length requirement
pub const MIN_ANIME_NAME_LENGTH: usize = 1;

/// Message returned when an anime name is missing or blank
pub const ANIME_NAME_EMPTY_MESSAGE: &str = "The anime name cannot be empty";

/// Message returned when an anime lookup by id fails
pub const ANIME_NOT_FOUND_MESSAGE: &str = "Anime not Found";

// =============================================================================
// Pagination
// =============================================================================

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Maximum allowed items per page to prevent excessive queries
pub const MAX_PAGE_SIZE: u64 = 100;

/// Default starting page number (0-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 0;
