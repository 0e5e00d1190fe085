//! Common utilities shared across services.
//!
//! This crate provides:
//! - Unified error handling for HTTP
//! - Pagination request/response types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod pagination;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
pub use pagination::{Page, PageRequest, SortDirection, SortOrder};
