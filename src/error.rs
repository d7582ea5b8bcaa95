//! Error types for carousel operations
//!
//! The engine has a deliberately small failure surface: an empty collection
//! refuses to mount (no error, see [`crate::Carousel::mount`]) and the only
//! rejectable operation is a targeted jump to an out-of-range index.

use thiserror::Error;

/// Errors that can occur during carousel operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// A targeted jump named an index outside the card collection.
    /// State is left unchanged.
    #[error("card index {index} out of range (0..{count})")]
    InvalidIndex { index: usize, count: usize },
}

/// Result type alias for carousel operations
pub type CarouselResult<T> = Result<T, CarouselError>;
