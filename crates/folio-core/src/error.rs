//! Error types for the Folio workspace.

/// Errors that can occur while building or validating a catalog.
///
/// The enum is `#[non_exhaustive]` so new validation failures can be
/// added without breaking changes. Query operations never produce
/// errors: a lookup miss is an `Option::None`, not an `Error`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Two records in the same catalog share a slug.
    #[error("Duplicate slug in catalog: {slug}")]
    DuplicateSlug {
        /// The slug that appears more than once.
        slug: String,
    },

    /// A record failed validation.
    #[error("Validation error: {message}")]
    Validation {
        /// Field or aspect that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },
}

/// Convenience `Result` type alias for Folio operations.
///
/// This is the standard Result type used throughout the Folio codebase.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a duplicate-slug error.
    pub fn duplicate_slug<S: Into<String>>(slug: S) -> Self {
        Error::DuplicateSlug { slug: slug.into() }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}
