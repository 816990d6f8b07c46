#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! Folio Core
//!
//! Shared types, errors, and identifiers for the Folio workspace. This
//! crate has no internal Folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`slug`]: The slug identifier newtype

pub mod error;
pub mod slug;

mod proptests;

// Re-exports for convenience
pub use error::{Error, Result};
pub use slug::Slug;
