#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! Folio Catalog
//!
//! The record model and query layer behind the portfolio site.
//!
//! # Modules
//!
//! - [`record`]: The `Project` record and its supporting types
//! - [`year`]: Year spans and the recency key derived from them
//! - [`catalog`]: The catalog container and its query operations
//!
//! The built-in record set is exposed through [`Catalog::builtin`].

pub mod catalog;
pub mod record;
pub mod year;

mod builtin;
mod proptests;

// Re-exports for convenience
pub use catalog::{sorted_by_recency, Catalog};
pub use record::{Category, Links, Project, ProjectBuilder, Status};
pub use year::YearSpan;

// Re-export the shared foundations so most callers need only this crate
pub use folio_core::{Error, Result, Slug};
