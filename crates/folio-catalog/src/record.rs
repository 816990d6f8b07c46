//! Project record representation.
//!
//! This module defines `Project`, the struct behind every entry the site
//! renders, along with the `Category` and `Status` enums and the `Links`
//! block that hang off it.
//!
//! # Creating Records
//!
//! Records are created with the builder pattern or direct construction:
//!
//! ```rust
//! use folio_catalog::{Category, Project, Status};
//!
//! let project = Project::builder()
//!     .slug("chartboy")
//!     .title("Chartboy")
//!     .subtitle("NFT Collection Analytics")
//!     .summary("Analytics dashboards for NFT collections.")
//!     .year("2021")
//!     .category(Category::Project)
//!     .status(Status::Archived)
//!     .build();
//!
//! assert_eq!(project.slug.as_str(), "chartboy");
//! ```
//!
//! A record is plain data. Validation (non-empty slugs, slug uniqueness)
//! happens when records are assembled into a `Catalog`, not here.

use serde::{Deserialize, Serialize};
use std::fmt;

use folio_core::Slug;

use crate::year::YearSpan;

// ============================================================================
// Category enum
// ============================================================================

/// Which section of the site a record belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A discrete built artifact: an app, tool, or library (the default).
    #[default]
    Project,

    /// A sustained effort spanning several related pieces of work.
    Endeavor,

    /// A job or professional engagement.
    Experience,

    /// A degree or formal program.
    Education,
}

impl Category {
    /// Returns `true` for the work categories (Project or Endeavor) that
    /// feed the projects list.
    pub fn is_work(&self) -> bool {
        matches!(self, Category::Project | Category::Endeavor)
    }

    /// Returns `true` for the background categories (Experience or
    /// Education) that feed the résumé-style list.
    pub fn is_background(&self) -> bool {
        matches!(self, Category::Experience | Category::Education)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Project => write!(f, "project"),
            Category::Endeavor => write!(f, "endeavor"),
            Category::Experience => write!(f, "experience"),
            Category::Education => write!(f, "education"),
        }
    }
}

// ============================================================================
// Status enum
// ============================================================================

/// Lifecycle status of a record, when it has one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Finished and delivered.
    Shipped,

    /// Under active development or currently running.
    Active,

    /// No longer maintained or taken offline.
    Archived,

    /// Built but never released.
    Unreleased,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Shipped => write!(f, "shipped"),
            Status::Active => write!(f, "active"),
            Status::Archived => write!(f, "archived"),
            Status::Unreleased => write!(f, "unreleased"),
        }
    }
}

// ============================================================================
// Links struct
// ============================================================================

/// External links for a record. Either, both, or neither may be present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Links {
    /// Source repository URL.
    pub repository: Option<String>,
    /// Deployed-site URL.
    pub live_site: Option<String>,
}

impl Links {
    /// Returns `true` if the record has no links at all.
    pub fn is_empty(&self) -> bool {
        self.repository.is_none() && self.live_site.is_none()
    }
}

// ============================================================================
// Project struct
// ============================================================================

/// One entry in the portfolio.
///
/// A record can be a shipped product, a tool, a multi-year research effort,
/// a job, or a degree; `category` says which. All fields are plain data that
/// the site renders directly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    // Identity
    /// Unique slug, the external key for lookup and URL paths.
    pub slug: Slug,
    /// Display name.
    pub title: String,
    /// Short descriptor shown alongside the title.
    pub subtitle: Option<String>,

    // Narrative
    /// One- or two-sentence description for list views.
    pub summary: String,
    /// Extended write-up in the site's markup dialect (`##` section
    /// headings, blank-line paragraphs, `-` bullets). Stored opaque;
    /// the page renderer parses it.
    pub longform: Option<String>,

    // Placement
    /// The year or hyphenated year range the record belongs to.
    pub year: YearSpan,
    /// Which section of the site the record belongs to.
    pub category: Category,
    /// Marks the record for prioritized display on the home page.
    pub spotlight: bool,

    // Detail
    /// Technology tags, in authored order.
    pub tech: Vec<String>,
    /// Key-feature bullet points.
    pub features: Vec<String>,
    /// Repository and live-site links.
    pub links: Links,
    /// Whether the source code is public.
    pub open_source: bool,
    /// Lifecycle status, if the record has one.
    pub status: Option<Status>,

    // Media
    /// Static-asset paths for screenshots.
    pub images: Vec<String>,
}

impl Project {
    /// Create a new project builder.
    pub fn builder() -> ProjectBuilder {
        ProjectBuilder::default()
    }
}

/// Builder for Project.
#[derive(Debug, Default)]
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    /// Set the slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.project.slug = Slug::new(slug);
        self
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.project.title = title.into();
        self
    }

    /// Set the subtitle.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.project.subtitle = Some(subtitle.into());
        self
    }

    /// Set the summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.project.summary = summary.into();
        self
    }

    /// Set the longform write-up.
    pub fn longform(mut self, longform: impl Into<String>) -> Self {
        self.project.longform = Some(longform.into());
        self
    }

    /// Set the year span.
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.project.year = YearSpan::new(year);
        self
    }

    /// Set the category.
    pub fn category(mut self, category: Category) -> Self {
        self.project.category = category;
        self
    }

    /// Set the spotlight flag.
    pub fn spotlight(mut self, spotlight: bool) -> Self {
        self.project.spotlight = spotlight;
        self
    }

    /// Set the technology tags.
    pub fn tech(mut self, tech: Vec<String>) -> Self {
        self.project.tech = tech;
        self
    }

    /// Set the key-feature bullets.
    pub fn features(mut self, features: Vec<String>) -> Self {
        self.project.features = features;
        self
    }

    /// Set the repository link.
    pub fn repository(mut self, url: impl Into<String>) -> Self {
        self.project.links.repository = Some(url.into());
        self
    }

    /// Set the live-site link.
    pub fn live_site(mut self, url: impl Into<String>) -> Self {
        self.project.links.live_site = Some(url.into());
        self
    }

    /// Set the open-source flag.
    pub fn open_source(mut self, open_source: bool) -> Self {
        self.project.open_source = open_source;
        self
    }

    /// Set the status.
    pub fn status(mut self, status: Status) -> Self {
        self.project.status = Some(status);
        self
    }

    /// Set the screenshot paths.
    pub fn images(mut self, images: Vec<String>) -> Self {
        self.project.images = images;
        self
    }

    /// Build the record.
    pub fn build(self) -> Project {
        self.project
    }
}

// ============================================================================
// Tests
// ============================================================================
