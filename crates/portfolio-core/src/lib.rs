//! # portfolio-core - Portfolio Domain
//!
//! Platform-free half of the portfolio site. Everything here compiles and tests
//! natively; the browser-facing crate only renders what this crate describes.
//!
//! ## Public API
//!
//! ### Content (`content`)
//! - [`Portfolio`] - Profile, projects, skill categories and achievements
//! - [`Portfolio::embedded()`] - Parse and validate the compiled-in content document
//!
//! ### Display Mode (`theme`)
//! - [`DisplayMode`] - Light/dark flag and the container class derived from it
//!
//! ### Navigation (`navigation`)
//! - [`SectionId`] - Anchor ids of the navigable sections
//! - [`ScrollHost`] - Host capability for element lookup and smooth scrolling
//! - [`scroll_to_section()`] - Scroll to a section, or report it missing
//!
//! ### Links (`links`)
//! - [`Link`] - Outbound link with new-tab and `rel` attributes
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`]

pub mod content;
pub mod error;
pub mod links;
pub mod navigation;
pub mod theme;

/// Prelude for common imports used throughout the portfolio crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use content::{Achievement, Portfolio, Profile, Project, SkillCategory, EMBEDDED_CONTENT};
pub use error::{Error, Result};
pub use links::{Link, LinkKind, EXTERNAL_REL};
pub use navigation::{scroll_to_section, ScrollHost, SectionId};
pub use theme::{DisplayMode, CONTAINER_CLASS, DARK_MODE_CLASS};
