//! Error types for content loading and section navigation

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the portfolio domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Content Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse portfolio content: {0}")]
    ContentParse(#[from] toml::de::Error),

    #[error("Invalid portfolio content: {message}")]
    InvalidContent { message: String },

    // ─────────────────────────────────────────────────────────────
    // Navigation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No rendered section with anchor id: {id}")]
    SectionNotFound { id: String },
}

impl Error {
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    pub fn section_not_found(id: impl Into<String>) -> Self {
        Self::SectionNotFound { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_not_found_message() {
        let err = Error::section_not_found("missing");
        assert_eq!(
            err.to_string(),
            "No rendered section with anchor id: missing"
        );
    }

    #[test]
    fn test_invalid_content_message() {
        let err = Error::invalid_content("project 1 has an empty title");
        assert!(err.to_string().contains("empty title"));
    }
}
