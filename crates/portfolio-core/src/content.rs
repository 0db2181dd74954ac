//! Portfolio content model
//!
//! The content document lives in `content/portfolio.toml` and is compiled into
//! the binary, so every collection is fixed at build time. Record order in the
//! document is the order the page renders them in.

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};
use crate::prelude::*;

/// The content document embedded at compile time.
pub const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.toml");

/// Owner details shown in the header, hero, about, contact and footer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub about: String,
    /// Site-relative path of the downloadable resume, e.g. `/resume.pdf`
    pub resume_path: String,
    /// Public profile URL
    pub github: String,
    pub email: String,
    pub copyright_year: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub repository: String,
    #[serde(default)]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

pub type Achievement = String;

/// All page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skill_categories: Vec<SkillCategory>,
    pub achievements: Vec<Achievement>,
}

/// On-disk shape; achievements sit under their own table so the document can
/// keep them after the array tables.
#[derive(Deserialize)]
struct PortfolioDocument {
    profile: Profile,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    achievements: AchievementList,
}

#[derive(Default, Deserialize)]
struct AchievementList {
    #[serde(default)]
    items: Vec<Achievement>,
}

impl From<PortfolioDocument> for Portfolio {
    fn from(doc: PortfolioDocument) -> Self {
        Self {
            profile: doc.profile,
            projects: doc.projects,
            skill_categories: doc.skill_categories,
            achievements: doc.achievements.items,
        }
    }
}

impl Portfolio {
    /// Load the content compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml(EMBEDDED_CONTENT)
    }

    /// Parse and validate a content document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let doc: PortfolioDocument = toml::from_str(source)?;
        let portfolio = Portfolio::from(doc);
        portfolio.validate()?;

        debug!(
            "Loaded portfolio: {} projects, {} skill categories, {} achievements",
            portfolio.projects.len(),
            portfolio.skill_categories.len(),
            portfolio.achievements.len()
        );

        Ok(portfolio)
    }

    /// Check every link and required field in the document.
    pub fn validate(&self) -> Result<()> {
        let profile = &self.profile;

        if profile.name.trim().is_empty() {
            return Err(Error::invalid_content("profile name is empty"));
        }
        validate_web_url("profile github", &profile.github)?;
        validate_email(&profile.email)?;
        if !profile.resume_path.starts_with('/') {
            return Err(Error::invalid_content(format!(
                "resume path must be site-relative and start with '/': {:?}",
                profile.resume_path
            )));
        }

        for (index, project) in self.projects.iter().enumerate() {
            let position = index + 1;
            if project.title.trim().is_empty() {
                return Err(Error::invalid_content(format!(
                    "project {position} has an empty title"
                )));
            }
            validate_web_url(&format!("project {position} repository"), &project.repository)?;
            if let Some(demo) = &project.demo {
                validate_web_url(&format!("project {position} demo"), demo)?;
            }
        }

        for (index, category) in self.skill_categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(Error::invalid_content(format!(
                    "skill category {} has an empty name",
                    index + 1
                )));
            }
        }

        Ok(())
    }
}

/// External links must be absolute http(s) URLs.
fn validate_web_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| Error::invalid_content(format!("{field} is not a valid URL ({e}): {value:?}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::invalid_content(format!(
            "{field} must use http or https, found {other:?}"
        ))),
    }
}

fn validate_email(value: &str) -> Result<()> {
    match value.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(Error::invalid_content(format!(
            "profile email is not an address: {value:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[profile]
name = "Ada"
headline = "Engineer"
tagline = "Hello"
about = "About Ada"
resume_path = "/cv.pdf"
github = "https://github.com/ada"
email = "ada@example.com"
copyright_year = 2024
"#;

    fn with_project(project: &str) -> String {
        format!("{MINIMAL}\n[[projects]]\n{project}")
    }

    // ── Embedded content ──────────────────────────────
    #[test]
    fn test_embedded_content_loads() {
        let portfolio = Portfolio::embedded().expect("embedded content should be valid");
        assert_eq!(portfolio.profile.name, "Samuel Alexander");
        assert_eq!(portfolio.profile.resume_path, "/Resume_improvised.pdf");
        assert_eq!(portfolio.profile.copyright_year, 2025);
    }

    #[test]
    fn test_embedded_projects_keep_document_order() {
        let portfolio = Portfolio::embedded().unwrap();
        let titles: Vec<&str> = portfolio.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Reddit Persona Generator",
                "AI Booking Agent",
                "DB Manager",
                "Stock Market Prediction",
                "E-commerce Web App",
                "Mini OS",
            ]
        );
    }

    #[test]
    fn test_embedded_only_booking_agent_has_demo() {
        let portfolio = Portfolio::embedded().unwrap();
        let with_demo: Vec<&str> = portfolio
            .projects
            .iter()
            .filter(|p| p.demo.is_some())
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(with_demo, vec!["AI Booking Agent"]);
    }

    #[test]
    fn test_embedded_skill_categories() {
        let portfolio = Portfolio::embedded().unwrap();
        let shape: Vec<(&str, usize)> = portfolio
            .skill_categories
            .iter()
            .map(|c| (c.name.as_str(), c.skills.len()))
            .collect();
        assert_eq!(
            shape,
            vec![
                ("Languages", 6),
                ("Frontend", 4),
                ("Backend", 4),
                ("Databases", 2),
                ("AI/ML Tools", 6),
                ("Other Tools", 3),
            ]
        );
    }

    #[test]
    fn test_embedded_achievements() {
        let portfolio = Portfolio::embedded().unwrap();
        assert_eq!(portfolio.achievements.len(), 5);
        assert_eq!(
            portfolio.achievements[0],
            "Won multiple inter-school chess competitions"
        );
    }

    #[test]
    fn test_about_text_is_joined_into_one_paragraph() {
        let portfolio = Portfolio::embedded().unwrap();
        let about = &portfolio.profile.about;
        assert!(!about.contains('\n'));
        assert!(about.contains("Graphic Era Hill University. I'm passionate"));
    }

    // ── Parsing ───────────────────────────────────────
    #[test]
    fn test_missing_collections_default_to_empty() {
        let portfolio = Portfolio::from_toml(MINIMAL).unwrap();
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.skill_categories.is_empty());
        assert!(portfolio.achievements.is_empty());
    }

    #[test]
    fn test_missing_profile_is_parse_error() {
        let result = Portfolio::from_toml("[[projects]]\ntitle = \"x\"");
        assert!(matches!(result, Err(Error::ContentParse(_))));
    }

    // ── Validation ────────────────────────────────────
    #[test]
    fn test_relative_repository_link_rejected() {
        let doc = with_project(
            "title = \"X\"\ndescription = \"d\"\nrepository = \"github.com/ada/x\"",
        );
        let err = Portfolio::from_toml(&doc).unwrap_err();
        assert!(err.to_string().contains("project 1 repository"), "{err}");
    }

    #[test]
    fn test_non_http_demo_link_rejected() {
        let doc = with_project(
            "title = \"X\"\ndescription = \"d\"\nrepository = \"https://github.com/ada/x\"\ndemo = \"ftp://example.com\"",
        );
        let err = Portfolio::from_toml(&doc).unwrap_err();
        assert!(err.to_string().contains("http or https"), "{err}");
    }

    #[test]
    fn test_empty_project_title_rejected() {
        let doc = with_project(
            "title = \"  \"\ndescription = \"d\"\nrepository = \"https://github.com/ada/x\"",
        );
        assert!(matches!(
            Portfolio::from_toml(&doc),
            Err(Error::InvalidContent { .. })
        ));
    }

    #[test]
    fn test_bad_email_rejected() {
        let doc = MINIMAL.replace("ada@example.com", "ada.example.com");
        let err = Portfolio::from_toml(&doc).unwrap_err();
        assert!(err.to_string().contains("email"), "{err}");
    }

    #[test]
    fn test_resume_path_must_be_site_relative() {
        let doc = MINIMAL.replace("/cv.pdf", "cv.pdf");
        assert!(Portfolio::from_toml(&doc).is_err());
    }
}
