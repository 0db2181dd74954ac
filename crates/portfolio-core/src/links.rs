//! Outbound links rendered on project cards and in the contact section

use crate::content::{Profile, Project};

/// `rel` value carried by every link opened in a new browsing context.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Repository,
    Demo,
    Profile,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub kind: LinkKind,
    pub label: String,
    pub href: String,
    pub opens_new_tab: bool,
}

impl Link {
    fn external(kind: LinkKind, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            href: href.into(),
            opens_new_tab: true,
        }
    }

    pub fn target(&self) -> Option<&'static str> {
        self.opens_new_tab.then_some("_blank")
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.opens_new_tab.then_some(EXTERNAL_REL)
    }
}

impl Project {
    /// Card controls: the repository, then the demo when the project has one.
    pub fn links(&self) -> Vec<Link> {
        let mut links = vec![Link::external(
            LinkKind::Repository,
            "GitHub",
            &self.repository,
        )];
        if let Some(demo) = &self.demo {
            links.push(Link::external(LinkKind::Demo, "Live Demo", demo));
        }
        links
    }
}

impl Profile {
    pub fn contact_links(&self) -> Vec<Link> {
        vec![
            Link::external(LinkKind::Profile, "\u{1F4F1} GitHub", &self.github),
            Link {
                kind: LinkKind::Email,
                label: format!("\u{2709}\u{FE0F} {}", self.email),
                href: format!("mailto:{}", self.email),
                opens_new_tab: false,
            },
        ]
    }

    /// File name offered for the resume download.
    pub fn resume_file_name(&self) -> &str {
        self.resume_path
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or("resume.pdf")
    }
}
