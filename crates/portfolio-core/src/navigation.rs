//! In-page section navigation
//!
//! The document lookup and the smooth scroll are host capabilities behind
//! [`ScrollHost`], so the navigation rule can be exercised without a browser.

use std::fmt;

use crate::error::{Error, Result};
use crate::prelude::*;

/// Sections reachable from the header, in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// Element id of the section, also the URL fragment.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Host document capability: find a rendered element and scroll it into view.
#[cfg_attr(test, mockall::automock(type Target = String;))]
pub trait ScrollHost {
    type Target;

    /// Look up a rendered element by id. `None` when nothing with that id is rendered.
    fn locate(&self, id: &str) -> Option<Self::Target>;

    /// Request an animated scroll that brings `target` into view. Does not wait
    /// for the animation.
    fn scroll_smoothly(&self, target: &Self::Target);

    /// Replace the URL fragment without adding a history entry or jumping.
    fn replace_fragment(&self, fragment: &str);
}

/// Smooth-scroll to the element with anchor `id`.
///
/// Issues exactly one scroll request when the element exists, then points the
/// URL fragment at the section so the address stays shareable. A missing
/// element yields [`Error::SectionNotFound`] with no scroll and no URL change;
/// callers treat it as a no-op.
pub fn scroll_to_section<H: ScrollHost>(host: &H, id: &str) -> Result<()> {
    let Some(target) = host.locate(id) else {
        return Err(Error::section_not_found(id));
    };

    trace!("Scrolling to section #{id}");
    host.scroll_smoothly(&target);
    host.replace_fragment(&format!("#{id}"));
    Ok(())
}
