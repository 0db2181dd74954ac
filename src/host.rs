//! Browser implementation of the scroll capability

use portfolio_core::{scroll_to_section, ScrollHost, SectionId};
use wasm_bindgen::JsValue;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

/// Scrolls elements of the current `window.document`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentScrollHost;

impl ScrollHost for DocumentScrollHost {
    type Target = Element;

    fn locate(&self, id: &str) -> Option<Element> {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            log::debug!("No document available to look up #{id}");
            return None;
        };
        document.get_element_by_id(id)
    }

    fn scroll_smoothly(&self, target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn replace_fragment(&self, fragment: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let replaced = window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(fragment)));
        if let Err(e) = replaced {
            log::debug!("Could not update URL fragment to {fragment}: {e:?}");
        }
    }
}

/// Header link handler. A section missing from the page is logged and ignored.
pub fn navigate_to(section: SectionId) {
    if let Err(e) = scroll_to_section(&DocumentScrollHost, section.anchor()) {
        log::warn!("Ignoring navigation to {section}: {e}");
    }
}
