use leptos::prelude::*;
use portfolio_core::Link;

/// Anchor for a [`Link`]. New-tab links get `target="_blank"` and a
/// `noopener noreferrer` rel; same-tab links get neither.
#[component]
pub fn OutboundLink(link: Link, #[prop(optional)] class: &'static str) -> impl IntoView {
    let target = link.target();
    let rel = link.rel();

    view! {
        <a href=link.href target=target rel=rel class=class>
            {link.label}
        </a>
    }
}
