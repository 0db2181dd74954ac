use leptos::prelude::*;
use portfolio_core::SectionId;

/// `<section>` wrapper shared by the content sections. Only navigable sections
/// carry an anchor id.
#[component]
pub fn PageSection(
    class: &'static str,
    title: &'static str,
    #[prop(optional)] anchor: Option<SectionId>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=anchor.map(SectionId::anchor) class=class>
            <div class="container">
                <h2>{title}</h2>
                {children()}
            </div>
        </section>
    }
}
