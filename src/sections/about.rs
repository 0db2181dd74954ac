use leptos::prelude::*;
use portfolio_core::SectionId;

use crate::components::page_section::PageSection;

#[component]
pub fn About(text: String) -> impl IntoView {
    view! {
        <PageSection class="about" title="About Me" anchor=SectionId::About>
            <div class="about-content">
                <p>{text}</p>
            </div>
        </PageSection>
    }
}
