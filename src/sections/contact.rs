use leptos::prelude::*;
use portfolio_core::{Link, SectionId};

use crate::components::outbound_link::OutboundLink;
use crate::components::page_section::PageSection;

#[component]
pub fn Contact(links: Vec<Link>) -> impl IntoView {
    view! {
        <PageSection class="contact" title="Get In Touch" anchor=SectionId::Contact>
            <div class="contact-content-simple">
                <div class="contact-info-centered">
                    <h3>"Let's Connect"</h3>
                    <div class="contact-links">
                        {links.into_iter().map(|link| {
                            view! { <OutboundLink link=link /> }
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </PageSection>
    }
}
