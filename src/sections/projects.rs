use leptos::prelude::*;
use portfolio_core::{LinkKind, Project, SectionId};

use crate::components::outbound_link::OutboundLink;
use crate::components::page_section::PageSection;

#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
    view! {
        <PageSection class="projects" title="Projects" anchor=SectionId::Projects>
            <div class="projects-grid">
                {projects.into_iter().map(|project| {
                    view! { <ProjectCard project=project /> }
                }).collect_view()}
            </div>
        </PageSection>
    }
}

// ── Project Card ──────────────────────────────────────────────────────────────

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let links = project.links();

    view! {
        <div class="project-card">
            <h3>{project.title}</h3>
            <p>{project.description}</p>
            <div class="project-links">
                {links.into_iter().map(|link| {
                    let class = button_class(link.kind);
                    view! { <OutboundLink link=link class=class /> }
                }).collect_view()}
            </div>
        </div>
    }
}

fn button_class(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Demo => "btn btn-small btn-secondary",
        _ => "btn btn-small",
    }
}
