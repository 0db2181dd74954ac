use leptos::prelude::*;
use portfolio_core::{SectionId, SkillCategory};

use crate::components::page_section::PageSection;

#[component]
pub fn Skills(categories: Vec<SkillCategory>) -> impl IntoView {
    view! {
        <PageSection class="skills" title="Skills" anchor=SectionId::Skills>
            <div class="skills-grid">
                {categories.into_iter().map(|category| {
                    view! {
                        <div class="skill-category">
                            <h3>{category.name}</h3>
                            <div class="skill-tags">
                                {category.skills.into_iter().map(|skill| {
                                    view! { <span class="skill-tag">{skill}</span> }
                                }).collect_view()}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </PageSection>
    }
}
