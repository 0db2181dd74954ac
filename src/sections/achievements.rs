use leptos::prelude::*;
use portfolio_core::Achievement;

use crate::components::page_section::PageSection;

#[component]
pub fn Achievements(achievements: Vec<Achievement>) -> impl IntoView {
    view! {
        <PageSection class="achievements" title="Achievements & Extra-Curricular">
            <div class="achievements-list">
                {achievements.into_iter().map(|achievement| {
                    view! {
                        <div class="achievement-item">
                            <span class="achievement-icon">"\u{1F3C6}"</span>
                            <p>{achievement}</p>
                        </div>
                    }
                }).collect_view()}
            </div>
        </PageSection>
    }
}
