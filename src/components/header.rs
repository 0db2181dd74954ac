use leptos::prelude::*;
use portfolio_core::SectionId;

use crate::host::navigate_to;
use crate::state::ThemeState;

#[component]
pub fn Header(name: String, theme: ThemeState) -> impl IntoView {
    view! {
        <header class="header">
            <div class="container">
                <div class="logo">
                    <h2>{name}</h2>
                </div>
                <nav class="nav">
                    {SectionId::ALL.into_iter().map(|section| {
                        view! {
                            <a
                                href=section.href()
                                on:click=move |ev| {
                                    // The fragment is updated after the smooth scroll instead of jumping
                                    ev.prevent_default();
                                    navigate_to(section);
                                }
                            >
                                {section.label()}
                            </a>
                        }
                    }).collect_view()}
                    <button
                        class="dark-mode-toggle"
                        aria-label=move || theme.mode().toggle_label()
                        aria-pressed=move || theme.is_dark().to_string()
                        on:click=move |_| theme.toggle()
                    >
                        {move || theme.mode().toggle_icon()}
                    </button>
                </nav>
            </div>
        </header>
    }
}
