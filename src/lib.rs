pub mod components;
pub mod host;
pub mod sections;
pub mod state;

use components::footer::Footer;
use components::header::Header;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use portfolio_core::Portfolio;
use sections::about::About;
use sections::achievements::Achievements;
use sections::contact::Contact;
use sections::hero::Hero;
use sections::projects::Projects;
use sections::skills::Skills;
use state::ThemeState;

/// Root of the page. The display mode is created here unless the caller hands
/// one in.
#[component]
pub fn App(portfolio: Portfolio, #[prop(optional)] theme: Option<ThemeState>) -> impl IntoView {
    provide_meta_context();

    let theme = theme.unwrap_or_else(ThemeState::new);

    let Portfolio {
        profile,
        projects,
        skill_categories,
        achievements,
    } = portfolio;

    let contact_links = profile.contact_links();
    let resume_file = profile.resume_file_name().to_string();
    let page_title = format!("{} | Portfolio", profile.name);
    let header_name = profile.name.clone();
    let hero_name = profile.name.clone();

    view! {
        <Title text=page_title />
        <div class=move || theme.container_class()>
            <Header name=header_name theme=theme />
            <Hero
                name=hero_name
                headline=profile.headline
                tagline=profile.tagline
                resume_path=profile.resume_path
                resume_file=resume_file
            />
            <About text=profile.about />
            <Projects projects=projects />
            <Skills categories=skill_categories />
            <Achievements achievements=achievements />
            <Contact links=contact_links />
            <Footer name=profile.name year=profile.copyright_year />
        </div>
    }
}

/// Shown instead of the page when the embedded content fails to load.
#[component]
pub fn ContentError(message: String) -> impl IntoView {
    view! {
        <div class="app content-error">
            <p>"This page could not be rendered."</p>
            <pre>{message}</pre>
        </div>
    }
}
