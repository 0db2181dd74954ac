use leptos::prelude::*;
use portfolio_core::SectionId;

#[component]
pub fn Hero(
    name: String,
    headline: String,
    tagline: String,
    resume_path: String,
    resume_file: String,
) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <h1>{name}</h1>
                    <h2>{headline}</h2>
                    <p class="tagline">{format!("\"{tagline}\"")}</p>
                    <div class="hero-buttons">
                        <a href=SectionId::Projects.href() class="btn btn-primary">
                            "View My Work"
                        </a>
                        <a href=resume_path download=resume_file class="btn btn-secondary">
                            "Download Resume"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
