use leptos::prelude::*;

#[component]
pub fn Footer(name: String, year: u16) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>{format!("\u{00A9} {year} {name}. All rights reserved.")}</p>
            </div>
        </footer>
    }
}
