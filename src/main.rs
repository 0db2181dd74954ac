use leptos::prelude::*;
use portfolio_core::Portfolio;
use portfolio_site::{App, ContentError};

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).expect("error initializing logger");

    match Portfolio::embedded() {
        Ok(portfolio) => {
            log::info!("Rendering portfolio for {}", portfolio.profile.name);
            mount_to_body(move || view! { <App portfolio=portfolio /> });
        }
        Err(e) => {
            log::error!("Failed to load portfolio content: {e}");
            let message = e.to_string();
            mount_to_body(move || view! { <ContentError message=message /> });
        }
    }
}
