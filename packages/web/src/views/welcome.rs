//! Landing page with a reachability check of the API.

use dioxus::prelude::*;
use ui::{use_api, use_auth};

use crate::Route;

#[component]
pub fn Welcome() -> Element {
    let api = use_api();
    let auth = use_auth();

    let health = use_resource(move || {
        let api = api.clone();
        async move { api.health().await }
    });

    let status = match &*health.read() {
        None => ("status status-pending", "Checking server...".to_string()),
        Some(Ok(h)) if h.is_up() => ("status status-up", "Server is up".to_string()),
        Some(Ok(h)) => ("status status-down", format!("Server reports {}", h.status)),
        Some(Err(e)) => {
            tracing::warn!("Health check failed: {}", e);
            ("status status-down", "Server unreachable".to_string())
        }
    };
    let (status_class, status_text) = status;

    let home = match auth().session.map(|s| s.role()) {
        Some(role) if role.is_admin() => Some(Route::AdminDashboard {}),
        Some(_) => Some(Route::Dashboard {}),
        None => None,
    };

    rsx! {
        section {
            class: "hero",
            h1 { "Smart Contact Manager" }
            p {
                class: "hero-lead",
                "Keep every contact in one place. Search, edit and organise them from any browser."
            }
            div {
                class: "hero-actions",
                if let Some(home) = home {
                    Link { class: "btn btn-primary", to: home, "Go to dashboard" }
                } else {
                    Link { class: "btn btn-primary", to: Route::Register {}, "Get started" }
                    Link { class: "btn btn-secondary", to: Route::Login {}, "Login" }
                }
            }
            p { class: "{status_class}", "{status_text}" }
        }
    }
}
