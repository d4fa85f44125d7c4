use dioxus::prelude::*;
use ui::icons::FaAddressBook;
use ui::{use_auth, Icon, LogoutButton, Navbar};

use crate::Route;

/// Top bar. Links depend on who is signed in.
#[component]
pub fn SiteNav() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let session = auth().session;

    rsx! {
        Navbar {
            Link {
                class: "navbar-brand",
                to: Route::Welcome {},
                Icon { icon: FaAddressBook, width: 18, height: 18 }
                span { "Smart Contact Manager" }
            }
            div {
                class: "navbar-links",
                match session {
                    Some(session) => rsx! {
                        if session.role().is_admin() {
                            Link { to: Route::AdminDashboard {}, "Admin Dashboard" }
                        } else {
                            Link { to: Route::Dashboard {}, "Dashboard" }
                        }
                        span {
                            class: "navbar-user",
                            "{session.user.display_name()}"
                            span { class: "role-badge", "{session.role().label()}" }
                        }
                        LogoutButton {
                            class: "btn btn-secondary",
                            on_logout: move |_| {
                                nav.replace(Route::Login {});
                            },
                        }
                    },
                    None => rsx! {
                        Link { to: Route::Login {}, "Login" }
                        Link { to: Route::Register {}, "Register" }
                        Link { class: "navbar-admin", to: Route::AdminLogin {}, "Admin" }
                    },
                }
            }
        }
    }
}
