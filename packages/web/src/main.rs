use dioxus::prelude::*;

use ui::{decide, Access, AuthProvider, Decision, Landing, Visitor};
use views::{
    AdminDashboard, AdminLogin, AdminRegister, Dashboard, Login, NotFound, Register, SiteNav,
    Welcome,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guarded)]
        #[route("/")]
        Welcome {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/admin/login")]
        AdminLogin {},
        #[route("/admin/register")]
        AdminRegister {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    fn access(&self) -> Access {
        match self {
            Route::Dashboard {} => Access::Authenticated,
            Route::AdminDashboard {} => Access::AdminOnly,
            _ => Access::Public,
        }
    }

    /// Where `visitor` is sent instead of this route, if anywhere.
    fn redirect_for(&self, visitor: Visitor) -> Option<Route> {
        match decide(visitor, self.access()) {
            Decision::Render => None,
            Decision::RedirectToLogin => Some(Route::Login {}),
            Decision::RedirectToUserHome => Some(Route::Dashboard {}),
        }
    }

    fn landing(landing: Landing) -> Self {
        match landing {
            Landing::UserHome => Route::Dashboard {},
            Landing::AdminHome => Route::AdminDashboard {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Layout for every known route: checks access against the stored session,
/// then renders the navbar and the page.
#[component]
fn Guarded() -> Element {
    let route = use_route::<Route>();
    let auth = ui::use_auth();
    let api = ui::use_api();
    let nav = use_navigator();

    // Subscribe to sign-in/out, but decide from the store itself.
    let _ = auth.read();
    let session = api.session().load();

    match route.redirect_for(Visitor::from_session(session.as_ref())) {
        None => rsx! {
            SiteNav {}
            main {
                class: "page",
                Outlet::<Route> {}
            }
        },
        Some(target) => {
            tracing::debug!("{} is not open to this visitor, redirecting to {}", route, target);
            nav.replace(target);
            rsx! {}
        }
    }
}
