use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use ui::{AuthState, Messages};

mod nav;
pub use nav::SiteNav;

mod welcome;
pub use welcome::Welcome;

mod credentials;
pub use credentials::{AdminLogin, AdminRegister, Login, Register};

mod dashboard;
pub use dashboard::Dashboard;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboard;

mod not_found;
pub use not_found::NotFound;

/// A rejected token clears the store inside the client; mirror that in the
/// auth signal so the guard sends the visitor to the login page.
pub(crate) fn check_session<T>(
    result: &Result<T, ApiError>,
    auth: Signal<AuthState>,
    api: &ApiClient,
) {
    if matches!(result, Err(e) if e.is_unauthorized()) {
        ui::resync(auth, api);
    }
}

/// Schedule the page's current success banner to disappear.
pub(crate) fn expire_success<M: 'static>(
    mut model: Signal<M>,
    secs: u32,
    messages: fn(&mut M) -> &mut Messages,
) {
    let Some(text) = messages(&mut model.write()).success.clone() else {
        return;
    };
    ui::dismiss_later(secs, move || {
        messages(&mut model.write()).expire_success(&text);
    });
}

#[component]
pub fn Banners(messages: Messages, on_dismiss_error: EventHandler<()>) -> Element {
    rsx! {
        if let Some(error) = messages.error {
            ui::components::AlertBanner {
                kind: ui::components::AlertKind::Error,
                message: error,
                on_dismiss: move |_| on_dismiss_error.call(()),
            }
        }
        if let Some(success) = messages.success {
            ui::components::AlertBanner {
                kind: ui::components::AlertKind::Success,
                message: success,
            }
        }
    }
}
