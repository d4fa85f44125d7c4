//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] builds the one [`SessionStore`] and [`ApiClient`] the app
//! uses and puts them in context next to a `Signal<AuthState>`. The store is
//! the source of truth; the signal mirrors it so components re-render when
//! someone signs in or out.

use api::{ApiClient, ClientConfig, Session, SessionStore};
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

/// Create the platform-appropriate session store.
///
/// - **Web** (WASM + `web` feature): `window.localStorage`
/// - **Native**: one file per key under `<data_dir>/smart-contacts/`
pub fn make_session_store() -> SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionStore::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("smart-contacts");
        SessionStore::new(store::FileStore::new(base))
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Persist `session` and publish it to the UI.
pub fn sign_in(mut auth: Signal<AuthState>, api: &ApiClient, session: Session) {
    tracing::info!("Signed in as user {}", session.user.user_id);
    api.session().save(&session);
    auth.set(AuthState {
        session: Some(session),
    });
}

/// Forget the stored session.
pub fn sign_out(mut auth: Signal<AuthState>, api: &ApiClient) {
    tracing::info!("Signed out");
    api.session().clear();
    auth.set(AuthState::default());
}

/// Re-read the store after a request may have cleared or rewritten it.
pub fn resync(mut auth: Signal<AuthState>, api: &ApiClient) {
    let stored = api.session().load();
    if auth.peek().session != stored {
        auth.set(AuthState { session: stored });
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_hook(ClientConfig::from_build_env);
    let api = use_hook(|| ApiClient::new(&config, make_session_store()));
    let auth_state = use_signal(|| AuthState {
        session: api.session().load(),
    });

    use_context_provider(|| config.clone());
    use_context_provider(|| api.clone());
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: Option<EventHandler<()>>,
) -> Element {
    let auth = use_auth();
    let api = use_api();

    let onclick = move |_| {
        sign_out(auth, &api);
        if let Some(handler) = on_logout {
            handler.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
