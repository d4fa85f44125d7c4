//! This crate contains all shared UI for the workspace.
//!
//! Page state lives in plain structs ([`ContactsModel`], [`ProfileModel`],
//! [`AdminModel`], [`CredentialsForm`]) so it can be tested without a
//! renderer. Views in the `web` crate hold them in signals and drive them
//! with the [`api::ApiClient`] from [`use_api`].

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{
    make_session_store, resync, sign_in, sign_out, use_api, use_auth, use_config, AuthProvider,
    AuthState, LogoutButton,
};

mod guard;
pub use guard::{decide, Access, Decision, Visitor};

mod page_state;
pub use page_state::{LoadState, Messages};

mod flash;
pub use flash::dismiss_later;

mod credentials;
pub use credentials::{landing, CredentialsForm, CredentialsMode, Landing, Portal};

mod contacts;
pub use contacts::{ContactQuery, ContactsModel, SaveRequest};

mod profile;
pub use profile::ProfileModel;

mod admin;
pub use admin::{AdminModel, SelectedUser};

mod navbar;
pub use navbar::Navbar;
