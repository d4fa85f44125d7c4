//! # API crate: typed HTTP client for the Smart Contact Manager REST API
//!
//! Every page of the web client talks to the server through [`ApiClient`]. The
//! client is cheap to clone and shares one [`store::SessionStore`], from which
//! it reads the bearer token at the moment each request is built.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The request pipeline: bearer-token policy, status → [`ApiError`] mapping, session clearing on `401` |
//! | [`error`] | [`ApiError`] and the banner-text helper [`ApiError::user_message`] |
//! | [`models`] | Wire types: [`Contact`], [`ContactDraft`], [`UserProfile`], [`AuthResponse`], [`ImageUpload`] |
//! | `auth` | `register`, `login`, `admin_register`, `admin_login` |
//! | `contacts` | `list_contacts`, `search_contacts`, `create_contact`, `update_contact`, `delete_contact` |
//! | `profile` | `get_profile`, `upload_profile_image`, `image_route`, `fetch_image`, `health` |
//! | `admin` | `list_all_users`, `delete_user`, `get_user_contacts` |
//!
//! All operations are single-shot: no retries, no batching.

pub mod client;
pub mod error;
pub mod models;

mod admin;
mod auth;
mod contacts;
mod profile;

pub use client::{is_auth_path, ApiClient, AUTH_NAMESPACE};
pub use error::ApiError;
pub use models::{
    check_image, AuthResponse, Contact, ContactDraft, Health, ImageUpload, ImageUploadResponse,
    StoredImage, UserProfile,
};

pub use store::{ClientConfig, Role, Session, SessionStore, SessionUser};
