//! # User-facing models
//!
//! - [`AuthResponse`]: body of every `/auth/*` success: the bearer token plus
//!   the caller's identity. [`AuthResponse::into_session`] turns it into the
//!   [`Session`] the store persists.
//! - [`UserProfile`]: a full user record. `/user/profile` returns it without
//!   contacts; `/admin/users` embeds each user's contacts.
//! - [`ImageUpload`]: a profile image picked by the user, checked locally
//!   against the MIME and size limits before any request is made.

use base64::Engine;
use serde::{Deserialize, Serialize};
use store::{Role, Session, SessionUser};

use crate::models::Contact;
use crate::ApiError;

/// Success body of the register/login endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub user_id: i64,
    #[serde(default)]
    pub image_path: Option<String>,
}

impl AuthResponse {
    pub fn into_session(self) -> Session {
        Session::new(
            self.token,
            SessionUser {
                user_id: self.user_id,
                name: self.name,
                email: self.email,
                role: self.role,
                image_path: self.image_path.filter(|p| !p.is_empty()),
            },
        )
    }
}

/// A user record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub contacts: Option<Vec<Contact>>,
}

impl UserProfile {
    pub fn contacts(&self) -> &[Contact] {
        self.contacts.as_deref().unwrap_or_default()
    }

    pub fn contact_count(&self) -> usize {
        self.contacts().len()
    }
}

/// Response of `POST /user/profile/image`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadResponse {
    pub image_path: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `GET /health`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

impl Health {
    pub fn is_up(&self) -> bool {
        self.status.eq_ignore_ascii_case("up")
    }
}

/// An image file selected for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Reject non-images and files of `max_bytes` or more.
    pub fn validate(&self, max_bytes: u64) -> Result<(), ApiError> {
        check_image(&self.content_type, self.bytes.len() as u64, max_bytes)
    }
}

/// A stored image downloaded with the caller's credentials.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl StoredImage {
    /// `data:` URL for an `<img>`; the browser cannot attach a bearer token to
    /// a plain `src`.
    pub fn data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.content_type, encoded)
    }
}

/// The same checks as [`ImageUpload::validate`], usable before the file body
/// has been read.
pub fn check_image(content_type: &str, size: u64, max_bytes: u64) -> Result<(), ApiError> {
    if !content_type.starts_with("image/") {
        return Err(ApiError::Validation("Please select an image file".to_string()));
    }
    if size >= max_bytes {
        return Err(ApiError::Validation(format!(
            "Image size should be less than {}",
            size_label(max_bytes)
        )));
    }
    Ok(())
}

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;

/// Human-readable size: whole megabytes as `5MB`, otherwise one decimal
/// (`1.5MB`), and kilobytes or bytes below one megabyte.
fn size_label(bytes: u64) -> String {
    if bytes >= MB {
        if bytes % MB == 0 {
            format!("{}MB", bytes / MB)
        } else {
            format!("{:.1}MB", bytes as f64 / MB as f64)
        }
    } else if bytes >= KB {
        format!("{}KB", bytes / KB)
    } else {
        format!("{bytes} bytes")
    }
}
