//! Wire models exchanged with the REST API.

mod contact;
mod user;

pub use contact::{Contact, ContactDraft};
pub use user::{
    check_image, AuthResponse, Health, ImageUpload, ImageUploadResponse, StoredImage, UserProfile,
};
