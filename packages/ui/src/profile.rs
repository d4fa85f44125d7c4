//! State of the profile card on the user dashboard.

use api::{check_image, ApiError, ImageUpload, ImageUploadResponse, UserProfile};

use crate::page_state::{LoadState, Messages};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileModel {
    pub profile: Option<UserProfile>,
    pub state: LoadState,
    pub messages: Messages,
    /// Image picked but not yet uploaded.
    pub selection: Option<ImageUpload>,
    pub uploading: bool,
}

impl ProfileModel {
    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<UserProfile, ApiError>) {
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                self.state = LoadState::Success;
                self.messages.dismiss_error();
            }
            Err(e) => {
                tracing::warn!("Loading profile failed: {}", e);
                self.state = LoadState::Failed;
                self.messages.fail("Failed to load profile");
            }
        }
    }

    pub fn image_path(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|p| p.image_path.as_deref())
            .filter(|p| !p.is_empty())
    }

    /// Vet a file by its metadata before its bytes are read. Returns `false`
    /// and raises the error banner when the file is unusable.
    pub fn accept_file(&mut self, content_type: &str, size: u64, max_bytes: u64) -> bool {
        match check_image(content_type, size, max_bytes) {
            Ok(()) => true,
            Err(e) => {
                self.selection = None;
                self.messages.fail(e.user_message("Please select an image file"));
                false
            }
        }
    }

    pub fn select(&mut self, upload: ImageUpload, max_bytes: u64) {
        match upload.validate(max_bytes) {
            Ok(()) => {
                self.messages.dismiss_error();
                self.selection = Some(upload);
            }
            Err(e) => {
                self.selection = None;
                self.messages.fail(e.user_message("Please select an image file"));
            }
        }
    }

    pub fn cancel_selection(&mut self) {
        self.selection = None;
    }

    /// Hand a copy of the selection over for upload. The selection stays
    /// until the upload succeeds. `None` when there is nothing to send or an
    /// upload is already running.
    pub fn begin_upload(&mut self) -> Option<ImageUpload> {
        if self.uploading {
            return None;
        }
        let Some(upload) = self.selection.clone() else {
            self.messages.fail("Please select an image file");
            return None;
        };
        self.uploading = true;
        self.messages.dismiss_error();
        Some(upload)
    }

    /// Returns the new image path on success. The caller records it in the
    /// stored session and reloads the profile.
    pub fn finish_upload(&mut self, result: Result<ImageUploadResponse, ApiError>) -> Option<String> {
        self.uploading = false;
        match result {
            Ok(resp) => {
                self.selection = None;
                self.messages.succeed("Profile image updated successfully!");
                Some(resp.image_path)
            }
            Err(e) => {
                tracing::warn!("Image upload failed: {}", e);
                self.messages.fail(e.user_message("Failed to upload image"));
                None
            }
        }
    }
}
