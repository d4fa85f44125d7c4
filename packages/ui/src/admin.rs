//! State of the admin dashboard.

use api::{ApiError, Contact, UserProfile};

use crate::page_state::{LoadState, Messages};

/// Contacts of the user opened in the contacts dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedUser {
    pub user_id: i64,
    pub contacts: Vec<Contact>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminModel {
    pub users: Vec<UserProfile>,
    pub state: LoadState,
    pub messages: Messages,
    pub selected: Option<SelectedUser>,
    pub pending_delete: Option<i64>,
    pub deleting: bool,
}

impl AdminModel {
    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<Vec<UserProfile>, ApiError>) {
        match result {
            Ok(users) => {
                self.users = users;
                self.state = LoadState::Success;
                self.messages.dismiss_error();
            }
            Err(e) => {
                tracing::warn!("Loading users failed: {}", e);
                self.state = LoadState::Failed;
                self.messages.fail("Failed to load users");
            }
        }
    }

    pub fn user(&self, id: i64) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn finish_view_contacts(&mut self, user_id: i64, result: Result<Vec<Contact>, ApiError>) {
        match result {
            Ok(contacts) => self.selected = Some(SelectedUser { user_id, contacts }),
            Err(e) => {
                tracing::warn!("Loading contacts of user {} failed: {}", user_id, e);
                self.messages.fail("Failed to load contacts");
            }
        }
    }

    pub fn close_contacts(&mut self) {
        self.selected = None;
    }

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) -> Option<i64> {
        if self.deleting {
            return None;
        }
        let id = self.pending_delete?;
        self.deleting = true;
        Some(id)
    }

    /// Returns `true` when the user list should be reloaded.
    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> bool {
        self.deleting = false;
        self.pending_delete = None;
        match result {
            Ok(()) => {
                self.messages.succeed("User deleted successfully");
                true
            }
            Err(e) => {
                tracing::warn!("Deleting user failed: {}", e);
                self.messages.fail("Failed to delete user");
                false
            }
        }
    }
}
