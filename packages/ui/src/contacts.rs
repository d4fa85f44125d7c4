//! State of the user dashboard's contact list.
//!
//! The model never updates the list optimistically: every successful
//! mutation is followed by a reload, and a failed one leaves the list as it
//! was.

use api::{ApiClient, ApiError, Contact, ContactDraft};

use crate::page_state::{LoadState, Messages};

/// What to fetch for the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactQuery {
    All,
    Search(String),
}

impl ContactQuery {
    /// A blank keyword means "everything"; the search endpoint is not used.
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword.trim().is_empty() {
            ContactQuery::All
        } else {
            ContactQuery::Search(keyword.to_string())
        }
    }

    pub async fn run(&self, api: &ApiClient) -> Result<Vec<Contact>, ApiError> {
        match self {
            ContactQuery::All => api.list_contacts().await,
            ContactQuery::Search(keyword) => api.search_contacts(keyword).await,
        }
    }

    fn failure_message(&self) -> &'static str {
        match self {
            ContactQuery::All => "Failed to load contacts",
            ContactQuery::Search(_) => "Search failed",
        }
    }
}

/// A pending create or update.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveRequest {
    Create(ContactDraft),
    Update(i64, ContactDraft),
}

impl SaveRequest {
    pub async fn run(&self, api: &ApiClient) -> Result<Contact, ApiError> {
        match self {
            SaveRequest::Create(draft) => api.create_contact(draft).await,
            SaveRequest::Update(id, draft) => api.update_contact(*id, draft).await,
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            SaveRequest::Create(_) => "Contact added successfully",
            SaveRequest::Update(..) => "Contact updated successfully",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactsModel {
    pub contacts: Vec<Contact>,
    pub keyword: String,
    pub state: LoadState,
    pub messages: Messages,
    /// Form contents while the contact form is open.
    pub draft: Option<ContactDraft>,
    /// Id of the contact being edited; `None` while adding.
    pub editing: Option<i64>,
    pub saving: bool,
    /// Contact waiting for delete confirmation.
    pub pending_delete: Option<i64>,
    pub deleting: bool,
}

impl ContactsModel {
    pub fn begin_load(&mut self) -> ContactQuery {
        self.state = LoadState::Loading;
        ContactQuery::from_keyword(&self.keyword)
    }

    pub fn finish_load(&mut self, query: &ContactQuery, result: Result<Vec<Contact>, ApiError>) {
        match result {
            Ok(contacts) => {
                self.contacts = contacts;
                self.state = LoadState::Success;
                self.messages.dismiss_error();
            }
            Err(e) => {
                tracing::warn!("Loading contacts failed: {}", e);
                self.state = LoadState::Failed;
                self.messages.fail(query.failure_message());
            }
        }
    }

    /// Clear the keyword; the caller reloads.
    pub fn reset_search(&mut self) {
        self.keyword.clear();
    }

    pub fn open_new(&mut self) {
        self.editing = None;
        self.draft = Some(ContactDraft::default());
    }

    pub fn open_edit(&mut self, contact: &Contact) {
        self.editing = Some(contact.id);
        self.draft = Some(ContactDraft::from_contact(contact));
    }

    pub fn close_form(&mut self) {
        self.editing = None;
        self.draft = None;
    }

    pub fn draft_mut(&mut self) -> Option<&mut ContactDraft> {
        self.draft.as_mut()
    }

    /// Start saving the open draft. `None` when nothing should be sent.
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        if self.saving {
            return None;
        }
        let draft = self.draft.clone()?;
        if let Err(e) = draft.validate() {
            self.messages.fail(e.user_message("Operation failed"));
            return None;
        }
        self.saving = true;
        Some(match self.editing {
            Some(id) => SaveRequest::Update(id, draft),
            None => SaveRequest::Create(draft),
        })
    }

    /// Returns `true` when the list should be reloaded.
    pub fn finish_save(&mut self, request: &SaveRequest, result: Result<Contact, ApiError>) -> bool {
        self.saving = false;
        match result {
            Ok(_) => {
                self.close_form();
                self.messages.succeed(request.success_message());
                true
            }
            Err(e) => {
                tracing::warn!("Saving contact failed: {}", e);
                self.messages.fail(e.user_message("Operation failed"));
                false
            }
        }
    }

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete and return the id to send.
    pub fn confirm_delete(&mut self) -> Option<i64> {
        if self.deleting {
            return None;
        }
        let id = self.pending_delete?;
        self.deleting = true;
        Some(id)
    }

    /// Returns `true` when the list should be reloaded.
    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> bool {
        self.deleting = false;
        self.pending_delete = None;
        match result {
            Ok(()) => {
                self.messages.succeed("Contact deleted successfully");
                true
            }
            Err(e) => {
                tracing::warn!("Deleting contact failed: {}", e);
                self.messages.fail("Failed to delete contact");
                false
            }
        }
    }

    pub fn pending_delete_contact(&self) -> Option<&Contact> {
        let id = self.pending_delete?;
        self.contacts.iter().find(|c| c.id == id)
    }
}
