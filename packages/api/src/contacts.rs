//! Contact CRUD for the authenticated user.

use reqwest::Method;

use crate::error::Endpoint;
use crate::models::{Contact, ContactDraft};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// All of the caller's contacts, in server order.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ApiError> {
        self.send_json(self.request(Method::GET, "/contacts"), Endpoint::Resource)
            .await
    }

    /// Contacts matching `keyword`. Matching is done by the server.
    pub async fn search_contacts(&self, keyword: &str) -> Result<Vec<Contact>, ApiError> {
        let builder = self
            .request(Method::GET, "/contacts/search")
            .query(&[("keyword", keyword)]);
        self.send_json(builder, Endpoint::Resource).await
    }

    pub async fn create_contact(&self, draft: &ContactDraft) -> Result<Contact, ApiError> {
        draft.validate()?;
        let builder = self.request(Method::POST, "/contacts").json(draft);
        self.send_json(builder, Endpoint::Resource).await
    }

    pub async fn update_contact(&self, id: i64, draft: &ContactDraft) -> Result<Contact, ApiError> {
        draft.validate()?;
        let builder = self
            .request(Method::PUT, &format!("/contacts/{id}"))
            .json(draft);
        self.send_json(builder, Endpoint::Resource).await
    }

    pub async fn delete_contact(&self, id: i64) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &format!("/contacts/{id}"));
        self.send_empty(builder, Endpoint::Resource).await
    }
}
