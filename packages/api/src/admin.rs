//! Admin-only endpoints. The server enforces the role; the client only sends
//! the token.

use reqwest::Method;

use crate::error::Endpoint;
use crate::models::{Contact, UserProfile};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Every user, each with their contacts embedded.
    pub async fn list_all_users(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.send_json(self.request(Method::GET, "/admin/users"), Endpoint::Resource)
            .await
    }

    /// Delete a user. The server deletes their contacts with them.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &format!("/admin/users/{id}"));
        self.send_empty(builder, Endpoint::Resource).await
    }

    pub async fn get_user_contacts(&self, user_id: i64) -> Result<Vec<Contact>, ApiError> {
        let builder = self.request(Method::GET, &format!("/admin/users/{user_id}/contacts"));
        self.send_json(builder, Endpoint::Resource).await
    }
}
