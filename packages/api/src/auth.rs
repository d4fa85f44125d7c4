//! Token-issuing endpoints under `/auth`.
//!
//! None of these calls touch the session store: saving the returned session
//! is the caller's decision.

use reqwest::Method;
use serde::Serialize;

use crate::error::Endpoint;
use crate::models::AuthResponse;
use crate::{ApiClient, ApiError};

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Register a regular user.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.post_register("/auth/register", name, email, password).await
    }

    /// Log in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.post_login("/auth/login", email, password).await
    }

    /// Register an admin account. The server decides whether it is granted.
    pub async fn admin_register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.post_register("/auth/admin/register", name, email, password)
            .await
    }

    /// Log in through the admin endpoint, which rejects non-admin accounts.
    pub async fn admin_login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.post_login("/auth/admin/login", email, password).await
    }

    async fn post_register(
        &self,
        path: &str,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = RegisterRequest {
            name,
            email,
            password,
        };
        self.send_json(self.request(Method::POST, path).json(&body), Endpoint::Register)
            .await
    }

    async fn post_login(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest { email, password };
        self.send_json(self.request(Method::POST, path).json(&body), Endpoint::Login)
            .await
    }
}
