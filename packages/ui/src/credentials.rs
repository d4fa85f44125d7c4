//! Login and registration forms for both portals.

use api::{ApiClient, ApiError, AuthResponse, Role, Session};

/// Which door the visitor came through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Portal {
    User,
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialsMode {
    Login,
    Register,
}

/// Where to go after a successful sign-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    UserHome,
    AdminHome,
}

/// The user portal sends admins to their own dashboard; the admin portal
/// always lands there.
pub fn landing(portal: Portal, role: Role) -> Landing {
    match (portal, role) {
        (Portal::Admin, _) | (Portal::User, Role::Admin) => Landing::AdminHome,
        (Portal::User, Role::User) => Landing::UserHome,
    }
}

const MIN_NAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialsForm {
    pub portal: Portal,
    pub mode: CredentialsMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl CredentialsForm {
    pub fn new(portal: Portal, mode: CredentialsMode) -> Self {
        Self {
            portal,
            mode,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            submitting: false,
            error: None,
        }
    }

    /// Banner text used when the server gives no explanation.
    pub fn fallback_message(&self) -> &'static str {
        match (self.portal, self.mode) {
            (Portal::User, CredentialsMode::Login) => "Login failed. Please try again.",
            (Portal::User, CredentialsMode::Register) => "Registration failed. Please try again.",
            (Portal::Admin, CredentialsMode::Login) => "Admin login failed. Please try again.",
            (Portal::Admin, CredentialsMode::Register) => {
                "Admin registration failed. Please try again."
            }
        }
    }

    /// Checks made before any request is sent.
    pub fn check(&self) -> Result<(), String> {
        if self.mode == CredentialsMode::Register {
            let name = self.name.trim();
            if name.is_empty() {
                return Err("Name is required".to_string());
            }
            if name.chars().count() < MIN_NAME_LEN {
                return Err(format!("Name must be at least {MIN_NAME_LEN} characters"));
            }
        }
        if !self.email.trim().contains('@') {
            return Err("Please enter a valid email".to_string());
        }
        if self.password.is_empty() {
            return Err("Please enter your password".to_string());
        }
        if self.mode == CredentialsMode::Register && self.password.chars().count() < MIN_PASSWORD_LEN
        {
            return Err(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
        Ok(())
    }

    /// Validate and mark the form busy. Returns `false`, with the error set,
    /// when the form should not be sent.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.error = None;
        if let Err(message) = self.check() {
            self.error = Some(message);
            return false;
        }
        self.submitting = true;
        true
    }

    /// Call the endpoint matching this form's portal and mode.
    pub async fn send(&self, api: &ApiClient) -> Result<AuthResponse, ApiError> {
        let email = self.email.trim();
        let name = self.name.trim();
        match (self.portal, self.mode) {
            (Portal::User, CredentialsMode::Login) => api.login(email, &self.password).await,
            (Portal::User, CredentialsMode::Register) => {
                api.register(name, email, &self.password).await
            }
            (Portal::Admin, CredentialsMode::Login) => {
                api.admin_login(email, &self.password).await
            }
            (Portal::Admin, CredentialsMode::Register) => {
                api.admin_register(name, email, &self.password).await
            }
        }
    }

    /// Record the outcome. On success the password is wiped and the new
    /// session returned for the caller to store.
    pub fn finish_submit(
        &mut self,
        result: Result<AuthResponse, ApiError>,
    ) -> Option<(Session, Landing)> {
        self.submitting = false;
        match result {
            Ok(resp) => {
                self.password.clear();
                let session = resp.into_session();
                let landing = landing(self.portal, session.role());
                Some((session, landing))
            }
            Err(e) => {
                tracing::warn!("Credentials rejected: {}", e);
                self.error = Some(e.user_message(self.fallback_message()));
                None
            }
        }
    }
}
