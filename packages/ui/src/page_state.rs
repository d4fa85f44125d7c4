//! Shared pieces of page state.

/// Lifecycle of a page's data: `Idle → Loading → {Success, Failed}`, and
/// back to `Loading` on every refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// The error and success banners a page shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Messages {
    pub error: Option<String>,
    pub success: Option<String>,
}

impl Messages {
    pub fn fail(&mut self, message: impl Into<String>) {
        self.success = None;
        self.error = Some(message.into());
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.error = None;
        self.success = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Drop the success banner if it still shows `message`. A newer message
    /// is left alone.
    pub fn expire_success(&mut self, message: &str) {
        if self.success.as_deref() == Some(message) {
            self.success = None;
        }
    }
}
