//! Reusable building blocks for the page views.

mod alert;
pub use alert::{AlertBanner, AlertKind};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod contact_form;
pub use contact_form::ContactForm;

mod contact_table;
pub use contact_table::ContactTable;
