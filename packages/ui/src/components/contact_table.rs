use api::Contact;
use dioxus::prelude::*;

use crate::icons::{FaPenToSquare, FaTrash};
use crate::Icon;

/// Contacts as a table. Without handlers the table is read-only.
#[component]
pub fn ContactTable(
    contacts: Vec<Contact>,
    on_edit: Option<EventHandler<Contact>>,
    on_delete: Option<EventHandler<i64>>,
    #[props(default = "No contacts found".to_string())] empty_text: String,
) -> Element {
    if contacts.is_empty() {
        return rsx! {
            p { class: "empty-state", "{empty_text}" }
        };
    }

    let actions = on_edit.is_some() || on_delete.is_some();

    rsx! {
        table {
            class: "contact-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Email" }
                    th { "Phone" }
                    th { "Description" }
                    if actions {
                        th { "Actions" }
                    }
                }
            }
            tbody {
                for contact in contacts {
                    tr {
                        key: "{contact.id}",
                        td { class: "font-semibold", "{contact.name}" }
                        td { "{contact.email_or_empty()}" }
                        td { "{contact.phone_or_empty()}" }
                        td { class: "text-neutral-600", "{contact.description_or_empty()}" }
                        if actions {
                            td {
                                class: "flex gap-2",
                                if let Some(handler) = on_edit {
                                    button {
                                        class: "btn btn-icon",
                                        title: "Edit",
                                        onclick: {
                                            let contact = contact.clone();
                                            move |_| handler.call(contact.clone())
                                        },
                                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                    }
                                }
                                if let Some(handler) = on_delete {
                                    button {
                                        class: "btn btn-icon btn-danger",
                                        title: "Delete",
                                        onclick: {
                                            let id = contact.id;
                                            move |_| handler.call(id)
                                        },
                                        Icon { icon: FaTrash, width: 14, height: 14 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
