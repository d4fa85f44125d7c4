use api::ContactDraft;
use dioxus::prelude::*;

use super::ModalOverlay;

/// Add/edit form for a contact, shown in a modal.
///
/// The draft lives with the caller; every keystroke is reported through
/// `on_change`.
#[component]
pub fn ContactForm(
    draft: ContactDraft,
    editing: bool,
    #[props(default)] saving: bool,
    on_change: EventHandler<ContactDraft>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let title = if editing { "Edit Contact" } else { "Add New Contact" };
    let submit_label = match (saving, editing) {
        (true, _) => "Saving...",
        (false, true) => "Update Contact",
        (false, false) => "Add Contact",
    };

    let name_draft = draft.clone();
    let email_draft = draft.clone();
    let phone_draft = draft.clone();
    let description_draft = draft.clone();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            width: "max-w-lg",
            form {
                class: "contact-form p-6 flex flex-col gap-3",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },

                h3 { class: "text-lg font-semibold mb-2", "{title}" }

                label { class: "field-label", "Name *" }
                input {
                    class: "input",
                    r#type: "text",
                    required: true,
                    placeholder: "Enter contact name",
                    value: "{draft.name}",
                    oninput: move |evt: FormEvent| {
                        let mut next = name_draft.clone();
                        next.name = evt.value();
                        on_change.call(next);
                    },
                }

                label { class: "field-label", "Email" }
                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "Enter email address",
                    value: "{draft.email}",
                    oninput: move |evt: FormEvent| {
                        let mut next = email_draft.clone();
                        next.email = evt.value();
                        on_change.call(next);
                    },
                }

                label { class: "field-label", "Phone" }
                input {
                    class: "input",
                    r#type: "tel",
                    placeholder: "Enter phone number",
                    value: "{draft.phone}",
                    oninput: move |evt: FormEvent| {
                        let mut next = phone_draft.clone();
                        next.phone = evt.value();
                        on_change.call(next);
                    },
                }

                label { class: "field-label", "Description" }
                textarea {
                    class: "input",
                    rows: "3",
                    placeholder: "Enter description (optional)",
                    value: "{draft.description}",
                    oninput: move |evt: FormEvent| {
                        let mut next = description_draft.clone();
                        next.description = evt.value();
                        on_change.call(next);
                    },
                }

                div {
                    class: "flex justify-end gap-2 mt-4",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: saving,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving,
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
