//! Admin dashboard: every user, their contacts, and user deletion.

use api::{ApiClient, Role};
use dioxus::prelude::*;
use ui::components::{ConfirmDialog, ContactTable, ModalOverlay};
use ui::icons::{FaArrowsRotate, FaEye, FaTrash};
use ui::{use_api, use_auth, use_config, AdminModel, AuthState, Icon, Messages};

use super::{check_session, expire_success, Banners};

fn role_badge(role: Role) -> &'static str {
    if role.is_admin() {
        "role-badge role-admin"
    } else {
        "role-badge"
    }
}

fn admin_messages(model: &mut AdminModel) -> &mut Messages {
    &mut model.messages
}

async fn load_users(mut model: Signal<AdminModel>, api: ApiClient, auth: Signal<AuthState>) {
    model.write().begin_load();
    let result = api.list_all_users().await;
    check_session(&result, auth, &api);
    model.write().finish_load(result);
}

#[component]
pub fn AdminDashboard() -> Element {
    let api = use_api();
    let auth = use_auth();
    let secs = use_config().ui.success_message_secs;
    let mut model = use_signal(AdminModel::default);

    use_hook({
        let api = api.clone();
        move || {
            spawn(load_users(model, api, auth));
        }
    });

    let reload = use_callback({
        let api = api.clone();
        move |_: ()| {
            spawn(load_users(model, api.clone(), auth));
        }
    });

    let view_contacts = use_callback({
        let api = api.clone();
        move |user_id: i64| {
            let api = api.clone();
            spawn(async move {
                let result = api.get_user_contacts(user_id).await;
                check_session(&result, auth, &api);
                model.write().finish_view_contacts(user_id, result);
            });
        }
    });

    let confirm_delete = use_callback({
        let api = api.clone();
        move |_: ()| {
            let Some(id) = model.write().confirm_delete() else {
                return;
            };
            let api = api.clone();
            spawn(async move {
                let result = api.delete_user(id).await;
                check_session(&result, auth, &api);
                let deleted = model.write().finish_delete(result);
                if deleted {
                    expire_success(model, secs, admin_messages);
                    load_users(model, api, auth).await;
                }
            });
        }
    });

    let state = model();
    let selected_name = state
        .selected
        .as_ref()
        .and_then(|s| state.user(s.user_id))
        .map(|u| u.name.clone())
        .unwrap_or_default();

    rsx! {
        section {
            class: "card",
            div {
                class: "flex justify-between items-center mb-4",
                div {
                    h2 { class: "section-title", "Admin Dashboard" }
                    p { class: "text-neutral-600", "Manage all users and their contacts" }
                }
                button {
                    class: "btn btn-secondary",
                    disabled: state.state.is_loading(),
                    onclick: move |_| reload.call(()),
                    Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                    span { "Refresh" }
                }
            }

            Banners {
                messages: state.messages.clone(),
                on_dismiss_error: move |_| model.write().messages.dismiss_error(),
            }

            if state.state.is_loading() && state.users.is_empty() {
                p { class: "loading", "Loading users..." }
            } else if state.users.is_empty() {
                p { class: "empty-state", "No users found" }
            } else {
                table {
                    class: "contact-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Contacts" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for user in state.users.iter().cloned() {
                            tr {
                                key: "{user.id}",
                                td { "{user.id}" }
                                td { class: "font-semibold", "{user.name}" }
                                td { "{user.email}" }
                                td {
                                    span {
                                        class: "{role_badge(user.role)}",
                                        "{user.role.label()}"
                                    }
                                }
                                td { "{user.contact_count()}" }
                                td {
                                    class: "flex gap-2",
                                    button {
                                        class: "btn btn-secondary btn-sm",
                                        onclick: move |_| view_contacts.call(user.id),
                                        Icon { icon: FaEye, width: 14, height: 14 }
                                        span { "View Contacts" }
                                    }
                                    button {
                                        class: "btn btn-danger btn-sm",
                                        onclick: move |_| model.write().request_delete(user.id),
                                        Icon { icon: FaTrash, width: 14, height: 14 }
                                        span { "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(selected) = state.selected.clone() {
            ModalOverlay {
                on_close: move |_| model.write().close_contacts(),
                width: "max-w-3xl",
                div {
                    class: "p-6",
                    h3 { class: "text-lg font-semibold mb-4", "Contacts of {selected_name}" }
                    ContactTable {
                        contacts: selected.contacts,
                        empty_text: "This user has no contacts",
                    }
                    div {
                        class: "flex justify-end mt-4",
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| model.write().close_contacts(),
                            "Close"
                        }
                    }
                }
            }
        }

        if state.pending_delete.is_some() {
            ConfirmDialog {
                title: "Delete User",
                message: "Are you sure you want to delete this user? All their contacts will also be deleted.",
                busy: state.deleting,
                on_confirm: move |_| confirm_delete.call(()),
                on_cancel: move |_| model.write().cancel_delete(),
            }
        }
    }
}
