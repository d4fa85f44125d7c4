//! User dashboard: profile card and the contact list.

use api::{ApiClient, Contact, ContactDraft, ImageUpload};
use dioxus::prelude::*;
use ui::components::{ConfirmDialog, ContactForm, ContactTable};
use ui::icons::{FaCamera, FaMagnifyingGlass, FaPlus, FaUser};
use ui::{use_api, use_auth, use_config, AuthState, ContactsModel, Icon, Messages, ProfileModel};

use super::{check_session, expire_success, Banners};

fn contact_messages(model: &mut ContactsModel) -> &mut Messages {
    &mut model.messages
}

fn profile_messages(model: &mut ProfileModel) -> &mut Messages {
    &mut model.messages
}

async fn load_contacts(mut model: Signal<ContactsModel>, api: ApiClient, auth: Signal<AuthState>) {
    let query = model.write().begin_load();
    let result = query.run(&api).await;
    check_session(&result, auth, &api);
    model.write().finish_load(&query, result);
}

async fn load_profile(mut model: Signal<ProfileModel>, api: ApiClient, auth: Signal<AuthState>) {
    model.write().begin_load();
    let result = api.get_profile().await;
    check_session(&result, auth, &api);
    model.write().finish_load(result);
}

#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let auth = use_auth();
    let config = use_config();
    let secs = config.ui.success_message_secs;
    let max_bytes = config.upload.max_image_bytes;

    let mut contacts = use_signal(ContactsModel::default);
    let mut profile = use_signal(ProfileModel::default);

    // The image endpoint wants the bearer token, which an `<img src>` cannot
    // send, so the avatar is fetched and inlined as a data URL.
    let image_path = use_memo(move || profile.read().image_path().map(str::to_string));
    let avatar = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let path = image_path();
            async move {
                let path = path?;
                let result = api.fetch_image(&path).await;
                check_session(&result, auth, &api);
                match result {
                    Ok(image) => Some(image.data_url()),
                    Err(e) => {
                        tracing::warn!("Loading profile image failed: {}", e);
                        None
                    }
                }
            }
        }
    });

    use_hook({
        let api = api.clone();
        move || {
            spawn(load_contacts(contacts, api.clone(), auth));
            spawn(load_profile(profile, api, auth));
        }
    });

    let reload = use_callback({
        let api = api.clone();
        move |_: ()| {
            spawn(load_contacts(contacts, api.clone(), auth));
        }
    });

    let save = use_callback({
        let api = api.clone();
        move |_: ()| {
            let Some(request) = contacts.write().begin_save() else {
                return;
            };
            let api = api.clone();
            spawn(async move {
                let result = request.run(&api).await;
                check_session(&result, auth, &api);
                let saved = contacts.write().finish_save(&request, result);
                if saved {
                    expire_success(contacts, secs, contact_messages);
                    load_contacts(contacts, api, auth).await;
                }
            });
        }
    });

    let confirm_delete = use_callback({
        let api = api.clone();
        move |_: ()| {
            let Some(id) = contacts.write().confirm_delete() else {
                return;
            };
            let api = api.clone();
            spawn(async move {
                let result = api.delete_contact(id).await;
                check_session(&result, auth, &api);
                let deleted = contacts.write().finish_delete(result);
                if deleted {
                    expire_success(contacts, secs, contact_messages);
                    load_contacts(contacts, api, auth).await;
                }
            });
        }
    });

    let upload = use_callback({
        let api = api.clone();
        move |_: ()| {
            let Some(image) = profile.write().begin_upload() else {
                return;
            };
            let api = api.clone();
            let mut avatar = avatar;
            spawn(async move {
                let result = api.upload_profile_image(image).await;
                check_session(&result, auth, &api);
                let uploaded = profile.write().finish_upload(result);
                if let Some(path) = uploaded {
                    api.session().update_user(|user| user.image_path = Some(path));
                    ui::resync(auth, &api);
                    expire_success(profile, secs, profile_messages);
                    load_profile(profile, api, auth).await;
                    avatar.restart();
                }
            });
        }
    });

    let on_file = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let content_type = file.content_type().unwrap_or_default();
        if !profile.write().accept_file(&content_type, file.size(), max_bytes) {
            return;
        }
        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => {
                    let image = ImageUpload::new(file.name(), content_type, bytes.to_vec());
                    profile.write().select(image, max_bytes);
                }
                Err(e) => {
                    tracing::warn!("Reading selected file failed: {:?}", e);
                    profile.write().messages.fail("Please select an image file");
                }
            }
        });
    };

    let list = contacts();
    let me = profile();
    let session = auth().session;

    let display_name = me
        .profile
        .as_ref()
        .map(|p| p.name.clone())
        .or_else(|| session.as_ref().map(|s| s.user.display_name().to_string()))
        .unwrap_or_else(|| "User".to_string());
    let email = me
        .profile
        .as_ref()
        .map(|p| p.email.clone())
        .or_else(|| session.as_ref().map(|s| s.user.email.clone()))
        .unwrap_or_default();
    let image_src = avatar.read().clone().flatten();
    let contact_count = list.contacts.len();
    let delete_prompt = match list.pending_delete_contact() {
        Some(contact) => format!("Are you sure you want to delete {}?", contact.name),
        None => "Are you sure you want to delete this contact?".to_string(),
    };

    rsx! {
        section {
            class: "card profile-card",
            Banners {
                messages: me.messages.clone(),
                on_dismiss_error: move |_| profile.write().messages.dismiss_error(),
            }
            div {
                class: "flex items-center gap-6",
                label {
                    class: "avatar",
                    title: "Change profile image",
                    if let Some(src) = image_src {
                        img { src: "{src}", alt: "Profile" }
                    } else {
                        Icon { icon: FaUser, width: 48, height: 48 }
                    }
                    span {
                        class: "avatar-badge",
                        Icon { icon: FaCamera, width: 14, height: 14 }
                    }
                    input {
                        class: "hidden",
                        r#type: "file",
                        accept: "image/*",
                        onchange: on_file,
                    }
                }
                div {
                    h2 { class: "profile-name", "{display_name}" }
                    p { class: "text-neutral-600", "{email}" }
                    if let Some(selection) = me.selection.clone() {
                        div {
                            class: "flex items-center gap-2 mt-2",
                            span { class: "text-sm", "{selection.file_name}" }
                            button {
                                class: "btn btn-primary btn-sm",
                                disabled: me.uploading,
                                onclick: move |_| upload.call(()),
                                if me.uploading { "Uploading..." } else { "Save Image" }
                            }
                            button {
                                class: "btn btn-secondary btn-sm",
                                disabled: me.uploading,
                                onclick: move |_| profile.write().cancel_selection(),
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }

        section {
            class: "card",
            div {
                class: "flex justify-between items-center mb-4",
                div {
                    h2 { class: "section-title", "My Contacts" }
                    p { class: "text-neutral-600", "{contact_count} contacts" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| contacts.write().open_new(),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Add Contact" }
                }
            }

            Banners {
                messages: list.messages.clone(),
                on_dismiss_error: move |_| contacts.write().messages.dismiss_error(),
            }

            form {
                class: "search-bar",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    reload.call(());
                },
                input {
                    class: "input",
                    r#type: "search",
                    placeholder: "Search by name, email or phone...",
                    value: "{list.keyword}",
                    oninput: move |evt: FormEvent| contacts.write().keyword = evt.value(),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: list.state.is_loading(),
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    span { "Search" }
                }
                if !list.keyword.is_empty() {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            contacts.write().reset_search();
                            reload.call(());
                        },
                        "Clear"
                    }
                }
            }

            if list.state.is_loading() && list.contacts.is_empty() {
                p { class: "loading", "Loading contacts..." }
            } else {
                ContactTable {
                    contacts: list.contacts.clone(),
                    on_edit: move |contact: Contact| contacts.write().open_edit(&contact),
                    on_delete: move |id: i64| contacts.write().request_delete(id),
                    empty_text: "No contacts yet. Add your first contact!",
                }
            }
        }

        if let Some(draft) = list.draft.clone() {
            ContactForm {
                draft: draft,
                editing: list.editing.is_some(),
                saving: list.saving,
                on_change: move |next: ContactDraft| contacts.write().draft = Some(next),
                on_submit: move |_| save.call(()),
                on_cancel: move |_| contacts.write().close_form(),
            }
        }

        if list.pending_delete.is_some() {
            ConfirmDialog {
                title: "Delete Contact",
                message: delete_prompt,
                busy: list.deleting,
                on_confirm: move |_| confirm_delete.call(()),
                on_cancel: move |_| contacts.write().cancel_delete(),
            }
        }
    }
}
