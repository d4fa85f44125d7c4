//! Login and registration pages for both portals.

use dioxus::prelude::*;
use ui::{sign_in, use_api, use_auth, CredentialsForm, CredentialsMode, Portal};

use crate::Route;

#[component]
pub fn Login() -> Element {
    rsx! { CredentialsPage { portal: Portal::User, mode: CredentialsMode::Login } }
}

#[component]
pub fn Register() -> Element {
    rsx! { CredentialsPage { portal: Portal::User, mode: CredentialsMode::Register } }
}

#[component]
pub fn AdminLogin() -> Element {
    rsx! { CredentialsPage { portal: Portal::Admin, mode: CredentialsMode::Login } }
}

#[component]
pub fn AdminRegister() -> Element {
    rsx! { CredentialsPage { portal: Portal::Admin, mode: CredentialsMode::Register } }
}

struct PageText {
    title: &'static str,
    subtitle: &'static str,
    submit: &'static str,
    busy: &'static str,
    switch_prompt: &'static str,
    switch_label: &'static str,
    switch_to: Route,
}

fn page_text(portal: Portal, mode: CredentialsMode) -> PageText {
    match (portal, mode) {
        (Portal::User, CredentialsMode::Login) => PageText {
            title: "Welcome Back",
            subtitle: "Sign in to manage your contacts",
            submit: "Login",
            busy: "Logging in...",
            switch_prompt: "Don't have an account? ",
            switch_label: "Register here",
            switch_to: Route::Register {},
        },
        (Portal::User, CredentialsMode::Register) => PageText {
            title: "Create Account",
            subtitle: "Start organising your contacts",
            submit: "Register",
            busy: "Creating account...",
            switch_prompt: "Already have an account? ",
            switch_label: "Login here",
            switch_to: Route::Login {},
        },
        (Portal::Admin, CredentialsMode::Login) => PageText {
            title: "Admin Login",
            subtitle: "Sign in to the administration portal",
            submit: "Login as Admin",
            busy: "Logging in...",
            switch_prompt: "Need an admin account? ",
            switch_label: "Register as admin",
            switch_to: Route::AdminRegister {},
        },
        (Portal::Admin, CredentialsMode::Register) => PageText {
            title: "Admin Registration",
            subtitle: "Create an administrator account",
            submit: "Register as Admin",
            busy: "Creating account...",
            switch_prompt: "Already an admin? ",
            switch_label: "Login here",
            switch_to: Route::AdminLogin {},
        },
    }
}

#[component]
fn CredentialsPage(portal: Portal, mode: CredentialsMode) -> Element {
    let auth = use_auth();
    let api = use_api();
    let nav = use_navigator();
    let mut form = use_signal(|| CredentialsForm::new(portal, mode));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if !form.write().begin_submit() {
            return;
        }
        let api = api.clone();
        spawn(async move {
            let snapshot = form.peek().clone();
            let result = snapshot.send(&api).await;
            let outcome = form.write().finish_submit(result);
            if let Some((session, landing)) = outcome {
                sign_in(auth, &api, session);
                nav.replace(Route::landing(landing));
            }
        });
    };

    let text = page_text(portal, mode);
    let state = form();
    let registering = mode == CredentialsMode::Register;
    let password_hint = if registering {
        "At least 6 characters"
    } else {
        "Enter your password"
    };

    rsx! {
        div {
            class: "auth-card",
            h1 { class: "auth-title", "{text.title}" }
            p { class: "auth-subtitle", "{text.subtitle}" }

            form {
                class: "flex flex-col gap-3",
                onsubmit: onsubmit,

                if let Some(err) = state.error.clone() {
                    ui::components::AlertBanner {
                        kind: ui::components::AlertKind::Error,
                        message: err,
                        on_dismiss: move |_| form.write().error = None,
                    }
                }

                if registering {
                    label { class: "field-label", "Full Name" }
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: "Enter your full name",
                        value: "{state.name}",
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                }

                label { class: "field-label", "Email Address" }
                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "Enter your email",
                    value: "{state.email}",
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }

                label { class: "field-label", "Password" }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: password_hint,
                    value: "{state.password}",
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }

                button {
                    class: "btn btn-primary w-full",
                    r#type: "submit",
                    disabled: state.submitting,
                    if state.submitting { "{text.busy}" } else { "{text.submit}" }
                }
            }

            p {
                class: "auth-switch",
                "{text.switch_prompt}"
                Link { to: text.switch_to.clone(), "{text.switch_label}" }
            }
        }
    }
}
