use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        store::toast::{notify, ToastKind, ToastState},
        util::browser::{navigate_after_delay, write_session_marker},
    },
    model::{
        form::{self, LoginFormErrors},
        session::PROTECTED_PATH,
    },
};

/// Email/password form writing the session marker
///
/// The password is only validated locally. Nothing is sent to the server: a valid submission
/// writes the cookie and then loads the protected page.
#[component]
pub fn LoginForm() -> Element {
    let toasts = use_context::<Signal<ToastState>>();
    let mut fields = use_signal(form::LoginForm::default);
    let mut errors = use_signal(LoginFormErrors::default);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        if submitting() {
            return;
        }

        let marker = match fields.read().validate() {
            Ok(marker) => marker,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };

        errors.set(LoginFormErrors::default());
        submitting.set(true);

        spawn(async move {
            if let Err(err) = write_session_marker(&marker).await {
                tracing::error!("{}", err);
                notify(toasts, ToastKind::Error, "Login failed");
                submitting.set(false);
                return;
            }

            notify(toasts, ToastKind::Success, "Login successful!");

            if let Err(err) = navigate_after_delay(PROTECTED_PATH).await {
                tracing::error!("{}", err);
                submitting.set(false);
            }
        });
    };

    rsx!(
        form {
            class: "card shadow-sm w-full max-w-96",
            novalidate: true,
            onsubmit,
            div { class: "card-body",
                h2 { class: "card-title", "Login" }
                fieldset { class: "fieldset",
                    label { class: "label", r#for: "email", "Email" }
                    input {
                        id: "email",
                        class: "input w-full",
                        r#type: "email",
                        autocomplete: "email",
                        value: "{fields.read().email}",
                        oninput: move |evt| fields.write().email = evt.value(),
                    }
                    if let Some(message) = errors.read().email {
                        p { class: "text-error text-sm", "{message}" }
                    }
                    label { class: "label", r#for: "password", "Password" }
                    input {
                        id: "password",
                        class: "input w-full",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: "{fields.read().password}",
                        oninput: move |evt| fields.write().password = evt.value(),
                    }
                    if let Some(message) = errors.read().password {
                        p { class: "text-error text-sm", "{message}" }
                    }
                }
                div { class: "card-actions justify-end",
                    button {
                        class: "btn btn-primary w-28",
                        r#type: "submit",
                        disabled: submitting(),
                        "Login"
                    }
                }
            }
        }
    )
}
