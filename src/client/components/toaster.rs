use dioxus::prelude::*;

use crate::client::store::toast::ToastState;

#[component]
pub fn Toaster() -> Element {
    let mut toasts = use_context::<Signal<ToastState>>();

    rsx!(
        div { class: "toast toast-end",
            for toast in toasts.read().toasts.iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: "alert {toast.kind.alert_class()} cursor-pointer",
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    span { "{toast.message}" }
                }
            }
        }
    )
}
