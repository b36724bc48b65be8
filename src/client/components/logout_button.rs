use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        store::toast::{notify, ToastKind, ToastState},
        util::browser::{navigate_after_delay, remove_session_marker},
    },
    model::session::LOGIN_PATH,
};

#[component]
pub fn LogoutButton() -> Element {
    let toasts = use_context::<Signal<ToastState>>();
    let mut pending = use_signal(|| false);

    let onclick = move |_| {
        if pending() {
            return;
        }
        pending.set(true);

        spawn(async move {
            if let Err(err) = remove_session_marker().await {
                tracing::error!("{}", err);
                notify(toasts, ToastKind::Error, "Logout failed");
                pending.set(false);
                return;
            }

            notify(toasts, ToastKind::Success, "Logout successful!");

            if let Err(err) = navigate_after_delay(LOGIN_PATH).await {
                tracing::error!("{}", err);
                pending.set(false);
            }
        });
    };

    rsx!(
        button {
            class: "btn btn-outline flex gap-2",
            disabled: pending(),
            onclick,
            Icon {
                width: 20,
                height: 20,
                icon: FaRightFromBracket
            }
            p { "Logout" }
        }
    )
}
