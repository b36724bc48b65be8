use dioxus::prelude::*;

use crate::client::{components::Toaster, router::Route, store::toast::ToastState};

const TAILWIND_CDN: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";
const DAISYUI_CDN: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(ToastState::default()));

    rsx! {
        document::Stylesheet { href: DAISYUI_CDN }
        document::Script { src: TAILWIND_CDN }
        Router::<Route> {}
        Toaster {}
    }
}
