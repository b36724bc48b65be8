use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::{LoginForm, Page};

#[component]
pub fn Login() -> Element {
    rsx!(
        Title { "Login | Ongkir" }
        Page { class: "flex items-center justify-center",
            LoginForm {}
        }
    )
}
