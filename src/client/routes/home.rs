use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{client::components::Page, model::session::LOGIN_PATH};

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Ongkir" }
        Meta {
            name: "description",
            content: "Compare shipping costs between Indonesian cities."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-256",
                p { class: "text-2xl",
                    "Welcome to Ongkir"
                }
                p {
                    "Look up what JNE, POS Indonesia and TIKI charge to send a parcel between two cities."
                }
                p {
                    "Log in to start checking shipping costs."
                }
                a { href: LOGIN_PATH,
                    button {
                        class: "btn btn-primary w-28",
                        "Login"
                    }
                }
            }
        }
    )
}
