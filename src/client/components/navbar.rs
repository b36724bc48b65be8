use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTruck;
use dioxus_free_icons::Icon;

use crate::{
    client::router::Route,
    model::session::{LOGIN_PATH, PROTECTED_PATH},
};

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        Icon {
                            width: 24,
                            height: 24,
                            icon: FaTruck
                        }
                        p { class: "text-xl",
                            "Ongkir"
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                ul { class: "flex gap-2",
                    // Plain links so the server decides where these land
                    li {
                        a { href: PROTECTED_PATH, class: "btn btn-ghost",
                            "Check Costs"
                        }
                    }
                    li {
                        a { href: LOGIN_PATH, class: "btn btn-ghost",
                            "Login"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
