use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Guarded, Home, Login, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/guarded")]
    Guarded {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
