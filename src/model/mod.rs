//! Data types shared by the client and server builds.
//!
//! Everything in here compiles for both the WASM client and the native server: API DTOs,
//! the session marker cookie, and the validation rules for the login and shipping forms.

pub mod api;
pub mod form;
pub mod session;
pub mod shipping;
