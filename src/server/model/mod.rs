//! Server application models and type definitions.
//!
//! This module contains the application state shared by the HTTP handlers and the access gate's
//! routing decision, plus the cost query relayed to the provider.

pub mod app;
pub mod gate;
pub mod shipping;
