//! Server application core modules.
//!
//! This module contains all server-side functionality: the access gate that guards the login
//! and shipping pages, the two proxy endpoints that relay requests to the RajaOngkir rates API,
//! configuration, and error handling. Nothing here stores state between requests.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod model;
pub mod provider;
pub mod router;
pub mod service;
pub mod startup;
