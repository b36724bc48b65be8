//! Client for the RajaOngkir shipping rates API.
//!
//! The client forwards a request, checks that the provider answered with a success status and a
//! JSON body, and hands the body back untouched. It never retries and never reshapes payloads.

pub mod client;

pub use client::{ApiKeySource, ProviderClient};
