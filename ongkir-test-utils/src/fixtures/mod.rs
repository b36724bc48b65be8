//! Test fixtures for the mock RajaOngkir server.
//!
//! - `provider` - sample provider payloads and mock endpoints serving them

pub mod provider;
