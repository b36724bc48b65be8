//! Test configuration constants for the provider client.
//!
//! These values are placeholders, not real credentials.

/// API key given to the provider client in tests.
///
/// Every mock endpoint only matches requests carrying this key in the `key` header.
pub static TEST_API_KEY: &str = "test_api_key";

/// Header RajaOngkir reads the API key from.
pub static API_KEY_HEADER: &str = "key";
