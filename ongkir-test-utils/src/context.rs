//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`: a mock RajaOngkir server
//! and the API key tests hand to the provider client.

use mockito::{Mock, Server, ServerGuard};

use crate::{constant::TEST_API_KEY, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_city_endpoint(&fixtures::provider::city_list_body(), 1)
///     .build()
///     .await?;
///
/// let state: AppState = test.to_app_state();
///
/// // ... exercise the code under test ...
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// API key the provider client is configured with, `None` to simulate a missing key
    pub api_key: Option<String>,

    /// Mock HTTP server standing in for RajaOngkir
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with a fresh mock server and the test API key.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        Ok(TestContext {
            api_key: Some(TEST_API_KEY.to_string()),
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock provider
    pub fn provider_url(&self) -> String {
        self.server.url()
    }

    /// Provider base URL and API key, the pair the provider client is built from
    pub fn provider_settings(&self) -> (String, Option<String>) {
        (self.provider_url(), self.api_key.clone())
    }

    /// Convert the provider settings into any type that can be constructed from them
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main ongkir crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(String, Option<String>)>,
    {
        T::from(self.provider_settings())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
