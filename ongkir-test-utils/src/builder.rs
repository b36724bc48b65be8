//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring the mock provider before a test
//! runs. Calls are queued and the mock endpoints are only created during `build()`.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    api_key: bool,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    city_endpoints: Vec<(String, usize)>, // (body, expected_requests)
    failing_city_endpoints: Vec<(usize, usize)>, // (status, expected_requests)
    cost_endpoints: Vec<(Value, String, usize)>, // (expected request, body, expected_requests)
    failing_cost_endpoints: Vec<(usize, usize)>, // (status, expected_requests)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes a builder with the test API key and no mock endpoints.
    pub fn new() -> Self {
        Self {
            api_key: true,
            mock_builders: Vec::new(),
            city_endpoints: Vec::new(),
            failing_city_endpoints: Vec::new(),
            cost_endpoints: Vec::new(),
            failing_cost_endpoints: Vec::new(),
        }
    }

    /// Leave the provider client without an API key.
    pub fn without_api_key(mut self) -> Self {
        self.api_key = false;
        self
    }

    /// Add mock city list endpoint to the test server.
    ///
    /// Creates a mock `GET /city` endpoint returning `body` with status 200. The mock will
    /// verify it was called exactly `expected_requests` times.
    ///
    /// # Arguments
    /// - `body` - Raw response body, not required to be valid JSON
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_city_endpoint(mut self, body: &str, expected_requests: usize) -> Self {
        self.city_endpoints
            .push((body.to_string(), expected_requests));
        self
    }

    /// Add a mock city list endpoint answering with an error status.
    ///
    /// # Arguments
    /// - `status` - HTTP status the endpoint responds with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_failing_city_endpoint(mut self, status: usize, expected_requests: usize) -> Self {
        self.failing_city_endpoints.push((status, expected_requests));
        self
    }

    /// Add mock cost lookup endpoint to the test server.
    ///
    /// Creates a mock `POST /cost` endpoint that only matches a JSON body equal to `request`
    /// and returns `body` with status 200.
    ///
    /// # Arguments
    /// - `request` - JSON body the endpoint expects to receive
    /// - `body` - Raw response body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_cost_endpoint(
        mut self,
        request: Value,
        body: &str,
        expected_requests: usize,
    ) -> Self {
        self.cost_endpoints
            .push((request, body.to_string(), expected_requests));
        self
    }

    /// Add a mock cost lookup endpoint answering with an error status.
    ///
    /// # Arguments
    /// - `status` - HTTP status the endpoint responds with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_failing_cost_endpoint(mut self, status: usize, expected_requests: usize) -> Self {
        self.failing_cost_endpoints.push((status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context and create every queued mock endpoint.
    ///
    /// Custom endpoints are created first, then the shortcut endpoints in the order they
    /// were added.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        if !self.api_key {
            setup.api_key = None;
        }

        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (body, expected) in self.city_endpoints {
            mocks.push(setup.provider().create_city_endpoint(&body, expected));
        }

        for (status, expected) in self.failing_city_endpoints {
            mocks.push(
                setup
                    .provider()
                    .create_failing_city_endpoint(status, expected),
            );
        }

        for (request, body, expected) in self.cost_endpoints {
            mocks.push(
                setup
                    .provider()
                    .create_cost_endpoint(request, &body, expected),
            );
        }

        for (status, expected) in self.failing_cost_endpoints {
            mocks.push(
                setup
                    .provider()
                    .create_failing_cost_endpoint(status, expected),
            );
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}
