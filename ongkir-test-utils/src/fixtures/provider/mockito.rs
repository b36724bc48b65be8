//! RajaOngkir HTTP mock endpoint creation utilities.
//!
//! Every endpoint only matches requests carrying the test API key, so a request sent without
//! the key (or with another one) is answered by mockito's default 501 and never counted.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{
    constant::{API_KEY_HEADER, TEST_API_KEY},
    fixtures::provider::{data::provider_error_body, ProviderFixtures},
};

impl<'a> ProviderFixtures<'a> {
    /// Create a mock `GET /city` endpoint returning `body` with status 200.
    ///
    /// # Arguments
    /// - `body` - Raw response body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_city_endpoint(&mut self, body: &str, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/city")
            .match_header(API_KEY_HEADER, TEST_API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /city` endpoint answering with `status` and a provider error body.
    pub fn create_failing_city_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/city")
            .match_header(API_KEY_HEADER, TEST_API_KEY)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(provider_error_body(status, "Bad request"))
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /cost` endpoint matching a JSON body equal to `request`.
    ///
    /// # Arguments
    /// - `request` - JSON body the endpoint expects to receive
    /// - `body` - Raw response body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_cost_endpoint(
        &mut self,
        request: Value,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/cost")
            .match_header(API_KEY_HEADER, TEST_API_KEY)
            .match_body(Matcher::Json(request))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /cost` endpoint answering with `status` and a provider error body.
    pub fn create_failing_cost_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/cost")
            .match_header(API_KEY_HEADER, TEST_API_KEY)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(provider_error_body(status, "Internal error"))
            .expect(expected_requests)
            .create()
    }
}
