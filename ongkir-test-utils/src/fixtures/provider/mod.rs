use crate::TestContext;

pub mod data;
pub mod mockito;

pub use data::{city_list_body, cost_body, provider_error_body};

impl TestContext {
    pub fn provider<'a>(&'a mut self) -> ProviderFixtures<'a> {
        ProviderFixtures { setup: self }
    }
}

pub struct ProviderFixtures<'a> {
    pub setup: &'a mut TestContext,
}
