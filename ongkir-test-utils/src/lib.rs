//! Test harness for Ongkir.
//!
//! Tests describe the provider endpoints they expect with [`TestBuilder`], then run against the
//! [`TestContext`] it builds: a mockito server standing in for RajaOngkir plus the settings
//! needed to point a provider client or the application state at it.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures, TestBuilder, TestContext, TestError};
}
