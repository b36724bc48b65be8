//! Response helpers shared by the controllers.

pub mod method;
