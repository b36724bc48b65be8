//! Tests for HTTP controller endpoints.
//!
//! These call the shipping handlers directly with an `AppState` pointing at a mock RajaOngkir
//! server, verifying that provider bodies are relayed unchanged and that every failure turns
//! into the endpoint's fixed 500 message.

mod shipping;

use ongkir_test_utils::prelude::*;

use crate::util::body_bytes;
