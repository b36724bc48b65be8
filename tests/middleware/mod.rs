//! Tests for the access gate middleware.
//!
//! A small router with a handler per path is wrapped with the gate and driven with
//! `tower::ServiceExt::oneshot`. Each handler flips a flag so the tests can tell whether the
//! request ever reached it.

mod access_gate;
