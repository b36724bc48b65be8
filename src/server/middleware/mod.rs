//! Axum middleware applied in front of every route.

pub mod gate;
