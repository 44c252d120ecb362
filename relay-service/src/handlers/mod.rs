//! HTTP handlers for the relay service.

pub mod app;
pub mod prompt;
