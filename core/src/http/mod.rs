//! HTTP-facing functionality.

pub mod auth;
