//! HTTP middleware.

pub mod admin;
