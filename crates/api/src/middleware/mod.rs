//! Request extractors for authentication and the administrator gate.

pub mod admin;
pub mod auth;
