//! Middleware

pub mod headers;
