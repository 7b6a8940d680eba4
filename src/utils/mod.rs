//! Shared helpers: input limits and validation.

pub mod validation;
