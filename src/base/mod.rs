//! Base types and error handling.
//!
//! - [`DdtError`](ddterror::DdtError): every failure the crate can report
//! - [`context`]: IO error context helpers

pub mod context;
pub mod ddterror;

#[cfg(test)]
mod tests;
