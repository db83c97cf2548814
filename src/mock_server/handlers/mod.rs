//! HTTP request handlers for the mock server.

pub mod finding;

pub use finding::*;
