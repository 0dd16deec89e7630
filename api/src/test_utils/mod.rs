//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The GitHub mock is scripted by hand rather than generated with a mocking
//! crate: tests need to queue a sequence of outcomes for the polled endpoint
//! and count exactly how many calls each endpoint received.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
