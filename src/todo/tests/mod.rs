//! Unit tests for the to-do module.
//!
//! Service and board behaviour run against the in-memory adapter; storage
//! failures are injected through a mocked repository.
