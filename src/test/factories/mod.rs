//! Factories producing method descriptors for tests.

pub mod method;
