//! Shared test fixtures
//!
//! Provides a configurable in-memory script and collection types that misreport
//! their size.

pub mod mocks;
