//! Storage adapters.
//!
//! Two families implement the workflow ports: `mysql` for persistent
//! deployments and `memory` for tests and single-process instances.

pub mod memory;
pub mod mysql;
