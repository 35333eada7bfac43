//! Infrastructure layer for Filmotek
//!
//! This crate provides concrete implementations of the ports defined in
//! the workflow layer: a MySQL backend for persistent deployments and an
//! in-memory backend for tests and throwaway instances. Both satisfy the
//! same contracts and are interchangeable behind the API layer.

pub mod adapters;
pub mod errors;
