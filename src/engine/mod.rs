//! The boundary to the external per-pixel colour engine.
//!
//! The contract traits mirror what the engine exposes; the binding owns the
//! handle lifecycle (re-create on size change, update in place for pan/zoom)
//! and stamps every exposed plane view with a generation so stale views are
//! caught instead of silently read.

pub mod binding;
pub mod contract;
pub mod demo;
pub mod lease;
