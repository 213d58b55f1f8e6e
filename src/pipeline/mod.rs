//! The view-derivation pipeline.
//!
//! Every function in this module tree is a pure computation over the two
//! immutable input tables. Derived views are recomputed on demand and never
//! cached, so each one is reentrant and safe to call concurrently.

pub mod aggregate;
pub mod enrich;
pub mod present;
pub mod rank;
pub mod select;
pub mod types;
pub mod utility;
