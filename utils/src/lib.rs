//! Shared infrastructure utilities for adjoint.
//!
//! This crate provides cross-cutting utilities that don't belong in the
//! domain-pure `adjoint-types` crate:
//!
//! - **`atomic_write`**: Crash-safe file persistence (temp + rename)

pub mod atomic_write;

pub use atomic_write::{AtomicWriteOptions, ExistingFilePolicy, atomic_write};
