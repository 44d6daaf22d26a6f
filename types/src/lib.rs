//! Core domain types for adjoint.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod error;
mod limit;
mod matrix;
mod scalar;

pub use error::{Axis, IndexError, LimitError, ShapeError};
pub use limit::DimensionLimit;
pub use matrix::SquareMatrix;
pub use scalar::Scalar;
