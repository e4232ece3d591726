//! Core data types for routhier: validated polynomials and transfer
//! functions in the Laplace variable.
//!
//! Everything here is immutable after construction. The numerical engine
//! in `routhier-solver` consumes these types; nothing in this crate does
//! any root finding or simulation.

pub mod error;
pub mod polynomial;
pub mod transfer;

pub use error::{Error, Result};
pub use polynomial::Polynomial;
pub use transfer::TransferFunction;
