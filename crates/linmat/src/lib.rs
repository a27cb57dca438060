#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `linmat` provides two value types:
//!
//! - [`Vector`]: a fixed-length sequence of `f64` with sums, scaling, dot and
//!   cross products, norms and magnitude ordering.
//! - [`Matrix`]: a sequence of equal-length row vectors with row and column
//!   access, transpose, determinant, cofactor, adjoint, inverse, product and
//!   integer power.
//!
//! Every operation returns a new value; nothing is modified in place. Invalid
//! input is reported as a [`LinalgError`] naming the operation and the
//! offending index or shape.
//!
//! # Quick Start
//!
//! ```rust
//! use linmat::{Matrix, Vector};
//!
//! let a = Matrix::from([[4.0, 7.0], [2.0, 6.0]]);
//! let inverse = a.inverse().unwrap();
//! assert!(a.multiply(&inverse).unwrap().approx_eq(&Matrix::identity(2), 1e-12));
//!
//! let v: Vector = "1, 2, 3".parse().unwrap();
//! assert_eq!(v.to_string(), "[1, 2, 3]");
//! ```

/// Error types for vector and matrix operations.
///
/// Defines [`LinalgError`] for reporting index, shape and singularity failures.
pub mod error;

/// Dense matrix built from row vectors.
pub mod matrix;

/// Serde module for (de)serializing vectors and matrices.
///
/// Enabled with the `serde` feature.
#[cfg(feature = "serde")]
pub mod serde;

/// Dense vector of `f64` entries.
pub mod vector;

pub use crate::error::LinalgError;
pub use crate::matrix::Matrix;
pub use crate::vector::{Vector, ZERO_EPSILON};
