//! Core numeric primitives (Vector, Matrix).
//!
//! These types carry feature blocks and the assembled design matrix.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
