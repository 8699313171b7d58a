//! Vectors and the hyperplanes they span.
pub mod hyperplane;
pub mod vector;
