//! Linsys solves systems of linear equations exactly.
//!
//! Every equation is a [Hyperplane](tensors::hyperplane::Hyperplane), the set of
//! points `x` with `n · x = c`. A [LinearSystem](linear_system::LinearSystem) of
//! such planes is brought into reduced row echelon form using Gaussian
//! elimination over arbitrary-precision rationals, and its solution set is
//! classified as a unique point, empty, or an affine family.
//!
//! For example:
//!
//! ```
//! use linsys::{linear_system::{LinearSystem, Solution}, tensors::hyperplane::Hyperplane};
//!
//! let system = LinearSystem::from_planes(vec![
//!     Hyperplane::parse(&["0.786", "0.786", "0.588"], "-0.714").unwrap(),
//!     Hyperplane::parse(&["-0.131", "-0.131", "0.244"], "0.319").unwrap(),
//! ])
//! .unwrap();
//!
//! if let Solution::Parametrized(p) = system.solve() {
//!     println!("{}", p);
//! }
//! ```

pub mod domains;
pub mod error;
pub mod linear_system;
pub mod printer;
pub mod settings;
pub mod tensors;
