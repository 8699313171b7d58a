//! Number domains used by the solver.
//!
//! All coefficients are [ExactNumber](number::ExactNumber)s: arbitrary-precision
//! rationals, so that elimination never accumulates rounding errors. Decisions
//! about whether a coefficient vanishes are made with a tolerance instead of
//! exact comparison, so that systems built from measured or rounded data behave
//! the same way as they would in fixed-precision decimal arithmetic.
pub mod number;
