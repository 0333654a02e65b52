//! # hailstorm-integers
//!
//! Arbitrary precision integer and rational arithmetic for hailstorm.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Exact rationals kept in lowest terms (`Rational`)
//!
//! Trajectory coordinates reach 10^14 and the elimination multiplies them
//! together repeatedly, so nothing downstream ever touches a fixed-width or
//! floating-point number.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

#[macro_use]
mod macros;

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
