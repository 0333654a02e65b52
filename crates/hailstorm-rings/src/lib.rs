//! # hailstorm-rings
//!
//! Algebraic structures for hailstorm.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`
//! - Implementations for the exact number types of `hailstorm-integers`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring (Integer)
//!  └── Field (Rational)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod rationals;
pub mod traits;

pub use traits::{Field, Ring};
