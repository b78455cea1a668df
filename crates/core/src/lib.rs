//! `ordertaking-core` — validation foundation building blocks.
//!
//! This crate contains the **accumulating validation** primitive
//! ([`Validated`], the [`combine!`] macro) and the constrained-type
//! constructors the domain layer builds its value types on. It knows nothing
//! about orders; higher crates supply the field names, bounds and patterns.

pub mod constrained;
pub mod validated;

pub use constrained::{
    Pattern, create_decimal, create_int, create_like, create_string, create_string_option,
};
pub use validated::Validated;
