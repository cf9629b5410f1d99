//! `sx` shorthand objects and their expansion.
//!
//! - [`SxProps`]: an ordered `sx` object of shorthands, CSS properties and
//!   pseudo-class blocks
//! - [`expand`]: turns an `sx` object into a [`ResolvedStyle`](crate::ResolvedStyle)
//!   plus [`RuleSet`]s

mod expand;
mod value;

pub use expand::{expand, RuleSet, SxStyles, PSEUDO_MARKER};
pub use value::{Scalar, SxProps, SxValue};
