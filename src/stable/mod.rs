//! Sorts that never reorder elements which compare equal.

pub mod bubble;
pub mod cocktail;
pub mod insertion;
pub mod merge;
