//! Sorts that may reorder elements which compare equal.

pub mod comb;
pub mod heap;
pub mod quick;
pub mod selection;
