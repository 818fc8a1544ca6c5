//! A module containing [`HashSet`] and associated types.
//!
//! Some of these types provide owned and borrowed iteration over a set's
//! elements while others are lazy iterators over the result of set operations
//! on two HashSets.
//!
//! As a note, there is no mutable iterator over the elements of a set because
//! mutating an element in place could change its hash, which would be a logic
//! error.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;

pub use hash_set::*;
pub use iter::*;
