//! A generic hash-set container with the standard set-theoretic operations.
//!
//! The only data structure here is [`HashSet`], which stores unique elements
//! of any type implementing [`Hash`](std::hash::Hash) + [`Eq`] on top of a
//! presence map from elements to the unit type. Everything the set does is
//! built from four primitives: insert, remove, contains and length, plus
//! iteration over the elements.
//!
//! # Set Operations
//! Union, intersection, difference and symmetric difference each come in two
//! forms: a lazy, borrowing iterator adapter (for example
//! [`HashSet::difference`]) and an owned result built through the matching
//! bitwise operator (`|`, `&`, `-`, `^`) on set references. Owned results are
//! always freshly allocated and never share storage with either operand, so
//! mutating one set can't reach through to another. The subset, superset and
//! disjointness predicates never allocate at all.
//!
//! # Ordering
//! Iteration order is unspecified and may differ between calls or between
//! sets with equal contents. Code that needs a stable order should collect
//! and sort; comparing rendered strings directly is a mistake for sets with
//! more than one element.
//!
//! # Error Handling
//! There is none, by construction: every operation is a total function over
//! valid inputs, and ownership guarantees that every `HashSet` value you can
//! reach is initialized. No method returns a [`Result`] and no method
//! panics on any input.
//!
//! # Concurrency
//! None. The container carries no internal synchronization and makes no
//! thread-safety promises beyond what its element type provides; callers who
//! share a set across threads must serialize access themselves.

#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

pub mod hash;

pub(crate) mod util;

#[doc(inline)]
pub use hash::HashSet;
