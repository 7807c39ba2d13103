//! Path containers and classification.
//!
//! A [`UriPath`] is an immutable, non-empty sequence of
//! [`Segment`](crate::segment::Segment)s classified into a [`PathKind`] at
//! construction. The classifier itself is exposed as the free function
//! [`classify`] for callers that want a kind without building a container.

mod container;
mod kind;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use container::UriPath;
pub use kind::{classify, PathKind};
