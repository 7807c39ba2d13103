#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # uripath
//!
//! A library for modeling and classifying resource paths against an entity
//! data model.
//!
//! Paths are built from typed segments (entity sets, singletons, keys,
//! navigations, properties, operations, type casts), validated against a
//! [`Model`] catalog at construction, and classified into a semantic
//! [`PathKind`]. Each path renders a canonical literal (with key values
//! abstracted into placeholders) and a lookup target for downstream data
//! such as permission records.
//!
//! ## Core Types
//!
//! - [`Model`]: the entity-data-model catalog segments validate against
//! - [`Segment`] and [`SegmentKind`]: typed path steps
//! - [`UriPath`] and [`PathKind`]: the immutable path container and its
//!   classification
//! - [`KeyValues`]: the key-literal codec's ordered mapping
//! - [`ApiPermission`]: per-verb permission records keyed by path literal
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use uripath::{Model, PathKind, Segment, UriPath};
//!
//! let mut model = Model::new();
//! let user = model.add_entity_type("NS", "User", &["id"]);
//! let users = model.add_entity_set("NS.Container", "Users", user);
//!
//! let segments = vec![
//!     Segment::entity_set(users, &model).unwrap(),
//!     Segment::key_from_literal("1", user, None, &model).unwrap(),
//! ];
//! let path = UriPath::new(segments, &model).unwrap();
//!
//! assert_eq!(path.kind(), PathKind::Entity);
//! assert_eq!(path.to_literal_string(&model).unwrap(), "~/Users/{id}");
//! ```

pub mod error;
pub mod keys;
pub mod model;
pub mod path;
pub mod permissions;
pub mod segment;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use keys::KeyValues;
pub use model::{
    EdmTypeId, EntitySetId, Model, NavigationId, NavigationSource, OperationId, OperationImportId,
    PropertyId, SingletonId, TypeRef,
};
pub use path::{classify, PathKind, UriPath};
pub use permissions::{ApiPermission, PermissionScheme, PermissionScope};
pub use segment::{Segment, SegmentKind};
