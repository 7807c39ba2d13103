//! Path-kind classification.
//!
//! The classifier is a pure function from a segment sequence to a semantic
//! path kind. It never mutates its input, is deterministic, and is total over
//! syntactically well-formed sequences; everything else fails with an
//! unrecognized-shape error carrying the offending sequence's length and
//! segment kinds.

use std::fmt;

use crate::error::{Error, Result};
use crate::model::Model;
use crate::segment::Segment;

/// The semantic classification of a whole path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// The path denotes an entity set, for example `~/users`.
    EntitySet,
    /// The path denotes a singleton, for example `~/me`.
    Singleton,
    /// The path denotes a single entity in a set, for example `~/users/{id}`.
    Entity,
    /// The path denotes a single instance reached through navigation.
    SingleNavigation,
    /// The path denotes a collection reached through navigation.
    CollectionNavigation,
    /// The path denotes a structural property.
    Property,
    /// The path denotes a bound operation.
    Operation,
    /// The path denotes an unbound operation import.
    OperationImport,
    /// The path denotes a type cast.
    TypeCast,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EntitySet => "EntitySet",
            Self::Singleton => "Singleton",
            Self::Entity => "Entity",
            Self::SingleNavigation => "SingleNavigation",
            Self::CollectionNavigation => "CollectionNavigation",
            Self::Property => "Property",
            Self::Operation => "Operation",
            Self::OperationImport => "OperationImport",
            Self::TypeCast => "TypeCast",
        };
        write!(f, "{name}")
    }
}

/// Classifies a segment sequence into its semantic path kind.
///
/// The rules are evaluated in priority order against the last segment, with
/// positional fallbacks for root-like endings. The ordering is the crux of
/// the grammar: a trailing Navigation always classifies by its own
/// singleness, and the Navigation+Key fallback only fires once the last
/// segment itself is root-like.
///
/// # Errors
///
/// Returns [`Error::EmptyPath`] for an empty sequence and
/// [`Error::UnrecognizedShape`] for any sequence no rule covers.
///
/// # Examples
///
/// ```
/// use uripath::{classify, Model, PathKind, Segment};
///
/// let mut model = Model::new();
/// let user = model.add_entity_type("NS", "User", &["id"]);
/// let users = model.add_entity_set("NS.Container", "Users", user);
///
/// let set = Segment::entity_set(users, &model).unwrap();
/// let key = Segment::key_from_literal("1", user, None, &model).unwrap();
///
/// assert_eq!(classify(&[set.clone()], &model).unwrap(), PathKind::EntitySet);
/// assert_eq!(classify(&[set, key], &model).unwrap(), PathKind::Entity);
/// ```
pub fn classify(segments: &[Segment], model: &Model) -> Result<PathKind> {
    let Some(last) = segments.last() else {
        return Err(Error::EmptyPath);
    };

    match last {
        Segment::Navigation(_) => {
            if last.is_single(model) {
                return Ok(PathKind::SingleNavigation);
            }
            Ok(PathKind::CollectionNavigation)
        }
        Segment::Property(_) => Ok(PathKind::Property),
        Segment::Operation(_) => Ok(PathKind::Operation),
        Segment::TypeCast(_) => Ok(PathKind::TypeCast),
        _ => classify_root_like(segments, last),
    }
}

/// Positional rules for sequences ending in a root-like segment (entity set,
/// singleton, key, or operation import).
fn classify_root_like(segments: &[Segment], last: &Segment) -> Result<PathKind> {
    let count = segments.len();
    if count == 1 {
        return match last {
            Segment::EntitySet(_) => Ok(PathKind::EntitySet),
            Segment::Singleton(_) => Ok(PathKind::Singleton),
            Segment::OperationImport(_) => Ok(PathKind::OperationImport),
            _ => Err(unrecognized(segments)),
        };
    }

    if count == 2
        && matches!(last, Segment::Key(_))
        && matches!(segments[0], Segment::EntitySet(_))
    {
        return Ok(PathKind::Entity);
    }

    // A key trailing a navigation reclassifies as access to a single
    // navigated instance.
    let previous = &segments[count - 2];
    if matches!(previous, Segment::Navigation(_)) && matches!(last, Segment::Key(_)) {
        return Ok(PathKind::SingleNavigation);
    }

    Err(unrecognized(segments))
}

fn unrecognized(segments: &[Segment]) -> Error {
    Error::UnrecognizedShape {
        len: segments.len(),
        kinds: segments.iter().map(Segment::kind).collect(),
    }
}
