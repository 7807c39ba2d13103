//! The immutable path container.

use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::model::Model;
use crate::segment::Segment;

use super::kind::{classify, PathKind};

/// An immutable, non-empty ordered sequence of segments from a service root
/// to a target model element.
///
/// The semantic kind is classified exactly once at construction; the literal
/// and target renderings are computed lazily and memoized. There are no
/// mutation operations: any transformation produces a new container.
///
/// Cloning is cheap relative to reclassifying, and independent containers can
/// be classified and rendered from many threads without coordination, as long
/// as the model catalog outlives them.
///
/// # Examples
///
/// ```
/// use uripath::{Model, PathKind, Segment, UriPath};
///
/// let mut model = Model::new();
/// let user = model.add_entity_type("NS", "User", &["id"]);
/// let users = model.add_entity_set("NS.Container", "Users", user);
///
/// let segments = vec![
///     Segment::entity_set(users, &model).unwrap(),
///     Segment::key_from_literal("1", user, None, &model).unwrap(),
/// ];
/// let path = UriPath::new(segments, &model).unwrap();
///
/// assert_eq!(path.kind(), PathKind::Entity);
/// assert_eq!(path.to_literal_string(&model).unwrap(), "~/Users/{id}");
/// ```
#[derive(Debug, Clone)]
pub struct UriPath {
    segments: Vec<Segment>,
    kind: PathKind,
    literal: OnceLock<String>,
    target: OnceLock<String>,
}

impl UriPath {
    /// Creates a path from a finished segment sequence, classifying it
    /// eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] for a zero-segment sequence and
    /// [`Error::UnrecognizedShape`] if the sequence matches no grammar rule.
    pub fn new(segments: Vec<Segment>, model: &Model) -> Result<Self> {
        if segments.is_empty() {
            return Err(Error::EmptyPath);
        }
        let kind = classify(&segments, model)?;
        log::debug!(
            "classified {}-segment path ending in {} as {kind}",
            segments.len(),
            segments[segments.len() - 1].kind()
        );
        Ok(Self {
            segments,
            kind,
            literal: OnceLock::new(),
            target: OnceLock::new(),
        })
    }

    /// Returns the first segment in the path.
    #[must_use]
    pub fn first_segment(&self) -> &Segment {
        // The constructor rejects empty sequences.
        &self.segments[0]
    }

    /// Returns the last segment in the path.
    #[must_use]
    pub fn last_segment(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    /// Returns the number of segments in this path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path contains no segments.
    ///
    /// Always `false` in practice: construction rejects empty sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segments that make up this path.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the semantic kind of this path.
    #[must_use]
    pub const fn kind(&self) -> PathKind {
        self.kind
    }

    /// Returns the canonical literal rendering of the whole path, for
    /// example `~/Users/{id}/displayName`.
    ///
    /// Computed at most once per container; concurrent first access may
    /// redundantly compute the same deterministic value, and one result is
    /// published.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaInconsistency`] if any segment cannot render
    /// its literal.
    pub fn to_literal_string(&self, model: &Model) -> Result<&str> {
        if let Some(literal) = self.literal.get() {
            return Ok(literal);
        }

        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            parts.push(segment.uri_literal(model)?);
        }
        let rendered = format!("~/{}", parts.join("/"));
        Ok(self.literal.get_or_init(|| rendered))
    }

    /// Returns the downstream lookup target of the whole path, joining each
    /// segment's target and skipping segments without one.
    ///
    /// Memoized like [`UriPath::to_literal_string`].
    #[must_use]
    pub fn to_target_string(&self, model: &Model) -> &str {
        self.target.get_or_init(|| {
            self.segments
                .iter()
                .filter_map(|segment| segment.target(model))
                .collect::<Vec<_>>()
                .join("/")
        })
    }

    /// Returns `true` if both paths denote the same model elements,
    /// segment by segment.
    ///
    /// Uses [`Segment::matches`], so key segments compare by declaring type
    /// only.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .segments
                .iter()
                .zip(other.segments.iter())
                .all(|(a, b)| a.matches(b))
    }

    /// Returns a new path containing the first `len` segments, reclassified.
    ///
    /// `len` is capped at the current length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] if `len` is zero and
    /// [`Error::UnrecognizedShape`] if the prefix matches no grammar rule.
    pub fn truncated(&self, len: usize, model: &Model) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyPath);
        }
        let end = len.min(self.segments.len());
        Self::new(self.segments[..end].to_vec(), model)
    }
}
