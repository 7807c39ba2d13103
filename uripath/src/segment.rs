//! Path segment variants.
//!
//! A segment is one hop in a resource-addressing path, typed by what kind of
//! model element it denotes. The closed set of variants lives in the
//! [`Segment`] sum type; every variant exposes the same capability set (kind
//! tag, singleness, bound type, navigation source, downstream target,
//! canonical literal, raw identifier) plus the identity-based
//! [`Segment::matches`] predicate.
//!
//! Segments only hold id handles into the external [`Model`] catalog; they
//! never own or copy catalog state, and many segments may reference the same
//! underlying element. Identity comparison therefore assumes both segments
//! were built against the same catalog.

use std::fmt;

use crate::error::{Error, Result};
use crate::keys::{self, KeyValues};
use crate::model::{
    EdmType, EdmTypeId, EntitySetId, Model, NavigationId, NavigationSource, Operation,
    OperationId, OperationImportId, PropertyId, SingletonId, StructuralProperty, TypeRef,
};

/// The kind tag of a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// An entity set at the service root, for example `~/users`.
    EntitySet,
    /// A singleton at the service root, for example `~/me`.
    Singleton,
    /// A key into a collection, for example `~/users/{id}`.
    Key,
    /// A navigation property hop, for example `~/me/messages`.
    Navigation,
    /// A structural property, for example `~/me/displayName`.
    Property,
    /// A bound operation, for example `~/users/NS.ResetAll(...)`.
    Operation,
    /// An unbound operation import, for example `~/ResetAll(...)`.
    OperationImport,
    /// A type cast refining the preceding segment.
    TypeCast,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EntitySet => "EntitySet",
            Self::Singleton => "Singleton",
            Self::Key => "Key",
            Self::Navigation => "Navigation",
            Self::Property => "Property",
            Self::Operation => "Operation",
            Self::OperationImport => "OperationImport",
            Self::TypeCast => "TypeCast",
        };
        write!(f, "{name}")
    }
}

/// An entity set segment, for example `~/users`.
#[derive(Debug, Clone)]
pub struct EntitySetSegment {
    set: EntitySetId,
    identifier: String,
}

impl EntitySetSegment {
    /// Returns the wrapped entity set.
    #[must_use]
    pub const fn entity_set(&self) -> EntitySetId {
        self.set
    }
}

/// A singleton segment, for example `~/me`.
#[derive(Debug, Clone)]
pub struct SingletonSegment {
    singleton: SingletonId,
    identifier: String,
}

impl SingletonSegment {
    /// Returns the wrapped singleton.
    #[must_use]
    pub const fn singleton(&self) -> SingletonId {
        self.singleton
    }
}

/// A key segment, for example `~/users/{id}`.
#[derive(Debug, Clone)]
pub struct KeySegment {
    values: KeyValues,
    declaring_type: EdmTypeId,
    source: Option<NavigationSource>,
    identifier: String,
}

impl KeySegment {
    /// Returns the key/value pairs carried by this segment.
    #[must_use]
    pub const fn values(&self) -> &KeyValues {
        &self.values
    }

    /// Returns the declaring entity type.
    #[must_use]
    pub const fn declaring_type(&self) -> EdmTypeId {
        self.declaring_type
    }
}

/// A navigation property segment, for example `~/me/messages`.
#[derive(Debug, Clone)]
pub struct NavigationSegment {
    navigation: NavigationId,
    source: Option<NavigationSource>,
    identifier: String,
}

impl NavigationSegment {
    /// Returns the wrapped navigation property.
    #[must_use]
    pub const fn navigation(&self) -> NavigationId {
        self.navigation
    }
}

/// A structural property segment, for example `~/me/displayName`.
#[derive(Debug, Clone)]
pub struct PropertySegment {
    property: PropertyId,
    identifier: String,
}

impl PropertySegment {
    /// Returns the wrapped structural property.
    #[must_use]
    pub const fn property(&self) -> PropertyId {
        self.property
    }
}

/// A bound operation segment, for example `~/users/NS.ResetAll(...)`.
#[derive(Debug, Clone)]
pub struct OperationSegment {
    operation: OperationId,
    binding_set: Option<EntitySetId>,
    identifier: String,
}

impl OperationSegment {
    /// Returns the wrapped operation.
    #[must_use]
    pub const fn operation(&self) -> OperationId {
        self.operation
    }

    /// Returns the entity set the operation is bound through, if any.
    #[must_use]
    pub const fn binding_set(&self) -> Option<EntitySetId> {
        self.binding_set
    }
}

/// An unbound operation import segment, for example `~/ResetAll(...)`.
#[derive(Debug, Clone)]
pub struct OperationImportSegment {
    import: OperationImportId,
    source: Option<NavigationSource>,
    identifier: String,
}

impl OperationImportSegment {
    /// Returns the wrapped operation import.
    #[must_use]
    pub const fn import(&self) -> OperationImportId {
        self.import
    }
}

/// A type cast segment refining the preceding segment.
#[derive(Debug, Clone)]
pub struct TypeCastSegment {
    target_type: EdmTypeId,
    single: bool,
    identifier: String,
}

impl TypeCastSegment {
    /// Returns the type being cast to.
    #[must_use]
    pub const fn target_type(&self) -> EdmTypeId {
        self.target_type
    }
}

/// One hop in a resource-addressing path.
///
/// # Examples
///
/// ```
/// use uripath::{Model, Segment, SegmentKind};
///
/// let mut model = Model::new();
/// let user = model.add_entity_type("NS", "User", &["id"]);
/// let users = model.add_entity_set("NS.Container", "Users", user);
///
/// let segment = Segment::entity_set(users, &model).unwrap();
/// assert_eq!(segment.kind(), SegmentKind::EntitySet);
/// assert!(!segment.is_single(&model));
/// assert_eq!(segment.uri_literal(&model).unwrap(), "Users");
/// ```
#[derive(Debug, Clone)]
pub enum Segment {
    /// An entity set at the service root.
    EntitySet(EntitySetSegment),
    /// A singleton at the service root.
    Singleton(SingletonSegment),
    /// A key into a collection.
    Key(KeySegment),
    /// A navigation property hop.
    Navigation(NavigationSegment),
    /// A structural property.
    Property(PropertySegment),
    /// A bound operation.
    Operation(OperationSegment),
    /// An unbound operation import.
    OperationImport(OperationImportSegment),
    /// A type cast refining the preceding segment.
    TypeCast(TypeCastSegment),
}

impl Segment {
    /// Creates an entity set segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConstruction`] if the entity set does not
    /// resolve in the model.
    pub fn entity_set(set: EntitySetId, model: &Model) -> Result<Self> {
        let descriptor = model
            .entity_set(set)
            .ok_or_else(|| invalid(SegmentKind::EntitySet))?;
        Ok(Self::EntitySet(EntitySetSegment {
            set,
            identifier: descriptor.name().to_string(),
        }))
    }

    /// Creates a singleton segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConstruction`] if the singleton does not
    /// resolve in the model.
    pub fn singleton(singleton: SingletonId, model: &Model) -> Result<Self> {
        let descriptor = model
            .singleton(singleton)
            .ok_or_else(|| invalid(SegmentKind::Singleton))?;
        Ok(Self::Singleton(SingletonSegment {
            singleton,
            identifier: descriptor.name().to_string(),
        }))
    }

    /// Creates a key segment from already decoded key/value pairs.
    ///
    /// The raw identifier round-trips through the key-literal codec.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConstruction`] if the declaring type does not
    /// resolve to an entity type in the model.
    pub fn key(
        values: KeyValues,
        declaring_type: EdmTypeId,
        source: Option<NavigationSource>,
        model: &Model,
    ) -> Result<Self> {
        if model.entity_type(declaring_type).is_none() {
            return Err(invalid(SegmentKind::Key));
        }
        let identifier = keys::encode(&values);
        Ok(Self::Key(KeySegment {
            values,
            declaring_type,
            source,
            identifier,
        }))
    }

    /// Creates a key segment from raw literal text, resolving positional
    /// values against the declaring type's declared key names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConstruction`] if the declaring type does not
    /// resolve to an entity type, and [`Error::InvalidKeyLiteral`] if the
    /// literal cannot be decoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use uripath::{Model, Segment};
    ///
    /// let mut model = Model::new();
    /// let user = model.add_entity_type("NS", "User", &["id"]);
    ///
    /// let segment = Segment::key_from_literal("1", user, None, &model).unwrap();
    /// assert_eq!(segment.identifier(), "1");
    /// assert_eq!(segment.uri_literal(&model).unwrap(), "{id}");
    /// ```
    pub fn key_from_literal(
        literal: &str,
        declaring_type: EdmTypeId,
        source: Option<NavigationSource>,
        model: &Model,
    ) -> Result<Self> {
        let entity = model
            .entity_type(declaring_type)
            .ok_or_else(|| invalid(SegmentKind::Key))?;
        let declared: Vec<&str> = entity.keys().iter().map(String::as_str).collect();
        let values = keys::decode_with(literal, &declared)?;
        Ok(Self::Key(KeySegment {
            values,
            declaring_type,
            source,
            identifier: literal.to_string(),
        }))
    }

    /// Creates a navigation segment with an optional resolved navigation
    /// target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConstruction`] if the navigation property does
    /// not resolve in the model.
    pub fn navigation(
        navigation: NavigationId,
        source: Option<NavigationSource>,
        model: &Model,
    ) -> Result<Self> {
        let descriptor = model
            .navigation(navigation)
            .ok_or_else(|| invalid(SegmentKind::Navigation))?;
        Ok(Self::Navigation(NavigationSegment {
            navigation,
            source,
            identifier: descriptor.name().to_string(),
        }))
    }

    /// Creates a structural property segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConstruction`] if the property does not
    /// resolve in the model.
    pub fn property(property: PropertyId, model: &Model) -> Result<Self> {
        let descriptor = model
            .property(property)
            .ok_or_else(|| invalid(SegmentKind::Property))?;
        Ok(Self::Property(PropertySegment {
            property,
            identifier: descriptor.name().to_string(),
        }))
    }

    /// Creates a bound operation segment, optionally bound through an entity
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConstruction`] if the operation, or the
    /// binding entity set when given, does not resolve in the model.
    pub fn operation(
        operation: OperationId,
        binding_set: Option<EntitySetId>,
        model: &Model,
    ) -> Result<Self> {
        let descriptor = model
            .operation(operation)
            .ok_or_else(|| invalid(SegmentKind::Operation))?;
        if let Some(set) = binding_set {
            if model.entity_set(set).is_none() {
                return Err(invalid(SegmentKind::Operation));
            }
        }
        Ok(Self::Operation(OperationSegment {
            operation,
            binding_set,
            identifier: descriptor.name().to_string(),
        }))
    }

    /// Creates an unbound operation import segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConstruction`] if the operation import does
    /// not resolve in the model.
    pub fn operation_import(
        import: OperationImportId,
        source: Option<NavigationSource>,
        model: &Model,
    ) -> Result<Self> {
        let descriptor = model
            .operation_import(import)
            .ok_or_else(|| invalid(SegmentKind::OperationImport))?;
        Ok(Self::OperationImport(OperationImportSegment {
            import,
            source,
            identifier: descriptor.name().to_string(),
        }))
    }

    /// Creates a type cast segment.
    ///
    /// A cast preserves the cardinality of what it refines, so the caller
    /// supplies the singleness of the preceding segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConstruction`] if the target type does not
    /// resolve in the model.
    pub fn type_cast(target_type: EdmTypeId, single: bool, model: &Model) -> Result<Self> {
        let descriptor = model
            .edm_type(target_type)
            .ok_or_else(|| invalid(SegmentKind::TypeCast))?;
        Ok(Self::TypeCast(TypeCastSegment {
            target_type,
            single,
            identifier: descriptor.full_name(),
        }))
    }

    /// Returns the kind tag of this segment.
    #[must_use]
    pub const fn kind(&self) -> SegmentKind {
        match self {
            Self::EntitySet(_) => SegmentKind::EntitySet,
            Self::Singleton(_) => SegmentKind::Singleton,
            Self::Key(_) => SegmentKind::Key,
            Self::Navigation(_) => SegmentKind::Navigation,
            Self::Property(_) => SegmentKind::Property,
            Self::Operation(_) => SegmentKind::Operation,
            Self::OperationImport(_) => SegmentKind::OperationImport,
            Self::TypeCast(_) => SegmentKind::TypeCast,
        }
    }

    /// Returns `true` if this segment denotes exactly one instance.
    ///
    /// Singletons and keys are always single; entity sets never are;
    /// navigations, properties, and operations follow the collection-ness of
    /// what they resolve to. An operation without a return type counts as not
    /// single.
    #[must_use]
    pub fn is_single(&self, model: &Model) -> bool {
        match self {
            Self::EntitySet(_) => false,
            Self::Singleton(_) | Self::Key(_) => true,
            Self::Navigation(seg) => model
                .navigation(seg.navigation)
                .is_some_and(|nav| !nav.is_collection()),
            Self::Property(seg) => model
                .property(seg.property)
                .is_some_and(|prop| !prop.type_ref().is_collection()),
            Self::Operation(seg) => model
                .operation(seg.operation)
                .and_then(Operation::return_type)
                .is_some_and(|ty| !ty.is_collection()),
            Self::OperationImport(seg) => model
                .operation_import(seg.import)
                .and_then(|import| model.operation(import.operation()))
                .and_then(Operation::return_type)
                .is_some_and(|ty| !ty.is_collection()),
            Self::TypeCast(seg) => seg.single,
        }
    }

    /// Returns the model type this segment denotes, absent when unresolved.
    #[must_use]
    pub fn bound_type(&self, model: &Model) -> Option<TypeRef> {
        match self {
            Self::EntitySet(seg) => model
                .entity_set(seg.set)
                .map(|set| TypeRef::collection(set.element_type())),
            Self::Singleton(seg) => model
                .singleton(seg.singleton)
                .map(|singleton| TypeRef::single(singleton.entity_type())),
            Self::Key(seg) => Some(TypeRef::single(seg.declaring_type)),
            Self::Navigation(seg) => model.navigation(seg.navigation).map(|nav| {
                if nav.is_collection() {
                    TypeRef::collection(nav.target_type())
                } else {
                    TypeRef::single(nav.target_type())
                }
            }),
            Self::Property(seg) => model.property(seg.property).map(StructuralProperty::type_ref),
            Self::Operation(seg) => model
                .operation(seg.operation)
                .and_then(Operation::return_type),
            Self::OperationImport(seg) => seg
                .source
                .and_then(|source| model.source_entity_type(source))
                .map(TypeRef::single),
            Self::TypeCast(seg) => Some(if seg.single {
                TypeRef::single(seg.target_type)
            } else {
                TypeRef::collection(seg.target_type)
            }),
        }
    }

    /// Returns the model-level source this segment is rooted in.
    #[must_use]
    pub const fn navigation_source(&self) -> Option<NavigationSource> {
        match self {
            Self::EntitySet(seg) => Some(NavigationSource::EntitySet(seg.set)),
            Self::Singleton(seg) => Some(NavigationSource::Singleton(seg.singleton)),
            Self::Key(seg) => seg.source,
            Self::Navigation(seg) => seg.source,
            Self::Operation(seg) => match seg.binding_set {
                Some(set) => Some(NavigationSource::EntitySet(set)),
                None => None,
            },
            Self::OperationImport(seg) => seg.source,
            Self::Property(_) | Self::TypeCast(_) => None,
        }
    }

    /// Returns the opaque fully-qualified identifier used for downstream
    /// lookup, absent where undefined for the segment kind.
    ///
    /// Entity sets and singletons target `{containerNamespace}/{name}`;
    /// operations and imports target the operation's declared full name;
    /// navigations contribute their property name; keys, properties, and
    /// type casts have no target of their own.
    #[must_use]
    pub fn target(&self, model: &Model) -> Option<String> {
        match self {
            Self::EntitySet(seg) => model
                .entity_set(seg.set)
                .map(|set| format!("{}/{}", set.container_namespace(), set.name())),
            Self::Singleton(seg) => model.singleton(seg.singleton).map(|singleton| {
                format!("{}/{}", singleton.container_namespace(), singleton.name())
            }),
            Self::Navigation(seg) => model
                .navigation(seg.navigation)
                .map(|nav| nav.name().to_string()),
            Self::Operation(seg) => model.operation(seg.operation).map(Operation::full_name),
            Self::OperationImport(seg) => model
                .operation_import(seg.import)
                .and_then(|import| model.operation(import.operation()))
                .map(Operation::full_name),
            Self::Key(_) | Self::Property(_) | Self::TypeCast(_) => None,
        }
    }

    /// Returns the canonical textual rendering of just this segment.
    ///
    /// Stable and side-effect-free; does not depend on neighboring segments.
    /// A key segment renders the declared key names of its declaring type as
    /// a pattern, never the carried values: one declared key `id` renders
    /// `{id}`, several render `{k1={k1},k2={k2}}` in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaInconsistency`] if the declaring type of a key
    /// segment declares no key properties, or if a referenced element no
    /// longer resolves in the model.
    pub fn uri_literal(&self, model: &Model) -> Result<String> {
        match self {
            Self::EntitySet(seg) => model
                .entity_set(seg.set)
                .map(|set| set.name().to_string())
                .ok_or_else(|| dangling(self)),
            Self::Singleton(seg) => model
                .singleton(seg.singleton)
                .map(|singleton| singleton.name().to_string())
                .ok_or_else(|| dangling(self)),
            Self::Key(seg) => {
                let entity = model
                    .entity_type(seg.declaring_type)
                    .ok_or_else(|| dangling(self))?;
                let declared = entity.keys();
                if declared.is_empty() {
                    return Err(Error::SchemaInconsistency {
                        type_name: entity.full_name(),
                        details: format!(
                            "no declared key properties for key segment '{}'",
                            seg.identifier
                        ),
                    });
                }
                if let [key] = declared {
                    // {key}
                    return Ok(format!("{{{key}}}"));
                }
                // {k1={k1},k2={k2}}
                let pattern = declared
                    .iter()
                    .map(|key| format!("{key}={{{key}}}"))
                    .collect::<Vec<_>>()
                    .join(",");
                Ok(format!("{{{pattern}}}"))
            }
            Self::Navigation(seg) => model
                .navigation(seg.navigation)
                .map(|nav| nav.name().to_string())
                .ok_or_else(|| dangling(self)),
            Self::Property(seg) => model
                .property(seg.property)
                .map(|prop| prop.name().to_string())
                .ok_or_else(|| dangling(self)),
            Self::Operation(seg) => model
                .operation(seg.operation)
                .map(Operation::full_name)
                .ok_or_else(|| dangling(self)),
            Self::OperationImport(seg) => model
                .operation_import(seg.import)
                .map(|import| import.name().to_string())
                .ok_or_else(|| dangling(self)),
            Self::TypeCast(seg) => model
                .edm_type(seg.target_type)
                .map(EdmType::full_name)
                .ok_or_else(|| dangling(self)),
        }
    }

    /// Returns the raw literal text the segment was parsed from.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::EntitySet(seg) => &seg.identifier,
            Self::Singleton(seg) => &seg.identifier,
            Self::Key(seg) => &seg.identifier,
            Self::Navigation(seg) => &seg.identifier,
            Self::Property(seg) => &seg.identifier,
            Self::Operation(seg) => &seg.identifier,
            Self::OperationImport(seg) => &seg.identifier,
            Self::TypeCast(seg) => &seg.identifier,
        }
    }

    /// Returns `true` if both segments denote the same underlying model
    /// element.
    ///
    /// The comparison is identity-based: segments of differing variants never
    /// match, and same-variant segments match iff they reference the same
    /// interned catalog element. Key segments compare only their declaring
    /// entity type, deliberately ignoring the carried key values, so two key
    /// segments for different record instances of the same type match.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EntitySet(a), Self::EntitySet(b)) => a.set == b.set,
            (Self::Singleton(a), Self::Singleton(b)) => a.singleton == b.singleton,
            // Declaring type only; the carried key values are ignored.
            (Self::Key(a), Self::Key(b)) => a.declaring_type == b.declaring_type,
            (Self::Navigation(a), Self::Navigation(b)) => a.navigation == b.navigation,
            (Self::Property(a), Self::Property(b)) => a.property == b.property,
            (Self::Operation(a), Self::Operation(b)) => a.operation == b.operation,
            (Self::OperationImport(a), Self::OperationImport(b)) => a.import == b.import,
            (Self::TypeCast(a), Self::TypeCast(b)) => a.target_type == b.target_type,
            _ => false,
        }
    }
}

fn invalid(segment: SegmentKind) -> Error {
    Error::InvalidConstruction {
        segment,
        reason: "the underlying model element does not resolve in the catalog".to_string(),
    }
}

fn dangling(segment: &Segment) -> Error {
    Error::SchemaInconsistency {
        type_name: segment.identifier().to_string(),
        details: format!(
            "{} segment no longer resolves in the model",
            segment.kind()
        ),
    }
}
