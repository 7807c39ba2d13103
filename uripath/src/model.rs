//! Read-only entity data model catalog.
//!
//! This module provides the descriptors that path segments reference: entity
//! types, entity sets, singletons, structural and navigation properties,
//! operations, and operation imports. Descriptors live in an arena owned by
//! [`Model`] and are addressed through small copyable id handles, so "same
//! underlying element" is a cheap, explicit identity comparison rather than
//! pointer equality.
//!
//! The catalog is read-only from the perspective of segments and paths: it is
//! populated up front through the `add_*` builder methods and only borrowed
//! immutably afterwards. Its lifetime must outlive every segment referencing
//! it, which the borrow checker enforces since all lookups go through
//! `&Model`.

use std::fmt;

/// Handle to a type in the catalog (entity or primitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdmTypeId(usize);

/// Handle to an entity set in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntitySetId(usize);

/// Handle to a singleton in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SingletonId(usize);

/// Handle to a structural property in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyId(usize);

/// Handle to a navigation property in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationId(usize);

/// Handle to an operation (function or action) in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationId(usize);

/// Handle to an operation import in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationImportId(usize);

/// A reference to a type together with its collection-ness.
///
/// # Examples
///
/// ```
/// use uripath::{Model, TypeRef};
///
/// let mut model = Model::new();
/// let user = model.add_entity_type("NS", "User", &["id"]);
///
/// let single = TypeRef::single(user);
/// assert!(!single.is_collection());
///
/// let many = TypeRef::collection(user);
/// assert!(many.is_collection());
/// assert_eq!(many.definition(), user);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRef {
    definition: EdmTypeId,
    collection: bool,
}

impl TypeRef {
    /// Creates a reference to a single instance of the given type.
    #[must_use]
    pub const fn single(definition: EdmTypeId) -> Self {
        Self {
            definition,
            collection: false,
        }
    }

    /// Creates a reference to a collection of the given type.
    #[must_use]
    pub const fn collection(definition: EdmTypeId) -> Self {
        Self {
            definition,
            collection: true,
        }
    }

    /// Returns the referenced type definition.
    #[must_use]
    pub const fn definition(self) -> EdmTypeId {
        self.definition
    }

    /// Returns `true` if this reference denotes a collection.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        self.collection
    }
}

/// The model-level root a path resolves against: an entity set or a
/// singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationSource {
    /// Rooted in an entity set.
    EntitySet(EntitySetId),
    /// Rooted in a singleton.
    Singleton(SingletonId),
}

/// A type in the catalog: either an entity type or a named primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdmType {
    /// A structured entity type with declared keys.
    Entity(EntityType),
    /// A primitive type, identified by its qualified name.
    Primitive {
        /// The qualified primitive name, for example `Edm.String`.
        name: String,
    },
}

impl EdmType {
    /// Returns the full name of this type.
    #[must_use]
    pub fn full_name(&self) -> String {
        match self {
            Self::Entity(entity) => entity.full_name(),
            Self::Primitive { name } => name.clone(),
        }
    }
}

/// An entity type descriptor: namespace, name, and ordered declared key
/// property names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    namespace: String,
    name: String,
    keys: Vec<String>,
}

impl EntityType {
    /// Returns the type name without its namespace.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declaring namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the full `namespace.name` of this type.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    /// Returns the declared key property names, in declaration order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// A structural property descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralProperty {
    name: String,
    ty: TypeRef,
}

impl StructuralProperty {
    /// Returns the property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the property type reference.
    #[must_use]
    pub const fn type_ref(&self) -> TypeRef {
        self.ty
    }
}

/// A navigation property descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationProperty {
    name: String,
    target_type: EdmTypeId,
    collection: bool,
}

impl NavigationProperty {
    /// Returns the navigation property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the entity type the navigation targets.
    #[must_use]
    pub const fn target_type(&self) -> EdmTypeId {
        self.target_type
    }

    /// Returns `true` if the navigation targets a collection.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        self.collection
    }
}

/// An entity set descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySet {
    container_namespace: String,
    name: String,
    element_type: EdmTypeId,
}

impl EntitySet {
    /// Returns the entity set name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the namespace of the declaring container.
    #[must_use]
    pub fn container_namespace(&self) -> &str {
        &self.container_namespace
    }

    /// Returns the element entity type of this set.
    #[must_use]
    pub const fn element_type(&self) -> EdmTypeId {
        self.element_type
    }
}

/// A singleton descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Singleton {
    container_namespace: String,
    name: String,
    entity_type: EdmTypeId,
}

impl Singleton {
    /// Returns the singleton name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the namespace of the declaring container.
    #[must_use]
    pub fn container_namespace(&self) -> &str {
        &self.container_namespace
    }

    /// Returns the entity type of this singleton.
    #[must_use]
    pub const fn entity_type(&self) -> EdmTypeId {
        self.entity_type
    }
}

/// An operation descriptor (function or action).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    namespace: String,
    name: String,
    return_type: Option<TypeRef>,
}

impl Operation {
    /// Returns the operation name without its namespace.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declaring namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the full `namespace.name` of this operation.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    /// Returns the declared return type, absent if the operation returns
    /// nothing.
    #[must_use]
    pub const fn return_type(&self) -> Option<TypeRef> {
        self.return_type
    }
}

/// An unbound operation import descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationImport {
    name: String,
    operation: OperationId,
}

impl OperationImport {
    /// Returns the import name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the underlying operation.
    #[must_use]
    pub const fn operation(&self) -> OperationId {
        self.operation
    }
}

/// The entity data model catalog.
///
/// Descriptors are interned in insertion order; the returned id handles are
/// the sole way to reference them, making element identity an integer
/// comparison.
///
/// # Examples
///
/// ```
/// use uripath::Model;
///
/// let mut model = Model::new();
/// let user = model.add_entity_type("NS", "User", &["id"]);
/// let users = model.add_entity_set("NS.Container", "Users", user);
///
/// let set = model.entity_set(users).unwrap();
/// assert_eq!(set.name(), "Users");
/// assert_eq!(set.element_type(), user);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Model {
    types: Vec<EdmType>,
    entity_sets: Vec<EntitySet>,
    singletons: Vec<Singleton>,
    properties: Vec<StructuralProperty>,
    navigations: Vec<NavigationProperty>,
    operations: Vec<Operation>,
    imports: Vec<OperationImport>,
}

impl Model {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns an entity type with its ordered declared key property names.
    pub fn add_entity_type(&mut self, namespace: &str, name: &str, keys: &[&str]) -> EdmTypeId {
        self.types.push(EdmType::Entity(EntityType {
            namespace: namespace.to_string(),
            name: name.to_string(),
            keys: keys.iter().map(ToString::to_string).collect(),
        }));
        EdmTypeId(self.types.len() - 1)
    }

    /// Interns a primitive type by qualified name.
    pub fn add_primitive_type(&mut self, name: &str) -> EdmTypeId {
        self.types.push(EdmType::Primitive {
            name: name.to_string(),
        });
        EdmTypeId(self.types.len() - 1)
    }

    /// Interns an entity set.
    pub fn add_entity_set(
        &mut self,
        container_namespace: &str,
        name: &str,
        element_type: EdmTypeId,
    ) -> EntitySetId {
        self.entity_sets.push(EntitySet {
            container_namespace: container_namespace.to_string(),
            name: name.to_string(),
            element_type,
        });
        EntitySetId(self.entity_sets.len() - 1)
    }

    /// Interns a singleton.
    pub fn add_singleton(
        &mut self,
        container_namespace: &str,
        name: &str,
        entity_type: EdmTypeId,
    ) -> SingletonId {
        self.singletons.push(Singleton {
            container_namespace: container_namespace.to_string(),
            name: name.to_string(),
            entity_type,
        });
        SingletonId(self.singletons.len() - 1)
    }

    /// Interns a structural property.
    pub fn add_property(&mut self, name: &str, ty: TypeRef) -> PropertyId {
        self.properties.push(StructuralProperty {
            name: name.to_string(),
            ty,
        });
        PropertyId(self.properties.len() - 1)
    }

    /// Interns a navigation property.
    pub fn add_navigation(
        &mut self,
        name: &str,
        target_type: EdmTypeId,
        collection: bool,
    ) -> NavigationId {
        self.navigations.push(NavigationProperty {
            name: name.to_string(),
            target_type,
            collection,
        });
        NavigationId(self.navigations.len() - 1)
    }

    /// Interns an operation with an optional return type.
    pub fn add_operation(
        &mut self,
        namespace: &str,
        name: &str,
        return_type: Option<TypeRef>,
    ) -> OperationId {
        self.operations.push(Operation {
            namespace: namespace.to_string(),
            name: name.to_string(),
            return_type,
        });
        OperationId(self.operations.len() - 1)
    }

    /// Interns an operation import wrapping the given operation.
    pub fn add_operation_import(&mut self, name: &str, operation: OperationId) -> OperationImportId {
        self.imports.push(OperationImport {
            name: name.to_string(),
            operation,
        });
        OperationImportId(self.imports.len() - 1)
    }

    /// Looks up a type.
    #[must_use]
    pub fn edm_type(&self, id: EdmTypeId) -> Option<&EdmType> {
        self.types.get(id.0)
    }

    /// Looks up a type as an entity type.
    ///
    /// Returns `None` for primitives and unknown handles.
    #[must_use]
    pub fn entity_type(&self, id: EdmTypeId) -> Option<&EntityType> {
        match self.types.get(id.0) {
            Some(EdmType::Entity(entity)) => Some(entity),
            _ => None,
        }
    }

    /// Looks up an entity set.
    #[must_use]
    pub fn entity_set(&self, id: EntitySetId) -> Option<&EntitySet> {
        self.entity_sets.get(id.0)
    }

    /// Looks up a singleton.
    #[must_use]
    pub fn singleton(&self, id: SingletonId) -> Option<&Singleton> {
        self.singletons.get(id.0)
    }

    /// Looks up a structural property.
    #[must_use]
    pub fn property(&self, id: PropertyId) -> Option<&StructuralProperty> {
        self.properties.get(id.0)
    }

    /// Looks up a navigation property.
    #[must_use]
    pub fn navigation(&self, id: NavigationId) -> Option<&NavigationProperty> {
        self.navigations.get(id.0)
    }

    /// Looks up an operation.
    #[must_use]
    pub fn operation(&self, id: OperationId) -> Option<&Operation> {
        self.operations.get(id.0)
    }

    /// Looks up an operation import.
    #[must_use]
    pub fn operation_import(&self, id: OperationImportId) -> Option<&OperationImport> {
        self.imports.get(id.0)
    }

    /// Returns the entity type a navigation source resolves to.
    #[must_use]
    pub fn source_entity_type(&self, source: NavigationSource) -> Option<EdmTypeId> {
        match source {
            NavigationSource::EntitySet(set) => self.entity_set(set).map(EntitySet::element_type),
            NavigationSource::Singleton(singleton) => {
                self.singleton(singleton).map(Singleton::entity_type)
            }
        }
    }
}
