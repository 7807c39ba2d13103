//! Common test utilities for integration tests.
//!
//! This module provides a shared model fixture and segment builders for
//! testing the uripath library.

use uripath::{
    EdmTypeId, EntitySetId, Model, NavigationId, NavigationSource, OperationId, OperationImportId,
    PropertyId, Segment, SingletonId, TypeRef,
};

/// A small but representative model catalog.
///
/// It declares:
/// - `NS.User` (key `id`) exposed through the `Users` entity set and the
///   `Me` singleton
/// - `NS.Admin` (key `id`) as a cast target
/// - `NS.OrderLine` (composite key `orderId`, `lineNo`) exposed through the
///   `OrderLines` entity set
/// - navigations `manager` (single) and `friends` (collection) to `NS.User`
/// - the bound function `NS.BestFriend` returning a single `NS.User`
/// - the action `NS.ResetAll` with no return type, plus its import `ResetAll`
/// - the structural property `displayName`
#[allow(dead_code)]
pub struct SampleModel {
    pub model: Model,
    pub user: EdmTypeId,
    pub admin: EdmTypeId,
    pub order_line: EdmTypeId,
    pub users: EntitySetId,
    pub order_lines: EntitySetId,
    pub me: SingletonId,
    pub manager: NavigationId,
    pub friends: NavigationId,
    pub display_name: PropertyId,
    pub best_friend: OperationId,
    pub reset_all: OperationId,
    pub reset_all_import: OperationImportId,
}

#[allow(dead_code)]
impl SampleModel {
    /// Builds the fixture model.
    pub fn new() -> Self {
        let mut model = Model::new();
        let string = model.add_primitive_type("Edm.String");
        let user = model.add_entity_type("NS", "User", &["id"]);
        let admin = model.add_entity_type("NS", "Admin", &["id"]);
        let order_line = model.add_entity_type("NS", "OrderLine", &["orderId", "lineNo"]);
        let users = model.add_entity_set("NS.Container", "Users", user);
        let order_lines = model.add_entity_set("NS.Container", "OrderLines", order_line);
        let me = model.add_singleton("NS.Container", "Me", user);
        let manager = model.add_navigation("manager", user, false);
        let friends = model.add_navigation("friends", user, true);
        let display_name = model.add_property("displayName", TypeRef::single(string));
        let best_friend = model.add_operation("NS", "BestFriend", Some(TypeRef::single(user)));
        let reset_all = model.add_operation("NS", "ResetAll", None);
        let reset_all_import = model.add_operation_import("ResetAll", reset_all);

        Self {
            model,
            user,
            admin,
            order_line,
            users,
            order_lines,
            me,
            manager,
            friends,
            display_name,
            best_friend,
            reset_all,
            reset_all_import,
        }
    }

    /// The navigation source most segments in these tests hang off.
    pub fn users_source(&self) -> Option<NavigationSource> {
        Some(NavigationSource::EntitySet(self.users))
    }

    /// Builds a `Users` entity-set segment.
    pub fn users_segment(&self) -> Segment {
        Segment::entity_set(self.users, &self.model).expect("fixture entity set")
    }

    /// Builds an `OrderLines` entity-set segment.
    pub fn order_lines_segment(&self) -> Segment {
        Segment::entity_set(self.order_lines, &self.model).expect("fixture entity set")
    }

    /// Builds a `Me` singleton segment.
    pub fn me_segment(&self) -> Segment {
        Segment::singleton(self.me, &self.model).expect("fixture singleton")
    }

    /// Builds a key segment for `NS.User` from a raw literal.
    pub fn user_key_segment(&self, literal: &str) -> Segment {
        Segment::key_from_literal(literal, self.user, self.users_source(), &self.model)
            .expect("fixture user key")
    }

    /// Builds a key segment for `NS.OrderLine` from a raw literal.
    pub fn order_line_key_segment(&self, literal: &str) -> Segment {
        Segment::key_from_literal(
            literal,
            self.order_line,
            Some(NavigationSource::EntitySet(self.order_lines)),
            &self.model,
        )
        .expect("fixture order-line key")
    }

    /// Builds the single-valued `manager` navigation segment.
    pub fn manager_segment(&self) -> Segment {
        Segment::navigation(self.manager, self.users_source(), &self.model)
            .expect("fixture navigation")
    }

    /// Builds the collection-valued `friends` navigation segment.
    pub fn friends_segment(&self) -> Segment {
        Segment::navigation(self.friends, self.users_source(), &self.model)
            .expect("fixture navigation")
    }

    /// Builds the `displayName` property segment.
    pub fn display_name_segment(&self) -> Segment {
        Segment::property(self.display_name, &self.model).expect("fixture property")
    }

    /// Builds the bound `NS.BestFriend` operation segment.
    pub fn best_friend_segment(&self) -> Segment {
        Segment::operation(self.best_friend, Some(self.users), &self.model)
            .expect("fixture operation")
    }

    /// Builds the `ResetAll` operation-import segment.
    pub fn reset_all_import_segment(&self) -> Segment {
        Segment::operation_import(self.reset_all_import, self.users_source(), &self.model)
            .expect("fixture operation import")
    }

    /// Builds a cast segment to `NS.Admin`.
    pub fn admin_cast_segment(&self, single: bool) -> Segment {
        Segment::type_cast(self.admin, single, &self.model).expect("fixture cast")
    }
}

impl Default for SampleModel {
    fn default() -> Self {
        Self::new()
    }
}
