//! Property-based tests for path classification and matching.
//!
//! Note: The keys module already has property tests for the key-literal
//! codec. This module focuses on classifier totality and match semantics
//! over generated segment sequences.

use proptest::prelude::*;

use super::container::UriPath;
use super::kind::classify;
use crate::keys::KeyValues;
use crate::model::{Model, NavigationSource, TypeRef};
use crate::segment::Segment;

fn fixture_model() -> (Model, Vec<Segment>) {
    let mut model = Model::new();
    let string = model.add_primitive_type("Edm.String");
    let user = model.add_entity_type("NS", "User", &["id"]);
    let admin = model.add_entity_type("NS", "Admin", &["id"]);
    let users = model.add_entity_set("NS.Container", "Users", user);
    let me = model.add_singleton("NS.Container", "Me", user);
    let manager = model.add_navigation("manager", user, false);
    let friends = model.add_navigation("friends", user, true);
    let display_name = model.add_property("displayName", TypeRef::single(string));
    let best = model.add_operation("NS", "BestFriend", Some(TypeRef::single(user)));
    let reset = model.add_operation("NS", "ResetAll", None);
    let reset_import = model.add_operation_import("ResetAll", reset);

    let source = Some(NavigationSource::EntitySet(users));
    let values: KeyValues = [("id", "1")].into_iter().collect();

    // Every constructor here is validated against the model above; failures
    // would be fixture bugs, so the unwraps are fine in test code.
    let pool = vec![
        Segment::entity_set(users, &model).unwrap(),
        Segment::singleton(me, &model).unwrap(),
        Segment::key(values, user, source, &model).unwrap(),
        Segment::navigation(manager, source, &model).unwrap(),
        Segment::navigation(friends, source, &model).unwrap(),
        Segment::property(display_name, &model).unwrap(),
        Segment::operation(best, Some(users), &model).unwrap(),
        Segment::operation_import(reset_import, source, &model).unwrap(),
        Segment::type_cast(admin, true, &model).unwrap(),
    ];

    (model, pool)
}

fn sequence_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..9usize, 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // The classifier never panics, whatever the sequence shape.
    #[test]
    fn classify_total(indices in sequence_strategy()) {
        let (model, pool) = fixture_model();
        let segments: Vec<Segment> =
            indices.iter().map(|&i| pool[i].clone()).collect();
        let _ = classify(&segments, &model);
    }

    // Classification is deterministic.
    #[test]
    fn classify_deterministic(indices in sequence_strategy()) {
        let (model, pool) = fixture_model();
        let segments: Vec<Segment> =
            indices.iter().map(|&i| pool[i].clone()).collect();
        let first = classify(&segments, &model).ok();
        let second = classify(&segments, &model).ok();
        prop_assert_eq!(first, second);
    }

    // Every constructible path matches itself.
    #[test]
    fn path_match_reflexive(indices in sequence_strategy()) {
        let (model, pool) = fixture_model();
        let segments: Vec<Segment> =
            indices.iter().map(|&i| pool[i].clone()).collect();
        if let Ok(path) = UriPath::new(segments, &model) {
            prop_assert!(path.matches(&path));
        }
    }

    // Matching is symmetric across two paths built from the same pool.
    #[test]
    fn path_match_symmetric(
        a in sequence_strategy(),
        b in sequence_strategy(),
    ) {
        let (model, pool) = fixture_model();
        let left: Vec<Segment> = a.iter().map(|&i| pool[i].clone()).collect();
        let right: Vec<Segment> = b.iter().map(|&i| pool[i].clone()).collect();
        if let (Ok(left), Ok(right)) = (
            UriPath::new(left, &model),
            UriPath::new(right, &model),
        ) {
            prop_assert_eq!(left.matches(&right), right.matches(&left));
        }
    }

    // Truncating to the full length reproduces the original kind.
    #[test]
    fn truncate_full_length_is_identity(indices in sequence_strategy()) {
        let (model, pool) = fixture_model();
        let segments: Vec<Segment> =
            indices.iter().map(|&i| pool[i].clone()).collect();
        if let Ok(path) = UriPath::new(segments, &model) {
            let full = path.truncated(path.len(), &model).unwrap();
            prop_assert_eq!(full.kind(), path.kind());
            prop_assert!(full.matches(&path));
        }
    }
}
