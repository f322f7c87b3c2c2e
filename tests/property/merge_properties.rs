//! Property-based tests for merge guarantees

use homevar::{merge, Document, Mapping};
use proptest::prelude::*;

/// Integers and strings, the values that overwrite
fn scalar() -> impl Strategy<Value = Document> {
    prop_oneof![
        (-50i64..50).prop_map(Document::Integer),
        "[a-z]{0,4}".prop_map(Document::String),
    ]
}

/// Every primitive, including the ones that never overwrite
fn leaf() -> impl Strategy<Value = Document> {
    prop_oneof![
        3 => scalar(),
        1 => any::<bool>().prop_map(Document::Bool),
        1 => (-10.0f64..10.0).prop_map(Document::Float),
        1 => Just(Document::Null),
    ]
}

fn tree() -> impl Strategy<Value = Document> {
    leaf().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Document::Sequence),
            prop::collection::btree_map("[a-d]", inner, 0..4).prop_map(Document::Mapping),
        ]
    })
}

fn root() -> impl Strategy<Value = Document> {
    prop::collection::btree_map("[a-e]", tree(), 0..5).prop_map(Document::Mapping)
}

/// Expected result of filling an empty mapping from `doc`: mappings are copied key by
/// key, sequences are copied element by element with repeats collapsed.
fn default_copy(doc: &Document) -> Document {
    match doc {
        Document::Sequence(seq) => {
            let mut out: Vec<Document> = Vec::new();
            for element in seq {
                if !out.contains(element) {
                    out.push(element.clone());
                }
            }
            Document::Sequence(out)
        }
        Document::Mapping(map) => Document::Mapping(
            map.iter()
                .map(|(k, v)| (k.clone(), default_copy(v)))
                .collect::<Mapping>(),
        ),
        other => other.clone(),
    }
}

proptest! {
    #[test]
    fn merge_is_idempotent(source in root(), dest in root()) {
        let mut once = dest;
        prop_assume!(merge(&source, &mut once).is_ok());
        let mut twice = once.clone();
        merge(&source, &mut twice).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn merge_into_empty_fills_defaults(source in root()) {
        let mut dest = Document::mapping();
        merge(&source, &mut dest).unwrap();
        prop_assert_eq!(dest, default_copy(&source));
    }

    #[test]
    fn merge_never_deletes_destination_keys(source in root(), dest in root()) {
        let before = dest.clone();
        let mut after = dest;
        prop_assume!(merge(&source, &mut after).is_ok());
        let before_map = before.as_mapping().unwrap();
        for (key, value) in before_map {
            let merged_value = after.get(key);
            prop_assert!(merged_value.is_some());
            if source.get(key).is_none() {
                prop_assert_eq!(merged_value, Some(value));
            }
        }
    }

    #[test]
    fn integer_and_string_sources_always_win(source in root(), dest in root()) {
        let mut after = dest;
        prop_assume!(merge(&source, &mut after).is_ok());
        for (key, value) in source.as_mapping().unwrap() {
            if value.is_overwriting_scalar() {
                prop_assert_eq!(after.get(key), Some(value));
            }
        }
    }

    #[test]
    fn sequence_merge_is_ordered_union(
        source in prop::collection::vec(0i64..20, 0..10),
        dest in prop::collection::vec(0i64..20, 0..10),
    ) {
        let source_doc = Document::from(source.clone());
        let mut merged_doc = Document::from(dest.clone());
        merge(&source_doc, &mut merged_doc).unwrap();

        let mut expected = dest.clone();
        for value in source {
            if !expected.contains(&value) {
                expected.push(value);
            }
        }
        prop_assert_eq!(merged_doc, Document::from(expected));
    }

    #[test]
    fn user_primitives_survive_template_merge(user in root(), template in root()) {
        let mut loaded = template;
        prop_assume!(merge(&user, &mut loaded).is_ok());
        for (key, value) in user.as_mapping().unwrap() {
            if matches!(value, Document::Bool(_) | Document::Float(_) | Document::Null) {
                prop_assert!(loaded.get(key).is_some());
            }
        }
    }

    #[test]
    fn container_shape_mismatch_is_rejected(items in prop::collection::vec(leaf(), 0..4)) {
        let sequence = Document::Sequence(items);
        let mut mapping = Document::mapping();
        prop_assert!(merge(&sequence, &mut mapping).is_err());
        let mut sequence_dest = sequence.clone();
        prop_assert!(merge(&Document::mapping(), &mut sequence_dest).is_err());
    }
}
