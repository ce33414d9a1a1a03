//! Counting properties of the failure store.

use common::consts::OPERATOR_NOTICE;
use fails::{Code, ErrorStore, Failure};
use proptest::prelude::*;
use std::error::Error;
use std::io;

/// Outcome shapes a worker can report.
#[derive(Debug, Clone, Copy)]
enum Shape {
    Nil,
    Critical,
    Application,
    Timeout,
    Temporary,
    Unrecognized,
    Uncoded,
    Bare,
}

fn shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        Just(Shape::Nil),
        Just(Shape::Critical),
        Just(Shape::Application),
        Just(Shape::Timeout),
        Just(Shape::Temporary),
        Just(Shape::Unrecognized),
        Just(Shape::Uncoded),
        Just(Shape::Bare),
    ]
}

fn build(shape: Shape, i: usize) -> Option<Box<dyn Error + Send + Sync>> {
    let msg = format!("check {i}");
    let err: Box<dyn Error + Send + Sync> = match shape {
        Shape::Nil => return None,
        Shape::Critical => Box::new(Failure::critical(msg)),
        Shape::Application => Box::new(Failure::application(msg)),
        Shape::Timeout => Box::new(Failure::timeout(msg)),
        Shape::Temporary => Box::new(Failure::temporary(msg)),
        Shape::Unrecognized => Box::new(Failure::new(Code::custom("error other")).with_message(msg)),
        Shape::Uncoded => Box::new(Failure::message(msg)),
        Shape::Bare => Box::new(io::Error::other(msg)),
    };
    Some(err)
}

proptest! {
    /// Test: one message per non-nil add, counters never exceed messages,
    /// and the gap is exactly the number of unrecognized failures.
    #[test]
    fn messages_track_non_nil_adds(shapes in proptest::collection::vec(shape(), 0..64)) {
        let store = ErrorStore::new();
        let mut non_nil = 0;
        let mut unrecognized = 0;

        for (i, s) in shapes.iter().enumerate() {
            let err = build(*s, i);
            if err.is_some() {
                non_nil += 1;
            }
            if matches!(s, Shape::Unrecognized | Shape::Uncoded) {
                unrecognized += 1;
            }
            store.add(err.as_deref().map(|e| e as &(dyn Error + 'static)));
        }

        let snapshot = store.snapshot();
        prop_assert_eq!(snapshot.messages.len(), non_nil);
        prop_assert_eq!(store.messages().len(), non_nil);
        prop_assert!(snapshot.counted() <= snapshot.messages.len());
        prop_assert_eq!(snapshot.unrecognized(), unrecognized);
    }

    /// Test: nil adds interleaved anywhere leave the snapshot untouched.
    #[test]
    fn nil_is_a_no_op(prefix in 0usize..16, nils in 1usize..16) {
        let store = ErrorStore::new();
        for i in 0..prefix {
            store.add(Some(&Failure::application(format!("a{i}"))));
        }
        let before = store.snapshot();
        for _ in 0..nils {
            store.add(None);
        }
        prop_assert_eq!(store.snapshot(), before);
    }
}

/// Test: exact annotated text per category.
#[test]
fn annotated_messages() {
    let store = ErrorStore::new();
    store.add(Some(&Failure::critical("boom")));
    store.add(Some(&Failure::application("boom")));
    store.add(Some(&Failure::timeout("boom")));
    store.add(Some(&Failure::temporary("boom")));
    store.add(Some(&Failure::new(Code::custom("error mystery")).with_message("boom")));

    let snapshot = store.snapshot();
    assert_eq!(
        snapshot.messages,
        vec![
            "boom (critical)",
            "boom",
            "boom (timed out)",
            "boom (temporary)",
            "boom",
        ]
    );
    assert_eq!(snapshot.critical, 1);
    assert_eq!(snapshot.application, 1);
    assert_eq!(snapshot.trivial, 2);
    assert_eq!(snapshot.unrecognized(), 1);
}

/// Test: an error without an extractable message is replaced by the
/// operator notice and counted as critical.
#[test]
fn malformed_error_uses_operator_notice() {
    let store = ErrorStore::new();
    let err = io::Error::new(io::ErrorKind::InvalidData, "secret internal detail");
    store.add(Some(&err));

    let snapshot = store.snapshot();
    assert_eq!(snapshot.messages, vec![OPERATOR_NOTICE.to_string()]);
    assert_eq!(snapshot.critical, 1);
    assert_eq!(snapshot.application, 0);
    assert_eq!(snapshot.trivial, 0);
}

/// Test: a coded failure wrapped by a foreign error is still recognised.
#[test]
fn wrapped_failures_are_classified() {
    let store = ErrorStore::new();
    let inner = Failure::message("GET /api/me");
    let outer = Failure::wrap(inner).with_code(Code::Timeout).with_context("attempt", 2);
    store.add(Some(&outer));

    let snapshot = store.snapshot();
    assert_eq!(snapshot.messages, vec!["GET /api/me (timed out)".to_string()]);
    assert_eq!(snapshot.trivial, 1);
}

/// Test: boxed worker errors can be reported directly.
#[test]
fn boxed_errors_are_accepted() {
    let store = ErrorStore::new();
    let boxed: fails::BoxError = Box::new(Failure::critical("lost order"));
    store.add(Some(&*boxed));
    assert_eq!(store.snapshot().critical, 1);
}

/// Test: snapshots serialise for reporting.
#[test]
fn snapshot_serialises() {
    let store = ErrorStore::new();
    store.add(Some(&Failure::critical("boom")));

    let json = serde_json::to_value(store.snapshot()).unwrap();
    assert_eq!(json["critical"], 1);
    assert_eq!(json["application"], 0);
    assert_eq!(json["trivial"], 0);
    assert_eq!(json["messages"][0], "boom (critical)");
}
