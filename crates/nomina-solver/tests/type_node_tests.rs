use super::*;
use std::io::Cursor;

fn round_trip(node: &TypeNode) -> TypeNode {
    let mut out = StubOutput::new(Vec::new());
    node.serialize(&mut out).unwrap();
    let mut input = StubInput::new(Cursor::new(out.into_inner()));
    TypeNode::deserialize(&mut input).unwrap()
}

#[test]
fn test_round_trip_without_super() {
    let restored = round_trip(&TypeNode::create("Foo", None));
    assert_eq!(restored.name(), "Foo");
    assert_eq!(restored.super_name(), None);
    assert_eq!(restored, TypeNode::create("Foo", None));
}

#[test]
fn test_round_trip_with_super() {
    let node = TypeNode::create("Dog", Some("Animal".to_string()));
    let restored = round_trip(&node);
    assert_eq!(restored, node);
    assert_eq!(restored.super_name(), Some("Animal"));
}

#[test]
fn test_serialize_writes_exactly_two_names() {
    let mut out = StubOutput::new(Vec::new());
    TypeNode::create("A", None).serialize(&mut out).unwrap();
    let bytes = out.into_inner();
    // "A": header 2 + 1 byte, then the null marker.
    assert_eq!(bytes, vec![2, 0, 0, 0, b'A', 0, 0, 0, 0]);
}

#[test]
fn test_anonymous_record_restores_as_declared() {
    let node = TypeNode::create_anonymous_type(&DeclSite::new("a.lua", 3, "t"));
    let restored = round_trip(&node);
    assert_eq!(restored.name(), node.name());
    assert_eq!(restored.kind(), &TypeNodeKind::Declared);
}

#[test]
fn test_deserialize_rejects_missing_name() {
    let mut out = StubOutput::new(Vec::new());
    out.write_name(None).unwrap();
    out.write_name(None).unwrap();
    let mut input = StubInput::new(Cursor::new(out.into_inner()));
    assert!(matches!(
        TypeNode::deserialize(&mut input),
        Err(StubError::MissingName { field: "name" })
    ));
}

#[test]
fn test_deserialize_propagates_stream_fault() {
    let mut input = StubInput::new(Cursor::new(vec![9, 0]));
    assert!(matches!(
        TypeNode::deserialize(&mut input),
        Err(StubError::Io(_))
    ));
}

#[test]
fn test_anonymous_name_is_deterministic_per_site() {
    let site = DeclSite::new("src/player.lua", 120, "player");
    let first = TypeNode::create_anonymous_type(&site);
    let second = TypeNode::create_anonymous_type(&site.clone());
    assert_eq!(first.name(), "src/player.lua@(120)player");
    assert_eq!(first, second);

    let other_site = DeclSite::new("src/player.lua", 240, "player");
    let other = TypeNode::create_anonymous_type(&other_site);
    assert_ne!(first.name(), other.name());
}

#[test]
fn test_global_type_name_is_reference_text() {
    let reference = GlobalRef::new("Utils").at(DeclSite::new("main.lua", 4, "Utils"));
    let node = TypeNode::create_global_type(&reference);
    assert_eq!(node.name(), "Utils");
    assert_eq!(node.super_name(), None);
    match node.kind() {
        TypeNodeKind::Global { reference: kept } => assert_eq!(kept, &reference),
        other => panic!("expected global kind, got {other:?}"),
    }
}

#[test]
fn test_from_record_keeps_both_names() {
    let record = ClassRecord::new("Dog", Some("Animal"));
    let node = TypeNode::from_record(&record);
    assert_eq!(node.name(), "Dog");
    assert_eq!(node.super_name(), Some("Animal"));
    assert_eq!(node.class_name(), "Dog");
}
