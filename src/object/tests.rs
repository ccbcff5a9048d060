use pretty_assertions::assert_eq;

use super::object::{Object, ObjectKind};

#[test]
fn test_inspect() {
    assert_eq!(Object::Integer(-42).inspect(), "-42");
    assert_eq!(Object::Boolean(true).inspect(), "true");
    assert_eq!(Object::Boolean(false).inspect(), "false");
    assert_eq!(Object::Null.inspect(), "null");
}

#[test]
fn test_kind() {
    assert_eq!(Object::Integer(1).kind(), ObjectKind::Integer);
    assert_eq!(Object::from(true).kind(), ObjectKind::Boolean);
    assert_eq!(Object::Null.kind(), ObjectKind::Null);

    assert_eq!(ObjectKind::Integer.to_string(), "INTEGER");
    assert_eq!(ObjectKind::Boolean.to_string(), "BOOLEAN");
    assert_eq!(ObjectKind::Null.to_string(), "NULL");
}
