use listof_values::{FromValue, List, TextCell, TypeTag, Value, ValueError, as_type, wrap};
use pretty_assertions::assert_eq;

#[test]
fn wrap_scalars() {
    assert_eq!(wrap(()), Value::Nil);
    assert_eq!(wrap(true), Value::Logical(Some(true)));
    assert_eq!(wrap(None::<bool>), Value::Logical(None));
    assert_eq!(wrap(3), Value::Integer(Some(3)));
    assert_eq!(wrap(1i64 << 40), Value::Double((1i64 << 40) as f64));
    assert_eq!(wrap(0.5f32), Value::Double(0.5));
    assert_eq!(wrap('c'), Value::Text(TextCell::new("c")));
    assert_eq!(wrap(String::from("s")), wrap("s"));
}

#[test]
fn integer_na_agrees_with_cast() {
    let cast_na: Option<i32> = listof_values::cast::cast(i32::MIN);
    assert_eq!(cast_na, None);
    assert_eq!(wrap(i32::MIN), Value::Integer(cast_na));
    assert!(wrap(i32::MIN).is_na());
    assert!(wrap(Some(i32::MIN)).is_na());
    assert_eq!(wrap(i32::MIN + 1), Value::Integer(Some(i32::MIN + 1)));
}

#[test]
fn wrap_value_is_identity() {
    let list = List::new();
    let value = Value::List(list.clone());
    let wrapped = wrap(value);
    assert!(wrapped.as_list().unwrap().ptr_eq(&list));
}

#[test]
fn wrap_vec_builds_list() {
    let value = wrap(vec!["a", "b"]);
    let list = value.as_list().unwrap();
    assert_eq!(list.to_vec(), vec![wrap("a"), wrap("b")]);
    assert_eq!(list.names(), None);
}

#[test]
fn tags() {
    assert_eq!(Value::Nil.tag(), TypeTag::Nil);
    assert_eq!(wrap(1).tag(), TypeTag::Integer);
    assert_eq!(wrap("x").tag(), TypeTag::Text);
    assert_eq!(wrap(List::new()).tag(), TypeTag::Generic);
    assert_eq!(TypeTag::Double.to_string(), "double");
}

#[test]
fn na_detection() {
    assert!(Value::Double(f64::NAN).is_na());
    assert!(Value::Integer(None).is_na());
    assert!(!Value::Nil.is_na());
    assert!(!wrap(0).is_na());
}

#[test]
fn as_type_is_strict() {
    assert_eq!(as_type::<f64>(&wrap(1.5)), Ok(1.5));
    assert_eq!(as_type::<i32>(&wrap(2)), Ok(2));
    assert_eq!(as_type::<Option<bool>>(&wrap(None::<bool>)), Ok(None));
    assert_eq!(as_type::<String>(&wrap("t")), Ok(String::from("t")));

    assert_eq!(
        as_type::<f64>(&wrap(2)),
        Err(ValueError::Conversion {
            from: TypeTag::Integer,
            to: "f64"
        })
    );
    assert!(as_type::<bool>(&Value::Logical(None)).is_err());
    assert!(as_type::<i32>(&Value::Integer(None)).is_err());
}

#[test]
fn list_from_value() {
    let list = List::from_values([wrap(1)]);
    let back = List::from_value(&wrap(list.clone())).unwrap();
    assert!(back.ptr_eq(&list));

    assert!(List::from_value(&Value::Nil).unwrap().is_empty());
    assert!(List::from_value(&wrap(1)).is_err());
}

#[test]
fn value_equality() {
    assert_eq!(Value::Double(f64::NAN), Value::Double(f64::NAN));
    assert_ne!(wrap(1), wrap(1.0));
    assert_eq!(Value::from(2.0), wrap(2.0));
    assert_eq!(Value::from("x"), Value::Text(TextCell::from('x')));
}
