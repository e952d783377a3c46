//! Tests for ListOf

use super::*;
use listof_values::wrap;
use pretty_assertions::assert_eq;

fn named(values: impl IntoIterator<Item = Value>, names: &[&str]) -> List {
    List::with_names(values, names.iter().copied()).unwrap()
}

#[test]
fn empty_view() {
    let view = ListOf::<f64>::new();
    assert_eq!(view.len(), 0);
    assert!(view.is_empty());
    assert_eq!(view.names(), None);
    assert_eq!(view.iter().count(), 0);
}

#[test]
fn index_reads_convert_to_t() {
    let view = ListOf::<f64>::from_list(List::from_values([wrap(1.5), wrap(2), wrap(false)]));
    assert_eq!(view.get(0), Ok(1.5));
    assert_eq!(view.get(1), Ok(2.0));
    assert_eq!(view.get(2), Ok(0.0));
}

#[test]
fn index_out_of_range() {
    let view = ListOf::<f64>::from_list(List::from_values([wrap(1.5)]));
    let err = view.get(1).unwrap_err();
    assert_eq!(err, Error::Value(ValueError::OutOfRange { index: 1, len: 1 }));
    assert!(err.is_missing());
    assert!(!err.is_conversion());
}

#[test]
fn name_reads_first_match() {
    let view = ListOf::<i32>::from_list(named([wrap(1), wrap(2), wrap(3)], &["a", "b", "a"]));
    assert_eq!(view.get("a"), Ok(1));
    assert_eq!(view.get("b"), Ok(2));

    let err = view.get("c").unwrap_err();
    assert_eq!(
        err,
        Error::Value(ValueError::NameNotFound { name: "c".into() })
    );
    assert!(err.is_missing());
}

#[test]
fn name_read_on_unnamed_list_is_not_found() {
    let view = ListOf::<i32>::from_list(List::from_values([wrap(1)]));
    assert!(view.get("a").unwrap_err().is_missing());
}

#[test]
fn lenient_mismatch_fails_at_conversion() {
    let view = ListOf::<f64>::from_list(List::from_values([wrap("x")]));
    let err = view.get(0).unwrap_err();
    assert_eq!(
        err,
        Error::Conversion {
            from: TypeTag::Text,
            to: TypeTag::Double
        }
    );
    assert!(err.is_conversion());
    assert!(!err.is_missing());
}

#[test]
fn na_into_non_na_type() {
    let view = ListOf::<i32>::from_list(List::from_values([Value::Integer(None)]));
    let err = view.get(0).unwrap_err();
    assert!(matches!(
        err,
        Error::NotAvailable {
            tag: TypeTag::Integer,
            ..
        }
    ));
    assert!(err.is_conversion());

    let view = ListOf::<Option<i32>>::from_list(view.into_list());
    assert_eq!(view.get(0), Ok(None));
}

#[test]
fn strict_mode_rejects_other_tags() {
    crate::test_utils::init_test_logging();
    let view = ListOf::<f64>::from_list(List::from_values([wrap(1.0), wrap(2)]));

    assert_eq!(view.get_with(0, AccessMode::Strict), Ok(1.0));
    assert_eq!(
        view.get_with(1, AccessMode::Strict),
        Err(Error::TagMismatch {
            expected: TypeTag::Double,
            found: TypeTag::Integer
        })
    );
    assert_eq!(view.get_with(1, AccessMode::Lenient), Ok(2.0));
}

#[test]
fn strict_mode_still_reports_missing_slots_first() {
    let view = ListOf::<f64>::from_list(List::new());
    assert!(view.get_with(0, AccessMode::Strict).unwrap_err().is_missing());
}

#[test]
fn strict_mode_generic_accepts_anything() {
    let view = ListOf::<Value>::from_list(List::from_values([wrap(1), wrap("a"), Value::Nil]));
    for i in 0..3 {
        assert!(view.get_with(i, AccessMode::Strict).is_ok());
    }
}

#[test]
fn text_views() {
    let view = ListOf::<String>::from_list(named([wrap("x"), wrap('y')], &["first", "second"]));
    assert_eq!(view.get("second"), Ok(String::from("y")));

    let cells = ListOf::<TextCell>::from_list(view.into_list());
    assert_eq!(cells.get(0), Ok(TextCell::new("x")));
}

#[test]
fn iteration_matches_indexed_reads() {
    let view = ListOf::<i32>::from_list(List::from_values([wrap(3), wrap(1.0), wrap(true)]));
    let items: Vec<i32> = view.iter().collect::<Result<_>>().unwrap();
    assert_eq!(items, vec![3, 1, 1]);

    for (i, item) in view.iter().enumerate() {
        assert_eq!(item, view.get(i));
    }
    assert_eq!((&view).into_iter().count(), view.len());
}

#[test]
fn iteration_surfaces_per_element_errors() {
    let view = ListOf::<f64>::from_list(List::from_values([wrap(1.0), wrap("no"), wrap(2.0)]));
    let results: Vec<_> = view.iter().collect();
    assert_eq!(results.len(), 3);
    assert!(results[1].as_ref().unwrap_err().is_conversion());
    assert_eq!(results[2], Ok(2.0));
}

#[test]
fn clone_shares_the_list() {
    let view = ListOf::<f64>::from_list(List::from_values([wrap(1.0)]));
    let copy = view.clone();
    assert!(copy.as_list().ptr_eq(view.as_list()));

    view.as_list().push(2.0);
    assert_eq!(copy.len(), 2);
}

#[test]
fn dropping_a_view_keeps_the_list() {
    let list = List::from_values([wrap(1.0)]);
    let view = ListOf::<f64>::from_list(list.clone());
    drop(view);
    assert_eq!(list.get(0), Ok(Value::Double(1.0)));
}

#[test]
fn assign_from_other_views_shares_handles() {
    let source = ListOf::<i32>::from_list(List::from_values([wrap(7)]));
    let mut target = ListOf::<f64>::new();

    target.assign_from(&source).unwrap();
    assert!(target.as_list().ptr_eq(source.as_list()));
    assert_eq!(target.get(0), Ok(7.0));

    let mut same = ListOf::<i32>::new();
    same.assign_from(source.clone()).unwrap();
    assert_eq!(same, source);
}

#[test]
fn assign_from_nil_gives_empty_list() {
    let mut view = ListOf::<f64>::from_list(List::from_values([wrap(1.0)]));
    view.assign_from(()).unwrap();
    assert!(view.is_empty());
}

#[test]
fn assign_from_non_list_fails_and_keeps_view() {
    let mut view = ListOf::<f64>::from_list(List::from_values([wrap(1.0)]));
    let err = view.assign_from(3.0).unwrap_err();
    assert!(matches!(
        err,
        Error::Value(ValueError::Conversion {
            from: TypeTag::Double,
            ..
        })
    ));
    assert!(err.is_conversion());
    assert_eq!(view.get(0), Ok(1.0));
}

#[test]
fn vec_assignment_builds_fresh_list() {
    let mut view = ListOf::<f64>::new();
    view.assign_from(vec![1.0, 2.0]).unwrap();
    assert_eq!(view.iter().collect::<Result<Vec<_>>>(), Ok(vec![1.0, 2.0]));
}

#[test]
fn conversions_round_trip() {
    let list = named([wrap(1.0), wrap(2.0)], &["a", "b"]);
    let view = ListOf::<f64>::from_list(list.clone());

    let back: List = view.clone().into();
    assert!(back.ptr_eq(&list));

    let value: Value = view.clone().into();
    let again = ListOf::<f64>::try_from(value).unwrap();
    assert_eq!(again, view);
    assert_eq!(again.names(), Some(vec![TextCell::new("a"), TextCell::new("b")]));
    assert_eq!(view.to_value(), Value::List(list));
}

#[test]
fn try_from_value_rejects_scalars() {
    assert!(ListOf::<f64>::try_from(wrap(1.0)).is_err());
    assert!(ListOf::<f64>::try_from(Value::Nil).unwrap().is_empty());
}

#[test]
fn nested_views() {
    let inner = List::from_values([wrap(1), wrap(2)]);
    let outer = ListOf::<ListOf<i32>>::from_list(List::from_values([wrap(inner.clone())]));

    let first = outer.get(0).unwrap();
    assert!(first.as_list().ptr_eq(&inner));
    assert_eq!(first.get(1), Ok(2));

    let err = ListOf::<ListOf<i32>>::from_list(List::from_values([wrap(1)]))
        .get(0)
        .unwrap_err();
    assert!(err.is_conversion());
}

#[test]
fn list_elements() {
    let view = ListOf::<List>::from_list(List::from_values([wrap(List::new()), Value::Nil]));
    assert_eq!(view.get(0), Ok(List::new()));
    assert_eq!(view.get(1), Ok(List::new()));
}
