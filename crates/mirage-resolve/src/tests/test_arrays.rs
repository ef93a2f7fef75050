//! Array-literal resolution: positional keys, explicit keys, coercion and
//! overwrite semantics.

use expect_test::expect;
use mirage_syntax::ast::{ArrayItem, Expr, ExprKind, Name};

use crate::context::ContextKind;
use crate::core::ValueResolver;
use crate::registry::ConstantRegistry;
use crate::tests::mocks::MockContext;
use crate::value::{ArrayKey, Value, ValueArray};

fn int(value: i64) -> Expr {
    Expr::new(ExprKind::Int(value))
}

fn string(value: &str) -> Expr {
    Expr::new(ExprKind::String(value.to_string()))
}

fn array(items: Vec<ArrayItem>) -> Expr {
    Expr::new(ExprKind::Array(items))
}

fn resolve(node: &Expr) -> Option<Value> {
    let context = MockContext::bare(ContextKind::FileNamespace);
    let constants = ConstantRegistry::new();
    let mut resolver = ValueResolver::new(&context, &constants);
    resolver.process(node);
    resolver.into_value()
}

fn entries(pairs: Vec<(ArrayKey, Value)>) -> Value {
    Value::Array(pairs.into_iter().collect::<ValueArray>())
}

#[test]
fn unkeyed_entries_take_sequential_integer_keys() {
    let node = array(vec![
        ArrayItem::value(int(10)),
        ArrayItem::value(int(20)),
        ArrayItem::value(int(30)),
    ]);

    let expected = entries(vec![
        (ArrayKey::Int(0), Value::Int(10)),
        (ArrayKey::Int(1), Value::Int(20)),
        (ArrayKey::Int(2), Value::Int(30)),
    ]);
    assert_eq!(resolve(&node), Some(expected));
}

#[test]
fn positional_keys_count_positions_not_unkeyed_entries() {
    // The entry at source position 2 gets key 2 even though position 1
    // carried an explicit string key.
    let node = array(vec![
        ArrayItem::value(int(10)),
        ArrayItem::keyed(string("x"), int(20)),
        ArrayItem::value(int(30)),
    ]);

    let expected = entries(vec![
        (ArrayKey::Int(0), Value::Int(10)),
        (ArrayKey::from("x"), Value::Int(20)),
        (ArrayKey::Int(2), Value::Int(30)),
    ]);
    assert_eq!(resolve(&node), Some(expected));
}

#[test]
fn duplicate_explicit_key_keeps_the_later_value() {
    let node = array(vec![
        ArrayItem::keyed(string("k"), int(1)),
        ArrayItem::keyed(string("k"), int(2)),
    ]);

    let Some(Value::Array(result)) = resolve(&node) else {
        panic!("expected an array value");
    };
    assert_eq!(result.len(), 1);
    assert_eq!(result.get(&ArrayKey::from("k")), Some(&Value::Int(2)));
}

#[test]
fn duplicate_key_keeps_its_first_insertion_position() {
    let node = array(vec![
        ArrayItem::keyed(string("a"), int(1)),
        ArrayItem::keyed(string("b"), int(2)),
        ArrayItem::keyed(string("a"), int(3)),
    ]);

    let Some(Value::Array(result)) = resolve(&node) else {
        panic!("expected an array value");
    };
    let keys: Vec<_> = result.keys().cloned().collect();
    assert_eq!(keys, vec![ArrayKey::from("a"), ArrayKey::from("b")]);
    assert_eq!(result.get(&ArrayKey::from("a")), Some(&Value::Int(3)));
}

#[test]
fn canonical_integer_string_key_collides_with_the_positional_key() {
    // ["0" => 7] written after an unkeyed first entry lands on the same
    // integer key 0 the first entry received.
    let node = array(vec![
        ArrayItem::value(int(9)),
        ArrayItem::keyed(string("0"), int(7)),
    ]);

    let expected = entries(vec![(ArrayKey::Int(0), Value::Int(7))]);
    assert_eq!(resolve(&node), Some(expected));
}

#[test]
fn bool_keys_coerce_to_integers() {
    let context = MockContext::bare(ContextKind::FileNamespace);
    let constants = ConstantRegistry::with_builtins();
    let node = array(vec![ArrayItem::keyed(
        Expr::new(ExprKind::ConstFetch(Name::parse("true").unwrap())),
        string("on"),
    )]);

    let mut resolver = ValueResolver::new(&context, &constants);
    resolver.process(&node);

    let expected = entries(vec![(ArrayKey::Int(1), Value::from("on"))]);
    assert_eq!(resolver.into_value(), Some(expected));
}

#[test]
fn float_and_null_keys_coerce() {
    let node = array(vec![
        ArrayItem::keyed(Expr::new(ExprKind::Float(1.7)), string("float")),
        ArrayItem::keyed(
            Expr::new(ExprKind::ConstFetch(Name::parse("UNDEFINED").unwrap())),
            string("null-ish"),
        ),
    ]);

    // 1.7 truncates to key 1; the undefined constant resolves to absent,
    // which coerces like null to the empty string key.
    let expected = entries(vec![
        (ArrayKey::Int(1), Value::from("float")),
        (ArrayKey::from(""), Value::from("null-ish")),
    ]);
    assert_eq!(resolve(&node), Some(expected));
}

#[test]
fn non_canonical_numeric_strings_stay_string_keys() {
    let node = array(vec![
        ArrayItem::keyed(string("042"), int(1)),
        ArrayItem::keyed(string("-0"), int(2)),
        ArrayItem::keyed(string("1.0"), int(3)),
    ]);

    let expected = entries(vec![
        (ArrayKey::from("042"), Value::Int(1)),
        (ArrayKey::from("-0"), Value::Int(2)),
        (ArrayKey::from("1.0"), Value::Int(3)),
    ]);
    assert_eq!(resolve(&node), Some(expected));
}

#[test]
fn entry_with_an_array_key_is_dropped() {
    let node = array(vec![
        ArrayItem::keyed(array(vec![]), int(1)),
        ArrayItem::value(int(2)),
    ]);

    let expected = entries(vec![(ArrayKey::Int(1), Value::Int(2))]);
    assert_eq!(resolve(&node), Some(expected));
}

#[test]
fn unresolvable_entry_value_collapses_to_null() {
    let node = array(vec![ArrayItem::value(Expr::new(ExprKind::Variable(
        "runtime".to_string(),
    )))]);

    let expected = entries(vec![(ArrayKey::Int(0), Value::Null)]);
    assert_eq!(resolve(&node), Some(expected));
}

#[test]
fn empty_array_literal_resolves_to_an_empty_mapping() {
    let node = array(vec![]);
    assert_eq!(resolve(&node), Some(Value::Array(ValueArray::new())));
}

#[test]
fn nested_composite_matches_the_hand_built_mapping() {
    // [[1, 2], ["a" => 3]]
    let node = array(vec![
        ArrayItem::value(array(vec![
            ArrayItem::value(int(1)),
            ArrayItem::value(int(2)),
        ])),
        ArrayItem::value(array(vec![ArrayItem::keyed(string("a"), int(3))])),
    ]);

    let inner_first: ValueArray = vec![
        (ArrayKey::Int(0), Value::Int(1)),
        (ArrayKey::Int(1), Value::Int(2)),
    ]
    .into_iter()
    .collect();
    let inner_second: ValueArray = vec![(ArrayKey::from("a"), Value::Int(3))]
        .into_iter()
        .collect();
    let expected = entries(vec![
        (ArrayKey::Int(0), Value::Array(inner_first)),
        (ArrayKey::Int(1), Value::Array(inner_second)),
    ]);

    assert_eq!(resolve(&node), Some(expected));
}

#[test]
fn nested_composite_display_form() {
    let node = array(vec![
        ArrayItem::value(array(vec![
            ArrayItem::value(int(1)),
            ArrayItem::value(int(2)),
        ])),
        ArrayItem::value(array(vec![ArrayItem::keyed(string("a"), int(3))])),
    ]);

    let value = resolve(&node).unwrap();
    expect![[r#"[0 => [0 => 1, 1 => 2], 1 => ['a' => 3]]"#]].assert_eq(&value.to_string());
}
