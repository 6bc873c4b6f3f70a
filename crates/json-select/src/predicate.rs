//! Leaf predicates for use with [`filter`](crate::filter).
//!
//! These selectors are consumed for their `matches` capability; applied
//! directly, each keeps exactly the roots it matches, in order.

use serde_json::Value;

use crate::selector::{retain_matching, Selector};

/// Matches numbers equal to `expected`. Integer and float forms compare
/// equal, so `1` matches `number_eq(1.0)`.
pub fn number_eq(expected: f64) -> NumberEq {
    NumberEq { expected }
}

/// Matches strings equal to `expected`.
pub fn string_eq(expected: impl Into<String>) -> StringEq {
    StringEq {
        expected: expected.into(),
    }
}

/// Matches the boolean `expected`.
pub fn bool_eq(expected: bool) -> BoolEq {
    BoolEq { expected }
}

/// Matches objects that contain the key `name`.
pub fn has_field(name: impl Into<String>) -> HasField {
    HasField { name: name.into() }
}

/// Matches values both `a` and `b` match.
pub fn and<A: Selector, B: Selector>(a: A, b: B) -> And<A, B> {
    And { a, b }
}

/// Matches values either `a` or `b` matches.
pub fn or<A: Selector, B: Selector>(a: A, b: B) -> Or<A, B> {
    Or { a, b }
}

/// Matches values `predicate` does not match.
pub fn not<P: Selector>(predicate: P) -> Not<P> {
    Not { predicate }
}

/// Numeric equality predicate. See [`number_eq`].
#[derive(Debug, Clone, Copy)]
pub struct NumberEq {
    expected: f64,
}

impl Selector for NumberEq {
    fn matches(&self, value: &Value) -> bool {
        value.as_f64().map_or(false, |n| n == self.expected)
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        retain_matching(self, roots, out);
    }
}

/// String equality predicate. See [`string_eq`].
#[derive(Debug, Clone)]
pub struct StringEq {
    expected: String,
}

impl Selector for StringEq {
    fn matches(&self, value: &Value) -> bool {
        value.as_str() == Some(self.expected.as_str())
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        retain_matching(self, roots, out);
    }
}

/// Boolean equality predicate. See [`bool_eq`].
#[derive(Debug, Clone, Copy)]
pub struct BoolEq {
    expected: bool,
}

impl Selector for BoolEq {
    fn matches(&self, value: &Value) -> bool {
        value.as_bool() == Some(self.expected)
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        retain_matching(self, roots, out);
    }
}

/// Object-membership predicate. See [`has_field`].
#[derive(Debug, Clone)]
pub struct HasField {
    name: String,
}

impl Selector for HasField {
    fn matches(&self, value: &Value) -> bool {
        value
            .as_object()
            .map_or(false, |map| map.contains_key(&self.name))
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        retain_matching(self, roots, out);
    }
}

/// Conjunction of two predicates. See [`and`].
#[derive(Debug, Clone)]
pub struct And<A, B> {
    a: A,
    b: B,
}

impl<A: Selector, B: Selector> Selector for And<A, B> {
    fn matches(&self, value: &Value) -> bool {
        self.a.matches(value) && self.b.matches(value)
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        retain_matching(self, roots, out);
    }
}

/// Disjunction of two predicates. See [`or`].
#[derive(Debug, Clone)]
pub struct Or<A, B> {
    a: A,
    b: B,
}

impl<A: Selector, B: Selector> Selector for Or<A, B> {
    fn matches(&self, value: &Value) -> bool {
        self.a.matches(value) || self.b.matches(value)
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        retain_matching(self, roots, out);
    }
}

/// Negation of a predicate. See [`not`].
#[derive(Debug, Clone)]
pub struct Not<P> {
    predicate: P,
}

impl<P: Selector> Selector for Not<P> {
    fn matches(&self, value: &Value) -> bool {
        !self.predicate.matches(value)
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        retain_matching(self, roots, out);
    }
}
