//! The [`Selector`] trait and the chain anchor.

use serde_json::Value;

use crate::cast::{AsMap, AsNumber, AsSlice, AsString};
use crate::field::Field;
use crate::filter::Filter;
use crate::traverse::{All, Children};

/// A composable query over JSON-like trees.
///
/// Selectors are plain immutable values: construction is pure and deferred,
/// and a selector may be applied any number of times. Each link in a chain
/// consumes the output of the previous link as its new root set, so
/// `field("a").children().as_number()` reads "descend into `a`, take its
/// children, keep the numbers".
pub trait Selector {
    /// Whether `value` on its own qualifies under this selector.
    fn matches(&self, value: &Value) -> bool;

    /// Append every value this selector picks out of `roots`, in traversal
    /// order. [`select_from`](Selector::select_from) is the public entry
    /// point; implementations only need this accumulator form.
    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>);

    /// Apply the selector to one or more roots and collect every match.
    ///
    /// Roots are visited in the order given. The input tree is only read,
    /// and repeated calls with unchanged input return the same ordered
    /// result.
    ///
    /// ```
    /// use json_select::{children, Selector};
    /// use serde_json::json;
    ///
    /// let a = json!({"x": 1});
    /// let b = json!([2, 3]);
    /// let picked = children().select_from([&a, &b]);
    /// assert_eq!(picked, vec![&json!(1), &json!(2), &json!(3)]);
    /// ```
    fn select_from<'a, I>(&self, roots: I) -> Vec<&'a Value>
    where
        Self: Sized,
        I: IntoIterator<Item = &'a Value>,
    {
        let roots: Vec<&Value> = roots.into_iter().collect();
        let mut out = Vec::new();
        self.select(&roots, &mut out);
        out
    }

    /// Continue with the direct children of every selected value.
    fn children(self) -> Children<Self>
    where
        Self: Sized,
    {
        Children::wrap(self)
    }

    /// Continue with every descendant of every selected value, depth-first.
    fn all(self) -> All<Self>
    where
        Self: Sized,
    {
        All::wrap(self)
    }

    /// Continue with the value under `name` in every selected object.
    fn field(self, name: impl Into<String>) -> Field<Self>
    where
        Self: Sized,
    {
        Field::wrap(self, name.into())
    }

    /// Keep only the selected values `predicate` matches.
    fn filter<P: Selector>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
    {
        Filter::wrap(self, predicate)
    }

    /// Narrow the selection to numeric leaves, cast to `f64`.
    fn as_number(self) -> AsNumber<Self>
    where
        Self: Sized,
    {
        AsNumber::wrap(self)
    }

    /// Narrow the selection to string leaves.
    fn as_string(self) -> AsString<Self>
    where
        Self: Sized,
    {
        AsString::wrap(self)
    }

    /// Narrow the selection to objects.
    fn as_map(self) -> AsMap<Self>
    where
        Self: Sized,
    {
        AsMap::wrap(self)
    }

    /// Narrow the selection to arrays.
    fn as_slice(self) -> AsSlice<Self>
    where
        Self: Sized,
    {
        AsSlice::wrap(self)
    }
}

/// Anchor of a selector chain: passes its roots through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Root;

impl Selector for Root {
    fn matches(&self, _value: &Value) -> bool {
        true
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        out.extend_from_slice(roots);
    }
}

/// Keep, in order, the roots `selector` matches. Shared by every predicate
/// link (filters, shape tests, kind tests).
pub(crate) fn retain_matching<'a, S: Selector>(
    selector: &S,
    roots: &[&'a Value],
    out: &mut Vec<&'a Value>,
) {
    for &value in roots {
        if selector.matches(value) {
            out.push(value);
        }
    }
}
