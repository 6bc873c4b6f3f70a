//! Predicate filtering over a candidate set.

use serde_json::Value;

use crate::selector::{retain_matching, Root, Selector};

/// Keep, in input order, exactly the roots `predicate` matches.
///
/// The candidates are tested directly; no descent happens here. Any selector
/// can serve as the predicate — shape tests like [`at`], kind tests like
/// [`as_map`](crate::as_map), or the leaf predicates in
/// [`predicate`](crate::predicate).
///
/// ```
/// use json_select::{at, filter, Selector};
/// use serde_json::json;
///
/// let short = json!([1, 2, 3]);
/// let long = json!([3, 4, 5, 6]);
/// let kept = filter(at(3)).select_from([&short, &long]);
/// assert_eq!(kept, vec![&long]);
/// ```
pub fn filter<P: Selector>(predicate: P) -> Filter<Root, P> {
    Filter {
        prev: Root,
        predicate,
    }
}

/// Shape predicate: does an array have an element at `index`?
///
/// `at(n)` matches exactly the arrays whose length is strictly greater than
/// `n`. It tests membership, it does not extract the element; out-of-range
/// is `false`, never an error.
pub fn at(index: usize) -> At {
    At { index }
}

/// Filtering link. See [`filter`].
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    prev: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn wrap(prev: S, predicate: P) -> Self {
        Filter { prev, predicate }
    }
}

impl<S: Selector, P: Selector> Selector for Filter<S, P> {
    fn matches(&self, value: &Value) -> bool {
        !self.select_from([value]).is_empty()
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        let mut picked = Vec::new();
        self.prev.select(roots, &mut picked);
        retain_matching(&self.predicate, &picked, out);
    }
}

/// Index-membership predicate. See [`at`].
#[derive(Debug, Clone, Copy)]
pub struct At {
    index: usize,
}

impl Selector for At {
    fn matches(&self, value: &Value) -> bool {
        value.as_array().map_or(false, |arr| arr.len() > self.index)
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        retain_matching(self, roots, out);
    }
}
