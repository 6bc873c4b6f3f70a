//! Traversal links: direct children and recursive descendants.

use serde_json::Value;

use crate::selector::{Root, Selector};

/// Select the direct children of every root.
///
/// Children of an object are its entry values in map iteration order
/// (insertion order with serde_json's `preserve_order` feature, sorted by
/// key otherwise); children of an array are its elements in index order;
/// scalars have no children. Either way the order is deterministic for an
/// unchanged value.
///
/// ```
/// use json_select::{children, Selector};
/// use serde_json::json;
///
/// let doc = json!({"a": 1, "b": [2, 3]});
/// let picked = children().select_from([&doc]);
/// assert_eq!(picked, vec![&json!(1), &json!([2, 3])]);
/// ```
pub fn children() -> Children<Root> {
    Children { prev: Root }
}

/// Select every descendant of every root, depth-first.
///
/// Each child is emitted in its [`children`] order, immediately followed by
/// that child's own full expansion, before the next sibling. The root itself
/// is not part of the selection, so every selected value is reachable from
/// the root by repeated child descent.
pub fn all() -> All<Root> {
    All { prev: Root }
}

/// Direct-child traversal link. See [`children`].
#[derive(Debug, Clone)]
pub struct Children<S> {
    prev: S,
}

impl<S> Children<S> {
    pub(crate) fn wrap(prev: S) -> Self {
        Children { prev }
    }
}

impl<S: Selector> Selector for Children<S> {
    fn matches(&self, value: &Value) -> bool {
        !self.select_from([value]).is_empty()
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        let mut picked = Vec::new();
        self.prev.select(roots, &mut picked);
        for value in picked {
            push_children(value, out);
        }
    }
}

/// Recursive-descent traversal link. See [`all`].
#[derive(Debug, Clone)]
pub struct All<S> {
    prev: S,
}

impl<S> All<S> {
    pub(crate) fn wrap(prev: S) -> Self {
        All { prev }
    }
}

impl<S: Selector> Selector for All<S> {
    fn matches(&self, value: &Value) -> bool {
        !self.select_from([value]).is_empty()
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        let mut picked = Vec::new();
        self.prev.select(roots, &mut picked);
        for value in picked {
            push_descendants(value, out);
        }
    }
}

fn push_children<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Object(map) => out.extend(map.values()),
        Value::Array(arr) => out.extend(arr.iter()),
        _ => {}
    }
}

// Pre-order: each child is emitted immediately before its own descendants.
fn push_descendants<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Object(map) => {
            for child in map.values() {
                out.push(child);
                push_descendants(child, out);
            }
        }
        Value::Array(arr) => {
            for child in arr {
                out.push(child);
                push_descendants(child, out);
            }
        }
        _ => {}
    }
}
