//! Named-field selection.

use serde_json::Value;

use crate::selector::{Root, Selector};

/// Descend into the value under `name` in every object root.
///
/// Roots that are not objects, or that lack the key, contribute nothing.
/// Chained links treat the selected field values as their new root set.
///
/// ```
/// use json_select::{field, Selector};
/// use serde_json::json;
///
/// let doc = json!({"spec": {"replicas": 3}});
/// let picked = field("spec").field("replicas").select_from([&doc]);
/// assert_eq!(picked, vec![&json!(3)]);
/// ```
pub fn field(name: impl Into<String>) -> Field<Root> {
    Field {
        prev: Root,
        name: name.into(),
    }
}

/// Field-selection link. See [`field`].
#[derive(Debug, Clone)]
pub struct Field<S> {
    prev: S,
    name: String,
}

impl<S> Field<S> {
    pub(crate) fn wrap(prev: S, name: String) -> Self {
        Field { prev, name }
    }
}

impl<S: Selector> Selector for Field<S> {
    fn matches(&self, value: &Value) -> bool {
        value.get(self.name.as_str()).is_some()
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        let mut picked = Vec::new();
        self.prev.select(roots, &mut picked);
        for value in picked {
            if let Some(child) = value.get(self.name.as_str()) {
                out.push(child);
            }
        }
    }
}
