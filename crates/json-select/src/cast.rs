//! Type-asserting terminal links.
//!
//! Each terminal narrows the preceding selection to one dynamic kind and
//! casts the survivors to a concretely typed result list. Mismatching values
//! are silently dropped, never an error. The terminals also implement
//! [`Selector`], so they double as kind predicates inside
//! [`filter`](crate::filter).

use serde_json::{Map, Value};

use crate::selector::{retain_matching, Root, Selector};

/// Keep only numeric leaves, cast to `f64`.
///
/// Integer- and float-looking input are one numeric kind: `1` and `1.0`
/// both survive and both come out as `1.0`.
pub fn as_number() -> AsNumber<Root> {
    AsNumber { prev: Root }
}

/// Keep only string leaves.
pub fn as_string() -> AsString<Root> {
    AsString { prev: Root }
}

/// Keep only objects.
pub fn as_map() -> AsMap<Root> {
    AsMap { prev: Root }
}

/// Keep only arrays.
pub fn as_slice() -> AsSlice<Root> {
    AsSlice { prev: Root }
}

/// Numeric terminal link. See [`as_number`].
#[derive(Debug, Clone)]
pub struct AsNumber<S> {
    prev: S,
}

impl<S> AsNumber<S> {
    pub(crate) fn wrap(prev: S) -> Self {
        AsNumber { prev }
    }
}

impl<S: Selector> AsNumber<S> {
    /// Apply the chain and cast every selected number to `f64`, in
    /// traversal order, dropping everything else.
    pub fn select_from<'a, I>(&self, roots: I) -> Vec<f64>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let roots: Vec<&Value> = roots.into_iter().collect();
        let mut picked = Vec::new();
        self.prev.select(&roots, &mut picked);
        picked.into_iter().filter_map(Value::as_f64).collect()
    }
}

impl<S: Selector> Selector for AsNumber<S> {
    fn matches(&self, value: &Value) -> bool {
        value.is_number()
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        let mut picked = Vec::new();
        self.prev.select(roots, &mut picked);
        retain_matching(self, &picked, out);
    }
}

/// String terminal link. See [`as_string`].
#[derive(Debug, Clone)]
pub struct AsString<S> {
    prev: S,
}

impl<S> AsString<S> {
    pub(crate) fn wrap(prev: S) -> Self {
        AsString { prev }
    }
}

impl<S: Selector> AsString<S> {
    /// Apply the chain and borrow every selected string, in traversal
    /// order, dropping everything else.
    pub fn select_from<'a, I>(&self, roots: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let roots: Vec<&Value> = roots.into_iter().collect();
        let mut picked = Vec::new();
        self.prev.select(&roots, &mut picked);
        picked.into_iter().filter_map(Value::as_str).collect()
    }
}

impl<S: Selector> Selector for AsString<S> {
    fn matches(&self, value: &Value) -> bool {
        value.is_string()
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        let mut picked = Vec::new();
        self.prev.select(roots, &mut picked);
        retain_matching(self, &picked, out);
    }
}

/// Object terminal link. See [`as_map`].
#[derive(Debug, Clone)]
pub struct AsMap<S> {
    prev: S,
}

impl<S> AsMap<S> {
    pub(crate) fn wrap(prev: S) -> Self {
        AsMap { prev }
    }
}

impl<S: Selector> AsMap<S> {
    /// Apply the chain and borrow every selected object, in traversal
    /// order, dropping everything else.
    pub fn select_from<'a, I>(&self, roots: I) -> Vec<&'a Map<String, Value>>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let roots: Vec<&Value> = roots.into_iter().collect();
        let mut picked = Vec::new();
        self.prev.select(&roots, &mut picked);
        picked.into_iter().filter_map(Value::as_object).collect()
    }
}

impl<S: Selector> Selector for AsMap<S> {
    fn matches(&self, value: &Value) -> bool {
        value.is_object()
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        let mut picked = Vec::new();
        self.prev.select(roots, &mut picked);
        retain_matching(self, &picked, out);
    }
}

/// Array terminal link. See [`as_slice`].
#[derive(Debug, Clone)]
pub struct AsSlice<S> {
    prev: S,
}

impl<S> AsSlice<S> {
    pub(crate) fn wrap(prev: S) -> Self {
        AsSlice { prev }
    }
}

impl<S: Selector> AsSlice<S> {
    /// Apply the chain and borrow every selected array, in traversal
    /// order, dropping everything else.
    pub fn select_from<'a, I>(&self, roots: I) -> Vec<&'a Vec<Value>>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let roots: Vec<&Value> = roots.into_iter().collect();
        let mut picked = Vec::new();
        self.prev.select(&roots, &mut picked);
        picked.into_iter().filter_map(Value::as_array).collect()
    }
}

impl<S: Selector> Selector for AsSlice<S> {
    fn matches(&self, value: &Value) -> bool {
        value.is_array()
    }

    fn select<'a>(&self, roots: &[&'a Value], out: &mut Vec<&'a Value>) {
        let mut picked = Vec::new();
        self.prev.select(roots, &mut picked);
        retain_matching(self, &picked, out);
    }
}
