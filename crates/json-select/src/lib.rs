//! Composable selectors for querying schema-less JSON trees.
//!
//! A selector is a small immutable query built by chaining primitive links:
//! descend to direct children, descend recursively, pick a named field,
//! filter through a predicate, or narrow to a concrete leaf type. Building a
//! chain performs no traversal; applying it with `select_from` walks one or
//! more root values depth-first and returns every match in traversal order.
//!
//! Selection never fails: an absent field, a type mismatch, an out-of-range
//! index, or descending into a scalar simply contributes nothing to the
//! result.
//!
//! # Example
//!
//! ```
//! use json_select::{all, Selector};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "key1": 1,
//!     "key2": [2, 3, {"key3": 4}],
//!     "key4": {"key5": 5}
//! });
//!
//! // Every numeric leaf below the root, in traversal order.
//! let numbers = all().as_number().select_from([&doc]);
//! assert_eq!(numbers, vec![1., 2., 3., 4., 5.]);
//! ```

mod selector;
pub use selector::{Root, Selector};

mod traverse;
pub use traverse::{all, children, All, Children};

mod field;
pub use field::{field, Field};

mod filter;
pub use filter::{at, filter, At, Filter};

mod cast;
pub use cast::{as_map, as_number, as_slice, as_string, AsMap, AsNumber, AsSlice, AsString};

pub mod predicate;
