use json_select::{all, children, Selector};
use serde_json::{json, Value};

fn nested_doc() -> Value {
    json!({
        "a": {"b": {"c": 1}},
        "d": [2, [3, 4]],
        "e": "leaf"
    })
}

#[test]
fn determinism_matrix() {
    let doc = nested_doc();
    let sel = all();
    let first = sel.select_from([&doc]);
    let second = sel.select_from([&doc]);
    assert_eq!(first, second);

    let chained = children().all().as_number();
    assert_eq!(chained.select_from([&doc]), chained.select_from([&doc]));
}

#[test]
fn children_subset_of_all_matrix() {
    let doc = nested_doc();
    let direct = children().select_from([&doc]);
    let every = all().select_from([&doc]);
    for child in &direct {
        assert!(every.contains(child), "missing direct child {child}");
    }
    assert!(every.len() >= direct.len());
}

#[test]
fn preorder_expansion_matrix() {
    let doc = nested_doc();
    let every = all().select_from([&doc]);
    assert_eq!(
        every,
        vec![
            &doc["a"],
            &doc["a"]["b"],
            &doc["a"]["b"]["c"],
            &doc["d"],
            &doc["d"][0],
            &doc["d"][1],
            &doc["d"][1][0],
            &doc["d"][1][1],
            &doc["e"],
        ]
    );
}

#[test]
fn multi_root_order_matrix() {
    let a = json!({"x": 1});
    let b = json!([2, 3]);
    let picked = children().select_from([&a, &b]);
    assert_eq!(picked, vec![&a["x"], &b[0], &b[1]]);

    let numbers = all().as_number().select_from([&b, &a]);
    assert_eq!(numbers, vec![2., 3., 1.]);
}

#[test]
fn empty_container_matrix() {
    let empty_map = json!({});
    let empty_arr = json!([]);
    assert!(children().select_from([&empty_map, &empty_arr]).is_empty());
    assert!(all().select_from([&empty_map, &empty_arr]).is_empty());
}

#[test]
fn scalar_root_matrix() {
    for scalar in [json!(1), json!("s"), json!(true), json!(null)] {
        assert!(children().select_from([&scalar]).is_empty());
        assert!(all().select_from([&scalar]).is_empty());
    }
}

#[test]
fn all_excludes_root_matrix() {
    let doc = json!({"a": 1});
    let every = all().select_from([&doc]);
    assert_eq!(every, vec![&doc["a"]]);

    // Nested descent still excludes the starting roots of each link.
    let doc = json!({"outer": {"inner": 1}});
    let picked = children().all().select_from([&doc]);
    assert_eq!(picked, vec![&doc["outer"]["inner"]]);
}

#[test]
fn no_roots_matrix() {
    let sel = all().as_number();
    let numbers = sel.select_from(std::iter::empty::<&Value>());
    assert!(numbers.is_empty());
}
