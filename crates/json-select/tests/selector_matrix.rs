use json_select::{all, at, children, field, filter, Selector};
use serde_json::{json, Value};

fn sample_doc() -> Value {
    json!({
        "key1": "value",
        "key2": 1,
        "key3": ["other value", 2],
        "key4": {"subkey": [3, "string"]}
    })
}

#[test]
fn all_numbers_matrix() {
    let doc = json!({
        "key1": 1,
        "key2": [2, 3, {"key3": 4}],
        "key4": {"key5": 5}
    });
    let numbers = all().as_number().select_from([&doc]);
    assert_eq!(numbers, vec![1., 2., 3., 4., 5.]);
}

#[test]
fn children_numbers_matrix() {
    let doc = json!({
        "key1": 1,
        "key2": [2, 3, {"key3": 4}],
        "key4": 5
    });
    let numbers = children().as_number().select_from([&doc]);
    assert_eq!(numbers, vec![1., 5.]);
}

#[test]
fn children_of_a_sequence_matrix() {
    let doc = json!([1.0, 2.0, "three", 4.0, 5.0, []]);
    let numbers = children().as_number().select_from([&doc]);
    assert_eq!(numbers, vec![1., 2., 4., 5.]);
}

#[test]
fn filter_at_matrix() {
    let candidates = vec![
        json!([1, 2, 3]),
        json!([3, 4, 5, 6]),
        json!({}),
        json!(5),
        json!("string"),
    ];
    let kept = filter(at(3)).select_from(&candidates);
    assert_eq!(kept, vec![&candidates[1]]);
}

#[test]
fn all_strings_matrix() {
    let doc = sample_doc();
    let strings = all().as_string().select_from([&doc]);
    assert_eq!(strings, vec!["value", "other value", "string"]);
}

#[test]
fn all_maps_matrix() {
    let doc = sample_doc();
    let maps = all().as_map().select_from([&doc]);
    assert_eq!(maps, vec![doc["key4"].as_object().unwrap()]);
}

#[test]
fn all_slices_matrix() {
    let doc = sample_doc();
    let slices = all().as_slice().select_from([&doc]);
    assert_eq!(
        slices,
        vec![
            doc["key3"].as_array().unwrap(),
            doc["key4"]["subkey"].as_array().unwrap(),
        ]
    );
}

#[test]
fn field_then_children_matrix() {
    let doc = sample_doc();
    let picked = field("key3").children().select_from([&doc]);
    assert_eq!(picked, vec![&doc["key3"][0], &doc["key3"][1]]);
}

#[test]
fn field_then_all_matrix() {
    let doc = sample_doc();
    let picked = field("key4").all().select_from([&doc]);
    assert_eq!(
        picked,
        vec![
            &doc["key4"]["subkey"],
            &doc["key4"]["subkey"][0],
            &doc["key4"]["subkey"][1],
        ]
    );
}

#[test]
fn field_narrowing_matrix() {
    let doc = sample_doc();
    assert_eq!(field("key2").select_from([&doc]), vec![&doc["key2"]]);
    assert!(field("missing").select_from([&doc]).is_empty());
    assert!(field("key1").select_from([&doc["key2"]]).is_empty());
    assert!(field("key1").select_from([&doc["key3"]]).is_empty());
}

#[test]
fn chained_field_matrix() {
    let doc = sample_doc();
    let picked = field("key4").field("subkey").select_from([&doc]);
    assert_eq!(picked, vec![&doc["key4"]["subkey"]]);

    let numbers = field("key4").field("subkey").children().as_number().select_from([&doc]);
    assert_eq!(numbers, vec![3.]);
}
