// src/tests/router_tests/estates_json_tests.rs

use crate::domain::color::COLOR_HIGH;
use crate::tests::utils::{estate, feed, get, mounted_state, FailingSource, JsonSource};
use serde_json::{json, Value};

fn get_json(uri: &str, state: &crate::bootstrap::AppState) -> Value {
    let (status, body) = get(state, uri);
    assert_eq!(status, 200, "{body}");
    serde_json::from_str(&body).unwrap()
}

#[test]
fn markers_follow_loaded_collection() {
    let state = mounted_state(JsonSource(feed(vec![estate(
        "Flat A", "Brno", 0.07, 16.6, 49.2,
    )])));

    let data = get_json("/estates.json", &state);
    assert_eq!(data["loading"], json!(false));
    assert_eq!(data["error"], Value::Null);
    assert_eq!(data["count"], json!(1));
    assert_eq!(data["info"]["date"], json!("2020-01-01"));

    let marker = &data["markers"][0];
    assert_eq!(marker["color"], json!(COLOR_HIGH));
    assert_eq!(marker["radius"], json!(2));
    assert_eq!(marker["lat_lng"], json!({ "lat": 49.2, "lng": 16.6 }));
    assert!(marker["popup"].as_str().unwrap().contains("Flat A</a>, 7%"));
}

#[test]
fn markers_respect_half_open_latitude() {
    let state = mounted_state(JsonSource(feed(vec![
        estate("On top edge", "X", 0.05, 5.0, 10.0),
        estate("Just inside", "X", 0.05, 5.0, 9.999),
        estate("Outside", "X", 0.05, 11.0, 5.0),
    ])));

    let data = get_json("/estates.json?sw_lat=0&sw_lng=0&ne_lat=10&ne_lng=10", &state);
    assert_eq!(data["count"], json!(1));
    assert!(data["markers"][0]["popup"]
        .as_str()
        .unwrap()
        .contains("Just inside"));
}

#[test]
fn markers_narrowed_by_search() {
    let state = mounted_state(JsonSource(feed(vec![
        estate("Flat A", "Brno", 0.05, 16.6, 49.2),
        estate("House", "Olomouc", 0.05, 17.2, 49.6),
        estate("Brno loft", "Blansko", 0.05, 16.6, 49.3),
    ])));

    let data = get_json("/estates.json?search=BRNO", &state);
    assert_eq!(data["count"], json!(2));

    let data = get_json("/estates.json?search=", &state);
    assert_eq!(data["count"], json!(3));
}

#[test]
fn whitespace_search_still_narrows() {
    let state = mounted_state(JsonSource(feed(vec![
        estate("Flat A", "Brno", 0.05, 16.6, 49.2),
        estate("House", "Olomouc", 0.05, 17.2, 49.6),
        estate("Flatmate", "Zlín", 0.05, 17.6, 49.2),
    ])));

    // Only "Flat A" has a space in its title or city.
    let data = get_json("/estates.json?search=%20", &state);
    assert_eq!(data["count"], json!(1));

    // A trailing space must not match "Flatmate".
    let data = get_json("/estates.json?search=flat%20", &state);
    assert_eq!(data["count"], json!(1));
    assert!(data["markers"][0]["popup"].as_str().unwrap().contains("Flat A"));
}

#[test]
fn failed_fetch_reports_error() {
    let state = mounted_state(FailingSource);

    let data = get_json("/estates.json", &state);
    assert_eq!(data["loading"], json!(false));
    assert_eq!(data["count"], json!(0));
    assert!(data["error"].as_str().unwrap().contains("Network Error"));
}

#[test]
fn null_text_fields_do_not_fail_the_feed() {
    let mut with_null_type = estate("Flat B", "Brno", 0.05, 16.6, 49.2);
    with_null_type["type"] = Value::Null;
    with_null_type["link"] = Value::Null;

    let state = mounted_state(JsonSource(feed(vec![
        estate("Flat A", "Brno", 0.05, 16.6, 49.2),
        with_null_type,
    ])));

    let data = get_json("/health", &state);
    assert_eq!(data, json!({ "loading": false, "error": null, "estates": 2 }));
}

#[test]
fn health_reports_view_state() {
    let state = mounted_state(JsonSource(feed(vec![
        estate("Flat A", "Brno", 0.05, 16.6, 49.2),
        estate("Flat B", "Brno", 0.05, 16.6, 49.2),
    ])));

    let data = get_json("/health", &state);
    assert_eq!(data, json!({ "loading": false, "error": null, "estates": 2 }));
}
