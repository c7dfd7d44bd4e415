// src/tests/router_tests/dashboard_tests.rs

use crate::tests::utils::{estate, feed, get, loading_state, mounted_state, FailingSource, JsonSource};

#[test]
fn dashboard_renders_loaded_estates() {
    let state = mounted_state(JsonSource(feed(vec![estate(
        "Flat A", "Brno", 0.07, 16.6, 49.2,
    )])));

    let (status, body) = get(&state, "/");
    assert_eq!(status, 200);

    // Mount point, map, icon defaults and search box
    assert!(body.contains(r#"<div id="app">"#));
    assert!(body.contains(r#"id="estate-map""#));
    assert!(body.contains("L.Icon.Default.mergeOptions("));
    assert!(body.contains(r#"id="search""#));

    // Row content
    assert!(body.contains("Flat A"));
    assert!(body.contains("<td>7%</td>"));
    assert!(body.contains("<td>Brno</td>"));
    assert!(body.contains("2\u{a0}500\u{a0}000\u{a0}Kč"));
    assert!(body.contains("Data from January 1, 2020 12:00 AM"));

    assert!(!body.contains(r#"class="alert""#));
    assert!(!body.contains(r#"class="progress""#));
}

#[test]
fn dashboard_shows_fetch_error() {
    let state = mounted_state(FailingSource);

    let (status, body) = get(&state, "/");
    assert_eq!(status, 200);
    assert!(body.contains(r#"class="alert""#));
    assert!(body.contains("Error while loading estates: Network Error: connection reset by peer."));
    assert!(body.contains("No data available"));
}

#[test]
fn dashboard_while_loading_polls_for_table() {
    let state = loading_state();

    let (status, body) = get(&state, "/");
    assert_eq!(status, 200);
    assert!(body.contains(r#"class="progress""#));
    assert!(body.contains(r#"hx-trigger="load delay:1s""#));
    assert!(!body.contains("No data available"));
}

#[test]
fn dashboard_keeps_search_and_bounds_in_form() {
    let state = mounted_state(JsonSource(feed(vec![])));

    let (status, body) = get(&state, "/?search=Brno&sw_lat=49&sw_lng=16&ne_lat=50&ne_lng=17");
    assert_eq!(status, 200);
    assert!(body.contains(r#"value="Brno""#));
    assert!(body.contains(r#"name="sw_lat" value="49""#));
    assert!(body.contains(r#"name="ne_lng" value="17""#));
}

#[test]
fn bad_query_is_rejected() {
    let state = mounted_state(JsonSource(feed(vec![])));

    let (status, body) = get(&state, "/?sort_by=colour");
    assert_eq!(status, 400);
    assert!(body.contains("unknown sort column"));
}

#[test]
fn unknown_route_is_not_found() {
    let state = mounted_state(JsonSource(feed(vec![])));

    let (status, _) = get(&state, "/admin");
    assert_eq!(status, 404);
}
