// src/tests/router_tests/table_tests.rs

use crate::tests::utils::{estate, feed, get, mounted_state, JsonSource};

fn position(body: &str, needle: &str) -> usize {
    body.find(needle)
        .unwrap_or_else(|| panic!("{needle} not in body"))
}

#[test]
fn table_defaults_to_highest_yield_first() {
    let state = mounted_state(JsonSource(feed(vec![
        estate("Low yield", "Brno", 0.03, 16.6, 49.2),
        estate("High yield", "Brno", 0.09, 16.6, 49.2),
        estate("Mid yield", "Brno", 0.05, 16.6, 49.2),
    ])));

    let (status, body) = get(&state, "/estates/table");
    assert_eq!(status, 200);
    assert!(position(&body, "High yield") < position(&body, "Mid yield"));
    assert!(position(&body, "Mid yield") < position(&body, "Low yield"));

    // Sort state rides along with the filter form
    assert!(body.contains(r#"form="estate-filter" name="sort_by" value="net_yield""#));
    assert!(body.contains(r#"name="sort_desc" value="true""#));
}

#[test]
fn table_sorts_by_requested_column() {
    let state = mounted_state(JsonSource(feed(vec![
        estate("Bravo", "Zlín", 0.03, 16.6, 49.2),
        estate("alpha", "Brno", 0.09, 16.6, 49.2),
    ])));

    let (_, body) = get(&state, "/estates/table?sort_by=title&sort_desc=false");
    assert!(position(&body, "alpha") < position(&body, "Bravo"));

    let (_, body) = get(&state, "/estates/table?sort_by=city.name&sort_desc=true");
    assert!(position(&body, "Bravo") < position(&body, "alpha"));
}

#[test]
fn table_pages_ten_rows() {
    let estates = (1..=12)
        .map(|i| estate(&format!("Estate {i:02}"), "Brno", f64::from(i) / 100.0, 16.6, 49.2))
        .collect();
    let state = mounted_state(JsonSource(feed(estates)));

    let (_, body) = get(&state, "/estates/table");
    assert_eq!(body.matches("<tr><td>").count(), 10);
    assert!(body.contains("1-10 of 12"));

    let (_, body) = get(&state, "/estates/table?page=2");
    assert_eq!(body.matches("<tr><td>").count(), 2);
    assert!(body.contains("11-12 of 12"));
    // Ascending yield on page two of a descending sort: the two lowest
    assert!(body.contains("Estate 01"));
    assert!(body.contains("Estate 02"));
}

#[test]
fn table_applies_bounds_and_search() {
    let state = mounted_state(JsonSource(feed(vec![
        estate("Centre flat", "Brno", 0.05, 16.6, 49.2),
        estate("Far house", "Ostrava", 0.05, 18.3, 49.8),
        estate("Centre garage", "Brno", 0.05, 16.61, 49.19),
    ])));

    let (_, body) = get(
        &state,
        "/estates/table?sw_lat=49&sw_lng=16&ne_lat=50&ne_lng=17&search=flat",
    );
    assert!(body.contains("Centre flat"));
    assert!(!body.contains("Far house"));
    assert!(!body.contains("Centre garage"));
    assert!(body.contains("1-1 of 1"));
}
