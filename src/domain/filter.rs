// src/domain/filter.rs

use crate::domain::geo::ViewportBounds;
use crate::estates::Estate;

/// Narrows a collection to what is inside the viewport and matches the search
/// text. Bounds are applied first, then the search narrows that result.
/// Passing the output back in with the same arguments returns it unchanged.
pub fn filter_estates<'a, I>(
    estates: I,
    bounds: Option<&ViewportBounds>,
    search: &str,
) -> Vec<&'a Estate>
where
    I: IntoIterator<Item = &'a Estate>,
{
    let needle = search.to_lowercase();

    estates
        .into_iter()
        .filter(|e| bounds.map_or(true, |b| b.contains(e.raw.longitude, e.raw.latitude)))
        .filter(|e| needle.is_empty() || matches_search(e, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn matches_search(estate: &Estate, needle: &str) -> bool {
    estate.title().to_lowercase().contains(needle)
        || estate.city_name().to_lowercase().contains(needle)
}
