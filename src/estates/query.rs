use crate::domain::geo::{BoundsEvent, LatLng};
use crate::domain::sort::{SortColumn, SortOrder};
use crate::estates::ViewState;

/// Everything a dashboard request can ask for: viewport, search text,
/// sort order and page.
#[derive(Debug, Clone, PartialEq)]
pub struct EstateQuery {
    pub state: ViewState,
    pub order: SortOrder,
    pub page: usize,
}

impl Default for EstateQuery {
    fn default() -> Self {
        Self {
            state: ViewState::default(),
            order: SortOrder::default(),
            page: 1,
        }
    }
}

impl EstateQuery {
    /// Reads decoded `key=value` pairs. Empty values count as absent;
    /// unknown keys are ignored. The search text is kept verbatim, spaces
    /// included.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = EstateQuery::default();
        let (mut sw_lat, mut sw_lng, mut ne_lat, mut ne_lng) = (None, None, None, None);

        for (key, value) in pairs {
            let key = key.as_ref();
            if key == "search" {
                query.state.search = value.as_ref().to_string();
                continue;
            }

            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }

            match key {
                "sw_lat" => sw_lat = Some(parse_coord("sw_lat", value)?),
                "sw_lng" => sw_lng = Some(parse_coord("sw_lng", value)?),
                "ne_lat" => ne_lat = Some(parse_coord("ne_lat", value)?),
                "ne_lng" => ne_lng = Some(parse_coord("ne_lng", value)?),
                "sort_by" => query.order.column = value.parse::<SortColumn>()?,
                "sort_desc" => query.order.descending = parse_bool(value)?,
                "page" => {
                    query.page = value
                        .parse::<usize>()
                        .ok()
                        .filter(|p| *p >= 1)
                        .ok_or_else(|| format!("invalid page '{value}'"))?;
                }
                _ => {}
            }
        }

        let event = BoundsEvent {
            south_west: corner(sw_lat, sw_lng),
            north_east: corner(ne_lat, ne_lng),
        };
        query.state.bounds_updated(&event);

        Ok(query)
    }

    /// Query string for a table request with the given order and page.
    /// Filters travel separately as form fields.
    pub fn table_url(order: SortOrder, page: usize) -> String {
        format!(
            "/estates/table?sort_by={}&sort_desc={}&page={page}",
            order.column, order.descending
        )
    }
}

fn corner(lat: Option<f64>, lng: Option<f64>) -> Option<LatLng> {
    Some(LatLng::new(lat?, lng?))
}

fn parse_coord(name: &str, value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("invalid {name} '{value}'"))
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(format!("invalid sort_desc '{value}'")),
    }
}
