use crate::bootstrap::AppState;
use crate::errors::ServerError;
use crate::estates::view::read;
use crate::estates::EstateQuery;
use crate::responses::{html_response, json_response, ResultResp};
use crate::templates::components::{estate_table, marker_feed};
use crate::templates::pages::{dashboard_page, DashboardVm};
use astra::Request;
use serde_json::json;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    log::debug!("{method} {path}");

    match (method, path) {
        ("GET", "/") => {
            let query = parse_query(&req)?;
            let view = read(&state.view);

            html_response(dashboard_page(&DashboardVm {
                view: &view,
                query: &query,
                map: &state.map,
                icons: &state.icons,
            }))
        }

        // htmx partial for the table
        ("GET", "/estates/table") => {
            let query = parse_query(&req)?;
            let view = read(&state.view);

            html_response(estate_table(&view, &query))
        }

        ("GET", "/estates.json") => {
            let query = parse_query(&req)?;
            let view = read(&state.view);

            json_response(&marker_feed(&view, &query))
        }

        ("GET", "/health") => {
            let view = read(&state.view);

            json_response(&json!({
                "loading": view.is_loading(),
                "error": view.error(),
                "estates": view.estates().len(),
            }))
        }

        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> Result<EstateQuery, ServerError> {
    let raw = req.uri().query().unwrap_or("");
    EstateQuery::from_pairs(url::form_urlencoded::parse(raw.as_bytes()))
        .map_err(ServerError::BadRequest)
}
