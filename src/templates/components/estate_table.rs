use crate::domain::sort::{paginate, sort_estates, SortColumn, SortOrder};
use crate::estates::{EstateQuery, EstateView};
use crate::templates::components::error_alert;
use crate::templates::filters::{from_now, to_currency, to_percentage};
use maud::{html, Markup};

/// Form fields (search box, bounds) every table request carries along.
const FILTER_FIELDS: &str = ".estate-filter-field";

fn header_label(column: SortColumn) -> &'static str {
    match column {
        SortColumn::NetYield => "Výnosnost",
        SortColumn::Title => "Popis",
        SortColumn::Type => "Typ",
        SortColumn::City => "Město",
        SortColumn::Price => "Cena",
        SortColumn::Timestamp => "Stáří",
    }
}

fn sort_arrow(order: SortOrder, column: SortColumn) -> &'static str {
    match (order.column == column, order.descending) {
        (false, _) => "",
        (true, true) => " ↓",
        (true, false) => " ↑",
    }
}

/// Table body swapped into `#estate-table`: sorted, paged rows of the
/// filtered estates plus the hidden sort state for the filter form.
pub fn estate_table(view: &EstateView, query: &EstateQuery) -> Markup {
    let mut rows = view.filtered_estates(&query.state);
    sort_estates(&mut rows, query.order);
    let page = paginate(rows, query.page);
    let order = query.order;

    html! {
        input type="hidden" form="estate-filter" name="sort_by" value=(order.column);
        input type="hidden" form="estate-filter" name="sort_desc" value=(order.descending);

        @if let Some(message) = view.error() {
            (error_alert(message))
        }

        @if view.is_loading() {
            div class="progress" {}
            div
                hx-get=(EstateQuery::table_url(order, page.number))
                hx-include=(FILTER_FIELDS)
                hx-target="#estate-table"
                hx-swap="innerHTML"
                hx-trigger="load delay:1s"
            {}
        }

        table class="estates" {
            thead {
                tr {
                    @for column in SortColumn::ALL {
                        th {
                            button
                                type="button"
                                hx-get=(EstateQuery::table_url(order.toggled(column), 1))
                                hx-include=(FILTER_FIELDS)
                                hx-target="#estate-table"
                                hx-swap="innerHTML"
                            {
                                (header_label(column)) (sort_arrow(order, column))
                            }
                        }
                    }
                }
            }
            tbody {
                @for estate in &page.items {
                    tr {
                        td { (to_percentage(estate.raw.net_yield, None)) }
                        td { a target="_blank" href=(estate.raw.link) { (estate.raw.title) } }
                        td { (estate.raw.estate_type) }
                        td { (estate.raw.city.name) }
                        td { (to_currency(&estate.raw.price)) }
                        td { (from_now(&estate.raw.timestamp)) }
                    }
                }
                @if page.items.is_empty() && !view.is_loading() {
                    tr {
                        td class="muted" colspan="6" { "No data available" }
                    }
                }
            }
        }

        div class="pagination" {
            span { (page.first_row()) "-" (page.last_row()) " of " (page.total) }
            button
                type="button"
                disabled[!page.has_prev()]
                hx-get=(EstateQuery::table_url(order, page.number.saturating_sub(1).max(1)))
                hx-include=(FILTER_FIELDS)
                hx-target="#estate-table"
                hx-swap="innerHTML"
            { "‹" }
            button
                type="button"
                disabled[!page.has_next()]
                hx-get=(EstateQuery::table_url(order, page.number + 1))
                hx-include=(FILTER_FIELDS)
                hx-target="#estate-table"
                hx-swap="innerHTML"
            { "›" }
        }
    }
}
