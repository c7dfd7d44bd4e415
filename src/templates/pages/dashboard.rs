use crate::bootstrap::{MapConfig, MarkerIcons};
use crate::estates::{EstateQuery, EstateView};
use crate::templates::components::{estate_map, estate_table};
use crate::templates::desktop_layout;
use crate::templates::filters::long_date;
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub view: &'a EstateView,
    pub query: &'a EstateQuery,
    pub map: &'a MapConfig,
    pub icons: &'a MarkerIcons,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let bounds = vm.query.state.bounds;
    // Bounds go back out in the form's lat/lng field names.
    let sw_lat = bounds.map(|b| b.south_west.y.to_string());
    let sw_lng = bounds.map(|b| b.south_west.x.to_string());
    let ne_lat = bounds.map(|b| b.north_east.y.to_string());
    let ne_lng = bounds.map(|b| b.north_east.x.to_string());

    desktop_layout(
        "Estates",
        vm.icons,
        html! {
            main class="container" {
                @if let Some(date) = vm.view.info().and_then(|i| i.date.as_deref()) {
                    p class="muted" { "Data from " (long_date(date)) }
                }

                (estate_map(vm.map))

                section class="card" {
                    form
                        id="estate-filter"
                        class="card-title"
                        action="/"
                        method="get"
                        hx-get="/estates/table"
                        hx-target="#estate-table"
                        hx-swap="innerHTML"
                        hx-trigger="input from:#search, bounds"
                    {
                        input
                            type="search"
                            id="search"
                            name="search"
                            class="estate-filter-field"
                            placeholder="Search"
                            autocomplete="off"
                            value=(vm.query.state.search);
                        input type="hidden" class="estate-filter-field" name="sw_lat" value=[sw_lat];
                        input type="hidden" class="estate-filter-field" name="sw_lng" value=[sw_lng];
                        input type="hidden" class="estate-filter-field" name="ne_lat" value=[ne_lat];
                        input type="hidden" class="estate-filter-field" name="ne_lng" value=[ne_lng];
                    }

                    div id="estate-table" {
                        (estate_table(vm.view, vm.query))
                    }
                }
            }
        },
    )
}
