use crate::bootstrap::{leaflet_css_url, leaflet_js_url, MarkerIcons};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_URL: &str = "https://unpkg.com/htmx.org@1.9.12";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #222; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.15); }
main.container { max-width: 1200px; margin: 0 auto; padding: 1rem; }
.card { margin-top: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,.2); border-radius: 4px; }
.card-title { display: flex; justify-content: flex-end; padding: 0.75rem 1rem; }
.card-title input { padding: 6px 8px; font-size: 16px; min-width: 16rem; }
.alert { margin: 1rem 0; padding: 0.75rem 1rem; border-radius: 4px; background: #fdecea; color: #b71c1c; }
.progress { height: 4px; background: linear-gradient(90deg, #2196f3 30%, #bbdefb 30%); }
table.estates { width: 100%; border-collapse: collapse; }
table.estates th, table.estates td { text-align: left; padding: 0.5rem 1rem; border-bottom: 1px solid #eee; font-size: 0.9rem; }
table.estates th button { border: none; background: none; font-weight: 600; cursor: pointer; padding: 0; }
.pagination { display: flex; justify-content: flex-end; gap: 1rem; align-items: center; padding: 0.5rem 1rem; font-size: 0.85rem; }
.muted { color: #777; }
"#;

/// Page shell. Loads Leaflet and htmx, points the default marker icons at the
/// CDN and mounts `content` under `#app`.
pub fn desktop_layout(title: &str, icons: &MarkerIcons, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="cs" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(leaflet_css_url());
                style { (PreEscaped(STYLE)) }
                script src=(leaflet_js_url()) {}
                script src=(HTMX_URL) {}
                script { (PreEscaped(icons.merge_options_script())) }
            }
            body {
                header {
                    h3 { (title) }
                }
                div id="app" {
                    (content)
                }
            }
        }
    }
}
