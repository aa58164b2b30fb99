use crate::designs::{common, contact};
use crate::models::page::Page;

/// Render the full page document from the page model.
/// A degraded page carries only the hero; dock, grids and form are left out.
pub fn render_page(page: &Page) -> String {
    let root_style = build_root_style(page);

    let hero_bg = if page.root_style.hero_img.is_empty() {
        String::new()
    } else {
        format!(
            " style=\"background-image:url('{}')\"",
            html_escape(&css_value(&page.root_style.hero_img).replace('\'', "%27"))
        )
    };

    let hero_html = format!(
        "<section id=\"hero-section\" class=\"hero\"{hero_bg}>\
         <h1 id=\"hero-h1\">{title}</h1>\
         <p id=\"hero-p\">{desc}</p>\
         <p id=\"scope-rule\" class=\"scope-rule\">{scope}</p>\
         </section>",
        hero_bg = hero_bg,
        title = html_escape(&page.hero.title),
        desc = html_escape(&page.hero.desc),
        scope = html_escape(&page.scope_rule),
    );

    let body_html = if page.degraded {
        hero_html
    } else {
        format!(
            "{dock}{hero}\
             <section id=\"services\"><h2>Core Services</h2>{core}</section>\
             <section id=\"packages\"><h2>Packages</h2>{packages}</section>\
             <section id=\"labs\"><h2>Labs</h2>{labs}</section>\
             {contact}\
             {script}",
            dock = common::build_theme_dock(&page.dock),
            hero = hero_html,
            core = common::build_grid(&page.core_grid),
            packages = common::build_grid(&page.package_grid),
            labs = common::build_grid(&page.lab_grid),
            contact = contact::render_body(&page.contact, &page.service_select, page.notice.as_ref()),
            script = common::card_select_script(),
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en" style="{root_style}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>BAG Digital</title>
    <link rel="stylesheet" href="/static/site.css">
    {page_css}
    {contact_css}
</head>
<body class="{body_class}">
    {body_html}
</body>
</html>"#,
        root_style = html_escape(&root_style),
        page_css = PAGE_CSS,
        contact_css = contact::css(),
        body_class = html_escape(&page.body_classes.join(" ")),
        body_html = body_html,
    )
}

fn build_root_style(page: &Page) -> String {
    let vars = [
        ("--accent", &page.root_style.accent),
        ("--font", &page.root_style.font),
        ("--radius", &page.root_style.radius),
    ];
    vars.iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}:{};", k, css_value(v)))
        .collect()
}

/// Strip characters that could close a declaration or the attribute.
fn css_value(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\\') && !c.is_control())
        .collect()
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const PAGE_CSS: &str = r#"<style>
:root { --accent:#3b82f6; --font:system-ui, sans-serif; --radius:8px; }
body { margin:0; font-family:var(--font); color:#111827; }
.theme-dock { display:flex; gap:8px; justify-content:center; padding:12px; }
.theme-dock form { margin:0; }
.theme-dock button { padding:6px 14px; border:1px solid var(--accent); background:transparent; border-radius:var(--radius); cursor:pointer; font-family:inherit; }
.theme-dock button.active { background:var(--accent); color:#fff; }
.hero { padding:120px 20px; text-align:center; background-size:cover; background-position:center; }
.scope-rule { font-size:.85em; opacity:.75; }
section > h2 { text-align:center; }
.card-grid { display:grid; grid-template-columns:repeat(auto-fill, minmax(260px, 1fr)); gap:20px; max-width:1100px; margin:0 auto; padding:20px; }
.card { border:1px solid rgba(128,128,128,.2); border-radius:var(--radius); padding:20px; display:flex; flex-direction:column; gap:8px; }
.card-img { width:100%; border-radius:var(--radius); }
.price-tag { font-weight:700; color:var(--accent); }
.badge-row { display:flex; gap:6px; flex-wrap:wrap; }
.badge { font-size:.75em; padding:2px 8px; border-radius:999px; background:var(--accent); color:#fff; }
.select-link, .select-fallback { margin-top:auto; color:var(--accent); font-weight:600; }
</style>"#;
