// HTML rendering of the dashboard layout

use std::fmt::Write;

use crate::ui::layout::{DashboardLayout, Dropdown, Panel, RadioGroup};

const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";
const DASHBOARD_JS: &str = include_str!("../../assets/dashboard.js");

const STYLE: &str = "\
body { background-color: #f0f8ff; min-height: 100vh; margin: 0; padding: 0; overflow-x: hidden; font-family: sans-serif; }
h1 { text-align: center; padding-top: 60px; }
.row { display: flex; justify-content: center; margin-top: 60px; }
.panel { flex: 1; margin: 20px; padding: 16px; border-radius: 6px; background: #d1e7dd; color: #0f5132; }
.panel select { margin-top: 20px; width: 100%; }
.week-switch { display: flex; justify-content: center; margin-top: 14px; font-size: 16px; white-space: nowrap; gap: 16px; }";

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_dropdown(out: &mut String, dropdown: &Dropdown) {
    let _ = writeln!(out, r#"<select id="{}">"#, escape_html(dropdown.id));
    for opt in &dropdown.options {
        let selected = if opt.value == dropdown.default { " selected" } else { "" };
        let _ = writeln!(
            out,
            r#"<option value="{}"{}>{}</option>"#,
            escape_html(&opt.value),
            selected,
            escape_html(&opt.label)
        );
    }
    out.push_str("</select>\n");
}

fn render_panel(out: &mut String, panel: &Panel) {
    out.push_str("<div class=\"panel\">\n");
    let _ = writeln!(out, "<h4>{}</h4>", escape_html(panel.heading));
    render_dropdown(out, &panel.dropdown);
    let _ = writeln!(out, r#"<div id="{}"></div>"#, escape_html(panel.chart_id));
    out.push_str("</div>\n");
}

fn render_radio(out: &mut String, group: &RadioGroup) {
    let _ = writeln!(
        out,
        r#"<div class="week-switch" id="{}-group">"#,
        escape_html(group.id)
    );
    for opt in &group.options {
        let checked = if opt.value == group.default { " checked" } else { "" };
        let _ = writeln!(
            out,
            r#"<label><input type="radio" name="{}" value="{}"{}> {}</label>"#,
            escape_html(group.id),
            escape_html(&opt.value),
            checked,
            escape_html(&opt.label)
        );
    }
    out.push_str("</div>\n");
}

/// Full page: layout markup plus the script that drives chart updates.
pub fn render_page(layout: &DashboardLayout) -> String {
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(layout.title));
    let _ = writeln!(out, "<style>\n{STYLE}\n</style>");
    let _ = writeln!(out, r#"<script src="{PLOTLY_SRC}"></script>"#);
    out.push_str("</head>\n<body>\n");

    let _ = writeln!(out, "<h1>{}</h1>", escape_html(layout.heading));

    out.push_str("<div class=\"row\">\n");
    for panel in &layout.panels {
        render_panel(&mut out, panel);
    }
    out.push_str("</div>\n");

    render_radio(&mut out, &layout.week_switch);

    // Control ids are plain identifiers, so the JSON needs no escaping inside <script>.
    let controls = serde_json::to_string(&layout.control_ids()).unwrap_or_else(|_| "[]".into());
    let _ = writeln!(
        out,
        r#"<script type="application/json" id="dashboard-controls">{controls}</script>"#
    );
    let _ = writeln!(out, "<script>\n{DASHBOARD_JS}</script>");

    out.push_str("</body>\n</html>\n");
    out
}
