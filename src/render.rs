use pulldown_cmark::{Options, Parser};
use serde::Deserialize;

use crate::classifier::classify;
use crate::content::ContentStore;
use crate::filter::{CategoryFilter, StatusFilter, filter_books, filter_scripts};
use crate::formats::{Book, BookStatus, PointList, Stat};
use crate::forms::{Acknowledgement, FieldSpec, FormId, IntelKind, Widget};
use crate::router::View;

/// Per-render selections: sub-tabs, filters and the search box.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewParams {
    pub view: Option<String>,
    pub tab: Option<String>,
    pub chapters: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub q: Option<String>,
    pub intel_type: Option<String>,
}

/// Outcome of a form submission, shown next to the form that sent it.
#[derive(Debug, Clone)]
pub enum Notice {
    Acknowledged(Acknowledgement),
    Rejected { form: FormId, error: String },
}

impl Notice {
    fn form(&self) -> FormId {
        match self {
            Notice::Acknowledged(ack) => ack.form,
            Notice::Rejected { form, .. } => *form,
        }
    }
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; display: flex; color: #222; }
nav { width: 16rem; min-height: 100vh; background: #f0f2f6; padding: 1.5rem; box-sizing: border-box; }
main { flex: 1; padding: 2rem 3rem; max-width: 60rem; }
.main-header { font-size: 3rem; font-weight: bold; color: #1f77b4; text-align: center; }
.hero { background: linear-gradient(135deg, #c0392b 0%, #8b1e1e 100%); color: white; padding: 3rem 2rem; border-radius: 10px; text-align: center; margin-bottom: 2rem; }
.columns { display: flex; gap: 2rem; }
.columns > div { flex: 1; }
.warning-box { background: #fff3cd; border: 1px solid #ffeaa7; border-radius: 5px; padding: 1rem; margin: 1rem 0; }
.alert-box { background: #f8d7da; border: 1px solid #f5c6cb; border-radius: 5px; padding: 1rem; margin: 1rem 0; }
.success-box { background: #d4edda; border: 1px solid #c3e6cb; border-radius: 5px; padding: 1rem; margin: 1rem 0; }
.card { border: 1px solid #ddd; border-radius: 10px; padding: 1.5rem; margin: 1rem 0; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
.badge { color: white; padding: 0.25rem 0.75rem; border-radius: 15px; font-size: 0.8rem; font-weight: bold; }
.badge.exposed { background: #e74c3c; }
.badge.coming-soon { background: #95a5a6; }
.tactics { background: #ffe6e6; border-left: 4px solid #c0392b; padding: 1rem; border-radius: 5px; }
.quote { background: #f8f9fa; border-left: 4px solid #34495e; padding: 1rem; font-style: italic; border-radius: 5px; }
.script { background: #f8f9fa; border-left: 4px solid #c0392b; padding: 1rem; margin: 0.5rem 0; border-radius: 5px; }
.tabs a { margin-right: 1rem; }
.tabs a.active { font-weight: bold; text-decoration: none; border-bottom: 2px solid #c0392b; }
.metrics { display: flex; gap: 2rem; }
.metric-value { font-size: 2rem; }
.metric-delta { color: #09ab3b; }
.footer { text-align: center; color: #666; font-size: 0.9rem; margin-top: 2rem; }
form.intake label { display: block; margin-top: 0.75rem; }
"#;

pub fn page(
    store: &ContentStore,
    view: View,
    params: &ViewParams,
    notice: Option<&Notice>,
) -> String {
    let site = &store.editorial().site;

    let mut out = String::new();
    out.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!(
        "<title>{} | {}</title>\n",
        escape(&site.title),
        escape(view.label())
    ));
    out.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    out.push_str(&sidebar(view));
    out.push_str("<main>\n");
    out.push_str(&format!(
        "<h1 class=\"main-header\">🎯 {}</h1>\n",
        escape(&site.title)
    ));
    out.push_str(&markdown(&site.tagline));

    let body = match view {
        View::Overview => overview(store),
        View::CustomerCenteredSelling => expose(store, params),
        View::BookPipeline => pipeline(store, params, notice),
        View::ScriptDatabase => script_database(store, params, notice),
        View::SubmitIntel => submit_intel(store, params, notice),
        View::TrainingTechniques => techniques(store, params),
    };
    out.push_str(&body);
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn sidebar(current: View) -> String {
    let mut out = String::new();
    out.push_str("<nav>\n<h2>Navigation</h2>\n");
    out.push_str("<form method=\"get\" action=\"/\">\n");
    out.push_str("<label for=\"view\">Choose a section:</label>\n");
    out.push_str("<select id=\"view\" name=\"view\" onchange=\"this.form.submit()\">\n");
    for view in View::ALL {
        out.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            view.slug(),
            selected(view == current),
            escape(view.label())
        ));
    }
    out.push_str("</select>\n<noscript><button type=\"submit\">Go</button></noscript>\n");
    out.push_str("</form>\n</nav>\n");
    out
}

fn overview(store: &ContentStore) -> String {
    let copy = &store.editorial().overview;
    let mut out = String::new();

    out.push_str(&format!(
        "<div class=\"hero\"><h1>🎯 {}</h1><h2>{}</h2><p><em>\"{}\"</em></p></div>\n",
        escape(&store.editorial().site.title),
        escape(&copy.hero_subtitle),
        escape(&copy.motto)
    ));

    out.push_str("<div class=\"columns\">\n<div>\n");
    out.push_str(&format!(
        "<div class=\"warning-box\"><h3>{}</h3></div>\n",
        escape(&copy.library_heading)
    ));
    out.push_str(&markdown(&copy.library_intro));
    out.push_str(&markdown_list(&copy.training_facts));
    out.push_str("</div>\n<div>\n");
    out.push_str(&format!(
        "<div class=\"success-box\"><h3>{}</h3></div>\n<ul>\n",
        escape(&copy.advantage_heading)
    ));
    for feature in &copy.features {
        out.push_str(&format!(
            "<li><strong>{}</strong> - {}</li>\n",
            escape(&feature.title),
            escape(&feature.description)
        ));
    }
    out.push_str("</ul>\n</div>\n</div>\n");

    out.push_str("<h3>🚀 Start Your Intelligence Briefing</h3>\n<div class=\"columns\">\n");
    for action in &copy.quick_actions {
        out.push_str(&format!(
            "<form method=\"post\" action=\"/navigate\"><input type=\"hidden\" name=\"target\" value=\"{}\"><button type=\"submit\">{}</button></form>\n",
            escape(&action.target),
            escape(&action.label)
        ));
    }
    out.push_str("</div>\n<hr>\n<h3>📊 Intelligence Database Stats</h3>\n");
    out.push_str(&metrics(&copy.stats));

    out.push_str("<h3>🚨 Latest Intelligence</h3>\n");
    if let Ok(book) = store.get_book(&copy.featured_book) {
        out.push_str(&book_card(book, "Key Tactics Exposed:"));
    }

    out.push_str("<div class=\"footer\">\n");
    for line in &copy.footer {
        out.push_str(&markdown(line));
    }
    out.push_str("</div>\n");
    out
}

fn expose(store: &ContentStore, params: &ViewParams) -> String {
    let copy = &store.editorial().expose;
    let Ok(book) = store.get_book(&copy.book_id) else {
        return String::new();
    };
    let slug = View::CustomerCenteredSelling.slug();
    let mut out = String::new();

    out.push_str(&badge(book.status));
    out.push_str(&format!(
        "<h1>{}</h1>\n<h3>by {}</h3>\n",
        escape(&book.title),
        escape(&book.author)
    ));
    if let Some(quote) = &book.insider_quote {
        out.push_str(&format!(
            "<div class=\"quote\">\"{}\"<br><strong>— {}</strong></div>\n",
            escape(quote),
            escape(&copy.quote_attribution)
        ));
    }
    out.push_str("<h3>What This Book Really Teaches</h3>\n");
    out.push_str(&markdown(&copy.intro));

    out.push_str("<h3>🎭 Key Manipulation Tactics</h3>\n");
    let tabs: Vec<_> = copy
        .tactic_tabs
        .iter()
        .map(|t| (t.key.as_str(), t.label.as_str()))
        .collect();
    let active = active_tab(&tabs, params.tab.as_deref());
    out.push_str(&tab_bar(slug, "tab", &tabs, active));
    if let Some(tab) = copy.tactic_tabs.iter().find(|t| t.key == active) {
        out.push_str(&markdown(&format!("**What they teach:** {}", tab.teach)));
        out.push_str(&markdown(&format!("**The reality:** {}", tab.reality)));
        out.push_str("<div class=\"warning-box\">\n<p><strong>Script examples from training:</strong></p>\n<ul>\n");
        for script in store.get_scripts(tab.category) {
            out.push_str(&format!("<li>\"{}\"</li>\n", escape(script)));
        }
        out.push_str("</ul>\n</div>\n");
        out.push_str(&markdown(&format!("**Your defense:** {}", tab.defense)));
    }

    out.push_str("<h3>📖 Chapter-by-Chapter Intelligence</h3>\n");
    let chapter_tabs: Vec<_> = copy
        .chapter_tabs
        .iter()
        .map(|t| (t.key.as_str(), t.label.as_str()))
        .collect();
    let active = active_tab(&chapter_tabs, params.chapters.as_deref());
    out.push_str(&tab_bar(slug, "chapters", &chapter_tabs, active));
    if let Some(tab) = copy.chapter_tabs.iter().find(|t| t.key == active) {
        out.push_str(&markdown(&tab.body));
        if let Some(progress) = tab.progress {
            out.push_str(&format!(
                "<progress value=\"{progress}\" max=\"100\"></progress>\n<p>Progress: {progress}% complete</p>\n"
            ));
        }
    }

    out.push_str("<h3>🛡️ Your Counter-Intelligence</h3>\n<div class=\"columns\">\n");
    for list in &copy.counter_intelligence {
        out.push_str(&format!("<div>{}</div>\n", point_list(list)));
    }
    out.push_str("</div>\n");
    out.push_str(&format!(
        "<div class=\"success-box\">{}</div>\n",
        markdown(&copy.remember)
    ));
    out
}

fn pipeline(store: &ContentStore, params: &ViewParams, notice: Option<&Notice>) -> String {
    let copy = &store.editorial().pipeline;
    let status = params
        .status
        .as_deref()
        .and_then(|raw| raw.parse::<StatusFilter>().ok())
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str(&format!("<h2>{}</h2>\n", escape(&copy.heading)));
    out.push_str(&markdown(&copy.intro));

    out.push_str(&format!(
        "<form method=\"get\" action=\"/\">\n<input type=\"hidden\" name=\"view\" value=\"{}\">\n<label for=\"status\">Filter by status:</label>\n<select id=\"status\" name=\"status\" onchange=\"this.form.submit()\">\n",
        View::BookPipeline.slug()
    ));
    for (label, option) in StatusFilter::options() {
        out.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>\n",
            escape(&label),
            selected(option == status)
        ));
    }
    out.push_str("</select>\n<noscript><button type=\"submit\">Filter</button></noscript>\n</form>\n");

    for book in filter_books(store, status) {
        out.push_str(&book_card(book, "🚨 Tactics We'll Expose:"));
    }

    out.push_str("<hr>\n");
    out.push_str(&form(FormId::SuggestBook, notice));
    out
}

fn script_database(store: &ContentStore, params: &ViewParams, notice: Option<&Notice>) -> String {
    let copy = &store.editorial().scripts;
    let query = params.q.as_deref().unwrap_or("");
    let category = params
        .category
        .as_deref()
        .and_then(|raw| raw.parse::<CategoryFilter>().ok())
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str(&format!("<h2>{}</h2>\n", escape(&copy.heading)));
    out.push_str(&markdown(&copy.intro));

    out.push_str(&format!(
        "<form method=\"get\" action=\"/\">\n<input type=\"hidden\" name=\"view\" value=\"{}\">\n<label for=\"q\">Search scripts:</label>\n<input id=\"q\" name=\"q\" type=\"text\" placeholder=\"Enter a phrase or topic...\" value=\"{}\">\n<label for=\"category\">Category:</label>\n<select id=\"category\" name=\"category\">\n",
        View::ScriptDatabase.slug(),
        escape(query)
    ));
    for (label, option) in CategoryFilter::options() {
        out.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>\n",
            escape(&label),
            selected(option == category)
        ));
    }
    out.push_str("</select>\n<button type=\"submit\">Search</button>\n</form>\n");

    let open = if query.is_empty() { "" } else { " open" };
    for group in filter_scripts(store, category, Some(query)) {
        out.push_str(&format!(
            "<details{open}>\n<summary>🎭 {} Scripts</summary>\n",
            escape(&group.title)
        ));
        for script in &group.scripts {
            out.push_str(&script_card(script));
        }
        out.push_str("</details>\n");
    }

    out.push_str("<hr>\n");
    out.push_str(&form(FormId::SubmitScript, notice));
    out
}

fn submit_intel(store: &ContentStore, params: &ViewParams, notice: Option<&Notice>) -> String {
    let copy = &store.editorial().intel;
    // After a submission, keep showing the form that was sent.
    let kind = match notice.map(Notice::form) {
        Some(FormId::BookIntel) => IntelKind::TrainingMaterial,
        Some(FormId::ScriptIntel) => IntelKind::ActualScript,
        _ => IntelKind::from_label(params.intel_type.as_deref()),
    };

    let mut out = String::new();
    out.push_str(&format!("<h2>{}</h2>\n", escape(&copy.heading)));
    out.push_str(&markdown(&copy.intro));

    out.push_str(&format!(
        "<form method=\"get\" action=\"/\">\n<input type=\"hidden\" name=\"view\" value=\"{}\">\n<label for=\"intel_type\">What type of intelligence are you submitting?</label>\n<select id=\"intel_type\" name=\"intel_type\" onchange=\"this.form.submit()\">\n",
        View::SubmitIntel.slug()
    ));
    for option in IntelKind::ALL {
        out.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>\n",
            escape(option.label()),
            selected(option == kind)
        ));
    }
    out.push_str("</select>\n<noscript><button type=\"submit\">Choose</button></noscript>\n</form>\n");

    if let Some(form_id) = kind.form() {
        out.push_str(&form(form_id, notice));
    }

    out.push_str("<hr>\n<h3>📊 Intelligence Database Growth</h3>\n");
    out.push_str(&metrics(&copy.stats));
    out.push_str(&format!(
        "<div class=\"success-box\">{}</div>\n",
        point_list(&copy.matters)
    ));
    out
}

fn techniques(store: &ContentStore, params: &ViewParams) -> String {
    let copy = &store.editorial().techniques;
    let mut out = String::new();
    out.push_str(&format!("<h2>{}</h2>\n", escape(&copy.heading)));
    out.push_str(&markdown(&copy.intro));

    let tabs: Vec<_> = copy
        .tabs
        .iter()
        .map(|t| (t.key.as_str(), t.label.as_str()))
        .collect();
    let active = active_tab(&tabs, params.tab.as_deref());
    out.push_str(&tab_bar(View::TrainingTechniques.slug(), "tab", &tabs, active));

    // Tab position decides the panel; keys only have to be unique.
    match tabs.iter().position(|(key, _)| *key == active) {
        Some(0) => {
            out.push_str("<h3>The 5-Stage Influence Framework</h3>\n");
            out.push_str(&markdown(&copy.framework_intro));
            for stage in &copy.stages {
                out.push_str(&format!(
                    "<details>\n<summary><strong>Stage {}: {}</strong></summary>\n",
                    escape(&stage.stage),
                    escape(&stage.title)
                ));
                out.push_str(&markdown(&format!(
                    "**What they're doing:** {}",
                    stage.description
                )));
                out.push_str("<p><strong>Tactics:</strong></p>\n");
                out.push_str(&markdown_list(&stage.tactics));
                out.push_str("<p><strong>Red flags to watch for:</strong></p>\n");
                out.push_str(&markdown_list(&stage.red_flags));
                out.push_str("</details>\n");
            }
        }
        Some(1) => {
            out.push_str("<h3>Psychological Manipulation Techniques</h3>\n");
            for technique in &copy.psychological {
                out.push_str(&format!(
                    "<details>\n<summary><strong>{}</strong></summary>\n",
                    escape(&technique.name)
                ));
                out.push_str(&markdown(&format!(
                    "**What it is:** {}",
                    technique.description
                )));
                out.push_str("<p><strong>Examples:</strong></p>\n");
                out.push_str(&markdown_list(&technique.examples));
                out.push_str(&format!(
                    "<div class=\"success-box\"><strong>Your defense:</strong> {}</div>\n",
                    escape(&technique.defense)
                ));
                out.push_str("</details>\n");
            }
        }
        Some(2) => {
            out.push_str("<h3>🚩 Warning Signs of Manipulation</h3>\n");
            for list in &copy.warning_signs {
                out.push_str(&format!("<p><strong>{}:</strong></p>\n", escape(&list.heading)));
                for warning in &list.points {
                    out.push_str(&format!("<p>🚩 {}</p>\n", escape(warning)));
                }
            }
        }
        _ => {
            out.push_str("<h3>🛡️ Your Defense Strategies</h3>\n<div class=\"columns\">\n");
            let half = copy.defense.len().div_ceil(2);
            for column in copy.defense.chunks(half.max(1)) {
                out.push_str("<div>\n");
                for list in column {
                    out.push_str(&point_list(list));
                }
                out.push_str("</div>\n");
            }
            out.push_str("</div>\n");
        }
    }

    out.push_str(&format!(
        "<div class=\"alert-box\">{}</div>\n",
        point_list(&copy.remember)
    ));
    out
}

fn form(form_id: FormId, notice: Option<&Notice>) -> String {
    let mut out = String::new();
    out.push_str(&format!("<h3>{}</h3>\n", escape(form_id.title())));
    out.push_str(&format!(
        "<form class=\"intake\" method=\"post\" action=\"/forms/{}\">\n",
        form_id.id()
    ));
    for spec in form_id.fields() {
        out.push_str(&field(spec));
    }
    out.push_str(&format!(
        "<p><button type=\"submit\">{}</button></p>\n</form>\n",
        escape(form_id.submit_label())
    ));

    match notice {
        Some(Notice::Acknowledged(ack)) if ack.form == form_id => {
            out.push_str(&format!(
                "<div class=\"success-box\" role=\"status\">{}</div>\n",
                escape(ack.message)
            ));
        }
        Some(Notice::Rejected { form, error }) if *form == form_id => {
            out.push_str(&format!(
                "<div class=\"alert-box\" role=\"alert\">{}</div>\n",
                escape(error)
            ));
        }
        _ => {}
    }
    out
}

fn field(spec: &FieldSpec) -> String {
    let id = spec.name;
    let label = format!("<label for=\"{id}\">{}</label>\n", escape(spec.label));
    let input = match spec.widget {
        Widget::Text => format!("<input id=\"{id}\" name=\"{id}\" type=\"text\">\n"),
        Widget::TextArea => format!("<textarea id=\"{id}\" name=\"{id}\" rows=\"4\"></textarea>\n"),
        Widget::Choice(options) => {
            let mut select = format!("<select id=\"{id}\" name=\"{id}\">\n");
            for option in options {
                select.push_str(&format!("<option>{}</option>\n", escape(option)));
            }
            select.push_str("</select>\n");
            select
        }
        Widget::Number { min, max, default } => format!(
            "<input id=\"{id}\" name=\"{id}\" type=\"number\" min=\"{min}\" max=\"{max}\" value=\"{default}\">\n"
        ),
    };
    label + &input
}

fn book_card(book: &Book, tactics_heading: &str) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"card\">\n");
    out.push_str(&badge(book.status));
    out.push_str(&format!(
        "<h3>{}</h3>\n<p><strong>Author:</strong> {}</p>\n<p>{}</p>\n",
        escape(&book.title),
        escape(&book.author),
        escape(&book.description)
    ));
    out.push_str(&format!(
        "<div class=\"tactics\">\n<h4>{}</h4>\n<ul>\n",
        escape(tactics_heading)
    ));
    for tactic in &book.tactics {
        out.push_str(&format!("<li>{}</li>\n", escape(tactic)));
    }
    out.push_str("</ul>\n</div>\n</div>\n");
    out
}

fn badge(status: BookStatus) -> String {
    let class = match status {
        BookStatus::Exposed => "exposed",
        BookStatus::ComingSoon => "coming-soon",
    };
    format!("<span class=\"badge {class}\">{}</span>\n", status.label())
}

fn metrics(stats: &[Stat]) -> String {
    let mut out = String::from("<div class=\"metrics\">\n");
    for stat in stats {
        out.push_str(&format!(
            "<div class=\"metric\"><div class=\"metric-label\">{}</div><div class=\"metric-value\">{}</div><div class=\"metric-delta\">{}</div></div>\n",
            escape(&stat.label),
            escape(&stat.value),
            escape(&stat.delta)
        ));
    }
    out.push_str("</div>\n");
    out
}

fn point_list(list: &PointList) -> String {
    let mut out = markdown(&list.heading);
    out.push_str(&markdown_list(&list.points));
    out
}

fn tab_bar(view_slug: &str, param: &str, tabs: &[(&str, &str)], active: &str) -> String {
    let mut out = String::from("<div class=\"tabs\">\n");
    for (key, label) in tabs {
        let class = if *key == active { " class=\"active\"" } else { "" };
        out.push_str(&format!(
            "<a href=\"/?view={view_slug}&amp;{param}={}\"{class}>{}</a>\n",
            escape(key),
            escape(label)
        ));
    }
    out.push_str("</div>\n");
    out
}

/// The requested tab when it exists, otherwise the first one.
fn active_tab<'a>(tabs: &[(&'a str, &str)], requested: Option<&str>) -> &'a str {
    tabs.iter()
        .map(|(key, _)| *key)
        .find(|key| Some(*key) == requested)
        .or_else(|| tabs.first().map(|(key, _)| *key))
        .unwrap_or_default()
}

fn selected(yes: bool) -> &'static str {
    if yes { " selected" } else { "" }
}

fn markdown(md: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(md, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

fn markdown_list(items: &[String]) -> String {
    let md = items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n");
    markdown(&md)
}

pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Purpose and counter-script for a single phrase. The counter is quoted as
/// something to say out loud.
fn script_card(script: &str) -> String {
    let classification = classify(script);
    format!(
        "<div class=\"script\"><strong>Script:</strong> \"{}\"<br><strong>Purpose:</strong> {}<br><strong>Your Response:</strong> \"{}\"</div>\n",
        escape(script),
        escape(classification.purpose),
        escape(classification.counter)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        ContentStore::embedded().expect("embedded content parses")
    }

    #[test]
    fn every_view_renders_with_selected_sidebar_entry() {
        let store = store();
        for view in View::ALL {
            let html = page(&store, view, &ViewParams::default(), None);
            assert!(html.starts_with("<!doctype html>"));
            assert!(html.contains(&format!(
                "<option value=\"{}\" selected>",
                view.slug()
            )));
        }
    }

    #[test]
    fn escape_handles_markup() {
        assert_eq!(
            escape("<b>\"it's\" & more</b>"),
            "&lt;b&gt;&quot;it&#39;s&quot; &amp; more&lt;/b&gt;"
        );
    }

    #[test]
    fn search_query_is_escaped_when_echoed() {
        let store = store();
        let params = ViewParams {
            q: Some("<script>".to_owned()),
            ..ViewParams::default()
        };
        let html = page(&store, View::ScriptDatabase, &params, None);
        assert!(html.contains("value=\"&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn search_keeps_every_category_header() {
        let store = store();
        let params = ViewParams {
            q: Some("think".to_owned()),
            ..ViewParams::default()
        };
        let html = page(&store, View::ScriptDatabase, &params, None);
        for title in [
            "Pain Discovery",
            "Objection Handling",
            "False Urgency",
            "Assumptive Close",
        ] {
            assert!(
                html.contains(&format!("<summary>🎭 {title} Scripts</summary>")),
                "{title}"
            );
        }
        assert_eq!(html.matches("<details open>").count(), 4);
        assert!(html.contains("Prevent delay tactics"));
        assert!(!html.contains("Create artificial urgency"));
    }

    #[test]
    fn pipeline_filters_by_status() {
        let store = store();
        let params = ViewParams {
            status: Some("EXPOSED".to_owned()),
            ..ViewParams::default()
        };
        let html = page(&store, View::BookPipeline, &params, None);
        assert!(html.contains("Robert Miller &amp; Stephen Heiman"));
        assert!(!html.contains("Neil Rackham"));
    }

    #[test]
    fn unknown_tab_falls_back_to_first() {
        let store = store();
        let params = ViewParams {
            tab: Some("nope".to_owned()),
            ..ViewParams::default()
        };
        let html = page(&store, View::CustomerCenteredSelling, &params, None);
        assert!(html.contains("Ask probing questions to identify customer pain points."));
        assert!(html.contains("What keeps you up at night about your retirement?"));
    }

    #[test]
    fn chapter_tab_shows_progress() {
        let store = store();
        let params = ViewParams {
            chapters: Some("coming-soon".to_owned()),
            ..ViewParams::default()
        };
        let html = page(&store, View::CustomerCenteredSelling, &params, None);
        assert!(html.contains("Progress: 30% complete"));
    }

    #[test]
    fn intel_kind_without_form_renders_no_form() {
        let store = store();
        let params = ViewParams {
            intel_type: Some("Company Policy".to_owned()),
            ..ViewParams::default()
        };
        let html = page(&store, View::SubmitIntel, &params, None);
        assert!(!html.contains("action=\"/forms/"));
        assert!(html.contains("Intelligence Database Growth"));
    }

    #[test]
    fn notice_only_shown_on_its_form() {
        let store = store();
        let notice = Notice::Acknowledged(Acknowledgement {
            form: FormId::ScriptIntel,
            message: FormId::ScriptIntel.acknowledgement(),
        });
        let html = page(&store, View::SubmitIntel, &ViewParams::default(), Some(&notice));
        assert!(html.contains("action=\"/forms/script_intel\""));
        assert!(html.contains(FormId::ScriptIntel.acknowledgement()));
    }

    #[test]
    fn techniques_tabs() {
        let store = store();
        let html = page(
            &store,
            View::TrainingTechniques,
            &ViewParams {
                tab: Some("warning-signs".to_owned()),
                ..ViewParams::default()
            },
            None,
        );
        assert!(html.contains("🚩 Must decide today"));

        let html = page(
            &store,
            View::TrainingTechniques,
            &ViewParams {
                tab: Some("defense".to_owned()),
                ..ViewParams::default()
            },
            None,
        );
        assert!(html.contains("How are you compensated?"));
    }

    #[test]
    fn script_card_quotes_counter() {
        let card = script_card("When we set up your account next week...");
        assert!(card.contains("Assume the sale is done"));
        assert!(card.contains("\"Stop. I haven&#39;t agreed to anything yet.\""));
    }
}
