//! HTML rendering for the three wiki views.
//!
//! Templates are plain HTML files in the templates directory with
//! `{{TITLE}}`, `{{BODY}}` and `{{PAGES}}` placeholders. When a template
//! file is absent the renderer falls back to an inline shell, so the
//! server works from a bare checkout.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::errors::WikiError;
use crate::types::Page;
use crate::utils::{escape_attr, escape_html};

/// The immutable template set, constructed once at startup and shared by
/// reference with every handler.
pub struct TemplateSet {
    templates_dir: PathBuf,
}

impl TemplateSet {
    pub fn new(templates_dir: PathBuf) -> Self {
        Self { templates_dir }
    }

    /// Render the read-only view of a page.
    pub fn render_view(&self, page: &Page) -> Result<String, WikiError> {
        let title = escape_html(&page.title);
        let body = escape_html(&page.body_text());
        if let Some(tpl) = self.load("view")? {
            return Ok(tpl.replace("{{TITLE}}", &title).replace("{{BODY}}", &body));
        }
        Ok(format!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{title}</title></head>\
             <body><h1>{title}</h1><p><a href=\"/edit/{title}\">Edit this page</a></p>\
             <pre class=\"page-body\">{body}</pre><p><a href=\"/\">All pages</a></p></body></html>"
        ))
    }

    /// Render the edit form, pre-filled with the current body (empty for
    /// a page that does not exist yet).
    pub fn render_edit(&self, page: &Page) -> Result<String, WikiError> {
        let title = escape_attr(&page.title);
        let body = escape_html(&page.body_text());
        if let Some(tpl) = self.load("edit")? {
            return Ok(tpl.replace("{{TITLE}}", &title).replace("{{BODY}}", &body));
        }
        Ok(format!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>Editing {title}</title></head>\
             <body><h1>Editing {title}</h1>\
             <form action=\"/save/{title}\" method=\"POST\">\
             <textarea name=\"body\" rows=\"20\" cols=\"80\">{body}</textarea>\
             <p><input type=\"submit\" value=\"Save\"></p></form></body></html>"
        ))
    }

    /// Render the index listing of all page titles.
    pub fn render_index(&self, titles: &[String]) -> Result<String, WikiError> {
        let pages = page_list_html(titles);
        if let Some(tpl) = self.load("index")? {
            return Ok(tpl.replace("{{PAGES}}", &pages));
        }
        Ok(format!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>Wiki</title></head>\
             <body><h1>Pages</h1>{pages}</body></html>"
        ))
    }

    /// Load a template by name. Absence is expected (fallback shell);
    /// any other read failure is a render error.
    fn load(&self, name: &str) -> Result<Option<String>, WikiError> {
        let path = self.templates_dir.join(format!("{}.html", name));
        match fs::read_to_string(&path) {
            Ok(tpl) => Ok(Some(tpl)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WikiError::Template(format!(
                "failed to read template '{}': {}",
                name, e
            ))),
        }
    }
}

/// Build the title list shared by the file template and the fallback.
fn page_list_html(titles: &[String]) -> String {
    if titles.is_empty() {
        return "<p>No pages yet. Create one at <code>/edit/&lt;Title&gt;</code>.</p>".to_string();
    }
    let mut html = String::from("<ul class=\"pages\">\n");
    for title in titles {
        html.push_str(&format!(
            "  <li><a href=\"/view/{}\">{}</a></li>\n",
            escape_attr(title),
            escape_html(title)
        ));
    }
    html.push_str("</ul>\n");
    html
}
