use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::errors::WikiError;
use crate::middleware::log_requests;
use crate::routes::{match_path, Operation};
use crate::services::PageStore;
use crate::templates::TemplateSet;
use crate::types::{AppState, Page};
use crate::utils::form_value;

/// Build the application router: `/` serves the index, everything else
/// goes through the path router, and completed requests are logged.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/*path", get(handle_page).post(handle_page))
        .layer(axum::middleware::from_fn(log_requests))
        .with_state(state)
}

/// Handle the index listing at `/`
pub async fn handle_index(State(state): State<AppState>) -> Result<Response, WikiError> {
    let store = PageStore::new(state.data_dir.as_ref().clone());
    let mut titles = store.list_titles()?;
    // The store gives directory order; sort here for stable presentation.
    titles.sort();

    let templates = TemplateSet::new(state.templates_dir.as_ref().clone());
    let html = templates.render_index(&titles)?;
    Ok(Html(html).into_response())
}

/// Handle every `/<operation>/<title>` request
pub async fn handle_page(
    State(state): State<AppState>,
    uri: Uri,
    body: Bytes,
) -> Result<Response, WikiError> {
    let Some((op, title)) = match_path(uri.path()) else {
        log::debug!("No route for path '{}'", uri.path());
        return Err(WikiError::InvalidPath);
    };
    log::debug!("Dispatching {} for '{}'", op.as_str(), title);

    let store = PageStore::new(state.data_dir.as_ref().clone());
    let templates = TemplateSet::new(state.templates_dir.as_ref().clone());

    match op {
        Operation::View => view(&store, &templates, title),
        Operation::Edit => edit(&store, &templates, title),
        Operation::Save => save(&store, title, &body),
    }
}

/// Show a page, or send the client to the edit form if it has not been
/// created yet.
fn view(store: &PageStore, templates: &TemplateSet, title: &str) -> Result<Response, WikiError> {
    match store.load(title) {
        Ok(page) => Ok(Html(templates.render_view(&page)?).into_response()),
        Err(WikiError::NotFound) => {
            log::info!("Page '{}' not found, redirecting to edit", title);
            redirect_found(&format!("/edit/{}", title))
        }
        Err(e) => Err(e),
    }
}

/// Show the edit form, blank when the page does not exist yet.
fn edit(store: &PageStore, templates: &TemplateSet, title: &str) -> Result<Response, WikiError> {
    let page = match store.load(title) {
        Ok(page) => page,
        Err(WikiError::NotFound) => Page::blank(title),
        Err(e) => return Err(e),
    };
    Ok(Html(templates.render_edit(&page)?).into_response())
}

/// Persist the submitted body and send the client back to the view. A
/// missing `body` field saves an empty page.
fn save(store: &PageStore, title: &str, form: &[u8]) -> Result<Response, WikiError> {
    let body = form_value(form, "body");
    store.save(&Page::new(title, body))?;
    redirect_found(&format!("/view/{}", title))
}

/// 302 Found with a `Location` header. Titles are validated to ASCII
/// alphanumerics before we get here, so the header value cannot fail for
/// any target we generate.
fn redirect_found(location: &str) -> Result<Response, WikiError> {
    let value = header::HeaderValue::from_str(location)
        .map_err(|e| WikiError::Template(format!("invalid redirect target: {}", e)))?;
    let mut resp = StatusCode::FOUND.into_response();
    resp.headers_mut().insert(header::LOCATION, value);
    Ok(resp)
}
