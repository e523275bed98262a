//! Page Routes
//!
//! Server-rendered brand pages. Every GET that is not an API route lands
//! here and is matched against the route table.
//!
//! - GET / - Redirect to the default brand
//! - GET /{brand} - Redirect to the brand's home page
//! - GET /{brand}/{page}[?menu=open] - Full HTML page
//! - GET /static/global.css - Shared stylesheet

use axum::{
    extract::{Query, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;

use leptos::*;

use crate::forms::ApplicationForm;
use crate::pages::{careers, page_title, FormView, NotFoundContent, PageContent, NOT_FOUND_TITLE};
use crate::router::{Page, RouteMatch};
use crate::shell::{render_document, Document, Notice};
use crate::site::SiteKey;
use crate::web::dto::PageQuery;
use crate::web::state::AppState;

const GLOBAL_CSS: &str = include_str!("../../../assets/global.css");

/// Render a brand page inside the shared chrome
pub(crate) fn render_page(
    state: &AppState,
    site: SiteKey,
    page: Page,
    menu_open: bool,
    form: Option<FormView>,
    notice: Option<Notice>,
) -> Html<String> {
    let path = site.path(page.slug());
    let theme = state.resolver.resolve_key(site, true);
    let config = theme.config.clone();
    let details = (*state.contact).clone();

    Html(render_document(move || {
        view! {
            <Document theme=theme path=path title=page_title(page) sidebar_open=menu_open notice=notice>
                <PageContent config=config page=page details=details form=form />
            </Document>
        }
    }))
}

/// 404 page themed by whatever the path resolves to
pub(crate) fn not_found(state: &AppState, path: &str, menu_open: bool) -> Response {
    let theme = state.resolver.resolve(path);
    tracing::debug!(path = %path, theme = %theme.key, "Page not found");

    let config = theme.config.clone();
    let request_path = path.to_string();
    let missing = path.to_string();
    let html = render_document(move || {
        view! {
            <Document theme=theme path=request_path title=NOT_FOUND_TITLE sidebar_open=menu_open>
                <NotFoundContent path=missing config=config />
            </Document>
        }
    });
    (StatusCode::NOT_FOUND, Html(html)).into_response()
}

/// GET fallback for every page path
pub async fn show(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Response {
    let path = uri.path();

    match state.routes.resolve(path) {
        RouteMatch::Redirect(to) => Redirect::permanent(&to).into_response(),
        RouteMatch::NotFound => not_found(&state, path, query.menu_open()),
        RouteMatch::Page { site, page } => {
            let preselected = query
                .position
                .as_deref()
                .filter(|_| page == Page::Careers)
                .and_then(careers::posting)
                .map(|posting| {
                    ApplicationForm::new(state.contact.careers_inbox.clone(), Some(posting.clone()))
                });
            let form = preselected.map(|form| FormView::Application(form, None));

            render_page(&state, site, page, query.menu_open(), form, None).into_response()
        }
    }
}

/// GET /static/global.css
pub async fn global_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], GLOBAL_CSS)
}
