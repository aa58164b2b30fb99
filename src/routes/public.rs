use std::sync::Arc;

use log::{debug, error};
use rocket::form::Form;
use rocket::http::{CookieJar, Status};
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::tokio::task::spawn_blocking;
use rocket::State;

use crate::config::SiteConfig;
use crate::contact::{ContactHandler, Dispatcher};
use crate::error::LoadError;
use crate::loader::{self, ContentSource};
use crate::models::content::ContentDocument;
use crate::models::page::Page;
use crate::render;
use crate::selector;
use crate::site;
use crate::theme::{self, CookieThemeStore};

/// Outbound webhook transport, shared with every request.
pub struct SharedDispatcher(pub Arc<dyn Dispatcher>);

/// Load the content document off the async executor.
async fn load(source: ContentSource) -> Result<ContentDocument, LoadError> {
    spawn_blocking(move || loader::load_content(&source))
        .await
        .map_err(|e| LoadError::Task(e.to_string()))?
}

// ── Landing page ───────────────────────────────────────

/// Landing page. `pick` carries a card title and preselects the matching
/// service, as a card click does in the browser. Contact-anchored cards link
/// here from their `<noscript>` fallback.
#[get("/?<pick>")]
pub async fn index(
    config: &State<SiteConfig>,
    cookies: &CookieJar<'_>,
    pick: Option<String>,
) -> RawHtml<String> {
    let content = match load(config.source()).await {
        Ok(c) => c,
        Err(_) => return RawHtml(render::render_page(&Page::degraded())),
    };

    let store = CookieThemeStore::new(cookies);
    let (_state, mut page) = site::bootstrap(content, &store);

    if let Some(title) = pick.as_deref() {
        selector::select_from_card(&mut page.service_select, title);
    }

    RawHtml(render::render_page(&page))
}

// ── Theme switch ───────────────────────────────────────

#[derive(Debug, FromForm)]
pub struct ThemeChoice {
    pub theme: String,
}

#[post("/theme", data = "<form>")]
pub async fn set_theme(
    config: &State<SiteConfig>,
    cookies: &CookieJar<'_>,
    form: Form<ThemeChoice>,
) -> Redirect {
    if let Ok(content) = load(config.source()).await {
        let store = CookieThemeStore::new(cookies);
        let (mut state, mut page) = site::bootstrap(content, &store);
        theme::apply_theme(&mut state, &mut page, &store, form.theme.trim());
    }
    Redirect::to("/")
}

// ── Contact form ───────────────────────────────────────

#[derive(Debug, FromForm, Default)]
pub struct ContactSubmit {
    pub name: Option<String>,
    pub email: Option<String>,
    pub service: Option<String>,
    pub timeline: Option<String>,
    pub message: Option<String>,
}

impl ContactSubmit {
    /// Copy posted values into the form model, as if typed into the page.
    fn fill(self, page: &mut Page) {
        page.contact.name = self.name.unwrap_or_default();
        page.contact.email = self.email.unwrap_or_default();
        page.contact.timeline = self.timeline.unwrap_or_default();
        page.contact.message = self.message.unwrap_or_default();
        page.service_select.value = self.service.filter(|s| !s.is_empty());
    }
}

#[post("/contact", data = "<form>")]
pub async fn contact_submit(
    config: &State<SiteConfig>,
    dispatcher: &State<SharedDispatcher>,
    cookies: &CookieJar<'_>,
    form: Form<ContactSubmit>,
) -> Result<RawHtml<String>, Status> {
    let content = match load(config.source()).await {
        Ok(c) => c,
        Err(_) => return Ok(RawHtml(render::render_page(&Page::degraded()))),
    };

    let (state, mut page) = site::bootstrap(content, &CookieThemeStore::new(cookies));
    form.into_inner().fill(&mut page);

    let dispatcher = Arc::clone(&dispatcher.0);
    let page_url = config.site_url.clone();
    let page = spawn_blocking(move || {
        let mut handler = ContactHandler::new();
        if let Err(e) = handler.submit(&mut page, &state, &page_url, dispatcher.as_ref()) {
            debug!("Contact submit ended in {:?}: {}", handler.state(), e);
        }
        page
    })
    .await
    .map_err(|e| {
        error!("Contact handler task failed: {}", e);
        Status::InternalServerError
    })?;

    Ok(RawHtml(render::render_page(&page)))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![index, set_theme, contact_submit]
}
