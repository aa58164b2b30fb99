use log::{debug, info, warn};
use rocket::http::{Cookie, CookieJar, SameSite};

use crate::models::content::ContentDocument;
use crate::models::page::{DockButton, Page};

/// Cookie holding the visitor's chosen theme id.
pub const THEME_KEY: &str = "bagdigital_theme";

/// Used when neither the saved theme nor the document default is usable.
pub const FALLBACK_THEME: &str = "agency";

/// Per-load UI state. Owned by whoever drives the page; only
/// `apply_theme` mutates it after construction.
#[derive(Debug, Clone)]
pub struct UiState {
    pub content: ContentDocument,
    pub active_theme_id: String,
}

impl UiState {
    pub fn new(content: ContentDocument) -> Self {
        UiState {
            content,
            active_theme_id: FALLBACK_THEME.to_string(),
        }
    }
}

/// Best-effort persistence of the theme choice. `save` reports whether the
/// write happened; callers are free to ignore it.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, theme_id: &str) -> bool;
}

pub struct CookieThemeStore<'a, 'r> {
    jar: &'a CookieJar<'r>,
}

impl<'a, 'r> CookieThemeStore<'a, 'r> {
    pub fn new(jar: &'a CookieJar<'r>) -> Self {
        CookieThemeStore { jar }
    }
}

impl ThemeStore for CookieThemeStore<'_, '_> {
    fn load(&self) -> Option<String> {
        self.jar
            .get(THEME_KEY)
            .map(|c| c.value().trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn save(&self, theme_id: &str) -> bool {
        let cookie = Cookie::build((THEME_KEY, theme_id.to_string()))
            .path("/")
            .same_site(SameSite::Lax)
            .permanent();
        self.jar.add(cookie);
        true
    }
}

/// Pick the theme to restore on load: saved choice, then the document
/// default, then `agency`. Candidates that don't key a theme are skipped.
pub fn resolve_initial_theme(content: &ContentDocument, saved: Option<&str>) -> String {
    let candidates = [saved, content.global.default_theme.as_deref()];
    for candidate in candidates.into_iter().flatten() {
        if content.has_theme(candidate) {
            return candidate.to_string();
        }
        debug!("Ignoring unusable theme id '{}'", candidate);
    }
    FALLBACK_THEME.to_string()
}

/// Apply a theme's variables and hero copy to the page.
/// Unknown ids are a no-op and return `false`.
pub fn apply_theme(
    state: &mut UiState,
    page: &mut Page,
    store: &dyn ThemeStore,
    theme_id: &str,
) -> bool {
    let theme = match state.content.theme(theme_id) {
        Some(t) => t.clone(),
        None => {
            warn!("Theme '{}' not found; keeping '{}'", theme_id, state.active_theme_id);
            return false;
        }
    };

    state.active_theme_id = theme_id.to_string();

    let class_id = if theme.id.is_empty() { theme_id } else { theme.id.as_str() };
    page.body_classes.retain(|c| !c.starts_with("theme-"));
    page.body_classes.push(format!("theme-{}", class_id));

    page.root_style.accent = theme.accent;
    page.root_style.font = theme.font;
    page.root_style.radius = theme.radius;
    page.root_style.hero_img = theme.hero_img;

    page.hero.title = theme.hero_title;
    page.hero.desc = theme.hero_desc;
    page.scope_rule = state.content.scope_rule().to_string();

    for button in page.dock.iter_mut() {
        button.active = button.theme_id == theme_id;
    }

    if !store.save(theme_id) {
        debug!("Theme '{}' applied but not persisted", theme_id);
    }

    info!("Theme set to '{}'", theme_id);
    true
}

/// Rebuild the dock from scratch, one toggle per theme in document order.
/// Nothing is active until `apply_theme` runs.
pub fn build_theme_dock(content: &ContentDocument, page: &mut Page) {
    page.dock = content
        .themes
        .iter()
        .map(|(key, theme)| DockButton {
            theme_id: key.clone(),
            label: theme.label.clone(),
            active: false,
        })
        .collect();
}
