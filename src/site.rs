use crate::grid::{render_grid, GridCategory};
use crate::models::content::ContentDocument;
use crate::models::page::Page;
use crate::selector::build_service_select;
use crate::theme::{apply_theme, build_theme_dock, resolve_initial_theme, ThemeStore, UiState};

/// Run the startup sequence over a freshly loaded document: dock, service
/// dropdown, the three grids, then restore the saved (or default) theme.
pub fn bootstrap(content: ContentDocument, store: &dyn ThemeStore) -> (UiState, Page) {
    let mut state = UiState::new(content);
    let mut page = Page::new();

    build_theme_dock(&state.content, &mut page);
    build_service_select(&state.content, &mut page.service_select);

    render_grid(&mut page.core_grid, &state.content.core_services, GridCategory::Services);
    render_grid(&mut page.package_grid, &state.content.packages, GridCategory::Packages);
    render_grid(&mut page.lab_grid, &state.content.portfolio_labs, GridCategory::Labs);

    let saved = store.load();
    let initial = resolve_initial_theme(&state.content, saved.as_deref());
    apply_theme(&mut state, &mut page, store, &initial);

    (state, page)
}
