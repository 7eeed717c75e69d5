pub mod env;
pub mod submit;
pub mod theme;
pub mod view;

use deal_core::{Catalog, Deal, FilterState};
use price_engine::HistoryWindow;
use serde::{Deserialize, Serialize};

pub use env::{Environment, MemoryEnvironment, PersistenceError};
#[cfg(target_arch = "wasm32")]
pub use env::BrowserEnvironment;
pub use submit::{run_after, CancelToken, SubmitError, SubmitTask};
pub use theme::{init_theme, toggle_theme, Theme, THEME_KEY};
pub use view::{price_history_href, ViewState, WindowSelector, PRICE_HISTORY_PATH};

/// Global app state for one viewing session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub theme: Theme,
    pub view: ViewState,
    pub filter: FilterState,
    pub window: WindowSelector,
    /// Contents of the "track price" URL field.
    pub url_input: String,
    #[serde(skip)]
    pub submit: SubmitTask,
}

impl AppState {
    /// Starting state for `view`, theme resolved from the environment.
    pub fn boot(env: &impl Environment, view: ViewState) -> Self {
        let theme = Theme::from_dark(init_theme(env));
        env.apply_color_scheme(theme.is_dark());
        Self {
            theme,
            view,
            ..Self::default()
        }
    }
}

/// Owns the session state; every user callback goes through one of these methods.
pub struct StateStore {
    state: AppState,
    catalog: Catalog,
}

impl StateStore {
    pub fn new(initial: AppState, catalog: Catalog) -> Self {
        Self {
            state: initial,
            catalog,
        }
    }

    pub fn with_sample(initial: AppState) -> Self {
        Self::new(initial, Catalog::sample())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn visible_deals(&self) -> Vec<Deal> {
        self.state.filter.apply(&self.catalog)
    }

    pub fn select_category(&mut self, category: &str) {
        self.state.filter.selected_category = category.to_string();
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.state.filter.search_query = query.to_string();
    }

    pub fn toggle_theme(&mut self, env: &impl Environment) {
        let dark = toggle_theme(env, self.state.theme.is_dark());
        self.state.theme = Theme::from_dark(dark);
    }

    pub fn select_window(&mut self, window: HistoryWindow) {
        self.state.window.select(window);
    }

    pub fn reset_window(&mut self) {
        self.state.window.reset();
    }

    /// Switch surfaces. Moving to a different view starts the chart at all-time again.
    pub fn navigate(&mut self, view: ViewState) {
        if self.state.view != view {
            self.state.window.reset();
        }
        self.state.view = view;
    }

    pub fn set_url_input(&mut self, url: &str) {
        self.state.url_input = url.to_string();
    }

    pub fn begin_submit(&mut self) -> Result<CancelToken, SubmitError> {
        let url = self.state.url_input.clone();
        self.state.submit.begin(&url)
    }

    /// Complete a submit run; on success the URL field is cleared and the view to open returned.
    pub fn finish_submit(&mut self, token: &CancelToken) -> Option<ViewState> {
        let target = self.state.submit.finish(token)?;
        self.state.url_input.clear();
        Some(target)
    }

    pub fn cancel_submit(&mut self) {
        self.state.submit.cancel();
    }
}
