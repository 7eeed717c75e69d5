use crate::{
    chart::PriceHistoryPage,
    config::UiConfig,
    listing::ListingPage,
    state::provide_app_ctx,
    theme::GLOBAL_CSS,
};
use app_shell::{StateStore, ViewState};
use leptos::*;
use leptos_meta::*;

#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Host navigation -> view state. The browser location decides on the client; on the
/// server the request URI does. Without either the listing is shown.
#[cfg(target_arch = "wasm32")]
fn current_view() -> ViewState {
    let Some(location) = window().map(|w| w.location()) else {
        return ViewState::Listing;
    };
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    ViewState::from_location(&path, &search)
}

#[cfg(all(feature = "ssr", not(target_arch = "wasm32")))]
fn current_view() -> ViewState {
    use_context::<axum::http::request::Parts>()
        .map(|parts| ViewState::from_location(parts.uri.path(), parts.uri.query().unwrap_or("")))
        .unwrap_or_default()
}

#[cfg(all(not(feature = "ssr"), not(target_arch = "wasm32")))]
fn current_view() -> ViewState {
    ViewState::Listing
}

/// Record `view` in the session history so back/forward land on it.
#[cfg(target_arch = "wasm32")]
fn push_history(view: &ViewState) {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(err) =
        history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&view.href()))
    {
        web_sys::console::error_1(&err);
    }
}

/// Switch the shell to `view` without a page load.
pub fn navigate_to(store: RwSignal<StateStore>, view: ViewState) {
    #[cfg(target_arch = "wasm32")]
    push_history(&view);
    store.update(|s| s.navigate(view));
}

/// Open `view` in a new tab, or in place when tabs are disabled or blocked.
#[cfg(target_arch = "wasm32")]
pub fn open_view(store: RwSignal<StateStore>, view: ViewState, new_tab: bool) {
    if new_tab {
        let href = view.href();
        if let Some(Ok(Some(_))) = window().map(|w| w.open_with_url_and_target(&href, "_blank")) {
            return;
        }
        tracing::debug!(%href, "popup blocked, navigating in place");
    }
    navigate_to(store, view);
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = provide_app_ctx(UiConfig::from_host(), current_view());
    let title = ctx.config.with_value(|c| c.brand.clone());

    let theme_class = create_memo(move |_| {
        ctx.store.with(|s| {
            if s.state().theme.is_dark() {
                "app-root theme-dark"
            } else {
                "app-root"
            }
        })
    });
    let active_view = create_memo(move |_| ctx.store.with(|s| s.state().view.clone()));

    #[cfg(target_arch = "wasm32")]
    {
        let handle = window_event_listener(ev::popstate, move |_| {
            ctx.store.update(|s| s.navigate(current_view()));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Style>{GLOBAL_CSS}</Style>
        <Title text=title/>
        <div class=theme_class>
            {move || match active_view.get() {
                ViewState::Listing => view! { <ListingPage/> }.into_view(),
                ViewState::PriceHistory { product_url } => {
                    view! { <PriceHistoryPage product_url=product_url/> }.into_view()
                }
            }}
        </div>
    }
}
