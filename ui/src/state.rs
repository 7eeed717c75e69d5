use app_shell::{AppState, Environment, StateStore, ViewState};
use leptos::*;

use crate::config::UiConfig;

#[derive(Clone, Copy)]
pub struct AppCtx {
    pub store: RwSignal<StateStore>,
    pub config: StoredValue<UiConfig>,
}

/// Environment of the running host: browser storage + media queries under wasm,
/// a headless in-memory stand-in when rendering on the server.
#[cfg(target_arch = "wasm32")]
pub fn host_env() -> impl Environment {
    app_shell::BrowserEnvironment
}

#[cfg(not(target_arch = "wasm32"))]
pub fn host_env() -> impl Environment {
    app_shell::MemoryEnvironment::headless()
}

pub fn provide_app_ctx(config: UiConfig, view: ViewState) -> AppCtx {
    let initial = AppState::boot(&host_env(), view);
    let ctx = AppCtx {
        store: create_rw_signal(StateStore::with_sample(initial)),
        config: store_value(config),
    };
    provide_context(ctx);
    ctx
}

pub fn use_app_ctx() -> AppCtx {
    use_context::<AppCtx>().expect("AppCtx not provided")
}
