use app_shell::SubmitError;
use deal_core::{category_labels, Deal};
use leptos::*;

use crate::state::{host_env, use_app_ctx};

#[cfg(target_arch = "wasm32")]
use app_shell::run_after;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ListingPage() -> impl IntoView {
    view! {
        <Header/>
        <main>
            <SocialBanner/>
            <div class="container">
                <PriceHistoryInput/>
                <section class="hero">
                    <h2>"Today's Best Deals"</h2>
                    <p>
                        "Discover the hottest deals and biggest savings from your favorite online stores, all in one place."
                    </p>
                </section>
                <SearchBar/>
                <CategoryFilter/>
                <DealGrid/>
            </div>
        </main>
        <Footer/>
    }
}

#[component]
fn Header() -> impl IntoView {
    let ctx = use_app_ctx();
    let brand = ctx.config.with_value(|c| c.brand.clone());
    view! {
        <header class="topbar">
            <div class="container">
                <div class="brand">
                    <span class="brand-mark">"🛍"</span>
                    <h1 style="margin:0">{brand}</h1>
                </div>
                <nav class="topbar-nav">
                    <a href="#">"Top Deals"</a>
                    <a href="#">"Categories"</a>
                    <a href="#">"Stores"</a>
                    <a href="#">"Blog"</a>
                    <ThemeSwitcher/>
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let store = use_app_ctx().store;
    let is_dark = create_memo(move |_| store.with(|s| s.state().theme.is_dark()));
    view! {
        <button
            class="theme-switch"
            aria-label="Toggle theme"
            on:click=move |_| store.update(|s| s.toggle_theme(&host_env()))
        >
            {move || if is_dark.get() { "☀" } else { "☾" }}
        </button>
    }
}

#[component]
fn SocialBanner() -> impl IntoView {
    view! {
        <div class="social-banner">
            <div class="container">
                <div>
                    <h2>"Join Our Deal Alert Community!"</h2>
                    <p>"Get instant notifications for the hottest deals and exclusive offers."</p>
                </div>
                <div class="social-links">
                    <a class="btn light" href="#telegram-link" target="_blank" rel="noopener noreferrer">
                        "Join Telegram"
                    </a>
                    <a class="btn whatsapp" href="#whatsapp-link" target="_blank" rel="noopener noreferrer">
                        "Join WhatsApp"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// "Track price" form. Submitting starts a timed lookup; when the delay elapses the
/// price-history view opens and the field is cleared.
#[component]
fn PriceHistoryInput() -> impl IntoView {
    let ctx = use_app_ctx();
    let store = ctx.store;
    let url_input = create_memo(move |_| store.with(|s| s.state().url_input.clone()));
    let loading = create_memo(move |_| store.with(|s| s.state().submit.is_loading()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let started = store
            .try_update(|s| s.begin_submit())
            .unwrap_or(Err(SubmitError::AlreadyLoading));
        match started {
            Ok(token) => {
                #[cfg(target_arch = "wasm32")]
                {
                    let (delay_ms, new_tab) =
                        ctx.config.with_value(|c| (c.submit_delay_ms, c.open_in_new_tab));
                    spawn_local(async move {
                        let live = run_after(TimeoutFuture::new(delay_ms), token.clone()).await;
                        let target = store.try_update(|s| s.finish_submit(&token)).flatten();
                        if let (true, Some(target)) = (live, target) {
                            crate::app::open_view(store, target, new_tab);
                        }
                    });
                }
                #[cfg(not(target_arch = "wasm32"))]
                let _ = token;
            }
            Err(err) => tracing::debug!(error = %err, "submit ignored"),
        }
    };

    // A lookup still pending when the listing unmounts never navigates.
    on_cleanup(move || {
        let _ = store.try_update(|s| s.cancel_submit());
    });

    view! {
        <div class="panel tracker">
            <h2>"📈 Price History Tracker"</h2>
            <p>
                "Paste any product link from Amazon, Flipkart, or other supported stores to view its price history and make informed buying decisions."
            </p>
            <form on:submit=on_submit>
                <input
                    type="url"
                    required=true
                    placeholder="Paste product URL here..."
                    prop:value=move || url_input.get()
                    on:input=move |ev| store.update(|s| s.set_url_input(&event_target_value(&ev)))
                />
                <button type="submit" class="btn primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Loading..." } else { "Track Price" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn SearchBar() -> impl IntoView {
    let store = use_app_ctx().store;
    view! {
        <input
            class="search"
            type="text"
            placeholder="Search for deals..."
            on:input=move |ev| store.update(|s| s.set_search_query(&event_target_value(&ev)))
        />
    }
}

#[component]
fn CategoryFilter() -> impl IntoView {
    let store = use_app_ctx().store;
    let selected =
        create_memo(move |_| store.with(|s| s.state().filter.selected_category.clone()));
    view! {
        <div class="category-bar">
            {category_labels()
                .into_iter()
                .map(|label| {
                    let class = move || {
                        if selected.get() == label { "pill active" } else { "pill" }
                    };
                    view! {
                        <button class=class on:click=move |_| store.update(|s| s.select_category(label))>
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn DealGrid() -> impl IntoView {
    let store = use_app_ctx().store;
    let visible = create_memo(move |_| store.with(|s| s.visible_deals()));
    view! {
        <div class="deal-grid">
            <Show
                when=move || visible.with(|d| !d.is_empty())
                fallback=|| view! { <p class="deal-empty">"No deals match your filters."</p> }
            >
                <For
                    each=move || visible.get()
                    key=|deal| deal.id
                    children=move |deal| view! { <DealCard deal=deal/> }
                />
            </Show>
        </div>
    }
}

#[component]
pub fn DealCard(deal: Deal) -> impl IntoView {
    let expires = deal
        .expires_in
        .clone()
        .map(|e| view! { <div class="expires">{format!("⏱ Ends in {e}")}</div> });
    view! {
        <div class="panel deal-card">
            <div class="deal-media">
                <img src=deal.image_url.clone() alt=deal.title.clone()/>
                <span class="badge discount">{format!("{}% OFF", deal.discount_percent)}</span>
                <span class="badge platform">{deal.platform.clone()}</span>
            </div>
            <div class="deal-body">
                <h3>{deal.title.clone()}</h3>
                <div class="price-row">
                    <span class="price-now">{format_amount(deal.discounted_price)}</span>
                    <span class="price-was">{format_amount(deal.original_price)}</span>
                </div>
                {expires}
                <div class="deal-foot">
                    <span class="hot">"📈 Hot Deal"</span>
                    <a class="btn primary" href=deal.deal_url.clone() target="_blank" rel="noopener noreferrer">
                        "🛒 Get Deal"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let brand = use_app_ctx().config.with_value(|c| c.brand.clone());
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3>{format!("About {brand}")}</h3>
                        <p>"Your one-stop destination for the best online shopping deals and discounts."</p>
                    </div>
                    <div>
                        <h3>"Quick Links"</h3>
                        <ul>{link_list(&["Home", "Categories", "Stores", "Contact"])}</ul>
                    </div>
                    <div>
                        <h3>"Popular Stores"</h3>
                        <ul>{link_list(&["Amazon", "Flipkart", "Best Buy", "Walmart"])}</ul>
                    </div>
                    <div>
                        <h3>"Newsletter"</h3>
                        <p>"Subscribe to get daily updates on the best deals!"</p>
                        <div class="newsletter">
                            <input type="email" placeholder="Enter your email"/>
                            <button class="btn primary">"Subscribe"</button>
                        </div>
                    </div>
                </div>
                <div class="copyright">
                    <p>{format!("© 2024 {brand}. All rights reserved.")}</p>
                </div>
            </div>
        </footer>
    }
}

fn link_list(items: &[&'static str]) -> View {
    items
        .iter()
        .map(|item| view! { <li><a href="#">{*item}</a></li> })
        .collect_view()
}

/// Deal prices as listed: whole amounts without cents, otherwise trimmed decimals.
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("${}", rounded as i64)
    } else {
        let s = format!("{rounded:.2}");
        format!("${}", s.trim_end_matches('0'))
    }
}
