use app_shell::ViewState;
use deal_core::Timestamp;
use leptos::*;
use price_engine::{
    compute_stats, window_history, BuyAdvice, HistoryWindow, PriceError, PriceRecord,
    ProductSnapshot,
};

use crate::{app::navigate_to, state::use_app_ctx};

#[cfg(target_arch = "wasm32")]
use js_sys::Date;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

const VIEW_W: f64 = 800.0;
const VIEW_H: f64 = 360.0;
const PAD: f64 = 36.0;

#[cfg(target_arch = "wasm32")]
fn now_ms() -> Timestamp {
    Date::now() as Timestamp
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as Timestamp)
        .unwrap_or(0)
}

pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub period: String,
    pub price: f64,
}

/// Project records into a `width` x `height` box: x evenly spaced by index,
/// y scaled between the series min (bottom) and max (top).
pub fn project_points(records: &[PriceRecord], width: f64, height: f64, pad: f64) -> Vec<ChartPoint> {
    if records.is_empty() {
        return Vec::new();
    }
    let (lo, hi) = records.iter().fold((f64::MAX, f64::MIN), |(lo, hi), r| {
        (lo.min(r.price), hi.max(r.price))
    });
    let span = hi - lo;
    let inner_w = width - 2.0 * pad;
    let inner_h = height - 2.0 * pad;
    let step = if records.len() > 1 {
        inner_w / (records.len() - 1) as f64
    } else {
        0.0
    };
    records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let x = if records.len() > 1 {
                pad + i as f64 * step
            } else {
                width / 2.0
            };
            let y = if span.abs() < 1e-9 {
                height / 2.0
            } else {
                pad + (hi - r.price) / span * inner_h
            };
            ChartPoint {
                x,
                y,
                period: r.period.clone(),
                price: r.price,
            }
        })
        .collect()
}

pub fn polyline(points: &[ChartPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn PriceHistoryPage(product_url: Option<String>) -> impl IntoView {
    let snapshot = ProductSnapshot::sample_for(product_url.as_deref());
    let link = product_url.clone().unwrap_or_else(|| "#".into());
    let link_text = product_url.unwrap_or_else(|| "No URL provided".into());
    let recorded = snapshot.recorded_stats();
    let advice = snapshot.advice();
    let records = store_value(snapshot.price_history.records().to_vec());
    let store = use_app_ctx().store;
    let back = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        navigate_to(store, ViewState::Listing);
    };

    view! {
        <div class="history-page">
            <div class="container">
                <a class="back-link" href="/" on:click=back>"← Back to deals"</a>
                <div class="panel history-card">
                    <div class="product">
                        <div class="product-image">
                            <img src=snapshot.image_url.clone() alt=snapshot.title.clone()/>
                        </div>
                        <div class="product-info">
                            <h1>{snapshot.title.clone()}</h1>
                            <div class="product-price">
                                <span class="now">{format_price(snapshot.current_price)}</span>
                                <span class="was">{format_price(snapshot.original_price)}</span>
                                <span class="off">{format!("-{}%", snapshot.discount_percent)}</span>
                            </div>
                            <a class="product-link" href=link.clone() target="_blank" rel="noopener noreferrer">
                                {link_text}
                            </a>
                        </div>
                    </div>

                    <div class="stat-grid">
                        <StatCard title="Highest Price" value=recorded.highest tone="tone-red"/>
                        <StatCard title="Lowest Price" value=recorded.lowest tone="tone-green"/>
                        <StatCard title="Average Price" value=recorded.average tone="tone-purple"/>
                    </div>

                    <PriceTimeline records=records/>
                    <AdviceMeter advice=advice/>

                    <div class="actions">
                        <a class="btn primary" href=link target="_blank" rel="noopener noreferrer">
                            "🛒 View Product"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatCard(title: &'static str, value: f64, tone: &'static str) -> impl IntoView {
    view! {
        <div class=format!("panel stat-card {tone}")>
            <h3>{title}</h3>
            <p class="value">{format_price(value)}</p>
        </div>
    }
}

#[component]
fn PriceTimeline(records: StoredValue<Vec<PriceRecord>>) -> impl IntoView {
    let store = use_app_ctx().store;
    let window = create_memo(move |_| store.with(|s| s.state().window.current()));
    let windowed =
        create_memo(move |_| records.with_value(|r| window_history(r, window.get(), now_ms())));

    let buttons = HistoryWindow::ALL
        .into_iter()
        .map(|w| {
            let class = move || {
                if window.get() == w { "window-btn active" } else { "window-btn" }
            };
            view! {
                <button class=class on:click=move |_| store.update(|s| s.select_window(w))>
                    {w.label()}
                </button>
            }
        })
        .collect_view();

    let chart = move || {
        let points = windowed.with(|r| project_points(r, VIEW_W, VIEW_H, PAD));
        if points.is_empty() {
            return view! { <div class="chart-empty">"No price points in this window"</div> }
                .into_view();
        }
        let line = polyline(&points);
        let dots = points
            .into_iter()
            .map(|p| {
                view! {
                    <circle class="chart-dot" cx=p.x cy=p.y r="4"></circle>
                    <text class="chart-label" x=p.x y={VIEW_H - 8.0} text-anchor="middle">{p.period.clone()}</text>
                    <text class="chart-label" x=p.x y={p.y - 10.0} text-anchor="middle">{format_price(p.price)}</text>
                }
            })
            .collect_view();
        view! {
            <svg viewBox=format!("0 0 {VIEW_W} {VIEW_H}") preserveAspectRatio="none">
                <polyline class="chart-line" points=line/>
                {dots}
            </svg>
        }
        .into_view()
    };

    let window_stats = move || match windowed.with(|r| compute_stats(r)) {
        Ok(stats) => view! {
            <div class="window-stats">
                <span>{format!("High {}", format_price(stats.highest))}</span>
                <span>{format!("Low {}", format_price(stats.lowest))}</span>
                <span>{format!("Avg {}", format_price(stats.average))}</span>
            </div>
        }
        .into_view(),
        Err(PriceError::EmptyHistory) => ().into_view(),
        Err(err) => {
            tracing::warn!(error = %err, "window stats unavailable");
            ().into_view()
        }
    };

    view! {
        <div class="timeline">
            <div class="timeline-head">
                <h2>"Price Timeline"</h2>
                <div class="window-buttons">
                    {buttons}
                    <button class="window-btn" on:click=move |_| store.update(|s| s.reset_window())>
                        "Reset"
                    </button>
                </div>
            </div>
            <div class="panel chart-box">{chart}</div>
            {window_stats}
        </div>
    }
}

#[component]
fn AdviceMeter(advice: BuyAdvice) -> impl IntoView {
    let width = format!("width: {}%", advice.meter_fraction() * 100.0);
    view! {
        <div class="advice">
            <h2>"Should you buy at this price?"</h2>
            <div class="advice-track">
                <div class=format!("advice-fill {}", advice.tone_class()) style=width></div>
            </div>
            <div class="advice-scale">
                {BuyAdvice::SCALE
                    .into_iter()
                    .map(|a| {
                        let class = if a == advice { "current" } else { "" };
                        view! { <span class=class>{a.label()}</span> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recs(prices: &[f64]) -> Vec<PriceRecord> {
        prices
            .iter()
            .enumerate()
            .map(|(i, p)| PriceRecord::new(format!("2024-{:02}", i + 1), *p))
            .collect()
    }

    #[test]
    fn extremes_map_to_top_and_bottom() {
        let pts = project_points(&recs(&[300.0, 400.0, 200.0]), 100.0, 50.0, 5.0);
        assert_eq!(pts.len(), 3);
        assert!((pts[1].y - 5.0).abs() < 1e-9);
        assert!((pts[2].y - 45.0).abs() < 1e-9);
        assert!((pts[0].y - 25.0).abs() < 1e-9);
        assert!((pts[0].x - 5.0).abs() < 1e-9);
        assert!((pts[2].x - 95.0).abs() < 1e-9);
    }

    #[test]
    fn single_or_flat_series_is_centered() {
        let one = project_points(&recs(&[10.0]), 100.0, 50.0, 5.0);
        assert_eq!((one[0].x, one[0].y), (50.0, 25.0));

        let flat = project_points(&recs(&[7.0, 7.0]), 100.0, 50.0, 5.0);
        assert!(flat.iter().all(|p| p.y == 25.0));
        assert!(project_points(&[], 100.0, 50.0, 5.0).is_empty());
    }

    #[test]
    fn polyline_and_price_labels() {
        let pts = project_points(&recs(&[1.0, 2.0]), 20.0, 20.0, 0.0);
        assert_eq!(polyline(&pts), "0.0,20.0 20.0,0.0");
        assert_eq!(format_price(324.99), "$324.99");
        assert_eq!(format_price(400.0), "$400.00");
    }
}
