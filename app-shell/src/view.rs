use price_engine::HistoryWindow;
use serde::{Deserialize, Serialize};

pub const LISTING_PATH: &str = "/";
pub const PRICE_HISTORY_PATH: &str = "/price-history";

/// Which surface the shell renders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewState {
    #[default]
    Listing,
    PriceHistory {
        /// Decoded `url` query parameter; `None` when missing or empty.
        product_url: Option<String>,
    },
}

impl ViewState {
    /// Translate a host location into a view. Only the exact price-history path is
    /// special; every other path renders the listing.
    pub fn from_location(path: &str, search: &str) -> Self {
        if path == PRICE_HISTORY_PATH {
            ViewState::PriceHistory {
                product_url: query_param(search, "url").filter(|u| !u.is_empty()),
            }
        } else {
            ViewState::Listing
        }
    }

    pub fn href(&self) -> String {
        match self {
            ViewState::Listing => LISTING_PATH.to_string(),
            ViewState::PriceHistory { product_url: None } => PRICE_HISTORY_PATH.to_string(),
            ViewState::PriceHistory {
                product_url: Some(url),
            } => price_history_href(url),
        }
    }
}

/// Link to the price-history view for `product_url`.
pub fn price_history_href(product_url: &str) -> String {
    format!(
        "{PRICE_HISTORY_PATH}?url={}",
        urlencoding::encode(product_url)
    )
}

/// First value of `name` in a query string (leading `?` optional). Values that are
/// not valid percent-encoding are returned as written.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key) == name).then(|| decode_component(value))
        })
        .next()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Window selection on the price-history view. Starts at all-time; changes only
/// through explicit selection or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowSelector {
    current: HistoryWindow,
}

impl WindowSelector {
    pub fn current(&self) -> HistoryWindow {
        self.current
    }

    pub fn select(&mut self, window: HistoryWindow) {
        self.current = window;
    }

    pub fn reset(&mut self) {
        self.current = HistoryWindow::All;
    }

    pub fn is_selected(&self, window: HistoryWindow) -> bool {
        self.current == window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_unknown_paths_render_listing() {
        assert_eq!(ViewState::from_location("/", ""), ViewState::Listing);
        assert_eq!(ViewState::from_location("/deals/42", "?url=x"), ViewState::Listing);
        assert_eq!(ViewState::from_location("/price-history/", "?url=x"), ViewState::Listing);
    }

    #[test]
    fn price_history_reads_decoded_url() {
        let view = ViewState::from_location(
            "/price-history",
            "?url=https%3A%2F%2Fwww.amazon.com%2Fdp%2FB0863TXGM3%3Fth%3D1",
        );
        assert_eq!(
            view,
            ViewState::PriceHistory {
                product_url: Some("https://www.amazon.com/dp/B0863TXGM3?th=1".into())
            }
        );
    }

    #[test]
    fn missing_or_empty_url_is_none() {
        for search in ["", "?", "?url=", "?ref=home"] {
            assert_eq!(
                ViewState::from_location(PRICE_HISTORY_PATH, search),
                ViewState::PriceHistory { product_url: None }
            );
        }
    }

    #[test]
    fn malformed_percent_encoding_is_kept_verbatim() {
        assert_eq!(query_param("url=100%zz", "url").as_deref(), Some("100%zz"));
        assert_eq!(query_param("a=1&url=a+b", "url").as_deref(), Some("a b"));
    }

    #[test]
    fn href_roundtrips_through_location() {
        let url = "https://shop.example/item?id=7&color=black";
        let href = price_history_href(url);
        let (path, search) = href.split_once('?').unwrap();
        assert_eq!(path, PRICE_HISTORY_PATH);
        let view = ViewState::from_location(path, search);
        assert_eq!(view.href(), href);
        assert_eq!(ViewState::Listing.href(), "/");
    }

    #[test]
    fn window_selector_transitions() {
        let mut sel = WindowSelector::default();
        assert_eq!(sel.current(), HistoryWindow::All);
        sel.select(HistoryWindow::ThreeMonths);
        assert!(sel.is_selected(HistoryWindow::ThreeMonths));
        sel.select(HistoryWindow::OneMonth);
        assert_eq!(sel.current(), HistoryWindow::OneMonth);
        sel.reset();
        assert_eq!(sel.current(), HistoryWindow::All);
    }
}
