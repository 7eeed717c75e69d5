#[cfg(target_arch = "wasm32")]
use js_sys::Reflect;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

pub const SUBMIT_DELAY_VAR: &str = "DEALFINDER_SUBMIT_DELAY_MS";
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1_000;

#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    pub brand: String,
    /// Simulated lookup latency before the price-history view opens.
    pub submit_delay_ms: u32,
    /// Open the price-history view in a new tab instead of navigating in place.
    pub open_in_new_tab: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            brand: "DealFinder".into(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            open_in_new_tab: true,
        }
    }
}

impl UiConfig {
    /// Defaults, with overrides from the host (a JS global in the browser, an
    /// environment variable natively).
    pub fn from_host() -> Self {
        Self {
            submit_delay_ms: parse_delay(read_setting(SUBMIT_DELAY_VAR).as_deref()),
            ..Self::default()
        }
    }
}

fn parse_delay(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_SUBMIT_DELAY_MS)
}

#[cfg(target_arch = "wasm32")]
fn read_setting(key: &str) -> Option<String> {
    let value = Reflect::get(&js_sys::global(), &JsValue::from_str(key)).ok()?;
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| (n as u32).to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_setting(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_falls_back_on_bad_input() {
        assert_eq!(parse_delay(None), DEFAULT_SUBMIT_DELAY_MS);
        assert_eq!(parse_delay(Some("soon")), DEFAULT_SUBMIT_DELAY_MS);
        assert_eq!(parse_delay(Some(" 250 ")), 250);
    }

    #[test]
    fn defaults_match_tracker_behavior() {
        let cfg = UiConfig::default();
        assert_eq!(cfg.submit_delay_ms, 1_000);
        assert!(cfg.open_in_new_tab);
        assert_eq!(cfg.brand, "DealFinder");
    }
}
