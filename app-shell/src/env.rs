use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use web_sys::Storage;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PersistenceError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write preference {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Host surface the shell reads ambient settings from and writes preferences to.
pub trait Environment {
    fn read_preference(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    fn write_preference(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Ambient color-scheme signal; `None` when the host has none (headless, SSR).
    fn prefers_dark_scheme(&self) -> Option<bool>;

    /// Apply the global dark/light presentation.
    fn apply_color_scheme(&self, _dark: bool) {}
}

/// In-process environment used for SSR and tests.
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    prefs: RefCell<HashMap<String, String>>,
    prefers_dark: Option<bool>,
    unavailable: bool,
    applied: RefCell<Option<bool>>,
}

impl MemoryEnvironment {
    /// No stored preferences and no ambient signal.
    pub fn headless() -> Self {
        Self::default()
    }

    pub fn with_ambient(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Some(prefers_dark),
            ..Self::default()
        }
    }

    /// Storage that fails every read and write.
    pub fn unavailable(prefers_dark: Option<bool>) -> Self {
        Self {
            prefers_dark,
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.prefs.borrow().get(key).cloned()
    }

    /// Last scheme passed to [`Environment::apply_color_scheme`].
    pub fn applied_scheme(&self) -> Option<bool> {
        *self.applied.borrow()
    }
}

impl Environment for MemoryEnvironment {
    fn read_preference(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        if self.unavailable {
            return Err(PersistenceError::Unavailable("memory store disabled".into()));
        }
        Ok(self.stored(key))
    }

    fn write_preference(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.unavailable {
            return Err(PersistenceError::Unavailable("memory store disabled".into()));
        }
        self.prefs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn prefers_dark_scheme(&self) -> Option<bool> {
        self.prefers_dark
    }

    fn apply_color_scheme(&self, dark: bool) {
        *self.applied.borrow_mut() = Some(dark);
    }
}

// ---------- Browser: localStorage + matchMedia ------------------------------

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<Storage, PersistenceError> {
    let window =
        web_sys::window().ok_or_else(|| PersistenceError::Unavailable("no window".into()))?;
    window
        .local_storage()
        .map_err(|e| PersistenceError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| PersistenceError::Unavailable("localStorage unavailable".into()))
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEnvironment;

#[cfg(target_arch = "wasm32")]
impl Environment for BrowserEnvironment {
    fn read_preference(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| PersistenceError::Unavailable(format!("{e:?}")))
    }

    fn write_preference(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| PersistenceError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn prefers_dark_scheme(&self) -> Option<bool> {
        web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|mq| mq.matches())
    }

    fn apply_color_scheme(&self, dark: bool) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let res = if dark {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if let Err(err) = res {
            web_sys::console::error_1(&err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let env = MemoryEnvironment::headless();
        assert_eq!(env.read_preference("k"), Ok(None));
        env.write_preference("k", "v").unwrap();
        assert_eq!(env.read_preference("k"), Ok(Some("v".into())));
        assert_eq!(env.prefers_dark_scheme(), None);
    }

    #[test]
    fn unavailable_store_errors() {
        let env = MemoryEnvironment::unavailable(Some(true));
        assert!(matches!(
            env.write_preference("k", "v"),
            Err(PersistenceError::Unavailable(_))
        ));
        assert!(env.read_preference("k").is_err());
        assert_eq!(env.prefers_dark_scheme(), Some(true));
    }
}
