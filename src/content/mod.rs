//! Alias-keyed cache of loaded resources with `.meta` sidecar metadata.
//!
//! A [`Content<T>`] maps string aliases to shared instances of `T`. Each
//! [`load`](Content::load) resolves `prefix + path`, builds the value
//! through [`Load`], and reads `prefix + path + ".meta"` (see the format in
//! [`Content::metadata`]). Loading under an alias that is already taken
//! replaces the old entry and its metadata.
//!
//! Reads take a shared lock. Loads and unloads hold an upgradable read
//! while they construct the value and notify listeners, and only upgrade
//! to an exclusive lock to swap the map entry.
//!
//! ```no_run
//! use std::path::Path;
//! use vlk_common::content::{Content, Load};
//!
//! struct Text(String);
//!
//! impl Load for Text {
//!     type Error = std::io::Error;
//!     fn load(path: &Path) -> Result<Self, Self::Error> {
//!         std::fs::read_to_string(path).map(Text)
//!     }
//! }
//!
//! let cache = Content::<Text>::new();
//! if cache.load("greeting.txt", "greeting") {
//!     println!("{}", cache.get("greeting").unwrap().0);
//!     println!("{:?}", cache.metadata("greeting", "language"));
//! }
//! ```

mod meta;

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, warn};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use meta::Metadata;

/// The prefix a new [`Content`] resolves paths against.
pub const DEFAULT_PREFIX: &str = "content/";

/// Construction of a cached value from a file path.
pub trait Load: Sized {
    type Error: fmt::Display;

    fn load(path: &Path) -> Result<Self, Self::Error>;
}

/// Notification sent to listeners registered with [`Content::subscribe`].
#[derive(Debug)]
pub enum ContentEvent<'a, T> {
    /// A value was stored under `alias`.
    Loaded { alias: &'a str, content: &'a Arc<T> },
    /// The value under `alias` is about to be dropped from the cache, either
    /// by an unload or because a reload replaces it.
    Unloaded { alias: &'a str, content: &'a Arc<T> },
}

type Listener<T> = Box<dyn Fn(&ContentEvent<'_, T>) + Send + Sync>;

/// Errors from [`Content`] configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The prefix does not end in `/`. Carries the rejected prefix.
    InvalidPrefix(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::InvalidPrefix(p) => {
                write!(f, "content prefix {p:?} must end in a forward slash")
            }
        }
    }
}

impl std::error::Error for ContentError {}

struct Entry<T> {
    value: Arc<T>,
    metadata: Metadata,
}

struct State<T> {
    prefix: String,
    entries: HashMap<String, Entry<T>>,
}

/// Thread-safe cache of `T` values keyed by alias.
///
/// Listener callbacks run while the cache holds a read lock: they may call
/// [`get`](Self::get) and [`metadata`](Self::metadata), but must not load,
/// unload, or subscribe on the same cache.
pub struct Content<T> {
    state: RwLock<State<T>>,
    listeners: RwLock<Vec<Listener<T>>>,
}

impl<T> Default for Content<T> {
    fn default() -> Self {
        Self {
            state: RwLock::new(State {
                prefix: DEFAULT_PREFIX.to_owned(),
                entries: HashMap::new(),
            }),
            listeners: RwLock::new(Vec::new()),
        }
    }
}

impl<T> fmt::Debug for Content<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Content")
            .field("prefix", &state.prefix)
            .field("aliases", &state.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Content<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The directory prefix prepended to every load path.
    pub fn prefix(&self) -> String {
        self.state.read().prefix.clone()
    }

    /// Replace the prefix. It must end in `/`; otherwise the current prefix
    /// is kept and an error returned.
    pub fn set_prefix(&self, prefix: impl Into<String>) -> Result<(), ContentError> {
        let prefix = prefix.into();
        if !prefix.ends_with('/') {
            return Err(ContentError::InvalidPrefix(prefix));
        }
        self.state.write().prefix = prefix;
        Ok(())
    }

    /// Register a callback for load and unload notifications.
    pub fn subscribe(&self, listener: impl Fn(&ContentEvent<'_, T>) + Send + Sync + 'static) {
        self.listeners.write().push(Box::new(listener));
    }

    fn emit(&self, event: ContentEvent<'_, T>) {
        for listener in self.listeners.read().iter() {
            listener(&event);
        }
    }

    /// The value stored under `alias`.
    pub fn get(&self, alias: &str) -> Option<Arc<T>> {
        self.state.read().entries.get(alias).map(|e| Arc::clone(&e.value))
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.state.read().entries.contains_key(alias)
    }

    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().entries.is_empty()
    }

    /// Metadata value for `key` under `alias`, if both exist.
    ///
    /// Metadata comes from the `.meta` file next to the loaded path: one
    /// `key=value` per line, `#` and `!` lines are comments, and lines with
    /// no `=`, an empty key or an empty value are skipped. When a key is
    /// repeated the first occurrence wins.
    pub fn metadata(&self, alias: &str, key: &str) -> Option<String> {
        let state = self.state.read();
        let entry = state.entries.get(alias)?;
        entry
            .metadata
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    /// Drop the value under `alias` and its metadata. Returns `false` if
    /// nothing was stored under it.
    pub fn unload(&self, alias: &str) -> bool {
        let state = self.state.upgradable_read();
        let Some(entry) = state.entries.get(alias) else {
            return false;
        };
        self.emit(ContentEvent::Unloaded {
            alias,
            content: &entry.value,
        });

        let mut state = RwLockUpgradableReadGuard::upgrade(state);
        state.entries.remove(alias);
        debug!("unloaded content {alias:?}");
        true
    }
}

impl<T: Load> Content<T> {
    /// Build a `T` from `prefix + path` and store it under `alias`.
    ///
    /// Returns `false`, leaving the cache untouched, if construction fails.
    /// An existing entry under `alias` is announced as unloaded, then
    /// replaced together with its metadata.
    pub fn load(&self, path: &str, alias: &str) -> bool {
        let state = self.state.upgradable_read();
        let full = PathBuf::from(format!("{}{path}", state.prefix));

        let value = match T::load(&full) {
            Ok(value) => Arc::new(value),
            Err(e) => {
                warn!("failed to load content {alias:?} from {}: {e}", full.display());
                return false;
            }
        };
        let metadata = meta::read(&PathBuf::from(format!("{}{path}.meta", state.prefix)));

        if let Some(old) = state.entries.get(alias) {
            self.emit(ContentEvent::Unloaded {
                alias,
                content: &old.value,
            });
            debug!("replacing content {alias:?} with {}", full.display());
        } else {
            debug!("loaded content {alias:?} from {}", full.display());
        }

        let mut state = RwLockUpgradableReadGuard::upgrade(state);
        state.entries.insert(
            alias.to_owned(),
            Entry {
                value: Arc::clone(&value),
                metadata,
            },
        );
        drop(state);

        self.emit(ContentEvent::Loaded {
            alias,
            content: &value,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Loads succeed for any path containing "ok"; the value is the path.
    #[derive(Debug)]
    struct Stub(PathBuf);

    impl Load for Stub {
        type Error = &'static str;
        fn load(path: &Path) -> Result<Self, Self::Error> {
            if path.to_string_lossy().contains("ok") {
                Ok(Stub(path.to_owned()))
            } else {
                Err("rejected")
            }
        }
    }

    #[test]
    fn default_prefix() {
        assert_eq!(Content::<Stub>::new().prefix(), "content/");
    }

    #[test]
    fn invalid_prefix_keeps_current() {
        let cache = Content::<Stub>::new();
        assert_eq!(
            cache.set_prefix("invalid prefix"),
            Err(ContentError::InvalidPrefix("invalid prefix".into()))
        );
        assert_eq!(cache.prefix(), "content/");
        assert!(cache.set_prefix("").is_err());
        cache.set_prefix("assets/").unwrap();
        assert_eq!(cache.prefix(), "assets/");
    }

    #[test]
    fn load_resolves_against_prefix() {
        let cache = Content::<Stub>::new();
        assert!(cache.load("ok.bin", "a"));
        assert_eq!(cache.get("a").unwrap().0, PathBuf::from("content/ok.bin"));
        assert!(cache.contains("a"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failed_load_leaves_cache_untouched() {
        let cache = Content::<Stub>::new();
        assert!(cache.load("ok.bin", "a"));
        assert!(!cache.load("bad.bin", "a"));
        assert_eq!(cache.get("a").unwrap().0, PathBuf::from("content/ok.bin"));
        assert!(!cache.load("bad.bin", "b"));
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn unload() {
        let cache = Content::<Stub>::new();
        assert!(cache.load("ok.bin", "a"));
        assert!(cache.unload("a"));
        assert!(!cache.unload("a"));
        assert!(cache.is_empty());
        assert_eq!(cache.metadata("a", "anything"), None);
    }

    #[test]
    fn events_in_order() {
        let cache = Content::<Stub>::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        cache.subscribe(move |event| {
            let line = match event {
                ContentEvent::Loaded { alias, .. } => format!("load {alias}"),
                ContentEvent::Unloaded { alias, .. } => format!("unload {alias}"),
            };
            sink.lock().unwrap().push(line);
        });

        cache.load("ok.1", "a");
        cache.load("ok.2", "a");
        cache.load("nope", "a");
        cache.unload("a");
        assert_eq!(
            *log.lock().unwrap(),
            vec!["load a", "unload a", "load a", "unload a"]
        );
    }

    #[test]
    fn listeners_may_read_the_cache() {
        let cache = Arc::new(Content::<Stub>::new());
        let seen = Arc::new(AtomicUsize::new(0));
        let (reader, counter) = (Arc::clone(&cache), Arc::clone(&seen));
        cache.subscribe(move |event| {
            if let ContentEvent::Unloaded { alias, .. } = event {
                // still present while the unload is announced
                assert!(reader.get(alias).is_some());
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        cache.load("ok", "a");
        cache.unload("a");
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn error_display() {
        let e = ContentError::InvalidPrefix("x".into());
        assert_eq!(e.to_string(), "content prefix \"x\" must end in a forward slash");
    }
}
