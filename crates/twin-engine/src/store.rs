//! Theme preference store.
//!
//! [`ThemeStore`] owns the user's [`ThemePreference`], keeps the
//! [`ResolvedTheme`] in step with it, writes every change through to
//! [`PreferenceStorage`] and pushes the resolved theme to a
//! [`ThemeTarget`]. While the preference is `auto` it holds a single
//! subscription to the [`AppearanceSignal`] and re-resolves on each
//! change; in every other state it holds none.
//!
//! The store is a plain value handed to whoever renders. Tests build as
//! many isolated instances as they like.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::signal::{AppearanceSignal, Subscription};
use crate::storage::PreferenceStorage;
use crate::target::ThemeTarget;
use crate::theme::{resolve, Appearance, ResolvedTheme, ThemeError, ThemePreference};

/// Storage key the preference lives under.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

#[derive(Debug)]
struct ThemeState {
    preference: ThemePreference,
    resolved: ResolvedTheme,
}

/// Session-lifetime theme state with persistence and system reactivity.
pub struct ThemeStore {
    state: Rc<RefCell<ThemeState>>,
    storage: Box<dyn PreferenceStorage>,
    signal: Rc<dyn AppearanceSignal>,
    target: Rc<dyn ThemeTarget>,
    key: String,
    subscription: Option<Subscription>,
    persistence_ok: bool,
}

impl ThemeStore {
    /// Open the store under [`DEFAULT_STORAGE_KEY`].
    pub fn new(
        storage: Box<dyn PreferenceStorage>,
        signal: Rc<dyn AppearanceSignal>,
        target: Rc<dyn ThemeTarget>,
    ) -> Self {
        Self::with_key(DEFAULT_STORAGE_KEY, storage, signal, target)
    }

    /// Open the store under a custom storage key.
    ///
    /// Reads the persisted preference once, falling back to `light` when
    /// it is missing or unreadable, then resolves and applies it.
    pub fn with_key(
        key: impl Into<String>,
        storage: Box<dyn PreferenceStorage>,
        signal: Rc<dyn AppearanceSignal>,
        target: Rc<dyn ThemeTarget>,
    ) -> Self {
        Self::open(key.into(), storage, signal, target, true)
    }

    /// Open the store without writing the default back on first run.
    ///
    /// For callers that only look at the preference: a missing entry
    /// still reads as `light`, but storage is left as found until the
    /// preference is explicitly changed.
    pub fn inspect(
        key: impl Into<String>,
        storage: Box<dyn PreferenceStorage>,
        signal: Rc<dyn AppearanceSignal>,
        target: Rc<dyn ThemeTarget>,
    ) -> Self {
        Self::open(key.into(), storage, signal, target, false)
    }

    fn open(
        key: String,
        storage: Box<dyn PreferenceStorage>,
        signal: Rc<dyn AppearanceSignal>,
        target: Rc<dyn ThemeTarget>,
        write_default: bool,
    ) -> Self {
        let (preference, needs_default) = load_preference(storage.as_ref(), &key);

        let mut store = Self {
            state: Rc::new(RefCell::new(ThemeState {
                preference,
                resolved: ResolvedTheme::default(),
            })),
            storage,
            signal,
            target,
            key,
            subscription: None,
            persistence_ok: true,
        };

        if write_default && needs_default {
            store.persist(preference);
        }
        store.sync_subscription();
        store.apply();

        debug!(%preference, resolved = %store.resolved(), "Theme store initialised");
        store
    }

    /// The stored preference.
    pub fn preference(&self) -> ThemePreference {
        self.state.borrow().preference
    }

    /// The theme currently applied.
    pub fn resolved(&self) -> ResolvedTheme {
        self.state.borrow().resolved
    }

    /// Set, persist, resolve and apply a new preference.
    pub fn set_preference(&mut self, next: ThemePreference) {
        self.state.borrow_mut().preference = next;
        self.persist(next);
        self.sync_subscription();
        self.apply();

        debug!(preference = %next, resolved = %self.resolved(), "Theme preference set");
    }

    /// Parse and set a preference from untyped input.
    ///
    /// Unknown values are rejected and leave the store untouched.
    pub fn set_preference_str(&mut self, raw: &str) -> Result<(), ThemeError> {
        let next = raw.parse()?;
        self.set_preference(next);
        Ok(())
    }

    /// Advance to the next preference in cycle order.
    pub fn cycle_preference(&mut self) -> ThemePreference {
        let next = self.preference().next();
        self.set_preference(next);
        next
    }

    /// Whether the store is currently subscribed to the system signal.
    pub fn is_following_system(&self) -> bool {
        self.subscription.is_some()
    }

    /// False if the most recent write to storage failed.
    pub fn persistence_ok(&self) -> bool {
        self.persistence_ok
    }

    /// Current host appearance as reported by the signal.
    pub fn system_appearance(&self) -> Appearance {
        self.signal.current()
    }

    /// Key the preference is stored under.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    fn persist(&mut self, preference: ThemePreference) {
        match self.storage.write(&self.key, preference.as_str()) {
            Ok(()) => self.persistence_ok = true,
            Err(e) => {
                warn!(key = %self.key, %preference, error = %e, "Failed to persist theme preference");
                self.persistence_ok = false;
            }
        }
    }

    fn apply(&self) {
        let preference = self.preference();
        let appearance = match preference {
            ThemePreference::Auto => self.signal.current(),
            _ => Appearance::default(),
        };
        let resolved = resolve(preference, appearance);
        self.state.borrow_mut().resolved = resolved;
        self.target.apply(resolved);
    }

    fn sync_subscription(&mut self) {
        let wants = self.preference() == ThemePreference::Auto;
        if wants && self.subscription.is_none() {
            self.subscription = Some(self.subscribe());
            debug!("Following system appearance");
        } else if !wants {
            if let Some(subscription) = self.subscription.take() {
                subscription.cancel();
                debug!("Stopped following system appearance");
            }
        }
    }

    fn subscribe(&self) -> Subscription {
        let state = Rc::downgrade(&self.state);
        let target = Rc::clone(&self.target);

        self.signal.subscribe(Box::new(move |appearance| {
            let Some(state) = state.upgrade() else {
                return;
            };
            let resolved = {
                let mut state = state.borrow_mut();
                if state.preference != ThemePreference::Auto {
                    return;
                }
                state.resolved = resolve(ThemePreference::Auto, appearance);
                state.resolved
            };
            target.apply(resolved);
            debug!(%appearance, %resolved, "Re-resolved theme after system change");
        }))
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ThemeStore")
            .field("preference", &state.preference)
            .field("resolved", &state.resolved)
            .field("key", &self.key)
            .field("following_system", &self.subscription.is_some())
            .field("persistence_ok", &self.persistence_ok)
            .finish_non_exhaustive()
    }
}

/// Returns the preference to start with and whether it should be written
/// back because the stored entry was absent or corrupt.
fn load_preference(storage: &dyn PreferenceStorage, key: &str) -> (ThemePreference, bool) {
    match storage.read(key) {
        Ok(Some(raw)) => match raw.parse() {
            Ok(preference) => (preference, false),
            Err(e) => {
                warn!(%key, error = %e, "Stored theme preference is corrupt, using default");
                (ThemePreference::default(), true)
            }
        },
        Ok(None) => (ThemePreference::default(), true),
        Err(e) => {
            warn!(%key, error = %e, "Failed to read theme preference, using default");
            (ThemePreference::default(), false)
        }
    }
}
