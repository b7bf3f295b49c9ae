//! Host appearance signal.
//!
//! An [`AppearanceSignal`] answers "does the host prefer dark?" and
//! notifies subscribers when that changes. Subscriptions are owned
//! [`Subscription`] handles; dropping one unregisters the listener.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::theme::Appearance;

/// Environment variable that forces the detected appearance.
pub const APPEARANCE_ENV: &str = "TWIN_SYSTEM_APPEARANCE";

/// Callback invoked with the new appearance on every change.
pub type AppearanceListener = Box<dyn Fn(Appearance)>;

/// Source of the host light/dark appearance.
pub trait AppearanceSignal {
    /// Current host appearance.
    fn current(&self) -> Appearance;

    /// Register `listener` for change notifications.
    fn subscribe(&self, listener: AppearanceListener) -> Subscription;
}

/// Handle for a registered listener. Unsubscribes exactly once, on
/// [`Subscription::cancel`] or drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap an unsubscribe action.
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Unsubscribe now.
    pub fn cancel(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

struct SignalInner {
    appearance: Appearance,
    next_id: u64,
    listeners: Vec<(u64, Rc<dyn Fn(Appearance)>)>,
}

/// Appearance signal driven by explicit calls to [`ManualSignal::set`].
///
/// Clones share state, so a host can keep one handle to push changes while
/// the store holds another.
#[derive(Clone)]
pub struct ManualSignal {
    inner: Rc<RefCell<SignalInner>>,
}

impl ManualSignal {
    pub fn new(initial: Appearance) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SignalInner {
                appearance: initial,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Signal seeded from [`detect_appearance`].
    pub fn detect() -> Self {
        Self::new(detect_appearance())
    }

    /// Change the appearance. Listeners run only if the value changed.
    pub fn set(&self, appearance: Appearance) {
        let listeners: Vec<Rc<dyn Fn(Appearance)>> = {
            let mut inner = self.inner.borrow_mut();
            if inner.appearance == appearance {
                return;
            }
            inner.appearance = appearance;
            inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };

        debug!(%appearance, listeners = listeners.len(), "System appearance changed");
        for listener in listeners {
            listener(appearance);
        }
    }

    /// Flip between light and dark. Returns the new appearance.
    pub fn toggle(&self) -> Appearance {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl AppearanceSignal for ManualSignal {
    fn current(&self) -> Appearance {
        self.inner.borrow().appearance
    }

    fn subscribe(&self, listener: AppearanceListener) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::from(listener)));
            id
        };

        let weak: Weak<RefCell<SignalInner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}

impl fmt::Debug for ManualSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualSignal")
            .field("appearance", &inner.appearance)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Detect the host appearance from the environment.
///
/// `TWIN_SYSTEM_APPEARANCE` wins, then the terminal's `COLORFGBG`.
/// Falls back to light.
pub fn detect_appearance() -> Appearance {
    if let Ok(raw) = std::env::var(APPEARANCE_ENV) {
        if let Ok(appearance) = raw.parse() {
            return appearance;
        }
        debug!(value = %raw, "Ignoring unrecognised {APPEARANCE_ENV}");
    }

    std::env::var("COLORFGBG")
        .ok()
        .and_then(|raw| appearance_from_colorfgbg(&raw))
        .unwrap_or_default()
}

/// Parse a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`).
///
/// Background indices 0-6 and 8 are the dark ANSI colours.
pub fn appearance_from_colorfgbg(raw: &str) -> Option<Appearance> {
    let bg: u8 = raw.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(Appearance::Dark),
        _ => Some(Appearance::Light),
    }
}
