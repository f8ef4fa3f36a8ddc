//! crates/logging/src/control.rs
//! Shared level state, the change notifier, and per-instance overrides.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use super::level::Level;

/// Callback invoked whenever the level held by a [`LevelControl`] changes.
pub type LevelChangeHandler = Box<dyn Fn(Level) + Send + Sync>;

/// Shared, runtime-mutable level threshold with change notification.
///
/// A `LevelControl` is the knob that gates emission across independently
/// constructed loggers: instances without an explicit override consult it on
/// every call, and backends that cache their own threshold can register a
/// change handler to stay synchronized. The level cell is an atomic, so
/// [`current`](Self::current) and [`set`](Self::set) are safe from any thread
/// without external locking; the handler registry is mutex-guarded because
/// registration is rare.
///
/// The control is an explicit value rather than hidden process state so tests
/// can construct a fresh instance per case. Production code normally shares
/// the process-wide instance returned by [`LevelControl::global`].
///
/// # Examples
///
/// ```
/// use logging::{Level, LevelControl};
///
/// let control = LevelControl::new(Level::Info);
/// assert_eq!(control.current(), Level::Info);
///
/// control.set(Level::Error);
/// assert_eq!(control.current(), Level::Error);
/// ```
pub struct LevelControl {
    level: AtomicU8,
    handlers: Mutex<Vec<LevelChangeHandler>>,
}

impl LevelControl {
    /// Creates a control holding `initial` with no registered handlers.
    #[must_use]
    pub const fn new(initial: Level) -> Self {
        Self {
            level: AtomicU8::new(initial as u8),
            handlers: Mutex::new(Vec::new()),
        }
    }

    /// Returns the process-wide control, created on first use with a default
    /// level of [`Level::Info`].
    #[must_use]
    pub fn global() -> Arc<Self> {
        static GLOBAL: OnceLock<Arc<LevelControl>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new(Level::Info))))
    }

    /// Atomically reads the current level. Never blocks.
    #[must_use]
    pub fn current(&self) -> Level {
        Level::from_repr(self.level.load(Ordering::Acquire)).unwrap_or(Level::None)
    }

    /// Atomically stores `level`, then invokes every registered handler with
    /// it, synchronously and in registration order.
    ///
    /// Handlers run on the calling thread; a slow handler stalls `set` for
    /// all callers. Handlers must not call [`set`](Self::set) or
    /// [`on_change`](Self::on_change) on the same control, since they run
    /// while the registry lock is held.
    pub fn set(&self, level: Level) {
        self.level.store(level as u8, Ordering::Release);
        let handlers = self
            .handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for handler in handlers.iter() {
            handler(level);
        }
    }

    /// Registers a handler to be invoked on every subsequent level change.
    ///
    /// The registry is append-only: there is no deduplication and no removal,
    /// so each backend should register once at initialization.
    pub fn on_change<F>(&self, handler: F)
    where
        F: Fn(Level) + Send + Sync + 'static,
    {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(handler));
    }
}

impl std::fmt::Debug for LevelControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelControl")
            .field("level", &self.current())
            .finish_non_exhaustive()
    }
}

/// Sets the process-wide level and notifies registered handlers.
pub fn set_global_level(level: Level) {
    LevelControl::global().set(level);
}

/// Reads the process-wide level.
#[must_use]
pub fn global_level() -> Level {
    LevelControl::global().current()
}

/// Registers a change handler on the process-wide control.
pub fn register_level_change_handler<F>(handler: F)
where
    F: Fn(Level) + Send + Sync + 'static,
{
    LevelControl::global().on_change(handler);
}

/// Per-logger level override cell.
///
/// Holds [`Level::None`] while unset, in which case the effective threshold
/// comes from the shared control. Backends store one of these per logger so
/// [`set_level`](crate::Logger::set_level) works through a shared reference.
#[derive(Debug)]
pub struct InstanceLevel(AtomicU8);

impl InstanceLevel {
    /// Creates an unset override (defers to the shared control).
    #[must_use]
    pub const fn unset() -> Self {
        Self::new(Level::None)
    }

    /// Creates an override holding `level`.
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self(AtomicU8::new(level as u8))
    }

    /// Returns the stored override, [`Level::None`] when unset.
    #[must_use]
    pub fn get(&self) -> Level {
        Level::from_repr(self.0.load(Ordering::Acquire)).unwrap_or(Level::None)
    }

    /// Stores a new override; [`Level::None`] reverts to deferring to the
    /// shared control.
    pub fn set(&self, level: Level) {
        self.0.store(level as u8, Ordering::Release);
    }

    /// Resolves the effective threshold: the override when set, otherwise the
    /// control's current level.
    #[must_use]
    pub fn effective(&self, control: &LevelControl) -> Level {
        match self.get() {
            Level::None => control.current(),
            explicit => explicit,
        }
    }
}

impl Default for InstanceLevel {
    fn default() -> Self {
        Self::unset()
    }
}
