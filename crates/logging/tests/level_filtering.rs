//! Integration tests for level filtering and global level propagation.
//!
//! These tests exercise the facade pieces the way a backend consumes them: a
//! small recording logger resolves its threshold through [`InstanceLevel`]
//! and a shared [`LevelControl`], and the tests verify the visibility rule,
//! global tracking, instance overrides, and notifier ordering.

use std::fmt;
use std::sync::{Arc, Mutex};

use logging::{
    debug_log, error_log, info_log, trace_log, warn_log, CallSite, InstanceLevel, Level,
    LevelControl, Logger,
};

/// Minimal backend that records visible messages instead of writing them.
struct RecordingLogger {
    namespace: String,
    level: InstanceLevel,
    control: Arc<LevelControl>,
    emitted: Arc<Mutex<Vec<String>>>,
}

impl RecordingLogger {
    fn new(namespace: &str, control: Arc<LevelControl>) -> Self {
        Self {
            namespace: namespace.to_string(),
            level: InstanceLevel::unset(),
            control,
            emitted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn emitted(&self) -> Vec<String> {
        self.emitted.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn set_level(&self, level: Level) {
        self.level.set(level);
    }

    fn log(&self, severity: Level, message: fmt::Arguments<'_>) {
        if matches!(severity, Level::None | Level::Disabled) {
            return;
        }
        let threshold = self.level.effective(&self.control);
        if !Level::is_visible(severity, threshold) {
            return;
        }
        self.emitted
            .lock()
            .unwrap()
            .push(format!("[{}] [{}] {message}", severity, self.namespace));
    }

    fn fatal(&self, message: fmt::Arguments<'_>) {
        // The recording backend never terminates; it only records, which is
        // exactly what these filtering tests need.
        self.log(Level::Fatal, message);
    }

    fn sub_logger(&self, namespace: &str) -> Box<dyn Logger> {
        Box::new(Self {
            namespace: namespace.to_string(),
            level: InstanceLevel::unset(),
            control: Arc::clone(&self.control),
            emitted: Arc::clone(&self.emitted),
        })
    }
}

// ============================================================================
// Visibility Matrix
// ============================================================================

/// Verifies a WARN threshold admits WARN and more severe, suppresses the rest.
#[test]
fn warn_threshold_filters_verbose_severities() {
    let control = Arc::new(LevelControl::new(Level::Warn));
    let log = RecordingLogger::new("test", control);

    log.fatal(format_args!("fatal"));
    error_log!(log, "error");
    warn_log!(log, "warn");
    info_log!(log, "info");
    debug_log!(log, "debug");
    trace_log!(log, "trace");

    let lines = log.emitted();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("[FATAL]"));
    assert!(lines[1].starts_with("[ERROR]"));
    assert!(lines[2].starts_with("[WARN]"));
}

/// Verifies emission happens iff `message <= threshold` for every pair.
#[test]
fn visibility_holds_for_every_pair() {
    let severities = [
        Level::Fatal,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    for threshold in severities {
        let control = Arc::new(LevelControl::new(threshold));
        let log = RecordingLogger::new("matrix", control);

        for severity in severities {
            log.log(severity, format_args!("m"));
        }

        let expected = severities.iter().filter(|s| **s <= threshold).count();
        assert_eq!(log.emitted().len(), expected, "threshold {threshold}");
    }
}

/// Verifies DISABLED suppresses every severity including FATAL's output.
#[test]
fn disabled_suppresses_everything() {
    let control = Arc::new(LevelControl::new(Level::Disabled));
    let log = RecordingLogger::new("test", control);

    log.fatal(format_args!("fatal"));
    error_log!(log, "error");
    trace_log!(log, "trace");

    assert!(log.emitted().is_empty());
}

// ============================================================================
// Global Level Tracking
// ============================================================================

/// Verifies an un-overridden instance tracks global changes made after its
/// construction.
#[test]
fn instance_without_override_tracks_control() {
    let control = Arc::new(LevelControl::new(Level::Debug));
    let log = RecordingLogger::new("test", Arc::clone(&control));

    info_log!(log, "visible before change");
    control.set(Level::Error);
    info_log!(log, "suppressed after change");

    let lines = log.emitted();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("visible before change"));
}

/// Verifies an instance with an explicit override ignores global changes.
#[test]
fn instance_override_ignores_control() {
    let control = Arc::new(LevelControl::new(Level::Info));
    let log = RecordingLogger::new("test", Arc::clone(&control));

    log.set_level(Level::Debug);
    control.set(Level::Disabled);
    debug_log!(log, "still emitted");

    assert_eq!(log.emitted().len(), 1);
}

/// Verifies reverting the override with NONE defers to the control again.
#[test]
fn override_reverts_with_none() {
    let control = Arc::new(LevelControl::new(Level::Error));
    let log = RecordingLogger::new("test", Arc::clone(&control));

    log.set_level(Level::Trace);
    trace_log!(log, "override admits trace");
    assert_eq!(log.emitted().len(), 1);

    log.set_level(Level::None);
    trace_log!(log, "control suppresses trace");
    assert_eq!(log.emitted().len(), 1);
}

// ============================================================================
// Notifier Contract
// ============================================================================

/// Verifies set invokes every handler exactly once, in registration order,
/// each receiving the new level.
#[test]
fn notifier_fires_in_registration_order() {
    let control = LevelControl::new(Level::Info);
    let calls = Arc::new(Mutex::new(Vec::new()));

    for id in ["first", "second", "third"] {
        let calls = Arc::clone(&calls);
        control.on_change(move |level| calls.lock().unwrap().push((id, level)));
    }

    control.set(Level::Warn);

    assert_eq!(
        calls.lock().unwrap().clone(),
        vec![
            ("first", Level::Warn),
            ("second", Level::Warn),
            ("third", Level::Warn),
        ],
    );
}

/// Verifies handlers registered later still see subsequent changes.
#[test]
fn late_registration_sees_later_changes() {
    let control = LevelControl::new(Level::Info);
    control.set(Level::Debug);

    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    control.on_change(move |level| sink.lock().unwrap().push(level));

    control.set(Level::Trace);
    assert_eq!(calls.lock().unwrap().clone(), vec![Level::Trace]);
}

// ============================================================================
// Call-Site Capture
// ============================================================================

/// Backend that records the site attached to each call.
struct SiteRecorder(Arc<Mutex<Vec<Option<CallSite>>>>);

impl Logger for SiteRecorder {
    fn set_level(&self, _level: Level) {}

    fn log(&self, _severity: Level, _message: fmt::Arguments<'_>) {
        self.0.lock().unwrap().push(None);
    }

    fn fatal(&self, _message: fmt::Arguments<'_>) {
        self.0.lock().unwrap().push(None);
    }

    fn log_at(&self, _severity: Level, site: Option<CallSite>, _message: fmt::Arguments<'_>) {
        self.0.lock().unwrap().push(site);
    }

    fn fatal_at(&self, site: Option<CallSite>, _message: fmt::Arguments<'_>) {
        self.0.lock().unwrap().push(site);
    }

    fn sub_logger(&self, _namespace: &str) -> Box<dyn Logger> {
        Box::new(Self(Arc::clone(&self.0)))
    }
}

/// Verifies the macros tag each call with this file, while direct trait
/// calls carry no site.
#[test]
fn macros_capture_the_call_site() {
    let sites = Arc::new(Mutex::new(Vec::new()));
    let log = SiteRecorder(Arc::clone(&sites));

    info_log!(log, "tagged");
    log.info(format_args!("untagged"));

    let sites = sites.lock().unwrap();
    assert_eq!(sites.len(), 2);
    let tagged = sites[0].expect("macro call carries a site");
    assert_eq!(tagged.short_file(), "level_filtering.rs");
    assert!(tagged.line > 0);
    assert!(sites[1].is_none());
}

// ============================================================================
// Sub-Logger Derivation
// ============================================================================

/// Verifies a child shares destination context but owns its override.
#[test]
fn sub_logger_is_independent() {
    let control = Arc::new(LevelControl::new(Level::Info));
    let parent = RecordingLogger::new("parent", Arc::clone(&control));
    let child = parent.sub_logger("child");

    child.set_level(Level::Trace);
    trace_log!(child, "child sees trace");
    trace_log!(parent, "parent does not");

    let lines = parent.emitted();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("[child]"));
}
