//! crates/structured/src/logger.rs
//! Structured logger, its builder, and the cached-threshold notifier hookup.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use logging::{BuildError, InstanceLevel, Level, LevelControl, Logger};

use super::record::Record;

type SharedSink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Where the builder routes output.
enum Output {
    Stderr,
    File(PathBuf),
    Writer(Box<dyn Write + Send>),
}

/// Configures and constructs a [`StructuredLogger`].
///
/// Defaults: empty namespace, no level override, single-line JSON, stderr
/// destination, the process-wide [`LevelControl`].
///
/// # Examples
///
/// ```no_run
/// use structured::StructuredLogger;
///
/// let log = StructuredLogger::builder()
///     .namespace("app")
///     .pretty(true)
///     .build()?;
/// # Ok::<(), logging::BuildError>(())
/// ```
pub struct StructuredBuilder {
    namespace: String,
    level: Level,
    pretty: bool,
    output: Output,
    control: Option<Arc<LevelControl>>,
}

impl StructuredBuilder {
    /// Creates a builder with the defaults described on the type.
    #[must_use]
    pub fn new() -> Self {
        Self {
            namespace: String::new(),
            level: Level::None,
            pretty: false,
            output: Output::Stderr,
            control: None,
        }
    }

    /// Sets the namespace recorded in every emitted record.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets an instance-level override. [`Level::None`] (the default) defers
    /// to the cached global threshold.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Switches from single-line JSON to the multi-line human-oriented
    /// rendering.
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Redirects output to `path`, creating the file if absent and appending
    /// if present.
    #[must_use]
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Output::File(path.into());
        self
    }

    /// Routes output to an explicit writer.
    #[must_use]
    pub fn writer(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.output = Output::Writer(writer);
        self
    }

    /// Injects the level-control service the logger synchronizes with.
    /// Defaults to [`LevelControl::global`].
    #[must_use]
    pub fn control(mut self, control: Arc<LevelControl>) -> Self {
        self.control = Some(control);
        self
    }

    /// Builds the logger and registers its level-change handler.
    ///
    /// The handler keeps a cached threshold in sync with the control: after
    /// registration the logger never consults the control directly, it reads
    /// the cache the notifier refreshes. The handler holds only a weak
    /// reference to the cache, so once the logger and all its sub-loggers are
    /// dropped the registered closure degenerates to a no-op and the cache is
    /// freed.
    pub fn build(self) -> Result<StructuredLogger, BuildError> {
        let writer: Box<dyn Write + Send> = match self.output {
            Output::Stderr => Box::new(io::stderr()),
            Output::Writer(writer) => writer,
            Output::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&path)
                    .map_err(|source| BuildError::OpenLogFile { path, source })?;
                Box::new(file)
            }
        };

        let control = self.control.unwrap_or_else(LevelControl::global);
        let cached_global = Arc::new(AtomicU8::new(control.current() as u8));
        let cache = Arc::downgrade(&cached_global);
        control.on_change(move |level| {
            if let Some(cache) = cache.upgrade() {
                cache.store(level as u8, Ordering::Release);
            }
        });

        Ok(StructuredLogger {
            namespace: self.namespace,
            level: InstanceLevel::new(self.level),
            cached_global,
            sink: Arc::new(Mutex::new(writer)),
            pretty: self.pretty,
        })
    }
}

impl Default for StructuredBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Structured backend emitting one JSON record per visible call.
///
/// Records carry `timestamp`, `level`, `namespace`, and `message` fields.
/// The record vocabulary has no native TRACE level, so TRACE calls degrade
/// to `debug` records. In pretty mode records render multi-line for humans
/// instead of single-line for machines.
///
/// Unlike the console backend, this logger does not hold the
/// [`LevelControl`]: its builder registers a change handler that refreshes a
/// cached atomic threshold, so independently built loggers stay synchronized
/// with runtime level changes without a handle to each instance.
pub struct StructuredLogger {
    namespace: String,
    level: InstanceLevel,
    cached_global: Arc<AtomicU8>,
    sink: SharedSink,
    pretty: bool,
}

impl StructuredLogger {
    /// Returns a builder with default configuration.
    #[must_use]
    pub fn builder() -> StructuredBuilder {
        StructuredBuilder::new()
    }

    /// Returns the namespace the logger was constructed with.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn effective(&self) -> Level {
        match self.level.get() {
            Level::None => Level::from_repr(self.cached_global.load(Ordering::Acquire))
                .unwrap_or(Level::None),
            explicit => explicit,
        }
    }

    fn emit(&self, severity: Level, message: fmt::Arguments<'_>) {
        if matches!(severity, Level::None | Level::Disabled) {
            return;
        }
        if !Level::is_visible(severity, self.effective()) {
            return;
        }

        let record = Record::new(severity, &self.namespace, message.to_string());
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&record)
        } else {
            serde_json::to_string(&record)
        };
        let Ok(rendered) = rendered else { return };

        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(sink, "{rendered}");
        let _ = sink.flush();
    }
}

impl Logger for StructuredLogger {
    fn set_level(&self, level: Level) {
        self.level.set(level);
    }

    fn log(&self, severity: Level, message: fmt::Arguments<'_>) {
        self.emit(severity, message);
    }

    fn fatal(&self, message: fmt::Arguments<'_>) {
        self.emit(Level::Fatal, message);
        // Fatal never returns control to the caller; the exit happens even
        // when a DISABLED threshold suppressed the record above.
        process::exit(1);
    }

    fn sub_logger(&self, namespace: &str) -> Box<dyn Logger> {
        Box::new(Self {
            namespace: namespace.to_string(),
            level: InstanceLevel::unset(),
            cached_global: Arc::clone(&self.cached_global),
            sink: Arc::clone(&self.sink),
            pretty: self.pretty,
        })
    }
}

impl fmt::Debug for StructuredLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuredLogger")
            .field("namespace", &self.namespace)
            .field("level", &self.level.get())
            .field("pretty", &self.pretty)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = StructuredBuilder::new();
        assert!(builder.level.is_unset());
        assert!(!builder.pretty);
        assert!(matches!(builder.output, Output::Stderr));
    }

    #[test]
    fn cached_threshold_starts_at_control_level() {
        let control = Arc::new(LevelControl::new(Level::Warn));
        let log = StructuredLogger::builder()
            .writer(Box::new(Vec::<u8>::new()))
            .control(control)
            .build()
            .unwrap();
        assert_eq!(log.effective(), Level::Warn);
    }

    #[test]
    fn output_file_open_failure_is_a_build_error() {
        let result = StructuredLogger::builder()
            .output_file("/nonexistent-dir-for-lantern-tests/app.json")
            .build();
        assert!(result.is_err());
    }
}
