//! crates/console/src/logger.rs
//! Console logger and its builder.

use std::fmt::{self, Write as _};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::{Arc, Mutex, PoisonError};

use logging::{BuildError, CallSite, InstanceLevel, Level, LevelControl, Logger};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use super::colour;
use super::flags::PrefixFlags;

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]/[month]/[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]:[second]");

/// Width the level token is padded to so namespaces line up.
const LEVEL_WIDTH: usize = 5;

type SharedSink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Where the builder routes output.
enum Output {
    Stdout,
    File(PathBuf),
    Writer(Box<dyn Write + Send>),
}

/// Configures and constructs a [`ConsoleLogger`].
///
/// Defaults: empty namespace, no level override, plain (uncoloured) output,
/// date+time prefix, stdout destination, the process-wide
/// [`LevelControl`].
///
/// # Examples
///
/// ```no_run
/// use console::{ConsoleLogger, PrefixFlags};
/// use logging::Level;
///
/// let log = ConsoleLogger::builder()
///     .namespace("app")
///     .colour(true)
///     .prefix(PrefixFlags::NONE)
///     .level(Level::Debug)
///     .build()?;
/// # Ok::<(), logging::BuildError>(())
/// ```
pub struct ConsoleBuilder {
    namespace: String,
    level: Level,
    colour: bool,
    prefix: PrefixFlags,
    output: Output,
    control: Option<Arc<LevelControl>>,
}

impl ConsoleBuilder {
    /// Creates a builder with the defaults described on the type.
    #[must_use]
    pub fn new() -> Self {
        Self {
            namespace: String::new(),
            level: Level::None,
            colour: false,
            prefix: PrefixFlags::default(),
            output: Output::Stdout,
            control: None,
        }
    }

    /// Sets the namespace label prefixed into every line.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets an instance-level override. [`Level::None`] (the default) defers
    /// to the shared control.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enables or disables ANSI colour on the level token.
    #[must_use]
    pub fn colour(mut self, colour: bool) -> Self {
        self.colour = colour;
        self
    }

    /// Selects which prefixes precede the level token.
    #[must_use]
    pub fn prefix(mut self, prefix: PrefixFlags) -> Self {
        self.prefix = prefix;
        self
    }

    /// Redirects output to `path`, creating the file if absent and appending
    /// if present. Open failure surfaces from [`build`](Self::build) as
    /// [`BuildError::OpenLogFile`].
    #[must_use]
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Output::File(path.into());
        self
    }

    /// Routes output to an explicit writer. Used by tests and embedders that
    /// own the destination.
    #[must_use]
    pub fn writer(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.output = Output::Writer(writer);
        self
    }

    /// Injects the level-control service consulted by un-overridden loggers.
    /// Defaults to [`LevelControl::global`].
    #[must_use]
    pub fn control(mut self, control: Arc<LevelControl>) -> Self {
        self.control = Some(control);
        self
    }

    /// Builds the logger, opening the redirect file when one was requested.
    pub fn build(self) -> Result<ConsoleLogger, BuildError> {
        let writer: Box<dyn Write + Send> = match self.output {
            Output::Stdout => Box::new(io::stdout()),
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

        Ok(ConsoleLogger {
            namespace: self.namespace,
            level: InstanceLevel::new(self.level),
            control: self.control.unwrap_or_else(LevelControl::global),
            sink: Arc::new(Mutex::new(writer)),
            prefix: self.prefix,
            colour: self.colour,
        })
    }
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Console backend emitting `[LEVEL] [namespace] message` lines.
///
/// [`PrefixFlags`] select what precedes the level token: the UTC date, the
/// UTC time, and the call site of the originating macro invocation
/// (`file.rs:line`).
///
/// Writes are serialized through a mutex around the sink, which sub-loggers
/// share, so concurrent emission from multiple loggers never interleaves
/// within a line. Emission is best-effort: write failures after construction
/// are swallowed.
///
/// In colour mode the level token is wrapped in an ANSI escape, mapped
/// FATAL/ERROR to red, WARN to yellow, INFO to green; DEBUG and TRACE stay
/// uncoloured. TRACE is a native severity on this backend.
pub struct ConsoleLogger {
    namespace: String,
    level: InstanceLevel,
    control: Arc<LevelControl>,
    sink: SharedSink,
    prefix: PrefixFlags,
    colour: bool,
}

impl ConsoleLogger {
    /// Returns a builder with default configuration.
    #[must_use]
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::new()
    }

    /// Returns the namespace the logger was constructed with.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn emit(&self, severity: Level, site: Option<CallSite>, message: fmt::Arguments<'_>) {
        if matches!(severity, Level::None | Level::Disabled) {
            return;
        }
        let threshold = self.level.effective(&self.control);
        if !Level::is_visible(severity, threshold) {
            return;
        }

        let mut line = String::new();
        if self.prefix.contains(PrefixFlags::DATE) || self.prefix.contains(PrefixFlags::TIME) {
            let now = OffsetDateTime::now_utc();
            if self.prefix.contains(PrefixFlags::DATE) {
                if let Ok(date) = now.format(&DATE_FORMAT) {
                    line.push_str(&date);
                    line.push(' ');
                }
            }
            if self.prefix.contains(PrefixFlags::TIME) {
                if let Ok(time_of_day) = now.format(&TIME_FORMAT) {
                    line.push_str(&time_of_day);
                    line.push(' ');
                }
            }
        }
        if self.prefix.contains(PrefixFlags::FILE) {
            // Only macro calls carry a site; direct trait calls skip the
            // component rather than rendering a placeholder.
            if let Some(site) = site {
                let _ = write!(line, "{}:{} ", site.short_file(), site.line);
            }
        }

        let label = format!("{:<LEVEL_WIDTH$}", severity.as_str());
        let label = match colour::for_level(severity) {
            Some(c) if self.colour => colour::paint(&label, c),
            _ => label,
        };
        let _ = write!(line, "[{label}] [{}] {message}", self.namespace);

        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(sink, "{line}");
        let _ = sink.flush();
    }
}

impl Logger for ConsoleLogger {
    fn set_level(&self, level: Level) {
        self.level.set(level);
    }

    fn log(&self, severity: Level, message: fmt::Arguments<'_>) {
        self.emit(severity, None, message);
    }

    fn fatal(&self, message: fmt::Arguments<'_>) {
        self.fatal_at(None, message);
    }

    fn log_at(&self, severity: Level, site: Option<CallSite>, message: fmt::Arguments<'_>) {
        self.emit(severity, site, message);
    }

    fn fatal_at(&self, site: Option<CallSite>, message: fmt::Arguments<'_>) {
        self.emit(Level::Fatal, site, message);
        // Fatal never returns control to the caller; the exit happens even
        // when a DISABLED threshold suppressed the textual output above.
        process::exit(1);
    }

    fn sub_logger(&self, namespace: &str) -> Box<dyn Logger> {
        Box::new(Self {
            namespace: namespace.to_string(),
            level: InstanceLevel::unset(),
            control: Arc::clone(&self.control),
            sink: Arc::clone(&self.sink),
            prefix: self.prefix,
            colour: self.colour,
        })
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("namespace", &self.namespace)
            .field("level", &self.level.get())
            .field("prefix", &self.prefix)
            .field("colour", &self.colour)
            .finish_non_exhaustive()
    }
}
