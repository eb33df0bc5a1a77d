use crate::{
    caller::{BasenameResolver, CallerResolver},
    clock::{Clock, SystemClock},
    level::Level,
    message::compose_line,
    stack,
};
use parking_lot::Mutex;
use std::{
    fmt::{self, Display},
    io::Write,
    panic::Location,
    process,
    sync::Arc,
};

/// Exit status used when a fatal event terminates the process.
pub const FATAL_EXIT_CODE: i32 = 1;

/// One severity-tagged writer: a fixed prefix, and whether its lines carry
/// the caller's location. All five feed the sink owned by their
/// [`LeveledLogger`] and are serialized by its single lock.
struct SubLogger {
    prefix: &'static str,
    located: bool,
}

impl SubLogger {
    fn new(level: Level) -> Self {
        Self {
            prefix: level.prefix(),
            located: level.is_located(),
        }
    }

    fn line(&self, timestamp: &str, caller: Option<&str>, message: &str) -> String {
        compose_line(self.prefix, timestamp, caller, message)
    }
}

/// Wraps an output sink with info, warning, error, fatal and debug writers.
///
/// The message is formatted before the logger's lock is taken; the timestamp
/// is read and the line emitted with a single `write_all` while holding it,
/// so lines from concurrent threads never interleave and their timestamps
/// appear in order. Write failures on the sink are ignored.
///
/// Error and debug lines carry the `file:line` of the code that called the
/// logging method; the methods are `#[track_caller]` so the location is the
/// user's call site even through the formatted variants and the macros.
pub struct LeveledLogger<W: Write> {
    sink: Mutex<W>,
    clock: Arc<dyn Clock>,
    resolver: Arc<dyn CallerResolver>,
    info: SubLogger,
    warning: SubLogger,
    error: SubLogger,
    fatal: SubLogger,
    debug: SubLogger,
}

impl<W: Write> LeveledLogger<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
            clock: Arc::new(SystemClock),
            resolver: Arc::new(BasenameResolver),
            info: SubLogger::new(Level::Info),
            warning: SubLogger::new(Level::Warning),
            error: SubLogger::new(Level::Error),
            fatal: SubLogger::new(Level::Fatal),
            debug: SubLogger::new(Level::Debug),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn CallerResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Hands the sink back to the caller.
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    pub fn info(&self, message: impl Display) {
        self.emit(Level::Info, message);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.info(args);
    }

    pub fn warning(&self, message: impl Display) {
        self.emit(Level::Warning, message);
    }

    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.warning(args);
    }

    #[track_caller]
    pub fn error(&self, message: impl Display) {
        self.emit(Level::Error, message);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.error(args);
    }

    /// Writes a located debug line when `enabled` is true. When it is false
    /// nothing is locked, resolved or formatted.
    #[track_caller]
    pub fn debug(&self, enabled: bool, message: impl Display) {
        if !enabled {
            return;
        }
        self.emit(Level::Debug, message);
    }

    #[track_caller]
    pub fn debugf(&self, enabled: bool, args: fmt::Arguments<'_>) {
        self.debug(enabled, args);
    }

    /// Writes `message` followed by the current thread's stack, then exits
    /// the process with [`FATAL_EXIT_CODE`].
    pub fn fatal(&self, message: impl Display) -> ! {
        let frames = stack::capture();
        let message = message.to_string();
        {
            let mut sink = self.sink.lock();
            let dump = self.fatal_dump(&message, &frames);
            let _ = sink.write_all(dump.as_bytes());
            let _ = sink.flush();
        }
        process::exit(FATAL_EXIT_CODE)
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal(args)
    }

    /// The fatal message line followed by the raw stack-frame lines.
    /// Reads the clock, so callers hold the sink lock.
    pub(crate) fn fatal_dump(&self, message: &str, frames: &[String]) -> String {
        let mut dump = self.fatal.line(&self.clock.timestamp(), None, message);
        for frame in frames {
            dump.push_str(frame);
            dump.push('\n');
        }
        dump
    }

    fn sub_logger(&self, level: Level) -> &SubLogger {
        match level {
            Level::Info => &self.info,
            Level::Warning => &self.warning,
            Level::Error => &self.error,
            Level::Fatal => &self.fatal,
            Level::Debug => &self.debug,
        }
    }

    #[track_caller]
    fn emit(&self, level: Level, message: impl Display) {
        let sub_logger = self.sub_logger(level);
        let location = Location::caller();
        let caller = sub_logger
            .located
            .then(|| self.resolver.resolve(location));
        let message = message.to_string();

        let mut sink = self.sink.lock();
        let line = sub_logger.line(&self.clock.timestamp(), caller.as_deref(), &message);
        let _ = sink.write_all(line.as_bytes());
        let _ = sink.flush();
    }
}
