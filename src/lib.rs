//! A leveled logger over any [`std::io::Write`] sink.
//!
//! ```
//! use leveled_logger::{LeveledLogger, infof};
//!
//! let logger = LeveledLogger::new(Vec::new());
//! infof!(logger, "{} workers started", 4);
//! logger.error("lookup failed");
//! logger.debug(false, "not written");
//!
//! let out = String::from_utf8(logger.into_inner()).unwrap();
//! assert_eq!(2, out.lines().count());
//! ```

#[macro_use]
mod macros;

mod caller;
pub use caller::{BasenameResolver, CallerResolver};

mod clock;
pub use clock::{Clock, SystemClock, TIMESTAMP_FORMAT};

mod level;

mod logger;
pub use logger::{FATAL_EXIT_CODE, LeveledLogger};

mod message;
pub use message::Spaced;

mod stack;
