#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Level {
    Info,
    Warning,
    Error,
    Fatal,
    Debug,
}

impl Level {
    /// Fixed tag written at the start of every line of this level.
    pub(crate) fn prefix(self) -> &'static str {
        match self {
            Level::Info => "[ INFO  ]",
            Level::Warning => "[WARNING]",
            Level::Error => "[ ERROR ]",
            Level::Fatal => "[ FATAL ]",
            Level::Debug => "[ DEBUG ]",
        }
    }

    /// Whether lines of this level carry the caller's `file:line`.
    pub(crate) fn is_located(self) -> bool {
        matches!(self, Level::Error | Level::Debug)
    }
}
