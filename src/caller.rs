use std::panic::Location;
use std::path::Path;

/// Turns the location captured at a located entry point into the token
/// written after the timestamp.
pub trait CallerResolver: Send + Sync {
    fn resolve(&self, caller: &Location<'_>) -> String;
}

/// Renders `basename:line`, e.g. `server.rs:42`.
pub struct BasenameResolver;

impl CallerResolver for BasenameResolver {
    fn resolve(&self, caller: &Location<'_>) -> String {
        format!("{}:{}", basename(caller.file()), caller.line())
    }
}

fn basename(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}
