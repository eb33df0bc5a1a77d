use std::backtrace::Backtrace;
use std::fmt::{self, Write};

/// Initial size of the buffer the trace is rendered into.
pub(crate) const STACK_BUF_INITIAL: usize = 1 << 8;

/// Captures the calling thread's stack, one frame line per entry.
///
/// Capture is forced, so the dump does not depend on `RUST_BACKTRACE`.
pub(crate) fn capture() -> Vec<String> {
    render(&Backtrace::force_capture())
}

/// Renders `trace` into a buffer that starts at [`STACK_BUF_INITIAL`] bytes
/// and doubles until the whole trace fits, then splits it into non-empty lines.
pub(crate) fn render(trace: &impl fmt::Display) -> Vec<String> {
    let mut buf = GrowingBuf::with_capacity(STACK_BUF_INITIAL);
    // Writing into a String cannot fail.
    let _ = write!(buf, "{trace}");
    buf.into_string()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

struct GrowingBuf {
    inner: String,
}

impl GrowingBuf {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: String::with_capacity(capacity),
        }
    }

    fn into_string(self) -> String {
        self.inner
    }
}

impl Write for GrowingBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let needed = self.inner.len() + s.len();
        if needed > self.inner.capacity() {
            let mut capacity = self.inner.capacity().max(STACK_BUF_INITIAL);
            while capacity < needed {
                capacity *= 2;
            }
            self.inner.reserve_exact(capacity - self.inner.len());
        }
        self.inner.push_str(s);
        Ok(())
    }
}
