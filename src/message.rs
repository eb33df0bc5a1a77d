use std::fmt::{self, Display, Write};

/// Joins several operands with single spaces, for line-mode calls that log
/// more than one value.
///
/// ```
/// use leveled_logger::Spaced;
///
/// assert_eq!("retry 3 failed", Spaced(&[&"retry", &3, &"failed"]).to_string());
/// ```
pub struct Spaced<'a>(pub &'a [&'a dyn Display]);

impl Display for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_char(' ')?;
            }
            value.fmt(f)?;
        }
        Ok(())
    }
}

/// Builds one complete output line: `<prefix> <timestamp> [<caller> ]<message>\n`.
pub(crate) fn compose_line(
    prefix: &str,
    timestamp: &str,
    caller: Option<&str>,
    message: &str,
) -> String {
    let mut line = String::with_capacity(prefix.len() + timestamp.len() + message.len() + 32);
    line.push_str(prefix);
    line.push(' ');
    line.push_str(timestamp);
    line.push(' ');
    if let Some(caller) = caller {
        line.push_str(caller);
        line.push(' ');
    }
    line.push_str(message);
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}
