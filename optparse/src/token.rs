//! Classification of a single argv element.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Shorter than two bytes or not starting with `-`.
    Positional(&'a str),
    /// Exactly `--`.
    Terminator,
    /// `--name` or `--name=value`.
    Long {
        name: &'a str,
        value: Option<&'a str>,
    },
    /// `-abc` or `-abc=value`; only the last letter receives the value.
    Short {
        names: &'a str,
        value: Option<&'a str>,
    },
}

pub(crate) fn classify(arg: &str) -> Token<'_> {
    if arg.len() < 2 || !arg.starts_with('-') {
        return Token::Positional(arg);
    }
    if arg == "--" {
        return Token::Terminator;
    }
    if let Some(rest) = arg.strip_prefix("--") {
        let (name, value) = split_value(rest);
        Token::Long { name, value }
    } else {
        let (names, value) = split_value(&arg[1..]);
        Token::Short { names, value }
    }
}

/// Split on the first `=`; everything after it, further `=` included, is the
/// value.
fn split_value(s: &str) -> (&str, Option<&str>) {
    match s.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (s, None),
    }
}
