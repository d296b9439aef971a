//! Option files: one long option per line, resolved against the parser's own
//! registry.
//!
//! ```text
//! # defaults
//! is
//! js = 42
//! ls = some other value
//! ```
//!
//! A bare name is the same as `--name`; `name = value` is `--name=value` with
//! the whitespace around the name and the value dropped. Blank lines and
//! `#` comments are skipped.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::OptParser;

impl OptParser {
    /// Read `path` and apply it with [`load_options`](Self::load_options).
    pub fn load_option_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigFile {
            path: path.display().to_string(),
            source,
        })?;
        self.load_options(&content)?;
        debug!(path = %path.display(), "applied option file");
        Ok(())
    }

    /// Resolve each line as a long option. Stops at the first failing line,
    /// reported as `line N: ...`; lines before it stay applied.
    pub fn load_options(&mut self, text: &str) -> Result<()> {
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (name, value) = match line.split_once('=') {
                Some((name, value)) => (name.trim_end(), Some(value.trim_start())),
                None => (line, None),
            };
            self.resolve_long(name, value)
                .map_err(|e| Error::OptionLine {
                    line: idx + 1,
                    source: Box::new(e),
                })?;
        }
        Ok(())
    }
}
