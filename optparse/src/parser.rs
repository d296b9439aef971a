// ============================================================================
// OptParser — registry plus the argv scan
// ============================================================================

use std::ffi::OsString;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::opt::{Descriptor, Opt, OptId};
use crate::registry::Registry;
use crate::token::{classify, Token};
use crate::value::OptValue;

/// Owns the registered options and the outcome of one pass over argv.
///
/// ```
/// use optparse::{Opt, OptParser};
///
/// let mut parser = OptParser::new();
/// let verbose = parser.add(Opt::flag("verbose").short('v'));
/// let jobs = parser.add(Opt::int("jobs", 1).short('j'));
///
/// parser.parse(["optdemo", "-vj=8", "build", "--", "--release"])?;
/// assert!(*parser.get(verbose)?);
/// assert_eq!(*parser.get(jobs)?, 8);
/// assert_eq!(parser.program_name(), Some("build"));
/// assert_eq!(parser.residual_args(), ["--release"]);
/// # Ok::<(), optparse::Error>(())
/// ```
#[derive(Debug)]
pub struct OptParser {
    options: Registry,
    // Empty means no program name yet.
    program_name: String,
    residual: Vec<String>,
}

impl OptParser {
    pub fn new() -> Self {
        OptParser {
            options: Registry::new(),
            program_name: String::new(),
            residual: Vec::new(),
        }
    }

    /// Register an option. Names are not checked: if another option already
    /// uses the long name or short letter, the earlier one wins every lookup.
    pub fn add<T: OptValue>(&mut self, opt: Opt<T>) -> OptId<T> {
        OptId::new(self.options.push(opt.into_descriptor()))
    }

    /// Like [`add`](Self::add) but refuses empty long names and names that
    /// are already taken.
    pub fn try_add<T: OptValue>(&mut self, opt: Opt<T>) -> Result<OptId<T>> {
        let long_name = opt.long_name().to_string();
        let short_name = opt.short_name();
        let index = self.options.try_push(opt.into_descriptor())?;
        debug!(option = %long_name, short = ?short_name, "registered option");
        Ok(OptId::new(index))
    }

    /// Parse the process arguments. Fails with [`Error::NotUnicode`] if any
    /// of them is not valid UTF-8.
    pub fn parse_env(&mut self) -> Result<()> {
        let args = args_from_os(std::env::args_os())?;
        self.parse(args)
    }

    /// Parse `args` as received by `main`: the first element is the
    /// invocation path and is skipped.
    ///
    /// Stops at the first failure. Options resolved before it keep their new
    /// values; the program name and residual arguments are only meaningful
    /// after an `Ok` return.
    pub fn parse<I, S>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.program_name.clear();
        self.residual.clear();

        let mut args = args.into_iter().map(Into::<String>::into).skip(1);
        while let Some(arg) = args.next() {
            let token = classify(&arg);
            trace!(arg = %arg, ?token, "classified argument");
            match token {
                Token::Positional(name) => self.set_program_name(name)?,
                Token::Terminator => {
                    if self.program_name.is_empty() {
                        return Err(Error::MissingProgramName);
                    }
                    self.residual = args.collect();
                    debug!(count = self.residual.len(), "captured residual arguments");
                    return Ok(());
                }
                Token::Long { name, value } => self.resolve_long(name, value)?,
                Token::Short { names, value } => self.resolve_cluster(names, value)?,
            }
        }
        Ok(())
    }

    fn set_program_name(&mut self, name: &str) -> Result<()> {
        if !self.program_name.is_empty() {
            return Err(Error::BadOption(name.to_string()));
        }
        debug!(program = %name, "program name");
        self.program_name = name.to_string();
        Ok(())
    }

    pub(crate) fn resolve_long(&mut self, name: &str, value: Option<&str>) -> Result<()> {
        let index = self
            .options
            .find_by_long(name)
            .ok_or_else(|| Error::UnknownOption(name.to_string()))?;
        self.resolve(index, name, value)
    }

    /// Every letter is a flag except the last, which takes `value` if the
    /// cluster had one.
    fn resolve_cluster(&mut self, names: &str, value: Option<&str>) -> Result<()> {
        if names.is_empty() {
            debug!(?value, "short cluster without option letters ignored");
            return Ok(());
        }
        let last = names.chars().count() - 1;
        for (i, c) in names.chars().enumerate() {
            let raw = if i == last { value } else { None };
            self.resolve_short(c, raw)?;
        }
        Ok(())
    }

    fn resolve_short(&mut self, c: char, value: Option<&str>) -> Result<()> {
        let index = self
            .options
            .find_by_short(c)
            .ok_or_else(|| Error::UnknownOption(c.to_string()))?;
        self.resolve(index, &c.to_string(), value)
    }

    fn resolve(&mut self, index: usize, name: &str, value: Option<&str>) -> Result<()> {
        let slot = self
            .options
            .get_mut(index)
            .ok_or_else(|| Error::UnknownOption(name.to_string()))?;
        slot.mark_present();
        slot.apply(value).map_err(|e| Error::in_option(name, e))?;
        debug!(option = %name, value = %slot.value(), "resolved option");
        Ok(())
    }

    fn descriptor(&self, index: usize) -> Result<&Descriptor> {
        self.options
            .get(index)
            .ok_or_else(|| Error::NotFound(format!("#{}", index)))
    }

    fn descriptor_by_name(&self, name: &str) -> Result<&Descriptor> {
        self.options
            .find_by_long(name)
            .and_then(|index| self.options.get(index))
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub fn get<T: OptValue>(&self, id: OptId<T>) -> Result<&T> {
        typed_value(self.descriptor(id.index())?)
    }

    pub fn is_present<T>(&self, id: OptId<T>) -> Result<bool> {
        Ok(self.descriptor(id.index())?.is_present())
    }

    /// Value of the first option registered under `name`.
    pub fn get_by_name<T: OptValue>(&self, name: &str) -> Result<&T> {
        typed_value(self.descriptor_by_name(name)?)
    }

    pub fn is_present_by_name(&self, name: &str) -> Result<bool> {
        Ok(self.descriptor_by_name(name)?.is_present())
    }

    /// Registered options in registration order.
    pub fn options(&self) -> impl Iterator<Item = &Descriptor> {
        self.options.iter()
    }

    /// `None` until a non-empty positional argument has been seen.
    pub fn program_name(&self) -> Option<&str> {
        if self.program_name.is_empty() {
            None
        } else {
            Some(&self.program_name)
        }
    }

    /// Arguments after `--`, untouched and in order.
    pub fn residual_args(&self) -> &[String] {
        &self.residual
    }

    pub fn residual_count(&self) -> usize {
        self.residual.len()
    }
}

impl Default for OptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert OS arguments to `String`s, failing on the first one that is not
/// valid UTF-8.
pub fn args_from_os<I>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|bad| Error::NotUnicode(bad.to_string_lossy().into_owned()))
        })
        .collect()
}

fn typed_value<T: OptValue>(d: &Descriptor) -> Result<&T> {
    T::from_value(d.value()).ok_or_else(|| Error::TypeMismatch {
        name: d.long_name().to_string(),
        expected: T::KIND.name(),
        actual: d.kind().name(),
    })
}
