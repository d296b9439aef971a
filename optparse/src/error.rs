use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no such option {0}")]
    UnknownOption(String),

    #[error("argument does not expect a value")]
    UnwantedValue,

    #[error("argument expects {0}")]
    MissingValue(&'static str),

    #[error("argument expects {0}")]
    BadNumber(&'static str),

    #[error("value is not in range of a 64 bit {0}")]
    OutOfRange(&'static str),

    #[error("bad option - {0}")]
    BadOption(String),

    #[error("program filename must be specified before arguments")]
    MissingProgramName,

    /// Raised by a user handler; the message is passed through untouched.
    #[error("{0}")]
    Handler(String),

    #[error("parsing of {name} failed: {source}")]
    Parsing {
        name: String,
        #[source]
        source: Box<Error>,
    },

    #[error("option already registered: {0}")]
    Duplicate(String),

    #[error("invalid option definition: {0}")]
    Definition(String),

    #[error("option not found: {0}")]
    NotFound(String),

    #[error("type mismatch: option {name} holds {actual}, not {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("argument is not valid unicode: {0}")]
    NotUnicode(String),

    #[error("line {line}: {source}")]
    OptionLine {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to open {path}: {source}")]
    ConfigFile {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Failure for a handler to return when it rejects a coerced value.
    pub fn handler(msg: impl Into<String>) -> Self {
        Error::Handler(msg.into())
    }

    pub(crate) fn in_option(name: impl Into<String>, source: Error) -> Self {
        Error::Parsing {
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Innermost cause, skipping any `parsing of X failed` or `line N`
    /// wrappers.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Error::Parsing { source, .. } | Error::OptionLine { source, .. } = err {
            err = source.as_ref();
        }
        err
    }
}
