//! POSIX-style command-line option parsing with typed options.
//!
//! - Options are registered as [`Opt<T>`] for `T` in `bool`, `i64`, `u64`,
//!   `String`; registration hands back an [`OptId<T>`] to read them.
//! - `-abc` clusters flags, `-ab=v` gives `v` to the last letter,
//!   `--name` / `--name=value` for long options.
//! - The first bare argument is the program name; everything after `--` is
//!   kept verbatim as residual arguments.
//! - Per-option failures come back wrapped as `parsing of X failed: ...`.
//! - Option files (`name = value` per line) resolve through the same options.

mod coerce;
mod error;
mod opt;
mod optfile;
mod parser;
mod registry;
mod token;
mod value;

pub use error::{Error, Result};
pub use opt::{Descriptor, Handler, Opt, OptId};
pub use parser::{args_from_os, OptParser};
pub use value::{Kind, OptValue, Value};
