//! Declarative command line flag matching.
//!
//! Flags are declared up front as a list of [`Flag`]s. A [`Parser`] classifies
//! every raw argument as a known flag (possibly followed by its value) or a
//! leftover, and renders usage and help text from the very same declarations.
//!
//! ```
//! use flagparse::{Flag, Parser};
//!
//! # fn main() -> flagparse::Result<()> {
//! let flags = vec![
//!     Flag::new("h", "help")?.store_true().with_description("print help"),
//!     Flag::new("e", "echo")?.with_description("text to echo"),
//! ];
//! let args = vec!["--echo".to_string(), "hi".to_string(), "extra".to_string()];
//! let parser = Parser::new(args, flags, "echo");
//!
//! let (matches, leftovers) = parser.parse()?;
//! assert!(!matches.is_present("hhelp")?);
//! assert_eq!(matches.value("eecho")?, "hi");
//! assert_eq!(leftovers, ["extra"]);
//! # Ok(())
//! # }
//! ```
//!
//! Combined short flags (`-ab`), `--flag=value` and repeated flags are not
//! supported; values are always the raw strings that followed the flag.

mod flag;
mod help;
mod parser;

use thiserror::Error;

pub use crate::{
    flag::{DeclarationError, Flag},
    parser::{LookupError, Matches, Outcome, ParseError, Parser},
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Any failure produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Declaration(#[from] DeclarationError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
