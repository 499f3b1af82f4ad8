use std::{collections::HashMap, ffi::OsString, path::Path, sync::Arc};

use thiserror::Error;
use tracing::{debug, trace};

use crate::{help, Flag};

/// Reasons a parse is aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),
    #[error("flag {0} requires an argument")]
    MissingValue(String),
    #[error("required flag {0} was not given")]
    MissingRequired(String),
}

/// A key was looked up that no declared flag produces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("flag '{0}' was never declared")]
    UnknownKey(String),
}

/// Whether a flag was given, and with which value.
///
/// `value` is empty for absent flags, for flags without a value, and for
/// flags given an empty value, so check `present` first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub present: bool,
    pub value: String,
}

/// Outcome of every declared flag, keyed by [`Flag::match_key`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches {
    outcomes: HashMap<String, Outcome>,
}

impl Matches {
    pub fn get(&self, key: &str) -> Result<&Outcome, LookupError> {
        self.outcomes.get(key).ok_or_else(|| LookupError::UnknownKey(key.to_string()))
    }

    pub fn get_flag(&self, flag: &Flag) -> Result<&Outcome, LookupError> {
        self.get(&flag.match_key())
    }

    pub fn is_present(&self, key: &str) -> Result<bool, LookupError> {
        self.get(key).map(|it| it.present)
    }

    pub fn value(&self, key: &str) -> Result<&str, LookupError> {
        self.get(key).map(|it| it.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Outcome)> {
        self.outcomes.iter().map(|(key, outcome)| (key.as_str(), outcome))
    }
}

/// Raw arguments together with the flags they are matched against.
///
/// Flags are kept with the optional ones first and the required ones last;
/// this order is used by [`Parser::flags`], usage and help.
#[derive(Debug, Clone)]
pub struct Parser {
    args: Vec<String>,
    flags: Arc<[Flag]>,
    name: String,
    description: String,
}

impl Parser {
    /// `args` should not include the program name.
    pub fn new(args: Vec<String>, mut flags: Vec<Flag>, name: impl Into<String>) -> Parser {
        flags.sort_by_key(|flag| flag.is_required());
        let name = name.into();
        debug!(name = %name, flags = flags.len(), args = args.len(), "parser created");
        Parser { args, flags: flags.into(), name, description: String::new() }
    }

    /// Takes the program name from the first process argument and parses
    /// the remaining ones.
    pub fn from_env(flags: Vec<Flag>) -> Parser {
        Parser::from_argv(std::env::args_os(), flags)
    }

    fn from_argv(argv: impl Iterator<Item = OsString>, flags: Vec<Flag>) -> Parser {
        let mut args = argv.map(|it| it.to_string_lossy().into_owned());
        let name = match args.next() {
            Some(arg0) => {
                let file_name =
                    Path::new(&arg0).file_name().map(|it| it.to_string_lossy().into_owned());
                file_name.unwrap_or(arg0)
            }
            None => String::new(),
        };
        Parser::new(args.collect(), flags, name)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Parser {
        self.description = description.into();
        self
    }

    pub fn with_args(mut self, args: Vec<String>) -> Parser {
        self.args = args;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Parser {
        self.name = name.into();
        self
    }

    /// A parser over the same flag set, which is shared rather than cloned.
    /// Combine with `with_args`, `with_name` and `with_description`.
    pub fn copy(&self) -> Parser {
        Parser {
            args: self.args.clone(),
            flags: Arc::clone(&self.flags),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Matches the arguments against the declared flags, returning the
    /// outcome of every flag and the arguments that were neither a flag nor
    /// a flag's value, in their original order.
    pub fn parse(&self) -> Result<(Matches, Vec<String>), ParseError> {
        let res = self.parse_();
        if let Err(err) = &res {
            debug!(name = %self.name, error = %err, "parse failed");
        }
        res
    }

    fn parse_(&self) -> Result<(Matches, Vec<String>), ParseError> {
        let mut outcomes = HashMap::new();
        let mut leftovers = Vec::new();

        let mut i = 0;
        while i < self.args.len() {
            let arg = &self.args[i];
            if !is_flag_like(arg) {
                trace!(arg = %arg, "leftover");
                leftovers.push(arg.clone());
                i += 1;
                continue;
            }

            let flag = self
                .flags
                .iter()
                .find(|flag| flag.matches(arg))
                .ok_or_else(|| ParseError::UnknownFlag(arg.clone()))?;

            let value = if flag.takes_value() {
                // Whatever follows is the value, even if it looks like a flag.
                let value = self
                    .args
                    .get(i + 1)
                    .ok_or_else(|| ParseError::MissingValue(flag.display_ref()))?;
                i += 2;
                value.clone()
            } else {
                i += 1;
                String::new()
            };
            trace!(flag = %flag, value = %value, "matched");
            outcomes.insert(flag.match_key(), Outcome { present: true, value });
        }

        for flag in self.flags.iter() {
            let key = flag.match_key();
            if outcomes.contains_key(&key) {
                continue;
            }
            if flag.is_required() {
                return Err(ParseError::MissingRequired(flag.display_ref()));
            }
            outcomes.insert(key, Outcome::default());
        }

        debug!(
            name = %self.name,
            matched = outcomes.values().filter(|it| it.present).count(),
            leftovers = leftovers.len(),
            "parsed"
        );
        Ok((Matches { outcomes }, leftovers))
    }

    /// Every flag's usage entry, three to a line. Empty without flags.
    pub fn flag_usage(&self) -> String {
        help::flag_usage(&self.flags)
    }

    /// The program name followed by [`Parser::flag_usage`].
    pub fn usage(&self) -> String {
        help::usage(&self.name, &self.flags)
    }

    pub fn help(&self) -> String {
        help::help(&self.name, &self.description, &self.flags)
    }
}

fn is_flag_like(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-')
}
