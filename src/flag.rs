use std::fmt;

use thiserror::Error;

/// Reasons a flag declaration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    #[error("a flag needs a short or a long name")]
    MissingName,
    #[error("flag name '{name}' contains invalid character {ch:?}")]
    InvalidChar { name: String, ch: char },
    #[error("flag name '{0}' consists only of hyphens")]
    OnlyHyphens(String),
    #[error("flag name '{0}' starts or ends with a hyphen")]
    HyphenEdge(String),
}

/// A single declared flag.
///
/// Names are given without their dashes: `Flag::new("v", "verbose")` is
/// matched by `-v` and `--verbose`. Either name may be empty, but not both.
/// By default a flag is optional and takes the next argument as its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    short: String,
    long: String,
    short_form: String,
    long_form: String,
    description: String,
    required: bool,
    takes_value: bool,
}

impl Flag {
    pub fn new(short: &str, long: &str) -> Result<Flag, DeclarationError> {
        if short.is_empty() && long.is_empty() {
            return Err(DeclarationError::MissingName);
        }
        for name in [short, long] {
            if !name.is_empty() {
                validate_name(name)?;
            }
        }

        let form = |dashes: &str, name: &str| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{}{}", dashes, name)
            }
        };
        Ok(Flag {
            short: short.to_string(),
            long: long.to_string(),
            short_form: form("-", short),
            long_form: form("--", long),
            description: String::new(),
            required: false,
            takes_value: true,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Flag {
        self.description = description.into();
        self
    }

    /// Parsing fails unless this flag is given.
    pub fn required(mut self) -> Flag {
        self.required = true;
        self
    }

    /// The flag carries no value, its presence is all that matters.
    pub fn store_true(mut self) -> Flag {
        self.takes_value = false;
        self
    }

    pub fn short(&self) -> &str {
        &self.short
    }

    pub fn long(&self) -> &str {
        &self.long
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn takes_value(&self) -> bool {
        self.takes_value
    }

    /// Whether `token` spells this flag, as `-short` or `--long`.
    pub fn matches(&self, token: &str) -> bool {
        (!self.short_form.is_empty() && token == self.short_form)
            || (!self.long_form.is_empty() && token == self.long_form)
    }

    /// Key under which the parse outcome of this flag is stored: the raw
    /// short name followed by the raw long name.
    pub fn match_key(&self) -> String {
        format!("{}{}", self.short, self.long)
    }

    /// Flag column and description of this flag's line in the help text.
    pub fn help_entry(&self) -> (String, &str) {
        let column = self.forms().collect::<Vec<_>>().join("  ");
        (column, &self.description)
    }

    /// `[-s|--long <value>]`, without brackets for required flags.
    pub fn usage_entry(&self) -> String {
        let mut entry = self.forms().collect::<Vec<_>>().join("|");
        if self.takes_value {
            entry.push_str(" <value>");
        }
        if self.required {
            entry
        } else {
            format!("[{}]", entry)
        }
    }

    /// `short/long`, used to refer to the flag in error messages.
    pub fn display_ref(&self) -> String {
        self.names().collect::<Vec<_>>().join("/")
    }

    fn forms(&self) -> impl Iterator<Item = &str> {
        [self.short_form.as_str(), self.long_form.as_str()].into_iter().filter(|it| !it.is_empty())
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        [self.short.as_str(), self.long.as_str()].into_iter().filter(|it| !it.is_empty())
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_ref())
    }
}

fn validate_name(name: &str) -> Result<(), DeclarationError> {
    if let Some(ch) = name.chars().find(|&ch| !(ch.is_ascii_alphanumeric() || ch == '-')) {
        return Err(DeclarationError::InvalidChar { name: name.to_string(), ch });
    }
    if name.chars().all(|ch| ch == '-') {
        return Err(DeclarationError::OnlyHyphens(name.to_string()));
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Err(DeclarationError::HyphenEdge(name.to_string()));
    }
    Ok(())
}
