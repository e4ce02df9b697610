//! Flag declarations and their typed values.
//!
//! A [`Flag`] pairs a name and description with a [`FlagValue`]. The variant
//! of the declared value fixes the flag's [`FlagKind`] for its whole
//! lifetime: parsing only ever replaces a string with another string, or a
//! boolean with `true`.

use std::fmt;

/// Kind of a declared flag, derived from its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    /// Takes a text value, either inline (`-name=value`) or from the next
    /// argument (`-name value`).
    String,
    /// Switches on by presence alone (`-name`).
    Bool,
}

/// Value held by a flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlagValue {
    /// Text value of a string-kind flag.
    Str(String),
    /// State of a boolean-kind flag.
    Bool(bool),
}

impl FlagValue {
    /// Returns the kind implied by this value.
    #[must_use]
    pub const fn kind(&self) -> FlagKind {
        match self {
            Self::Str(_) => FlagKind::String,
            Self::Bool(_) => FlagKind::Bool,
        }
    }

    /// Returns the text when this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            Self::Bool(_) => None,
        }
    }

    /// Returns the state when this is a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Str(_) => None,
            Self::Bool(state) => Some(*state),
        }
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(text) => f.write_str(text),
            Self::Bool(state) => write!(f, "{state}"),
        }
    }
}

/// A declared command-line flag.
///
/// The default is captured when the flag is constructed, so help output keeps
/// showing it after parsing has changed [`Flag::value`].
///
/// # Examples
///
/// ```
/// use dashopts::{Flag, FlagKind};
///
/// let prefix = Flag::string("prefix", " ", "Prefix of output");
/// assert_eq!(prefix.kind(), FlagKind::String);
/// assert_eq!(prefix.value().as_str(), Some(" "));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    name: String,
    value: FlagValue,
    default: FlagValue,
    description: String,
}

impl Flag {
    /// Declares a flag whose kind follows from `value`.
    ///
    /// `name` is stored as given; callers declare `verbose`, not `-verbose`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: impl Into<FlagValue>,
        description: impl Into<String>,
    ) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            default: value.clone(),
            value,
            description: description.into(),
        }
    }

    /// Declares a string-kind flag.
    #[must_use]
    pub fn string(
        name: impl Into<String>,
        default: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(name, FlagValue::Str(default.into()), description)
    }

    /// Declares a boolean-kind flag.
    #[must_use]
    pub fn boolean(name: impl Into<String>, default: bool, description: impl Into<String>) -> Self {
        Self::new(name, FlagValue::Bool(default), description)
    }

    /// Name of the flag without its leading dash.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value, reflecting any parse that touched the flag.
    #[must_use]
    pub const fn value(&self) -> &FlagValue {
        &self.value
    }

    /// Value the flag was declared with.
    #[must_use]
    pub const fn default_value(&self) -> &FlagValue {
        &self.default
    }

    /// Text shown in help output.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Kind fixed by the declared value.
    #[must_use]
    pub const fn kind(&self) -> FlagKind {
        self.default.kind()
    }

    /// Whether the flag is boolean-kind.
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self.kind(), FlagKind::Bool)
    }

    /// Applies a value captured from the command line.
    ///
    /// String flags take `captured` (empty when nothing was captured); boolean
    /// flags switch on whatever was supplied.
    pub(crate) fn assign(&mut self, captured: Option<&str>) {
        self.value = match self.kind() {
            FlagKind::String => FlagValue::Str(captured.unwrap_or_default().to_owned()),
            FlagKind::Bool => FlagValue::Bool(true),
        };
    }
}
