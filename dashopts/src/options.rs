//! The flag registry and its value accessors.
//!
//! Lookups scan declarations in order and stop at the first matching name, so
//! a duplicated name always resolves to its earliest declaration. Accessors
//! never fail: asking for an undeclared flag, or for the wrong kind, yields the
//! kind's zero value.

use std::fmt;
use std::sync::Arc;

use crate::flag::{Flag, FlagValue};
use crate::terminate::{ProcessExit, Terminator};

/// Ordered set of declared flags plus the settings used for help output.
///
/// # Examples
///
/// ```
/// use dashopts::{Flag, Options};
///
/// let mut options = Options::new([
///     Flag::boolean("h", false, "Show Help"),
///     Flag::string("foo", "bar", "Specify foo"),
/// ]);
/// let parsed = options.parse(["-h", "-foo=baz", "input"]).expect("known flags");
/// assert!(options.bool("h"));
/// assert_eq!(options.string("foo"), "baz");
/// assert_eq!(parsed.args(), ["input"]);
/// ```
#[derive(Clone)]
pub struct Options {
    flags: Vec<Flag>,
    program: Option<String>,
    terminator: Arc<dyn Terminator>,
}

impl Options {
    /// Creates a registry from flag declarations, keeping their order.
    #[must_use]
    pub fn new(flags: impl IntoIterator<Item = Flag>) -> Self {
        Self {
            flags: flags.into_iter().collect(),
            program: None,
            terminator: Arc::new(ProcessExit),
        }
    }

    /// Appends a declaration after the existing ones.
    pub fn declare(&mut self, flag: Flag) -> &mut Self {
        self.flags.push(flag);
        self
    }

    /// Sets the program name shown in the usage header.
    #[must_use]
    pub fn with_program_name(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Replaces the hook invoked by [`Options::usage`] once help is written.
    #[must_use]
    pub fn with_terminator<T>(mut self, terminator: T) -> Self
    where
        T: Terminator + 'static,
    {
        self.terminator = Arc::new(terminator);
        self
    }

    /// Program name configured through [`Options::with_program_name`] or
    /// recorded by [`Options::parse_env`].
    #[must_use]
    pub fn program_name(&self) -> Option<&str> {
        self.program.as_deref()
    }

    pub(crate) fn record_program_name(&mut self, program: String) {
        if self.program.is_none() {
            self.program = Some(program);
        }
    }

    pub(crate) fn terminator(&self) -> &dyn Terminator {
        self.terminator.as_ref()
    }

    /// Declarations in declaration order.
    pub fn flags(&self) -> impl Iterator<Item = &Flag> {
        self.flags.iter()
    }

    /// Number of declarations, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no flags are declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns the earliest declaration named `name`.
    ///
    /// Names are compared exactly, without a leading dash.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|flag| flag.name() == name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Flag> {
        self.flags.iter_mut().find(|flag| flag.name() == name)
    }

    /// Whether a flag named `name` is declared.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether `name` is declared and boolean-kind.
    #[must_use]
    pub fn is_bool(&self, name: &str) -> bool {
        self.get(name).is_some_and(Flag::is_bool)
    }

    /// Current text of the string flag `name`.
    ///
    /// Returns an empty string when the flag is undeclared or boolean-kind.
    #[must_use]
    pub fn string(&self, name: &str) -> String {
        self.get(name)
            .and_then(|flag| flag.value().as_str())
            .map(str::to_owned)
            .unwrap_or_default()
    }

    /// Same as [`Options::string`].
    #[must_use]
    pub fn string_value(&self, name: &str) -> String {
        self.string(name)
    }

    /// Current state of the boolean flag `name`.
    ///
    /// Returns `false` when the flag is undeclared or string-kind.
    #[must_use]
    pub fn bool(&self, name: &str) -> bool {
        self.get(name)
            .and_then(|flag| flag.value().as_bool())
            .unwrap_or(false)
    }

    /// Same as [`Options::bool`].
    #[must_use]
    pub fn bool_value(&self, name: &str) -> bool {
        self.bool(name)
    }

    /// Current value of `name`, whatever its kind.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&FlagValue> {
        self.get(name).map(Flag::value)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("flags", &self.flags)
            .field("program", &self.program)
            .field("terminator", &"<terminator>")
            .finish()
    }
}

impl FromIterator<Flag> for Options {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Extend<Flag> for Options {
    fn extend<I: IntoIterator<Item = Flag>>(&mut self, iter: I) {
        self.flags.extend(iter);
    }
}
