//! Left-to-right argument scanner.
//!
//! Tokens are classified one at a time:
//!
//! - `--` stops flag parsing; everything after it is positional.
//! - `-name=value` assigns `value` to `name`.
//! - `-name` switches a boolean flag on, or takes the following token as the
//!   value of a string flag.
//! - anything else is positional.
//!
//! An undeclared name aborts the scan. Flags assigned before the failure keep
//! their new values.

use std::ops::Deref;

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::flag::Flag;
use crate::options::Options;

const TERMINATOR: &str = "--";
const FLAG_PREFIX: char = '-';

/// Positional arguments left over after a successful parse.
///
/// Each call to [`Options::parse`] returns a fresh value. Combine results with
/// [`Parsed::merge`] when several parses should accumulate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    args: Vec<String>,
}

impl Parsed {
    /// Positional arguments in the order they appeared.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Consumes the result and returns the positional arguments.
    #[must_use]
    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    /// Appends the positionals of `other` after these.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.args.extend(other.args);
        self
    }

    fn push(&mut self, arg: String) {
        trace!(arg = %arg, "collected positional argument");
        self.args.push(arg);
    }
}

impl Deref for Parsed {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.args
    }
}

impl Extend<String> for Parsed {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.args.extend(iter);
    }
}

impl IntoIterator for Parsed {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.into_iter()
    }
}

impl<'a> IntoIterator for &'a Parsed {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

impl From<Parsed> for Vec<String> {
    fn from(parsed: Parsed) -> Self {
        parsed.args
    }
}

impl Options {
    /// Parses `args`, which must not include the program name.
    ///
    /// Declared flags are updated in place; positional arguments are returned.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownOption`] for the first flag-shaped
    /// argument whose name is not declared, including a bare `-`. Arguments
    /// after it are not examined.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashopts::{Flag, Options};
    ///
    /// let mut options = Options::new([Flag::string("foo", "bar", "Specify foo")]);
    /// let parsed = options
    ///     .parse(["-foo", "baz", "a", "--", "-boo=baz"])
    ///     .expect("everything after -- is positional");
    /// assert_eq!(options.string("foo"), "baz");
    /// assert_eq!(parsed.args(), ["a", "-boo=baz"]);
    /// ```
    pub fn parse<I, S>(&mut self, args: I) -> Result<Parsed, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = args.into_iter().map(Into::into);
        let mut parsed = Parsed::default();

        while let Some(token) = tokens.next() {
            if token == TERMINATOR {
                let before = parsed.len();
                parsed.extend(tokens.by_ref());
                debug!(
                    remaining = parsed.len() - before,
                    "flag parsing terminated by --"
                );
                break;
            }

            let Some(body) = token.strip_prefix(FLAG_PREFIX) else {
                parsed.push(token);
                continue;
            };

            let (name, inline) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value.to_owned())),
                None => (body, None),
            };
            let captured = match inline {
                Some(value) => Some(value),
                None if self.takes_value(name) => tokens.next(),
                None => None,
            };

            let Some(flag) = self.lookup_mut(name) else {
                let err = ParseError::unknown_option(format!("{FLAG_PREFIX}{name}"));
                debug!(token = %err.token(), "rejected unknown option");
                return Err(err);
            };
            flag.assign(captured.as_deref());
            debug!(flag = %flag.name(), value = %flag.value(), "assigned flag");
        }

        Ok(parsed)
    }

    /// Parses the arguments of the current process.
    ///
    /// The first argument is taken as the program name for usage output
    /// unless one was configured. Arguments that are not valid UTF-8 are
    /// converted lossily.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownOption`] under the same conditions as
    /// [`Options::parse`].
    pub fn parse_env(&mut self) -> Result<Parsed, ParseError> {
        let mut args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
        if let Some(program) = args.next() {
            self.record_program_name(program);
        }
        self.parse(args)
    }

    /// Whether `-name` without `=` should consume the next token.
    fn takes_value(&self, name: &str) -> bool {
        self.has(name) && !self.is_bool(name)
    }

    /// Finds a declaration for a flag name read from the command line.
    ///
    /// An empty name (the bare `-` argument) never matches.
    fn lookup_mut(&mut self, name: &str) -> Option<&mut Flag> {
        if name.is_empty() {
            return None;
        }
        self.get_mut(name)
    }
}

#[cfg(test)]
mod tests {
    use super::Parsed;
    use crate::error::ParseError;
    use crate::flag::Flag;
    use crate::options::Options;
    use rstest::{fixture, rstest};

    #[fixture]
    fn options() -> Options {
        Options::new([
            Flag::boolean("h", false, "Show Help"),
            Flag::string("foo", "bar", "Specify foo"),
        ])
    }

    #[rstest]
    #[case(&["a", "b"], &["a", "b"])]
    #[case(&[], &[])]
    #[case(&["a", "--", "-boo=baz", "--"], &["a", "-boo=baz", "--"])]
    #[case(&["--"], &[])]
    #[case(&["x", "-h", "y"], &["x", "y"])]
    fn collects_positionals(
        mut options: Options,
        #[case] args: &[&str],
        #[case] expected: &[&str],
    ) -> Result<(), ParseError> {
        let parsed = options.parse(args.iter().copied())?;
        assert_eq!(parsed.args(), expected);
        Ok(())
    }

    #[rstest]
    #[case(&["-foo=baz"], "baz")]
    #[case(&["-foo", "baz"], "baz")]
    #[case(&["-foo="], "")]
    #[case(&["-foo"], "")]
    #[case(&["-foo=a=b"], "a=b")]
    #[case(&["-foo", "-h"], "-h")]
    #[case(&["-foo", "--"], "--")]
    fn captures_string_values(
        mut options: Options,
        #[case] args: &[&str],
        #[case] expected: &str,
    ) -> Result<(), ParseError> {
        let parsed = options.parse(args.iter().copied())?;
        assert_eq!(options.string("foo"), expected);
        assert!(parsed.is_empty());
        Ok(())
    }

    #[rstest]
    #[case(&["-h"])]
    #[case(&["-h=false"])]
    #[case(&["-h="])]
    fn switches_boolean_flags_on(
        mut options: Options,
        #[case] args: &[&str],
    ) -> Result<(), ParseError> {
        options.parse(args.iter().copied())?;
        assert!(options.bool("h"));
        Ok(())
    }

    #[rstest]
    fn boolean_flag_does_not_consume_next_token(mut options: Options) -> Result<(), ParseError> {
        let parsed = options.parse(["-h", "file"])?;
        assert!(options.bool("h"));
        assert_eq!(parsed.args(), ["file"]);
        Ok(())
    }

    #[rstest]
    #[case(&["-boo=baz"], "-boo")]
    #[case(&["-boo"], "-boo")]
    #[case(&["-"], "-")]
    #[case(&["-=x"], "-")]
    #[case(&["--foo"], "--foo")]
    #[case(&["-H"], "-H")]
    fn rejects_unknown_options(
        mut options: Options,
        #[case] args: &[&str],
        #[case] token: &str,
    ) {
        let outcome = options.parse(args.iter().copied());
        assert_eq!(outcome, Err(ParseError::UnknownOption { token: token.to_owned() }));
    }

    #[rstest]
    fn keeps_assignments_made_before_failure(mut options: Options) {
        let outcome = options.parse(["-h", "-boo=baz", "-foo=late"]);
        assert!(outcome.is_err());
        assert!(options.bool("h"));
        assert_eq!(options.string("foo"), "bar");
    }

    #[test]
    fn bare_dash_is_unknown_even_with_empty_name_declared() {
        let mut options = Options::new([Flag::boolean("", false, "")]);
        let outcome = options.parse(["-"]);
        assert_eq!(outcome.map_err(|err| err.token().to_owned()), Err("-".to_owned()));
    }

    #[test]
    fn assigns_earliest_duplicate() -> Result<(), ParseError> {
        let mut options = Options::new([
            Flag::string("mode", "first", ""),
            Flag::string("mode", "second", ""),
        ]);
        options.parse(["-mode=changed"])?;
        let values: Vec<String> = options.flags().map(|flag| flag.value().to_string()).collect();
        assert_eq!(values, ["changed", "second"]);
        Ok(())
    }

    #[test]
    fn parses_are_independent() -> Result<(), ParseError> {
        let mut options = Options::default();
        let first = options.parse(["a"])?;
        let second = options.parse(["b"])?;
        assert_eq!(second.args(), ["b"]);
        assert_eq!(first.merge(second).into_args(), ["a", "b"]);
        Ok(())
    }

    #[test]
    fn parsed_iterates_in_order() {
        let mut parsed = Parsed::default();
        parsed.extend(["x".to_owned(), "y".to_owned()]);
        let borrowed: Vec<&String> = (&parsed).into_iter().collect();
        assert_eq!(borrowed, ["x", "y"]);
        let owned: Vec<String> = parsed.into();
        assert_eq!(owned, ["x", "y"]);
    }
}
