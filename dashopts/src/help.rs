//! Usage and defaults rendering.
//!
//! Lines use the declared defaults, never the values set by parsing:
//!
//! ```text
//! Usage: prog [options] [--] [args]
//!   -h(false): Show Help
//!   -foo="bar": Specify foo
//! ```

use std::io::{self, Write};

use tracing::debug;

use crate::flag::{Flag, FlagValue};
use crate::options::Options;
use crate::terminate::USAGE_EXIT_STATUS;

const FALLBACK_PROGRAM: &str = "program";

impl Options {
    /// Writes one line per declared flag to `out`, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when writing to `out` fails.
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
    /// options.parse(["-h", "-foo=baz"]).expect("known flags");
    ///
    /// let mut out = Vec::new();
    /// options.write_defaults(&mut out).expect("write to vec");
    /// assert_eq!(
    ///     String::from_utf8(out).expect("utf-8"),
    ///     "  -h(false): Show Help\n  -foo=\"bar\": Specify foo\n"
    /// );
    /// ```
    pub fn write_defaults<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for flag in self.flags() {
            write_default_line(out, flag)?;
        }
        Ok(())
    }

    /// Prints the defaults listing to standard output.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when writing to standard output fails.
    pub fn print_defaults(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_defaults(&mut stdout)
    }

    /// Writes the usage header followed by the defaults listing.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when writing to `out` fails.
    pub fn write_usage<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Usage: {} [options] [--] [args]", self.display_program())?;
        self.write_defaults(out)
    }

    /// Prints usage to standard output, then invokes the terminator with
    /// status 1.
    ///
    /// The default terminator exits the process, so this only returns when a
    /// custom one was installed with [`Options::with_terminator`].
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when writing to standard output fails. The
    /// terminator runs either way.
    pub fn usage(&self) -> io::Result<()> {
        let written = {
            let mut stdout = io::stdout().lock();
            self.write_usage(&mut stdout).and_then(|()| stdout.flush())
        };
        debug!(status = USAGE_EXIT_STATUS, "usage printed; terminating");
        self.terminator().terminate(USAGE_EXIT_STATUS);
        written
    }

    /// Program name for the usage header.
    ///
    /// Falls back to the process's first argument, then to a fixed name.
    fn display_program(&self) -> String {
        self.program_name().map_or_else(
            || {
                std::env::args_os().next().map_or_else(
                    || FALLBACK_PROGRAM.to_owned(),
                    |arg| arg.to_string_lossy().into_owned(),
                )
            },
            str::to_owned,
        )
    }
}

fn write_default_line<W: Write + ?Sized>(out: &mut W, flag: &Flag) -> io::Result<()> {
    match flag.default_value() {
        FlagValue::Str(text) => writeln!(
            out,
            "  -{}={:?}: {}",
            flag.name(),
            text,
            flag.description()
        ),
        FlagValue::Bool(state) => writeln!(
            out,
            "  -{}({}): {}",
            flag.name(),
            state,
            flag.description()
        ),
    }
}
