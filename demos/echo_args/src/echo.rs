//! Flag declarations and output for the `echo_args` demo.
//!
//! Every positional argument is printed on its own line after the `-prefix`
//! text. `-verbose` numbers the arguments instead of printing them bare.

use std::io::Write;

use dashopts::{Flag, Options};

use crate::error::Result;

/// Name of the help switch.
pub const HELP: &str = "h";
/// Name of the verbose switch.
pub const VERBOSE: &str = "verbose";
/// Name of the prefix option.
pub const PREFIX: &str = "prefix";

/// Flags understood by the demo, in help order.
#[must_use]
pub fn declare() -> Options {
    Options::new([
        Flag::boolean(HELP, false, "Show Help"),
        Flag::boolean(VERBOSE, false, "Verbose output"),
        Flag::string(PREFIX, " ", "Prefix of output"),
    ])
}

/// Writes `args` to `out` according to the parsed `options`.
///
/// # Errors
///
/// Returns [`crate::error::EchoError::Output`] when writing fails.
///
/// # Examples
///
/// ```
/// use echo_args::echo::{declare, write_args};
///
/// let mut options = declare();
/// let parsed = options.parse(["-prefix=>", "-verbose", "a"]).expect("known flags");
/// let mut out = Vec::new();
/// write_args(&mut out, &options, parsed.args()).expect("write to vec");
/// assert_eq!(String::from_utf8(out).expect("utf-8"), ">argument 1 is a\n");
/// ```
pub fn write_args<W: Write + ?Sized>(out: &mut W, options: &Options, args: &[String]) -> Result<()> {
    let prefix = options.string(PREFIX);
    let verbose = options.bool(VERBOSE);
    for (index, arg) in args.iter().enumerate() {
        write!(out, "{prefix}")?;
        if verbose {
            writeln!(out, "argument {} is {arg}", index + 1)?;
        } else {
            writeln!(out, "{arg}")?;
        }
    }
    Ok(())
}
