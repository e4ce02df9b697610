//! Single-dash command-line flag parsing.
//!
//! Declare flags with a name, a default and a description; the default's type
//! decides whether the flag is a string or a boolean switch. [`Options::parse`]
//! then splits an argument list into flag assignments and positional
//! arguments:
//!
//! - `-name=value` and `-name value` set string flags,
//! - `-name` switches boolean flags on,
//! - `--` ends flag parsing,
//! - any other argument is positional.
//!
//! ```
//! use dashopts::{Flag, Options};
//!
//! let mut options = Options::new([
//!     Flag::boolean("verbose", false, "Verbose output"),
//!     Flag::string("prefix", " ", "Prefix of output"),
//! ]);
//! let parsed = options
//!     .parse(["-verbose", "-prefix", ">", "one", "--", "-two"])
//!     .expect("declared flags parse");
//! assert!(options.bool("verbose"));
//! assert_eq!(options.string("prefix"), ">");
//! assert_eq!(parsed.args(), ["one", "-two"]);
//! ```

mod error;
mod flag;
mod help;
mod options;
mod parse;
mod terminate;

pub use error::ParseError;
pub use flag::{Flag, FlagKind, FlagValue};
pub use options::Options;
pub use parse::Parsed;
pub use terminate::{ProcessExit, Terminator, USAGE_EXIT_STATUS};
