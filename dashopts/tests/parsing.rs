//! Behaviour of `Options::parse` across whole argument vectors.

use anyhow::{Result, ensure};
use dashopts::{Flag, Options, ParseError};
use rstest::{fixture, rstest};
use test_helpers::argv;

#[fixture]
fn options() -> Options {
    Options::new([
        Flag::boolean("h", false, "Show Help"),
        Flag::string("foo", "bar", "Specify foo"),
    ])
}

#[rstest]
#[case::empty(&[])]
#[case::single(&["a"])]
#[case::several(&["a", "b", "c"])]
#[case::unicode(&["ünïcode", "with space", "="])]
fn plain_arguments_are_positional(mut options: Options, #[case] args: &[&str]) -> Result<()> {
    let parsed = options.parse(argv(args))?;
    ensure!(parsed.args() == args, "expected {args:?}, got {parsed:?}");
    Ok(())
}

#[rstest]
fn presence_switches_boolean_on(mut options: Options) -> Result<()> {
    options.parse(argv(&["-h"]))?;
    ensure!(options.bool("h"), "-h should switch h on");
    Ok(())
}

#[rstest]
#[case::inline(&["-foo=baz"])]
#[case::separate(&["-foo", "baz"])]
fn string_flag_takes_value(mut options: Options, #[case] args: &[&str]) -> Result<()> {
    let parsed = options.parse(argv(args))?;
    ensure!(options.string("foo") == "baz", "foo = {:?}", options.string("foo"));
    ensure!(parsed.is_empty(), "value must not be positional: {parsed:?}");
    Ok(())
}

#[rstest]
fn unknown_option_fails_fast_without_rollback(mut options: Options) -> Result<()> {
    let err = options
        .parse(argv(&["-h", "-boo=baz", "-foo=after"]))
        .err()
        .ok_or_else(|| anyhow::anyhow!("-boo should be rejected"))?;
    ensure!(
        matches!(&err, ParseError::UnknownOption { token } if token == "-boo"),
        "unexpected error {err:?}"
    );
    ensure!(err.to_string() == "Invalid option: '-boo'", "message: {err}");
    ensure!(options.bool("h"), "h set before the failure must stay set");
    ensure!(options.string("foo") == "bar", "foo after the failure must be untouched");
    Ok(())
}

#[rstest]
fn double_dash_makes_everything_positional(mut options: Options) -> Result<()> {
    let parsed = options.parse(argv(&["a", "--", "-boo=baz", "-h"]))?;
    ensure!(parsed.args() == ["a", "-boo=baz", "-h"], "got {parsed:?}");
    ensure!(!options.bool("h"), "-h after -- must not be interpreted");
    Ok(())
}

#[rstest]
fn bare_dash_is_rejected(mut options: Options) {
    let outcome = options.parse(argv(&["a", "-"]));
    assert_eq!(
        outcome.map_err(|err| err.token().to_owned()),
        Err("-".to_owned())
    );
}

#[rstest]
fn trailing_string_flag_becomes_empty(mut options: Options) -> Result<()> {
    options.parse(argv(&["-foo"]))?;
    ensure!(options.string("foo").is_empty(), "foo should be cleared");
    Ok(())
}

#[rstest]
fn string_flag_swallows_flag_shaped_value(mut options: Options) -> Result<()> {
    let parsed = options.parse(argv(&["-foo", "-h", "rest"]))?;
    ensure!(options.string("foo") == "-h", "foo = {:?}", options.string("foo"));
    ensure!(!options.bool("h"), "-h was consumed as a value");
    ensure!(parsed.args() == ["rest"], "got {parsed:?}");
    Ok(())
}

#[test]
fn accumulation_across_parses_is_explicit() -> Result<()> {
    let mut options = Options::default();
    let first = options.parse(["one"])?;
    let second = options.parse(["two"])?;
    ensure!(second.args() == ["two"], "second parse starts empty");
    let merged = first.merge(second);
    ensure!(merged.args() == ["one", "two"], "got {merged:?}");
    Ok(())
}
