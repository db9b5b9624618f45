//! Unit tests for the argument scan.

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};

use crate::{ParseError, Spec, flag, option};

/// Records every handler invocation so tests can assert on ordering.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Trace {
    events: Vec<String>,
}

impl Trace {
    fn with(mut self, event: String) -> Self {
        self.events.push(event);
        self
    }
}

fn record_flag(label: &'static str) -> crate::Handler<Trace> {
    flag(move |trace: Trace| trace.with(label.to_owned()))
}

fn record_option(label: &'static str) -> crate::Handler<Trace> {
    option(move |raw: &str| {
        if raw == "bad" {
            return Err(format!("{label} rejects {raw}"));
        }
        let event = format!("{label}={raw}");
        Ok(move |trace: Trace| trace.with(event.clone()))
    })
}

#[fixture]
fn spec() -> Spec<Trace> {
    Spec::new()
        .with("-a", record_flag("a"))
        .with("-b", record_flag("b"))
        .with("--long", record_flag("long"))
        .with("-o", record_option("o"))
        .with("-p", record_option("p"))
        .with("--opt", record_option("opt"))
}

fn run(spec: &Spec<Trace>, args: &[&str]) -> Result<(Vec<String>, Vec<String>)> {
    let (trace, rest) = spec.parse(Trace::default(), args)?;
    Ok((trace.events, rest))
}

fn run_err(spec: &Spec<Trace>, args: &[&str]) -> Result<ParseError> {
    match spec.parse(Trace::default(), args) {
        Ok((trace, rest)) => Err(anyhow!(
            "expected {args:?} to fail, got {:?} with {rest:?}",
            trace.events
        )),
        Err(err) => Ok(err),
    }
}

#[rstest]
fn empty_input_returns_default(spec: Spec<Trace>) -> Result<()> {
    let (events, rest) = run(&spec, &[])?;
    ensure!(events.is_empty() && rest.is_empty(), "{events:?} {rest:?}");
    Ok(())
}

#[rstest]
fn applies_updates_left_to_right(spec: Spec<Trace>) -> Result<()> {
    let (events, rest) = run(&spec, &["-a", "--opt", "x", "-b", "--long", "-a"])?;
    ensure!(
        events == ["a", "opt=x", "b", "long", "a"],
        "unexpected order: {events:?}"
    );
    ensure!(rest.is_empty(), "unexpected rest: {rest:?}");
    Ok(())
}

#[rstest]
#[case(&["--", "-a", "--", "-", "x"], &[], &["-a", "--", "-", "x"])]
#[case(&["-a", "--"], &["a"], &[])]
#[case(&["-a", "--", "--long"], &["a"], &["--long"])]
fn separator_returns_the_rest_untouched(
    spec: Spec<Trace>,
    #[case] args: &[&str],
    #[case] expected_events: &[&str],
    #[case] expected_rest: &[&str],
) -> Result<()> {
    let (events, rest) = run(&spec, args)?;
    ensure!(events == expected_events, "unexpected events: {events:?}");
    ensure!(rest == expected_rest, "unexpected rest: {rest:?}");
    Ok(())
}

#[rstest]
#[case(&["file"], &[], &["file"])]
#[case(&["-a", "file", "-b", "--", "-"], &["a"], &["file", "-b", "--", "-"])]
#[case(&["", "-a"], &[], &["", "-a"])]
fn first_positional_stops_scanning(
    spec: Spec<Trace>,
    #[case] args: &[&str],
    #[case] expected_events: &[&str],
    #[case] expected_rest: &[&str],
) -> Result<()> {
    let (events, rest) = run(&spec, args)?;
    ensure!(events == expected_events, "unexpected events: {events:?}");
    ensure!(rest == expected_rest, "unexpected rest: {rest:?}");
    Ok(())
}

#[rstest]
#[case(&["-ab"], &["-a", "-b"])]
#[case(&["-ao", "v", "-b"], &["-a", "-o", "v", "-b"])]
#[case(&["-oa", "v"], &["-o", "v", "-a"])]
fn cluster_matches_separate_tokens(
    spec: Spec<Trace>,
    #[case] clustered: &[&str],
    #[case] separate: &[&str],
) -> Result<()> {
    let joined = run(&spec, clustered)?;
    let split = run(&spec, separate)?;
    ensure!(joined == split, "{clustered:?} gave {joined:?}, {separate:?} gave {split:?}");
    Ok(())
}

#[rstest]
fn every_option_in_a_cluster_takes_the_next_argument(spec: Spec<Trace>) -> Result<()> {
    let (events, rest) = run(&spec, &["-opa", "first", "second", "tail"])?;
    ensure!(
        events == ["o=first", "p=second", "a"],
        "unexpected events: {events:?}"
    );
    ensure!(rest == ["tail"], "unexpected rest: {rest:?}");
    Ok(())
}

#[rstest]
#[case("--")]
#[case("-")]
#[case("-a")]
#[case("--long")]
#[case("")]
fn option_values_are_never_classified(spec: Spec<Trace>, #[case] value: &str) -> Result<()> {
    let (events, rest) = run(&spec, &["-o", value, "-b"])?;
    ensure!(
        events == [format!("o={value}"), String::from("b")],
        "unexpected events: {events:?}"
    );
    ensure!(rest.is_empty(), "unexpected rest: {rest:?}");
    Ok(())
}

#[rstest]
fn lone_dash_is_rejected(spec: Spec<Trace>) -> Result<()> {
    let err = run_err(&spec, &["-a", "-", "file"])?;
    ensure!(err == ParseError::LoneDash, "unexpected error: {err:?}");
    ensure!(
        err.to_string() == "- is not a valid flag or option name",
        "unexpected message: {err}"
    );
    Ok(())
}

#[rstest]
#[case(&["-z"], "-z")]
#[case(&["-az"], "-z")]
#[case(&["-za"], "-z")]
#[case(&["--zzz", "-z"], "--zzz")]
#[case(&["-a-"], "-a-")]
#[case(&["-a-b"], "-a-b")]
fn unrecognized_names_fail_wherever_they_appear(
    spec: Spec<Trace>,
    #[case] args: &[&str],
    #[case] name: &str,
) -> Result<()> {
    let err = run_err(&spec, args)?;
    ensure!(
        err == ParseError::Unrecognized { name: name.to_owned() },
        "unexpected error: {err:?}"
    );
    ensure!(err.to_string() == format!("{name} is unrecognized"), "{err}");
    Ok(())
}

#[rstest]
#[case(&["-o"], "-o")]
#[case(&["--opt"], "--opt")]
#[case(&["-ao"], "-o")]
#[case(&["-op", "x"], "-p")]
fn options_without_values_fail(
    spec: Spec<Trace>,
    #[case] args: &[&str],
    #[case] name: &str,
) -> Result<()> {
    let err = run_err(&spec, args)?;
    ensure!(
        err == ParseError::MissingValue { name: name.to_owned() },
        "unexpected error: {err:?}"
    );
    ensure!(err.to_string() == format!("{name} requires a value"), "{err}");
    Ok(())
}

#[rstest]
fn rejection_message_is_surfaced_verbatim(spec: Spec<Trace>) -> Result<()> {
    let err = run_err(&spec, &["-a", "--opt", "bad", "-z"])?;
    ensure!(
        err == ParseError::Rejected {
            name: "--opt".into(),
            value: "bad".into(),
            message: "opt rejects bad".into(),
        },
        "unexpected error: {err:?}"
    );
    ensure!(err.to_string() == "opt rejects bad", "{err}");
    Ok(())
}

#[rstest]
#[case(&["-z", "-"], ParseError::Unrecognized { name: "-z".into() })]
#[case(&["-", "-z"], ParseError::LoneDash)]
#[case(&["-zo"], ParseError::Unrecognized { name: "-z".into() })]
#[case(&["-oz"], ParseError::MissingValue { name: "-o".into() })]
#[case(&["-o", "bad", "-o"], ParseError::Rejected {
    name: "-o".into(),
    value: "bad".into(),
    message: "o rejects bad".into(),
})]
fn leftmost_error_wins(
    spec: Spec<Trace>,
    #[case] args: &[&str],
    #[case] expected: ParseError,
) -> Result<()> {
    let err = run_err(&spec, args)?;
    ensure!(err == expected, "unexpected error: {err:?}");
    Ok(())
}

#[test]
fn accepts_owned_argument_lists() -> Result<()> {
    let spec = Spec::new().with("-n", flag(|n: u32| n.saturating_add(1)));
    let args: Vec<String> = ["-nn", "-n", "rest"].map(String::from).to_vec();
    let (count, rest) = spec.parse(0, &args)?;
    ensure!(count == 3, "unexpected count {count}");
    ensure!(rest == ["rest"], "unexpected rest: {rest:?}");
    ensure!(args.len() == 3, "input must be left untouched");
    Ok(())
}

#[test]
fn empty_spec_rejects_every_name() -> Result<()> {
    let spec = Spec::<()>::new();
    let err = spec
        .parse((), &["--anything"])
        .err()
        .ok_or_else(|| anyhow!("expected failure"))?;
    ensure!(err.name() == Some("--anything"), "unexpected error: {err:?}");
    let ((), rest) = spec.parse((), &["plain"])?;
    ensure!(rest == ["plain"], "unexpected rest: {rest:?}");
    Ok(())
}

#[test]
fn hyphenated_short_name_is_matched_whole() -> Result<()> {
    let spec = Spec::new()
        .with("-a", flag(|n: u32| n.saturating_add(1)))
        .with("-a-b", flag(|n: u32| n.saturating_add(100)));
    let (total, rest) = spec.parse(0, &["-a-b", "-a", "tail"])?;
    ensure!(total == 101, "unexpected total {total}");
    ensure!(rest == ["tail"], "unexpected rest: {rest:?}");
    Ok(())
}
