//! Left-to-right scan that folds arguments into a configuration value.

use tracing::{debug, trace};

use crate::token::{Token, classify};
use crate::{Handler, ParseError, ParseResult, Spec};

/// Parses `args` against `spec`, starting from `conf`.
///
/// Arguments are scanned left to right. Names are looked up in `spec`: flags
/// update the configuration directly, options consume the next argument
/// verbatim and hand it to their validator. Scanning stops at `--` (which is
/// dropped) or at the first argument not starting with `-` (which is kept).
/// The final configuration is returned with the unscanned arguments.
///
/// A short cluster such as `-ce` is handled exactly as `-c -e`; every option
/// in the cluster takes the next unconsumed argument in turn.
///
/// # Errors
///
/// Stops at the first failure in scan order and returns:
/// - [`ParseError::LoneDash`] for a `-` argument;
/// - [`ParseError::Unrecognized`] for a name missing from `spec`;
/// - [`ParseError::MissingValue`] for an option with no argument after it;
/// - [`ParseError::Rejected`] when a validator refuses its value.
///
/// # Examples
///
/// ```
/// use argfold::{Spec, option, parse_args};
///
/// let word = option(|raw: &str| {
///     let owned = raw.to_owned();
///     Ok::<_, String>(move |mut words: Vec<String>| {
///         words.push(owned.clone());
///         words
///     })
/// });
/// let spec = Spec::new().with_names(["-w", "--word"], &word);
///
/// let (words, rest) = parse_args(&spec, Vec::new(), &["--word", "foo", "bar"])?;
/// assert_eq!(words, ["foo"]);
/// assert_eq!(rest, ["bar"]);
/// # Ok::<(), argfold::ParseError>(())
/// ```
pub fn parse_args<C, S>(spec: &Spec<C>, conf: C, args: &[S]) -> ParseResult<(C, Vec<String>)>
where
    S: AsRef<str>,
{
    let mut current = conf;
    let mut idx = 0;
    while let Some(arg) = args.get(idx) {
        let names = match classify(arg.as_ref()) {
            Token::LoneDash => {
                debug!(index = idx, "lone dash in argument list");
                return Err(ParseError::LoneDash);
            }
            Token::Separator => {
                debug!(index = idx, "separator ends name processing");
                return Ok((current, remaining(args, idx + 1)));
            }
            Token::Positional => {
                debug!(index = idx, "positional argument ends name processing");
                return Ok((current, remaining(args, idx)));
            }
            Token::Names(names) => names,
        };
        let mut next = idx + 1;
        for name in names {
            current = dispatch(spec, current, name, args, &mut next)?;
        }
        idx = next;
    }
    Ok((current, Vec::new()))
}

/// Applies the handler registered for `name`, consuming `args[*next]` when it
/// is an option.
fn dispatch<C, S>(
    spec: &Spec<C>,
    conf: C,
    name: String,
    args: &[S],
    next: &mut usize,
) -> ParseResult<C>
where
    S: AsRef<str>,
{
    let Some(handler) = spec.get(&name) else {
        debug!(%name, "unrecognized name");
        return Err(ParseError::Unrecognized { name });
    };
    match handler {
        Handler::Flag(setter) => {
            trace!(%name, "applying flag");
            Ok(setter(conf))
        }
        Handler::Option(validator) => {
            let Some(raw) = args.get(*next) else {
                debug!(%name, "option has no value");
                return Err(ParseError::MissingValue { name });
            };
            *next += 1;
            let value = raw.as_ref();
            trace!(%name, value, "applying option");
            match validator(value) {
                Ok(setter) => Ok(setter(conf)),
                Err(message) => {
                    debug!(%name, value, %message, "option value rejected");
                    Err(ParseError::Rejected {
                        name,
                        value: value.to_owned(),
                        message,
                    })
                }
            }
        }
    }
}

fn remaining<S: AsRef<str>>(args: &[S], from: usize) -> Vec<String> {
    args.get(from..).map_or_else(Vec::new, |rest| {
        rest.iter().map(|arg| arg.as_ref().to_owned()).collect()
    })
}

#[cfg(test)]
mod tests;
