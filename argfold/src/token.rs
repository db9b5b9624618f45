//! Classification of raw argument tokens.
//!
//! [`classify`] decides how the scanner treats one argument. Name-bearing
//! tokens are returned as [`Names`], an iterator that yields a single name for
//! `--long` and `-s`, or one `-c` name per character for a short cluster such
//! as `-xyz`. A short token containing a further hyphen, like `-a-b`, is not a
//! cluster and is looked up whole.

use std::str::Chars;

/// Shape of a single raw argument.
#[derive(Debug, Clone)]
pub enum Token<'a> {
    /// Exactly `--`: ends name processing.
    Separator,
    /// Exactly `-`: never a valid name.
    LoneDash,
    /// A long name, a single short name, or an expanded short cluster.
    Names(Names<'a>),
    /// Anything not starting with `-`, including the empty string.
    Positional,
}

/// Names carried by one token, in the order they appear.
#[derive(Debug, Clone)]
pub struct Names<'a> {
    whole: Option<&'a str>,
    cluster: Chars<'a>,
}

impl<'a> Names<'a> {
    fn whole(token: &'a str) -> Self {
        Self {
            whole: Some(token),
            cluster: "".chars(),
        }
    }

    fn cluster(shorts: &'a str) -> Self {
        Self {
            whole: None,
            cluster: shorts.chars(),
        }
    }
}

impl Iterator for Names<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.whole.take() {
            Some(name) => Some(name.to_owned()),
            None => self.cluster.next().map(|ch| format!("-{ch}")),
        }
    }
}

/// Classifies `token`.
///
/// # Examples
///
/// ```
/// use argfold::token::{Token, classify};
///
/// let Token::Names(names) = classify("-xyz") else { panic!("expected a cluster") };
/// assert_eq!(names.collect::<Vec<_>>(), ["-x", "-y", "-z"]);
/// assert!(matches!(classify("--"), Token::Separator));
/// assert!(matches!(classify("file.txt"), Token::Positional));
/// ```
#[must_use]
pub fn classify(token: &str) -> Token<'_> {
    match token {
        "--" => Token::Separator,
        "-" => Token::LoneDash,
        _ if token.starts_with("--") => Token::Names(Names::whole(token)),
        _ => match token.strip_prefix('-') {
            None => Token::Positional,
            Some(shorts) if shorts.chars().nth(1).is_none() || shorts.contains('-') => {
                Token::Names(Names::whole(token))
            }
            Some(shorts) => Token::Names(Names::cluster(shorts)),
        },
    }
}
