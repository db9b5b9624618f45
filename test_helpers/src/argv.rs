//! Shell-style splitting of argument lines.
//!
//! Behavioural tables read better as `"-ce mail@example.org"` than as string
//! arrays. [`split`] turns such a line into the argument vector a shell would
//! pass, honouring quotes so empty or spaced values can be written.
//!
//! # Examples
//!
//! ```
//! use argfold_test_helpers::argv;
//!
//! let args = argv::split("--word 'two words' ''").expect("valid line");
//! assert_eq!(args, ["--word", "two words", ""]);
//! ```

use anyhow::{Result, anyhow};

/// Splits `line` into arguments using POSIX shell quoting rules.
///
/// # Errors
///
/// Returns an error when `line` has unbalanced quotes or a trailing escape.
pub fn split(line: &str) -> Result<Vec<String>> {
    shlex::split(line).ok_or_else(|| anyhow!("malformed argument line: {line:?}"))
}
