//! Core crate for the `argfold` argument parser.
//!
//! `argfold` folds a list of command-line arguments into a caller-defined
//! configuration value. A [`Spec`] maps names such as `-c` or `--color` to a
//! [`Handler`]: either a flag, which updates the configuration on its own, or
//! an option, which validates the following argument before updating it.
//! [`parse_args`] scans the arguments left to right and returns the final
//! configuration together with the positional arguments that follow the
//! recognised names.
//!
//! ```
//! use argfold::{Spec, flag, option, parse_args};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Conf {
//!     color: bool,
//!     email: Option<String>,
//! }
//!
//! let color = flag(|conf: Conf| Conf { color: true, ..conf });
//! let email = option(|raw: &str| {
//!     if raw.contains('@') {
//!         let address = raw.to_owned();
//!         Ok(move |conf: Conf| Conf { email: Some(address.clone()), ..conf })
//!     } else {
//!         Err(format!("{raw:?} is not a valid email address"))
//!     }
//! });
//! let spec = Spec::new()
//!     .with_names(["-c", "--color"], &color)
//!     .with_names(["-e", "--email"], &email);
//!
//! let (conf, rest) = parse_args(&spec, Conf::default(), &["-ce", "mail@example.org", "file"])?;
//! assert!(conf.color);
//! assert_eq!(conf.email.as_deref(), Some("mail@example.org"));
//! assert_eq!(rest, ["file"]);
//! # Ok::<(), argfold::ParseError>(())
//! ```

mod error;
mod handler;
mod parse;
mod result_ext;
mod spec;
pub mod token;

pub use error::{ParseError, ParseResult};
pub use handler::{Handler, Setter, Validator, flag, option};
pub use parse::parse_args;
pub use result_ext::RejectExt;
pub use spec::Spec;
