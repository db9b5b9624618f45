//! Extensions for turning arbitrary errors into validator messages.
//!
//! Option validators report failures as plain `String` messages. These
//! helpers remove the `.map_err(|e| e.to_string())` noise from validators that
//! perform their own coercion.
//!
//! # Examples
//!
//! ```
//! use argfold::{RejectExt, Spec, option};
//!
//! let port = option(|raw: &str| {
//!     let value = raw.parse::<u16>().reject_with(|err| format!("{raw:?} is not a port: {err}"))?;
//!     Ok::<_, String>(move |_: u16| value)
//! });
//! let spec = Spec::new().with("--port", port);
//!
//! let (chosen, _) = spec.parse(80, &["--port", "8080"])?;
//! assert_eq!(chosen, 8080);
//!
//! let err = spec.parse(80, &["--port", "http"]).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "\"http\" is not a port: invalid digit found in string"
//! );
//! # Ok::<(), argfold::ParseError>(())
//! ```

use std::fmt::Display;

/// Maps the error side of a `Result` into a validator message.
pub trait RejectExt<T, E> {
    /// Uses the error's `Display` output as the message.
    ///
    /// # Errors
    ///
    /// Returns the rendered message when `self` is `Err`.
    fn rejected(self) -> Result<T, String>;

    /// Builds the message with `describe`.
    ///
    /// # Errors
    ///
    /// Returns the message produced by `describe` when `self` is `Err`.
    fn reject_with<F, M>(self, describe: F) -> Result<T, String>
    where
        F: FnOnce(E) -> M,
        M: Into<String>;
}

impl<T, E> RejectExt<T, E> for Result<T, E>
where
    E: Display,
{
    fn rejected(self) -> Result<T, String> {
        self.map_err(|err| err.to_string())
    }

    fn reject_with<F, M>(self, describe: F) -> Result<T, String>
    where
        F: FnOnce(E) -> M,
        M: Into<String>,
    {
        self.map_err(|err| describe(err).into())
    }
}
