//! Flag and option handlers.
//!
//! A [`Handler`] is registered under one or more names in a [`crate::Spec`].
//! Flags apply a [`Setter`] as soon as their name is seen; options pass the
//! next argument to a [`Validator`], which either yields a setter or rejects
//! the value with a message.

use std::fmt;
use std::sync::Arc;

/// Shared update function producing the next configuration value.
pub type Setter<C> = Arc<dyn Fn(C) -> C + Send + Sync>;

/// Shared function turning an option's raw value into a [`Setter`].
pub type Validator<C> = Arc<dyn Fn(&str) -> Result<Setter<C>, String> + Send + Sync>;

/// Behaviour attached to a name.
///
/// Cloning a handler shares the wrapped function, so the same handler can be
/// registered under a short and a long name.
pub enum Handler<C> {
    /// Stands alone: applies the setter without consuming another argument.
    Flag(Setter<C>),
    /// Takes a value: the following argument is passed to the validator.
    Option(Validator<C>),
}

impl<C: 'static> Handler<C> {
    /// Wraps `setter` as a flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use argfold::Handler;
    ///
    /// let verbose = Handler::flag(|level: u8| level.saturating_add(1));
    /// assert!(!verbose.takes_value());
    /// ```
    #[must_use]
    pub fn flag<F>(setter: F) -> Self
    where
        F: Fn(C) -> C + Send + Sync + 'static,
    {
        Self::Flag(Arc::new(setter))
    }

    /// Wraps `validator` as an option.
    ///
    /// The validator receives the raw value argument and returns either an
    /// update function or an error message for the user.
    ///
    /// # Examples
    ///
    /// ```
    /// use argfold::Handler;
    ///
    /// let name = Handler::option(|raw: &str| {
    ///     let owned = raw.to_owned();
    ///     Ok::<_, String>(move |_: String| owned.clone())
    /// });
    /// assert!(name.takes_value());
    /// ```
    #[must_use]
    pub fn option<V, S, E>(validator: V) -> Self
    where
        V: Fn(&str) -> Result<S, E> + Send + Sync + 'static,
        S: Fn(C) -> C + Send + Sync + 'static,
        E: Into<String> + 'static,
    {
        Self::Option(Arc::new(move |raw: &str| -> Result<Setter<C>, String> {
            match validator(raw) {
                Ok(setter) => Ok(Arc::new(setter)),
                Err(message) => Err(message.into()),
            }
        }))
    }
}

impl<C> Handler<C> {
    /// Returns `true` when the handler consumes the following argument.
    #[must_use]
    pub const fn takes_value(&self) -> bool {
        matches!(self, Self::Option(_))
    }
}

impl<C> Clone for Handler<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Flag(setter) => Self::Flag(Arc::clone(setter)),
            Self::Option(validator) => Self::Option(Arc::clone(validator)),
        }
    }
}

impl<C> fmt::Debug for Handler<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(_) => f.write_str("Flag(..)"),
            Self::Option(_) => f.write_str("Option(..)"),
        }
    }
}

/// Wraps `setter` as a flag handler.
///
/// Shorthand for [`Handler::flag`].
#[must_use]
pub fn flag<C, F>(setter: F) -> Handler<C>
where
    C: 'static,
    F: Fn(C) -> C + Send + Sync + 'static,
{
    Handler::flag(setter)
}

/// Wraps `validator` as an option handler.
///
/// Shorthand for [`Handler::option`].
#[must_use]
pub fn option<C, V, S, E>(validator: V) -> Handler<C>
where
    C: 'static,
    V: Fn(&str) -> Result<S, E> + Send + Sync + 'static,
    S: Fn(C) -> C + Send + Sync + 'static,
    E: Into<String> + 'static,
{
    Handler::option(validator)
}
