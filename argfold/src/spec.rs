//! Mapping from flag and option names to their handlers.

use std::collections::BTreeMap;
use std::fmt;

use crate::{Handler, ParseResult, parse_args};

/// Immutable table of recognised names.
///
/// Names are matched exactly as written: `-c` and `--color` are independent
/// keys, and nothing is case-folded. Registering a name twice keeps the later
/// handler.
///
/// # Examples
///
/// ```
/// use argfold::{Spec, flag};
///
/// let quiet = flag(|_: bool| true);
/// let spec = Spec::new().with_names(["-q", "--quiet"], &quiet);
/// assert!(spec.contains("-q"));
/// assert_eq!(spec.names().collect::<Vec<_>>(), ["--quiet", "-q"]);
/// ```
pub struct Spec<C> {
    handlers: BTreeMap<String, Handler<C>>,
}

impl<C> Spec<C> {
    /// Creates an empty specification.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Registers `handler` under `name`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, handler: Handler<C>) -> Self {
        self.handlers.insert(name.into(), handler);
        self
    }

    /// Registers `handler` under every name in `names`.
    ///
    /// All names share the same underlying function, which is how a short
    /// name and its long alias are usually declared.
    #[must_use]
    pub fn with_names<I, N>(mut self, names: I, handler: &Handler<C>) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        for name in names {
            self.handlers.insert(name.into(), handler.clone());
        }
        self
    }

    /// Looks up the handler registered for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Handler<C>> {
        self.handlers.get(name)
    }

    /// Returns `true` when `name` has a handler.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Iterates over the registered names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` when no names are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Parses `args` starting from `conf`.
    ///
    /// Equivalent to [`parse_args`]`(self, conf, args)`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ParseError`] on the first lone dash, unrecognized
    /// name, missing option value, or rejected option value.
    pub fn parse<S: AsRef<str>>(&self, conf: C, args: &[S]) -> ParseResult<(C, Vec<String>)> {
        parse_args(self, conf, args)
    }
}

impl<C> Default for Spec<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Spec<C> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<C> fmt::Debug for Spec<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.handlers.iter()).finish()
    }
}

impl<C, K: Into<String>> FromIterator<(K, Handler<C>)> for Spec<C> {
    fn from_iter<T: IntoIterator<Item = (K, Handler<C>)>>(iter: T) -> Self {
        let mut spec = Self::new();
        spec.extend(iter);
        spec
    }
}

impl<C, K: Into<String>> Extend<(K, Handler<C>)> for Spec<C> {
    fn extend<T: IntoIterator<Item = (K, Handler<C>)>>(&mut self, iter: T) {
        self.handlers
            .extend(iter.into_iter().map(|(name, handler)| (name.into(), handler)));
    }
}
