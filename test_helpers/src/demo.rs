//! Reference configuration used by behavioural tests.
//!
//! `-c`/`--color` is a flag enabling colour, `-e`/`--email` is an option that
//! only accepts values containing `@`, and `-w`/`--word` is an option that
//! appends to a word list.

use argfold::{Handler, Spec, flag, option};

/// Configuration value threaded through the demo parse.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoConf {
    /// Set by `-c`/`--color`.
    pub color: bool,
    /// Set by `-e`/`--email`; the last accepted address wins.
    pub email: Option<String>,
    /// Accumulated by `-w`/`--word` in argument order.
    pub words: Vec<String>,
}

impl DemoConf {
    /// Returns a copy with `color` enabled.
    #[must_use]
    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }

    /// Returns a copy with `email` set.
    #[must_use]
    pub fn with_email(self, email: &str) -> Self {
        Self {
            email: Some(email.to_owned()),
            ..self
        }
    }

    /// Returns a copy with `word` appended.
    #[must_use]
    pub fn with_word(mut self, word: &str) -> Self {
        self.words.push(word.to_owned());
        self
    }
}

/// Flag handler enabling colour.
#[must_use]
pub fn color() -> Handler<DemoConf> {
    flag(DemoConf::with_color)
}

/// Option handler accepting values that contain `@`.
#[must_use]
pub fn email() -> Handler<DemoConf> {
    option(|raw: &str| {
        if !raw.contains('@') {
            return Err(format!("{raw:?} is not a valid email address"));
        }
        let address = raw.to_owned();
        Ok(move |conf: DemoConf| conf.with_email(&address))
    })
}

/// Option handler appending its value to the word list.
#[must_use]
pub fn word() -> Handler<DemoConf> {
    option(|raw: &str| {
        let owned = raw.to_owned();
        Ok::<_, String>(move |conf: DemoConf| conf.with_word(&owned))
    })
}

/// Builds the demo specification with short and long aliases.
///
/// # Examples
///
/// ```
/// use argfold_test_helpers::demo::{DemoConf, demo_spec};
///
/// let (conf, rest) = demo_spec()
///     .parse(DemoConf::default(), &["--color", "file"])
///     .expect("valid arguments");
/// assert!(conf.color);
/// assert_eq!(rest, ["file"]);
/// ```
#[must_use]
pub fn demo_spec() -> Spec<DemoConf> {
    Spec::new()
        .with_names(["-c", "--color"], &color())
        .with_names(["-e", "--email"], &email())
        .with_names(["-w", "--word"], &word())
}
