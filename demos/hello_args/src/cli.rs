//! Argument specification for the `hello_args` demo.
//!
//! Every flag and option is declared once in [`spec`]; positionals after the
//! recognised names become the greeting's recipients.
use std::sync::LazyLock;

use argfold::{RejectExt, Spec, flag, option};
use tracing::debug;

use crate::error::{Result, ValidationError};

/// Greeting options assembled from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelloArgs {
    /// Word opening the greeting.
    pub salutation: String,
    /// Number of times the greeting is repeated.
    pub times: u16,
    /// Shout the greeting.
    pub excited: bool,
    /// Whisper the greeting.
    pub quiet: bool,
}

impl Default for HelloArgs {
    fn default() -> Self {
        Self {
            salutation: String::from("Hello"),
            times: 1,
            excited: false,
            quiet: false,
        }
    }
}

/// Greeting delivery style derived from the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Standard delivery keeps the message as-is.
    Standard,
    /// Enthusiastic delivery shouts the greeting.
    Enthusiastic,
    /// Quiet delivery whispers the message.
    Quiet,
}

impl HelloArgs {
    /// Ensures the parsed flags can be combined.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ConflictingDeliveryModes`] when both
    /// `--excited` and `--quiet` were given.
    pub const fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.excited && self.quiet {
            return Err(ValidationError::ConflictingDeliveryModes);
        }
        Ok(())
    }

    /// Returns the delivery mode selected by the flags.
    #[must_use]
    pub const fn delivery_mode(&self) -> DeliveryMode {
        match (self.excited, self.quiet) {
            (true, false) => DeliveryMode::Enthusiastic,
            (false, true) => DeliveryMode::Quiet,
            _ => DeliveryMode::Standard,
        }
    }
}

static SPEC: LazyLock<Spec<HelloArgs>> = LazyLock::new(|| {
    let salutation = option(|raw: &str| {
        let word = raw.trim();
        if word.is_empty() {
            return Err(String::from("salutation must contain visible characters"));
        }
        let owned = word.to_owned();
        Ok(move |args: HelloArgs| HelloArgs {
            salutation: owned.clone(),
            ..args
        })
    });
    let times = option(|raw: &str| {
        let count = raw.parse::<u16>().reject_with(|_| not_a_count(raw))?;
        if count == 0 {
            return Err(not_a_count(raw));
        }
        Ok::<_, String>(move |args: HelloArgs| HelloArgs {
            times: count,
            ..args
        })
    });
    let excited = flag(|args: HelloArgs| HelloArgs {
        excited: true,
        ..args
    });
    let quiet = flag(|args: HelloArgs| HelloArgs {
        quiet: true,
        ..args
    });
    Spec::new()
        .with_names(["-s", "--salutation"], &salutation)
        .with_names(["-n", "--times"], &times)
        .with_names(["-x", "--excited"], &excited)
        .with_names(["-q", "--quiet"], &quiet)
});

fn not_a_count(raw: &str) -> String {
    format!("{raw:?} is not a positive count")
}

/// Returns the demo's argument specification.
#[must_use]
pub fn spec() -> &'static Spec<HelloArgs> {
    &SPEC
}

/// Parsed command line: options plus recipients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Options folded from the recognised names.
    pub args: HelloArgs,
    /// Positional arguments, each naming one recipient.
    pub recipients: Vec<String>,
}

/// Parses `args`, excluding the program name.
///
/// # Errors
///
/// Returns a [`crate::error::HelloArgsError::Parse`] when the arguments do
/// not match [`spec`].
///
/// # Examples
///
/// ```rust
/// use hello_args::cli::parse_command_line;
///
/// let parsed = parse_command_line(&["-xn", "2", "Ada"]).expect("valid arguments");
/// assert!(parsed.args.excited);
/// assert_eq!(parsed.args.times, 2);
/// assert_eq!(parsed.recipients, ["Ada"]);
/// ```
pub fn parse_command_line<S: AsRef<str>>(args: &[S]) -> Result<CommandLine> {
    let (parsed, recipients) = spec().parse(HelloArgs::default(), args)?;
    debug!(?parsed, ?recipients, "parsed command line");
    Ok(CommandLine {
        args: parsed,
        recipients,
    })
}
