//! Greeting planning and rendering for the `hello_args` demo.
use std::io::{self, Write};

use crate::cli::{CommandLine, DeliveryMode};
use crate::error::{Result, ValidationError};

/// Computed greeting ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingPlan {
    message: String,
    repeat: u16,
}

impl GreetingPlan {
    /// Returns the formatted greeting line.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns how many times the line is written.
    #[must_use]
    pub const fn repeat(&self) -> u16 {
        self.repeat
    }
}

/// Builds a [`GreetingPlan`] from a parsed command line.
///
/// Recipients default to `World` when no positional arguments were given.
///
/// # Errors
///
/// Returns a [`crate::error::HelloArgsError`] when the flags conflict or a
/// recipient is blank.
///
/// # Examples
///
/// ```rust
/// use hello_args::cli::parse_command_line;
/// use hello_args::message::build_plan;
///
/// let parsed = parse_command_line(&["-s", "Hi", "Ada", "Grace"]).expect("valid arguments");
/// let plan = build_plan(&parsed).expect("valid plan");
/// assert_eq!(plan.message(), "Hi, Ada and Grace!");
/// ```
pub fn build_plan(command: &CommandLine) -> Result<GreetingPlan> {
    let args = &command.args;
    args.validate()?;
    if let Some(index) = command
        .recipients
        .iter()
        .position(|name| name.trim().is_empty())
    {
        return Err(ValidationError::BlankRecipient(index).into());
    }
    let recipients = if command.recipients.is_empty() {
        String::from("World")
    } else {
        command
            .recipients
            .iter()
            .map(|name| name.trim())
            .collect::<Vec<_>>()
            .join(" and ")
    };
    let base = format!("{}, {recipients}", args.salutation);
    let message = match args.delivery_mode() {
        DeliveryMode::Standard => format!("{base}!"),
        DeliveryMode::Enthusiastic => format!("{}!", base.to_uppercase()),
        DeliveryMode::Quiet => format!("{}...", base.to_lowercase()),
    };
    Ok(GreetingPlan {
        message,
        repeat: args.times,
    })
}

fn write_plan_to<W: Write>(writer: &mut W, plan: &GreetingPlan) -> io::Result<()> {
    for _ in 0..plan.repeat() {
        writer.write_all(plan.message().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Prints the greeting to standard output.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing to standard output fails.
pub fn print_plan(plan: &GreetingPlan) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_plan_to(&mut stdout, plan)
}
