//! Library facade for the `hello_args` demo so integration tests can reuse
//! the argument specification and greeting helpers.

pub mod cli;
pub mod error;
pub mod message;
