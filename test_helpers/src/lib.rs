//! Test helpers shared across crates.
//!
//! Provides the reference demo configuration with its [`argfold::Spec`], and
//! a shell-style splitter for writing argument lists as single strings.

pub mod argv;
pub mod demo;
