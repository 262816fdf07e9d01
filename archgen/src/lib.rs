//! archgen library
//!
//! Scaffolds folder layouts for common architecture patterns (DDD, Clean,
//! Layered, MVC) with optional language conventions (Go, Python, Java,
//! JavaScript). Every generated folder receives an empty `.gitkeep` so that
//! version control keeps it.
//!
//! # Example
//!
//! ```rust,no_run
//! use archgen::commands::InitCommand;
//!
//! # fn main() -> archgen::Result<()> {
//! let summary = InitCommand::new("svc", "clean", Some("go"))?.execute()?;
//! println!("{}", summary.message());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod error;
pub mod materialize;
pub mod observability;

pub use catalog::{ArchitectureProfile, LanguageProfile};
pub use cli::Cli;
pub use error::{Error, FolderError, Result};
pub use materialize::{MaterializeReport, PLACEHOLDER_FILE, README_FILE};
