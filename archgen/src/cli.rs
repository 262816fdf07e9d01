//! Command-line interface
//!
//! Options are read as plain strings so that missing values and unknown
//! selectors are reported by the commands themselves, in the order the
//! scaffold runs, rather than rejected up front by the parser.

use clap::{ArgAction, Parser};
use console::style;

use crate::catalog;
use crate::commands::{InitCommand, ListCommand};
use crate::error::Result;

/// archgen command line
#[derive(Debug, Parser)]
#[command(name = "archgen")]
#[command(version)]
#[command(about = "Scaffold architecture-pattern folder layouts", long_about = None)]
pub struct Cli {
    /// Path of the project root to create or populate
    #[arg(long = "folder-name", value_name = "NAME", default_value = "")]
    pub folder_name: String,

    /// Architecture type (ddd, clean, layered, mvc)
    #[arg(long = "type", value_name = "TYPE", default_value = "")]
    pub arch_type: String,

    /// Programming language (go, python, java, javascript)
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// List the available architecture types and languages, then exit
    #[arg(long)]
    pub list: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns the first fatal error; see [`InitCommand::execute`].
    pub fn run(&self) -> Result<()> {
        if self.list {
            ListCommand::execute();
            return Ok(());
        }

        let cmd = InitCommand::new(&self.folder_name, &self.arch_type, self.lang.as_deref())?;
        let summary = cmd.execute()?;

        if !summary.warnings.is_empty() {
            eprintln!(
                "{} {} folder(s) could not be created",
                style("warning:").yellow().bold(),
                summary.warnings.len()
            );
        }
        println!("{}", style(summary.message()).green().bold());

        Ok(())
    }
}

/// Usage text printed on a usage error
#[must_use]
pub fn usage() -> String {
    format!(
        "Usage: archgen --folder-name <name> --type <architecture-type> [--lang <language>]\n\
         Available architecture types: {}\n\
         Available languages: {}",
        catalog::architecture_names().join(", "),
        catalog::language_names().join(", "),
    )
}
