//! CLI command implementations

pub mod init;
pub mod list;

pub use init::{InitCommand, ScaffoldSummary};
pub use list::ListCommand;
