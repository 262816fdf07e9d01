//! Project scaffolding command

use console::style;
use std::path::{Path, PathBuf};

use crate::catalog::{self, ArchitectureProfile, LanguageProfile};
use crate::error::{Error, FolderError, Result};
use crate::materialize::{self, MaterializeReport};

/// Scaffold an architecture layout, optionally with a language layout
#[derive(Debug)]
pub struct InitCommand {
    root: PathBuf,
    arch_type: String,
    lang: Option<String>,
}

/// What a successful run produced
#[derive(Debug)]
pub struct ScaffoldSummary {
    /// Project root
    pub root: PathBuf,
    /// Architecture pattern that was applied
    pub architecture: &'static ArchitectureProfile,
    /// Language profile that was applied, if any
    pub language: Option<&'static LanguageProfile>,
    /// Distinct folders created across both passes, in first-seen order
    pub created: Vec<PathBuf>,
    /// Per-folder failures that were skipped
    pub warnings: Vec<FolderError>,
    /// README path when a language profile was applied
    pub readme: Option<PathBuf>,
}

impl ScaffoldSummary {
    /// One-line confirmation shown after a successful run
    #[must_use]
    pub fn message(&self) -> String {
        let mut message = format!("Successfully created {} architecture", self.architecture.name);
        if let Some(language) = self.language {
            message.push_str(&format!(" with {} language structure", language.name));
        }
        message.push_str(&format!(" in folder: {}", self.root.display()));
        message
    }

    fn absorb(&mut self, report: MaterializeReport) {
        for path in report.created {
            if !self.created.contains(&path) {
                self.created.push(path);
            }
        }
        self.warnings.extend(report.failures);
        if report.readme.is_some() {
            self.readme = report.readme;
        }
    }
}

impl InitCommand {
    /// Create a new command instance
    ///
    /// An empty `lang` is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] if the folder name or architecture type is
    /// empty. Selector names are not checked here.
    pub fn new(folder_name: &str, arch_type: &str, lang: Option<&str>) -> Result<Self> {
        if folder_name.is_empty() {
            return Err(Error::Usage("--folder-name"));
        }
        if arch_type.is_empty() {
            return Err(Error::Usage("--type"));
        }

        Ok(Self {
            root: PathBuf::from(folder_name),
            arch_type: arch_type.to_string(),
            lang: lang.filter(|l| !l.is_empty()).map(str::to_string),
        })
    }

    /// Project root this command writes into
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Execute the command
    ///
    /// Steps run in a fixed order: root, architecture, language. A fatal
    /// error stops the run but leaves whatever was already created.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be created, a selector is not in
    /// the catalog, or the language README cannot be written.
    pub fn execute(&self) -> Result<ScaffoldSummary> {
        materialize::create_root(&self.root)?;

        let architecture = catalog::architecture(&self.arch_type)?;
        println!(
            "{} {} {}",
            style("Creating").green().bold(),
            style(architecture.title).bold(),
            style(format!("in {}", self.root.display())).cyan().bold()
        );

        let mut summary = ScaffoldSummary {
            root: self.root.clone(),
            architecture,
            language: None,
            created: Vec::new(),
            warnings: Vec::new(),
            readme: None,
        };

        let report = materialize::materialize_folders(&self.root, architecture.folders);
        self.print_report(&report);
        summary.absorb(report);

        if let Some(lang) = &self.lang {
            let language = catalog::language(lang)?;
            println!(
                "{} {}",
                style("Adding").green().bold(),
                style(format!("{} project structure", language.title)).bold()
            );

            let report = materialize::materialize_language(&self.root, language)?;
            self.print_report(&report);
            summary.absorb(report);
            summary.language = Some(language);
        }

        tracing::info!(
            root = %self.root.display(),
            architecture = architecture.name,
            language = summary.language.map(|l| l.name),
            warnings = summary.warnings.len(),
            "scaffold complete"
        );

        Ok(summary)
    }

    fn print_report(&self, report: &MaterializeReport) {
        for path in &report.created {
            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            println!("  {} {}", style("✓").green(), style(relative.display()).dim());
        }
        for failure in &report.failures {
            eprintln!("  {} {failure}", style("warning:").yellow().bold());
        }
    }
}
