//! Folder catalog
//!
//! Fixed lookup tables mapping architecture pattern names and language names
//! to the folders they scaffold. Paths are relative to the project root and
//! listed in creation order.

use crate::error::{Error, Result};

/// Folder layout for an architecture pattern
#[derive(Debug, PartialEq, Eq)]
pub struct ArchitectureProfile {
    /// Selector accepted by `--type`
    pub name: &'static str,
    /// Human-readable pattern name
    pub title: &'static str,
    /// Relative folder paths, in creation order
    pub folders: &'static [&'static str],
}

/// Folder layout and README for a language convention
#[derive(Debug, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Selector accepted by `--lang`
    pub name: &'static str,
    /// Human-readable language name
    pub title: &'static str,
    /// Relative folder paths, in creation order
    pub folders: &'static [&'static str],
    /// Body written verbatim to the project README
    pub readme: &'static str,
}

/// Every supported architecture pattern
pub static ARCHITECTURES: &[ArchitectureProfile] = &[
    ArchitectureProfile {
        name: "ddd",
        title: "Domain-Driven Design",
        folders: &[
            "domain/entities",
            "domain/value-objects",
            "domain/aggregates",
            "domain/repositories",
            "domain/services",
            "application/services",
            "application/dtos",
            "infrastructure/persistence",
            "infrastructure/external",
            "interfaces/api",
            "interfaces/web",
            "shared/common",
        ],
    },
    ArchitectureProfile {
        name: "clean",
        title: "Clean Architecture",
        folders: &[
            "entities",
            "usecases",
            "interfaces/controllers",
            "interfaces/presenters",
            "infrastructure/database",
            "infrastructure/external",
            "shared/common",
        ],
    },
    ArchitectureProfile {
        name: "layered",
        title: "Layered Architecture",
        folders: &["presentation", "business", "persistence", "database", "common"],
    },
    ArchitectureProfile {
        name: "mvc",
        title: "Model-View-Controller",
        folders: &["models", "views", "controllers", "public", "config", "utils"],
    },
];

/// Every supported language profile
pub static LANGUAGES: &[LanguageProfile] = &[
    LanguageProfile {
        name: "go",
        title: "Go",
        folders: &[
            "cmd/api",
            "internal/domain",
            "internal/application",
            "internal/infrastructure",
            "pkg/common",
            "api/http",
            "configs",
            "docs",
            "test",
        ],
        readme: "# Go Project Structure\n\n\
                 - cmd/: Application entrypoints\n\
                 - internal/: Private application code\n\
                 - pkg/: Public shared code\n\
                 - api/: API definitions\n\
                 - configs/: Configuration files",
    },
    LanguageProfile {
        name: "python",
        title: "Python",
        folders: &[
            "src/package_name",
            "src/package_name/core",
            "src/package_name/api",
            "src/package_name/models",
            "tests",
            "docs",
            "configs",
            "scripts",
        ],
        readme: "# Python Project Structure\n\n\
                 - src/: Source code\n\
                 - tests/: Test files\n\
                 - docs/: Documentation\n\
                 - configs/: Configuration files",
    },
    LanguageProfile {
        name: "java",
        title: "Java",
        folders: &[
            "src/main/java/com/example/domain",
            "src/main/java/com/example/application",
            "src/main/java/com/example/infrastructure",
            "src/main/java/com/example/interfaces",
            "src/main/resources",
            "src/test/java/com/example",
            "docs",
            "config",
        ],
        readme: "# Java Project Structure\n\n\
                 - src/main/java/: Application source code\n\
                 - src/main/resources/: Configuration and static resources\n\
                 - src/test/java/: Test sources\n\
                 - docs/: Documentation\n\
                 - config/: Configuration files",
    },
    LanguageProfile {
        name: "javascript",
        title: "JavaScript",
        folders: &[
            "src/controllers",
            "src/services",
            "src/models",
            "src/routes",
            "src/middlewares",
            "src/utils",
            "public",
            "config",
            "tests",
            "docs",
        ],
        readme: "# JavaScript Project Structure\n\n\
                 - src/: Application source code\n\
                 - public/: Static assets\n\
                 - config/: Configuration files\n\
                 - tests/: Test files\n\
                 - docs/: Documentation",
    },
];

/// Look up an architecture pattern by its selector name
///
/// # Errors
///
/// Returns [`Error::UnsupportedPattern`] if `name` is not one of
/// [`architecture_names`].
pub fn architecture(name: &str) -> Result<&'static ArchitectureProfile> {
    ARCHITECTURES
        .iter()
        .find(|profile| profile.name == name)
        .ok_or_else(|| Error::UnsupportedPattern {
            name: name.to_string(),
            available: architecture_names().join(", "),
        })
}

/// Look up a language profile by its selector name
///
/// # Errors
///
/// Returns [`Error::UnsupportedLanguage`] if `name` is not one of
/// [`language_names`].
pub fn language(name: &str) -> Result<&'static LanguageProfile> {
    LANGUAGES
        .iter()
        .find(|profile| profile.name == name)
        .ok_or_else(|| Error::UnsupportedLanguage {
            name: name.to_string(),
            available: language_names().join(", "),
        })
}

/// Supported architecture selectors, in catalog order
#[must_use]
pub fn architecture_names() -> Vec<&'static str> {
    ARCHITECTURES.iter().map(|profile| profile.name).collect()
}

/// Supported language selectors, in catalog order
#[must_use]
pub fn language_names() -> Vec<&'static str> {
    LANGUAGES.iter().map(|profile| profile.name).collect()
}
