//! Filesystem materializer
//!
//! Turns catalog folder lists into directories on disk. Folder creation is
//! best effort: a failing entry is recorded in the [`MaterializeReport`] and
//! the rest of the batch still runs. Nothing created here is ever removed.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::catalog::LanguageProfile;
use crate::error::{Error, FolderError, Result};

/// Marker file written into every generated folder
pub const PLACEHOLDER_FILE: &str = ".gitkeep";

/// README written at the project root for language profiles
pub const README_FILE: &str = "README.md";

/// Outcome of materializing one folder list
#[derive(Debug, Default)]
pub struct MaterializeReport {
    /// Folders that now exist with a placeholder, in input order
    pub created: Vec<PathBuf>,
    /// Entries that could not be materialized, in input order
    pub failures: Vec<FolderError>,
    /// README written at the project root, for language profiles
    pub readme: Option<PathBuf>,
}

impl MaterializeReport {
    /// Whether every entry was materialized
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Create the project root and any missing parents
///
/// An existing directory is not an error.
///
/// # Errors
///
/// Returns [`Error::RootCreation`] if the directory chain cannot be created.
pub fn create_root(root: &Path) -> Result<()> {
    fs::create_dir_all(root).map_err(|source| Error::RootCreation {
        path: root.to_path_buf(),
        source,
    })?;
    tracing::debug!(root = %root.display(), "project root ready");
    Ok(())
}

/// Create each folder under `root` and drop a placeholder file inside it
///
/// Existing folders are reused and existing placeholders are truncated.
/// Other files already present are left untouched.
pub fn materialize_folders(root: &Path, folders: &[&str]) -> MaterializeReport {
    let mut report = MaterializeReport::default();

    for folder in folders {
        match materialize_folder(root, folder) {
            Ok(path) => {
                tracing::debug!(folder = %path.display(), "folder created");
                report.created.push(path);
            }
            Err(err) => {
                tracing::debug!(error = %err, "folder skipped");
                report.failures.push(err);
            }
        }
    }

    tracing::info!(
        root = %root.display(),
        created = report.created.len(),
        failed = report.failures.len(),
        "materialized folder batch"
    );

    report
}

/// Write the README at the project root, replacing any existing one
///
/// # Errors
///
/// Returns [`Error::ReadmeWrite`] if the file cannot be written.
pub fn write_readme(root: &Path, contents: &str) -> Result<PathBuf> {
    let path = root.join(README_FILE);
    fs::write(&path, contents).map_err(|source| Error::ReadmeWrite {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(readme = %path.display(), "README written");
    Ok(path)
}

/// Materialize a language profile: its folders, then its README
///
/// # Errors
///
/// Returns [`Error::ReadmeWrite`] if the README cannot be written. Folder
/// failures are carried in the returned report, along with the README path.
pub fn materialize_language(root: &Path, profile: &LanguageProfile) -> Result<MaterializeReport> {
    let mut report = materialize_folders(root, profile.folders);
    report.readme = Some(write_readme(root, profile.readme)?);
    Ok(report)
}

fn materialize_folder(root: &Path, folder: &str) -> std::result::Result<PathBuf, FolderError> {
    if !is_contained(folder) {
        return Err(FolderError::EscapesRoot(folder.to_string()));
    }

    let path = root.join(folder);
    fs::create_dir_all(&path).map_err(|source| FolderError::CreateFolder {
        path: path.clone(),
        source,
    })?;

    fs::File::create(path.join(PLACEHOLDER_FILE)).map_err(|source| FolderError::Placeholder {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// A folder is contained when it names at least one plain directory and
/// never steps to a parent or absolute location
fn is_contained(folder: &str) -> bool {
    let path = Path::new(folder);
    path.components().any(|c| matches!(c, Component::Normal(_)))
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_containment() {
        assert!(is_contained("domain/entities"));
        assert!(is_contained("./configs"));
        assert!(!is_contained(""));
        assert!(!is_contained("."));
        assert!(!is_contained("../outside"));
        assert!(!is_contained("domain/../../outside"));
        assert!(!is_contained("/etc/app"));
    }

    #[test]
    fn test_materialize_creates_placeholders() {
        let temp_dir = TempDir::new().unwrap();
        let report = materialize_folders(temp_dir.path(), &["models", "interfaces/api"]);

        assert!(report.is_complete());
        assert_eq!(report.created.len(), 2);
        for folder in ["models", "interfaces/api"] {
            let placeholder = temp_dir.path().join(folder).join(PLACEHOLDER_FILE);
            assert!(placeholder.is_file(), "missing {}", placeholder.display());
            assert_eq!(fs::metadata(&placeholder).unwrap().len(), 0);
        }
        assert!(!temp_dir.path().join("interfaces").join(PLACEHOLDER_FILE).exists());
    }

    #[test]
    fn test_bad_entry_does_not_abort_batch() {
        let temp_dir = TempDir::new().unwrap();
        let report = materialize_folders(temp_dir.path(), &["models", "../escape", "views"]);

        assert_eq!(report.created.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0], FolderError::EscapesRoot(_)));
        assert!(temp_dir.path().join("views").is_dir());
    }

    #[test]
    fn test_folder_blocked_by_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("public"), "not a directory").unwrap();

        let report = materialize_folders(temp_dir.path(), &["public", "config"]);

        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0], FolderError::CreateFolder { .. }));
        assert!(temp_dir.path().join("config").join(PLACEHOLDER_FILE).is_file());
    }

    #[test]
    fn test_placeholder_failure_does_not_abort_batch() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("views").join(PLACEHOLDER_FILE)).unwrap();

        let report = materialize_folders(temp_dir.path(), &["models", "views", "utils"]);

        assert_eq!(report.created.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0], FolderError::Placeholder { .. }));
        assert!(temp_dir.path().join("utils").join(PLACEHOLDER_FILE).is_file());
    }

    #[test]
    fn test_language_report_carries_readme_path() {
        let temp_dir = TempDir::new().unwrap();
        let go = crate::catalog::language("go").unwrap();

        let report = materialize_language(temp_dir.path(), go).unwrap();

        assert_eq!(report.readme, Some(temp_dir.path().join(README_FILE)));
        assert!(materialize_folders(temp_dir.path(), &["docs"]).readme.is_none());
    }

    #[test]
    fn test_language_readme_failure_keeps_folders() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(README_FILE)).unwrap();
        let go = crate::catalog::language("go").unwrap();

        let err = materialize_language(temp_dir.path(), go).unwrap_err();

        assert!(matches!(err, Error::ReadmeWrite { .. }));
        assert!(temp_dir.path().join("cmd/api").join(PLACEHOLDER_FILE).is_file());
    }

    #[test]
    fn test_rerun_keeps_unrelated_files() {
        let temp_dir = TempDir::new().unwrap();
        materialize_folders(temp_dir.path(), &["models"]);
        let user_file = temp_dir.path().join("models").join("user.txt");
        fs::write(&user_file, "keep me").unwrap();

        let report = materialize_folders(temp_dir.path(), &["models"]);

        assert!(report.is_complete());
        assert_eq!(fs::read_to_string(&user_file).unwrap(), "keep me");
    }

    #[test]
    fn test_readme_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(README_FILE), "old contents").unwrap();

        let path = write_readme(temp_dir.path(), "# New").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "# New");
    }

    #[test]
    fn test_readme_failure_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing_root = temp_dir.path().join("does-not-exist");

        let err = write_readme(&missing_root, "# Text").unwrap_err();

        assert!(matches!(err, Error::ReadmeWrite { .. }));
    }

    #[test]
    fn test_create_root_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("nested").join("app");

        create_root(&root).unwrap();
        create_root(&root).unwrap();

        assert!(root.is_dir());
    }

    #[test]
    fn test_create_root_fails_on_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("app");
        fs::write(&root, "").unwrap();

        assert!(matches!(create_root(&root), Err(Error::RootCreation { .. })));
    }
}
