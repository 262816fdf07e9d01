//! Catalog listing command

use console::style;

use crate::catalog::{ARCHITECTURES, LANGUAGES};

/// Print every architecture pattern and language profile
#[derive(Debug)]
pub struct ListCommand;

impl ListCommand {
    /// Execute the command
    pub fn execute() {
        print!("{}", Self::render(true));
    }

    /// Render the listing; `styled` toggles terminal colours
    #[must_use]
    pub fn render(styled: bool) -> String {
        let heading = |text: &str| {
            if styled {
                style(text).bold().to_string()
            } else {
                text.to_string()
            }
        };
        let name = |text: &str| {
            if styled {
                style(text).cyan().bold().to_string()
            } else {
                text.to_string()
            }
        };

        let mut out = String::new();

        out.push_str(&heading("Architecture types (--type):"));
        out.push('\n');
        for profile in ARCHITECTURES {
            out.push_str(&format!("  {} - {}\n", name(profile.name), profile.title));
            for folder in profile.folders {
                out.push_str(&format!("      {folder}/\n"));
            }
        }

        out.push('\n');
        out.push_str(&heading("Languages (--lang):"));
        out.push('\n');
        for profile in LANGUAGES {
            out.push_str(&format!("  {} - {}\n", name(profile.name), profile.title));
            for folder in profile.folders {
                out.push_str(&format!("      {folder}/\n"));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_every_selector() {
        let listing = ListCommand::render(false);
        for selector in ["ddd", "clean", "layered", "mvc", "go", "python", "java", "javascript"] {
            assert!(listing.contains(&format!("  {selector} - ")), "missing {selector}");
        }
    }

    #[test]
    fn test_render_lists_folders() {
        let listing = ListCommand::render(false);
        assert!(listing.contains("      domain/value-objects/\n"));
        assert!(listing.contains("      src/package_name/core/\n"));
        assert!(listing.starts_with("Architecture types (--type):\n"));
    }
}
