use crate::domain::models::FileEntry;
use log::debug;
use std::path::PathBuf;

/// Sentinel meaning "every extension". Filtering by it duplicates
/// select-all, so the command is reported as a no-op instead.
pub const ALL_EXTENSIONS: &str = "*.*";

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionCommand {
    SetInclusion { path: PathBuf, included: bool },
    SelectAll,
    DeselectAll,
    SelectByExtension { extension: String },
}

#[derive(Debug, PartialEq)]
pub enum CommandOutcome {
    Applied { changed: usize },
    Skipped { reason: String },
}

/// Owns the inclusion flags for one scan's candidate set. Rebuilt in full
/// whenever the root directory or ignore profile changes.
pub struct SelectionState {
    entries: Vec<FileEntry>,
}

impl SelectionState {
    pub fn new(entries: Vec<FileEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Included entries, in traversal order.
    pub fn selected(&self) -> Vec<FileEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.included)
            .cloned()
            .collect()
    }

    /// Sorted, deduplicated extensions present in the candidate set.
    pub fn extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = self
            .entries
            .iter()
            .filter_map(|entry| entry.extension.clone())
            .collect();
        extensions.sort();
        extensions.dedup();
        extensions
    }

    pub fn apply(&mut self, command: SelectionCommand) -> CommandOutcome {
        match command {
            SelectionCommand::SelectAll => CommandOutcome::Applied {
                changed: self.set_all(true),
            },
            SelectionCommand::DeselectAll => CommandOutcome::Applied {
                changed: self.set_all(false),
            },
            SelectionCommand::SetInclusion { path, included } => {
                match self.entries.iter_mut().find(|entry| entry.rel_path == path) {
                    Some(entry) => {
                        let changed = if entry.included != included {
                            entry.included = included;
                            1
                        } else {
                            0
                        };
                        CommandOutcome::Applied { changed }
                    }
                    None => CommandOutcome::Skipped {
                        reason: format!("no candidate file at {}", path.display()),
                    },
                }
            }
            SelectionCommand::SelectByExtension { extension } => {
                if extension == ALL_EXTENSIONS {
                    return CommandOutcome::Skipped {
                        reason: "selecting all extensions duplicates select-all; use select-all instead"
                            .to_string(),
                    };
                }

                // Exclusive: entries not matching the extension are forced off.
                let wanted = normalize_extension(&extension);
                let mut changed = 0;
                for entry in &mut self.entries {
                    let matches = entry.extension.as_deref() == Some(wanted.as_str());
                    if entry.included != matches {
                        entry.included = matches;
                        changed += 1;
                    }
                }

                debug!("Extension filter {} changed {} entries", wanted, changed);
                CommandOutcome::Applied { changed }
            }
        }
    }

    fn set_all(&mut self, included: bool) -> usize {
        let mut changed = 0;
        for entry in &mut self.entries {
            if entry.included != included {
                entry.included = included;
                changed += 1;
            }
        }
        changed
    }
}

fn normalize_extension(extension: &str) -> String {
    let trimmed = extension.trim();
    if trimmed.starts_with('.') {
        trimmed.to_lowercase()
    } else {
        format!(".{}", trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rel: &str, included: bool) -> FileEntry {
        let rel_path = PathBuf::from(rel);
        let extension = rel_path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()));
        FileEntry {
            abs_path: PathBuf::from("/project").join(rel),
            rel_path,
            extension,
            included,
        }
    }

    fn selected_paths(state: &SelectionState) -> Vec<String> {
        state
            .selected()
            .iter()
            .map(|e| e.rel_path.to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_select_all_and_deselect_all() {
        let mut state = SelectionState::new(vec![entry("a.py", false), entry("b.js", true)]);

        let outcome = state.apply(SelectionCommand::SelectAll);
        assert_eq!(outcome, CommandOutcome::Applied { changed: 1 });
        assert_eq!(selected_paths(&state), vec!["a.py", "b.js"]);

        let outcome = state.apply(SelectionCommand::DeselectAll);
        assert_eq!(outcome, CommandOutcome::Applied { changed: 2 });
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_set_inclusion_toggles_a_single_entry() {
        let mut state = SelectionState::new(vec![entry("a.py", false), entry("b.js", false)]);

        let outcome = state.apply(SelectionCommand::SetInclusion {
            path: PathBuf::from("b.js"),
            included: true,
        });

        assert_eq!(outcome, CommandOutcome::Applied { changed: 1 });
        assert_eq!(selected_paths(&state), vec!["b.js"]);
    }

    #[test]
    fn test_set_inclusion_on_unknown_path_is_skipped() {
        let mut state = SelectionState::new(vec![entry("a.py", false)]);

        let outcome = state.apply(SelectionCommand::SetInclusion {
            path: PathBuf::from("missing.py"),
            included: true,
        });

        assert!(matches!(outcome, CommandOutcome::Skipped { .. }));
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_select_by_extension_is_exclusive() {
        let mut state = SelectionState::new(vec![
            entry("x.py", false),
            entry("y.js", true),
            entry("z.py", true),
        ]);

        let outcome = state.apply(SelectionCommand::SelectByExtension {
            extension: ".py".to_string(),
        });

        // x.py turned on, y.js forced off; z.py untouched.
        assert_eq!(outcome, CommandOutcome::Applied { changed: 2 });
        assert_eq!(selected_paths(&state), vec!["x.py", "z.py"]);
    }

    #[test]
    fn test_select_by_extension_normalizes_case_and_dot() {
        let mut state = SelectionState::new(vec![entry("x.py", false), entry("y.js", false)]);

        state.apply(SelectionCommand::SelectByExtension {
            extension: "PY".to_string(),
        });

        assert_eq!(selected_paths(&state), vec!["x.py"]);
    }

    #[test]
    fn test_select_by_wildcard_extension_is_a_noop() {
        let mut state = SelectionState::new(vec![entry("a.py", true), entry("b.js", false)]);

        let outcome = state.apply(SelectionCommand::SelectByExtension {
            extension: ALL_EXTENSIONS.to_string(),
        });

        assert!(matches!(outcome, CommandOutcome::Skipped { .. }));
        assert_eq!(selected_paths(&state), vec!["a.py"]);
    }

    #[test]
    fn test_extensions_are_sorted_and_deduplicated() {
        let state = SelectionState::new(vec![
            entry("z.py", false),
            entry("a.js", false),
            entry("b.py", false),
            entry("README", false),
        ]);

        assert_eq!(state.extensions(), vec![".js", ".py"]);
    }
}
