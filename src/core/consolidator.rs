use crate::domain::models::{ConsolidatedOutput, FileEntry, Section, SectionBody};
use log::{debug, warn};
use std::path::Path;

/// Builds the consolidated output from the selected entries, in input order.
///
/// The ignore filter is re-applied here in case the selection predates a
/// profile change. A failed read does not abort the batch; the section body
/// becomes an inline error placeholder instead.
pub fn build_consolidated_output<F>(
    selected: &[FileEntry],
    ignore_patterns: &[String],
    reader: F,
) -> ConsolidatedOutput
where
    F: Fn(&Path) -> anyhow::Result<String>,
{
    debug!("Consolidating {} selected files", selected.len());
    let mut sections = Vec::new();

    for entry in selected {
        let path_str = entry.abs_path.to_string_lossy();
        if ignore_patterns.iter().any(|pat| path_str.contains(pat.as_str())) {
            debug!("Skipping {} (matches ignore pattern)", path_str);
            continue;
        }

        let label = entry.rel_path.display().to_string();
        let body = match reader(&entry.abs_path) {
            Ok(content) => SectionBody::Text(content),
            Err(e) => {
                warn!("Error reading {}: {}", entry.abs_path.display(), e);
                SectionBody::ReadError(format!(
                    "Error reading {}: {}",
                    entry.abs_path.display(),
                    e
                ))
            }
        };

        sections.push(Section { label, body });
    }

    ConsolidatedOutput { sections }
}

/// Renders the output as one text blob, each section delimited by a
/// `--- <relative path> ---` header line and a trailing blank line.
pub fn render_output(output: &ConsolidatedOutput) -> String {
    let mut result = String::new();

    for section in &output.sections {
        result.push_str(&format!("--- {} ---\n", section.label));
        match &section.body {
            SectionBody::Text(content) => result.push_str(content),
            SectionBody::ReadError(message) => result.push_str(message),
        }
        result.push_str("\n\n");
    }

    result
}
