use crate::domain::models::FileEntry;
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Extensions that are always binary; skipping them avoids probing files
/// the UTF-8 check would reject anyway.
const BINARY_EXTENSIONS: [&str; 8] = [
    ".exe", ".dll", ".so", ".pyd", ".jar", ".class", ".pyc", ".pyo",
];

const PROBE_LEN: usize = 512;

pub fn list_candidate_files(
    root: &Path,
    ignore_patterns: &[String],
) -> anyhow::Result<Vec<FileEntry>> {
    info!("Listing candidate files in: {}", root.display());
    debug!("Ignore patterns: {:?}", ignore_patterns);

    let mut result = Vec::new();

    for entry in walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Prune ignored directories before descending into them.
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !ignore_patterns.iter().any(|pat| name.contains(pat.as_str()))
        })
        .filter_map(Result::ok)
    {
        if entry.file_type().is_dir() || entry.file_type().is_symlink() {
            continue;
        }

        let path = entry.path();
        let path_str = path.to_string_lossy();

        if ignore_patterns.iter().any(|pat| path_str.contains(pat.as_str())) {
            debug!("Skipping ignored file: {}", path.display());
            continue;
        }

        if has_binary_extension(path) {
            debug!("Skipping known binary file: {}", path.display());
            continue;
        }

        if !is_text_file(path) {
            debug!("File not recognized as text: {}", path.display());
            continue;
        }

        let rel_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()));

        result.push(FileEntry {
            abs_path: path.to_path_buf(),
            rel_path,
            extension,
            included: false,
        });
    }

    info!("Found {} candidate files", result.len());
    Ok(result)
}

fn has_binary_extension(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    BINARY_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Probes the first 512 bytes for valid UTF-8. Decode failures and I/O
/// failures both classify the file as binary; a multibyte sequence cut off
/// exactly at the probe boundary still counts as text.
pub fn is_text_file(path: &Path) -> bool {
    let mut file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("Could not open {} for probing: {}", path.display(), e);
            return false;
        }
    };

    let mut buf = [0u8; PROBE_LEN];
    let mut filled = 0;

    loop {
        match file.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => {
                filled += n;
                if filled == buf.len() {
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!("Probe read failed for {}: {}", path.display(), e);
                return false;
            }
        }
    }

    match std::str::from_utf8(&buf[..filled]) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none() && filled == buf.len(),
    }
}

pub fn read_file_text(path: &Path) -> anyhow::Result<String> {
    debug!("Reading file contents: {}", path.display());
    let contents = fs::read_to_string(path)?;
    debug!("Read {} bytes from file", contents.len());
    Ok(contents)
}

/// Default save name, derived from the root directory's basename.
pub fn default_output_filename(root: &Path) -> String {
    let normalized = root.canonicalize().unwrap_or_else(|e| {
        warn!("Could not canonicalize {}: {}", root.display(), e);
        root.to_path_buf()
    });

    let basename = normalized
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "codebase".to_string());

    format!("{}_consolidated.txt", basename)
}
