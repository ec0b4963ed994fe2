use std::path::PathBuf;

/// One candidate file discovered by a scan, relative to the scan root.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub abs_path: PathBuf,
    pub rel_path: PathBuf,
    pub extension: Option<String>,
    pub included: bool,
}

#[derive(Debug, Clone)]
pub struct ConsolidateConfig {
    pub root_path: String,
    pub profile: String,
    pub extension_filter: Option<String>,
    pub only: Vec<String>,
    pub skip: Vec<String>,
    pub output_path: Option<String>,
    pub clipboard: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Text(String),
    ReadError(String),
}

/// One header-delimited entry of the consolidated blob.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub label: String,
    pub body: SectionBody,
}

#[derive(Debug, Default, PartialEq)]
pub struct ConsolidatedOutput {
    pub sections: Vec<Section>,
}
