use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct FileCollectInput {
    pub input_dir: PathBuf,
    pub recursive: bool,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct FileCollectOutput {
    pub files: Vec<PathBuf>,
    pub total_size: u64,
    pub skipped_entries: u64,
}
