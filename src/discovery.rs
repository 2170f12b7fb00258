// src/discovery.rs
use crate::config::Config;
use crate::error::{RankError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One discovered corpus file: parent directory plus filename.
///
/// The filename doubles as the document identifier after lower-casing,
/// so it is kept separate from the directory instead of storing one
/// joined path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFile {
    pub dir: PathBuf,
    pub name: String,
}

impl DocFile {
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }
}

/// Runs the corpus discovery pipeline.
///
/// Walks the corpus root recursively in filename order, keeps regular
/// files whose names do not begin with a dot, then applies the config
/// include/exclude filters.
///
/// # Errors
/// Returns `EmptyCorpus` if no files survive — there is no meaningful
/// rank to compute over zero documents.
pub fn discover(config: &Config) -> Result<Vec<DocFile>> {
    let raw_files = walk_corpus(&config.root, config.verbose);
    let final_files = filter_config(raw_files, config);

    if final_files.is_empty() {
        return Err(RankError::EmptyCorpus(config.root.clone()));
    }
    Ok(final_files)
}

fn walk_corpus(root: &Path, verbose: bool) -> Vec<DocFile> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    let (files, error_count) = accumulate_walker(walker);
    if error_count > 0 && verbose {
        eprintln!("WARN: Encountered {error_count} errors during corpus walk");
    }
    files
}

fn accumulate_walker<I>(walker: I) -> (Vec<DocFile>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut files = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if !entry.file_type().is_file() {
                    continue;
                }
                let name = entry.file_name().to_string_lossy().into_owned();
                if name.starts_with('.') {
                    continue;
                }
                let dir = entry
                    .path()
                    .parent()
                    .unwrap_or_else(|| Path::new("."))
                    .to_path_buf();
                files.push(DocFile { dir, name });
            }
            Err(_) => errors += 1,
        }
    }
    (files, errors)
}

/// Normalizes a corpus-relative path to forward slashes for pattern
/// matching (cross-platform).
fn relative_key(file: &DocFile, root: &Path) -> String {
    let full = file.path();
    let rel = full.strip_prefix(root).unwrap_or(&full);
    rel.to_string_lossy().replace('\\', "/")
}

fn filter_config(mut files: Vec<DocFile>, config: &Config) -> Vec<DocFile> {
    if !config.include_patterns.is_empty() {
        files.retain(|f| {
            let s = relative_key(f, &config.root);
            config.include_patterns.iter().any(|re| re.is_match(&s))
        });
    }

    if !config.exclude_patterns.is_empty() {
        files.retain(|f| {
            let s = relative_key(f, &config.root);
            !config.exclude_patterns.iter().any(|re| re.is_match(&s))
        });
    }

    files
}
