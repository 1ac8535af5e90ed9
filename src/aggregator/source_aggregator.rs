//! Source directory aggregator implementation

use super::document::CombinedDocument;
use super::filter::EligibilityFilter;
use crate::config::{validate_config_result, AggregatorConfig};
use crate::storage::write_atomic;
use crate::{CopyCodeError, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateReport {
    /// Bundled file names, in output order
    pub files: Vec<String>,

    /// Size of the written document in bytes
    pub bytes_written: usize,

    /// Where the document was written
    pub output_path: PathBuf,
}

/// Bundles the eligible files of one directory into one document
pub struct Aggregator {
    config: AggregatorConfig,
    filter: EligibilityFilter,
}

impl Aggregator {
    /// Create an aggregator from a validated configuration
    pub fn new(config: AggregatorConfig) -> Result<Self> {
        validate_config_result(&config)?;
        let filter = EligibilityFilter::from_config(&config);
        Ok(Self { config, filter })
    }

    /// Eligible file names in output order, without reading any content
    pub fn collect(&self) -> Result<Vec<String>> {
        eligible_files(self.config.source_dir(), &self.filter)
    }

    /// Read every eligible file and build the final document text
    pub fn build_document(&self) -> Result<String> {
        let (_, text) = self.bundle()?;
        Ok(text)
    }

    /// Build the document and atomically replace the output file with it
    pub fn run(&self) -> Result<AggregateReport> {
        let (files, text) = self.bundle()?;

        let output_path = self.config.output_path().to_path_buf();
        write_atomic(&output_path, &text)?;

        tracing::info!(
            source = %self.config.source_dir().display(),
            output = %output_path.display(),
            files = files.len(),
            bytes = text.len(),
            "Wrote combined document"
        );

        Ok(AggregateReport {
            files,
            bytes_written: text.len(),
            output_path,
        })
    }

    fn bundle(&self) -> Result<(Vec<String>, String)> {
        let files = self.collect()?;
        let mut document = CombinedDocument::new();

        for name in &files {
            let path = self.config.source_dir().join(name);
            let content = read_text(&path)?;
            tracing::debug!(path = %path.display(), bytes = content.len(), "Read source file");
            document.push_block(name, &content);
        }

        Ok((files, document.finish()))
    }
}

/// Bundle `source_dir` into `output_path` with the default filter
pub fn aggregate(source_dir: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<()> {
    let config = AggregatorConfig::new(source_dir.as_ref(), output_path.as_ref());
    Aggregator::new(config)?.run()?;
    Ok(())
}

/// All entry names of `dir`, sorted byte-wise ascending.
///
/// Names are kept raw: an entry whose name is not UTF-8 is still listed.
/// Subdirectories are listed like files.
pub fn list_entry_names(dir: impl AsRef<Path>) -> Result<Vec<OsString>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| CopyCodeError::from_listing(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CopyCodeError::from_listing(dir, e))?;
        names.push(entry.file_name());
    }

    names.sort();
    Ok(names)
}

/// Sorted entry names of `dir` that pass `filter`.
///
/// Only a selected name has to be UTF-8, since it becomes a block header.
pub fn eligible_files(dir: impl AsRef<Path>, filter: &EligibilityFilter) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    let names = list_entry_names(dir)?;
    let entries = names.len();

    let eligible = filter
        .apply(names)
        .into_iter()
        .map(|raw| {
            raw.into_string().map_err(|raw| CopyCodeError::Decode {
                path: dir.join(raw),
            })
        })
        .collect::<Result<Vec<String>>>()?;

    tracing::debug!(
        dir = %dir.display(),
        entries,
        eligible = eligible.len(),
        "Listed source directory"
    );

    Ok(eligible)
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| CopyCodeError::from_read(path, e))?;
    String::from_utf8(bytes).map_err(|_| CopyCodeError::Decode {
        path: path.to_path_buf(),
    })
}
